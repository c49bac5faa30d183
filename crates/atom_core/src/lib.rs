//! AtomUI Core Primitives
//!
//! Foundational types shared by the AtomUI animation and motion crates:
//!
//! - **Geometry**: points, sizes, rects, thickness and relative points
//! - **Signals**: push-based observable values with conjunction aggregation
//! - **Event Dispatch**: typed lifecycle event routing
//!
//! Everything here is single-threaded; motions run on the UI thread only.

pub mod events;
pub mod geometry;
pub mod signal;

pub use events::{Event, EventDispatcher, EventHandler};
pub use geometry::{Point, Rect, RelativePoint, RelativeUnit, Size, Thickness};
pub use signal::{combine_all, Signal, SubscriptionId};
