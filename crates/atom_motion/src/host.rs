//! Host framework contracts
//!
//! The motion scene never touches a concrete widget toolkit. Everything it
//! needs from the host (layout state, property sinks, top-level surfaces) is
//! expressed by the traits in this module.

use atom_animation::{AnimatedProperty, PropertyValue};
use atom_core::{Point, Rect, RelativePoint, Size};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to a host visual
pub type VisualRef = Rc<RefCell<dyn Visual>>;

/// Shared handle to an animatable host control
pub type TargetRef = Rc<RefCell<dyn MotionTarget>>;

/// Opaque handle to a native top-level window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TopLevelHandle(pub u64);

/// Rendered pixels of a visual, used as the ghost's content.
#[derive(Clone, Debug, PartialEq)]
pub struct GhostBitmap {
    /// Pixel size of the bitmap.
    pub size: Size,
    /// Premultiplied RGBA8 pixels.
    pub pixels: Rc<[u8]>,
}

impl GhostBitmap {
    pub fn new(size: Size, pixels: impl Into<Rc<[u8]>>) -> Self {
        Self {
            size,
            pixels: pixels.into(),
        }
    }
}

/// A node of the host's visual tree.
pub trait Visual {
    /// Arranged bounds relative to the parent.
    fn bounds(&self) -> Rect;

    /// Size computed by the last measure pass. Zero if never measured.
    fn desired_size(&self) -> Size;

    /// Run a measure pass against `available`, updating the desired size.
    fn measure(&mut self, available: Size);

    /// Position within the parent, if the visual is attached.
    fn position_in_parent(&self) -> Option<Point> {
        Some(self.bounds().origin)
    }

    /// Place the visual at `position` within its current parent.
    fn set_position(&mut self, position: Point);

    fn render_transform_origin(&self) -> RelativePoint;

    fn set_render_transform_origin(&mut self, origin: RelativePoint);

    /// Whether the visual exposes `property` as an animatable value.
    fn supports_motion_property(&self, _property: AnimatedProperty) -> bool {
        true
    }

    /// Receive an animated value.
    fn set_motion_value(&mut self, property: AnimatedProperty, value: &PropertyValue);

    /// Render the visual into a bitmap.
    fn render_snapshot(&self) -> Option<GhostBitmap> {
        None
    }

    /// Native top-level the visual is attached to.
    fn top_level(&self) -> Option<TopLevelHandle> {
        None
    }

    /// Capability query for visuals that snapshot a source when shown.
    fn as_capture_ghost_bitmap(&mut self) -> Option<&mut dyn CaptureGhostBitmap> {
        None
    }
}

/// Toggles the host's implicit property transitions on a control.
///
/// Motions disable ambient transitions while they drive a control so the two
/// never fight over the same property.
pub trait TransitionGate {
    fn enable_transitions(&mut self);

    fn disable_transitions(&mut self);

    fn transitions_enabled(&self) -> bool;
}

/// A control a motion can be played on.
pub trait MotionTarget: Visual + TransitionGate {}

impl<T: Visual + TransitionGate> MotionTarget for T {}

/// Visuals that capture a bitmap of their source when their surface opens.
pub trait CaptureGhostBitmap {
    fn capture_ghost_bitmap(&mut self);
}

/// Window chrome requested for a popup surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceChrome {
    pub borderless: bool,
    pub shadow: bool,
    /// Whether the surface takes part in input hit testing.
    pub hit_test_visible: bool,
    pub transparent: bool,
}

impl SurfaceChrome {
    /// Chrome of a motion overlay: no decorations, never receives input.
    pub const OVERLAY: SurfaceChrome = SurfaceChrome {
        borderless: true,
        shadow: false,
        hit_test_visible: false,
        transparent: true,
    };
}

/// Native popup surface backing a scene layer.
pub trait PopupImpl {
    fn configure(&mut self, chrome: SurfaceChrome);

    /// Position is in screen coordinates of the parent top-level.
    fn move_and_resize(&mut self, position: Point, size: Size);

    fn show(&mut self);

    fn hide(&mut self);

    /// Release the native surface. Called at most once.
    fn dispose(&mut self);
}

/// Factory for native surfaces.
pub trait ScenePlatform {
    fn create_popup(&self, parent: Option<TopLevelHandle>) -> Box<dyn PopupImpl>;
}

/// Per-actor hooks for building and placing the ghost.
pub trait ActorDelegate {
    /// Build the stand-in visual animated in place of `target`.
    fn build_ghost(&self, target: &TargetRef) -> VisualRef;

    /// Where the ghost starts, in top-level coordinates.
    fn top_level_ghost_position(&self, target: &TargetRef) -> Point;
}
