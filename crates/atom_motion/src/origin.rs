//! Scoped render-transform origin override

use crate::host::{MotionTarget, TargetRef};
use atom_core::RelativePoint;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Overrides a target's render-transform origin for as long as it lives.
///
/// The saved origin is written back when the guard is released or dropped.
/// The guard holds the target weakly; a target that is already gone has
/// nothing left to restore.
pub struct TransformOriginGuard {
    target: Weak<RefCell<dyn MotionTarget>>,
    saved: RelativePoint,
}

impl TransformOriginGuard {
    /// Save the target's current origin and replace it with `origin`.
    pub fn engage(target: &TargetRef, origin: RelativePoint) -> Self {
        let saved = {
            let mut target = target.borrow_mut();
            let saved = target.render_transform_origin();
            target.set_render_transform_origin(origin);
            saved
        };
        tracing::trace!(?saved, ?origin, "render transform origin overridden");
        Self {
            target: Rc::downgrade(target),
            saved,
        }
    }

    /// Origin that will be restored
    pub fn saved_origin(&self) -> RelativePoint {
        self.saved
    }

    /// Restore the saved origin now.
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for TransformOriginGuard {
    fn drop(&mut self) {
        let Some(target) = self.target.upgrade() else {
            return;
        };
        match target.try_borrow_mut() {
            Ok(mut target) => target.set_render_transform_origin(self.saved),
            Err(_) => {
                tracing::warn!(saved = ?self.saved, "motion target busy, render transform origin not restored")
            }
        };
    }
}
