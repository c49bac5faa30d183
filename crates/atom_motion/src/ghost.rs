//! Ghost visuals
//!
//! A ghost is the stand-in a scene layer animates instead of the real
//! control. It paints a bitmap snapshot of its source taken when the layer
//! opens, so the control itself stays untouched in the visual tree.

use crate::host::{
    ActorDelegate, CaptureGhostBitmap, GhostBitmap, MotionTarget, TargetRef, TopLevelHandle, Visual,
    VisualRef,
};
use atom_animation::{AnimatedProperty, PropertyValue, TransformOperations};
use atom_core::{Point, Rect, RelativePoint, Size, Thickness};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Snapshot stand-in for a motion target.
pub struct GhostVisual {
    source: Weak<RefCell<dyn MotionTarget>>,
    source_size: Size,
    shadow_inset: Thickness,
    desired: Size,
    position: Point,
    width: Option<f64>,
    height: Option<f64>,
    opacity: f64,
    transform: TransformOperations,
    origin: RelativePoint,
    bitmap: Option<GhostBitmap>,
}

impl GhostVisual {
    pub fn new(source: &TargetRef) -> Self {
        let source_size = {
            let source = source.borrow();
            let desired = source.desired_size();
            if desired.is_zero() {
                source.bounds().size
            } else {
                desired
            }
        };
        Self {
            source: Rc::downgrade(source),
            source_size,
            shadow_inset: Thickness::ZERO,
            desired: Size::ZERO,
            position: Point::ZERO,
            width: None,
            height: None,
            opacity: 1.0,
            transform: TransformOperations::IDENTITY,
            origin: RelativePoint::CENTER,
            bitmap: None,
        }
    }

    /// Extra room around the snapshot for the source's drop shadow
    pub fn with_shadow_inset(mut self, inset: Thickness) -> Self {
        self.shadow_inset = inset;
        self
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn transform(&self) -> TransformOperations {
        self.transform
    }

    pub fn bitmap(&self) -> Option<&GhostBitmap> {
        self.bitmap.as_ref()
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

impl Visual for GhostVisual {
    fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, self.desired)
    }

    fn desired_size(&self) -> Size {
        self.desired
    }

    fn measure(&mut self, _available: Size) {
        let content = Size::new(
            self.width.unwrap_or(self.source_size.width),
            self.height.unwrap_or(self.source_size.height),
        );
        self.desired = content.inflate(self.shadow_inset);
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn render_transform_origin(&self) -> RelativePoint {
        self.origin
    }

    fn set_render_transform_origin(&mut self, origin: RelativePoint) {
        self.origin = origin;
    }

    fn set_motion_value(&mut self, property: AnimatedProperty, value: &PropertyValue) {
        match (property, value) {
            (AnimatedProperty::Opacity, PropertyValue::Double(opacity)) => self.opacity = *opacity,
            (AnimatedProperty::Width, PropertyValue::Double(width)) => self.width = Some(*width),
            (AnimatedProperty::Height, PropertyValue::Double(height)) => self.height = Some(*height),
            (AnimatedProperty::RenderTransform, PropertyValue::Transform(transform)) => {
                self.transform = *transform
            }
            (property, value) => {
                tracing::warn!(%property, ?value, "ghost ignored mistyped motion value")
            }
        }
    }

    fn render_snapshot(&self) -> Option<GhostBitmap> {
        self.bitmap.clone()
    }

    fn top_level(&self) -> Option<TopLevelHandle> {
        let source = self.source.upgrade()?;
        let top_level = source.try_borrow().ok()?.top_level();
        top_level
    }

    fn as_capture_ghost_bitmap(&mut self) -> Option<&mut dyn CaptureGhostBitmap> {
        Some(self)
    }
}

impl CaptureGhostBitmap for GhostVisual {
    fn capture_ghost_bitmap(&mut self) {
        let Some(source) = self.source.upgrade() else {
            tracing::debug!("ghost source dropped before capture");
            return;
        };
        let snapshot = match source.try_borrow() {
            Ok(source) => source.render_snapshot(),
            Err(_) => {
                tracing::warn!("ghost source busy, snapshot skipped");
                None
            }
        };
        self.bitmap = snapshot;
    }
}

/// Default delegate: snapshot ghosts placed at the target's arranged position.
#[derive(Clone, Copy, Debug, Default)]
pub struct SnapshotGhostDelegate {
    pub shadow_inset: Thickness,
}

impl ActorDelegate for SnapshotGhostDelegate {
    fn build_ghost(&self, target: &TargetRef) -> VisualRef {
        Rc::new(RefCell::new(GhostVisual::new(target).with_shadow_inset(self.shadow_inset)))
    }

    fn top_level_ghost_position(&self, target: &TargetRef) -> Point {
        let target = target.borrow();
        let origin = target.bounds().origin;
        origin.offset(-self.shadow_inset.left, -self.shadow_inset.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestTarget;

    #[test]
    fn test_unmeasured_ghost_has_zero_size() {
        let target: TargetRef = TestTarget::shared();
        let mut ghost = GhostVisual::new(&target).with_shadow_inset(Thickness::uniform(4.0));

        assert_eq!(ghost.desired_size(), Size::ZERO);
        ghost.measure(Size::INFINITY);
        assert_eq!(ghost.desired_size(), Size::new(108.0, 48.0));
    }

    #[test]
    fn test_motion_values_land_on_ghost() {
        let target: TargetRef = TestTarget::shared();
        let mut ghost = GhostVisual::new(&target);

        ghost.set_motion_value(AnimatedProperty::Opacity, &PropertyValue::Double(0.4));
        ghost.set_motion_value(
            AnimatedProperty::RenderTransform,
            &PropertyValue::Transform(TransformOperations::scale_uniform(0.5)),
        );
        ghost.set_motion_value(AnimatedProperty::Opacity, &PropertyValue::Transform(TransformOperations::IDENTITY));

        assert_eq!(ghost.opacity(), 0.4);
        assert_eq!(ghost.transform(), TransformOperations::scale_uniform(0.5));
    }

    #[test]
    fn test_capture_snapshots_source() {
        let target: TargetRef = TestTarget::shared();
        let mut ghost = GhostVisual::new(&target);
        assert!(ghost.bitmap().is_none());

        ghost
            .as_capture_ghost_bitmap()
            .expect("ghost captures bitmaps")
            .capture_ghost_bitmap();
        assert_eq!(ghost.bitmap().map(|b| b.size), Some(Size::new(100.0, 40.0)));
    }

    #[test]
    fn test_delegate_offsets_by_shadow() {
        let target: TargetRef = TestTarget::shared();
        let delegate = SnapshotGhostDelegate {
            shadow_inset: Thickness::uniform(5.0),
        };
        assert_eq!(delegate.top_level_ghost_position(&target), Point::new(5.0, 15.0));
    }
}
