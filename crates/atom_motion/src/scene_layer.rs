//! Scene layer
//!
//! A transparent top-level overlay that hosts one ghost while its motion
//! runs. The layer never takes input and carries no window decorations.

use crate::host::{PopupImpl, SurfaceChrome, TopLevelHandle, VisualRef};
use atom_core::{Point, Size};

/// Overlay surface hosting a single ghost.
pub struct SceneLayer {
    parent: Option<TopLevelHandle>,
    popup: Box<dyn PopupImpl>,
    motion_target: Option<VisualRef>,
    position: Point,
    size: Size,
    width: Option<f64>,
    height: Option<f64>,
    min_size: Size,
    max_size: Size,
    is_open: bool,
    disposed: bool,
}

impl SceneLayer {
    pub fn new(parent: Option<TopLevelHandle>, mut popup: Box<dyn PopupImpl>) -> Self {
        popup.configure(SurfaceChrome::OVERLAY);
        Self {
            parent,
            popup,
            motion_target: None,
            position: Point::ZERO,
            size: Size::ZERO,
            width: None,
            height: None,
            min_size: Size::ZERO,
            max_size: Size::INFINITY,
            is_open: false,
            disposed: false,
        }
    }

    pub fn parent(&self) -> Option<TopLevelHandle> {
        self.parent
    }

    /// Host `ghost` as the layer's only child.
    pub fn set_motion_target(&mut self, ghost: VisualRef) {
        if self.motion_target.is_some() {
            tracing::warn!("scene layer already hosts a ghost, replacing it");
        }
        self.motion_target = Some(ghost);
    }

    pub fn motion_target(&self) -> Option<&VisualRef> {
        self.motion_target.as_ref()
    }

    pub fn move_and_resize(&mut self, position: Point, size: Size) {
        if self.disposed {
            return;
        }
        self.position = position;
        self.size = size;
        self.width = Some(size.width);
        self.height = Some(size.height);
        self.popup.move_and_resize(position, size);
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn set_min_size(&mut self, min: Size) {
        self.min_size = min;
    }

    pub fn set_max_size(&mut self, max: Size) {
        self.max_size = max;
    }

    /// Explicit dimensions win; otherwise the ghost's desired size is used.
    /// The result is clamped to the layer's min/max size.
    pub fn measure_override(&self, available: Size) -> Size {
        let content = self
            .motion_target
            .as_ref()
            .map(|ghost| ghost.borrow().desired_size())
            .unwrap_or(Size::ZERO);
        let width = self.width.unwrap_or(content.width.min(available.width));
        let height = self.height.unwrap_or(content.height.min(available.height));
        Size::new(width, height).clamp(self.min_size, self.max_size)
    }

    /// Open the surface. Hosted visuals that capture bitmaps do so now.
    pub fn show(&mut self) {
        if self.disposed || self.is_open {
            return;
        }
        if let Some(ghost) = &self.motion_target {
            let mut ghost = ghost.borrow_mut();
            if let Some(capture) = ghost.as_capture_ghost_bitmap() {
                capture.capture_ghost_bitmap();
            }
        }
        self.popup.show();
        self.is_open = true;
    }

    pub fn hide(&mut self) {
        if self.disposed || !self.is_open {
            return;
        }
        self.popup.hide();
        self.is_open = false;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Release the native surface. Safe to call more than once.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.hide();
        self.popup.dispose();
        self.motion_target = None;
        self.disposed = true;
        tracing::trace!("scene layer disposed");
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl Drop for SceneLayer {
    fn drop(&mut self) {
        self.dispose();
    }
}
