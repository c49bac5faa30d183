//! Host doubles shared by the integration tests

#![allow(dead_code)]

use atom_motion::prelude::*;
use atom_motion::{
    ActorDelegate, GhostBitmap, GhostVisual, PopupImpl, ScenePlatform, SurfaceChrome, TopLevelHandle,
    VisualRef,
};
use atom_core::Rect;
use std::cell::RefCell;
use std::rc::Rc;

/// Install a test subscriber once; `RUST_LOG=atom_motion=trace` shows the lifecycle.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub struct Control {
    pub bounds: Rect,
    pub desired: Size,
    pub origin: RelativePoint,
    pub values: Vec<(AnimatedProperty, PropertyValue)>,
    pub transitions_enabled: bool,
}

impl Control {
    pub fn shared(width: f64, height: f64) -> Rc<RefCell<Control>> {
        Rc::new(RefCell::new(Control {
            bounds: Rect::new(40.0, 60.0, width, height),
            desired: Size::new(width, height),
            origin: RelativePoint::CENTER,
            values: Vec::new(),
            transitions_enabled: true,
        }))
    }

    pub fn last(&self, property: AnimatedProperty) -> Option<PropertyValue> {
        self.values
            .iter()
            .rev()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| *v)
    }
}

impl Visual for Control {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn desired_size(&self) -> Size {
        self.desired
    }

    fn measure(&mut self, _available: Size) {
        self.desired = self.bounds.size;
    }

    fn set_position(&mut self, position: Point) {
        self.bounds.origin = position;
    }

    fn render_transform_origin(&self) -> RelativePoint {
        self.origin
    }

    fn set_render_transform_origin(&mut self, origin: RelativePoint) {
        self.origin = origin;
    }

    fn set_motion_value(&mut self, property: AnimatedProperty, value: &PropertyValue) {
        self.values.push((property, *value));
    }

    fn render_snapshot(&self) -> Option<GhostBitmap> {
        Some(GhostBitmap::new(self.bounds.size, vec![255u8; 4]))
    }

    fn top_level(&self) -> Option<TopLevelHandle> {
        Some(TopLevelHandle(7))
    }
}

impl TransitionGate for Control {
    fn enable_transitions(&mut self) {
        self.transitions_enabled = true;
    }

    fn disable_transitions(&mut self) {
        self.transitions_enabled = false;
    }

    fn transitions_enabled(&self) -> bool {
        self.transitions_enabled
    }
}

#[derive(Debug, Default)]
pub struct Surface {
    pub chrome: Option<SurfaceChrome>,
    pub geometry: Option<(Point, Size)>,
    pub open: bool,
    pub disposes: usize,
}

struct SurfacePopup {
    surface: Rc<RefCell<Surface>>,
}

impl PopupImpl for SurfacePopup {
    fn configure(&mut self, chrome: SurfaceChrome) {
        self.surface.borrow_mut().chrome = Some(chrome);
    }

    fn move_and_resize(&mut self, position: Point, size: Size) {
        self.surface.borrow_mut().geometry = Some((position, size));
    }

    fn show(&mut self) {
        self.surface.borrow_mut().open = true;
    }

    fn hide(&mut self) {
        self.surface.borrow_mut().open = false;
    }

    fn dispose(&mut self) {
        self.surface.borrow_mut().disposes += 1;
    }
}

/// Platform that records every surface it creates
#[derive(Clone, Default)]
pub struct Platform {
    pub surfaces: Rc<RefCell<Vec<Rc<RefCell<Surface>>>>>,
}

impl Platform {
    pub fn surface_count(&self) -> usize {
        self.surfaces.borrow().len()
    }

    pub fn surface(&self, index: usize) -> Rc<RefCell<Surface>> {
        self.surfaces.borrow()[index].clone()
    }
}

impl ScenePlatform for Platform {
    fn create_popup(&self, _parent: Option<TopLevelHandle>) -> Box<dyn PopupImpl> {
        let surface = Rc::new(RefCell::new(Surface::default()));
        self.surfaces.borrow_mut().push(surface.clone());
        Box::new(SurfacePopup { surface })
    }
}

/// Delegate that keeps a typed handle to every ghost it builds
#[derive(Clone, Default)]
pub struct RecordingDelegate {
    pub ghosts: Rc<RefCell<Vec<Rc<RefCell<GhostVisual>>>>>,
}

impl RecordingDelegate {
    pub fn ghost(&self, index: usize) -> Rc<RefCell<GhostVisual>> {
        self.ghosts.borrow()[index].clone()
    }
}

impl ActorDelegate for RecordingDelegate {
    fn build_ghost(&self, target: &TargetRef) -> VisualRef {
        let ghost = Rc::new(RefCell::new(GhostVisual::new(target)));
        self.ghosts.borrow_mut().push(ghost.clone());
        ghost
    }

    fn top_level_ghost_position(&self, target: &TargetRef) -> Point {
        target.borrow().bounds().origin
    }
}
