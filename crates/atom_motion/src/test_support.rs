//! Host doubles for unit tests

use crate::host::{GhostBitmap, PopupImpl, ScenePlatform, SurfaceChrome, TopLevelHandle, TransitionGate, Visual};
use atom_animation::{AnimatedProperty, PropertyValue};
use atom_core::{Point, Rect, RelativePoint, Size};
use std::cell::RefCell;
use std::rc::Rc;

pub struct TestTarget {
    pub bounds: Rect,
    pub desired: Size,
    pub natural: Size,
    pub measure_calls: usize,
    pub origin: RelativePoint,
    pub values: Vec<(AnimatedProperty, PropertyValue)>,
    pub transitions_enabled: bool,
    pub gate_toggles: usize,
    pub unsupported: Vec<AnimatedProperty>,
}

impl Default for TestTarget {
    fn default() -> Self {
        Self {
            bounds: Rect::new(10.0, 20.0, 100.0, 40.0),
            desired: Size::new(100.0, 40.0),
            natural: Size::new(100.0, 40.0),
            measure_calls: 0,
            origin: RelativePoint::CENTER,
            values: Vec::new(),
            transitions_enabled: true,
            gate_toggles: 0,
            unsupported: Vec::new(),
        }
    }
}

impl TestTarget {
    pub fn shared() -> Rc<RefCell<TestTarget>> {
        Rc::new(RefCell::new(TestTarget::default()))
    }

    pub fn shared_with(f: impl FnOnce(&mut TestTarget)) -> Rc<RefCell<TestTarget>> {
        let mut target = TestTarget::default();
        f(&mut target);
        Rc::new(RefCell::new(target))
    }

    pub fn last_value(&self, property: AnimatedProperty) -> Option<PropertyValue> {
        self.values
            .iter()
            .rev()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| *v)
    }
}

impl Visual for TestTarget {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn desired_size(&self) -> Size {
        self.desired
    }

    fn measure(&mut self, _available: Size) {
        self.measure_calls += 1;
        self.desired = self.natural;
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

    fn supports_motion_property(&self, property: AnimatedProperty) -> bool {
        !self.unsupported.contains(&property)
    }

    fn set_motion_value(&mut self, property: AnimatedProperty, value: &PropertyValue) {
        self.values.push((property, *value));
    }

    fn render_snapshot(&self) -> Option<GhostBitmap> {
        Some(GhostBitmap::new(self.desired, vec![0u8; 4]))
    }

    fn top_level(&self) -> Option<TopLevelHandle> {
        Some(TopLevelHandle(1))
    }
}

impl TransitionGate for TestTarget {
    fn enable_transitions(&mut self) {
        self.transitions_enabled = true;
        self.gate_toggles += 1;
    }

    fn disable_transitions(&mut self) {
        self.transitions_enabled = false;
        self.gate_toggles += 1;
    }

    fn transitions_enabled(&self) -> bool {
        self.transitions_enabled
    }
}

#[derive(Debug, Default)]
pub struct PopupLog {
    pub created: usize,
    pub chrome: Option<SurfaceChrome>,
    pub geometry: Option<(Point, Size)>,
    pub shows: usize,
    pub hides: usize,
    pub disposes: usize,
}

pub struct TestPopup {
    log: Rc<RefCell<PopupLog>>,
}

impl TestPopup {
    pub fn new(log: Rc<RefCell<PopupLog>>) -> Self {
        log.borrow_mut().created += 1;
        Self { log }
    }
}

impl PopupImpl for TestPopup {
    fn configure(&mut self, chrome: SurfaceChrome) {
        self.log.borrow_mut().chrome = Some(chrome);
    }

    fn move_and_resize(&mut self, position: Point, size: Size) {
        self.log.borrow_mut().geometry = Some((position, size));
    }

    fn show(&mut self) {
        self.log.borrow_mut().shows += 1;
    }

    fn hide(&mut self) {
        self.log.borrow_mut().hides += 1;
    }

    fn dispose(&mut self) {
        self.log.borrow_mut().disposes += 1;
    }
}

#[derive(Default)]
pub struct TestPlatform {
    pub log: Rc<RefCell<PopupLog>>,
}

impl ScenePlatform for TestPlatform {
    fn create_popup(&self, _parent: Option<TopLevelHandle>) -> Box<dyn PopupImpl> {
        Box::new(TestPopup::new(self.log.clone()))
    }
}
