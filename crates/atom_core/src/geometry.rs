//! Geometry primitives shared by the motion scene
//!
//! All coordinates are logical pixels in `f64`, matching the host framework's
//! layout units.

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset the point by a delta
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Unconstrained size used to force a measure pass
    pub const INFINITY: Size = Size {
        width: f64::INFINITY,
        height: f64::INFINITY,
    };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when both dimensions are zero (a visual that was never measured)
    pub fn is_zero(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Grow the size by the horizontal and vertical extent of a thickness
    pub fn inflate(&self, thickness: Thickness) -> Self {
        Size::new(
            self.width + thickness.horizontal(),
            self.height + thickness.vertical(),
        )
    }

    /// Clamp each dimension into `[min, max]`
    pub fn clamp(&self, min: Size, max: Size) -> Self {
        Size::new(
            self.width.max(min.width).min(max.width),
            self.height.max(min.height).min(max.height),
        )
    }

    /// Convert to a Rect at the origin (0, 0)
    pub const fn to_rect(self) -> Rect {
        Rect {
            origin: Point::ZERO,
            size: self,
        }
    }
}

impl From<Size> for Rect {
    /// Convert Size to Rect at origin (0, 0)
    fn from(size: Size) -> Self {
        Rect {
            origin: Point::ZERO,
            size,
        }
    }
}

/// 2D rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn x(&self) -> f64 {
        self.origin.x
    }

    pub fn y(&self) -> f64 {
        self.origin.y
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// Get the size of this rect
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x <= self.origin.x + self.size.width
            && point.y >= self.origin.y
            && point.y <= self.origin.y + self.size.height
    }

    /// Grow the rect outward by a thickness
    pub fn inflate(&self, thickness: Thickness) -> Self {
        Rect {
            origin: self.origin.offset(-thickness.left, -thickness.top),
            size: self.size.inflate(thickness),
        }
    }
}

/// Per-edge extent, used for shadow padding around a scene layer
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Thickness {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Thickness {
    pub const ZERO: Thickness = Thickness {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// How the components of a [`RelativePoint`] are interpreted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RelativeUnit {
    /// Fraction of the visual's size (0.0 to 1.0)
    #[default]
    Relative,
    /// Absolute logical pixels
    Absolute,
}

/// A point expressed relative to a visual's bounds, e.g. a transform origin
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelativePoint {
    pub x: f64,
    pub y: f64,
    pub unit: RelativeUnit,
}

impl RelativePoint {
    pub const TOP_LEFT: RelativePoint = RelativePoint::relative(0.0, 0.0);
    pub const CENTER: RelativePoint = RelativePoint::relative(0.5, 0.5);
    pub const BOTTOM_RIGHT: RelativePoint = RelativePoint::relative(1.0, 1.0);

    pub const fn new(x: f64, y: f64, unit: RelativeUnit) -> Self {
        Self { x, y, unit }
    }

    pub const fn relative(x: f64, y: f64) -> Self {
        Self::new(x, y, RelativeUnit::Relative)
    }

    pub const fn absolute(x: f64, y: f64) -> Self {
        Self::new(x, y, RelativeUnit::Absolute)
    }
}

impl Default for RelativePoint {
    fn default() -> Self {
        Self::CENTER
    }
}
