// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

/// A point in surface pixel space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: PointF) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Point at fraction `t` of the way from `self` to `other`.
    pub fn lerp(&self, other: PointF, t: f32) -> PointF {
        PointF::new(self.x + (other.x - self.x) * t, self.y + (other.y - self.y) * t)
    }
}

impl From<PointF> for skia_safe::Point {
    fn from(p: PointF) -> Self { skia_safe::Point::new(p.x, p.y) }
}

/// Axis-aligned float rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl RectF {
    pub const fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }
    pub fn right(&self) -> f32 { self.left + self.width }
    pub fn bottom(&self) -> f32 { self.top + self.height }
    pub fn center_x(&self) -> f32 { self.left + self.width * 0.5 }
}

impl From<RectF> for skia_safe::Rect {
    fn from(r: RectF) -> Self { skia_safe::Rect::from_xywh(r.left, r.top, r.width, r.height) }
}
