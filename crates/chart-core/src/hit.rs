// File: crates/chart-core/src/hit.rs
// Summary: Pointer hit-testing against rendered point coordinates and hovered-index state.

use crate::geometry::PointF;

/// Index of the first point (in series order) within `radius` of `pointer`.
///
/// The lowest index wins even if a later point is closer; closely spaced
/// markers therefore resolve the same way on every move.
pub fn first_within(points: &[PointF], pointer: PointF, radius: f32) -> Option<usize> {
    points.iter().position(|p| p.distance(pointer) < radius)
}

/// What a pointer event did to the hover state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverChange {
    Unchanged,
    Entered(usize),
    Cleared,
}

impl HoverChange {
    /// Whether the surface needs repainting.
    pub fn needs_redraw(&self) -> bool { !matches!(self, HoverChange::Unchanged) }
}

#[derive(Clone, Copy, Debug)]
pub struct HoverTracker {
    radius: f32,
    hovered: Option<usize>,
}

impl HoverTracker {
    pub fn new(radius: f32) -> Self {
        Self { radius, hovered: None }
    }

    pub fn hovered(&self) -> Option<usize> { self.hovered }

    pub fn pointer_moved(&mut self, points: &[PointF], pointer: PointF) -> HoverChange {
        match first_within(points, pointer, self.radius) {
            Some(i) if self.hovered == Some(i) => HoverChange::Unchanged,
            Some(i) => {
                self.hovered = Some(i);
                HoverChange::Entered(i)
            }
            None => self.clear(),
        }
    }

    pub fn pointer_left(&mut self) -> HoverChange { self.clear() }

    /// Forget the hovered point.
    pub fn clear(&mut self) -> HoverChange {
        match self.hovered.take() {
            Some(_) => HoverChange::Cleared,
            None => HoverChange::Unchanged,
        }
    }
}
