// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (surface size, plot margins, marker sizes).

use serde::Deserialize;

/// Default surface width in pixels.
pub const WIDTH: i32 = 600;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 400;

/// Pointer distance, in pixels, within which a point counts as hovered.
pub const HIT_RADIUS: f32 = 8.0;
/// Length of the reveal animation in milliseconds.
pub const ANIMATION_MS: u64 = 2500;

/// Radius of an ordinary point marker.
pub const MARKER_RADIUS: f32 = 3.0;
/// Radius of the hovered and personal-best markers.
pub const MARKER_RADIUS_LARGE: f32 = 6.0;
/// Stroke width of the rating polyline.
pub const LINE_WIDTH: f32 = 2.0;

/// Plot margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right), saturating.
    pub const fn hsum(&self) -> u32 { self.left.saturating_add(self.right) }
    /// Total vertical inset (top + bottom), saturating.
    pub const fn vsum(&self) -> u32 { self.top.saturating_add(self.bottom) }
}

impl Default for Insets {
    /// 65 px around the plot leaves room for tier labels on the left; the
    /// bottom keeps an extra 40 px under the axis.
    fn default() -> Self {
        Self::new(65, 65, 65, 105)
    }
}
