// File: crates/chart-core/src/path.rs
// Summary: Progressive reveal of the rating polyline and its point markers.

use skia_safe as skia;

use crate::geometry::{PointF, RectF};
use crate::scale::ValueScale;
use crate::series::RatingChange;
use crate::theme::{lighten, Theme};
use crate::types::{LINE_WIDTH, MARKER_RADIUS, MARKER_RADIUS_LARGE};

/// How much of an N-point polyline a given eased progress reveals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealPlan {
    pub total_segments: usize,
    /// Segments stroked end to end.
    pub full_segments: usize,
    /// Share of segment `full_segments` drawn past its start point.
    pub fraction: f32,
}

impl RevealPlan {
    /// `None` for an empty series.
    pub fn new(points: usize, progress: f32) -> Option<Self> {
        let total_segments = points.checked_sub(1)?;
        let to_draw = progress.clamp(0.0, 1.0) * total_segments as f32;
        let full_segments = (to_draw.floor() as usize).min(total_segments);
        let fraction = (to_draw - full_segments as f32).max(0.0);
        Some(Self { total_segments, full_segments, fraction })
    }

    /// Points that get a marker (and a cached coordinate).
    pub fn marker_count(&self) -> usize { self.full_segments + 1 }

    /// Fraction of the trailing partial segment, absent once every segment is full.
    pub fn partial(&self) -> Option<f32> {
        (self.full_segments < self.total_segments).then_some(self.fraction)
    }
}

/// Horizontal distance between neighbouring points.
pub fn point_spacing(points: usize, width: f32) -> f32 {
    if points > 1 { width / (points - 1) as f32 } else { width }
}

/// Pixel position of series point `index`.
pub fn point_at(series: &[RatingChange], index: usize, area: RectF, scale: &ValueScale) -> PointF {
    let spacing = point_spacing(series.len(), area.width);
    PointF::new(area.left + index as f32 * spacing, scale.to_px(series[index].new_rating))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerStyle {
    Normal,
    Hovered,
    PersonalBest,
}

impl MarkerStyle {
    /// Personal best outranks hover.
    pub fn for_point(point: &RatingChange, index: usize, hovered: Option<usize>, max_achieved: Option<i32>) -> Self {
        if max_achieved == Some(point.new_rating) {
            MarkerStyle::PersonalBest
        } else if hovered == Some(index) {
            MarkerStyle::Hovered
        } else {
            MarkerStyle::Normal
        }
    }

    pub fn radius(&self) -> f32 {
        match self {
            MarkerStyle::Normal => MARKER_RADIUS,
            MarkerStyle::Hovered | MarkerStyle::PersonalBest => MARKER_RADIUS_LARGE,
        }
    }
}

/// What one series pass put on the surface.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesReport {
    pub full_segments: usize,
    pub partial_end: Option<PointF>,
    pub markers: Vec<MarkerStyle>,
}

/// Inputs of one series pass.
pub struct SeriesPass<'a> {
    pub series: &'a [RatingChange],
    pub max_achieved: Option<i32>,
    pub hovered: Option<usize>,
    pub color: skia::Color,
    pub area: RectF,
    pub scale: ValueScale,
}

impl SeriesPass<'_> {
    /// Coordinates of the points revealed by `plan`, index-aligned with the series.
    pub fn revealed_points(&self, plan: &RevealPlan) -> Vec<PointF> {
        (0..plan.marker_count()).map(|i| point_at(self.series, i, self.area, &self.scale)).collect()
    }

    /// Endpoint of the partially drawn segment, if any.
    pub fn partial_end(&self, plan: &RevealPlan, revealed: &[PointF]) -> Option<PointF> {
        let frac = plan.partial()?;
        let from = *revealed.get(plan.full_segments)?;
        let to = point_at(self.series, plan.full_segments + 1, self.area, &self.scale);
        Some(from.lerp(to, frac))
    }

    /// Stroke the revealed polyline and draw the markers. `revealed` must come
    /// from `revealed_points` with the same plan.
    pub fn draw(&self, canvas: &skia::Canvas, theme: &Theme, plan: &RevealPlan, revealed: &[PointF]) -> SeriesReport {
        let partial_end = self.partial_end(plan, revealed);

        if plan.total_segments > 0 {
            let mut path = skia::Path::new();
            path.move_to(revealed[0]);
            for &p in &revealed[1..] {
                path.line_to(p);
            }
            if let Some(end) = partial_end {
                path.line_to(end);
            }
            let mut stroke = skia::Paint::default();
            stroke.set_anti_alias(true);
            stroke.set_style(skia::paint::Style::Stroke);
            stroke.set_stroke_width(LINE_WIDTH);
            stroke.set_color(self.color);
            canvas.draw_path(&path, &stroke);
        }

        let markers = revealed
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                let style = MarkerStyle::for_point(&self.series[i], i, self.hovered, self.max_achieved);
                self.draw_marker(canvas, theme, p, style);
                style
            })
            .collect();

        SeriesReport { full_segments: plan.full_segments, partial_end, markers }
    }

    fn draw_marker(&self, canvas: &skia::Canvas, theme: &Theme, at: PointF, style: MarkerStyle) {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        match style {
            MarkerStyle::Normal => fill.set_color(self.color),
            MarkerStyle::Hovered => fill.set_color(lighten(self.color, 50)),
            MarkerStyle::PersonalBest => fill.set_color(theme.best_fill),
        };
        canvas.draw_circle(at, style.radius(), &fill);

        if style == MarkerStyle::PersonalBest {
            let mut ring = skia::Paint::default();
            ring.set_anti_alias(true);
            ring.set_style(skia::paint::Style::Stroke);
            ring.set_stroke_width(2.0);
            ring.set_color(theme.best_stroke);
            canvas.draw_circle(at, style.radius(), &ring);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::RatingDomain;
    use crate::series::ContestId;

    fn change(i: u32, rating: i32) -> RatingChange {
        RatingChange {
            contest_id: ContestId(i),
            contest_name: format!("Round {i}"),
            rank: 100,
            old_rating: rating - 10,
            new_rating: rating,
            rating_update_time_seconds: 1_600_000_000 + i as i64 * 86_400,
        }
    }

    #[test]
    fn plan_for_empty_and_single() {
        assert!(RevealPlan::new(0, 1.0).is_none());
        let one = RevealPlan::new(1, 0.3).unwrap();
        assert_eq!((one.total_segments, one.full_segments, one.marker_count()), (0, 0, 1));
        assert_eq!(one.partial(), None);
    }

    #[test]
    fn plan_mid_reveal() {
        let p = RevealPlan::new(5, 0.6).unwrap();
        assert_eq!(p.full_segments, 2);
        assert_eq!(p.marker_count(), 3);
        assert!((p.partial().unwrap() - 0.4).abs() < 1e-5);
    }

    #[test]
    fn plan_complete_has_no_partial() {
        let p = RevealPlan::new(5, 1.0).unwrap();
        assert_eq!(p.full_segments, 4);
        assert_eq!(p.marker_count(), 5);
        assert_eq!(p.partial(), None);
    }

    #[test]
    fn spacing_is_uniform() {
        assert_eq!(point_spacing(5, 400.0), 100.0);
        assert_eq!(point_spacing(1, 400.0), 400.0);
    }

    #[test]
    fn personal_best_outranks_hover() {
        let c = change(1, 1650);
        assert_eq!(MarkerStyle::for_point(&c, 3, Some(3), Some(1650)), MarkerStyle::PersonalBest);
        assert_eq!(MarkerStyle::for_point(&c, 3, Some(3), Some(1700)), MarkerStyle::Hovered);
        assert_eq!(MarkerStyle::for_point(&c, 2, Some(3), None), MarkerStyle::Normal);
    }

    #[test]
    fn partial_end_interpolates_between_brackets() {
        let series: Vec<_> = [1400, 1500, 1700].iter().enumerate().map(|(i, &r)| change(i as u32, r)).collect();
        let pass = SeriesPass {
            series: &series,
            max_achieved: None,
            hovered: None,
            color: skia::Color::BLACK,
            area: RectF::from_ltwh(0.0, 0.0, 200.0, 100.0),
            scale: ValueScale::new(0.0, 100.0, RatingDomain { min: 1400, max: 1900 }),
        };
        let plan = RevealPlan::new(3, 0.75).unwrap();
        let revealed = pass.revealed_points(&plan);
        assert_eq!(revealed.len(), 2);
        let end = pass.partial_end(&plan, &revealed).unwrap();
        // Halfway from (100, 80) to (200, 40).
        assert!((end.x - 150.0).abs() < 1e-3);
        assert!((end.y - 60.0).abs() < 1e-3);
    }
}
