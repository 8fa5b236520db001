// File: crates/chart-core/src/tooltip.rs
// Summary: Hover tooltip: per-contest text lines, measured box layout clamped to the surface, and drawing.

use std::cmp::Ordering;

use chrono::DateTime;
use skia_safe as skia;

use crate::geometry::{PointF, RectF};
use crate::series::RatingChange;
use crate::text::{FontSpec, HAlign, TextShaper, VAlign};
use crate::theme::Theme;

pub const TITLE_FONT: FontSpec = FontSpec::bold(12.0);
pub const BODY_FONT: FontSpec = FontSpec::regular(11.0);
pub const DELTA_FONT: FontSpec = FontSpec::bold(11.0);

pub const PADDING: f32 = 10.0;
pub const LINE_HEIGHT: f32 = 15.0;
/// Title, date, rank, and rating with the delta on the same row.
pub const ROWS: usize = 4;
/// Extra space under the last row.
const TRAILING: f32 = 5.0;
/// Vertical gap between the box and the point it describes.
const ANCHOR_GAP: f32 = 10.0;
/// Offset of a box flipped below its point.
const FLIP_OFFSET: f32 = 15.0;
/// Distance kept from the left and right surface edges when clamping.
const EDGE_MARGIN: f32 = 5.0;
const CORNER_RADIUS: f32 = 5.0;
const MAX_TITLE_CHARS: usize = 40;

/// Contest name cut to 40 characters, with an ellipsis when cut.
pub fn truncate_name(name: &str) -> String {
    match name.char_indices().nth(MAX_TITLE_CHARS) {
        Some((cut, _)) => format!("{}...", &name[..cut]),
        None => name.to_string(),
    }
}

/// Calendar date (UTC) of a unix timestamp, month/day/year.
pub fn format_date(unix_seconds: i64) -> String {
    match DateTime::from_timestamp(unix_seconds, 0) {
        Some(dt) => dt.format("%-m/%-d/%Y").to_string(),
        None => unix_seconds.to_string(),
    }
}

/// Text of a tooltip.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipContent {
    pub title: String,
    pub date: String,
    pub rank: String,
    /// Carries a trailing space so the delta reads as a separate token.
    pub rating: String,
    pub delta: String,
    pub trend: Ordering,
}

impl TooltipContent {
    pub fn for_point(point: &RatingChange) -> Self {
        let change = point.delta();
        let sign = if change >= 0 { "+" } else { "" };
        Self {
            title: truncate_name(&point.contest_name),
            date: format!("Date: {}", format_date(point.rating_update_time_seconds)),
            rank: format!("Rank: {}", point.rank),
            rating: format!("Rating: {} ", point.new_rating),
            delta: format!("({sign}{change})"),
            trend: change.cmp(&0),
        }
    }

    /// Title plus the rating and delta lines; the delta shares the rating row.
    pub fn lines(&self) -> [&str; 5] {
        [self.title.as_str(), self.date.as_str(), self.rank.as_str(), self.rating.as_str(), self.delta.as_str()]
    }

    pub fn delta_color(&self, theme: &Theme) -> skia::Color {
        match self.trend {
            Ordering::Greater => theme.delta_up,
            Ordering::Less => theme.delta_down,
            Ordering::Equal => theme.tooltip_text,
        }
    }
}

/// Measured text widths that size the box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipMetrics {
    pub title: f32,
    pub rating: f32,
    pub delta: f32,
}

impl TooltipMetrics {
    pub fn measure(text: &TextShaper, content: &TooltipContent) -> Self {
        Self {
            title: text.measure_width(&content.title, TITLE_FONT),
            rating: text.measure_width(&content.rating, BODY_FONT),
            delta: text.measure_width(&content.delta, DELTA_FONT),
        }
    }
}

/// Where the box goes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipLayout {
    pub rect: RectF,
    /// Point the box describes.
    pub anchor: PointF,
    /// Placed below the anchor because there was no room above.
    pub flipped: bool,
}

impl TooltipLayout {
    /// Centered over `anchor` and lifted above it, then pushed back inside the
    /// left and right surface edges; a box that would cross the top edge goes
    /// below the anchor instead.
    pub fn compute(metrics: TooltipMetrics, anchor: PointF, surface_width: f32) -> Self {
        let width = metrics.title.max(metrics.rating + metrics.delta) + PADDING * 2.0;
        let height = ROWS as f32 * LINE_HEIGHT + TRAILING + PADDING * 2.0;

        let mut left = anchor.x - width * 0.5;
        let mut top = anchor.y - height - ANCHOR_GAP;
        if left < 0.0 {
            left = EDGE_MARGIN;
        }
        if left + width > surface_width {
            left = surface_width - width - EDGE_MARGIN;
        }
        let flipped = top < 0.0;
        if flipped {
            top = anchor.y + FLIP_OFFSET;
        }
        Self { rect: RectF::from_ltwh(left, top, width, height), anchor, flipped }
    }
}

/// Content and placement of the tooltip drawn in a pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub content: TooltipContent,
    pub layout: TooltipLayout,
}

impl Tooltip {
    pub fn compose(text: &TextShaper, point: &RatingChange, anchor: PointF, surface_width: f32) -> Self {
        let content = TooltipContent::for_point(point);
        let metrics = TooltipMetrics::measure(text, &content);
        Self { layout: TooltipLayout::compute(metrics, anchor, surface_width), content }
    }

    pub fn draw(&self, canvas: &skia::Canvas, text: &TextShaper, theme: &Theme) {
        let r: skia::Rect = self.layout.rect.into();
        let rrect = skia::RRect::new_rect_xy(r, CORNER_RADIUS, CORNER_RADIUS);

        let mut shadow = skia::Paint::default();
        shadow.set_anti_alias(true);
        shadow.set_color(theme.tooltip_shadow);
        shadow.set_mask_filter(skia::MaskFilter::blur(skia::BlurStyle::Normal, 2.5, false));
        canvas.draw_rrect(rrect.with_offset((2.0, 2.0)), &shadow);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_color(theme.tooltip_fill);
        canvas.draw_rrect(rrect, &fill);

        let c = &self.content;
        let x = self.layout.rect.left + PADDING;
        let mut y = self.layout.rect.top + PADDING + LINE_HEIGHT * 0.5;
        let rows = [(&c.title, TITLE_FONT), (&c.date, BODY_FONT), (&c.rank, BODY_FONT)];
        for (line, font) in rows {
            text.draw(canvas, line, x, y, font, theme.tooltip_text, HAlign::Left, VAlign::Middle);
            y += LINE_HEIGHT;
        }
        let rating_w = text.draw(canvas, &c.rating, x, y, BODY_FONT, theme.tooltip_text, HAlign::Left, VAlign::Middle);
        text.draw(canvas, &c.delta, x + rating_w, y, DELTA_FONT, c.delta_color(theme), HAlign::Left, VAlign::Middle);
    }
}
