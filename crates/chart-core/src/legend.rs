// File: crates/chart-core/src/legend.rs
// Summary: Single-entry legend (color swatch + series caption) centered above the plot.

use skia_safe as skia;

use crate::geometry::RectF;
use crate::text::{FontSpec, HAlign, TextShaper, VAlign};
use crate::theme::Theme;

const FONT: FontSpec = FontSpec::regular(12.0);
const SWATCH: f32 = 12.0;
const GAP: f32 = 6.0;

pub fn draw_legend(canvas: &skia::Canvas, text: &TextShaper, theme: &Theme, area: RectF, label: &str, color: skia::Color) {
    let label_w = text.measure_width(label, FONT);
    let total = SWATCH + GAP + label_w;
    let left = area.center_x() - total * 0.5;
    let mid = area.top * 0.5;

    let mut swatch = skia::Paint::default();
    swatch.set_anti_alias(true);
    swatch.set_color(color);
    canvas.draw_rect(skia::Rect::from_xywh(left, mid - SWATCH * 0.5, SWATCH, SWATCH), &swatch);

    text.draw(canvas, label, left + SWATCH + GAP, mid, FONT, theme.axis_label, HAlign::Left, VAlign::Middle);
}
