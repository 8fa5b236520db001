// File: crates/chart-core/src/axis.rs
// Summary: Left and bottom axis lines framing the plot area.

use skia_safe as skia;

use crate::geometry::RectF;
use crate::theme::Theme;

pub fn draw_axes(canvas: &skia::Canvas, theme: &Theme, area: RectF) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_style(skia::paint::Style::Stroke);
    axis_paint.set_stroke_width(1.0);

    let mut frame = skia::Path::new();
    frame.move_to((area.left, area.top));
    frame.line_to((area.left, area.bottom()));
    frame.line_to((area.right(), area.bottom()));
    canvas.draw_path(&frame, &axis_paint);
}
