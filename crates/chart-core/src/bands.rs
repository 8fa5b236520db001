// File: crates/chart-core/src/bands.rs
// Summary: Tier guide lines and abbreviated tier labels inside the resolved rating domain.

use skia_safe as skia;

use crate::geometry::RectF;
use crate::scale::ValueScale;
use crate::text::{FontSpec, HAlign, TextShaper, VAlign};
use crate::theme::Theme;
use crate::tier::{Tier, TIERS};

const LABEL_FONT: FontSpec = FontSpec::bold(10.0);
/// Gap between the label's right edge and the plot's left edge.
const LABEL_GAP: f32 = 10.0;

/// Tiers whose lower bound lies inside the scale's domain, lowest first.
pub fn visible_tiers(scale: &ValueScale) -> impl Iterator<Item = &'static Tier> + '_ {
    TIERS.iter().filter(move |t| scale.domain.contains(t.min))
}

/// Draw one guide line per visible tier with its label just above it.
/// Returns the lower bounds that were drawn.
pub fn draw_tier_bands(
    canvas: &skia::Canvas,
    text: Option<&TextShaper>,
    theme: &Theme,
    area: RectF,
    scale: &ValueScale,
) -> Vec<i32> {
    let mut line = skia::Paint::default();
    line.set_anti_alias(true);
    line.set_style(skia::paint::Style::Stroke);
    line.set_stroke_width(1.0);
    line.set_color(theme.guide);

    visible_tiers(scale)
        .map(|tier| {
            let y = scale.to_px(tier.min);
            canvas.draw_line((area.left, y), (area.right(), y), &line);
            if let Some(shaper) = text {
                shaper.draw(canvas, tier.abbr, area.left - LABEL_GAP, y - 2.0, LABEL_FONT, tier.color(), HAlign::Right, VAlign::Bottom);
            }
            tier.min
        })
        .collect()
}
