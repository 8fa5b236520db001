// File: crates/chart-core/src/text.rs
// Summary: Text measurement and aligned drawing using Skia textlayout.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Size and weight of a run of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSpec {
    pub size: f32,
    pub bold: bool,
}

impl FontSpec {
    pub const fn regular(size: f32) -> Self { Self { size, bold: false } }
    pub const fn bold(size: f32) -> Self { Self { size, bold: true } }
}

/// Horizontal anchor of a drawn string relative to `x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical anchor of a drawn string relative to `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Middle,
    Bottom,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(font: FontSpec, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(font.size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Arial", "Helvetica", "Segoe UI", "Roboto", "DejaVu Sans", "sans-serif"]);
        if font.bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, font: FontSpec, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(font, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Advance width of `text` set in `font`.
    pub fn measure_width(&self, text: &str, font: FontSpec) -> f32 {
        let p = self.layout(text, font, skia::Color::TRANSPARENT);
        p.longest_line()
    }

    /// Draw `text` anchored at (`x`, `y`) and return its width.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        font: FontSpec,
        color: skia::Color,
        h: HAlign,
        v: VAlign,
    ) -> f32 {
        let p = self.layout(text, font, color);
        let w = p.longest_line();
        let left = match h {
            HAlign::Left => x,
            HAlign::Center => x - w * 0.5,
            HAlign::Right => x - w,
        };
        let top = match v {
            VAlign::Middle => y - p.height() * 0.5,
            VAlign::Bottom => y - p.height(),
        };
        p.paint(canvas, (left, top));
        w
    }
}
