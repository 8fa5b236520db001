// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for the rating chart (frame, guides, tooltip, markers).

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    /// Horizontal tier guide lines.
    pub guide: skia::Color,
    /// Series color when the configuration does not carry one.
    pub line_stroke: skia::Color,
    pub tooltip_fill: skia::Color,
    pub tooltip_shadow: skia::Color,
    pub tooltip_text: skia::Color,
    pub delta_up: skia::Color,
    pub delta_down: skia::Color,
    pub best_fill: skia::Color,
    pub best_stroke: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            axis_line: skia::Color::from_argb(255, 0x33, 0x33, 0x33),
            axis_label: skia::Color::from_argb(255, 0x66, 0x66, 0x66),
            guide: skia::Color::from_argb(26, 0, 0, 0),
            line_stroke: skia::Color::from_argb(255, 0x36, 0xa2, 0xeb),
            tooltip_fill: skia::Color::from_argb(204, 0, 0, 0),
            tooltip_shadow: skia::Color::from_argb(128, 0, 0, 0),
            tooltip_text: skia::Color::from_argb(255, 255, 255, 255),
            delta_up: skia::Color::from_argb(255, 0x90, 0xee, 0x90),   // lightgreen
            delta_down: skia::Color::from_argb(255, 0xf0, 0x80, 0x80), // lightcoral
            best_fill: skia::Color::from_argb(255, 0xff, 0xd7, 0x00),  // gold
            best_stroke: skia::Color::from_argb(255, 0xb8, 0x86, 0x0b), // darkgoldenrod
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            guide: skia::Color::from_argb(40, 255, 255, 255),
            line_stroke: skia::Color::from_argb(255, 64, 160, 255),
            tooltip_fill: skia::Color::from_argb(230, 40, 40, 45),
            tooltip_shadow: skia::Color::from_argb(160, 0, 0, 0),
            tooltip_text: skia::Color::from_argb(255, 235, 235, 245),
            delta_up: skia::Color::from_argb(255, 0x90, 0xee, 0x90),
            delta_down: skia::Color::from_argb(255, 0xf0, 0x80, 0x80),
            best_fill: skia::Color::from_argb(255, 0xff, 0xd7, 0x00),
            best_stroke: skia::Color::from_argb(255, 0xb8, 0x86, 0x0b),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}

/// Brighten each channel by `percent` of full scale, saturating at 255.
pub fn lighten(color: skia::Color, percent: u8) -> skia::Color {
    let amt = (255 * percent.min(100) as u16 + 50) / 100;
    let up = |c: u8| (c as u16 + amt).min(255) as u8;
    skia::Color::from_argb(color.a(), up(color.r()), up(color.g()), up(color.b()))
}
