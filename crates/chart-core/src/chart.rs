// File: crates/chart-core/src/chart.rs
// Summary: RatingChart engine bound to a Skia raster surface: animation ticks, pointer events,
//          the redraw pipeline (bands -> axes -> series -> legend -> tooltip), and RGBA/PNG export.

use std::io::Cursor;
use std::time::{Duration, Instant};

use serde::Deserialize;
use skia_safe as skia;
use tracing::{debug, trace, warn};

use crate::animation::Animation;
use crate::axis::draw_axes;
use crate::bands::draw_tier_bands;
use crate::error::{ChartError, ChartResult};
use crate::geometry::{PointF, RectF};
use crate::hit::{HoverChange, HoverTracker};
use crate::legend::draw_legend;
use crate::path::{RevealPlan, SeriesPass, SeriesReport};
use crate::scale::{RatingDomain, ValueScale};
use crate::series::{ChartConfig, ContestId, LegacyKind, LineChart};
use crate::text::{FontSpec, HAlign, TextShaper, VAlign};
use crate::theme::{self, Theme};
use crate::tooltip::Tooltip;
use crate::types::{Insets, ANIMATION_MS, HEIGHT, HIT_RADIUS, WIDTH};

/// Engine settings. Every field has a default, so a partial JSON object is enough.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    /// Theme preset name, see [`theme::find`].
    pub theme: String,
    pub animation_ms: u64,
    pub hit_radius: f32,
    /// Skip all text; keeps pixel output independent of installed fonts.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: "light".to_string(),
            animation_ms: ANIMATION_MS,
            hit_radius: HIT_RADIUS,
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    pub fn from_json(text: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Which render path the last pass took.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FrameKind {
    Line,
    #[default]
    NoData,
    Legacy(LegacyKind),
    Unsupported,
}

/// What the last redraw put on the surface.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub kind: FrameKind,
    pub progress: f32,
    pub domain: Option<RatingDomain>,
    /// Lower bounds of the tier guide lines drawn.
    pub tier_rows: Vec<i32>,
    pub series: SeriesReport,
    pub tooltip: Option<Tooltip>,
}

type NavigateFn = Box<dyn FnMut(ContestId)>;

/// Animated rating chart bound to one drawing surface.
///
/// All state changes happen through `&mut self`, so the engine is driven from
/// a single event loop: timer ticks and pointer events are serialized by the
/// caller.
pub struct RatingChart {
    surface: skia::Surface,
    config: ChartConfig,
    options: RenderOptions,
    theme: Theme,
    text: TextShaper,
    animation: Animation,
    hover: HoverTracker,
    /// Pixel position of every point drawn by the last pass, index-aligned with the series.
    points: Vec<PointF>,
    last_frame: FrameReport,
    navigate: Option<NavigateFn>,
}

impl RatingChart {
    /// Bind `config` to a caller-supplied surface and paint the first frame.
    pub fn new(surface: skia::Surface, config: ChartConfig, options: RenderOptions) -> ChartResult<Self> {
        let (width, height) = (surface.width(), surface.height());
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidSurface { width, height });
        }
        let theme = theme::find(&options.theme);
        let mut chart = Self {
            surface,
            config,
            theme,
            text: TextShaper::new(),
            animation: Animation::new(Duration::from_millis(options.animation_ms)),
            hover: HoverTracker::new(options.hit_radius),
            points: Vec::new(),
            last_frame: FrameReport::default(),
            navigate: None,
            options,
        };
        debug!(width, height, kind = ?chart.config_kind(), "chart bound to surface");
        chart.redraw();
        Ok(chart)
    }

    /// Allocate a CPU raster surface of `options.width × options.height` and bind to it.
    pub fn with_raster(config: ChartConfig, options: RenderOptions) -> ChartResult<Self> {
        let (width, height) = (options.width, options.height);
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidSurface { width, height });
        }
        let surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(ChartError::SurfaceAllocation { width, height })?;
        Self::new(surface, config, options)
    }

    /// Replace the configuration; animation, hover, and point cache start over.
    pub fn reconfigure(&mut self, config: ChartConfig) {
        self.config = config;
        self.animation.reset();
        self.hover.clear();
        self.points.clear();
        self.last_frame = FrameReport::default();
        debug!(kind = ?self.config_kind(), "chart reconfigured");
        self.redraw();
    }

    /// Register the collaborator that follows a clicked contest.
    pub fn on_navigate<F: FnMut(ContestId) + 'static>(&mut self, f: F) {
        self.navigate = Some(Box::new(f));
    }

    /// One animation step at wall-clock `now`. Repaints while the timeline
    /// runs and returns whether more ticks are wanted.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.animation.is_running() {
            return false;
        }
        self.animation.tick(now);
        self.redraw();
        if !self.animation.is_running() {
            debug!("reveal animation finished");
        }
        self.animation.is_running()
    }

    /// Pointer moved to (`x`, `y`) in surface pixels. Returns whether the
    /// hovered point changed.
    pub fn pointer_moved(&mut self, x: f32, y: f32) -> bool {
        if self.config.line().is_none() {
            return false;
        }
        let change = self.hover.pointer_moved(&self.points, PointF::new(x, y));
        self.hover_changed(change)
    }

    /// Pointer left the surface.
    pub fn pointer_left(&mut self) -> bool {
        let change = self.hover.pointer_left();
        self.hover_changed(change)
    }

    /// Click at the current pointer position: navigates to the hovered contest, if any.
    pub fn click(&mut self) -> Option<ContestId> {
        let index = self.hover.hovered()?;
        let id = self.config.line()?.series.get(index)?.contest_id;
        debug!(contest = %id, "navigating to hovered contest");
        if let Some(navigate) = self.navigate.as_mut() {
            navigate(id);
        }
        Some(id)
    }

    fn hover_changed(&mut self, change: HoverChange) -> bool {
        if !change.needs_redraw() {
            return false;
        }
        trace!(?change, "hover changed");
        // While animating, the next tick paints the new hover state.
        if !self.animation.is_running() {
            self.redraw();
        }
        true
    }

    /// Clear and repaint everything for the current progress and hover state.
    pub fn redraw(&mut self) {
        let progress = self.animation.progress();
        let hovered = self.hover.hovered();
        let size = (self.surface.width() as f32, self.surface.height() as f32);
        let canvas = self.surface.canvas();
        canvas.clear(self.theme.background);

        let text = self.options.draw_labels.then_some(&self.text);
        let ctx = PassContext { canvas, text, theme: &self.theme, insets: self.options.insets, size };

        let (mut frame, points) = match &self.config {
            ChartConfig::Line(line) if line.series.is_empty() => {
                ctx.notice("No data available", self.theme.axis_label);
                (FrameReport { kind: FrameKind::NoData, ..FrameReport::default() }, Vec::new())
            }
            ChartConfig::Line(line) => ctx.line_pass(line, progress, hovered),
            ChartConfig::Legacy(kind) => {
                ctx.notice(&format!("{} charts are not supported", kind.title()), self.theme.axis_label);
                (FrameReport { kind: FrameKind::Legacy(*kind), ..FrameReport::default() }, Vec::new())
            }
            ChartConfig::Unsupported(name) => {
                ctx.notice(&format!("Unsupported chart type: {name}"), self.theme.delta_down);
                (FrameReport { kind: FrameKind::Unsupported, ..FrameReport::default() }, Vec::new())
            }
        };

        if let (Some(index), Some(line)) = (hovered, self.config.line()) {
            if let (Some(&anchor), Some(point)) = (points.get(index), line.series.get(index)) {
                let tooltip = Tooltip::compose(&self.text, point, anchor, size.0);
                if let Some(shaper) = text {
                    tooltip.draw(canvas, shaper, &self.theme);
                } else {
                    draw_tooltip_box(canvas, &self.theme, &tooltip);
                }
                frame.tooltip = Some(tooltip);
            }
        }

        frame.progress = progress;
        trace!(progress, points = points.len(), hovered = ?hovered, "redraw");
        self.points = points;
        self.last_frame = frame;
    }

    /// Copy the surface out as tightly packed, unpremultiplied RGBA8.
    /// Returns `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&mut self) -> ChartResult<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = (self.surface.width(), self.surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !self.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            warn!(w, h, "surface pixel readback failed");
            return Err(ChartError::PixelReadback);
        }
        Ok((pixels, w as u32, h as u32, row_bytes))
    }

    /// Encode the surface as PNG.
    pub fn render_to_png_bytes(&mut self) -> ChartResult<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8()?;
        let img = image::RgbaImage::from_raw(w, h, pixels).ok_or(ChartError::PixelReadback)?;
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Write the surface as PNG to `output_png_path`, creating parent directories.
    pub fn render_to_png(&mut self, output_png_path: impl AsRef<std::path::Path>) -> ChartResult<()> {
        let bytes = self.render_to_png_bytes()?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    pub fn config(&self) -> &ChartConfig { &self.config }
    pub fn options(&self) -> &RenderOptions { &self.options }
    pub fn size(&self) -> (i32, i32) { (self.surface.width(), self.surface.height()) }
    pub fn progress(&self) -> f32 { self.animation.progress() }
    pub fn is_animating(&self) -> bool { self.animation.is_running() }
    pub fn hovered_index(&self) -> Option<usize> { self.hover.hovered() }
    pub fn point_coordinates(&self) -> &[PointF] { &self.points }
    pub fn last_frame(&self) -> &FrameReport { &self.last_frame }

    fn config_kind(&self) -> &'static str {
        match &self.config {
            ChartConfig::Line(_) => "line",
            ChartConfig::Legacy(LegacyKind::Bar) => "bar",
            ChartConfig::Legacy(LegacyKind::Pie) => "pie",
            ChartConfig::Unsupported(_) => "unsupported",
        }
    }
}

// ---- helpers ----------------------------------------------------------------

/// Borrowed pieces one redraw pass draws with.
struct PassContext<'a> {
    canvas: &'a skia::Canvas,
    text: Option<&'a TextShaper>,
    theme: &'a Theme,
    insets: Insets,
    size: (f32, f32),
}

impl PassContext<'_> {
    fn plot_area(&self) -> RectF {
        let i = self.insets;
        RectF::from_ltwh(
            i.left as f32,
            i.top as f32,
            (self.size.0 - i.hsum() as f32).max(0.0),
            (self.size.1 - i.vsum() as f32).max(0.0),
        )
    }

    fn notice(&self, message: &str, color: skia::Color) {
        if let Some(shaper) = self.text {
            let (cx, cy) = (self.size.0 * 0.5, self.size.1 * 0.5);
            shaper.draw(self.canvas, message, cx, cy, FontSpec::regular(14.0), color, HAlign::Center, VAlign::Middle);
        }
    }

    /// Scale -> tier bands -> axes -> series -> legend for a non-empty series.
    fn line_pass(&self, line: &LineChart, progress: f32, hovered: Option<usize>) -> (FrameReport, Vec<PointF>) {
        let area = self.plot_area();
        let Some(domain) = RatingDomain::resolve(line.series.iter().map(|c| c.new_rating)) else {
            return (FrameReport::default(), Vec::new());
        };
        let scale = ValueScale::new(area.top, area.height, domain);

        let tier_rows = draw_tier_bands(self.canvas, self.text, self.theme, area, &scale);
        draw_axes(self.canvas, self.theme, area);

        let color = line.line_color.unwrap_or(self.theme.line_stroke);
        let pass = SeriesPass {
            series: &line.series,
            max_achieved: line.max_achieved_rating,
            hovered,
            color,
            area,
            scale,
        };
        let (series, points) = match RevealPlan::new(line.series.len(), progress) {
            Some(plan) => {
                let points = pass.revealed_points(&plan);
                (pass.draw(self.canvas, self.theme, &plan, &points), points)
            }
            None => (SeriesReport::default(), Vec::new()),
        };

        if let Some(shaper) = self.text {
            draw_legend(self.canvas, shaper, self.theme, area, &line.label, color);
        }

        let frame = FrameReport {
            kind: FrameKind::Line,
            domain: Some(domain),
            tier_rows,
            series,
            ..FrameReport::default()
        };
        (frame, points)
    }
}

/// Tooltip background only, for label-free rendering.
fn draw_tooltip_box(canvas: &skia::Canvas, theme: &Theme, tooltip: &Tooltip) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(theme.tooltip_fill);
    let r: skia::Rect = tooltip.layout.rect.into();
    canvas.draw_rrect(skia::RRect::new_rect_xy(r, 5.0, 5.0), &fill);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_options_keep_defaults() {
        let o = RenderOptions::from_json(r#"{ "theme": "dark", "animation_ms": 1000 }"#).unwrap();
        assert_eq!(o.theme, "dark");
        assert_eq!(o.animation_ms, 1000);
        assert_eq!((o.width, o.height), (WIDTH, HEIGHT));
        assert_eq!(o.hit_radius, HIT_RADIUS);
        assert!(o.draw_labels);
    }

    #[test]
    fn malformed_options_are_json_errors() {
        assert!(matches!(RenderOptions::from_json("{ width: }"), Err(ChartError::Json(_))));
    }

    #[test]
    fn oversized_insets_collapse_the_plot_area() {
        let point = crate::series::RatingChange {
            contest_id: ContestId(1),
            contest_name: "Round 1".to_string(),
            rank: 1,
            old_rating: 0,
            new_rating: i32::MAX,
            rating_update_time_seconds: 0,
        };
        let opts = RenderOptions {
            draw_labels: false,
            insets: Insets::new(u32::MAX, u32::MAX, u32::MAX, 1),
            ..RenderOptions::default()
        };
        let mut chart = RatingChart::with_raster(ChartConfig::Line(LineChart::new(vec![point])), opts).unwrap();
        chart.tick(Instant::now());
        assert_eq!(chart.last_frame().kind, FrameKind::Line);
        assert!(chart.point_coordinates().iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn placeholder_configs_leave_hit_testing_inert() {
        let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
        let mut chart = RatingChart::with_raster(ChartConfig::Legacy(LegacyKind::Pie), opts).unwrap();
        assert_eq!(chart.last_frame().kind, FrameKind::Legacy(LegacyKind::Pie));
        assert!(chart.point_coordinates().is_empty());
        assert!(!chart.pointer_moved(65.0, 295.0));
        assert_eq!(chart.click(), None);
    }
}
