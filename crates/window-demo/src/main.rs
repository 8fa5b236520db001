// File: crates/window-demo/src/main.rs
// Summary: Windowed demo that animates the rating chart and forwards pointer events, blitting RGBA via winit + softbuffer (CPU).

use anyhow::{Context, Result};
use rating_chart_core::{contest_url, telemetry, ChartConfig, LineChart, RatingChart, RatingHistory, RenderOptions};
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() -> Result<()> {
    let _ = telemetry::init_default_tracing();

    // Arg: rating history JSON path
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../demo/data/sample_rating.json")));
    let text = std::fs::read_to_string(&path).with_context(|| format!("failed to read '{}'", path.display()))?;
    let history = RatingHistory::from_json(&text).with_context(|| format!("failed to parse '{}'", path.display()))?;
    info!(contests = history.changes.len(), "rating history loaded");

    let opts = RenderOptions::default();
    let (width, height) = (opts.width as u32, opts.height as u32);
    let mut chart = RatingChart::with_raster(ChartConfig::Line(LineChart::from_history(history)), opts)
        .context("failed to create chart surface")?;
    chart.on_navigate(|id| info!(url = %contest_url(id), "open contest"));

    // Window + softbuffer setup; the chart surface has a fixed size, so does the window
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Rating History")
        .with_inner_size(PhysicalSize::new(width, height))
        .with_resizable(false)
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;
    let (w, h) = NonZeroU32::new(width).zip(NonZeroU32::new(height)).context("empty chart surface")?;

    let mut draw = move |chart: &mut RatingChart| {
        if let Err(e) = surface.resize(w, h) {
            warn!("resize error: {e}");
            return;
        }
        let rgba = match chart.render_to_rgba8() {
            Ok((rgba, _, _, _)) => rgba,
            Err(e) => {
                warn!("render error: {e}");
                return;
            }
        };
        let mut frame = match surface.buffer_mut() {
            Ok(frame) => frame,
            Err(e) => {
                warn!("frame error: {e}");
                return;
            }
        };
        // Softbuffer pixels are 0RGB
        for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
            *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
        }
        if let Err(e) = frame.present() {
            warn!("present error: {e}");
        }
    };

    event_loop.run(move |event, _, cf| {
        *cf = if chart.is_animating() { ControlFlow::Poll } else { ControlFlow::Wait };
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::CursorMoved { position, .. } => {
                    if chart.pointer_moved(position.x as f32, position.y as f32) {
                        window.request_redraw();
                    }
                }
                WindowEvent::CursorLeft { .. } => {
                    if chart.pointer_left() {
                        window.request_redraw();
                    }
                }
                WindowEvent::MouseInput { state: ElementState::Pressed, button: MouseButton::Left, .. } => {
                    chart.click();
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(VirtualKeyCode::R), .. },
                    ..
                } => {
                    // Replay the reveal
                    let config = chart.config().clone();
                    chart.reconfigure(config);
                    window.request_redraw();
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if chart.is_animating() {
                    chart.tick(Instant::now());
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => draw(&mut chart),
            _ => {}
        }
    });
}
