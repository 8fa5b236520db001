// File: crates/demo/src/main.rs
// Summary: Demo loads a contest rating history (JSON) and renders reveal checkpoints plus a hovered frame to PNGs.

use anyhow::{Context, Result};
use rating_chart_core::{telemetry, ChartConfig, LineChart, RatingChart, RatingHistory, RenderOptions};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::info;

/// Eased-progress checkpoints written as separate frames, in milliseconds of animation time.
const CHECKPOINTS_MS: [u64; 4] = [0, 400, 1250, 2500];

fn main() -> Result<()> {
    let _ = telemetry::init_default_tracing();

    let args = Args::parse(std::env::args().skip(1))?;
    println!("Using input file: {}", args.input.display());

    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read '{}'", args.input.display()))?;
    let history = RatingHistory::from_json(&text)
        .with_context(|| format!("failed to parse rating history '{}'", args.input.display()))?;
    println!("Loaded {} rating changes", history.changes.len());

    let options = match &args.options {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read options '{}'", path.display()))?;
            RenderOptions::from_json(&raw).with_context(|| format!("invalid options '{}'", path.display()))?
        }
        None => RenderOptions::default(),
    };

    if let (Some(current), Some(best)) = (history.current_rating(), history.max_rating()) {
        println!("Rating range: current {current}, best {best}");
    }
    let line = LineChart::from_history(history);
    let best = line.max_achieved_rating;
    let mut chart = RatingChart::with_raster(ChartConfig::Line(line), options)
        .context("failed to create chart surface")?;

    // 1) Reveal checkpoints on a deterministic clock
    let t0 = Instant::now();
    for ms in CHECKPOINTS_MS {
        chart.tick(t0 + Duration::from_millis(ms));
        let out = out_name_with(&args.out_dir, &args.input, &format!("reveal_{ms:04}ms"));
        chart.render_to_png(&out).with_context(|| format!("writing {}", out.display()))?;
        let frame = chart.last_frame();
        info!(ms, progress = frame.progress, segments = frame.series.full_segments, "checkpoint rendered");
        println!("Wrote {} (progress {:.3})", out.display(), frame.progress);
    }

    // 2) Hover over the personal best (or the last point) once fully revealed
    let done_ms = chart.options().animation_ms;
    chart.tick(t0 + Duration::from_millis(done_ms));
    let target = chart
        .config()
        .line()
        .and_then(|l| l.series.iter().position(|c| Some(c.new_rating) == best))
        .or_else(|| chart.point_coordinates().len().checked_sub(1));
    if let Some(p) = target.and_then(|i| chart.point_coordinates().get(i).copied()) {
        chart.pointer_moved(p.x, p.y);
        let out = out_name_with(&args.out_dir, &args.input, "hover");
        chart.render_to_png(&out).with_context(|| format!("writing {}", out.display()))?;
        if let Some(tip) = &chart.last_frame().tooltip {
            println!("Tooltip: {}", tip.content.lines().join(" | "));
        }
        if let Some(id) = chart.click() {
            println!("Click would open {}", rating_chart_core::contest_url(id));
        }
        println!("Wrote {}", out.display());
    } else {
        let out = out_name_with(&args.out_dir, &args.input, "empty");
        chart.render_to_png(&out).with_context(|| format!("writing {}", out.display()))?;
        println!("No data; wrote {}", out.display());
    }

    Ok(())
}

struct Args {
    input: PathBuf,
    out_dir: PathBuf,
    options: Option<PathBuf>,
}

impl Args {
    /// `<history.json> [out_dir] [--options <file>]`
    fn parse(args: impl Iterator<Item = String>) -> Result<Self> {
        let mut positional = Vec::new();
        let mut options = None;
        let mut args = args;
        while let Some(arg) = args.next() {
            if arg == "--options" {
                let path = args.next().context("--options needs a file path")?;
                options = Some(PathBuf::from(path));
            } else {
                positional.push(arg);
            }
        }
        let mut positional = positional.into_iter();
        let input = positional
            .next()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample_rating.json")));
        if !input.exists() {
            anyhow::bail!("file not found: {}", input.display());
        }
        let out_dir = positional.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("target/out"));
        Ok(Self { input, out_dir, options })
    }
}

/// Produce output file name like target/out/rating_<stem>_<suffix>.png
fn out_name_with(out_dir: &Path, input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    out_dir.join(format!("rating_{stem}_{suffix}.png"))
}
