// File: crates/chart-core/tests/common/mod.rs
// Purpose: Shared builders for engine integration tests.

#![allow(dead_code)]

use std::time::{Duration, Instant};

use rating_chart_core::{ChartConfig, ContestId, LineChart, RatingChange, RatingChart, RenderOptions};

pub fn change(id: u32, old: i32, new: i32) -> RatingChange {
    RatingChange {
        contest_id: ContestId(id),
        contest_name: format!("Codeforces Round {id} (Div. 2)"),
        rank: 100 + id,
        old_rating: old,
        new_rating: new,
        rating_update_time_seconds: 1_600_000_000 + id as i64 * 604_800,
    }
}

/// Series whose new ratings are `ratings`, each starting where the previous ended.
pub fn series(ratings: &[i32]) -> Vec<RatingChange> {
    let mut prev = 1400;
    ratings
        .iter()
        .enumerate()
        .map(|(i, &r)| {
            let c = change(i as u32 + 1, prev, r);
            prev = r;
            c
        })
        .collect()
}

pub fn line(ratings: &[i32], max: Option<i32>) -> ChartConfig {
    let mut l = LineChart::new(series(ratings));
    l.max_achieved_rating = max;
    ChartConfig::Line(l)
}

/// Options with text disabled so pixels do not depend on installed fonts.
pub fn quiet_options() -> RenderOptions {
    RenderOptions { draw_labels: false, ..RenderOptions::default() }
}

pub fn chart(config: ChartConfig) -> RatingChart {
    RatingChart::with_raster(config, quiet_options()).expect("raster chart")
}

/// Start the timeline and advance it by `ms` of wall-clock time.
pub fn advance(chart: &mut RatingChart, ms: u64) -> bool {
    let t0 = Instant::now();
    chart.tick(t0);
    chart.tick(t0 + Duration::from_millis(ms))
}

/// Run the reveal animation to completion.
pub fn finish(chart: &mut RatingChart) {
    let ms = chart.options().animation_ms;
    let running = advance(chart, ms);
    assert!(!running, "animation should be complete");
}
