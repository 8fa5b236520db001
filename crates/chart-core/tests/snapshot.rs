// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic label-free frames to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

mod common;

use std::path::PathBuf;

const RATINGS: [i32; 6] = [1380, 1460, 1545, 1510, 1620, 1590];

fn check_golden(name: &str, bytes: &[u8]) {
    let snap_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join(name);

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.dimensions(), want_img.dimensions());
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}

#[test]
fn golden_mid_reveal() {
    let mut chart = common::chart(common::line(&RATINGS, Some(1620)));
    common::advance(&mut chart, 1250);
    let bytes = chart.render_to_png_bytes().expect("png bytes");
    check_golden("mid_reveal.png", &bytes);
}

#[test]
fn golden_hovered_personal_best() {
    let mut chart = common::chart(common::line(&RATINGS, Some(1620)));
    common::finish(&mut chart);
    let p = chart.point_coordinates()[4];
    assert!(chart.pointer_moved(p.x, p.y));
    let bytes = chart.render_to_png_bytes().expect("png bytes");
    check_golden("hovered_best.png", &bytes);
}
