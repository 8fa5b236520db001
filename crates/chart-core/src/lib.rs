// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the rating chart engine and its building blocks.

pub mod animation;
pub mod axis;
pub mod bands;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod legend;
pub mod path;
pub mod scale;
pub mod series;
pub mod telemetry;
pub mod text;
pub mod theme;
pub mod tier;
pub mod tooltip;
pub mod types;

pub use chart::{FrameKind, FrameReport, RatingChart, RenderOptions};
pub use error::{ChartError, ChartResult};
pub use geometry::PointF;
pub use path::{MarkerStyle, RevealPlan};
pub use scale::RatingDomain;
pub use series::{contest_url, ChartConfig, ContestId, LegacyKind, LineChart, RatingChange, RatingHistory};
pub use theme::Theme;
pub use text::TextShaper;
pub use tier::Tier;
