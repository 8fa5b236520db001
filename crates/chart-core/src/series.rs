// File: crates/chart-core/src/series.rs
// Summary: Rating history model (contest results), chart configuration variants, and the JSON boundary.
// Notes:
// - `RatingChange` mirrors the Codeforces `user.rating` result rows so a history
//   can be deserialized straight from the API response.
// - The engine only reads these values; it never mutates a bound configuration.

use std::fmt;

use serde::Deserialize;
use skia_safe as skia;

use crate::error::{ChartError, ChartResult};
use crate::tier::Tier;

/// Contest identifier, used as the navigation key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct ContestId(pub u32);

impl fmt::Display for ContestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.0.fmt(f) }
}

/// Public page of a contest.
pub fn contest_url(id: ContestId) -> String {
    format!("https://codeforces.com/contest/{id}")
}

/// One rated contest result.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingChange {
    pub contest_id: ContestId,
    pub contest_name: String,
    pub rank: u32,
    pub old_rating: i32,
    pub new_rating: i32,
    /// Unix seconds.
    pub rating_update_time_seconds: i64,
}

impl RatingChange {
    /// Rating change of this contest; widened so any pair of ratings fits.
    pub fn delta(&self) -> i64 { i64::from(self.new_rating) - i64::from(self.old_rating) }
}

/// Chronological list of contest results for one user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RatingHistory {
    pub changes: Vec<RatingChange>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum HistoryPayload {
    Envelope {
        status: String,
        #[serde(default)]
        comment: Option<String>,
        #[serde(default)]
        result: Vec<RatingChange>,
    },
    Bare(Vec<RatingChange>),
}

impl RatingHistory {
    /// Parse either a `{ "status", "result" }` API envelope or a bare array.
    ///
    /// A failed envelope whose comment says the handle was not found is an
    /// empty history; any other failure is `ChartError::Api`.
    pub fn from_json(text: &str) -> ChartResult<Self> {
        let payload: HistoryPayload = serde_json::from_str(text)?;
        let changes = match payload {
            HistoryPayload::Bare(changes) => changes,
            HistoryPayload::Envelope { status, result, .. } if status == "OK" => result,
            HistoryPayload::Envelope { comment, .. } => {
                let comment = comment.unwrap_or_default();
                if comment.contains("not found") {
                    Vec::new()
                } else {
                    return Err(ChartError::Api(comment));
                }
            }
        };
        Ok(Self { changes })
    }

    pub fn is_empty(&self) -> bool { self.changes.is_empty() }

    /// Highest rating ever reached.
    pub fn max_rating(&self) -> Option<i32> {
        self.changes.iter().map(|c| c.new_rating).max()
    }

    /// Rating after the latest contest.
    pub fn current_rating(&self) -> Option<i32> {
        self.changes.last().map(|c| c.new_rating)
    }
}

/// Line chart over one rating series.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineChart {
    /// Chronological; never re-sorted by the engine.
    pub series: Vec<RatingChange>,
    /// All-time maximum rating; points equal to it get the personal-best marker.
    pub max_achieved_rating: Option<i32>,
    /// Series color; the theme's line color when absent.
    pub line_color: Option<skia::Color>,
    /// Legend caption.
    pub label: String,
}

impl LineChart {
    pub fn new(series: Vec<RatingChange>) -> Self {
        Self { series, max_achieved_rating: None, line_color: None, label: "Rating".to_string() }
    }

    pub fn with_max_achieved(mut self, rating: i32) -> Self {
        self.max_achieved_rating = Some(rating);
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.line_color = Some(color);
        self
    }

    /// Chart of a whole history: personal best from the full history, series
    /// colored by the tier of the current rating.
    pub fn from_history(history: RatingHistory) -> Self {
        let max = history.max_rating();
        let color = history.current_rating().map(|r| Tier::for_rating(r).color());
        Self { max_achieved_rating: max, line_color: color, ..Self::new(history.changes) }
    }
}

/// Chart kinds that only render a static notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegacyKind {
    Bar,
    Pie,
}

impl LegacyKind {
    pub fn title(&self) -> &'static str {
        match self {
            LegacyKind::Bar => "Bar",
            LegacyKind::Pie => "Pie",
        }
    }
}

/// One render configuration bound to an engine.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartConfig {
    Line(LineChart),
    Legacy(LegacyKind),
    /// Unrecognized kind name, kept for the error placeholder.
    Unsupported(String),
}

impl ChartConfig {
    /// Map a loose kind name to a configuration; `line` is only used for "line".
    pub fn from_kind_name(kind: &str, line: LineChart) -> Self {
        match kind {
            "line" => ChartConfig::Line(line),
            "bar" => ChartConfig::Legacy(LegacyKind::Bar),
            "pie" => ChartConfig::Legacy(LegacyKind::Pie),
            other => ChartConfig::Unsupported(other.to_string()),
        }
    }

    pub fn line(&self) -> Option<&LineChart> {
        match self {
            ChartConfig::Line(l) => Some(l),
            _ => None,
        }
    }
}

impl From<LineChart> for ChartConfig {
    fn from(l: LineChart) -> Self { ChartConfig::Line(l) }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENVELOPE: &str = r#"{
        "status": "OK",
        "result": [
            {"contestId": 1, "contestName": "Round 1", "handle": "x", "rank": 900,
             "ratingUpdateTimeSeconds": 1600000000, "oldRating": 0, "newRating": 1400},
            {"contestId": 7, "contestName": "Round 7", "handle": "x", "rank": 120,
             "ratingUpdateTimeSeconds": 1600600000, "oldRating": 1400, "newRating": 1650},
            {"contestId": 9, "contestName": "Round 9", "handle": "x", "rank": 1500,
             "ratingUpdateTimeSeconds": 1601200000, "oldRating": 1650, "newRating": 1580}
        ]
    }"#;

    #[test]
    fn parses_api_envelope() {
        let h = RatingHistory::from_json(ENVELOPE).unwrap();
        assert_eq!(h.changes.len(), 3);
        assert_eq!(h.changes[1].contest_id, ContestId(7));
        assert_eq!(h.changes[2].delta(), -70);
        assert_eq!(h.max_rating(), Some(1650));
        assert_eq!(h.current_rating(), Some(1580));
    }

    #[test]
    fn parses_bare_array() {
        let h = RatingHistory::from_json(
            r#"[{"contestId": 3, "contestName": "A", "rank": 1, "ratingUpdateTimeSeconds": 0, "oldRating": 1500, "newRating": 1510}]"#,
        )
        .unwrap();
        assert_eq!(h.changes[0].contest_name, "A");
    }

    #[test]
    fn unknown_handle_is_empty_other_failures_error() {
        let h = RatingHistory::from_json(r#"{"status":"FAILED","comment":"handle: User with handle zz not found"}"#).unwrap();
        assert!(h.is_empty());
        let e = RatingHistory::from_json(r#"{"status":"FAILED","comment":"Call limit exceeded"}"#).unwrap_err();
        assert!(matches!(e, ChartError::Api(ref c) if c == "Call limit exceeded"));
    }

    #[test]
    fn line_from_history_uses_full_history_max_and_current_tier_color() {
        let line = LineChart::from_history(RatingHistory::from_json(ENVELOPE).unwrap());
        assert_eq!(line.max_achieved_rating, Some(1650));
        assert_eq!(line.line_color, Some(Tier::for_rating(1580).color()));
        assert_eq!(line.label, "Rating");
    }

    #[test]
    fn kind_names_map_to_variants() {
        assert!(matches!(ChartConfig::from_kind_name("line", LineChart::default()), ChartConfig::Line(_)));
        assert_eq!(ChartConfig::from_kind_name("pie", LineChart::default()), ChartConfig::Legacy(LegacyKind::Pie));
        assert_eq!(
            ChartConfig::from_kind_name("radar", LineChart::default()),
            ChartConfig::Unsupported("radar".into())
        );
    }

    #[test]
    fn urls_are_keyed_by_contest() {
        assert_eq!(contest_url(ContestId(1843)), "https://codeforces.com/contest/1843");
    }
}
