//! Domain records shared across the crate.
//!
//! Everything here is plain data: the surrounding funnel (quiz UI, storage,
//! offer pages) produces and consumes these records as already-deserialized
//! values. The core never performs I/O on them.

pub mod errors;

use chrono::{DateTime, Utc};
use im::Vector;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One entry of the component catalog the quiz measures against.
///
/// `key` is the stable identifier scores are accumulated under; `name` is the
/// display label shown on the results page and the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub key: String,
    pub name: String,
}

impl Component {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
        }
    }
}

/// A single answered question from one quiz attempt.
///
/// `score` is the weight of the chosen option, expected in 1..=5. Values
/// outside that range are carried through unmodified; range validation
/// happens at answer-capture time, outside the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: String,
    pub option_id: String,
    pub score: i64,
}

/// Many-to-many relation between questions and components.
///
/// A question linked to several components fans its answer's score out to
/// each of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionLink {
    pub question_id: String,
    pub component_key: String,
}

/// Cumulative score per component key.
///
/// Serializes as a flat JSON object. A key that is absent means 0; downstream
/// consumers must treat both the same (see [`crate::scoring::score_for`]).
pub type ScoreMap = BTreeMap<String, i64>;

/// The persisted shape of one finished quiz attempt.
///
/// Storage keeps one of these per attempt; selections and chart points are
/// recomputed from `scores` on every read, never persisted themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub attempt_id: String,
    pub completed_at: DateTime<Utc>,
    pub scores: ScoreMap,
}

/// Strength/challenge selection derived from a score map.
///
/// `positive` holds the top-ranked components (at most two), `negative` the
/// single lowest-ranked one. Drives personalization copy and the offer
/// bundles.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RankedSelection {
    pub positive: Vec<Component>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative: Option<Component>,
}

/// Visual emphasis class for one chart point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DotType {
    High,
    Low,
    Normal,
}

impl DotType {
    /// Get display name for this dot type
    pub fn display_name(&self) -> &'static str {
        match self {
            DotType::High => "high",
            DotType::Low => "low",
            DotType::Normal => "normal",
        }
    }
}

/// One positioned point of the radar chart.
///
/// `label_lines` is the wrapped form of `label` (one or two lines), ready for
/// the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub label_lines: Vec<String>,
    pub value: f64,
    pub dot_type: DotType,
    pub x: f64,
    pub y: f64,
}

/// The composed result the funnel pages consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileReport {
    pub scores: ScoreMap,
    pub selection: RankedSelection,
    pub chart: Vector<ChartPoint>,
}
