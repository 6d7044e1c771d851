//! Radial (octagram-style) chart layout.
//!
//! Places an ordered series on an N-gon: index 0 at the top, proceeding
//! clockwise, every point on a circle of the configured radius. Labels are
//! wrapped to at most two lines on word boundaries.

use crate::config::ChartConfig;
use crate::core::{ChartPoint, DotType};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};
use unicode_width::UnicodeWidthStr;

/// One labeled value of the series being charted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesEntry {
    pub label: String,
    pub value: f64,
}

impl SeriesEntry {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Angle in radians for point `index` of an `n`-gon.
///
/// Index 0 sits at the top of the circle (-pi/2), subsequent indices
/// advance clockwise in uniform steps of 2*pi/n.
pub fn point_angle(index: usize, n: usize) -> f64 {
    debug_assert!(index < n);
    TAU * index as f64 / n as f64 - FRAC_PI_2
}

/// Lay the series out on the chart circle.
///
/// `dots` pairs positionally with `series` (normally the output of
/// [`crate::chart::classify`] over the same values); a shorter slice pads
/// with `Normal`. An empty series yields an empty layout. Pure: identical
/// inputs always produce identical points.
pub fn layout(series: &[SeriesEntry], dots: &[DotType], config: &ChartConfig) -> Vec<ChartPoint> {
    let n = series.len();

    series
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let angle = point_angle(index, n);
            ChartPoint {
                label: entry.label.clone(),
                label_lines: wrap_label(&entry.label, config.label_budget),
                value: entry.value,
                dot_type: dots.get(index).copied().unwrap_or(DotType::Normal),
                x: config.center_x + config.radius * angle.cos(),
                y: config.center_y + config.radius * angle.sin(),
            }
        })
        .collect()
}

/// Wrap a label into at most two lines of `budget` display columns.
///
/// The first line is filled greedily on word boundaries; everything left
/// joins the second line un-truncated, so a lone word wider than the budget
/// still occupies a full line rather than being split mid-word. A label
/// within budget never splits.
pub fn wrap_label(label: &str, budget: usize) -> Vec<String> {
    if label.width() <= budget {
        return vec![label.to_string()];
    }

    let words: Vec<&str> = label.split_whitespace().collect();
    if words.is_empty() {
        return vec![label.to_string()];
    }

    let mut first = words[0].to_string();
    let mut taken = 1;
    for word in &words[1..] {
        if first.width() + 1 + word.width() > budget {
            break;
        }
        first.push(' ');
        first.push_str(word);
        taken += 1;
    }

    if taken == words.len() {
        vec![first]
    } else {
        vec![first, words[taken..].join(" ")]
    }
}
