//! Profile report pipeline.
//!
//! Composes the core stages into the record the funnel pages consume:
//! aggregate → select → classify → lay out. Every stage is a pure function,
//! so the whole report is safe to recompute on each view (results page,
//! offer page, chart render) from the same persisted score map.

use crate::chart::{classify, layout, SeriesEntry};
use crate::config::ChartConfig;
use crate::core::{Answer, ChartPoint, Component, ProfileReport, QuestionLink, ScoreMap};
use crate::ranking::select;
use crate::scoring::{aggregate, score_for};

/// Build the full profile report for one quiz attempt.
///
/// `cached` short-circuits aggregation with an already-persisted score map
/// (the read path: results and offer pages recompute from storage instead of
/// re-fetching answers). When absent, the score map is aggregated from
/// `answers` and `links`.
pub fn build_report(
    answers: &[Answer],
    links: &[QuestionLink],
    catalog: &[Component],
    cached: Option<&ScoreMap>,
    chart_config: &ChartConfig,
) -> ProfileReport {
    let scores = match cached {
        Some(map) => map.clone(),
        None => aggregate(answers, links),
    };

    let selection = select(&scores, catalog);
    let chart = chart_points(&scores, catalog, chart_config).into_iter().collect();

    ProfileReport {
        scores,
        selection,
        chart,
    }
}

/// Classify and lay out the chart series for a score map.
///
/// The chart always renders the whole catalog in catalog order, with
/// components that received no contributions charted at 0. Selection is
/// stricter (it skips absent keys entirely); the chart shows the gap
/// instead.
pub fn chart_points(
    scores: &ScoreMap,
    catalog: &[Component],
    chart_config: &ChartConfig,
) -> Vec<ChartPoint> {
    let series: Vec<SeriesEntry> = catalog
        .iter()
        .map(|component| {
            SeriesEntry::new(
                component.name.clone(),
                score_for(scores, &component.key) as f64,
            )
        })
        .collect();

    let values: Vec<f64> = series.iter().map(|entry| entry.value).collect();
    let dots = classify(&values);

    layout(&series, &dots, chart_config)
}
