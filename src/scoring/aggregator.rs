//! Score aggregation: raw answers reduced to a per-component score map.
//!
//! Summation is the only combinator. No averaging, weighting or
//! normalization happens here, and no I/O: the function is a pure fold over
//! the answer set, deterministic under any reordering of answers or links.

use crate::core::{Answer, QuestionLink, ScoreMap};
use std::collections::HashMap;

/// Aggregate answered questions into cumulative per-component scores.
///
/// Each answer contributes its score once per link whose `question_id`
/// matches, so a question linked to several components fans out to each of
/// them. Answers with no matching link contribute nothing.
pub fn aggregate(answers: &[Answer], links: &[QuestionLink]) -> ScoreMap {
    let index = link_index(links);

    answers.iter().fold(ScoreMap::new(), |mut scores, answer| {
        match index.get(answer.question_id.as_str()) {
            Some(keys) => {
                for key in keys {
                    *scores.entry((*key).to_string()).or_insert(0) += answer.score;
                }
            }
            None => {
                log::debug!(
                    "answer to question {} has no component link, skipping",
                    answer.question_id
                );
            }
        }
        scores
    })
}

/// Index links by question id for O(1) fan-out lookup.
fn link_index(links: &[QuestionLink]) -> HashMap<&str, Vec<&str>> {
    links.iter().fold(HashMap::new(), |mut index, link| {
        index
            .entry(link.question_id.as_str())
            .or_default()
            .push(link.component_key.as_str());
        index
    })
}

/// Score for a component key, with absent keys reading as 0.
pub fn score_for(scores: &ScoreMap, key: &str) -> i64 {
    scores.get(key).copied().unwrap_or(0)
}

/// Sum of all component scores in the map.
pub fn total(scores: &ScoreMap) -> i64 {
    scores.values().sum()
}
