//! Strength/challenge selection over an aggregated score map.
//!
//! Components are ranked by score, descending, and a bounded selection is
//! extracted: up to two "positive" components (the strengths the offer copy
//! leads with) and a single "negative" one (the challenge the offer promises
//! to address). The selection is recomputed on every read and never
//! persisted.

use crate::core::{Component, RankedSelection, ScoreMap};

/// Select the positive (strength) and negative (challenge) components.
///
/// Only catalog components whose key is present in `scores` participate;
/// score-map keys with no catalog entry are ignored. Ties keep catalog
/// order (stable sort), so the backing catalog decides which of two equal
/// scores ranks first.
///
/// Selection policy by participating-component count `n`:
/// - `n >= 3`: two positive, the lowest-ranked entry negative
/// - `n == 2`: one positive, the remaining entry negative
/// - `n == 1`: one positive, no negative
/// - `n == 0`: empty selection
///
/// Offer pages render a single strength when only two components were
/// measured, hence the asymmetry between the two- and three-component
/// policies.
pub fn select(scores: &ScoreMap, catalog: &[Component]) -> RankedSelection {
    let ranked = rank_components(scores, catalog);

    match ranked.len() {
        0 => RankedSelection::default(),
        1 => RankedSelection {
            positive: vec![ranked[0].clone()],
            negative: None,
        },
        2 => RankedSelection {
            positive: vec![ranked[0].clone()],
            negative: Some(ranked[1].clone()),
        },
        _ => RankedSelection {
            positive: ranked[..2].to_vec(),
            negative: ranked.last().cloned(),
        },
    }
}

/// Rank catalog components present in the score map, highest score first.
///
/// The sort is stable, so equal scores retain catalog order.
fn rank_components(scores: &ScoreMap, catalog: &[Component]) -> Vec<Component> {
    let mut ranked: Vec<(Component, i64)> = catalog
        .iter()
        .filter_map(|component| {
            scores
                .get(&component.key)
                .map(|score| (component.clone(), *score))
        })
        .collect();

    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.into_iter().map(|(component, _)| component).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Component> {
        vec![
            Component::new("focus", "Focus"),
            Component::new("drive", "Drive"),
            Component::new("empathy", "Empathy"),
            Component::new("calm", "Calm"),
        ]
    }

    fn scores(entries: &[(&str, i64)]) -> ScoreMap {
        entries
            .iter()
            .map(|(key, score)| (key.to_string(), *score))
            .collect()
    }

    #[test]
    fn test_select_empty_map() {
        let selection = select(&ScoreMap::new(), &catalog());

        assert!(selection.positive.is_empty());
        assert!(selection.negative.is_none());
    }

    #[test]
    fn test_select_single_component() {
        let selection = select(&scores(&[("focus", 7)]), &catalog());

        assert_eq!(selection.positive.len(), 1);
        assert_eq!(selection.positive[0].key, "focus");
        assert!(selection.negative.is_none());
    }

    #[test]
    fn test_select_two_components_one_positive() {
        let selection = select(&scores(&[("focus", 7), ("drive", 3)]), &catalog());

        assert_eq!(selection.positive.len(), 1);
        assert_eq!(selection.positive[0].key, "focus");
        assert_eq!(selection.negative.unwrap().key, "drive");
    }

    #[test]
    fn test_select_three_or_more_two_positive() {
        let map = scores(&[("focus", 12), ("drive", 9), ("empathy", 9), ("calm", 2)]);
        let selection = select(&map, &catalog());

        let positive: Vec<&str> = selection.positive.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(positive, vec!["focus", "drive"]);
        assert_eq!(selection.negative.unwrap().key, "calm");
    }

    #[test]
    fn test_select_ties_keep_catalog_order() {
        let map = scores(&[("focus", 5), ("drive", 5), ("empathy", 5)]);
        let selection = select(&map, &catalog());

        let positive: Vec<&str> = selection.positive.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(positive, vec!["focus", "drive"]);
        assert_eq!(selection.negative.unwrap().key, "empathy");
    }

    #[test]
    fn test_select_negative_never_in_positive() {
        let map = scores(&[("focus", 4), ("drive", 4), ("empathy", 4), ("calm", 4)]);
        let selection = select(&map, &catalog());

        let negative = selection.negative.unwrap();
        assert!(selection.positive.iter().all(|c| c.key != negative.key));
    }

    #[test]
    fn test_select_ignores_keys_missing_from_catalog() {
        let map = scores(&[("focus", 3), ("unknown", 99)]);
        let selection = select(&map, &catalog());

        assert_eq!(selection.positive.len(), 1);
        assert_eq!(selection.positive[0].key, "focus");
        assert!(selection.negative.is_none());
    }

    #[test]
    fn test_select_ignores_catalog_entries_absent_from_map() {
        // Catalog has four components but only two were scored; the other
        // two must not appear in the selection.
        let map = scores(&[("empathy", 2), ("calm", 8)]);
        let selection = select(&map, &catalog());

        assert_eq!(selection.positive[0].key, "calm");
        assert_eq!(selection.negative.unwrap().key, "empathy");
    }
}
