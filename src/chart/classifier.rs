//! Rank-based dot classification for chart emphasis.
//!
//! Positions are tagged by their rank in the stable-sorted value sequence,
//! never by scanning whether a raw value appears in a top-two value list.
//! Value membership misclassifies under duplicates (three entries sharing
//! the top value would all be tagged high); rank identity guarantees at most
//! two `High` positions and at most one `Low` regardless of ties.

use crate::core::DotType;
use std::cmp::Ordering;

/// Classify each position of a score vector as `High`, `Low` or `Normal`.
///
/// The top two ranked positions are `High`, the bottom ranked position is
/// `Low`. Ties are broken by first occurrence: the sort is stable, so of two
/// equal values the earlier position takes the better rank.
///
/// Degenerate sizes follow the selection policy for small catalogs: a single
/// entry is neither strength nor challenge (`Normal`), two entries split
/// into one `High` and one `Low`.
pub fn classify(values: &[f64]) -> Vec<DotType> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![DotType::Normal];
    }

    let ranked = rank_positions(values);
    let mut dots = vec![DotType::Normal; n];

    dots[ranked[0]] = DotType::High;
    if n >= 3 {
        dots[ranked[1]] = DotType::High;
    }
    dots[ranked[n - 1]] = DotType::Low;

    dots
}

/// Position indices ordered by value descending, stable on ties.
fn rank_positions(values: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| {
        values[b]
            .partial_cmp(&values[a])
            .unwrap_or(Ordering::Equal)
    });
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use DotType::{High, Low, Normal};

    #[test]
    fn test_classify_empty() {
        assert!(classify(&[]).is_empty());
    }

    #[test]
    fn test_classify_single_entry_is_normal() {
        assert_eq!(classify(&[7.0]), vec![Normal]);
    }

    #[test]
    fn test_classify_two_entries_split_high_low() {
        assert_eq!(classify(&[3.0, 8.0]), vec![Low, High]);
    }

    #[test]
    fn test_classify_marks_top_two_and_bottom_one() {
        assert_eq!(
            classify(&[12.0, 9.0, 4.0, 2.0]),
            vec![High, High, Normal, Low]
        );
    }

    #[test]
    fn test_classify_duplicate_top_values_stay_bounded() {
        // Three entries share the top value; only the first two by position
        // rank high, and exactly one entry is low.
        let dots = classify(&[5.0, 5.0, 5.0, 1.0]);

        assert_eq!(dots, vec![High, High, Normal, Low]);
    }

    #[test]
    fn test_classify_all_equal_values() {
        let dots = classify(&[4.0, 4.0, 4.0, 4.0]);

        let highs = dots.iter().filter(|d| **d == High).count();
        let lows = dots.iter().filter(|d| **d == Low).count();
        assert_eq!(highs, 2);
        assert_eq!(lows, 1);
    }

    #[test]
    fn test_classify_tie_for_second_high_goes_to_first_occurrence() {
        assert_eq!(
            classify(&[12.0, 9.0, 9.0, 2.0]),
            vec![High, High, Normal, Low]
        );
    }

    #[test]
    fn test_classify_tie_for_low_goes_to_last_rank() {
        // Both trailing entries score 2; the stable sort ranks the earlier
        // one first, so the later one ends up last and takes the low tag.
        assert_eq!(
            classify(&[12.0, 9.0, 2.0, 2.0]),
            vec![High, High, Normal, Low]
        );
    }
}
