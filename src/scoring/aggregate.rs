//! Signal set to scalar score.

use std::collections::HashMap;

use crate::config::CATEGORY_SCORE_CAP;
use crate::models::Signal;

/// Collapses a signal set into one score.
///
/// Weights are summed per category, each category subtotal is capped at
/// `CATEGORY_SCORE_CAP`, and the capped subtotals are added up. The same
/// function scores every platform and the AI heuristics.
pub fn score(signals: &[Signal]) -> u32 {
    let mut per_category: HashMap<&str, u32> = HashMap::new();
    for signal in signals {
        let subtotal = per_category.entry(signal.category.as_str()).or_insert(0);
        *subtotal = subtotal.saturating_add(signal.confidence.weight());
    }
    per_category
        .values()
        .map(|subtotal| (*subtotal).min(CATEGORY_SCORE_CAP))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Confidence;
    use proptest::prelude::*;

    fn signal(category: &str, confidence: Confidence) -> Signal {
        Signal::new(category, confidence, "test", "value")
    }

    #[test]
    fn test_empty_set_scores_zero() {
        assert_eq!(score(&[]), 0);
    }

    #[test]
    fn test_distinct_categories_add_up() {
        let signals = [
            signal("hostname", Confidence::High),
            signal("meta_tag", Confidence::High),
        ];
        assert_eq!(score(&signals), 20);
    }

    #[test]
    fn test_category_is_capped() {
        let signals: Vec<Signal> = (0..12).map(|_| signal("css_class", Confidence::Low)).collect();
        assert_eq!(score(&signals), CATEGORY_SCORE_CAP);
    }

    #[test]
    fn test_cap_applies_per_category() {
        let signals = [
            signal("css_class", Confidence::High),
            signal("css_class", Confidence::High),
            signal("hostname", Confidence::Medium),
        ];
        assert_eq!(score(&signals), CATEGORY_SCORE_CAP + 5);
    }

    #[test]
    fn test_unrated_signal_counts_one() {
        assert_eq!(score(&[signal("js_global", Confidence::Unrated)]), 1);
    }

    fn arb_confidence() -> impl Strategy<Value = Confidence> {
        prop_oneof![
            Just(Confidence::High),
            Just(Confidence::Medium),
            Just(Confidence::Low),
            Just(Confidence::Unrated),
        ]
    }

    fn arb_signal() -> impl Strategy<Value = Signal> {
        (
            prop::sample::select(vec!["hostname", "meta_tag", "css_class", "cdn_url"]),
            arb_confidence(),
        )
            .prop_map(|(category, confidence)| signal(category, confidence))
    }

    proptest! {
        #[test]
        fn prop_score_is_deterministic(signals in prop::collection::vec(arb_signal(), 0..40)) {
            prop_assert_eq!(score(&signals), score(&signals));
        }

        #[test]
        fn prop_adding_a_signal_never_decreases(
            signals in prop::collection::vec(arb_signal(), 0..40),
            extra in arb_signal(),
        ) {
            let before = score(&signals);
            let mut more = signals.clone();
            more.push(extra);
            prop_assert!(score(&more) >= before);
        }

        #[test]
        fn prop_score_bounded_by_category_count(signals in prop::collection::vec(arb_signal(), 0..60)) {
            let categories: std::collections::HashSet<&str> =
                signals.iter().map(|s| s.category.as_str()).collect();
            prop_assert!(score(&signals) <= CATEGORY_SCORE_CAP * categories.len() as u32);
        }

        #[test]
        fn prop_saturated_category_contributes_exactly_cap(count in 8usize..50) {
            let signals: Vec<Signal> =
                (0..count).map(|_| signal("dom_attribute", Confidence::Low)).collect();
            prop_assert_eq!(score(&signals), CATEGORY_SCORE_CAP);
        }
    }
}
