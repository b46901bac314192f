//! Delivery probability table
//!
//! All functions are pure: a uniform draw and the wicket count go in, a
//! delivery category comes out. The bands partition `[0, 1)` cumulatively in
//! a fixed order, starting with the wicket band whose width depends on how
//! deep into the batting order the innings is.

use serde::{Deserialize, Serialize};

use super::score::MAX_WICKETS;
use crate::error::{MatchError, Result};

/// Category of a single delivery, as decided by the probability table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryCategory {
    Wicket,
    Six,
    Four,
    Three,
    Two,
    One,
    /// Wide or no-ball; which one is decided by a second draw.
    Extra,
    Dot,
}

/// Band layout for the delivery partition.
///
/// Scoring bands are stored as cumulative edges measured from the end of the
/// wicket band, so a draw `r` falls in a band when `r < wicket + edge`. Edges
/// are kept as-is rather than summed from widths to avoid drift at the band
/// boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutcomeTable {
    /// Wicket band with 0-4 wickets down.
    pub wicket_top_order: f64,
    /// Wicket band with 5-7 wickets down.
    pub wicket_middle_order: f64,
    /// Wicket band with 8+ wickets down.
    pub wicket_tail: f64,
    pub six_edge: f64,
    pub four_edge: f64,
    pub three_edge: f64,
    pub two_edge: f64,
    pub one_edge: f64,
    /// End of the wide/no-ball band; dot balls fill the rest.
    pub extra_edge: f64,
}

impl Default for OutcomeTable {
    fn default() -> Self {
        Self {
            wicket_top_order: 0.03,
            wicket_middle_order: 0.05,
            wicket_tail: 0.08,
            six_edge: 0.05,
            four_edge: 0.17,
            three_edge: 0.22,
            two_edge: 0.37,
            one_edge: 0.62,
            extra_edge: 0.67,
        }
    }
}

impl OutcomeTable {
    /// Width of the wicket band for the given wickets lost.
    pub fn wicket_probability(&self, current_wickets: u8) -> f64 {
        if current_wickets >= 8 {
            self.wicket_tail
        } else if current_wickets >= 5 {
            self.wicket_middle_order
        } else {
            self.wicket_top_order
        }
    }

    /// Scoring and extra band edges in partition order, after the wicket band.
    fn scoring_edges(&self) -> [(f64, DeliveryCategory); 6] {
        [
            (self.six_edge, DeliveryCategory::Six),
            (self.four_edge, DeliveryCategory::Four),
            (self.three_edge, DeliveryCategory::Three),
            (self.two_edge, DeliveryCategory::Two),
            (self.one_edge, DeliveryCategory::One),
            (self.extra_edge, DeliveryCategory::Extra),
        ]
    }

    /// Map a uniform draw `r` in `[0, 1)` to a delivery category.
    ///
    /// With all ten wickets already down the wicket band resolves to a dot
    /// ball; a side that is all out cannot lose another wicket.
    pub fn classify(&self, r: f64, current_wickets: u8) -> DeliveryCategory {
        let wicket_prob = self.wicket_probability(current_wickets);
        if r < wicket_prob {
            return if current_wickets < MAX_WICKETS {
                DeliveryCategory::Wicket
            } else {
                DeliveryCategory::Dot
            };
        }

        self.scoring_edges()
            .into_iter()
            .find(|(edge, _)| r < wicket_prob + edge)
            .map_or(DeliveryCategory::Dot, |(_, category)| category)
    }

    /// Width left over for dot balls at the given wickets lost.
    pub fn dot_probability(&self, current_wickets: u8) -> f64 {
        (1.0 - self.wicket_probability(current_wickets) - self.extra_edge).max(0.0)
    }

    pub fn validate(&self) -> Result<()> {
        let values = [
            ("wicket_top_order", self.wicket_top_order),
            ("wicket_middle_order", self.wicket_middle_order),
            ("wicket_tail", self.wicket_tail),
            ("six_edge", self.six_edge),
            ("four_edge", self.four_edge),
            ("three_edge", self.three_edge),
            ("two_edge", self.two_edge),
            ("one_edge", self.one_edge),
            ("extra_edge", self.extra_edge),
        ];
        for (name, value) in values {
            if !value.is_finite() || value < 0.0 {
                return Err(MatchError::InvalidOutcomeTable(format!(
                    "{name} must be a non-negative probability, got {value}"
                )));
            }
        }

        let edges = self.scoring_edges();
        for pair in edges.windows(2) {
            if pair[1].0 < pair[0].0 {
                return Err(MatchError::InvalidOutcomeTable(format!(
                    "band edges must not decrease ({:?} edge {} is below {:?} edge {})",
                    pair[1].1, pair[1].0, pair[0].1, pair[0].0
                )));
            }
        }

        let widest_wicket = self.wicket_top_order.max(self.wicket_middle_order).max(self.wicket_tail);
        let total = widest_wicket + self.extra_edge;
        if total > 1.0 + 1e-9 {
            return Err(MatchError::InvalidOutcomeTable(format!(
                "bands cover {total:.3} of the unit interval (max 1.0)"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wicket_probability_tail_effect() {
        let table = OutcomeTable::default();
        assert_eq!(table.wicket_probability(0), 0.03);
        assert_eq!(table.wicket_probability(4), 0.03);
        assert_eq!(table.wicket_probability(5), 0.05);
        assert_eq!(table.wicket_probability(7), 0.05);
        assert_eq!(table.wicket_probability(8), 0.08);
        assert_eq!(table.wicket_probability(10), 0.08);
    }

    #[test]
    fn test_classify_top_order_bands() {
        let table = OutcomeTable::default();
        // Band edges with 0 wickets: .03 .08 .20 .25 .40 .65 .70
        let cases = [
            (0.00, DeliveryCategory::Wicket),
            (0.02, DeliveryCategory::Wicket),
            (0.05, DeliveryCategory::Six),
            (0.15, DeliveryCategory::Four),
            (0.22, DeliveryCategory::Three),
            (0.30, DeliveryCategory::Two),
            (0.50, DeliveryCategory::One),
            (0.68, DeliveryCategory::Extra),
            (0.75, DeliveryCategory::Dot),
            (0.99, DeliveryCategory::Dot),
        ];
        for (r, expected) in cases {
            assert_eq!(table.classify(r, 0), expected, "r = {r}");
        }
    }

    #[test]
    fn test_classify_tail_shifts_bands() {
        let table = OutcomeTable::default();
        // With 8 wickets down the wicket band is .08 wide and everything shifts.
        assert_eq!(table.classify(0.06, 8), DeliveryCategory::Wicket);
        assert_eq!(table.classify(0.06, 0), DeliveryCategory::Six);
        assert_eq!(table.classify(0.12, 8), DeliveryCategory::Six);
        assert_eq!(table.classify(0.72, 8), DeliveryCategory::Extra);
        assert_eq!(table.classify(0.72, 0), DeliveryCategory::Dot);
    }

    #[test]
    fn test_draws_on_band_edges_start_the_next_band() {
        let table = OutcomeTable::default();
        let next = [
            (table.six_edge, DeliveryCategory::Four),
            (table.four_edge, DeliveryCategory::Three),
            (table.three_edge, DeliveryCategory::Two),
            (table.two_edge, DeliveryCategory::One),
            (table.one_edge, DeliveryCategory::Extra),
            (table.extra_edge, DeliveryCategory::Dot),
        ];
        for wickets in [0u8, 5, 8] {
            let wicket_prob = table.wicket_probability(wickets);
            assert_eq!(table.classify(wicket_prob, wickets), DeliveryCategory::Six);
            for (edge, expected) in next {
                let r = wicket_prob + edge;
                assert_eq!(table.classify(r, wickets), expected, "r = {r} w = {wickets}");
            }
        }
    }

    #[test]
    fn test_edge_draws_match_documented_partition() {
        let table = OutcomeTable::default();
        // Middle order: two is [.27, .42), one starts at .42.
        assert_eq!(table.classify(0.42, 5), DeliveryCategory::One);
        assert_eq!(table.classify(0.41, 5), DeliveryCategory::Two);
        // Tail: two is [.30, .45).
        assert_eq!(table.classify(0.44999999999999996, 8), DeliveryCategory::Two);
        assert_eq!(table.classify(0.46, 8), DeliveryCategory::One);
    }

    #[test]
    fn test_all_out_wicket_band_is_dot() {
        let table = OutcomeTable::default();
        assert_eq!(table.classify(0.01, MAX_WICKETS), DeliveryCategory::Dot);
        assert_eq!(table.classify(0.10, MAX_WICKETS), DeliveryCategory::Six);
    }

    #[test]
    fn test_dot_probability() {
        let table = OutcomeTable::default();
        assert!((table.dot_probability(0) - 0.30).abs() < 1e-9);
        assert!((table.dot_probability(9) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_default_table_is_valid() {
        assert!(OutcomeTable::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_width() {
        let table = OutcomeTable { four_edge: -0.1, ..OutcomeTable::default() };
        let err = table.validate().unwrap_err();
        assert!(err.to_string().contains("four"));
    }

    #[test]
    fn test_validate_rejects_overfull_table() {
        let table = OutcomeTable { extra_edge: 0.95, ..OutcomeTable::default() };
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_decreasing_edges() {
        let table = OutcomeTable { one_edge: 0.9, ..OutcomeTable::default() };
        let err = table.validate().unwrap_err();
        assert!(err.to_string().contains("must not decrease"));
    }

    proptest! {
        #[test]
        fn prop_wicket_band_only_below_ten(r in 0.0f64..1.0, wickets in 0u8..=10) {
            let table = OutcomeTable::default();
            let category = table.classify(r, wickets);
            if category == DeliveryCategory::Wicket {
                prop_assert!(wickets < MAX_WICKETS);
                prop_assert!(r < table.wicket_probability(wickets));
            }
        }

        #[test]
        fn prop_classification_is_monotone_in_band_order(a in 0.0f64..1.0, b in 0.0f64..1.0, wickets in 0u8..10) {
            let table = OutcomeTable::default();
            let order = |c: DeliveryCategory| match c {
                DeliveryCategory::Wicket => 0,
                DeliveryCategory::Six => 1,
                DeliveryCategory::Four => 2,
                DeliveryCategory::Three => 3,
                DeliveryCategory::Two => 4,
                DeliveryCategory::One => 5,
                DeliveryCategory::Extra => 6,
                DeliveryCategory::Dot => 7,
            };
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(order(table.classify(lo, wickets)) <= order(table.classify(hi, wickets)));
        }
    }
}
