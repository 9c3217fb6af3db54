//! Winning-margin distributions.

use crate::data::{MatchRecord, WinningType};

/// Margins for every match won the given way, in table (date) order.
///
/// Rows whose margin failed numeric coercion at load are excluded, not
/// zero-filled. Histogram binning is left to the presentation layer: runs
/// margins span a wide range while wicket margins live in 1..=10, so the
/// page bins them at 20 and 8 respectively.
pub fn margin_distribution(records: &[MatchRecord], winning_type: WinningType) -> Vec<f64> {
    records
        .iter()
        .filter(|r| r.winning_type == winning_type)
        .filter_map(|r| r.winning_margin)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::testutil::decided;
    use approx::assert_relative_eq;

    #[test]
    fn test_filters_by_winning_type() {
        let records = vec![
            decided(1, "CSK", "MI", true, WinningType::Runs, 20.0, "Chennai"),
            decided(2, "MI", "CSK", false, WinningType::Wickets, 5.0, "Mumbai"),
            decided(3, "RCB", "CSK", true, WinningType::Runs, 12.0, "Bengaluru"),
        ];
        let runs = margin_distribution(&records, WinningType::Runs);
        assert_eq!(runs.len(), 2);
        assert_relative_eq!(runs[0], 20.0);
        assert_relative_eq!(runs[1], 12.0);

        let wickets = margin_distribution(&records, WinningType::Wickets);
        assert_eq!(wickets, vec![5.0]);
    }

    #[test]
    fn test_unparseable_margin_is_excluded() {
        let mut bad = decided(1, "CSK", "MI", true, WinningType::Runs, 20.0, "Chennai");
        bad.winning_margin = None;
        let records = vec![
            bad,
            decided(2, "RCB", "CSK", true, WinningType::Runs, 12.0, "Bengaluru"),
        ];
        assert_eq!(margin_distribution(&records, WinningType::Runs), vec![12.0]);
    }

    #[test]
    fn test_empty_for_absent_type() {
        let records = vec![decided(1, "CSK", "MI", true, WinningType::Runs, 20.0, "Chennai")];
        assert!(margin_distribution(&records, WinningType::Wickets).is_empty());
    }
}
