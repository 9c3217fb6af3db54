//! Venue and toss breakdowns.

use std::collections::HashMap;

use serde::Serialize;

use crate::data::{MatchRecord, TossDecision};

/// Match and win counts for one venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueStats {
    pub venue: String,
    pub total_matches: u32,
    pub home_wins: u32,
    pub away_wins: u32,
}

/// How often a given toss decision preceded a win by a given team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TossOutcome {
    pub toss_decision: TossDecision,
    pub winner: String,
    pub count: u32,
}

/// Per-venue totals with the home/away win split.
///
/// Undecided matches count toward `total_matches` but neither win column,
/// so `home_wins + away_wins <= total_matches` with equality only when
/// every match at the venue was decided. Rows with no venue are skipped.
/// Sorted by total matches descending, then venue name.
pub fn venue_summary(records: &[MatchRecord]) -> Vec<VenueStats> {
    let mut counts: HashMap<&str, (u32, u32, u32)> = HashMap::new();
    for r in records {
        let Some(venue) = r.cleaned_venue.as_deref() else {
            continue;
        };
        let entry = counts.entry(venue).or_default();
        entry.0 += 1;
        if r.is_decided() {
            if r.home_win {
                entry.1 += 1;
            } else {
                entry.2 += 1;
            }
        }
    }

    let mut stats: Vec<VenueStats> = counts
        .into_iter()
        .map(|(venue, (total_matches, home_wins, away_wins))| VenueStats {
            venue: venue.to_string(),
            total_matches,
            home_wins,
            away_wins,
        })
        .collect();
    stats.sort_by(|a, b| {
        b.total_matches
            .cmp(&a.total_matches)
            .then_with(|| a.venue.cmp(&b.venue))
    });
    stats
}

/// Win counts grouped by toss decision, then by winning team.
///
/// Shows how often batting or fielding first correlated with which team
/// won. Rows with no recorded toss decision or no decided winner are
/// skipped. Bat groups come before Field; within a group, highest count
/// first, then team name.
pub fn toss_decision_outcomes(records: &[MatchRecord]) -> Vec<TossOutcome> {
    let mut counts: HashMap<(TossDecision, &str), u32> = HashMap::new();
    for r in records {
        let (Some(decision), Some(winner)) = (r.toss_decision, r.winner()) else {
            continue;
        };
        *counts.entry((decision, winner)).or_default() += 1;
    }

    let mut outcomes: Vec<TossOutcome> = counts
        .into_iter()
        .map(|((toss_decision, winner), count)| TossOutcome {
            toss_decision,
            winner: winner.to_string(),
            count,
        })
        .collect();
    let rank = |d: TossDecision| matches!(d, TossDecision::Field) as u8;
    outcomes.sort_by(|a, b| {
        rank(a.toss_decision)
            .cmp(&rank(b.toss_decision))
            .then_with(|| b.count.cmp(&a.count))
            .then_with(|| a.winner.cmp(&b.winner))
    });
    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::testutil::{decided, no_result};
    use crate::data::WinningType;

    #[test]
    fn test_spec_scenario_venue_summary() {
        let records = vec![
            decided(1, "CSK", "MI", true, WinningType::Runs, 20.0, "Chennai"),
            decided(2, "MI", "CSK", false, WinningType::Wickets, 5.0, "Mumbai"),
        ];
        let stats = venue_summary(&records);
        let chennai = stats.iter().find(|v| v.venue == "Chennai").unwrap();
        assert_eq!((chennai.total_matches, chennai.home_wins, chennai.away_wins), (1, 1, 0));
        let mumbai = stats.iter().find(|v| v.venue == "Mumbai").unwrap();
        assert_eq!((mumbai.total_matches, mumbai.home_wins, mumbai.away_wins), (1, 0, 1));
    }

    #[test]
    fn test_venue_totals_match_row_counts() {
        let records = vec![
            decided(1, "CSK", "MI", true, WinningType::Runs, 20.0, "Chennai"),
            decided(2, "CSK", "RCB", false, WinningType::Wickets, 6.0, "Chennai"),
            decided(3, "MI", "CSK", true, WinningType::Runs, 9.0, "Mumbai"),
        ];
        let stats = venue_summary(&records);
        let chennai = stats.iter().find(|v| v.venue == "Chennai").unwrap();
        assert_eq!(chennai.total_matches, 2);
        assert_eq!(chennai.home_wins + chennai.away_wins, 2);
        // Chennai hosted more matches, so it sorts first.
        assert_eq!(stats[0].venue, "Chennai");
    }

    #[test]
    fn test_undecided_match_counts_no_win() {
        let mut washout = no_result(4, "GT", "LSG");
        washout.cleaned_venue = Some("Ahmedabad".into());
        let stats = venue_summary(&[washout]);
        assert_eq!(stats[0].total_matches, 1);
        assert_eq!(stats[0].home_wins + stats[0].away_wins, 0);
    }

    #[test]
    fn test_toss_outcomes_grouping() {
        let mut field_win = decided(2, "MI", "CSK", false, WinningType::Wickets, 5.0, "Mumbai");
        field_win.toss_decision = Some(TossDecision::Field);
        let records = vec![
            decided(1, "CSK", "MI", true, WinningType::Runs, 20.0, "Chennai"),
            decided(3, "CSK", "RCB", true, WinningType::Runs, 12.0, "Chennai"),
            field_win,
        ];
        let outcomes = toss_decision_outcomes(&records);
        assert_eq!(
            outcomes,
            vec![
                TossOutcome { toss_decision: TossDecision::Bat, winner: "CSK".into(), count: 2 },
                TossOutcome { toss_decision: TossDecision::Field, winner: "CSK".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_toss_outcomes_skip_missing_fields() {
        let records = vec![no_result(1, "GT", "LSG")];
        assert!(toss_decision_outcomes(&records).is_empty());
    }
}
