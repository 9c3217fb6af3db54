//! Per-team match history and the hierarchical performance breakdown.

use serde::Serialize;

use crate::data::{MatchRecord, TossDecision};

/// Outcome of a match from one team's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Win,
    Loss,
}

/// A match row annotated with the selected team's outcome.
#[derive(Debug, Clone, Serialize)]
pub struct TeamMatch {
    #[serde(flatten)]
    pub record: MatchRecord,
    pub outcome: Outcome,
}

/// One leaf of the venue → toss winner → toss decision → outcome
/// breakdown. The nesting itself is a presentation concern; the core only
/// supplies the filtered, outcome-labeled rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownRow {
    pub venue: String,
    pub toss_winner: String,
    pub toss_decision: TossDecision,
    pub outcome: Outcome,
}

/// Every match the team played, home or away, date ascending.
///
/// The outcome comes from the free-text result line: "<team> won …" means
/// a win, anything else (including a no-result) reads as a loss for the
/// team, matching how the season feed words its results. An unknown team
/// yields an empty history.
pub fn team_history(records: &[MatchRecord], team: &str) -> Vec<TeamMatch> {
    let won_label = format!("{} won", team);
    let mut history: Vec<TeamMatch> = records
        .iter()
        .filter(|r| r.involves(team))
        .map(|r| TeamMatch {
            record: r.clone(),
            outcome: if r.result_outcome.contains(&won_label) {
                Outcome::Win
            } else {
                Outcome::Loss
            },
        })
        .collect();
    history.sort_by_key(|m| m.record.date);
    history
}

/// The team-history rows that carry every field the hierarchical view
/// needs. Rows missing venue, toss winner, or toss decision are dropped
/// here and nowhere else.
pub fn performance_breakdown(records: &[MatchRecord], team: &str) -> Vec<BreakdownRow> {
    team_history(records, team)
        .into_iter()
        .filter_map(|m| {
            let r = m.record;
            Some(BreakdownRow {
                venue: r.cleaned_venue?,
                toss_winner: r.toss_winner?,
                toss_decision: r.toss_decision?,
                outcome: m.outcome,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::testutil::{decided, no_result};
    use crate::data::WinningType;

    fn season() -> Vec<MatchRecord> {
        vec![
            decided(5, "MI", "CSK", false, WinningType::Wickets, 5.0, "Mumbai"),
            decided(1, "CSK", "MI", true, WinningType::Runs, 20.0, "Chennai"),
            decided(3, "RCB", "PBKS", true, WinningType::Runs, 12.0, "Bengaluru"),
            no_result(4, "MI", "RCB"),
        ]
    }

    #[test]
    fn test_history_only_involves_team_sorted() {
        let history = team_history(&season(), "MI");
        assert_eq!(history.len(), 3);
        assert!(history
            .iter()
            .all(|m| m.record.home_team_abbrev == "MI" || m.record.away_team_abbrev == "MI"));
        assert!(history.windows(2).all(|w| w[0].record.date <= w[1].record.date));
    }

    #[test]
    fn test_history_has_no_duplicates() {
        let history = team_history(&season(), "MI");
        let mut dates: Vec<_> = history.iter().map(|m| m.record.date).collect();
        dates.dedup();
        assert_eq!(dates.len(), 3);
    }

    #[test]
    fn test_outcome_classification() {
        let history = team_history(&season(), "CSK");
        // Day 1: "CSK won by 20 runs" → Win. Day 5: "CSK won by 5 wickets"
        // (away win at Mumbai) → Win.
        assert_eq!(history.len(), 2);
        assert!(history.iter().all(|m| m.outcome == Outcome::Win));

        let mi = team_history(&season(), "MI");
        // MI lost both decided matches and had one washout.
        assert!(mi.iter().all(|m| m.outcome == Outcome::Loss));
    }

    #[test]
    fn test_unknown_team_is_empty() {
        assert!(team_history(&season(), "SRH").is_empty());
        assert!(performance_breakdown(&season(), "SRH").is_empty());
    }

    #[test]
    fn test_breakdown_drops_rows_missing_fields() {
        // MI played 3 matches but the washout has no venue/toss data.
        let breakdown = performance_breakdown(&season(), "MI");
        assert_eq!(breakdown.len(), 2);
        assert!(breakdown
            .iter()
            .all(|b| !b.venue.is_empty() && !b.toss_winner.is_empty()));
    }

    #[test]
    fn test_team_match_json_shape() {
        // The dashboard page reads these exact field names.
        let history = team_history(&season(), "CSK");
        let json = serde_json::to_value(&history[0]).unwrap();
        assert_eq!(json["date"], "2024-04-01");
        assert_eq!(json["home_team_abbrev"], "CSK");
        assert_eq!(json["winning_type"], "runs");
        assert_eq!(json["outcome"], "Win");
        assert_eq!(json["toss_decision"], "bat");
    }

    #[test]
    fn test_rerun_is_identical() {
        let records = season();
        assert_eq!(
            performance_breakdown(&records, "MI"),
            performance_breakdown(&records, "MI")
        );
    }
}
