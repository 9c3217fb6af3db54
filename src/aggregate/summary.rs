//! Season-level headline numbers for the dashboard's stat cards.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::data::MatchRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonSummary {
    pub total_matches: u32,
    pub decided_matches: u32,
    pub teams: u32,
    pub venues: u32,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

pub fn season_summary(records: &[MatchRecord]) -> SeasonSummary {
    let mut teams = BTreeSet::new();
    let mut venues = BTreeSet::new();
    let mut decided = 0u32;
    for r in records {
        teams.insert(r.home_team_abbrev.as_str());
        teams.insert(r.away_team_abbrev.as_str());
        if let Some(v) = r.cleaned_venue.as_deref() {
            venues.insert(v);
        }
        if r.is_decided() {
            decided += 1;
        }
    }
    SeasonSummary {
        total_matches: records.len() as u32,
        decided_matches: decided,
        teams: teams.len() as u32,
        venues: venues.len() as u32,
        first_date: records.iter().map(|r| r.date).min(),
        last_date: records.iter().map(|r| r.date).max(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::testutil::{decided, no_result};
    use crate::data::WinningType;

    #[test]
    fn test_summary_counts() {
        let records = vec![
            decided(1, "CSK", "MI", true, WinningType::Runs, 20.0, "Chennai"),
            decided(2, "MI", "CSK", false, WinningType::Wickets, 5.0, "Mumbai"),
            no_result(4, "MI", "RCB"),
        ];
        let summary = season_summary(&records);
        assert_eq!(summary.total_matches, 3);
        assert_eq!(summary.decided_matches, 2);
        assert_eq!(summary.teams, 3);
        // The washout has no venue, so only two venues are observed.
        assert_eq!(summary.venues, 2);
        assert_eq!(summary.first_date, NaiveDate::from_ymd_opt(2024, 4, 1));
        assert_eq!(summary.last_date, NaiveDate::from_ymd_opt(2024, 4, 4));
    }

    #[test]
    fn test_summary_of_empty_table() {
        let summary = season_summary(&[]);
        assert_eq!(summary.total_matches, 0);
        assert_eq!(summary.first_date, None);
    }
}
