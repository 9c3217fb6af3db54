pub mod models;
pub mod source;

pub use models::{MatchRecord, TossDecision, WinningType};
pub use source::{CsvSource, DataError, MatchSource};

use tracing::info;

/// The season's match table.
///
/// Loaded once at startup, sorted by date ascending, and never mutated
/// afterwards; the dashboard shares it via `Arc` and every derivation is a
/// pure read over it.
pub struct MatchTable {
    records: Vec<MatchRecord>,
}

impl MatchTable {
    /// Pull every row from the source and fix the table for the lifetime
    /// of the process.
    pub fn load(source: &dyn MatchSource) -> Result<Self, DataError> {
        let mut records = source.fetch_matches()?;
        // Stable sort: rows on the same date keep their source order.
        records.sort_by_key(|r| r.date);

        let first = records.first().map(|r| r.date);
        let last = records.last().map(|r| r.date);
        info!(
            "Loaded {} matches from {} source ({:?} – {:?})",
            records.len(),
            source.name(),
            first,
            last
        );
        Ok(MatchTable { records })
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    struct FixedSource(Vec<MatchRecord>);

    impl MatchSource for FixedSource {
        fn fetch_matches(&self) -> Result<Vec<MatchRecord>, DataError> {
            Ok(self.0.clone())
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    fn match_on(day: u32, home: &str, away: &str) -> MatchRecord {
        MatchRecord {
            date: NaiveDate::from_ymd_opt(2024, 4, day).unwrap(),
            home_team_abbrev: home.into(),
            away_team_abbrev: away.into(),
            home_win: true,
            away_win: false,
            winning_type: WinningType::Runs,
            winning_margin: Some(10.0),
            cleaned_venue: Some("Chennai".into()),
            toss_winner: Some(home.to_string()),
            toss_decision: Some(TossDecision::Bat),
            result_outcome: format!("{} won by 10 runs", home),
        }
    }

    #[test]
    fn test_load_sorts_by_date() {
        let source = FixedSource(vec![
            match_on(9, "MI", "CSK"),
            match_on(2, "CSK", "RCB"),
            match_on(5, "RCB", "MI"),
        ]);
        let table = MatchTable::load(&source).unwrap();
        let days: Vec<u32> = table
            .records()
            .iter()
            .map(|r| {
                use chrono::Datelike;
                r.date.day()
            })
            .collect();
        assert_eq!(days, vec![2, 5, 9]);
    }
}
