//! Pure derivations from the match table to display-ready tables.
//!
//! Every function here is deterministic and side-effect free: it reads a
//! slice of match records and returns a freshly built table, so the
//! dashboard can recompute any view on every request.

pub mod history;
pub mod margin;
pub mod summary;
pub mod team;
pub mod venue;

pub use history::{performance_breakdown, team_history, BreakdownRow, Outcome, TeamMatch};
pub use margin::margin_distribution;
pub use summary::{season_summary, SeasonSummary};
pub use team::{
    home_away_win_shares, teams, win_loss_by_team, wins_over_time, DailyWins, TeamStats, WinShare,
};
pub use venue::{toss_decision_outcomes, venue_summary, TossOutcome, VenueStats};

#[cfg(test)]
pub(crate) mod testutil {
    use crate::data::{MatchRecord, TossDecision, WinningType};
    use chrono::NaiveDate;

    /// Decided match on the given April 2024 day, won by the home side
    /// unless `home_win` is false.
    pub fn decided(
        day: u32,
        home: &str,
        away: &str,
        home_win: bool,
        winning_type: WinningType,
        margin: f64,
        venue: &str,
    ) -> MatchRecord {
        let winner = if home_win { home } else { away };
        let unit = match winning_type {
            WinningType::Wickets => "wickets",
            _ => "runs",
        };
        MatchRecord {
            date: NaiveDate::from_ymd_opt(2024, 4, day).unwrap(),
            home_team_abbrev: home.into(),
            away_team_abbrev: away.into(),
            home_win,
            away_win: !home_win,
            winning_type,
            winning_margin: Some(margin),
            cleaned_venue: Some(venue.into()),
            toss_winner: Some(winner.to_string()),
            toss_decision: Some(TossDecision::Bat),
            result_outcome: format!("{} won by {} {}", winner, margin, unit),
        }
    }

    /// Abandoned match: neither win flag set.
    pub fn no_result(day: u32, home: &str, away: &str) -> MatchRecord {
        MatchRecord {
            date: NaiveDate::from_ymd_opt(2024, 4, day).unwrap(),
            home_team_abbrev: home.into(),
            away_team_abbrev: away.into(),
            home_win: false,
            away_win: false,
            winning_type: WinningType::Other,
            winning_margin: None,
            cleaned_venue: None,
            toss_winner: None,
            toss_decision: None,
            result_outcome: "Match abandoned".into(),
        }
    }
}
