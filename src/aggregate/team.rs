//! Per-team win/loss derivations.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDate;
use serde::Serialize;

use crate::data::MatchRecord;

/// Win/loss tally for one team across the season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamStats {
    pub team: String,
    pub wins: u32,
    pub losses: u32,
}

/// Number of wins for one team on one match day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyWins {
    pub date: NaiveDate,
    pub team: String,
    pub wins: u32,
}

/// Win count for one team in one role (home or away).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinShare {
    pub team: String,
    pub wins: u32,
}

/// Every team identifier observed in the table, sorted and deduplicated.
/// This is the closed set the team selector offers.
pub fn teams(records: &[MatchRecord]) -> Vec<String> {
    let mut set = BTreeSet::new();
    for r in records {
        set.insert(r.home_team_abbrev.clone());
        set.insert(r.away_team_abbrev.clone());
    }
    set.into_iter().collect()
}

/// Win and loss counts per team, outer-merged on team identity.
///
/// Every team that appears in the table is present exactly once, with a
/// zero count for any role it never filled. Undecided matches credit
/// neither side. Sorted by wins descending, then name, so repeated calls
/// are byte-identical.
pub fn win_loss_by_team(records: &[MatchRecord]) -> Vec<TeamStats> {
    let mut counts: HashMap<&str, (u32, u32)> = HashMap::new();
    for r in records {
        counts.entry(&r.home_team_abbrev).or_default();
        counts.entry(&r.away_team_abbrev).or_default();
        if let Some(winner) = r.winner() {
            counts.entry(winner).or_default().0 += 1;
        }
        if let Some(loser) = r.loser() {
            counts.entry(loser).or_default().1 += 1;
        }
    }

    let mut stats: Vec<TeamStats> = counts
        .into_iter()
        .map(|(team, (wins, losses))| TeamStats {
            team: team.to_string(),
            wins,
            losses,
        })
        .collect();
    stats.sort_by(|a, b| b.wins.cmp(&a.wins).then_with(|| a.team.cmp(&b.team)));
    stats
}

/// Wins grouped by (match date, winning team), date ascending.
pub fn wins_over_time(records: &[MatchRecord]) -> Vec<DailyWins> {
    let mut counts: BTreeMap<(NaiveDate, &str), u32> = BTreeMap::new();
    for r in records {
        if let Some(winner) = r.winner() {
            *counts.entry((r.date, winner)).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .map(|((date, team), wins)| DailyWins {
            date,
            team: team.to_string(),
            wins,
        })
        .collect()
}

/// Win counts split by role: wins earned at home and wins earned away.
///
/// The home shares come from the home-win rows grouped by the home side,
/// and the away shares from the away-win rows grouped by the away side.
pub fn home_away_win_shares(records: &[MatchRecord]) -> (Vec<WinShare>, Vec<WinShare>) {
    let mut home: HashMap<&str, u32> = HashMap::new();
    let mut away: HashMap<&str, u32> = HashMap::new();
    for r in records {
        if !r.is_decided() {
            continue;
        }
        if r.home_win {
            *home.entry(&r.home_team_abbrev).or_default() += 1;
        } else {
            *away.entry(&r.away_team_abbrev).or_default() += 1;
        }
    }
    (to_sorted_shares(home), to_sorted_shares(away))
}

fn to_sorted_shares(counts: HashMap<&str, u32>) -> Vec<WinShare> {
    let mut shares: Vec<WinShare> = counts
        .into_iter()
        .map(|(team, wins)| WinShare {
            team: team.to_string(),
            wins,
        })
        .collect();
    shares.sort_by(|a, b| b.wins.cmp(&a.wins).then_with(|| a.team.cmp(&b.team)));
    shares
}
