use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// How a decided match was won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WinningType {
    Runs,
    Wickets,
    /// Tie, super-over, no-result, or anything else the feed produces.
    Other,
}

impl WinningType {
    pub fn from_label(s: &str) -> WinningType {
        match s.trim().to_lowercase().as_str() {
            "runs" | "run" => WinningType::Runs,
            "wickets" | "wicket" => WinningType::Wickets,
            _ => WinningType::Other,
        }
    }
}

/// The choice made by the toss-winning team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TossDecision {
    Bat,
    Field,
}

impl TossDecision {
    pub fn from_label(s: &str) -> Option<TossDecision> {
        match s.trim().to_lowercase().as_str() {
            "bat" | "batting" => Some(TossDecision::Bat),
            "field" | "fielding" | "bowl" | "bowling" => Some(TossDecision::Field),
            _ => None,
        }
    }
}

/// One row of the season dataset.
///
/// Parsing is deliberately lenient: the upstream CSV is a pandas export, so
/// booleans arrive as `True`/`False`, margins can be empty or junk, and the
/// venue/toss columns are blank for abandoned games. Anything that fails to
/// parse becomes `None`/`Other` and is filtered by the derivation that
/// needs it, not rejected at load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(deserialize_with = "de_date")]
    pub date: NaiveDate,
    pub home_team_abbrev: String,
    pub away_team_abbrev: String,
    #[serde(deserialize_with = "de_flag")]
    pub home_win: bool,
    #[serde(deserialize_with = "de_flag")]
    pub away_win: bool,
    #[serde(deserialize_with = "de_winning_type")]
    pub winning_type: WinningType,
    /// Magnitude of victory in runs or wickets depending on `winning_type`.
    /// `None` when the source field is empty or unparseable.
    #[serde(deserialize_with = "de_margin")]
    pub winning_margin: Option<f64>,
    #[serde(deserialize_with = "de_opt_string")]
    pub cleaned_venue: Option<String>,
    #[serde(deserialize_with = "de_opt_string")]
    pub toss_winner: Option<String>,
    #[serde(deserialize_with = "de_toss_decision")]
    pub toss_decision: Option<TossDecision>,
    /// Free-text result line, e.g. "KKR won by 8 wickets".
    pub result_outcome: String,
}

impl MatchRecord {
    /// A match is decided when exactly one side is flagged as the winner.
    /// No-results and double-flagged rows count for neither team.
    pub fn is_decided(&self) -> bool {
        self.home_win != self.away_win
    }

    /// Winning team abbreviation, or `None` for an undecided match.
    pub fn winner(&self) -> Option<&str> {
        match (self.home_win, self.away_win) {
            (true, false) => Some(&self.home_team_abbrev),
            (false, true) => Some(&self.away_team_abbrev),
            _ => None,
        }
    }

    /// Losing team abbreviation, or `None` for an undecided match.
    pub fn loser(&self) -> Option<&str> {
        match (self.home_win, self.away_win) {
            (true, false) => Some(&self.away_team_abbrev),
            (false, true) => Some(&self.home_team_abbrev),
            _ => None,
        }
    }

    /// Whether the given team played in this match, on either side.
    pub fn involves(&self, team: &str) -> bool {
        self.home_team_abbrev == team || self.away_team_abbrev == team
    }
}

// ── Lenient field parsers ─────────────────────────────────────────────────────

/// Date formats seen in season exports.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"];

fn de_date<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(de)?;
    let s = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .ok_or_else(|| serde::de::Error::custom(format!("unparseable date: {raw:?}")))
}

fn de_flag<'de, D: Deserializer<'de>>(de: D) -> Result<bool, D::Error> {
    let raw = String::deserialize(de)?;
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "unparseable win flag: {other:?}"
        ))),
    }
}

fn de_winning_type<'de, D: Deserializer<'de>>(de: D) -> Result<WinningType, D::Error> {
    let raw = String::deserialize(de)?;
    Ok(WinningType::from_label(&raw))
}

fn de_margin<'de, D: Deserializer<'de>>(de: D) -> Result<Option<f64>, D::Error> {
    let raw = Option::<String>::deserialize(de)?;
    // pandas writes missing margins as "nan", which f64's FromStr accepts;
    // non-finite values are missing data, not margins.
    Ok(raw
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite()))
}

fn de_opt_string<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
    let raw = Option::<String>::deserialize(de)?;
    Ok(raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()))
}

fn de_toss_decision<'de, D: Deserializer<'de>>(de: D) -> Result<Option<TossDecision>, D::Error> {
    let raw = Option::<String>::deserialize(de)?;
    Ok(raw.as_deref().and_then(TossDecision::from_label))
}
