use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use super::models::MatchRecord;

/// Errors raised while loading the season dataset. All of these are fatal
/// at startup; row-level data problems are filtered instead and never
/// surface here.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to open dataset {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing required column '{0}'")]
    MissingColumn(String),

    #[error("dataset contains no usable rows")]
    Empty,
}

/// Trait for anything that can yield the season's match rows.
pub trait MatchSource {
    /// Return every parseable match row, in source order.
    fn fetch_matches(&self) -> Result<Vec<MatchRecord>, DataError>;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}

/// Columns every dataset must carry. Checked up front so a misconfigured
/// file fails once with a clear message instead of erroring on every row.
const REQUIRED_COLUMNS: &[&str] = &[
    "date",
    "home_team_abbrev",
    "away_team_abbrev",
    "home_win",
    "away_win",
    "winning_type",
    "winning_margin",
    "cleaned_venue",
    "toss_winner",
    "toss_decision",
    "result_outcome",
];

/// Match source backed by a delimited text file (the pandas CSV export the
/// season dataset ships as).
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        CsvSource {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl MatchSource for CsvSource {
    fn name(&self) -> &str {
        "csv"
    }

    fn fetch_matches(&self) -> Result<Vec<MatchRecord>, DataError> {
        let file = std::fs::File::open(&self.path).map_err(|source| DataError::Open {
            path: self.path.display().to_string(),
            source,
        })?;
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(file);

        let headers = reader.headers()?.clone();
        for required in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == *required) {
                return Err(DataError::MissingColumn(required.to_string()));
            }
        }

        let mut records = Vec::new();
        let mut dropped = 0usize;
        for row in reader.deserialize::<MatchRecord>() {
            match row {
                Ok(record) => records.push(record),
                Err(e) => {
                    // Header shape was validated above, so this is a bad
                    // row (unparseable date or win flag), not a bad file.
                    dropped += 1;
                    warn!("Skipping malformed row: {}", e);
                }
            }
        }

        if dropped > 0 {
            warn!(
                "Dropped {} malformed row(s) from {}",
                dropped,
                self.path.display()
            );
        }
        if records.is_empty() {
            return Err(DataError::Empty);
        }
        Ok(records)
    }
}
