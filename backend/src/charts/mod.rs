//! Seat chart sources.
//!
//! The chart itself is captured by an external scraper. This module defines
//! the [`ChartSource`] trait the service reads snapshots through, the coach
//! class filter, and two implementations:
//!
//! - [`LocalChartSource`]: in-memory map, for tests and local development
//! - [`FileChartSource`]: a directory of scraper dumps, re-read per request
//!
//! Sources return raw payloads; resolution and validation happen in the
//! service layer.

use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;

use crate::models::RawCoach;

pub mod factory;
pub mod file;
pub mod local;

pub use factory::{ChartSourceFactory, ChartSourceType};
pub use file::FileChartSource;
pub use local::LocalChartSource;

/// Result type for chart source operations.
pub type ChartSourceResult<T> = Result<T, ChartSourceError>;

#[derive(Debug, thiserror::Error)]
pub enum ChartSourceError {
    /// Train numbers are used as lookup keys and file names.
    #[error("Invalid train number '{0}'")]
    InvalidTrain(String),

    #[error("Failed to read chart {path}: {message}")]
    Io { path: String, message: String },

    #[error("Invalid chart payload for train {train}: {message}")]
    InvalidPayload { train: String, message: String },

    #[error("Chart source unavailable: {0}")]
    Unavailable(String),
}

/// Read access to seat chart snapshots.
#[async_trait]
pub trait ChartSource: Send + Sync {
    /// Freshest snapshot for `train`. Unknown trains yield an empty chart.
    async fn fetch_chart(&self, train: &str) -> ChartSourceResult<Vec<RawCoach>>;

    /// Whether the source can currently serve charts.
    async fn health_check(&self) -> ChartSourceResult<bool>;

    /// Short identifier for logs and the health endpoint.
    fn name(&self) -> &'static str;
}

/// Trim and check a train number: non-empty ASCII alphanumerics only.
pub fn validate_train_number(train: &str) -> ChartSourceResult<&str> {
    let trimmed = train.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ChartSourceError::InvalidTrain(train.to_string()));
    }
    Ok(trimmed)
}

/// Decode a scraper dump: a JSON array of coach payloads.
pub fn decode_chart(train: &str, json: &str) -> ChartSourceResult<Vec<RawCoach>> {
    serde_json::from_str(json).map_err(|e| ChartSourceError::InvalidPayload {
        train: train.to_string(),
        message: e.to_string(),
    })
}

// =============================================================================
// Class filter
// =============================================================================

/// Travel class preference, applied to coach labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClassFilter {
    #[default]
    All,
    /// 3A: `B*` and `M*` coaches
    ThirdAc,
    /// 2A: `A*` coaches
    SecondAc,
    /// 1A: `H*` coaches
    FirstAc,
    /// SL: `S*` coaches
    Sleeper,
}

impl ClassFilter {
    pub fn admits(&self, coach_label: &str) -> bool {
        let first = coach_label
            .trim()
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase());
        match self {
            ClassFilter::All => true,
            ClassFilter::ThirdAc => matches!(first, Some('B') | Some('M')),
            ClassFilter::SecondAc => first == Some('A'),
            ClassFilter::FirstAc => first == Some('H'),
            ClassFilter::Sleeper => first == Some('S'),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ClassFilter::All => "ALL",
            ClassFilter::ThirdAc => "3A",
            ClassFilter::SecondAc => "2A",
            ClassFilter::FirstAc => "1A",
            ClassFilter::Sleeper => "SL",
        }
    }
}

impl FromStr for ClassFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "" | "ALL" => Ok(Self::All),
            "3A" => Ok(Self::ThirdAc),
            "2A" => Ok(Self::SecondAc),
            "1A" => Ok(Self::FirstAc),
            "SL" => Ok(Self::Sleeper),
            other => Err(format!("Unknown class preference: {}", other)),
        }
    }
}

impl fmt::Display for ClassFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_filter_parsing() {
        assert_eq!("ALL".parse::<ClassFilter>().unwrap(), ClassFilter::All);
        assert_eq!("".parse::<ClassFilter>().unwrap(), ClassFilter::All);
        assert_eq!("3a".parse::<ClassFilter>().unwrap(), ClassFilter::ThirdAc);
        assert_eq!(" sl ".parse::<ClassFilter>().unwrap(), ClassFilter::Sleeper);
        assert!("CC".parse::<ClassFilter>().is_err());
    }

    #[test]
    fn test_class_filter_prefixes() {
        assert!(ClassFilter::ThirdAc.admits("B3"));
        assert!(ClassFilter::ThirdAc.admits("M1"));
        assert!(!ClassFilter::ThirdAc.admits("A1"));
        assert!(ClassFilter::SecondAc.admits("A2"));
        assert!(ClassFilter::FirstAc.admits("H1"));
        assert!(ClassFilter::Sleeper.admits("s10"));
        assert!(!ClassFilter::Sleeper.admits(""));
        assert!(ClassFilter::All.admits("Unknown"));
    }

    #[test]
    fn test_class_filter_display_round_trips() {
        for filter in [
            ClassFilter::All,
            ClassFilter::ThirdAc,
            ClassFilter::SecondAc,
            ClassFilter::FirstAc,
            ClassFilter::Sleeper,
        ] {
            assert_eq!(filter.to_string().parse::<ClassFilter>().unwrap(), filter);
        }
    }

    #[test]
    fn test_train_number_validation() {
        assert_eq!(validate_train_number(" 12802 ").unwrap(), "12802");
        assert!(validate_train_number("").is_err());
        assert!(validate_train_number("../etc/passwd").is_err());
        assert!(validate_train_number("128 02").is_err());
    }

    #[test]
    fn test_decode_chart_rejects_wrong_shapes() {
        assert!(decode_chart("1", "[]").unwrap().is_empty());
        assert!(matches!(
            decode_chart("1", r#"{"bdd": []}"#),
            Err(ChartSourceError::InvalidPayload { .. })
        ));
        assert!(matches!(
            decode_chart("1", r#"[{"bdd": [{"berthNo": 1, "bsd": [{"occupancy": "Y"}]}]}]"#),
            Err(ChartSourceError::InvalidPayload { .. })
        ));
    }

    #[test]
    fn test_decode_chart_accepts_fractional_berth_numbers() {
        let chart = decode_chart(
            "1",
            r#"[{"scraped_coach_name": "B3", "bdd": [{"berthNo": 12.0, "bsd": [
                {"from": "A", "to": "B", "occupancy": false}
            ]}]}]"#,
        )
        .unwrap();

        let resolved = crate::models::resolve_chart(&chart).unwrap();
        let fragments = crate::services::simplify_vacancies(&resolved);
        assert_eq!(fragments[0].to_string(), "B3-12.0 (A->B)");
    }
}
