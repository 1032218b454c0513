//! Derived vacancy views: merged spans for the table, fragments for narration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Berth identifier as the chart provides it.
///
/// The scraper emits either a number or a string; the original JSON shape is
/// kept on the way back out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BerthNumber {
    Number(i64),
    /// Any other JSON number (`12.0`, values beyond `i64`), kept as written.
    Decimal(serde_json::Number),
    Text(String),
}

impl fmt::Display for BerthNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BerthNumber::Number(n) => write!(f, "{}", n),
            BerthNumber::Decimal(n) => write!(f, "{}", n),
            BerthNumber::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for BerthNumber {
    fn from(value: i64) -> Self {
        BerthNumber::Number(value)
    }
}

impl From<&str> for BerthNumber {
    fn from(value: &str) -> Self {
        BerthNumber::Text(value.to_string())
    }
}

/// A maximal run of contiguous vacant legs on one seat.
///
/// Serialized as a table row: `{"Coach", "Seat", "Type", "From", "To"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneySpan {
    #[serde(rename = "Coach")]
    pub coach: String,
    #[serde(rename = "Seat")]
    pub seat: BerthNumber,
    #[serde(rename = "Type")]
    pub berth_type: String,
    #[serde(rename = "From")]
    pub from: String,
    #[serde(rename = "To")]
    pub to: String,
}

/// One vacant leg, unmerged, tagged with its coach-seat identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacancyFragment {
    pub coach: String,
    pub seat: BerthNumber,
    pub from: String,
    pub to: String,
}

impl fmt::Display for VacancyFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} ({}->{})", self.coach, self.seat, self.from, self.to)
    }
}
