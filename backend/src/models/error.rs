//! Structural errors found while resolving a raw seat chart.

use std::fmt;

/// Result type for chart resolution.
pub type ChartResult<T> = Result<T, ChartError>;

/// Leg field that the scraper payload failed to provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegField {
    From,
    To,
    Occupancy,
}

impl fmt::Display for LegField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LegField::From => "from",
            LegField::To => "to",
            LegField::Occupancy => "occupancy",
        };
        f.write_str(name)
    }
}

/// Malformed chart input. Any of these aborts the whole request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChartError {
    /// A leg is missing `from`, `to` or `occupancy`.
    #[error("Malformed leg #{leg_index} of seat {coach}-{seat}: missing '{field}'")]
    MalformedLeg {
        coach: String,
        seat: String,
        leg_index: usize,
        field: LegField,
    },

    /// A seat has no berth number, so its spans cannot be attributed.
    #[error("Malformed seat #{seat_index} in coach {coach}: missing 'berthNo'")]
    MalformedSeat { coach: String, seat_index: usize },
}
