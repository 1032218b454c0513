//! Seat chart records.
//!
//! The scraper hands over one JSON object per coach. Those payloads are
//! decoded into the loose `Raw*` types, where every field is optional, and
//! then resolved into [`CoachRecord`]s whose fields are guaranteed present.
//! Resolution is the only place where fallbacks are applied and where
//! missing leg fields are rejected.

use serde::{Deserialize, Serialize};

use super::error::{ChartError, ChartResult, LegField};
use super::span::BerthNumber;

/// Sentinel used when a coach label or berth type is absent.
pub const UNKNOWN_IDENTITY: &str = "Unknown";

// =============================================================================
// Raw scraper payload
// =============================================================================

/// One coach as captured from the chart service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCoach {
    /// Label of the coach button the scraper clicked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scraped_coach_name: Option<String>,
    /// Label reported by the chart service itself.
    #[serde(default, rename = "coachName", skip_serializing_if = "Option::is_none")]
    pub coach_name: Option<String>,
    /// Berths of the coach.
    #[serde(default)]
    pub bdd: Option<Vec<RawSeat>>,
}

/// One berth and its per-leg occupancy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSeat {
    #[serde(default, rename = "berthNo")]
    pub berth_no: Option<BerthNumber>,
    #[serde(default, rename = "berthCode")]
    pub berth_code: Option<String>,
    /// Legs in physical station order.
    #[serde(default)]
    pub bsd: Option<Vec<RawLeg>>,
}

/// One station-to-station leg.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawLeg {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    /// `true` means occupied.
    #[serde(default)]
    pub occupancy: Option<bool>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl RawCoach {
    /// Coach label from the ordered fallback chain
    /// `scraped_coach_name` -> `coachName`, if either is set.
    pub fn label(&self) -> Option<&str> {
        non_blank(&self.scraped_coach_name).or_else(|| non_blank(&self.coach_name))
    }

    /// Coach label, or [`UNKNOWN_IDENTITY`] when the chain is exhausted.
    pub fn resolved_label(&self) -> String {
        match self.label() {
            Some(label) => label.to_string(),
            None => {
                log::warn!("Coach without a label, using '{}'", UNKNOWN_IDENTITY);
                UNKNOWN_IDENTITY.to_string()
            }
        }
    }
}

// =============================================================================
// Resolved records
// =============================================================================

/// A coach with a resolved label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoachRecord {
    pub name: String,
    pub seats: Vec<SeatRecord>,
}

/// A berth with resolved identity and a complete leg list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatRecord {
    pub berth_number: BerthNumber,
    pub berth_type: String,
    /// Legs in physical station order; never re-sorted.
    pub legs: Vec<LegRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegRecord {
    pub from: String,
    pub to: String,
    pub occupied: bool,
}

impl LegRecord {
    pub fn new(from: impl Into<String>, to: impl Into<String>, occupied: bool) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            occupied,
        }
    }

    pub fn is_vacant(&self) -> bool {
        !self.occupied
    }
}

impl CoachRecord {
    /// Resolve a raw coach, failing on the first malformed seat or leg.
    pub fn resolve(raw: &RawCoach) -> ChartResult<Self> {
        let name = raw.resolved_label();
        let seats = raw
            .bdd
            .as_deref()
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(index, seat)| SeatRecord::resolve(&name, index, seat))
            .collect::<ChartResult<Vec<_>>>()?;

        Ok(Self { name, seats })
    }
}

impl SeatRecord {
    /// Resolve a raw berth belonging to `coach`.
    ///
    /// A missing `berthCode` falls back to [`UNKNOWN_IDENTITY`]; a missing
    /// `berthNo` is an error.
    pub fn resolve(coach: &str, seat_index: usize, raw: &RawSeat) -> ChartResult<Self> {
        let berth_number = raw.berth_no.clone().ok_or_else(|| ChartError::MalformedSeat {
            coach: coach.to_string(),
            seat_index,
        })?;

        let berth_type = match non_blank(&raw.berth_code) {
            Some(code) => code.to_string(),
            None => {
                log::warn!(
                    "Seat {}-{} has no berth type, using '{}'",
                    coach,
                    berth_number,
                    UNKNOWN_IDENTITY
                );
                UNKNOWN_IDENTITY.to_string()
            }
        };

        let legs = raw
            .bsd
            .as_deref()
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(index, leg)| LegRecord::resolve(coach, &berth_number, index, leg))
            .collect::<ChartResult<Vec<_>>>()?;

        Ok(Self {
            berth_number,
            berth_type,
            legs,
        })
    }
}

impl LegRecord {
    fn resolve(
        coach: &str,
        seat: &BerthNumber,
        leg_index: usize,
        raw: &RawLeg,
    ) -> ChartResult<Self> {
        let missing = |field| ChartError::MalformedLeg {
            coach: coach.to_string(),
            seat: seat.to_string(),
            leg_index,
            field,
        };

        let from = raw.from.clone().ok_or_else(|| missing(LegField::From))?;
        let to = raw.to.clone().ok_or_else(|| missing(LegField::To))?;
        let occupied = raw.occupancy.ok_or_else(|| missing(LegField::Occupancy))?;

        Ok(Self { from, to, occupied })
    }
}

/// Resolve a full chart snapshot, preserving coach and seat order.
pub fn resolve_chart(raw: &[RawCoach]) -> ChartResult<Vec<CoachRecord>> {
    raw.iter().map(CoachRecord::resolve).collect()
}
