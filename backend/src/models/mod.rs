//! Domain models for seat charts and the vacancy views derived from them.
//!
//! - [`chart`]: raw scraper payloads and the resolved coach/seat/leg records
//! - [`span`]: merged [`JourneySpan`]s and unmerged [`VacancyFragment`]s
//! - [`error`]: structural errors raised while resolving a chart

pub mod chart;
pub mod error;
pub mod span;

pub use chart::{
    resolve_chart, CoachRecord, LegRecord, RawCoach, RawLeg, RawSeat, SeatRecord,
    UNKNOWN_IDENTITY,
};
pub use error::{ChartError, ChartResult, LegField};
pub use span::{BerthNumber, JourneySpan, VacancyFragment};
