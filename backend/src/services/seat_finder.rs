//! Seat finder: one request from chart snapshot to table and advice.
//!
//! Steps:
//! 1. fetch the raw chart from the [`ChartSource`]
//! 2. keep the coaches admitted by the class filter
//! 3. resolve the chart, failing on malformed seats or legs
//! 4. merge spans for the table and, independently, simplify fragments
//! 5. ask the narrative generator (degrades to a fixed string on failure)
//!
//! Everything is recomputed per request; nothing is cached.

use crate::charts::{ChartSource, ChartSourceError, ClassFilter};
use crate::models::{resolve_chart, ChartError, JourneySpan, RawCoach, VacancyFragment, UNKNOWN_IDENTITY};
use crate::narrative::NarrativeGenerator;
use crate::services::fragments::simplify_vacancies;
use crate::services::interval_merge::merge_vacancies;
use crate::services::narrative::NarrativeFormatter;

/// Message shown when a train has no chart data.
pub const NO_DATA_MESSAGE: &str = "No data found.";

#[derive(Debug, thiserror::Error)]
pub enum FindSeatsError {
    /// The chart is empty or absent (after class filtering).
    #[error("No data found.")]
    EmptyInput,

    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error(transparent)]
    Source(#[from] ChartSourceError),
}

/// Parameters of one seat search.
#[derive(Debug, Clone, Default)]
pub struct SeatQuery {
    pub train: String,
    pub station: String,
    pub destination: String,
    pub class_filter: ClassFilter,
}

/// Both derived views of one chart snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledChart {
    pub spans: Vec<JourneySpan>,
    pub fragments: Vec<VacancyFragment>,
}

/// Result of a seat search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatReport {
    pub spans: Vec<JourneySpan>,
    pub advice: String,
}

/// Filter, resolve, merge and simplify a raw chart.
pub fn compile_chart(
    raw: &[RawCoach],
    class_filter: ClassFilter,
) -> Result<CompiledChart, FindSeatsError> {
    let admitted: Vec<RawCoach> = raw
        .iter()
        .filter(|coach| class_filter.admits(coach.label().unwrap_or(UNKNOWN_IDENTITY)))
        .cloned()
        .collect();

    if admitted.is_empty() {
        return Err(FindSeatsError::EmptyInput);
    }
    if admitted.len() < raw.len() {
        log::debug!(
            "Class filter {} kept {} of {} coaches",
            class_filter,
            admitted.len(),
            raw.len()
        );
    }

    let chart = resolve_chart(&admitted)?;
    Ok(CompiledChart {
        spans: merge_vacancies(&chart),
        fragments: simplify_vacancies(&chart),
    })
}

/// Run a full seat search.
pub async fn find_seats(
    source: &dyn ChartSource,
    generator: &dyn NarrativeGenerator,
    formatter: &NarrativeFormatter,
    query: &SeatQuery,
) -> Result<SeatReport, FindSeatsError> {
    let raw = source.fetch_chart(&query.train).await?;
    log::debug!(
        "Fetched {} coaches for train {} from {} source",
        raw.len(),
        query.train,
        source.name()
    );

    let compiled = compile_chart(&raw, query.class_filter)?;
    let advice = formatter
        .advise(
            generator,
            &compiled.fragments,
            &query.station,
            &query.destination,
        )
        .await;

    Ok(SeatReport {
        spans: compiled.spans,
        advice,
    })
}
