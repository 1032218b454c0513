//! Interval merge engine.
//!
//! Walks each seat's legs once and merges runs of contiguous vacant legs
//! into [`JourneySpan`]s. Per seat the walk is a two-state automaton:
//!
//! ```text
//!            vacant                     vacant, leg.from == to
//!   Idle ──────────────► SpanOpen ◄──────────────┐
//!    ▲                    │   │                   │
//!    │     occupied       │   └───────────────────┘
//!    └────────────────────┘   vacant, gap: emit, reopen at leg
//! ```
//!
//! Contiguity is exact station-code equality. Legs are taken in input order.

use crate::models::{CoachRecord, JourneySpan, LegRecord, SeatRecord};

/// Per-seat merge state.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SpanState {
    Idle,
    SpanOpen { from: String, to: String },
}

impl SpanState {
    /// Advance by one leg, returning the span closed by this transition.
    fn step(self, leg: &LegRecord) -> (SpanState, Option<(String, String)>) {
        match (self, leg.is_vacant()) {
            (SpanState::Idle, true) => (SpanState::open_at(leg), None),
            (SpanState::Idle, false) => (SpanState::Idle, None),
            (SpanState::SpanOpen { from, to }, true) if leg.from == to => (
                SpanState::SpanOpen {
                    from,
                    to: leg.to.clone(),
                },
                None,
            ),
            (SpanState::SpanOpen { from, to }, true) => {
                log::debug!(
                    "Non-contiguous vacant leg {}->{} after span ending at {}, splitting",
                    leg.from,
                    leg.to,
                    to
                );
                (SpanState::open_at(leg), Some((from, to)))
            }
            (SpanState::SpanOpen { from, to }, false) => (SpanState::Idle, Some((from, to))),
        }
    }

    fn open_at(leg: &LegRecord) -> SpanState {
        SpanState::SpanOpen {
            from: leg.from.clone(),
            to: leg.to.clone(),
        }
    }

    fn finish(self) -> Option<(String, String)> {
        match self {
            SpanState::Idle => None,
            SpanState::SpanOpen { from, to } => Some((from, to)),
        }
    }
}

/// Merge the vacant legs of a single seat.
pub fn merge_seat(coach: &str, seat: &SeatRecord) -> Vec<JourneySpan> {
    let to_span = |(from, to): (String, String)| JourneySpan {
        coach: coach.to_string(),
        seat: seat.berth_number.clone(),
        berth_type: seat.berth_type.clone(),
        from,
        to,
    };

    let mut spans = Vec::new();
    let mut state = SpanState::Idle;
    for leg in &seat.legs {
        let (next, closed) = state.step(leg);
        if let Some(closed) = closed {
            spans.push(to_span(closed));
        }
        state = next;
    }
    if let Some(open) = state.finish() {
        spans.push(to_span(open));
    }
    spans
}

/// Merge every seat of every coach, in coach-then-seat input order.
pub fn merge_vacancies(chart: &[CoachRecord]) -> Vec<JourneySpan> {
    let spans: Vec<JourneySpan> = chart
        .iter()
        .flat_map(|coach| {
            coach
                .seats
                .iter()
                .flat_map(move |seat| merge_seat(&coach.name, seat))
        })
        .collect();

    log::debug!(
        "Merged {} coaches into {} vacancy spans",
        chart.len(),
        spans.len()
    );
    spans
}
