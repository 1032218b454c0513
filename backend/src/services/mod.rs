//! Service layer.
//!
//! The three chart transformations are pure, synchronous functions:
//! - [`interval_merge`]: merged vacancy spans for the table
//! - [`fragments`]: unmerged vacant legs for narration
//! - [`narrative`]: request rendering for the external generator
//!
//! [`seat_finder`] wires them to a chart source and a generator.

pub mod fragments;
pub mod interval_merge;
pub mod narrative;
pub mod seat_finder;


pub use fragments::{render_fragments, simplify_vacancies};
pub use interval_merge::{merge_seat, merge_vacancies};
pub use narrative::{NarrativeFormatter, ADVICE_FAILURE, ADVICE_PLACEHOLDER, DEFAULT_FRAGMENT_CAP};
pub use seat_finder::{compile_chart, find_seats, CompiledChart, FindSeatsError, SeatQuery, SeatReport};
