//! Public API surface for the backend.
//!
//! This file consolidates the DTO types exchanged with the web frontend and
//! the scraper. All types derive Serialize/Deserialize.

pub use crate::models::BerthNumber;
pub use crate::models::JourneySpan;
pub use crate::models::RawCoach;
pub use crate::models::RawLeg;
pub use crate::models::RawSeat;
pub use crate::models::VacancyFragment;

#[cfg(feature = "http-server")]
pub use crate::http::dto::{
    CompileRequest, CompileResponse, FindSeatsRequest, FindSeatsResponse, HealthResponse,
};
