//! # Seat Vacancy Backend
//!
//! Turns a per-leg seat occupancy chart for a train into a table of
//! contiguous vacancy spans per seat, plus a narrative itinerary produced by
//! an external text generator that stitches a journey across seat changes.
//!
//! ## Architecture
//!
//! - [`models`]: raw chart payloads, resolved records, spans and fragments
//! - [`services`]: interval merge engine, fragment simplifier, narrative
//!   request formatter, and the seat finder that wires them together
//! - [`charts`]: the [`charts::ChartSource`] seam to the external scraper
//! - [`narrative`]: the [`narrative::NarrativeGenerator`] seam to the
//!   external summarizer
//! - [`config`]: TOML + environment configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`api`]: public DTO surface
//!
//! The chart transformations are synchronous pure functions over an
//! immutable snapshot; every request recomputes them from scratch.

pub mod api;
pub mod charts;
pub mod config;
pub mod models;
pub mod narrative;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
