//! HTTP server module.
//!
//! Exposes the seat search as a REST API on top of the service layer.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Request parsing and validation                         │
//! │  - JSON serialization/deserialization                     │
//! │  - CORS, compression, error mapping                       │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Interval merge, fragment simplifier, narrative format  │
//! └─────────┬───────────────────────────────────┬────────────┘
//!           │                                   │
//! ┌─────────▼──────────────┐        ┌───────────▼────────────┐
//! │  ChartSource (charts/) │        │  NarrativeGenerator    │
//! │  scraper dumps         │        │  (narrative/)          │
//! └────────────────────────┘        └────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
