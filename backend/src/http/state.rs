//! Application state for the HTTP server.

use std::sync::Arc;

use crate::charts::ChartSource;
use crate::narrative::NarrativeGenerator;
use crate::services::NarrativeFormatter;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Where chart snapshots are read from
    pub charts: Arc<dyn ChartSource>,
    /// External itinerary generator
    pub narrator: Arc<dyn NarrativeGenerator>,
    pub formatter: NarrativeFormatter,
}

impl AppState {
    pub fn new(
        charts: Arc<dyn ChartSource>,
        narrator: Arc<dyn NarrativeGenerator>,
        formatter: NarrativeFormatter,
    ) -> Self {
        Self {
            charts,
            narrator,
            formatter,
        }
    }
}
