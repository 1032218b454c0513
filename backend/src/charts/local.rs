//! In-memory chart source.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use super::{
    decode_chart, validate_train_number, ChartSource, ChartSourceError, ChartSourceResult,
};
use crate::models::RawCoach;

/// Chart snapshots held in memory, keyed by train number.
///
/// Cloning shares the underlying map, so a test can keep a handle and
/// preload charts after the source has been handed to the router.
///
/// # Example
/// ```
/// use seat_vacancy::charts::LocalChartSource;
///
/// let source = LocalChartSource::new();
/// source
///     .insert_chart_json("12802", r#"[{"scraped_coach_name": "B3", "bdd": []}]"#)
///     .unwrap();
/// assert_eq!(source.train_count(), 1);
/// ```
#[derive(Clone)]
pub struct LocalChartSource {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    charts: HashMap<String, Vec<RawCoach>>,
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            charts: HashMap::new(),
            is_healthy: true,
        }
    }
}

impl Default for LocalChartSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalChartSource {
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Store (or replace) the chart for `train`.
    pub fn insert_chart(&self, train: impl Into<String>, coaches: Vec<RawCoach>) {
        self.data.write().charts.insert(train.into(), coaches);
    }

    /// Store a chart given as a scraper JSON dump.
    pub fn insert_chart_json(&self, train: &str, json: &str) -> ChartSourceResult<()> {
        let coaches = decode_chart(train, json)?;
        self.insert_chart(train, coaches);
        Ok(())
    }

    pub fn remove_chart(&self, train: &str) -> Option<Vec<RawCoach>> {
        self.data.write().charts.remove(train)
    }

    pub fn train_count(&self) -> usize {
        self.data.read().charts.len()
    }

    /// Simulate an outage.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }
}

#[async_trait]
impl ChartSource for LocalChartSource {
    async fn fetch_chart(&self, train: &str) -> ChartSourceResult<Vec<RawCoach>> {
        let train = validate_train_number(train)?;
        let data = self.data.read();
        if !data.is_healthy {
            return Err(ChartSourceError::Unavailable(
                "local chart source marked unhealthy".to_string(),
            ));
        }
        Ok(data.charts.get(train).cloned().unwrap_or_default())
    }

    async fn health_check(&self) -> ChartSourceResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    fn name(&self) -> &'static str {
        "local"
    }
}
