//! Chart source factory for dependency injection.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

use super::{ChartSource, FileChartSource, LocalChartSource};
use crate::config::ChartSettings;

/// Chart source type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartSourceType {
    /// Scraper dumps on disk
    File,
    /// In-memory map
    Local,
}

impl FromStr for ChartSourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "file" | "fs" => Ok(Self::File),
            "local" | "memory" => Ok(Self::Local),
            _ => Err(format!("Unknown chart source type: {}", s)),
        }
    }
}

/// Factory for chart source instances.
pub struct ChartSourceFactory;

impl ChartSourceFactory {
    /// Create the source described by `settings`.
    pub fn create(settings: &ChartSettings) -> Arc<dyn ChartSource> {
        match settings.source_type {
            ChartSourceType::File => {
                if !settings.directory.is_dir() {
                    log::warn!(
                        "Chart directory {} does not exist yet; every train will report no data",
                        settings.directory.display()
                    );
                }
                Arc::new(FileChartSource::new(settings.directory.clone()))
            }
            ChartSourceType::Local => Self::create_local(),
        }
    }

    /// An empty in-memory source.
    pub fn create_local() -> Arc<dyn ChartSource> {
        Arc::new(LocalChartSource::new())
    }
}
