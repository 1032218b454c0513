//! Directory-backed chart source.
//!
//! The scraper writes one dump per train as `<directory>/<train>.json`. The
//! file is re-read on every fetch so each request sees the latest capture.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::{
    decode_chart, validate_train_number, ChartSource, ChartSourceError, ChartSourceResult,
};
use crate::models::RawCoach;

#[derive(Debug, Clone)]
pub struct FileChartSource {
    directory: PathBuf,
}

impl FileChartSource {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Dump location for an already validated train number.
    pub fn chart_path(&self, train: &str) -> PathBuf {
        self.directory.join(format!("{}.json", train))
    }
}

#[async_trait]
impl ChartSource for FileChartSource {
    async fn fetch_chart(&self, train: &str) -> ChartSourceResult<Vec<RawCoach>> {
        let train = validate_train_number(train)?;
        let path = self.chart_path(train);

        match tokio::fs::read_to_string(&path).await {
            Ok(json) => {
                let coaches = decode_chart(train, &json)?;
                log::debug!("Loaded {} coaches from {}", coaches.len(), path.display());
                Ok(coaches)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No chart dump at {}", path.display());
                Ok(Vec::new())
            }
            Err(e) => Err(ChartSourceError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            }),
        }
    }

    async fn health_check(&self) -> ChartSourceResult<bool> {
        Ok(tokio::fs::metadata(&self.directory)
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false))
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
