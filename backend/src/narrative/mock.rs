//! In-process narrative generators for tests and offline development.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

use super::{NarrativeError, NarrativeGenerator, NarrativeResult};

/// Returns a fixed reply and records every prompt it receives.
#[derive(Debug, Clone)]
pub struct StaticNarrator {
    reply: String,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl StaticNarrator {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().len()
    }
}

#[async_trait]
impl NarrativeGenerator for StaticNarrator {
    async fn generate(&self, prompt: &str) -> NarrativeResult<String> {
        self.prompts.lock().push(prompt.to_string());
        Ok(self.reply.clone())
    }

    fn model_name(&self) -> &str {
        "static"
    }
}

/// Always fails with a transport error.
#[derive(Debug, Clone, Default)]
pub struct FailingNarrator;

#[async_trait]
impl NarrativeGenerator for FailingNarrator {
    async fn generate(&self, _prompt: &str) -> NarrativeResult<String> {
        Err(NarrativeError::Transport("connection refused".to_string()))
    }

    fn model_name(&self) -> &str {
        "failing"
    }
}
