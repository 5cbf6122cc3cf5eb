//! Roadmap Generation — orchestrates the generation pipeline.
//!
//! Flow: normalize role → cache lookup → build prompt → LLM complete →
//!       strip fences → parse JSON → validate shape → cache insert → return.
//!
//! The backend is a trait object so tests can script completions without
//! touching the network.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::llm_client::{strip_json_fences, CompletionBackend, LlmError};
use crate::roadmap::cache::{normalize_role, CacheStats, RoadmapCache};
use crate::roadmap::models::Roadmap;
use crate::roadmap::prompts::build_prompt;
use crate::roadmap::validate::validate_roadmap;

/// Why a generation attempt failed. Matching on the kind gives callers
/// structured handling; `Display` gives the human-readable detail.
#[derive(Debug, Error)]
pub enum GenerationErrorKind {
    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("empty response")]
    EmptyResponse,

    #[error("completion was not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0}")]
    Schema(String),
}

impl From<LlmError> for GenerationErrorKind {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::EmptyContent => GenerationErrorKind::EmptyResponse,
            LlmError::Api(message) => GenerationErrorKind::Upstream(message),
            LlmError::Http(e) => GenerationErrorKind::Upstream(e.to_string()),
        }
    }
}

/// Failure of the whole generate() operation, naming the role it was for.
/// The displayed message is surfaced verbatim to API clients.
#[derive(Debug, Error)]
#[error("Failed to generate roadmap for \"{role}\": {kind}")]
pub struct GenerationError {
    pub role: String,
    pub kind: GenerationErrorKind,
}

/// Generates career roadmaps via the completion backend, memoizing validated
/// results per normalized role for the life of the process.
pub struct RoadmapGenerator {
    backend: Arc<dyn CompletionBackend>,
    cache: RoadmapCache,
}

impl RoadmapGenerator {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            backend,
            cache: RoadmapCache::new(),
        }
    }

    /// Returns the roadmap for `job_role`, serving repeat requests for the
    /// same normalized role from cache without an upstream call.
    ///
    /// Only a fully validated roadmap is inserted into the cache; any
    /// failure leaves the key absent so the next request retries upstream.
    pub async fn generate(&self, job_role: &str) -> Result<Roadmap, GenerationError> {
        let key = normalize_role(job_role);

        if let Some(cached) = self.cache.get(&key) {
            debug!("Cache hit for role '{key}'");
            return Ok(cached);
        }

        info!("Cache miss for role '{key}', generating via LLM");
        let roadmap = self
            .generate_uncached(job_role)
            .await
            .map_err(|kind| GenerationError {
                role: job_role.to_string(),
                kind,
            })?;

        self.cache.insert(key, roadmap.clone());
        Ok(roadmap)
    }

    async fn generate_uncached(&self, job_role: &str) -> Result<Roadmap, GenerationErrorKind> {
        let prompt = build_prompt(job_role);

        let completion = self.backend.complete(&prompt).await?;

        if completion.trim().is_empty() {
            return Err(GenerationErrorKind::EmptyResponse);
        }

        let stripped = strip_json_fences(&completion);
        let value: Value = serde_json::from_str(stripped)?;

        validate_roadmap(&value).map_err(GenerationErrorKind::Schema)?;

        // Shape is verified above; a mismatch here means the typed model and
        // the validator have drifted apart.
        serde_json::from_value(value)
            .map_err(|e| GenerationErrorKind::Schema(format!("roadmap shape mismatch: {e}")))
    }

    /// Empties the cache unconditionally.
    pub fn clear_cache(&self) {
        self.cache.clear();
        info!("Roadmap cache cleared");
    }

    /// Read-only cache snapshot; no side effects.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
