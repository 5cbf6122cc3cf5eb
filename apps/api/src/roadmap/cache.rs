//! In-memory roadmap cache.
//!
//! Explicitly owned by the generator (not ambient module state) so tests and
//! multi-instance deployments each get an isolated store. Entries are
//! immutable after insert, never expire, and are only removed by `clear`.
//! Unbounded growth is accepted at this demo scale.

use std::collections::HashMap;
use std::sync::RwLock;

use serde::Serialize;

use crate::roadmap::models::Roadmap;

/// Normalizes a role into its cache key: trimmed, lowercased.
/// Idempotent, so keys derived from keys are stable.
pub fn normalize_role(role: &str) -> String {
    role.trim().to_lowercase()
}

/// Read-only cache snapshot for observability.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub cached_roadmaps: usize,
    pub cached_roles: Vec<String>,
}

/// Last-writer-wins key→roadmap store. Concurrent misses for the same key
/// may both generate and overwrite; the overwrite is idempotent.
#[derive(Debug, Default)]
pub struct RoadmapCache {
    entries: RwLock<HashMap<String, Roadmap>>,
}

impl RoadmapCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<Roadmap> {
        self.entries
            .read()
            .expect("roadmap cache lock poisoned")
            .get(key)
            .cloned()
    }

    pub fn insert(&self, key: String, roadmap: Roadmap) {
        self.entries
            .write()
            .expect("roadmap cache lock poisoned")
            .insert(key, roadmap);
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .expect("roadmap cache lock poisoned")
            .clear();
    }

    pub fn stats(&self) -> CacheStats {
        let entries = self.entries.read().expect("roadmap cache lock poisoned");
        CacheStats {
            cached_roadmaps: entries.len(),
            cached_roles: entries.keys().cloned().collect(),
        }
    }
}
