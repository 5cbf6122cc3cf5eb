//! Wire types for the roadmap API. Field names are camelCase on the wire
//! to match the schema the model is instructed to produce.

use serde::{Deserialize, Serialize};

/// One learning stage of a career roadmap.
///
/// The prompt mandates exactly 4 skills, 3 tools, and 4 learning steps per
/// stage; `validate::validate_roadmap` re-checks those counts before this
/// type is ever constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    /// Ordinal position, 1 through 4, unique across the roadmap.
    pub stage: u32,
    pub title: String,
    pub duration: String,
    pub description: String,
    pub skills: Vec<String>,
    pub tools: Vec<String>,
    pub learning_steps: Vec<String>,
}

/// A complete validated career roadmap: exactly four stages, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    pub title: String,
    pub description: String,
    pub estimated_duration: String,
    pub stages: Vec<Stage>,
}

/// Response envelope for POST /api/roadmap.
/// `data` is present iff `success`; `error` is present iff not.
#[derive(Debug, Clone, Serialize)]
pub struct RoadmapResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Roadmap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RoadmapResponse {
    pub fn ok(roadmap: Roadmap) -> Self {
        Self {
            success: true,
            data: Some(roadmap),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}
