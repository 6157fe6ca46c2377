use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A named life-stage topic and its ordered question list.
///
/// The stage name is the key it is stored under in a [`StageDocument`].
/// Questions are identified by their index, so the list is append-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub questions: Vec<String>,
    pub status: StageStatus,
}

/// Status of a stage's question set.
///
/// State machine transitions:
/// - `Building` → `Committed` (once the stage holds enough questions)
/// - `Committed` is a terminal state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageStatus {
    /// Questions may still be added; answering is gated off by default.
    #[serde(rename = "building")]
    #[default]
    Building,

    /// Question set is frozen and ready for answering.
    #[serde(rename = "committed")]
    Committed,
}

impl std::fmt::Display for StageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StageStatus::Building => write!(f, "building"),
            StageStatus::Committed => write!(f, "committed"),
        }
    }
}

impl std::str::FromStr for StageStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "building" => Ok(StageStatus::Building),
            "committed" => Ok(StageStatus::Committed),
            _ => anyhow::bail!("Invalid stage status: {s}. Use: building, committed"),
        }
    }
}

/// The whole stage document: stage name → stage, in on-disk order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StageDocument {
    pub stages: IndexMap<String, Stage>,
}
