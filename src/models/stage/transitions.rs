use anyhow::{bail, Result};

use super::types::StageStatus;

impl StageStatus {
    /// Check if transitioning from the current status to the new status is valid.
    ///
    /// Valid transitions:
    /// - `Building` -> `Committed`
    /// - `Committed` is a terminal state
    ///
    /// Staying in the same status is always valid (no-op).
    pub fn can_transition_to(&self, new_status: &StageStatus) -> bool {
        if self == new_status {
            return true;
        }

        match self {
            StageStatus::Building => matches!(new_status, StageStatus::Committed),
            StageStatus::Committed => false, // Terminal state
        }
    }

    /// Attempt to transition to a new status, returning an error if invalid.
    pub fn try_transition(&self, new_status: StageStatus) -> Result<StageStatus> {
        if self.can_transition_to(&new_status) {
            Ok(new_status)
        } else {
            bail!("Invalid stage status transition: {self} -> {new_status}")
        }
    }

    /// Returns the list of valid statuses this status can transition to.
    pub fn valid_transitions(&self) -> Vec<StageStatus> {
        match self {
            StageStatus::Building => vec![StageStatus::Committed],
            StageStatus::Committed => vec![], // Terminal state
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
