//! Parameters of the best-effort computation.
//!
//! Keys accept both the snake_case field names and the camelCase option
//! names (`fullBestEffort`, `backgroundOverlapWeight`). The boolean
//! `useMajorityOverlapStrategy` switch is expressed as
//! `strategy: "majority_overlap"`.

use crate::error::BestEffortError;
use serde::{Deserialize, Serialize};

/// Top-down rule deciding which candidates are selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// Largest candidates whose leaves all carry the same foreground label.
    #[default]
    ConcordantLeaves,
    /// Largest candidates with a strict weighted majority of one label;
    /// leaves are taken when no ancestor on their path has one.
    MajorityOverlap,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BestEffortParams {
    /// Keep descending below a selected candidate, selecting every descendant
    /// that reproduces the same segmentation.
    #[serde(alias = "fullBestEffort")]
    pub full_best_effort: bool,
    /// Weight of background voxels when scoring labels. Values below 1 let a
    /// candidate be assigned to an object it overlaps by less than half.
    #[serde(alias = "backgroundOverlapWeight")]
    pub background_overlap_weight: f64,
    pub strategy: SelectionStrategy,
}

impl Default for BestEffortParams {
    fn default() -> Self {
        Self {
            full_best_effort: false,
            background_overlap_weight: 1.0,
            strategy: SelectionStrategy::ConcordantLeaves,
        }
    }
}

impl BestEffortParams {
    pub fn with_strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_full_best_effort(mut self, full: bool) -> Self {
        self.full_best_effort = full;
        self
    }

    pub fn with_background_weight(mut self, weight: f64) -> Self {
        self.background_overlap_weight = weight;
        self
    }

    /// Equivalent of the `useMajorityOverlapStrategy` switch.
    pub fn use_majority_overlap(&self) -> bool {
        self.strategy == SelectionStrategy::MajorityOverlap
    }

    pub fn validate(&self) -> Result<(), BestEffortError> {
        let w = self.background_overlap_weight;
        if !w.is_finite() || w < 0.0 {
            return Err(BestEffortError::InvalidParams(format!(
                "background_overlap_weight must be finite and >= 0, got {w}"
            )));
        }
        Ok(())
    }
}
