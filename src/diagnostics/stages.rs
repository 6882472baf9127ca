use crate::best_effort::SelectionStrategy;
use crate::selection::LinkCheck;
use serde::Serialize;

/// Overlap histogram construction.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapStage {
    pub elapsed_ms: f64,
    /// Candidates that received a histogram.
    pub candidates: usize,
    /// Mask voxels counted over all candidates.
    pub voxels: u64,
}

/// Ground-truth assignment.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentStage {
    pub elapsed_ms: f64,
    pub background_weight: f64,
    pub foreground: usize,
    pub background: usize,
}

/// Candidate selection before any link resolution.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionStage {
    pub elapsed_ms: f64,
    pub strategy: SelectionStrategy,
    pub full_best_effort: bool,
    pub selected: usize,
}

/// Counters of the cross-section link resolver, one per pass.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkingStage {
    pub elapsed_ms: f64,
    pub descendants_unselected: usize,
    pub adjacency_selected: usize,
    pub link_nodes_selected: usize,
    pub direct_links_selected: usize,
    pub conflicts_resolved: usize,
    pub no_links_selected: usize,
    pub link_check: LinkCheck,
}
