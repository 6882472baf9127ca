use super::{AssignmentStage, LinkingStage, OverlapStage, SelectionStage, TimingBreakdown};
use crate::crag::Crag;
use crate::selection::Selection;
use crate::types::NodeKind;
use serde::Serialize;

/// Result produced by [`BestEffort::compute`](crate::BestEffort::compute).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BestEffortReport {
    pub selection: Selection,
    pub trace: BestEffortTrace,
}

/// Stage-by-stage account of one best-effort run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BestEffortTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlap: Option<OverlapStage>,
    pub assignment: AssignmentStage,
    pub selection: SelectionStage,
    pub linking: LinkingStage,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub nodes: usize,
    pub edges: usize,
    pub regions: usize,
    pub link_nodes: usize,
    pub placeholders: usize,
}

impl InputDescriptor {
    pub fn from_crag(crag: &Crag) -> Self {
        let count = |kind: NodeKind| crag.nodes_of_kind(kind).count();
        Self {
            nodes: crag.num_nodes(),
            edges: crag.num_edges(),
            regions: count(NodeKind::Region),
            link_nodes: count(NodeKind::Link),
            placeholders: count(NodeKind::NoLinkPlaceholder),
        }
    }
}
