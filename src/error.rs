use crate::types::{EdgeId, EdgeKind, NodeId, NodeKind};

/// Structural violations detected while building a [`Crag`](crate::crag::Crag).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CragError {
    #[error("node {0} does not exist")]
    UnknownNode(NodeId),
    #[error("edge {edge} is a self loop on {node}")]
    SelfLoop { edge: EdgeId, node: NodeId },
    #[error("subset arc {child} -> {parent} must join two region nodes, got {child_kind:?} -> {parent_kind:?}")]
    SubsetKind {
        child: NodeId,
        parent: NodeId,
        child_kind: NodeKind,
        parent_kind: NodeKind,
    },
    #[error("node {child} has a second parent {parent}")]
    MultipleParents { child: NodeId, parent: NodeId },
    #[error("subset relation has a cycle through {0}")]
    Cycle(NodeId),
    #[error("{kind:?} edge {edge} cannot join {u_kind:?} and {v_kind:?}")]
    EdgeEndpoints {
        edge: EdgeId,
        kind: EdgeKind,
        u_kind: NodeKind,
        v_kind: NodeKind,
    },
}

/// Fatal contract violations raised while computing a best-effort solution.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BestEffortError {
    #[error("no volume for candidate {0}")]
    MissingVolume(NodeId),
    #[error("candidate {node} reads ground truth outside the labeled grid at {position:?}")]
    GroundTruthOutOfBounds { node: NodeId, position: [i64; 3] },
    #[error("candidate {node} resolution {region:?} differs from ground-truth resolution {ground_truth:?}")]
    ResolutionMismatch {
        node: NodeId,
        region: [f64; 3],
        ground_truth: [f64; 3],
    },
    #[error("mask of candidate {0} does not match its dimensions")]
    MalformedVolume(NodeId),
    #[error("ground-truth buffer does not match its dimensions")]
    MalformedGroundTruth,
    #[error("ground truth needs a finite offset and a finite positive resolution, got offset {offset:?} resolution {resolution:?}")]
    InvalidGroundTruthGeometry {
        offset: [f64; 3],
        resolution: [f64; 3],
    },
    #[error("candidate {node} has a non-finite offset {offset:?} or resolution {resolution:?}")]
    InvalidRegionGeometry {
        node: NodeId,
        offset: [f64; 3],
        resolution: [f64; 3],
    },
    #[error("volume set covers {volumes} candidates but the graph has {nodes}")]
    VolumeCount { volumes: usize, nodes: usize },
    #[error("invalid parameters: {0}")]
    InvalidParams(String),
}
