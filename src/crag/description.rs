use super::{Crag, CragBuilder};
use crate::error::CragError;
use crate::types::{EdgeKind, NodeId, NodeKind};
use serde::{Deserialize, Serialize};

/// Serializable form of a [`Crag`]. Node ids are positions in `nodes`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CragDescription {
    pub nodes: Vec<NodeKind>,
    #[serde(default)]
    pub subsets: Vec<SubsetArc>,
    #[serde(default)]
    pub edges: Vec<EdgeDescription>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SubsetArc {
    pub child: NodeId,
    pub parent: NodeId,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct EdgeDescription {
    pub u: NodeId,
    pub v: NodeId,
    pub kind: EdgeKind,
}

impl CragDescription {
    pub fn build(&self) -> Result<Crag, CragError> {
        let mut builder = CragBuilder::new();
        for &kind in &self.nodes {
            builder.add_node(kind);
        }
        for arc in &self.subsets {
            builder.add_subset(arc.child, arc.parent);
        }
        for edge in &self.edges {
            builder.add_edge(edge.u, edge.v, edge.kind);
        }
        builder.build()
    }
}

impl From<&Crag> for CragDescription {
    fn from(crag: &Crag) -> Self {
        let nodes = crag.nodes().map(|n| crag.node_kind(n)).collect();
        let subsets = crag
            .nodes()
            .filter_map(|child| {
                crag.parent(child)
                    .map(|parent| SubsetArc { child, parent })
            })
            .collect();
        let edges = crag
            .edges()
            .map(|e| {
                let (u, v) = crag.endpoints(e);
                EdgeDescription {
                    u,
                    v,
                    kind: crag.edge_kind(e),
                }
            })
            .collect();
        Self {
            nodes,
            subsets,
            edges,
        }
    }
}
