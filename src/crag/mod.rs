//! Candidate Region Adjacency Graph.
//!
//! Overview
//! - Candidates live in a dense arena addressed by [`NodeId`]; lateral edges
//!   live in a second arena addressed by [`EdgeId`]. Per-candidate and per-edge
//!   state elsewhere in the crate is stored in plain vectors indexed by these
//!   handles.
//! - The subset relation is a forest over [`NodeKind::Region`] candidates:
//!   every child has at most one parent, and `children(parent)` lists the
//!   sub-regions in insertion order.
//! - Lateral edges are tagged [`EdgeKind::Adjacency`] (same section),
//!   [`EdgeKind::DirectLink`] (region to region or region to link hub across
//!   sections) and [`EdgeKind::NoLink`] (region to its placeholder). Incident
//!   edge lists keep insertion order, which fixes the traversal order of the
//!   link resolver.
//!
//! Graphs are only created through [`CragBuilder`] (or a deserialized
//! [`CragDescription`]), which rejects kind combinations the selection passes
//! cannot handle. Code downstream therefore matches on kinds without
//! re-validating them.

mod builder;
mod description;

pub use builder::CragBuilder;
pub use description::{CragDescription, EdgeDescription, SubsetArc};

use crate::types::{EdgeId, EdgeKind, NodeId, NodeKind};

/// Immutable, validated candidate graph.
#[derive(Clone, Debug)]
pub struct Crag {
    kinds: Vec<NodeKind>,
    parents: Vec<Option<NodeId>>,
    children: Vec<Vec<NodeId>>,
    edge_kinds: Vec<EdgeKind>,
    endpoints: Vec<(NodeId, NodeId)>,
    incident: Vec<Vec<EdgeId>>,
}

impl Crag {
    pub fn num_nodes(&self) -> usize {
        self.kinds.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edge_kinds.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.kinds.len() as u32).map(NodeId)
    }

    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edge_kinds.len() as u32).map(EdgeId)
    }

    #[inline]
    pub fn node_kind(&self, n: NodeId) -> NodeKind {
        self.kinds[n.index()]
    }

    #[inline]
    pub fn edge_kind(&self, e: EdgeId) -> EdgeKind {
        self.edge_kinds[e.index()]
    }

    /// Nodes of the given kind, in id order.
    pub fn nodes_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes().filter(move |&n| self.node_kind(n) == kind)
    }

    /// Edges of the given kind, in id order.
    pub fn edges_of_kind(&self, kind: EdgeKind) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges().filter(move |&e| self.edge_kind(e) == kind)
    }

    #[inline]
    pub fn children(&self, n: NodeId) -> &[NodeId] {
        &self.children[n.index()]
    }

    #[inline]
    pub fn parent(&self, n: NodeId) -> Option<NodeId> {
        self.parents[n.index()]
    }

    #[inline]
    pub fn is_root(&self, n: NodeId) -> bool {
        self.parents[n.index()].is_none()
    }

    #[inline]
    pub fn is_leaf(&self, n: NodeId) -> bool {
        self.children[n.index()].is_empty()
    }

    /// Region candidates without a parent.
    pub fn region_roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes_of_kind(NodeKind::Region)
            .filter(move |&n| self.is_root(n))
    }

    #[inline]
    pub fn incident_edges(&self, n: NodeId) -> &[EdgeId] {
        &self.incident[n.index()]
    }

    #[inline]
    pub fn endpoints(&self, e: EdgeId) -> (NodeId, NodeId) {
        self.endpoints[e.index()]
    }

    /// The endpoint of `e` that is not `n`, or `None` if `n` is not on `e`.
    pub fn opposite(&self, n: NodeId, e: EdgeId) -> Option<NodeId> {
        let (u, v) = self.endpoints(e);
        if u == n {
            Some(v)
        } else if v == n {
            Some(u)
        } else {
            None
        }
    }

    /// All strict descendants of `n`, pre-order.
    pub fn descendants(&self, n: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(n).iter().rev().copied().collect();
        while let Some(c) = stack.pop() {
            out.push(c);
            stack.extend(self.children(c).iter().rev().copied());
        }
        out
    }

    /// Strict ancestors of `n`, nearest first.
    pub fn ancestors(&self, n: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(n), move |&p| self.parent(p))
    }

    /// Distance from `n` to its root.
    pub fn depth(&self, n: NodeId) -> usize {
        self.ancestors(n).count()
    }
}
