//! Node/edge selection state shared by every pass.
//!
//! All entries start unselected. The candidate selector writes node flags,
//! the link resolver writes both node and edge flags, and the final value is
//! handed to the caller as the best-effort solution.

mod check;

pub use check::{antichain_violations, is_antichain, LinkCheck};

use crate::crag::Crag;
use crate::types::{EdgeId, NodeId};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    nodes: Vec<bool>,
    edges: Vec<bool>,
}

impl Selection {
    pub fn new(num_nodes: usize, num_edges: usize) -> Self {
        Self {
            nodes: vec![false; num_nodes],
            edges: vec![false; num_edges],
        }
    }

    /// Everything unselected, sized for `crag`.
    pub fn for_crag(crag: &Crag) -> Self {
        Self::new(crag.num_nodes(), crag.num_edges())
    }

    #[inline]
    pub fn is_node_selected(&self, n: NodeId) -> bool {
        self.nodes[n.index()]
    }

    #[inline]
    pub fn is_edge_selected(&self, e: EdgeId) -> bool {
        self.edges[e.index()]
    }

    #[inline]
    pub fn set_node(&mut self, n: NodeId, selected: bool) {
        self.nodes[n.index()] = selected;
    }

    #[inline]
    pub fn set_edge(&mut self, e: EdgeId, selected: bool) {
        self.edges[e.index()] = selected;
    }

    pub fn selected_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, &s)| s)
            .map(|(i, _)| NodeId(i as u32))
    }

    pub fn selected_edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, &s)| s)
            .map(|(i, _)| EdgeId(i as u32))
    }

    pub fn num_selected_nodes(&self) -> usize {
        self.nodes.iter().filter(|&&s| s).count()
    }

    pub fn num_selected_edges(&self) -> usize {
        self.edges.iter().filter(|&&s| s).count()
    }

    /// Whether every node selected in `other` is selected here as well.
    pub fn contains_nodes_of(&self, other: &Selection) -> bool {
        other.selected_nodes().all(|n| self.is_node_selected(n))
    }
}

#[cfg(test)]
mod tests;
