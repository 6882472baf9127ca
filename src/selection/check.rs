//! Post-condition checks on a resolved selection.
use super::Selection;
use crate::crag::Crag;
use crate::types::{NodeId, NodeKind};
use serde::Serialize;

/// Pairs `(ancestor, descendant)` of selected region candidates.
pub fn antichain_violations(crag: &Crag, selection: &Selection) -> Vec<(NodeId, NodeId)> {
    let mut out = Vec::new();
    for n in crag.nodes_of_kind(NodeKind::Region) {
        if !selection.is_node_selected(n) {
            continue;
        }
        for a in crag.ancestors(n) {
            if selection.is_node_selected(a) {
                out.push((a, n));
            }
        }
    }
    out
}

/// No selected region has a selected ancestor.
pub fn is_antichain(crag: &Crag, selection: &Selection) -> bool {
    antichain_violations(crag, selection).is_empty()
}

/// Outcome of the per-direction link count of every selected region.
///
/// A well-formed solution has exactly one active cross-section edge
/// (`DirectLink` or `NoLink`) in each direction. A region with none at all is
/// `missing`, one with a direction left empty is `partial`, and one with two
/// or more in some direction is `excess`, which is what conflict repair can
/// leave behind.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkCheck {
    pub checked: usize,
    pub missing: Vec<NodeId>,
    pub partial: Vec<NodeId>,
    pub excess: Vec<NodeId>,
}

impl LinkCheck {
    pub fn is_ok(&self) -> bool {
        self.missing.is_empty() && self.partial.is_empty() && self.excess.is_empty()
    }

    /// Buckets `node` by its `[up, down]` counts; returns whether it passed.
    pub fn record(&mut self, node: NodeId, active: [usize; 2]) -> bool {
        self.checked += 1;
        let bucket = if active.iter().any(|&c| c > 1) {
            &mut self.excess
        } else if active == [0, 0] {
            &mut self.missing
        } else if active.contains(&0) {
            &mut self.partial
        } else {
            return true;
        };
        bucket.push(node);
        false
    }
}
