//! Concordant-leaf strategy.
//!
//! The leaf label set of a candidate is its own label joined with the leaf
//! label sets of its children. Only whether that set is a single label
//! matters, so it is kept as [`LeafLabels`]: the one shared label, or
//! `Mixed` once two different labels meet.

use super::{walk_top_down, Step};
use crate::assignment::Assignments;
use crate::crag::Crag;
use crate::diagnostics::{BestEffortEvent, EventSink};
use crate::selection::Selection;
use crate::types::{GtLabel, NodeId, NodeKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeafLabels {
    Uniform(GtLabel),
    Mixed,
}

impl LeafLabels {
    pub fn merge(self, other: LeafLabels) -> LeafLabels {
        match (self, other) {
            (LeafLabels::Uniform(a), LeafLabels::Uniform(b)) if a == b => self,
            _ => LeafLabels::Mixed,
        }
    }

    /// The single foreground label, if there is one.
    pub fn foreground(self) -> Option<GtLabel> {
        match self {
            LeafLabels::Uniform(l) if !l.is_background() => Some(l),
            _ => None,
        }
    }
}

/// Bottom-up leaf label summary of every region candidate, indexed by node.
/// Each candidate is computed once, after all of its children.
pub fn leaf_labels(crag: &Crag, assignments: &Assignments) -> Vec<Option<LeafLabels>> {
    let mut out: Vec<Option<LeafLabels>> = vec![None; crag.num_nodes()];
    let mut stack: Vec<(NodeId, bool)> = crag.region_roots().map(|r| (r, false)).collect();
    while let Some((n, children_done)) = stack.pop() {
        if !children_done {
            stack.push((n, true));
            stack.extend(crag.children(n).iter().map(|&c| (c, false)));
            continue;
        }
        let own = LeafLabels::Uniform(assignments.label(n));
        let merged = crag
            .children(n)
            .iter()
            .filter_map(|c| out[c.index()])
            .fold(own, LeafLabels::merge);
        out[n.index()] = Some(merged);
    }
    out
}

pub fn select_concordant_leaves(
    crag: &Crag,
    assignments: &Assignments,
    full_best_effort: bool,
    selection: &mut Selection,
    sink: &mut dyn EventSink,
) {
    let summaries = leaf_labels(crag, assignments);
    walk_top_down(crag, |n| {
        let concordant = summaries[n.index()].and_then(LeafLabels::foreground);
        match (concordant, crag.node_kind(n)) {
            (Some(label), NodeKind::Region) => {
                selection.set_node(n, true);
                sink.record(BestEffortEvent::CandidateSelected { node: n, label });
                if full_best_effort {
                    Step::Descend
                } else {
                    Step::Close
                }
            }
            _ => Step::Descend,
        }
    });
}
