//! Top-down candidate selection.
//!
//! Both strategies walk the subset forest from every region root and decide,
//! per candidate, whether to select it and whether to descend further:
//!
//! - [`majority`]: a candidate whose assigned label holds a strict weighted
//!   majority of its voxels (or any leaf) is selected iff that label is
//!   foreground. The walk stops there unless `full_best_effort` is set.
//!   Descent continues regardless of whether the candidate itself was
//!   selected.
//! - [`concordant`]: a bottom-up pass summarises the labels of each subtree;
//!   the top-down pass selects the largest candidates whose subtree carries a
//!   single foreground label.
//!
//! With `full_best_effort == false` the selected set is an antichain by
//! construction. With `full_best_effort == true` it is a superset of that
//! antichain which may contain nested candidates describing the same
//! segmentation; the link resolver removes the nested ones.
//!
//! Traversals use an explicit stack, so hierarchy depth is bounded by memory
//! only.

pub mod concordant;
pub mod majority;

pub use concordant::{leaf_labels, select_concordant_leaves, LeafLabels};
pub use majority::select_majority_overlap;

use crate::assignment::Assignments;
use crate::best_effort::{BestEffortParams, SelectionStrategy};
use crate::crag::Crag;
use crate::diagnostics::EventSink;
use crate::overlap::Overlaps;
use crate::selection::Selection;
use crate::types::NodeId;

/// Outcome of visiting one candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The subtree is settled; do not visit the children.
    Close,
    /// Visit every child.
    Descend,
}

/// Pre-order walk over all region roots, children in insertion order.
pub fn walk_top_down<F>(crag: &Crag, mut visit: F)
where
    F: FnMut(NodeId) -> Step,
{
    let mut stack: Vec<NodeId> = crag.region_roots().collect();
    stack.reverse();
    while let Some(n) = stack.pop() {
        if visit(n) == Step::Descend {
            stack.extend(crag.children(n).iter().rev().copied());
        }
    }
}

/// Runs the configured strategy on a fresh selection.
pub fn select_candidates(
    crag: &Crag,
    overlaps: &Overlaps,
    assignments: &Assignments,
    params: &BestEffortParams,
    sink: &mut dyn EventSink,
) -> Selection {
    let mut selection = Selection::for_crag(crag);
    match params.strategy {
        SelectionStrategy::MajorityOverlap => select_majority_overlap(
            crag,
            overlaps,
            assignments,
            params.background_overlap_weight,
            params.full_best_effort,
            &mut selection,
            sink,
        ),
        SelectionStrategy::ConcordantLeaves => select_concordant_leaves(
            crag,
            assignments,
            params.full_best_effort,
            &mut selection,
            sink,
        ),
    }
    selection
}
