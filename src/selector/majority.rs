//! Majority-overlap strategy.
use super::{walk_top_down, Step};
use crate::assignment::{weighted_score, weighted_total, Assignments};
use crate::crag::Crag;
use crate::diagnostics::{BestEffortEvent, EventSink};
use crate::overlap::Overlaps;
use crate::selection::Selection;
use crate::types::NodeId;

/// Fraction of the weighted overlap the assigned label has to exceed.
const MAJORITY: f64 = 0.5;

/// Whether the assigned label of `n` holds a strict weighted majority.
pub fn has_majority(
    n: NodeId,
    overlaps: &Overlaps,
    assignments: &Assignments,
    background_weight: f64,
) -> bool {
    let Some(hist) = overlaps.get(n) else {
        return false;
    };
    let label = assignments.label(n);
    let max_overlap = weighted_score(label, hist.count(label), background_weight);
    let total_overlap = weighted_total(hist, background_weight);
    total_overlap > 0.0 && max_overlap / total_overlap > MAJORITY
}

pub fn select_majority_overlap(
    crag: &Crag,
    overlaps: &Overlaps,
    assignments: &Assignments,
    background_weight: f64,
    full_best_effort: bool,
    selection: &mut Selection,
    sink: &mut dyn EventSink,
) {
    walk_top_down(crag, |n| {
        if crag.is_leaf(n) || has_majority(n, overlaps, assignments, background_weight) {
            let label = assignments.label(n);
            let selected = !label.is_background();
            selection.set_node(n, selected);
            if selected {
                sink.record(BestEffortEvent::CandidateSelected { node: n, label });
            }
            if !full_best_effort {
                return Step::Close;
            }
        }
        Step::Descend
    });
}
