use crate::crag::Crag;
use crate::diagnostics::{BestEffortEvent, EventSink};
use crate::selection::Selection;
use crate::types::{NodeId, NodeKind};

/// Unselects every descendant of every selected region. Returns how many
/// candidates were unselected.
pub fn unselect_descendants(
    crag: &Crag,
    selection: &mut Selection,
    sink: &mut dyn EventSink,
) -> usize {
    let mut unselected = 0;
    let mut stack: Vec<NodeId> = Vec::new();
    for n in crag.nodes_of_kind(NodeKind::Region) {
        if !selection.is_node_selected(n) {
            continue;
        }
        stack.extend_from_slice(crag.children(n));
        while let Some(c) = stack.pop() {
            if selection.is_node_selected(c) {
                selection.set_node(c, false);
                unselected += 1;
                sink.record(BestEffortEvent::DescendantUnselected {
                    ancestor: n,
                    node: c,
                });
            }
            stack.extend_from_slice(crag.children(c));
        }
    }
    unselected
}
