use super::LinkContext;
use crate::diagnostics::{BestEffortEvent, EventSink};
use crate::error::BestEffortError;
use crate::selection::Selection;
use crate::types::{Direction, EdgeKind, NodeId, NodeKind};

/// Leaves each selected region with at most one selected link per direction,
/// resolving competing links pairwise in edge order.
///
/// For every region and direction the last surviving neighbour is kept as
/// `previous`. When another selected neighbour in the same direction shows
/// up, the one with the smaller overlap on `previous`'s label is unselected
/// together with all of its edges; on equal overlap `previous` goes. Returns
/// the number of conflicts resolved.
pub fn enforce_single_link(
    ctx: &LinkContext<'_>,
    selection: &mut Selection,
    sink: &mut dyn EventSink,
) -> Result<usize, BestEffortError> {
    let crag = ctx.crag;
    let mut resolved = 0;
    for n in crag.nodes_of_kind(NodeKind::Region) {
        if !selection.is_node_selected(n) {
            continue;
        }
        for direction in Direction::BOTH {
            let mut previous: Option<NodeId> = None;
            for &e in crag.incident_edges(n) {
                if crag.edge_kind(e) != EdgeKind::DirectLink || !selection.is_edge_selected(e) {
                    continue;
                }
                let Some(opposite) = crag.opposite(n, e) else {
                    continue;
                };
                if !direction.contains(ctx.z_diff(n, opposite)?) {
                    continue;
                }
                let Some(prev) = previous else {
                    if selection.is_node_selected(opposite) {
                        previous = Some(opposite);
                    }
                    continue;
                };

                let label = ctx.assignments.label(prev);
                let (kept, removed) =
                    if ctx.overlaps.count(prev, label) > ctx.overlaps.count(opposite, label) {
                        (prev, opposite)
                    } else {
                        (opposite, prev)
                    };
                sink.record(BestEffortEvent::ConflictResolved {
                    node: n,
                    direction,
                    kept,
                    removed,
                });
                unselect_with_edges(ctx, selection, removed, sink);
                resolved += 1;
                previous = Some(kept);
            }
        }
    }
    Ok(resolved)
}

fn unselect_with_edges(
    ctx: &LinkContext<'_>,
    selection: &mut Selection,
    node: NodeId,
    sink: &mut dyn EventSink,
) {
    selection.set_node(node, false);
    for &e in ctx.crag.incident_edges(node) {
        if selection.is_edge_selected(e) {
            selection.set_edge(e, false);
            let (u, v) = ctx.crag.endpoints(e);
            sink.record(BestEffortEvent::EdgeUnselected { edge: e, u, v });
        }
    }
}
