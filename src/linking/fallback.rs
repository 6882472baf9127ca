use super::LinkContext;
use crate::diagnostics::{BestEffortEvent, EventSink};
use crate::error::BestEffortError;
use crate::selection::Selection;
use crate::types::{Direction, EdgeKind, NodeId, NodeKind};

/// Records "no correspondence" for every selected region and direction
/// without a selected `DirectLink`, by selecting the region's `NoLink` edge
/// towards that direction. Returns the number of edges selected.
pub fn select_no_link_edges(
    ctx: &LinkContext<'_>,
    selection: &mut Selection,
    sink: &mut dyn EventSink,
) -> Result<usize, BestEffortError> {
    let crag = ctx.crag;
    let mut selected = 0;
    for n in crag.nodes_of_kind(NodeKind::Region) {
        if !selection.is_node_selected(n) {
            continue;
        }
        for direction in Direction::BOTH {
            if has_link(ctx, selection, n, direction)? {
                continue;
            }
            for &e in crag.incident_edges(n) {
                if crag.edge_kind(e) != EdgeKind::NoLink {
                    continue;
                }
                let Some(placeholder) = crag.opposite(n, e) else {
                    continue;
                };
                if !direction.contains(ctx.z_diff(n, placeholder)?) {
                    continue;
                }
                if !selection.is_edge_selected(e) {
                    selection.set_edge(e, true);
                    selected += 1;
                    sink.record(BestEffortEvent::NoLinkSelected {
                        node: n,
                        edge: e,
                        direction,
                    });
                }
            }
        }
    }
    Ok(selected)
}

fn has_link(
    ctx: &LinkContext<'_>,
    selection: &Selection,
    n: NodeId,
    direction: Direction,
) -> Result<bool, BestEffortError> {
    for &e in ctx.crag.incident_edges(n) {
        if ctx.crag.edge_kind(e) != EdgeKind::DirectLink || !selection.is_edge_selected(e) {
            continue;
        }
        let Some(other) = ctx.crag.opposite(n, e) else {
            continue;
        };
        if direction.contains(ctx.z_diff(n, other)?) {
            return Ok(true);
        }
    }
    Ok(false)
}
