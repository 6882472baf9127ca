use super::LinkContext;
use crate::diagnostics::{BestEffortEvent, EventSink};
use crate::selection::Selection;
use crate::types::{EdgeKind, GtLabel, NodeId, NodeKind};

/// Shared foreground label of two selected candidates.
fn shared_foreground(
    ctx: &LinkContext<'_>,
    selection: &Selection,
    u: NodeId,
    v: NodeId,
) -> Option<GtLabel> {
    if !selection.is_node_selected(u) || !selection.is_node_selected(v) {
        return None;
    }
    let label = ctx.assignments.label(u);
    (!label.is_background() && label == ctx.assignments.label(v)).then_some(label)
}

/// Selects adjacency edges inside one ground-truth object.
pub fn select_adjacency_edges(
    ctx: &LinkContext<'_>,
    selection: &mut Selection,
    sink: &mut dyn EventSink,
) -> usize {
    let mut selected = 0;
    for e in ctx.crag.edges_of_kind(EdgeKind::Adjacency) {
        let (u, v) = ctx.crag.endpoints(e);
        if let Some(label) = shared_foreground(ctx, selection, u, v) {
            selection.set_edge(e, true);
            selected += 1;
            sink.record(BestEffortEvent::AdjacencySelected { edge: e, label });
        }
    }
    selected
}

/// Selects link hubs whose regions are all selected with one foreground
/// label. A hub without regions links nothing and stays unselected.
pub fn select_link_nodes(
    ctx: &LinkContext<'_>,
    selection: &mut Selection,
    sink: &mut dyn EventSink,
) -> usize {
    let mut selected = 0;
    for n in ctx.crag.nodes_of_kind(NodeKind::Link) {
        let mut shared: Option<GtLabel> = None;
        let mut consistent = true;
        for &e in ctx.crag.incident_edges(n) {
            let Some(region) = ctx.crag.opposite(n, e) else {
                continue;
            };
            if !selection.is_node_selected(region) {
                consistent = false;
                break;
            }
            let label = ctx.assignments.label(region);
            match shared {
                None => shared = Some(label),
                Some(first) if first != label => {
                    consistent = false;
                    break;
                }
                Some(_) => {}
            }
        }
        let label = match shared {
            Some(label) if consistent && !label.is_background() => label,
            _ => continue,
        };
        selection.set_node(n, true);
        selected += 1;
        sink.record(BestEffortEvent::LinkNodeSelected { node: n, label });
    }
    selected
}

/// Selects `DirectLink` edges between selected candidates of one foreground
/// label, whether the far end is a region or a link hub.
pub fn select_direct_links(
    ctx: &LinkContext<'_>,
    selection: &mut Selection,
    sink: &mut dyn EventSink,
) -> usize {
    let mut selected = 0;
    for e in ctx.crag.edges_of_kind(EdgeKind::DirectLink) {
        let (u, v) = ctx.crag.endpoints(e);
        if let Some(label) = shared_foreground(ctx, selection, u, v) {
            selection.set_edge(e, true);
            selected += 1;
            sink.record(BestEffortEvent::DirectLinkSelected {
                edge: e,
                u,
                v,
                label,
            });
        }
    }
    selected
}
