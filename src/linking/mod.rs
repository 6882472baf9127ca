//! Cross-section link resolution on top of a candidate selection.
//!
//! Passes, in order:
//! 1. [`select_adjacency_edges`]: adjacency edges between selected regions
//!    of the same foreground label. Under a full best-effort selection this
//!    includes the edges joining the parts of one object.
//! 2. [`unselect_descendants`]: every selected region clears its subtree,
//!    restoring the antichain. Edges selected in pass 1 stay selected.
//! 3. [`select_link_nodes`]: a link hub is selected when all of its regions
//!    are selected and share one foreground label.
//! 4. [`select_direct_links`]: a `DirectLink` edge is selected when both
//!    endpoints are selected and share one foreground label.
//! 5. [`enforce_single_link`]: per selected region and direction, competing
//!    selected links are reduced pairwise, keeping the neighbour with the
//!    larger overlap on the shared label.
//! 6. [`select_no_link_edges`]: a selected region without a selected link in
//!    a direction takes its `NoLink` edge for that direction.
//!
//! The direction of a neighbour is the sign of the z-difference between the
//! bounding-box centres of neighbour and region. Pass 5 resolves conflicts in
//! edge order and does not iterate to a fixed point. Whatever it leaves, and
//! duplicate `NoLink` edges in one direction, is reported per direction by
//! [`LinkContext::check_links`].

mod activation;
mod cleanup;
mod explanation;
mod fallback;

pub use activation::{select_adjacency_edges, select_direct_links, select_link_nodes};
pub use cleanup::unselect_descendants;
pub use explanation::enforce_single_link;
pub use fallback::select_no_link_edges;

use crate::assignment::Assignments;
use crate::crag::Crag;
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{BestEffortEvent, EventSink, LinkingStage};
use crate::error::BestEffortError;
use crate::overlap::Overlaps;
use crate::selection::{LinkCheck, Selection};
use crate::types::{Direction, EdgeKind, NodeId, NodeKind};
use crate::volume::CragVolumes;
use log::debug;
use std::time::Instant;

/// Read-only inputs shared by the link passes.
#[derive(Clone, Copy)]
pub struct LinkContext<'a> {
    pub crag: &'a Crag,
    pub volumes: &'a CragVolumes,
    pub overlaps: &'a Overlaps,
    pub assignments: &'a Assignments,
}

impl LinkContext<'_> {
    /// `z(to) - z(from)` of the bounding-box centres.
    pub fn z_diff(&self, from: NodeId, to: NodeId) -> Result<f64, BestEffortError> {
        Ok(self.volumes.center_z(to)? - self.volumes.center_z(from)?)
    }

    /// Selected `DirectLink` and `NoLink` edges of `n`, per direction
    /// (`[up, down]`).
    pub fn active_links(
        &self,
        selection: &Selection,
        n: NodeId,
    ) -> Result<[usize; 2], BestEffortError> {
        let mut counts = [0usize; 2];
        for &e in self.crag.incident_edges(n) {
            if !matches!(self.crag.edge_kind(e), EdgeKind::DirectLink | EdgeKind::NoLink)
                || !selection.is_edge_selected(e)
            {
                continue;
            }
            let Some(other) = self.crag.opposite(n, e) else {
                continue;
            };
            let z = self.z_diff(n, other)?;
            for (slot, dir) in Direction::BOTH.iter().enumerate() {
                if dir.contains(z) {
                    counts[slot] += 1;
                }
            }
        }
        Ok(counts)
    }

    /// Per-direction link count of every selected region, emitting
    /// [`BestEffortEvent::LinkCheckFailed`] for each region that does not
    /// have exactly one active link up and one down.
    pub fn check_links(
        &self,
        selection: &Selection,
        sink: &mut dyn EventSink,
    ) -> Result<LinkCheck, BestEffortError> {
        let mut check = LinkCheck::default();
        for node in self.crag.nodes_of_kind(NodeKind::Region) {
            if !selection.is_node_selected(node) {
                continue;
            }
            let active = self.active_links(selection, node)?;
            if !check.record(node, active) {
                sink.record(BestEffortEvent::LinkCheckFailed { node, active });
            }
        }
        Ok(check)
    }
}

/// Runs all link passes on a candidate selection.
pub struct LinkResolver<'a> {
    ctx: LinkContext<'a>,
}

impl<'a> LinkResolver<'a> {
    pub fn new(ctx: LinkContext<'a>) -> Self {
        Self { ctx }
    }

    pub fn resolve(
        &self,
        selection: &mut Selection,
        sink: &mut dyn EventSink,
    ) -> Result<LinkingStage, BestEffortError> {
        let start = Instant::now();
        let ctx = &self.ctx;

        let adjacency_selected = select_adjacency_edges(ctx, selection, sink);
        let descendants_unselected = unselect_descendants(ctx.crag, selection, sink);
        let link_nodes_selected = select_link_nodes(ctx, selection, sink);
        let direct_links_selected = select_direct_links(ctx, selection, sink);
        let conflicts_resolved = enforce_single_link(ctx, selection, sink)?;
        let no_links_selected = select_no_link_edges(ctx, selection, sink)?;

        let link_check = ctx.check_links(selection, sink)?;
        debug!(
            "LinkResolver::resolve adjacency={} unselected={} link_nodes={} direct={} conflicts={} no_link={} check_ok={}",
            adjacency_selected,
            descendants_unselected,
            link_nodes_selected,
            direct_links_selected,
            conflicts_resolved,
            no_links_selected,
            link_check.is_ok()
        );

        Ok(LinkingStage {
            elapsed_ms: elapsed_ms(start),
            descendants_unselected,
            adjacency_selected,
            link_nodes_selected,
            direct_links_selected,
            conflicts_resolved,
            no_links_selected,
            link_check,
        })
    }
}

#[cfg(test)]
mod tests;
