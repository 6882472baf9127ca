use crate::types::{Direction, EdgeId, GtLabel, NodeId};
use log::Level;
use serde::Serialize;
use std::fmt;

/// Single decision taken by one of the selection passes.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum BestEffortEvent {
    CandidateSelected {
        node: NodeId,
        label: GtLabel,
    },
    DescendantUnselected {
        ancestor: NodeId,
        node: NodeId,
    },
    AdjacencySelected {
        edge: EdgeId,
        label: GtLabel,
    },
    LinkNodeSelected {
        node: NodeId,
        label: GtLabel,
    },
    DirectLinkSelected {
        edge: EdgeId,
        u: NodeId,
        v: NodeId,
        label: GtLabel,
    },
    ConflictResolved {
        node: NodeId,
        direction: Direction,
        kept: NodeId,
        removed: NodeId,
    },
    EdgeUnselected {
        edge: EdgeId,
        u: NodeId,
        v: NodeId,
    },
    NoLinkSelected {
        node: NodeId,
        edge: EdgeId,
        direction: Direction,
    },
    /// `active` holds the selected cross-section edges as `[up, down]`.
    LinkCheckFailed {
        node: NodeId,
        active: [usize; 2],
    },
}

impl BestEffortEvent {
    /// Log level used by [`LogSink`].
    pub fn level(&self) -> Level {
        match self {
            BestEffortEvent::ConflictResolved { .. } | BestEffortEvent::LinkCheckFailed { .. } => {
                Level::Debug
            }
            _ => Level::Trace,
        }
    }
}

impl fmt::Display for BestEffortEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BestEffortEvent::CandidateSelected { node, label } => {
                write!(f, "selecting candidate {node} with label {label}")
            }
            BestEffortEvent::DescendantUnselected { ancestor, node } => {
                write!(f, "unselecting {node} below selected {ancestor}")
            }
            BestEffortEvent::AdjacencySelected { edge, label } => {
                write!(f, "selecting adjacency edge {edge} inside label {label}")
            }
            BestEffortEvent::LinkNodeSelected { node, label } => {
                write!(f, "selecting link node {node} with label {label}")
            }
            BestEffortEvent::DirectLinkSelected { edge, u, v, label } => {
                write!(f, "selecting link {edge} between {u} and {v} (label {label})")
            }
            BestEffortEvent::ConflictResolved {
                node,
                direction,
                kept,
                removed,
            } => write!(
                f,
                "{node} has competing links {direction}: keeping {kept}, unselecting {removed}"
            ),
            BestEffortEvent::EdgeUnselected { edge, u, v } => {
                write!(f, "unselecting edge {edge} between {u} and {v}")
            }
            BestEffortEvent::NoLinkSelected {
                node,
                edge,
                direction,
            } => write!(f, "{node} has no link {direction}, selecting {edge}"),
            BestEffortEvent::LinkCheckFailed { node, active } => write!(
                f,
                "selected {node} has {} active links up and {} down, expected one each",
                active[0], active[1]
            ),
        }
    }
}

/// Receiver of [`BestEffortEvent`]s.
pub trait EventSink {
    fn record(&mut self, event: BestEffortEvent);
}

impl EventSink for Vec<BestEffortEvent> {
    fn record(&mut self, event: BestEffortEvent) {
        self.push(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn record(&mut self, event: BestEffortEvent) {
        (**self).record(event);
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&mut self, _event: BestEffortEvent) {}
}

/// Forwards events to the `log` facade under the `crag_best_effort` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn record(&mut self, event: BestEffortEvent) {
        log::log!(target: "crag_best_effort", event.level(), "{event}");
    }
}
