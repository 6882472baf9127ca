use super::Crag;
use crate::error::CragError;
use crate::types::{EdgeId, EdgeKind, NodeId, NodeKind};

/// Incremental constructor for [`Crag`]. Structural checks run in [`build`](Self::build).
#[derive(Clone, Debug, Default)]
pub struct CragBuilder {
    kinds: Vec<NodeKind>,
    subsets: Vec<(NodeId, NodeId)>,
    edges: Vec<(NodeId, NodeId, EdgeKind)>,
}

impl CragBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.kinds.len() as u32);
        self.kinds.push(kind);
        id
    }

    /// Records that `child` is a sub-region of `parent`.
    pub fn add_subset(&mut self, child: NodeId, parent: NodeId) {
        self.subsets.push((child, parent));
    }

    pub fn add_edge(&mut self, u: NodeId, v: NodeId, kind: EdgeKind) -> EdgeId {
        let id = EdgeId(self.edges.len() as u32);
        self.edges.push((u, v, kind));
        id
    }

    pub fn build(self) -> Result<Crag, CragError> {
        let n = self.kinds.len();
        let kind_of = |id: NodeId| -> Result<NodeKind, CragError> {
            self.kinds
                .get(id.index())
                .copied()
                .ok_or(CragError::UnknownNode(id))
        };

        let mut parents: Vec<Option<NodeId>> = vec![None; n];
        let mut children: Vec<Vec<NodeId>> = vec![Vec::new(); n];
        for &(child, parent) in &self.subsets {
            let child_kind = kind_of(child)?;
            let parent_kind = kind_of(parent)?;
            if child_kind != NodeKind::Region || parent_kind != NodeKind::Region {
                return Err(CragError::SubsetKind {
                    child,
                    parent,
                    child_kind,
                    parent_kind,
                });
            }
            if child == parent {
                return Err(CragError::Cycle(child));
            }
            if parents[child.index()].is_some() {
                return Err(CragError::MultipleParents { child, parent });
            }
            parents[child.index()] = Some(parent);
            children[parent.index()].push(child);
        }
        check_acyclic(&parents)?;

        let mut edge_kinds = Vec::with_capacity(self.edges.len());
        let mut endpoints = Vec::with_capacity(self.edges.len());
        let mut incident: Vec<Vec<EdgeId>> = vec![Vec::new(); n];
        for (i, &(u, v, kind)) in self.edges.iter().enumerate() {
            let edge = EdgeId(i as u32);
            let u_kind = kind_of(u)?;
            let v_kind = kind_of(v)?;
            if u == v {
                return Err(CragError::SelfLoop { edge, node: u });
            }
            if !endpoints_allowed(kind, u_kind, v_kind) {
                return Err(CragError::EdgeEndpoints {
                    edge,
                    kind,
                    u_kind,
                    v_kind,
                });
            }
            edge_kinds.push(kind);
            endpoints.push((u, v));
            incident[u.index()].push(edge);
            incident[v.index()].push(edge);
        }

        Ok(Crag {
            kinds: self.kinds,
            parents,
            children,
            edge_kinds,
            endpoints,
            incident,
        })
    }
}

fn endpoints_allowed(kind: EdgeKind, a: NodeKind, b: NodeKind) -> bool {
    use NodeKind::*;
    match kind {
        EdgeKind::Adjacency => a == Region && b == Region,
        EdgeKind::DirectLink => matches!((a, b), (Region, Region) | (Region, Link) | (Link, Region)),
        EdgeKind::NoLink => {
            matches!((a, b), (Region, NoLinkPlaceholder) | (NoLinkPlaceholder, Region))
        }
    }
}

/// Parent pointers must terminate. Each path is walked once; nodes are marked
/// open while on the current path and closed once their root is known.
fn check_acyclic(parents: &[Option<NodeId>]) -> Result<(), CragError> {
    const UNSEEN: u8 = 0;
    const OPEN: u8 = 1;
    const CLOSED: u8 = 2;

    let mut state = vec![UNSEEN; parents.len()];
    let mut path = Vec::new();
    for start in 0..parents.len() {
        let mut cur = Some(NodeId(start as u32));
        while let Some(node) = cur {
            match state[node.index()] {
                CLOSED => break,
                OPEN => return Err(CragError::Cycle(node)),
                _ => {
                    state[node.index()] = OPEN;
                    path.push(node);
                    cur = parents[node.index()];
                }
            }
        }
        for node in path.drain(..) {
            state[node.index()] = CLOSED;
        }
    }
    Ok(())
}
