use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense handle of a candidate in a [`Crag`](crate::crag::Crag).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

/// Dense handle of a lateral edge in a [`Crag`](crate::crag::Crag).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl EdgeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Ground-truth label. `0` is reserved for background / unlabeled voxels.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct GtLabel(pub u32);

impl GtLabel {
    pub const BACKGROUND: GtLabel = GtLabel(0);

    #[inline]
    pub fn is_background(self) -> bool {
        self == Self::BACKGROUND
    }
}

impl fmt::Display for GtLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Variant tag of a candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    /// A proposed image region, part of the subset hierarchy.
    Region,
    /// Hub representing an explicit correspondence between regions of
    /// neighbouring sections.
    Link,
    /// Stand-in target for "no correspondence in this direction".
    NoLinkPlaceholder,
}

impl NodeKind {
    /// Whether candidates of this kind receive a ground-truth histogram.
    #[inline]
    pub fn has_overlap(self) -> bool {
        !matches!(self, NodeKind::NoLinkPlaceholder)
    }
}

/// Variant tag of a lateral edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EdgeKind {
    /// Two touching regions within one section.
    Adjacency,
    /// Cross-section correspondence: region to region, or region to link hub.
    DirectLink,
    /// Region to its no-link placeholder in one direction.
    NoLink,
}

/// Cross-section direction along z.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub const BOTH: [Direction; 2] = [Direction::Up, Direction::Down];

    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Up => 1.0,
            Direction::Down => -1.0,
        }
    }

    /// True when a neighbour at `z_diff = z(neighbour) - z(self)` lies in this
    /// direction. Neighbours in the same plane count for both directions.
    #[inline]
    pub fn contains(self, z_diff: f64) -> bool {
        z_diff * self.sign() >= 0.0
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}
