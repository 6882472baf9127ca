//! Voxel volumes attached to candidates and the ground-truth label grid.
//!
//! - [`RegionVolume`]: boolean mask of one candidate inside its discrete
//!   bounding box, placed in world space by `offset` and `resolution`.
//! - [`LabelVolume`]: ground-truth labels on a regular grid, with its own
//!   offset and resolution.
//! - [`CragVolumes`]: per-candidate region volumes indexed by [`NodeId`].
//!
//! All buffers are x-fastest (`x + w * (y + h * z)`).

mod bbox;
mod label;
mod region;

pub use bbox::BoundingBox;
pub use label::LabelVolume;
pub use region::RegionVolume;

use crate::error::BestEffortError;
use crate::types::NodeId;
use serde::{Deserialize, Serialize};

/// Region volumes of every candidate of a graph, indexed by node id.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CragVolumes {
    volumes: Vec<Option<RegionVolume>>,
}

impl CragVolumes {
    /// Empty slots for `num_nodes` candidates.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            volumes: vec![None; num_nodes],
        }
    }

    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }

    pub fn insert(&mut self, n: NodeId, volume: RegionVolume) {
        if n.index() >= self.volumes.len() {
            self.volumes.resize(n.index() + 1, None);
        }
        self.volumes[n.index()] = Some(volume);
    }

    pub fn get(&self, n: NodeId) -> Option<&RegionVolume> {
        self.volumes.get(n.index()).and_then(Option::as_ref)
    }

    /// Volume of `n`; a missing volume is a fatal contract violation.
    pub fn require(&self, n: NodeId) -> Result<&RegionVolume, BestEffortError> {
        self.get(n).ok_or(BestEffortError::MissingVolume(n))
    }

    /// World z-coordinate of the bounding-box centre of `n`.
    pub fn center_z(&self, n: NodeId) -> Result<f64, BestEffortError> {
        Ok(self.require(n)?.bounding_box().center().z)
    }
}
