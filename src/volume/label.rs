//! Ground-truth label grid.
use crate::types::GtLabel;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelVolume {
    pub offset: Vector3<f64>,
    pub resolution: Vector3<f64>,
    pub width: usize,
    pub height: usize,
    pub depth: usize,
    /// Labels in x-fastest order.
    pub data: Vec<GtLabel>,
}

impl LabelVolume {
    /// Grid of the given dimensions filled with background.
    pub fn new(offset: Vector3<f64>, resolution: Vector3<f64>, dims: [usize; 3]) -> Self {
        let [width, height, depth] = dims;
        Self {
            offset,
            resolution,
            width,
            height,
            depth,
            data: vec![GtLabel::BACKGROUND; width * height * depth],
        }
    }

    pub fn from_fn<F>(offset: Vector3<f64>, resolution: Vector3<f64>, dims: [usize; 3], mut f: F) -> Self
    where
        F: FnMut(usize, usize, usize) -> GtLabel,
    {
        let mut vol = Self::new(offset, resolution, dims);
        for z in 0..vol.depth {
            for y in 0..vol.height {
                for x in 0..vol.width {
                    let i = vol.idx(x, y, z);
                    vol.data[i] = f(x, y, z);
                }
            }
        }
        vol
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        x + self.width * (y + self.height * z)
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> GtLabel {
        self.data[self.idx(x, y, z)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, label: GtLabel) {
        let i = self.idx(x, y, z);
        self.data[i] = label;
    }

    /// Label at a signed voxel position, `None` outside the grid.
    #[inline]
    pub fn get_checked(&self, pos: [i64; 3]) -> Option<GtLabel> {
        let [x, y, z] = pos;
        if x < 0 || y < 0 || z < 0 {
            return None;
        }
        let (x, y, z) = (x as usize, y as usize, z as usize);
        if x >= self.width || y >= self.height || z >= self.depth {
            return None;
        }
        Some(self.get(x, y, z))
    }

    pub fn is_well_formed(&self) -> bool {
        self.width
            .checked_mul(self.height)
            .and_then(|n| n.checked_mul(self.depth))
            == Some(self.data.len())
    }

    /// Finite offset and a finite, strictly positive voxel size.
    pub fn has_valid_geometry(&self) -> bool {
        self.offset.iter().all(|v| v.is_finite())
            && self.resolution.iter().all(|&r| r.is_finite() && r > 0.0)
    }
}
