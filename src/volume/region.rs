//! Owned boolean voxel mask of a single candidate.
use super::BoundingBox;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionVolume {
    /// World position of voxel `(0, 0, 0)`.
    pub offset: Vector3<f64>,
    /// World size of one voxel along x, y, z.
    pub resolution: Vector3<f64>,
    pub width: usize,
    pub height: usize,
    pub depth: usize,
    /// Mask in x-fastest order, `width * height * depth` entries.
    pub mask: Vec<bool>,
}

impl RegionVolume {
    /// Empty mask of the given voxel dimensions.
    pub fn new(offset: Vector3<f64>, resolution: Vector3<f64>, dims: [usize; 3]) -> Self {
        let [width, height, depth] = dims;
        Self {
            offset,
            resolution,
            width,
            height,
            depth,
            mask: vec![false; width * height * depth],
        }
    }

    /// Mask filled by evaluating `f(x, y, z)` for every voxel of the box.
    pub fn from_fn<F>(offset: Vector3<f64>, resolution: Vector3<f64>, dims: [usize; 3], mut f: F) -> Self
    where
        F: FnMut(usize, usize, usize) -> bool,
    {
        let mut vol = Self::new(offset, resolution, dims);
        for z in 0..vol.depth {
            for y in 0..vol.height {
                for x in 0..vol.width {
                    let i = vol.idx(x, y, z);
                    vol.mask[i] = f(x, y, z);
                }
            }
        }
        vol
    }

    #[inline]
    pub fn dims(&self) -> [usize; 3] {
        [self.width, self.height, self.depth]
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        x + self.width * (y + self.height * z)
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> bool {
        self.mask[self.idx(x, y, z)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, v: bool) {
        let i = self.idx(x, y, z);
        self.mask[i] = v;
    }

    /// Whether the mask length matches the declared dimensions.
    pub fn is_well_formed(&self) -> bool {
        self.width
            .checked_mul(self.height)
            .and_then(|n| n.checked_mul(self.depth))
            == Some(self.mask.len())
    }

    /// Offset and resolution are finite.
    pub fn has_finite_geometry(&self) -> bool {
        self.offset.iter().chain(self.resolution.iter()).all(|v| v.is_finite())
    }

    pub fn voxel_count(&self) -> usize {
        self.mask.iter().filter(|&&v| v).count()
    }

    /// Local coordinates of all set voxels, x-fastest.
    pub fn voxels(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        let (w, h) = (self.width.max(1), self.height.max(1));
        self.mask
            .iter()
            .enumerate()
            .filter(|(_, &v)| v)
            .map(move |(i, _)| [i % w, (i / w) % h, i / (w * h)])
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_voxels(self.offset, self.resolution, self.dims())
    }
}
