use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Axis-aligned box in world units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl BoundingBox {
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self { min, max }
    }

    /// Box spanning `dims` voxels of size `resolution` starting at `offset`.
    pub fn from_voxels(offset: Vector3<f64>, resolution: Vector3<f64>, dims: [usize; 3]) -> Self {
        let extent = Vector3::new(dims[0] as f64, dims[1] as f64, dims[2] as f64)
            .component_mul(&resolution);
        let min = Point3::from(offset);
        Self {
            min,
            max: min + extent,
        }
    }

    pub fn extent(&self) -> Vector3<f64> {
        self.max - self.min
    }

    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.min, &self.max)
    }
}
