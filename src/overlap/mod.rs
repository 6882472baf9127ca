//! Overlap between candidate regions and ground-truth labels.
//!
//! For every candidate that takes part in ground-truth assignment (all but
//! [`NodeKind::NoLinkPlaceholder`]) the set voxels of its mask are looked up
//! in the ground-truth grid and counted per label. The candidate's voxel
//! origin in ground-truth coordinates is
//! `round((region.offset - gt.offset) / gt.resolution)`; mask voxels are then
//! addressed one-to-one, so region and ground-truth resolutions must agree.
//! Non-finite geometry, a non-positive ground-truth resolution and positions
//! outside the grid (including ones past the `i64` range) are fatal errors.
//!
//! Every candidate is rasterised independently: a child's voxels are counted
//! again even though its parent already covers them. Cost is linear in the
//! total number of set voxels over all candidates. With the `parallel`
//! feature candidates are distributed over the rayon pool; each histogram is
//! still built by a single worker, so the result does not depend on it.

use crate::crag::Crag;
use crate::error::BestEffortError;
use crate::types::{GtLabel, NodeId};
use crate::volume::{CragVolumes, LabelVolume, RegionVolume};
use serde::Serialize;
use std::collections::BTreeMap;

const RESOLUTION_REL_TOL: f64 = 1e-6;
// 2^63 is exact in f64; the upper bound is exclusive.
const I64_MIN_F: f64 = i64::MIN as f64;
const I64_MAX_F: f64 = i64::MAX as f64;

/// Ground-truth label → voxel count of one candidate.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OverlapHistogram {
    counts: BTreeMap<GtLabel, u64>,
}

impl OverlapHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, label: GtLabel, count: u64) {
        if count > 0 {
            *self.counts.entry(label).or_insert(0) += count;
        }
    }

    /// Voxels of `label`; zero when the label never occurs.
    #[inline]
    pub fn count(&self, label: GtLabel) -> u64 {
        self.counts.get(&label).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Entries in ascending label order.
    pub fn iter(&self) -> impl Iterator<Item = (GtLabel, u64)> + '_ {
        self.counts.iter().map(|(&l, &c)| (l, c))
    }
}

impl FromIterator<(GtLabel, u64)> for OverlapHistogram {
    fn from_iter<I: IntoIterator<Item = (GtLabel, u64)>>(iter: I) -> Self {
        let mut hist = Self::new();
        for (label, count) in iter {
            hist.add(label, count);
        }
        hist
    }
}

/// Histograms of all candidates, indexed by node id. Placeholders have none.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Overlaps {
    histograms: Vec<Option<OverlapHistogram>>,
}

impl Overlaps {
    /// Wraps precomputed histograms, one slot per node.
    pub fn from_histograms(histograms: Vec<Option<OverlapHistogram>>) -> Self {
        Self { histograms }
    }

    pub fn get(&self, n: NodeId) -> Option<&OverlapHistogram> {
        self.histograms.get(n.index()).and_then(Option::as_ref)
    }

    /// Voxels of `n` labeled `label`; zero when either is missing.
    pub fn count(&self, n: NodeId, label: GtLabel) -> u64 {
        self.get(n).map_or(0, |h| h.count(label))
    }

    pub fn len(&self) -> usize {
        self.histograms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.histograms.is_empty()
    }

    /// Candidates that received a histogram.
    pub fn candidates(&self) -> usize {
        self.histograms.iter().filter(|h| h.is_some()).count()
    }

    /// Sum of all histogram entries.
    pub fn total_voxels(&self) -> u64 {
        self.histograms.iter().flatten().map(OverlapHistogram::total).sum()
    }
}

/// Builds the overlap histogram of every assignable candidate.
pub fn compute_overlaps(
    crag: &Crag,
    volumes: &CragVolumes,
    ground_truth: &LabelVolume,
) -> Result<Overlaps, BestEffortError> {
    if !ground_truth.is_well_formed() {
        return Err(BestEffortError::MalformedGroundTruth);
    }
    if !ground_truth.has_valid_geometry() {
        return Err(BestEffortError::InvalidGroundTruthGeometry {
            offset: ground_truth.offset.into(),
            resolution: ground_truth.resolution.into(),
        });
    }

    let histogram_of = |n: NodeId| -> Result<Option<OverlapHistogram>, BestEffortError> {
        if !crag.node_kind(n).has_overlap() {
            return Ok(None);
        }
        let region = volumes.require(n)?;
        region_histogram(n, region, ground_truth).map(Some)
    };

    #[cfg(feature = "parallel")]
    let histograms = {
        use rayon::prelude::*;
        let nodes: Vec<NodeId> = crag.nodes().collect();
        nodes
            .par_iter()
            .map(|&n| histogram_of(n))
            .collect::<Result<Vec<_>, _>>()?
    };
    #[cfg(not(feature = "parallel"))]
    let histograms = crag
        .nodes()
        .map(histogram_of)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Overlaps { histograms })
}

/// Voxel position of the region's origin inside the ground-truth grid.
///
/// `None` when the rounded position is not representable as `i64`.
pub fn voxel_offset(region: &RegionVolume, ground_truth: &LabelVolume) -> Option<[i64; 3]> {
    let off = (region.offset - ground_truth.offset).component_div(&ground_truth.resolution);
    let mut out = [0i64; 3];
    for (slot, v) in out.iter_mut().zip(off.iter()) {
        let v = v.round();
        if !(I64_MIN_F..I64_MAX_F).contains(&v) {
            return None;
        }
        *slot = v as i64;
    }
    Some(out)
}

fn region_histogram(
    node: NodeId,
    region: &RegionVolume,
    ground_truth: &LabelVolume,
) -> Result<OverlapHistogram, BestEffortError> {
    if !region.is_well_formed() {
        return Err(BestEffortError::MalformedVolume(node));
    }
    if !region.has_finite_geometry() {
        return Err(BestEffortError::InvalidRegionGeometry {
            node,
            offset: region.offset.into(),
            resolution: region.resolution.into(),
        });
    }
    let scale = ground_truth.resolution.amax().max(f64::MIN_POSITIVE);
    if (region.resolution - ground_truth.resolution).amax() > RESOLUTION_REL_TOL * scale {
        return Err(BestEffortError::ResolutionMismatch {
            node,
            region: region.resolution.into(),
            ground_truth: ground_truth.resolution.into(),
        });
    }

    // An empty mask reads nothing, so an unrepresentable origin only fails
    // once a voxel is looked up.
    let origin = voxel_offset(region, ground_truth);
    let mut hist = OverlapHistogram::new();
    // Neighbouring voxels usually share a label; flush runs instead of
    // touching the map per voxel.
    let mut run: Option<(GtLabel, u64)> = None;
    for local in region.voxels() {
        let Some(mut position) = origin else {
            let off = (region.offset - ground_truth.offset).component_div(&ground_truth.resolution);
            return Err(BestEffortError::GroundTruthOutOfBounds {
                node,
                // Saturating casts.
                position: [off.x.round() as i64, off.y.round() as i64, off.z.round() as i64],
            });
        };
        for (p, l) in position.iter_mut().zip(local) {
            *p = p.saturating_add(i64::try_from(l).unwrap_or(i64::MAX));
        }
        let label = ground_truth
            .get_checked(position)
            .ok_or(BestEffortError::GroundTruthOutOfBounds { node, position })?;
        run = match run {
            Some((l, c)) if l == label => Some((l, c + 1)),
            Some((l, c)) => {
                hist.add(l, c);
                Some((label, 1))
            }
            None => Some((label, 1)),
        };
    }
    if let Some((l, c)) = run {
        hist.add(l, c);
    }
    Ok(hist)
}
