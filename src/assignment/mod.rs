//! Reduction of overlap histograms to one ground-truth label per candidate.
//!
//! Each histogram entry is scored by its voxel count, with background voxels
//! scaled by `background_overlap_weight`. Weights below 1 let a candidate be
//! assigned to an object even when most of it lies on background. The label
//! with the strictly largest score wins; labels are scanned in ascending
//! order, so ties go to the lowest label id. Empty histograms (and histograms
//! whose every score is zero) map to background.

use crate::crag::Crag;
use crate::overlap::{OverlapHistogram, Overlaps};
use crate::types::{GtLabel, NodeId};
use serde::Serialize;

/// Score of `count` voxels of `label` under the background weight.
#[inline]
pub fn weighted_score(label: GtLabel, count: u64, background_weight: f64) -> f64 {
    let c = count as f64;
    if label.is_background() {
        c * background_weight
    } else {
        c
    }
}

/// Sum of the weighted scores of all entries.
pub fn weighted_total(hist: &OverlapHistogram, background_weight: f64) -> f64 {
    hist.iter()
        .map(|(label, count)| weighted_score(label, count, background_weight))
        .sum()
}

/// Weighted argmax of a histogram, lowest label on ties.
pub fn best_label(hist: &OverlapHistogram, background_weight: f64) -> GtLabel {
    let mut best = GtLabel::BACKGROUND;
    let mut best_score = 0.0f64;
    for (label, count) in hist.iter() {
        let score = weighted_score(label, count, background_weight);
        if score > best_score {
            best_score = score;
            best = label;
        }
    }
    best
}

/// One label per candidate with a histogram.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Assignments {
    labels: Vec<Option<GtLabel>>,
}

impl Assignments {
    pub fn from_labels(labels: Vec<Option<GtLabel>>) -> Self {
        Self { labels }
    }

    pub fn get(&self, n: NodeId) -> Option<GtLabel> {
        self.labels.get(n.index()).copied().flatten()
    }

    /// Assigned label, background for candidates excluded from assignment.
    #[inline]
    pub fn label(&self, n: NodeId) -> GtLabel {
        self.get(n).unwrap_or(GtLabel::BACKGROUND)
    }

    pub fn foreground(&self) -> usize {
        self.labels
            .iter()
            .flatten()
            .filter(|l| !l.is_background())
            .count()
    }

    pub fn background(&self) -> usize {
        self.labels
            .iter()
            .flatten()
            .filter(|l| l.is_background())
            .count()
    }
}

pub fn assign_labels(crag: &Crag, overlaps: &Overlaps, background_weight: f64) -> Assignments {
    let labels = crag
        .nodes()
        .map(|n| overlaps.get(n).map(|h| best_label(h, background_weight)))
        .collect();
    Assignments { labels }
}
