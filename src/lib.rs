#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod best_effort;
pub mod crag;
pub mod diagnostics;
pub mod error;
pub mod selection;
pub mod types;
pub mod volume;

// Individual stages – public so tools and tests can drive them one by one.
pub mod assignment;
pub mod linking;
pub mod overlap;
pub mod selector;

// Tool support.
pub mod config;
pub mod io;

// --- High-level re-exports -------------------------------------------------

// Main entry points: pipeline + parameters.
pub use crate::best_effort::{BestEffort, BestEffortParams, SelectionStrategy};
pub use crate::crag::{Crag, CragBuilder, CragDescription};
pub use crate::error::{BestEffortError, CragError};
pub use crate::selection::Selection;
pub use crate::volume::{CragVolumes, LabelVolume, RegionVolume};

// Results and diagnostics returned by the pipeline.
pub use crate::diagnostics::{BestEffortEvent, BestEffortReport, BestEffortTrace, EventSink};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use crag_best_effort::prelude::*;
/// use nalgebra::Vector3;
///
/// # fn main() {
/// let mut builder = CragBuilder::new();
/// let region = builder.add_node(NodeKind::Region);
/// let crag = builder.build().unwrap();
///
/// let unit = Vector3::repeat(1.0);
/// let mut volumes = CragVolumes::new(crag.num_nodes());
/// volumes.insert(region, RegionVolume::from_fn(Vector3::zeros(), unit, [2, 2, 1], |_, _, _| true));
/// let gt = LabelVolume::from_fn(Vector3::zeros(), unit, [2, 2, 1], |_, _, _| GtLabel(1));
///
/// let report = BestEffort::default().compute(&crag, &volumes, &gt).unwrap();
/// println!("selected={}", report.selection.num_selected_nodes());
/// # }
/// ```
pub mod prelude {
    pub use crate::types::{Direction, EdgeKind, GtLabel, NodeId, NodeKind};
    pub use crate::{
        BestEffort, BestEffortParams, Crag, CragBuilder, CragVolumes, LabelVolume, RegionVolume,
        Selection, SelectionStrategy,
    };
}

// --- Stage-level diagnostics API (for tools & advanced users) --------------

pub mod stages {
    // Stage runners.
    pub use crate::assignment::{assign_labels, Assignments};
    pub use crate::linking::{LinkContext, LinkResolver};
    pub use crate::overlap::{compute_overlaps, OverlapHistogram, Overlaps};
    pub use crate::selector::select_candidates;

    // Structured diagnostics types.
    pub use crate::diagnostics::{
        AssignmentStage, InputDescriptor, LinkingStage, LogSink, NullSink, OverlapStage,
        PipelineStage, SelectionStage, StageTiming, TimingBreakdown,
    };
    pub use crate::selection::{is_antichain, LinkCheck};
}
