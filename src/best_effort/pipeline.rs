//! Pipeline driving the best-effort computation end-to-end.
//!
//! Typical usage:
//! ```no_run
//! use crag_best_effort::{BestEffort, BestEffortParams, Crag, CragVolumes, LabelVolume};
//!
//! # fn example(crag: &Crag, volumes: &CragVolumes, gt: &LabelVolume) {
//! let best_effort = BestEffort::new(BestEffortParams::default());
//! let report = best_effort.compute(crag, volumes, gt).unwrap();
//! println!("selected {} candidates", report.selection.num_selected_nodes());
//! # }
//! ```
use super::params::BestEffortParams;
use crate::assignment::assign_labels;
use crate::crag::Crag;
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{
    AssignmentStage, BestEffortReport, BestEffortTrace, EventSink, InputDescriptor, LogSink,
    OverlapStage, PipelineStage, SelectionStage, TimingBreakdown,
};
use crate::error::BestEffortError;
use crate::linking::{LinkContext, LinkResolver};
use crate::overlap::{compute_overlaps, Overlaps};
use crate::selector::select_candidates;
use crate::volume::{CragVolumes, LabelVolume};
use log::debug;
use std::time::Instant;

/// Computes the best-effort selection of a graph against a ground-truth
/// label volume.
#[derive(Clone, Debug, Default)]
pub struct BestEffort {
    params: BestEffortParams,
}

impl BestEffort {
    pub fn new(params: BestEffortParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &BestEffortParams {
        &self.params
    }

    /// Run every stage, forwarding decisions to the `log` facade.
    pub fn compute(
        &self,
        crag: &Crag,
        volumes: &CragVolumes,
        ground_truth: &LabelVolume,
    ) -> Result<BestEffortReport, BestEffortError> {
        self.compute_with_sink(crag, volumes, ground_truth, &mut LogSink)
    }

    /// Run every stage, recording each decision into `sink`.
    pub fn compute_with_sink(
        &self,
        crag: &Crag,
        volumes: &CragVolumes,
        ground_truth: &LabelVolume,
        sink: &mut dyn EventSink,
    ) -> Result<BestEffortReport, BestEffortError> {
        debug!(
            "BestEffort::compute start nodes={} edges={} strategy={:?} full={}",
            crag.num_nodes(),
            crag.num_edges(),
            self.params.strategy,
            self.params.full_best_effort
        );
        self.check_inputs(crag, volumes)?;

        let start = Instant::now();
        let overlaps = compute_overlaps(crag, volumes, ground_truth)?;
        let overlap_stage = OverlapStage {
            elapsed_ms: elapsed_ms(start),
            candidates: overlaps.candidates(),
            voxels: overlaps.total_voxels(),
        };
        debug!(
            "BestEffort::compute overlaps candidates={} voxels={} ms={:.3}",
            overlap_stage.candidates, overlap_stage.voxels, overlap_stage.elapsed_ms
        );

        let mut report = self.solve(crag, volumes, &overlaps, sink)?;
        let timings = &mut report.trace.timings;
        timings.record(PipelineStage::Overlap, overlap_stage.elapsed_ms);
        timings.total_ms += overlap_stage.elapsed_ms;
        report.trace.overlap = Some(overlap_stage);
        Ok(report)
    }

    /// Run assignment, selection and link resolution on precomputed overlaps.
    ///
    /// `volumes` is still needed for the z-centres of linked candidates.
    pub fn solve_with_overlaps(
        &self,
        crag: &Crag,
        volumes: &CragVolumes,
        overlaps: &Overlaps,
        sink: &mut dyn EventSink,
    ) -> Result<BestEffortReport, BestEffortError> {
        self.check_inputs(crag, volumes)?;
        self.solve(crag, volumes, overlaps, sink)
    }

    fn check_inputs(&self, crag: &Crag, volumes: &CragVolumes) -> Result<(), BestEffortError> {
        self.params.validate()?;
        if volumes.len() != crag.num_nodes() {
            return Err(BestEffortError::VolumeCount {
                volumes: volumes.len(),
                nodes: crag.num_nodes(),
            });
        }
        Ok(())
    }

    fn solve(
        &self,
        crag: &Crag,
        volumes: &CragVolumes,
        overlaps: &Overlaps,
        sink: &mut dyn EventSink,
    ) -> Result<BestEffortReport, BestEffortError> {
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();
        let weight = self.params.background_overlap_weight;

        let start = Instant::now();
        let assignments = assign_labels(crag, overlaps, weight);
        let assignment = AssignmentStage {
            elapsed_ms: timings.record_since(PipelineStage::Assignment, start),
            background_weight: weight,
            foreground: assignments.foreground(),
            background: assignments.background(),
        };
        debug!(
            "BestEffort::compute assignment foreground={} background={} weight={}",
            assignment.foreground, assignment.background, weight
        );

        let start = Instant::now();
        let mut selection = select_candidates(crag, overlaps, &assignments, &self.params, sink);
        let selection_stage = SelectionStage {
            elapsed_ms: timings.record_since(PipelineStage::Selection, start),
            strategy: self.params.strategy,
            full_best_effort: self.params.full_best_effort,
            selected: selection.num_selected_nodes(),
        };
        debug!(
            "BestEffort::compute selection strategy={:?} selected={}",
            selection_stage.strategy, selection_stage.selected
        );

        let ctx = LinkContext {
            crag,
            volumes,
            overlaps,
            assignments: &assignments,
        };
        let linking = LinkResolver::new(ctx).resolve(&mut selection, sink)?;
        timings.record(PipelineStage::Linking, linking.elapsed_ms);
        if !linking.link_check.is_ok() {
            debug!(
                "BestEffort::compute link check failed missing={} partial={} excess={}",
                linking.link_check.missing.len(),
                linking.link_check.partial.len(),
                linking.link_check.excess.len()
            );
        }

        timings.total_ms = elapsed_ms(total_start);
        debug!(
            "BestEffort::compute done nodes={} edges={} ms={:.3}",
            selection.num_selected_nodes(),
            selection.num_selected_edges(),
            timings.total_ms
        );

        Ok(BestEffortReport {
            selection,
            trace: BestEffortTrace {
                input: InputDescriptor::from_crag(crag),
                timings,
                overlap: None,
                assignment,
                selection: selection_stage,
                linking,
            },
        })
    }
}
