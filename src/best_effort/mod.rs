//! Best-effort solution of a candidate region adjacency graph.
//!
//! Overview
//! - Counts, for every candidate with a volume, how many of its voxels fall
//!   on each ground-truth label.
//! - Assigns every candidate the label with the largest weighted overlap;
//!   background voxels are scaled by `background_overlap_weight`.
//! - Walks the subset forest top-down and selects candidates using one of two
//!   [`SelectionStrategy`] rules.
//! - Resolves cross-section links on the selection: nested candidates are
//!   dropped, edges inside one object are selected, competing links are
//!   repaired and missing directions fall back to their no-link edges.
//!
//! Modules
//! - [`params`] – parameters and the selection strategy switch.
//! - `pipeline` – the [`BestEffort`] driver and its report.
//!
//! The result is a [`Selection`](crate::Selection): the closest
//! approximation of the ground truth the graph can express, used as a
//! training target.

pub mod params;
mod pipeline;

pub use params::{BestEffortParams, SelectionStrategy};
pub use pipeline::BestEffort;
