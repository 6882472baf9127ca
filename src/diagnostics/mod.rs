//! Diagnostics data model exposed by the best-effort pipeline.
//!
//! Two channels are kept apart:
//! - [`BestEffortReport`] is returned by
//!   [`BestEffort::compute`](crate::BestEffort::compute) and bundles the final
//!   [`Selection`](crate::Selection) with a [`BestEffortTrace`] holding counts
//!   and timings for every stage.
//! - Individual decisions (a candidate selected, a conflicting link dropped,
//!   a no-link fallback taken) are emitted as [`BestEffortEvent`]s into an
//!   [`EventSink`] supplied by the caller. [`LogSink`] forwards them to the
//!   `log` facade; a `Vec<BestEffortEvent>` collects them for inspection.

pub mod events;
pub mod report;
pub mod stages;
pub mod timing;

pub use events::{BestEffortEvent, EventSink, LogSink, NullSink};
pub use report::{BestEffortReport, BestEffortTrace, InputDescriptor};
pub use stages::{AssignmentStage, LinkingStage, OverlapStage, SelectionStage};
pub use timing::{PipelineStage, StageTiming, TimingBreakdown};
