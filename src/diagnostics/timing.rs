use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

/// Timed stages of the best-effort pipeline, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Overlap,
    Assignment,
    Selection,
    Linking,
}

impl PipelineStage {
    pub fn as_str(self) -> &'static str {
        match self {
            PipelineStage::Overlap => "overlap",
            PipelineStage::Assignment => "assignment",
            PipelineStage::Selection => "selection",
            PipelineStage::Linking => "linking",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub stage: PipelineStage,
    pub elapsed_ms: f64,
}

/// Per-stage timings of one run.
///
/// `stages` stays in pipeline order however the entries are recorded, so a
/// run that starts from precomputed overlaps simply has no `Overlap` entry.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    /// Adds the time of `stage`, replacing an earlier entry for it.
    pub fn record(&mut self, stage: PipelineStage, elapsed_ms: f64) {
        let timing = StageTiming { stage, elapsed_ms };
        match self.stages.binary_search_by(|t| t.stage.cmp(&stage)) {
            Ok(i) => self.stages[i] = timing,
            Err(i) => self.stages.insert(i, timing),
        }
    }

    /// Records the time elapsed since `start` and returns it in milliseconds.
    pub fn record_since(&mut self, stage: PipelineStage, start: Instant) -> f64 {
        let ms = elapsed_ms(start);
        self.record(stage, ms);
        ms
    }

    pub fn get(&self, stage: PipelineStage) -> Option<f64> {
        self.stages
            .iter()
            .find(|t| t.stage == stage)
            .map(|t| t.elapsed_ms)
    }
}

#[inline]
pub fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
