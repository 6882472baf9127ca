//! JSON configuration of the command-line tools.

pub mod best_effort;

pub use best_effort::{load_config, OutputConfig, RuntimeConfig};
