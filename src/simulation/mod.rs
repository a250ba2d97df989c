//! Simulating agent-environment interaction
pub mod hooks;
mod serial;

pub use serial::{run_agent, ExperimentRunner};

use serde::Serialize;

/// One row of an experiment's result log.
///
/// Records are appended in chronological execution order and never modified.
/// The field order is the stable column order of the exported log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepRecord {
    /// Index of the episode this step belongs to.
    pub episode: u64,
    /// Index of the step within its episode.
    pub step: u64,
    /// The reward received.
    pub reward: f64,
    /// The action taken.
    pub action: usize,
    /// Label of the agent that took the action.
    pub agent_label: String,
}
