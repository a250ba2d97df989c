//! Optimistic-initial-value greedy bandit agent.
use super::ValueTable;
use crate::agents::{Actor, Agent, AgentBuilder, BuildAgentError, Step};
use crate::envs::EnvStructure;
use crate::logging::Logger;
use crate::spaces::{FiniteSpace, IndexSpace, Space};
use ndarray::Array1;
use std::fmt;

/// Configuration for an [`OptimisticGreedyAgent`].
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OptimisticGreedyAgentConfig {
    /// Initial value estimate for every action.
    #[serde(alias = "qi")]
    pub initial_value: f64,
    /// Step size of the value update.
    #[serde(alias = "lr")]
    pub learning_rate: f64,
}

impl OptimisticGreedyAgentConfig {
    pub const fn new(initial_value: f64, learning_rate: f64) -> Self {
        Self {
            initial_value,
            learning_rate,
        }
    }
}

impl Default for OptimisticGreedyAgentConfig {
    fn default() -> Self {
        Self::new(5.0, 0.1)
    }
}

impl<OS: Space> AgentBuilder<OS, IndexSpace> for OptimisticGreedyAgentConfig {
    type Agent = OptimisticGreedyAgent;

    fn build(
        &self,
        structure: EnvStructure<OS, IndexSpace>,
        _seed: u64,
    ) -> Result<OptimisticGreedyAgent, BuildAgentError> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(BuildAgentError::InvalidParameter {
                name: "learning_rate",
                reason: "must be positive",
            });
        }
        if !self.initial_value.is_finite() {
            return Err(BuildAgentError::InvalidParameter {
                name: "initial_value",
                reason: "must be finite",
            });
        }
        Ok(OptimisticGreedyAgent::new(
            structure.action_space.size(),
            self.initial_value,
            self.learning_rate,
        ))
    }
}

/// A greedy agent whose value estimates start at an optimistic constant.
///
/// Every estimate is initialized to `initial_value`, one entry per action of
/// the action space. An estimate drops toward the observed rewards once its
/// action is tried, so untried actions look best and the agent sweeps through
/// all of them early on. Selection itself is pure greedy.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimisticGreedyAgent {
    values: ValueTable,
}

impl OptimisticGreedyAgent {
    pub fn new(num_actions: usize, initial_value: f64, learning_rate: f64) -> Self {
        Self {
            values: ValueTable::new(num_actions, initial_value, learning_rate),
        }
    }

    /// The current value estimates, indexed by action.
    pub const fn values(&self) -> &Array1<f64> {
        self.values.values()
    }
}

impl fmt::Display for OptimisticGreedyAgent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "OptimisticGreedyAgent(q0={}, lr={})",
            self.values()[0],
            self.values.learning_rate()
        )
    }
}

impl<O> Actor<O, usize> for OptimisticGreedyAgent {
    fn act(&mut self, _observation: &O) -> usize {
        self.values.argmax()
    }
}

impl<O> Agent<O, usize> for OptimisticGreedyAgent {
    fn update(&mut self, step: Step<O, usize>, _logger: &mut dyn Logger) {
        self.values.update(step.action, step.reward);
    }
}
