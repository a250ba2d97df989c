//! Epsilon-greedy bandit agent.
use super::ValueTable;
use crate::agents::{Actor, Agent, AgentBuilder, BuildAgentError, Step};
use crate::envs::EnvStructure;
use crate::logging::Logger;
use crate::spaces::{IndexSpace, SampleSpace, Space};
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Configuration for an [`EpsilonGreedyAgent`].
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EpsilonGreedyAgentConfig {
    /// Probability of taking a uniformly random action instead of the greedy one.
    pub epsilon: f64,
    /// Step size of the value update.
    #[serde(alias = "lr")]
    pub learning_rate: f64,
}

impl EpsilonGreedyAgentConfig {
    pub const fn new(epsilon: f64, learning_rate: f64) -> Self {
        Self {
            epsilon,
            learning_rate,
        }
    }
}

impl Default for EpsilonGreedyAgentConfig {
    fn default() -> Self {
        Self::new(0.1, 0.1)
    }
}

impl<OS: Space> AgentBuilder<OS, IndexSpace> for EpsilonGreedyAgentConfig {
    type Agent = EpsilonGreedyAgent;

    fn build(
        &self,
        structure: EnvStructure<OS, IndexSpace>,
        seed: u64,
    ) -> Result<EpsilonGreedyAgent, BuildAgentError> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(BuildAgentError::InvalidParameter {
                name: "learning_rate",
                reason: "must be positive",
            });
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(BuildAgentError::InvalidParameter {
                name: "epsilon",
                reason: "must be in [0, 1]",
            });
        }
        Ok(EpsilonGreedyAgent::new(
            structure.action_space,
            self.epsilon,
            self.learning_rate,
            seed,
        ))
    }
}

/// An agent that follows the greedy action except for occasional random exploration.
///
/// With probability `epsilon` the action is drawn uniformly from the action
/// space; otherwise the action with the largest value estimate is chosen.
/// Both draws come from a single seeded generator so a run is reproducible.
#[derive(Debug, Clone)]
pub struct EpsilonGreedyAgent {
    pub epsilon: f64,
    action_space: IndexSpace,
    values: ValueTable,
    rng: StdRng,
}

impl EpsilonGreedyAgent {
    pub fn new(action_space: IndexSpace, epsilon: f64, learning_rate: f64, seed: u64) -> Self {
        let num_actions = action_space.size;
        Self {
            epsilon,
            action_space,
            values: ValueTable::new(num_actions, 0.0, learning_rate),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The current value estimates, indexed by action.
    pub const fn values(&self) -> &Array1<f64> {
        self.values.values()
    }
}

impl fmt::Display for EpsilonGreedyAgent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "EpsilonGreedyAgent(eps={}, lr={})",
            self.epsilon,
            self.values.learning_rate()
        )
    }
}

impl<O> Actor<O, usize> for EpsilonGreedyAgent {
    fn act(&mut self, _observation: &O) -> usize {
        if self.rng.gen::<f64>() < self.epsilon {
            self.action_space.sample(&mut self.rng)
        } else {
            self.values.argmax()
        }
    }
}

impl<O> Agent<O, usize> for EpsilonGreedyAgent {
    fn update(&mut self, step: Step<O, usize>, _logger: &mut dyn Logger) {
        self.values.update(step.action, step.reward);
    }
}
