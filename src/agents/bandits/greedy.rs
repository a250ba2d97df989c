//! Greedy bandit agent.
use super::ValueTable;
use crate::agents::{Actor, Agent, AgentBuilder, BuildAgentError, Step};
use crate::envs::EnvStructure;
use crate::logging::Logger;
use crate::spaces::{FiniteSpace, IndexSpace, Space};
use ndarray::Array1;
use std::fmt;

/// Configuration for a [`GreedyAgent`].
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GreedyAgentConfig {
    /// Step size of the value update.
    #[serde(alias = "lr")]
    pub learning_rate: f64,
}

impl GreedyAgentConfig {
    pub const fn new(learning_rate: f64) -> Self {
        Self { learning_rate }
    }
}

impl Default for GreedyAgentConfig {
    fn default() -> Self {
        Self::new(0.1)
    }
}

impl<OS: Space> AgentBuilder<OS, IndexSpace> for GreedyAgentConfig {
    type Agent = GreedyAgent;

    fn build(
        &self,
        structure: EnvStructure<OS, IndexSpace>,
        _seed: u64,
    ) -> Result<GreedyAgent, BuildAgentError> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(BuildAgentError::InvalidParameter {
                name: "learning_rate",
                reason: "must be positive",
            });
        }
        Ok(GreedyAgent::new(
            structure.action_space.size(),
            self.learning_rate,
        ))
    }
}

/// An agent that always selects the action with the largest value estimate.
///
/// Estimates start at zero, so the agent never deliberately explores:
/// it only leaves an action when that action's own estimate drops below
/// another one already tried.
#[derive(Debug, Clone, PartialEq)]
pub struct GreedyAgent {
    values: ValueTable,
}

impl GreedyAgent {
    pub fn new(num_actions: usize, learning_rate: f64) -> Self {
        Self {
            values: ValueTable::new(num_actions, 0.0, learning_rate),
        }
    }

    /// The current value estimates, indexed by action.
    pub const fn values(&self) -> &Array1<f64> {
        self.values.values()
    }
}

impl fmt::Display for GreedyAgent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "GreedyAgent(lr={})", self.values.learning_rate())
    }
}

impl<O> Actor<O, usize> for GreedyAgent {
    fn act(&mut self, _observation: &O) -> usize {
        self.values.argmax()
    }
}

impl<O> Agent<O, usize> for GreedyAgent {
    fn update(&mut self, step: Step<O, usize>, _logger: &mut dyn Logger) {
        self.values.update(step.action, step.reward);
    }
}

#[cfg(test)]
mod greedy_agent {
    use super::super::super::testing;
    use super::*;
    use crate::envs::{DeterministicBandit, StatefulEnvironment};
    use crate::simulation::hooks::{IndexedActionCounter, StepLimit};
    use crate::simulation::run_agent;

    #[test]
    fn build_table_length_matches_action_count() {
        let config = GreedyAgentConfig::default();
        let agent: GreedyAgent = config
            .build(testing::index_structure(6), 0)
            .unwrap();
        assert_eq!(agent.values().len(), 6);
    }

    #[test]
    fn build_rejects_non_positive_learning_rate() {
        let config = GreedyAgentConfig::new(0.0);
        let result: Result<GreedyAgent, _> = config.build(testing::index_structure(3), 0);
        assert!(result.is_err());
    }

    #[test]
    fn selects_unique_maximum_repeatedly() {
        let mut agent = GreedyAgent::new(5, 1.0);
        agent.update(testing::bandit_step(3, 2.0), &mut ());
        for _ in 0..10 {
            assert_eq!(agent.act(&()), 3);
        }
    }

    #[test]
    fn breaks_ties_by_first_index() {
        let mut agent = GreedyAgent::new(4, 0.1);
        assert_eq!(agent.act(&()), 0);
        agent.update(testing::bandit_step(1, 1.0), &mut ());
        agent.update(testing::bandit_step(2, 1.0), &mut ());
        assert_eq!(agent.act(&()), 1);
    }

    #[test]
    fn exploits_first_rewarding_arm() {
        // With zero-initialized estimates and positive rewards the greedy
        // agent commits to arm 0 and never explores.
        let mut env = DeterministicBandit::from_values(vec![1.0, 2.0]);
        let mut agent = GreedyAgent::new(2, 0.1);
        let mut hooks = (
            IndexedActionCounter::new(env.structure().action_space),
            StepLimit::new(100),
        );
        run_agent(&mut env, &mut agent, &mut (), &mut hooks).unwrap();
        assert_eq!(hooks.0.counts, vec![100, 0]);
    }
}
