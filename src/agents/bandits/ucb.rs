//! Upper confidence bound bandit agent.
use super::ValueTable;
use crate::agents::{Actor, Agent, AgentBuilder, BuildAgentError, Step};
use crate::envs::EnvStructure;
use crate::logging::Logger;
use crate::spaces::{FiniteSpace, IndexSpace, Space};
use ndarray::Array1;
use ndarray_stats::QuantileExt;
use std::fmt;

/// Small offset keeping the confidence bound finite at zero pull counts.
const COUNT_OFFSET: f64 = 1e-6;

/// Configuration for a [`UcbAgent`].
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UcbAgentConfig {
    /// Scale factor on the confidence interval; controls the exploration rate.
    ///
    /// Larger values weight the uncertainty bonus more heavily relative to
    /// the value estimates. The default of 0.2 explores lightly once every
    /// action has a few pulls.
    #[serde(alias = "c")]
    pub exploration_rate: f64,
    /// Step size of the value update.
    #[serde(alias = "lr")]
    pub learning_rate: f64,
}

impl UcbAgentConfig {
    pub const fn new(exploration_rate: f64, learning_rate: f64) -> Self {
        Self {
            exploration_rate,
            learning_rate,
        }
    }
}

impl Default for UcbAgentConfig {
    fn default() -> Self {
        Self::new(0.2, 0.1)
    }
}

impl<OS: Space> AgentBuilder<OS, IndexSpace> for UcbAgentConfig {
    type Agent = UcbAgent;

    fn build(
        &self,
        structure: EnvStructure<OS, IndexSpace>,
        _seed: u64,
    ) -> Result<UcbAgent, BuildAgentError> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(BuildAgentError::InvalidParameter {
                name: "learning_rate",
                reason: "must be positive",
            });
        }
        if !(self.exploration_rate.is_finite() && self.exploration_rate > 0.0) {
            return Err(BuildAgentError::InvalidParameter {
                name: "exploration_rate",
                reason: "must be positive",
            });
        }
        Ok(UcbAgent::new(
            structure.action_space.size(),
            self.exploration_rate,
            self.learning_rate,
        ))
    }
}

/// An agent that adds an uncertainty bonus to each value estimate.
///
/// Action `i` scores `value[i] + c * sqrt(ln(t) / n_i)` where `t` counts the
/// selections made so far and `n_i` the selections of action `i`; the bonus
/// shrinks as an action accumulates pulls. Any action that has never been
/// pulled is selected outright before the formula applies, so `ln` is never
/// evaluated at zero.
///
/// The step counter advances by exactly one per [`act`](Actor::act) call and
/// only the chosen action's pull count is incremented, after the selection is
/// made.
#[derive(Debug, Clone, PartialEq)]
pub struct UcbAgent {
    /// Scale factor on the confidence interval; controls the exploration rate.
    pub exploration_rate: f64,

    values: ValueTable,
    /// The number of times each action has been selected.
    action_counts: Array1<u64>,
    /// The total number of selections made.
    step_count: u64,
}

impl UcbAgent {
    pub fn new(num_actions: usize, exploration_rate: f64, learning_rate: f64) -> Self {
        Self {
            exploration_rate,
            values: ValueTable::new(num_actions, 0.0, learning_rate),
            action_counts: Array1::zeros(num_actions),
            step_count: 0,
        }
    }

    /// The current value estimates, indexed by action.
    pub const fn values(&self) -> &Array1<f64> {
        self.values.values()
    }

    /// The number of times each action has been selected.
    pub const fn action_counts(&self) -> &Array1<u64> {
        &self.action_counts
    }

    /// The total number of selections made.
    pub const fn step_count(&self) -> u64 {
        self.step_count
    }

    /// The uncertainty bonus for an action pulled `num_pulls` times.
    ///
    /// Strictly decreasing in `num_pulls` for a fixed step count.
    fn exploration_bonus(&self, num_pulls: u64) -> f64 {
        let ln_t = (self.step_count as f64).ln();
        self.exploration_rate * (ln_t / (num_pulls as f64 + COUNT_OFFSET)).sqrt()
    }
}

impl fmt::Display for UcbAgent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "UcbAgent(c={}, lr={})",
            self.exploration_rate,
            self.values.learning_rate()
        )
    }
}

impl<O> Actor<O, usize> for UcbAgent {
    fn act(&mut self, _observation: &O) -> usize {
        let action = match self.action_counts.iter().position(|&count| count == 0) {
            // Unpulled actions are selected before the bound applies.
            Some(action) => action,
            None => {
                let scores: Array1<f64> = self
                    .values
                    .values()
                    .iter()
                    .zip(self.action_counts.iter())
                    .map(|(&value, &count)| value + self.exploration_bonus(count))
                    .collect();
                scores.argmax().expect("empty action space")
            }
        };
        self.step_count += 1;
        self.action_counts[action] += 1;
        action
    }
}

impl<O> Agent<O, usize> for UcbAgent {
    fn update(&mut self, step: Step<O, usize>, _logger: &mut dyn Logger) {
        self.values.update(step.action, step.reward);
    }
}
