//! Multi-armed bandit agents.
//!
//! These agents share a single per-action value estimate updated with a
//! constant step size; they differ only in how an action is selected.
mod epsilon_greedy;
mod greedy;
mod optimistic;
mod ucb;

pub use epsilon_greedy::{EpsilonGreedyAgent, EpsilonGreedyAgentConfig};
pub use greedy::{GreedyAgent, GreedyAgentConfig};
pub use optimistic::{OptimisticGreedyAgent, OptimisticGreedyAgentConfig};
pub use ucb::{UcbAgent, UcbAgentConfig};

use ndarray::Array1;
use ndarray_stats::QuantileExt;

/// Per-action value estimates with a constant-step incremental update.
///
/// `update` moves the chosen action's estimate toward the observed reward by a
/// fixed fraction `learning_rate`: an exponential moving average. Unlike a
/// sample-average update the estimates never fully converge and stay
/// responsive to recent rewards.
///
/// The table length is fixed at construction and never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueTable {
    values: Array1<f64>,
    learning_rate: f64,
}

impl ValueTable {
    /// Create a table of `num_actions` estimates, all set to `initial_value`.
    pub fn new(num_actions: usize, initial_value: f64, learning_rate: f64) -> Self {
        Self {
            values: Array1::from_elem(num_actions, initial_value),
            learning_rate,
        }
    }

    /// Move the estimate for `action` toward `reward` by the learning rate.
    pub fn update(&mut self, action: usize, reward: f64) {
        let value = &mut self.values[action];
        *value += self.learning_rate * (reward - *value);
    }

    /// The index of the largest estimate.
    ///
    /// Ties are broken in favour of the smallest index.
    pub fn argmax(&self) -> usize {
        self.values.argmax().expect("empty or incomparable values")
    }

    /// The current estimates, indexed by action.
    pub const fn values(&self) -> &Array1<f64> {
        &self.values
    }

    /// The number of actions.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub const fn learning_rate(&self) -> f64 {
        self.learning_rate
    }
}
