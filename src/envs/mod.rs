//! Reinforcement learning environments
mod bandits;
#[cfg(test)]
pub mod testing;

pub use bandits::{DeterministicBandit, GaussianBandit, GaussianBanditConfig};

use crate::spaces::Space;
use thiserror::Error;

/// The external structure of a reinforcement learning environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvStructure<OS, AS> {
    /// Space containing all possible observations.
    pub observation_space: OS,
    /// Space containing all possible actions.
    /// Every element of this space must be a valid action.
    pub action_space: AS,
    /// A lower and upper bound on possible reward values.
    pub reward_range: (f64, f64),
}

/// A reinforcement learning environment with internal state.
pub trait StatefulEnvironment {
    type ObservationSpace: Space;
    type ActionSpace: Space;

    /// The structure of this environment.
    fn structure(&self) -> EnvStructure<Self::ObservationSpace, Self::ActionSpace>;

    /// Reset the environment to the start of a new episode.
    ///
    /// Must be called before the first step of each episode.
    ///
    /// # Returns
    /// An observation of the initial state.
    fn reset(&mut self) -> <Self::ObservationSpace as Space>::Element;

    /// Take a step in the environment.
    ///
    /// # Returns
    /// * `observation` - An observation of the resulting state.
    /// * `reward` - The reward value for this transition.
    /// * `episode_done` - Whether this step ends the episode.
    ///
    /// # Errors
    /// [`EnvError::InvalidAction`] if the action is not an element of the action space.
    /// The action is never clamped into range.
    #[allow(clippy::type_complexity)]
    fn step(
        &mut self,
        action: &<Self::ActionSpace as Space>::Element,
    ) -> Result<(<Self::ObservationSpace as Space>::Element, f64, bool), EnvError>;
}

/// Error taking a step in an environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EnvError {
    #[error("invalid action {action}; the action space has {num_actions} actions")]
    InvalidAction { action: usize, num_actions: usize },
}

/// Build a [`StatefulEnvironment`].
pub trait BuildEnv {
    type Environment: StatefulEnvironment;

    /// Build an environment instance.
    ///
    /// # Args
    /// * `seed` - Seed for the environment's pseudo-random internal dynamics.
    fn build_env(&self, seed: u64) -> Result<Self::Environment, BuildEnvError>;
}

/// Error building an environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildEnvError {
    #[error("the action space must not be empty")]
    EmptyActionSpace,
}
