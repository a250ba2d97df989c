//! Reinforcement learning agents
pub mod bandits;
mod random;
#[cfg(test)]
pub mod testing;

pub use bandits::{
    EpsilonGreedyAgent, EpsilonGreedyAgentConfig, GreedyAgent, GreedyAgentConfig,
    OptimisticGreedyAgent, OptimisticGreedyAgentConfig, UcbAgent, UcbAgentConfig, ValueTable,
};
pub use random::RandomAgent;

use crate::envs::EnvStructure;
use crate::logging::Logger;
use crate::spaces::Space;
use thiserror::Error;

/// Description of an environment step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step<O, A> {
    /// The initial observation.
    pub observation: O,
    /// The action taken from the initial state given the initial observation.
    pub action: A,
    /// The resulting reward.
    pub reward: f64,
    /// The resulting successor observation; `None` if the successor state is terminal.
    pub next_observation: Option<O>,
    /// Whether this step ends the episode.
    pub episode_done: bool,
}

/// An actor that produces actions given observations.
pub trait Actor<O, A> {
    /// Choose an action in the environment.
    ///
    /// Must be called sequentially within an episode.
    fn act(&mut self, observation: &O) -> A;
}

/// A learning agent.
///
/// Can interact with an environment and learns from the interaction.
pub trait Agent<O, A>: Actor<O, A> {
    /// Update the agent based on the most recent step.
    ///
    /// # Args
    /// * `step` - The environment step resulting from the most recent call to [`Actor::act`].
    /// * `logger` - A logger for statistics emitted by the update.
    fn update(&mut self, step: Step<O, A>, logger: &mut dyn Logger);
}

impl<O, A, T: Actor<O, A> + ?Sized> Actor<O, A> for Box<T> {
    fn act(&mut self, observation: &O) -> A {
        T::act(self, observation)
    }
}

impl<O, A, T: Agent<O, A> + ?Sized> Agent<O, A> for Box<T> {
    fn update(&mut self, step: Step<O, A>, logger: &mut dyn Logger) {
        T::update(self, step, logger)
    }
}

/// Build an agent instance for a given environment structure.
pub trait AgentBuilder<OS: Space, AS: Space> {
    type Agent;

    /// Build an agent for the given environment structure.
    ///
    /// # Args
    /// * `structure` - The structure of the environment in which the agent is to operate.
    /// * `seed` - A number used to seed the agent's random state,
    ///            for those agents that use pseudo-random number generation.
    fn build(
        &self,
        structure: EnvStructure<OS, AS>,
        seed: u64,
    ) -> Result<Self::Agent, BuildAgentError>;
}

/// Error building an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildAgentError {
    #[error("parameter `{name}` {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },
}
