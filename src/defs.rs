//! Resolved experiment and agent definitions.
//!
//! These are the structures an external front end (CLI parser, YAML loader)
//! resolves its input into before handing control to the library.
//! Deserialization fails fast on an unknown agent kind or a missing
//! parameter, before any episode runs.
use crate::agents::{
    Agent, AgentBuilder, BuildAgentError, EpsilonGreedyAgentConfig, GreedyAgentConfig,
    OptimisticGreedyAgentConfig, UcbAgentConfig,
};
use crate::envs::EnvStructure;
use crate::spaces::{IndexSpace, Space};
use serde::{Deserialize, Serialize};

/// Agent definition: one selection strategy with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "agent_kind", rename_all = "snake_case")]
pub enum AgentDef {
    /// Always select the action with the largest value estimate.
    Greedy(GreedyAgentConfig),
    /// Greedy with probability-epsilon uniform exploration.
    EpsilonGreedy(EpsilonGreedyAgentConfig),
    /// Greedy from optimistic initial value estimates.
    OptimisticGreedy(OptimisticGreedyAgentConfig),
    /// Upper confidence bound selection.
    Ucb(UcbAgentConfig),
}

/// The agent trait object for index action spaces.
pub type DynIndexAgent<O> = dyn Agent<O, usize>;

impl AgentDef {
    /// A short stable name for this agent kind, as used in result logs.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Greedy(_) => "greedy",
            Self::EpsilonGreedy(_) => "epsilon_greedy",
            Self::OptimisticGreedy(_) => "optimistic_greedy",
            Self::Ucb(_) => "ucb",
        }
    }

    /// Construct the configured agent for an environment with index actions.
    ///
    /// # Errors
    /// If a parameter value is invalid for the agent kind.
    pub fn build<OS>(
        &self,
        structure: EnvStructure<OS, IndexSpace>,
        seed: u64,
    ) -> Result<Box<DynIndexAgent<OS::Element>>, BuildAgentError>
    where
        OS: Space,
        OS::Element: 'static,
    {
        match self {
            Self::Greedy(config) => config.build(structure, seed).map(|a| Box::new(a) as _),
            Self::EpsilonGreedy(config) => config.build(structure, seed).map(|a| Box::new(a) as _),
            Self::OptimisticGreedy(config) => {
                config.build(structure, seed).map(|a| Box::new(a) as _)
            }
            Self::Ucb(config) => config.build(structure, seed).map(|a| Box::new(a) as _),
        }
    }
}

/// A fully resolved experiment definition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExperimentDef {
    /// The agent to evaluate. Rebuilt from scratch at the start of every episode.
    pub agent: AgentDef,
    /// The number of episodes to run.
    #[serde(alias = "n_episodes")]
    pub num_episodes: u64,
    /// The number of steps per episode.
    pub max_steps: u64,
    /// The number of bandit arms.
    #[serde(alias = "n_arms")]
    pub num_arms: usize,
}
