//! Multi-armed bandit agents, environments and experiment simulation.
#![warn(clippy::cast_lossless)]
#![warn(clippy::cast_possible_truncation)]
#![warn(clippy::doc_markdown)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::missing_const_for_fn)] // has some false positives
#![warn(clippy::needless_borrow)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::use_self)]
pub mod agents;
pub mod defs;
pub mod envs;
mod error;
pub mod logging;
pub mod simulation;
pub mod spaces;

pub use agents::{Actor, Agent, AgentBuilder, Step};
pub use defs::{AgentDef, ExperimentDef};
pub use envs::{EnvStructure, GaussianBandit, StatefulEnvironment};
pub use error::BanditError;
pub use simulation::{run_agent, ExperimentRunner, StepRecord};
