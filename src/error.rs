//! Error type
use crate::agents::BuildAgentError;
use crate::envs::{BuildEnvError, EnvError};
use thiserror::Error;

/// Error initializing or running a bandit experiment.
#[derive(Error, Debug)]
pub enum BanditError {
    #[error("error building agent")]
    BuildAgent(#[from] BuildAgentError),
    #[error("error building environment")]
    BuildEnv(#[from] BuildEnvError),
    #[error("environment error")]
    Env(#[from] EnvError),
}
