//! Serial (single-thread) simulation.
use super::hooks::{ClosureHook, SimulationHook, StepLimit, StepLogger};
use super::StepRecord;
use crate::agents::{Agent, Step};
use crate::defs::ExperimentDef;
use crate::envs::{BuildEnv, EnvError, GaussianBanditConfig, StatefulEnvironment};
use crate::error::BanditError;
use crate::logging::{Event, Logger};
use crate::spaces::Space;
use std::mem;

/// Run an agent-environment simulation.
///
/// Resets the environment once at the start, then steps until a hook requests
/// a stop. The agent is updated after every step.
///
/// # Args
/// * `environment` - The environment to simulate.
/// * `agent` - The agent to simulate.
/// * `logger` - The logger, passed to hook calls and agent updates.
/// * `hook` - A simulation hook run on each step. Controls when the simulation stops.
///
/// # Errors
/// Propagates any [`EnvError`] produced by an environment step.
pub fn run_agent<E, A, H>(
    environment: &mut E,
    agent: &mut A,
    logger: &mut dyn Logger,
    hook: &mut H,
) -> Result<(), EnvError>
where
    E: StatefulEnvironment + ?Sized,
    <E::ObservationSpace as Space>::Element: Clone,
    A: Agent<<E::ObservationSpace as Space>::Element, <E::ActionSpace as Space>::Element> + ?Sized,
    H: SimulationHook<<E::ObservationSpace as Space>::Element, <E::ActionSpace as Space>::Element>
        + ?Sized,
{
    let mut observation = environment.reset();
    loop {
        let action = agent.act(&observation);
        let (next_observation, reward, episode_done) = environment.step(&action)?;

        let previous_observation = mem::replace(&mut observation, next_observation);
        let step = Step {
            observation: previous_observation,
            action,
            reward,
            next_observation: if episode_done {
                None
            } else {
                Some(observation.clone())
            },
            episode_done,
        };
        let keep_going = hook.call(&step, logger);
        agent.update(step, logger);
        logger.done(Event::Step);

        if episode_done {
            observation = environment.reset();
        }
        if !keep_going {
            return Ok(());
        }
    }
}

/// Runs a configured bandit experiment serially, one episode at a time.
///
/// Each episode resets the environment (redrawing the arm means) and builds a
/// fresh agent, so value estimates never survive an episode boundary. Every
/// step appends one [`StepRecord`] to the returned log, in execution order.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentRunner {
    def: ExperimentDef,
}

impl ExperimentRunner {
    pub const fn new(def: ExperimentDef) -> Self {
        Self { def }
    }

    /// Run the experiment.
    ///
    /// The run is a deterministic function of the definition and `seed`:
    /// the environment is seeded from `seed` and each episode's agent from a
    /// value derived from `seed` and the episode index.
    ///
    /// # Errors
    /// If the environment or an agent cannot be built from the definition.
    /// Configuration errors surface here, before any episode runs.
    pub fn run(&self, seed: u64, logger: &mut dyn Logger) -> Result<Vec<StepRecord>, BanditError> {
        let mut env = GaussianBanditConfig::new(self.def.num_arms).build_env(seed)?;
        let label = self.def.agent.label();

        let mut records = Vec::new();
        if self.def.max_steps == 0 {
            return Ok(records);
        }
        for episode in 0..self.def.num_episodes {
            let structure = env.structure();
            let agent_seed = seed.wrapping_add(episode).wrapping_add(1);
            let mut agent = self.def.agent.build(structure, agent_seed)?;

            let structure = env.structure();
            let mut step_index = 0;
            let mut hooks = (
                StepLogger::new(structure.observation_space, structure.action_space),
                ClosureHook::from(|step: &Step<(), usize>| {
                    records.push(StepRecord {
                        episode,
                        step: step_index,
                        reward: step.reward,
                        action: step.action,
                        agent_label: label.to_owned(),
                    });
                    step_index += 1;
                    true
                }),
                StepLimit::new(self.def.max_steps),
            );
            run_agent(&mut env, &mut agent, logger, &mut hooks)?;
            logger.done(Event::Episode);
        }
        Ok(records)
    }
}
