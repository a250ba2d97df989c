//! Agent testing utilities
use super::{Agent, Step};
use crate::envs::{DeterministicBandit, EnvStructure, StatefulEnvironment};
use crate::simulation::hooks::{IndexedActionCounter, StepLimit};
use crate::simulation::run_agent;
use crate::spaces::{IndexSpace, SingletonSpace};

/// An environment structure with the given number of index actions.
pub const fn index_structure(num_actions: usize) -> EnvStructure<SingletonSpace, IndexSpace> {
    EnvStructure {
        observation_space: SingletonSpace::new(),
        action_space: IndexSpace::new(num_actions),
        reward_range: (f64::NEG_INFINITY, f64::INFINITY),
    }
}

/// A single-state bandit step taking `action` and receiving `reward`.
pub const fn bandit_step(action: usize, reward: f64) -> Step<(), usize> {
    Step {
        observation: (),
        action,
        reward,
        next_observation: Some(()),
        episode_done: false,
    }
}

/// Check that an agent learns to exploit a trivial two-armed bandit.
///
/// The environment is deterministic: the first arm always gives 0 reward and
/// the second always gives 1. After `num_train_steps` training steps the agent
/// must select the second arm in at least `threshold` of 1000 further steps.
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
pub fn train_deterministic_bandit<A, F>(make_agent: F, num_train_steps: u64, threshold: f64)
where
    A: Agent<(), usize>,
    F: FnOnce(EnvStructure<SingletonSpace, IndexSpace>) -> A,
{
    let mut env = DeterministicBandit::from_values(vec![0.0, 1.0]);
    let mut agent = make_agent(env.structure());

    // Training
    if num_train_steps > 0 {
        run_agent(
            &mut env,
            &mut agent,
            &mut (),
            &mut StepLimit::new(num_train_steps),
        )
        .unwrap();
    }

    // Evaluation
    let num_eval_steps = 1000_u64;
    let mut hooks = (
        IndexedActionCounter::new(env.structure().action_space),
        StepLimit::new(num_eval_steps),
    );
    run_agent(&mut env, &mut agent, &mut (), &mut hooks).unwrap();

    let optimal_count = hooks.0.counts[1];
    let required = ((num_eval_steps as f64) * threshold) as u64;
    assert!(
        optimal_count >= required,
        "optimal arm selected {} of {} times; expected at least {}",
        optimal_count,
        num_eval_steps,
        required
    );
}
