//! Environment testing utilities
use super::StatefulEnvironment;
use crate::agents::RandomAgent;
use crate::simulation::hooks::{ClosureHook, StepLimit};
use crate::simulation::run_agent;
use crate::spaces::{SampleSpace, Space};

/// Run a stateful environment with random actions and check that invariants hold.
pub fn run_stateful<E>(env: &mut E, num_steps: u64, seed: u64)
where
    E: StatefulEnvironment,
    E::ActionSpace: SampleSpace + Clone,
    <E::ObservationSpace as Space>::Element: Clone,
{
    let structure = env.structure();
    let (min_reward, max_reward) = structure.reward_range;
    let observation_space = structure.observation_space;
    let mut agent = RandomAgent::new(structure.action_space, seed);

    let mut hook = (
        ClosureHook::from(|step: &crate::agents::Step<_, _>| {
            assert!(step.reward >= min_reward);
            assert!(step.reward <= max_reward);
            if let Some(observation) = &step.next_observation {
                assert!(observation_space.contains(observation));
            } else {
                assert!(step.episode_done);
            }
            true
        }),
        StepLimit::new(num_steps),
    );
    run_agent(env, &mut agent, &mut (), &mut hook).unwrap();
}
