use super::{Actor, Agent, Step};
use crate::logging::Logger;
use crate::spaces::SampleSpace;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;

/// An agent that always acts uniformly at random and never learns.
pub struct RandomAgent<AS> {
    action_space: AS,
    rng: StdRng,
}

impl<AS: SampleSpace> RandomAgent<AS> {
    pub fn new(action_space: AS, seed: u64) -> Self {
        Self {
            action_space,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<AS: SampleSpace + fmt::Display> fmt::Display for RandomAgent<AS> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "RandomAgent({})", self.action_space)
    }
}

impl<O, AS: SampleSpace> Actor<O, AS::Element> for RandomAgent<AS> {
    fn act(&mut self, _observation: &O) -> AS::Element {
        self.action_space.sample(&mut self.rng)
    }
}

impl<O, AS: SampleSpace> Agent<O, AS::Element> for RandomAgent<AS> {
    fn update(&mut self, _step: Step<O, AS::Element>, _logger: &mut dyn Logger) {}
}

#[cfg(test)]
mod random_agent {
    use super::*;
    use crate::spaces::IndexSpace;

    #[test]
    fn actions_are_in_space() {
        let mut agent = RandomAgent::new(IndexSpace::new(3), 0);
        for _ in 0..100 {
            assert!(agent.act(&()) < 3);
        }
    }

    #[test]
    fn same_seed_same_actions() {
        let mut agent_a = RandomAgent::new(IndexSpace::new(5), 7);
        let mut agent_b = RandomAgent::new(IndexSpace::new(5), 7);
        for _ in 0..20 {
            assert_eq!(agent_a.act(&()), agent_b.act(&()));
        }
    }
}
