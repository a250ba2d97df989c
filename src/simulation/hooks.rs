//! Simulation hooks.
use crate::agents::Step;
use crate::logging::{Event, Logger, LoggerHelper};
use crate::spaces::{FiniteSpace, Space};

/// A callback run on each simulation step.
pub trait SimulationHook<O, A> {
    /// Call the hook on the current step.
    ///
    /// # Args
    /// * `step` - The most recent environment step.
    /// * `logger` - A logger.
    ///
    /// # Returns
    /// Whether the simulation should continue after this step.
    fn call(&mut self, step: &Step<O, A>, logger: &mut dyn Logger) -> bool;
}

impl<O, A> SimulationHook<O, A> for () {
    fn call(&mut self, _: &Step<O, A>, _: &mut dyn Logger) -> bool {
        true
    }
}

// For a tuple of hooks, continue if all allow continuing.
// Every hook is called on every step; evaluation does not short-circuit.

impl<O, A, H0, H1> SimulationHook<O, A> for (H0, H1)
where
    H0: SimulationHook<O, A>,
    H1: SimulationHook<O, A>,
{
    fn call(&mut self, step: &Step<O, A>, logger: &mut dyn Logger) -> bool {
        let continue_0 = self.0.call(step, logger);
        let continue_1 = self.1.call(step, logger);
        continue_0 && continue_1
    }
}

impl<O, A, H0, H1, H2> SimulationHook<O, A> for (H0, H1, H2)
where
    H0: SimulationHook<O, A>,
    H1: SimulationHook<O, A>,
    H2: SimulationHook<O, A>,
{
    fn call(&mut self, step: &Step<O, A>, logger: &mut dyn Logger) -> bool {
        let continue_0 = self.0.call(step, logger);
        let continue_1 = self.1.call(step, logger);
        let continue_2 = self.2.call(step, logger);
        continue_0 && continue_1 && continue_2
    }
}

/// A hook that stops the simulation after a maximum number of steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepLimit {
    steps_remaining: u64,
}

impl StepLimit {
    /// Create a new `StepLimit` hook.
    ///
    /// `max_steps` must be >= 1 because hooks cannot stop the simulation
    /// before the first step.
    pub fn new(max_steps: u64) -> Self {
        assert!(max_steps > 0);
        Self {
            steps_remaining: max_steps,
        }
    }
}

impl<O, A> SimulationHook<O, A> for StepLimit {
    fn call(&mut self, _: &Step<O, A>, _: &mut dyn Logger) -> bool {
        self.steps_remaining -= 1;
        self.steps_remaining > 0
    }
}

/// A hook that counts how often each action of a finite space was taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedActionCounter<AS> {
    pub action_space: AS,
    /// The number of times each action was taken, indexed by action.
    pub counts: Vec<u64>,
}

impl<AS: FiniteSpace> IndexedActionCounter<AS> {
    pub fn new(action_space: AS) -> Self {
        let num_actions = action_space.size();
        Self {
            action_space,
            counts: vec![0; num_actions],
        }
    }
}

impl<O, AS: FiniteSpace> SimulationHook<O, AS::Element> for IndexedActionCounter<AS> {
    fn call(&mut self, step: &Step<O, AS::Element>, _: &mut dyn Logger) -> bool {
        self.counts[self.action_space.to_index(&step.action)] += 1;
        true
    }
}

/// A hook that logs the reward, observation and action of each step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepLogger<OS, AS> {
    pub observation_space: OS,
    pub action_space: AS,
}

impl<OS, AS> StepLogger<OS, AS> {
    pub const fn new(observation_space: OS, action_space: AS) -> Self {
        Self {
            observation_space,
            action_space,
        }
    }
}

impl<OS: Space, AS: Space> SimulationHook<OS::Element, AS::Element> for StepLogger<OS, AS> {
    fn call(&mut self, step: &Step<OS::Element, AS::Element>, logger: &mut dyn Logger) -> bool {
        logger.unwrap_log_scalar(Event::Step, "reward", step.reward);
        logger.unwrap_log(
            Event::Step,
            "observation",
            self.observation_space.as_loggable(&step.observation),
        );
        logger.unwrap_log(
            Event::Step,
            "action",
            self.action_space.as_loggable(&step.action),
        );
        true
    }
}

/// A simulation hook defined from a closure.
#[derive(Debug, Clone, Copy)]
pub struct ClosureHook<F> {
    f: F,
}

impl<F> From<F> for ClosureHook<F> {
    fn from(f: F) -> Self {
        Self { f }
    }
}

impl<O, A, F> SimulationHook<O, A> for ClosureHook<F>
where
    F: FnMut(&Step<O, A>) -> bool,
{
    fn call(&mut self, step: &Step<O, A>, _: &mut dyn Logger) -> bool {
        (self.f)(step)
    }
}

#[cfg(test)]
mod hooks {
    use super::*;
    use crate::agents::testing::bandit_step;
    use crate::spaces::IndexSpace;

    #[test]
    fn step_limit_stops_after_max_steps() {
        let mut hook = StepLimit::new(3);
        assert!(hook.call(&bandit_step(0, 0.0), &mut ()));
        assert!(hook.call(&bandit_step(0, 0.0), &mut ()));
        assert!(!hook.call(&bandit_step(0, 0.0), &mut ()));
    }

    #[test]
    fn action_counter_counts() {
        let mut hook = IndexedActionCounter::new(IndexSpace::new(3));
        for action in [1, 1, 2] {
            hook.call(&bandit_step(action, 0.0), &mut ());
        }
        assert_eq!(hook.counts, vec![0, 2, 1]);
    }

    #[test]
    fn tuple_stops_when_any_hook_stops() {
        let mut hook = (StepLimit::new(1), ());
        assert!(!hook.call(&bandit_step(0, 0.0), &mut ()));
    }

    #[test]
    fn tuple_calls_all_hooks() {
        let mut hook = (
            IndexedActionCounter::new(IndexSpace::new(2)),
            StepLimit::new(1),
        );
        hook.call(&bandit_step(1, 0.0), &mut ());
        assert_eq!(hook.0.counts, vec![0, 1]);
    }

    #[test]
    fn closure_hook_sees_steps() {
        let mut rewards = Vec::new();
        let mut hook = ClosureHook::from(|step: &crate::agents::Step<(), usize>| {
            rewards.push(step.reward);
            true
        });
        hook.call(&bandit_step(0, 0.5), &mut ());
        hook.call(&bandit_step(0, 1.5), &mut ());
        drop(hook);
        assert_eq!(rewards, vec![0.5, 1.5]);
    }
}
