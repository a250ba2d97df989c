use super::{BuildEnv, BuildEnvError, EnvError, EnvStructure, StatefulEnvironment};
use crate::spaces::{IndexSpace, SingletonSpace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use std::fmt;

/// A stationary multi-armed bandit with Gaussian arm rewards.
///
/// Each [`reset`](StatefulEnvironment::reset) redraws the hidden per-arm mean
/// rewards independently from the standard normal distribution.
/// Stepping on arm `i` yields a reward drawn from `Normal(mean_i, 1)`,
/// independently on every call. Episodes never terminate on their own;
/// the episode length is controlled entirely by the caller.
///
/// There is a single observation, `()`: no observation ever conveys
/// information about which arm is best.
pub struct GaussianBandit {
    num_arms: usize,
    arm_means: Vec<f64>,
    rng: StdRng,
}

impl GaussianBandit {
    /// Create a bandit with the given number of arms.
    ///
    /// The arm means are drawn at the first reset, or at the first step if
    /// stepping precedes the first reset.
    pub fn new(num_arms: usize, seed: u64) -> Self {
        Self {
            num_arms,
            arm_means: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn draw_arm_means(&mut self) {
        self.arm_means = (&mut self.rng)
            .sample_iter(StandardNormal)
            .take(self.num_arms)
            .collect();
    }

    /// Reinitialize the random state.
    ///
    /// A `reseed` followed by a reset always produces the same arm means
    /// for the same seed.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// The number of arms.
    pub const fn num_arms(&self) -> usize {
        self.num_arms
    }

    /// The hidden mean reward of each arm.
    ///
    /// Exposed for evaluation and debugging; agents must not consume this.
    /// Empty until the means are first drawn.
    pub fn arm_means(&self) -> &[f64] {
        &self.arm_means
    }
}

impl fmt::Display for GaussianBandit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "GaussianBandit({})", self.num_arms)
    }
}

impl StatefulEnvironment for GaussianBandit {
    type ObservationSpace = SingletonSpace;
    type ActionSpace = IndexSpace;

    fn structure(&self) -> EnvStructure<SingletonSpace, IndexSpace> {
        EnvStructure {
            observation_space: SingletonSpace::new(),
            action_space: IndexSpace::new(self.num_arms),
            reward_range: (f64::NEG_INFINITY, f64::INFINITY),
        }
    }

    fn reset(&mut self) {
        self.draw_arm_means();
    }

    fn step(&mut self, action: &usize) -> Result<((), f64, bool), EnvError> {
        if *action >= self.num_arms {
            return Err(EnvError::InvalidAction {
                action: *action,
                num_actions: self.num_arms,
            });
        }
        if self.arm_means.is_empty() {
            self.draw_arm_means();
        }
        let mean = self.arm_means[*action];
        let noise: f64 = self.rng.sample(StandardNormal);
        Ok(((), mean + noise, false))
    }
}

/// Configuration for a [`GaussianBandit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GaussianBanditConfig {
    /// The number of arms.
    pub num_arms: usize,
}

impl GaussianBanditConfig {
    pub const fn new(num_arms: usize) -> Self {
        Self { num_arms }
    }
}

impl Default for GaussianBanditConfig {
    fn default() -> Self {
        Self::new(10)
    }
}

impl BuildEnv for GaussianBanditConfig {
    type Environment = GaussianBandit;

    fn build_env(&self, seed: u64) -> Result<GaussianBandit, BuildEnvError> {
        if self.num_arms == 0 {
            return Err(BuildEnvError::EmptyActionSpace);
        }
        Ok(GaussianBandit::new(self.num_arms, seed))
    }
}

/// A multi-armed bandit where each arm yields a fixed constant reward.
///
/// Useful as a noise-free training target in tests.
pub struct DeterministicBandit {
    arm_rewards: Vec<f64>,
}

impl DeterministicBandit {
    /// Create a bandit where arm `i` always yields `values[i]`.
    pub fn from_values(values: Vec<f64>) -> Self {
        Self {
            arm_rewards: values,
        }
    }
}

impl fmt::Display for DeterministicBandit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DeterministicBandit({:?})", self.arm_rewards)
    }
}

impl StatefulEnvironment for DeterministicBandit {
    type ObservationSpace = SingletonSpace;
    type ActionSpace = IndexSpace;

    fn structure(&self) -> EnvStructure<SingletonSpace, IndexSpace> {
        let min_reward = self.arm_rewards.iter().copied().fold(f64::INFINITY, f64::min);
        let max_reward = self
            .arm_rewards
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        EnvStructure {
            observation_space: SingletonSpace::new(),
            action_space: IndexSpace::new(self.arm_rewards.len()),
            reward_range: (min_reward, max_reward),
        }
    }

    fn reset(&mut self) {}

    fn step(&mut self, action: &usize) -> Result<((), f64, bool), EnvError> {
        let reward = *self
            .arm_rewards
            .get(*action)
            .ok_or(EnvError::InvalidAction {
                action: *action,
                num_actions: self.arm_rewards.len(),
            })?;
        Ok(((), reward, false))
    }
}

#[cfg(test)]
mod gaussian_bandit {
    use super::super::testing;
    use super::*;

    #[test]
    fn same_seed_same_arm_means() {
        let mut env_a = GaussianBandit::new(5, 83);
        let mut env_b = GaussianBandit::new(5, 83);
        env_a.reset();
        env_b.reset();
        assert_eq!(env_a.arm_means(), env_b.arm_means());
        assert_eq!(env_a.arm_means().len(), 5);
    }

    #[test]
    fn reseed_reproduces_reset() {
        let mut env = GaussianBandit::new(4, 1);
        env.reset();
        let first_means = env.arm_means().to_vec();

        env.reset(); // different means from the continuing stream
        env.reseed(1);
        env.reset();
        assert_eq!(env.arm_means(), first_means);
    }

    #[test]
    fn reset_replaces_arm_means() {
        let mut env = GaussianBandit::new(3, 2);
        env.reset();
        let first_means = env.arm_means().to_vec();
        env.reset();
        assert_ne!(env.arm_means(), first_means);
    }

    #[test]
    fn step_does_not_change_arm_means() {
        let mut env = GaussianBandit::new(3, 5);
        env.reset();
        let means = env.arm_means().to_vec();
        for _ in 0..10 {
            env.step(&1).unwrap();
        }
        assert_eq!(env.arm_means(), means);
    }

    #[test]
    fn step_never_ends_episode() {
        let mut env = GaussianBandit::new(2, 0);
        env.reset();
        for _ in 0..100 {
            let ((), _, episode_done) = env.step(&0).unwrap();
            assert!(!episode_done);
        }
    }

    #[test]
    fn invalid_action() {
        let mut env = GaussianBandit::new(3, 0);
        env.reset();
        assert_eq!(
            env.step(&3),
            Err(EnvError::InvalidAction {
                action: 3,
                num_actions: 3
            })
        );
    }

    #[test]
    fn step_before_reset_draws_means() {
        let mut env = GaussianBandit::new(3, 11);
        let ((), _, episode_done) = env.step(&0).unwrap();
        assert!(!episode_done);
        assert_eq!(env.arm_means().len(), 3);
    }

    #[test]
    fn invalid_action_before_reset() {
        // The range check does not depend on the means being drawn yet.
        let mut env = GaussianBandit::new(3, 0);
        assert_eq!(
            env.step(&5),
            Err(EnvError::InvalidAction {
                action: 5,
                num_actions: 3
            })
        );
        assert!(env.arm_means().is_empty());
    }

    #[test]
    fn reward_mean_approaches_arm_mean() {
        let mut env = GaussianBandit::new(3, 17);
        env.reset();
        let arm_mean = env.arm_means()[1];

        let num_samples = 10_000;
        let mut total = 0.0;
        for _ in 0..num_samples {
            let ((), reward, _) = env.step(&1).unwrap();
            total += reward;
        }
        let sample_mean = total / f64::from(num_samples);
        // Standard error is 0.01 for unit-variance noise.
        assert!((sample_mean - arm_mean).abs() < 0.05);
    }

    #[test]
    fn run_satisfies_invariants() {
        let mut env = GaussianBanditConfig::new(4).build_env(0).unwrap();
        testing::run_stateful(&mut env, 500, 1);
    }

    #[test]
    fn build_rejects_zero_arms() {
        assert_eq!(
            GaussianBanditConfig::new(0).build_env(0).err(),
            Some(BuildEnvError::EmptyActionSpace)
        );
    }
}
