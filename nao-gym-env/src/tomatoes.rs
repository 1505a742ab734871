//! Impacts on the robot from thrown projectiles.
use crate::TomatoConfig;
use anyhow::Result;
use log::debug;
use nao_gym_sim::Simulator;
use std::f64::consts::TAU;

/// Throws a tomato at the robot every `interval` steps.
///
/// The impact is horizontal with a uniformly drawn direction and magnitude.
pub struct TomatoThrower {
    config: TomatoConfig,
    rng: fastrand::Rng,
    count_steps: usize,
}

impl TomatoThrower {
    /// Constructs a thrower drawing impacts from a generator seeded with `seed`.
    pub fn new(config: TomatoConfig, seed: u64) -> Self {
        Self {
            config,
            rng: fastrand::Rng::with_seed(seed),
            count_steps: 0,
        }
    }

    /// Restarts the interval. The generator is reseeded if `seed` is given,
    /// otherwise it continues its stream.
    pub fn reset(&mut self, seed: Option<u64>) {
        if let Some(seed) = seed {
            self.rng = fastrand::Rng::with_seed(seed);
        }
        self.count_steps = 0;
    }

    /// Counts a step and throws a tomato if it is due.
    ///
    /// Returns the applied force, if any.
    pub fn step(&mut self, nao: &mut dyn Simulator) -> Result<Option<[f64; 3]>> {
        self.count_steps += 1;
        if self.config.interval == 0 || self.count_steps % self.config.interval != 0 {
            return Ok(None);
        }

        let magnitude = self.config.min_force
            + self.rng.f64() * (self.config.max_force - self.config.min_force);
        let direction = self.rng.f64() * TAU;
        let force = [magnitude * direction.cos(), magnitude * direction.sin(), 0.0];
        nao.apply_external_force(&self.config.target, force)?;
        debug!("Tomato hits {} with {:?}", self.config.target, force);
        Ok(Some(force))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nao_gym_core::Configurable;
    use nao_gym_sim::{KinematicSimulator, KinematicSimulatorConfig};

    fn config(interval: usize) -> TomatoConfig {
        TomatoConfig {
            interval,
            ..TomatoConfig::default()
        }
    }

    #[test]
    fn test_throws_at_interval() -> Result<()> {
        let mut nao = KinematicSimulator::build(&KinematicSimulatorConfig::default())?;
        let mut thrower = TomatoThrower::new(config(3), 42);
        let hits: Vec<bool> = (0..6)
            .map(|_| thrower.step(&mut nao).map(|f| f.is_some()))
            .collect::<Result<_>>()?;
        assert_eq!(hits, vec![false, false, true, false, false, true]);
        Ok(())
    }

    #[test]
    fn test_magnitude_in_range() -> Result<()> {
        let mut nao = KinematicSimulator::build(&KinematicSimulatorConfig::default())?;
        let mut thrower = TomatoThrower::new(config(1), 7);
        for _ in 0..20 {
            let force = thrower.step(&mut nao)?.unwrap();
            let magnitude = (force[0] * force[0] + force[1] * force[1]).sqrt();
            assert!(magnitude >= 5.0 - 1e-9 && magnitude <= 20.0 + 1e-9);
            assert_eq!(force[2], 0.0);
        }
        Ok(())
    }

    #[test]
    fn test_same_seed_same_tomatoes() -> Result<()> {
        let mut nao = KinematicSimulator::build(&KinematicSimulatorConfig::default())?;
        let mut thrower = TomatoThrower::new(config(1), 3);
        let first = thrower.step(&mut nao)?;
        thrower.reset(Some(3));
        assert_eq!(thrower.step(&mut nao)?, first);
        Ok(())
    }

    #[test]
    fn test_reset_without_seed_continues_stream() -> Result<()> {
        let mut nao = KinematicSimulator::build(&KinematicSimulatorConfig::default())?;
        let mut thrower = TomatoThrower::new(config(2), 3);
        thrower.step(&mut nao)?;
        let first = thrower.step(&mut nao)?;
        thrower.step(&mut nao)?;

        thrower.reset(None);
        assert_eq!(thrower.step(&mut nao)?, None);
        let second = thrower.step(&mut nao)?;
        assert!(second.is_some());
        assert_ne!(second, first);
        Ok(())
    }

    #[test]
    fn test_disabled_with_zero_interval() -> Result<()> {
        let mut nao = KinematicSimulator::build(&KinematicSimulatorConfig::default())?;
        let mut thrower = TomatoThrower::new(config(0), 0);
        assert_eq!(thrower.step(&mut nao)?, None);
        Ok(())
    }
}
