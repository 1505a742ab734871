//! A tiny environment used in the tests of this crate.
use crate::{record::Record, Act, Env, Obs, Step};
use anyhow::Result;

/// Running sum of the actions.
#[derive(Clone, Debug)]
pub struct CounterObs(pub f32);

impl Obs for CounterObs {
    fn len(&self) -> usize {
        1
    }
}

/// Amount added to the running sum.
#[derive(Clone, Debug)]
pub struct CounterAct(pub f32);

impl Act for CounterAct {
    fn len(&self) -> usize {
        1
    }
}

/// Adds actions to a running sum and rewards with the action itself.
///
/// Terminates after the configured number of steps, if any.
pub struct CounterEnv {
    terminate_after: Option<usize>,
    sum: f32,
    count_steps: usize,
}

impl Env for CounterEnv {
    type Config = Option<usize>;
    type Obs = CounterObs;
    type Act = CounterAct;
    type Info = ();

    fn build(config: &Self::Config, _seed: i64) -> Result<Self> {
        Ok(Self {
            terminate_after: *config,
            sum: 0.0,
            count_steps: 0,
        })
    }

    fn step(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)> {
        self.sum += a.0;
        self.count_steps += 1;
        let is_terminated = match self.terminate_after {
            Some(n) if self.count_steps >= n => 1,
            _ => 0,
        };
        let step = Step::new(
            CounterObs(self.sum),
            a.clone(),
            vec![a.0],
            vec![is_terminated],
            vec![0],
            (),
            None,
        );
        Ok((step, Record::empty()))
    }

    fn reset(&mut self, is_done: Option<&Vec<i8>>) -> Result<Self::Obs> {
        if let Some(is_done) = is_done {
            if is_done.first() != Some(&1) {
                return Ok(CounterObs(self.sum));
            }
        }
        self.sum = 0.0;
        self.count_steps = 0;
        Ok(CounterObs(self.sum))
    }

    fn reset_with_index(&mut self, _ix: usize) -> Result<Self::Obs> {
        self.reset(None)
    }
}
