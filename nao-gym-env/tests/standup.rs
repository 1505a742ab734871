use anyhow::Result;
use nao_gym_core::{
    error::NaoGymError, DefaultEvaluator, Env, Evaluator, Policy, TimeLimit, TimeLimitConfig,
};
use nao_gym_env::{NaoAct, NaoObs, NaoStandup, NaoStandupConfig, ROOT_POSITION, ROOT_QUATERNION};
use nao_gym_sim::{Simulator, N_JOINTS};
use ndarray::Array1;
use test_log::test;

const OBS_LEN: usize = 65;

fn env() -> Result<NaoStandup> {
    NaoStandup::build(&NaoStandupConfig::default(), 42)
}

fn random_act(rng: &fastrand::Rng) -> NaoAct {
    NaoAct::new((0..N_JOINTS).map(|_| rng.f64() * 4.0 - 2.0).collect())
}

#[test]
fn test_zero_action_step() -> Result<()> {
    let mut env = env()?;
    let obs = env.reset(None)?;
    assert_eq!(obs.obs.len(), OBS_LEN);

    let (step, record) = env.step(&NaoAct::zeros(N_JOINTS))?;
    assert_eq!(step.obs.obs.len(), OBS_LEN);
    assert_eq!(
        step.info.names().collect::<Vec<_>>(),
        vec![
            "head_height",
            "control_amplitude",
            "external_impact_forces",
            "torque_change_rate"
        ]
    );
    assert!(step.reward[0].is_finite());
    assert!((step.reward[0] as f64 - step.info.total()).abs() < 1e-6);
    assert_eq!(step.info.get("control_amplitude"), Some(0.0));
    assert_eq!(step.info.get("torque_change_rate"), Some(0.0));

    for name in step.info.names() {
        assert!(record.get_scalar(name).is_ok());
    }
    assert_eq!(record.get_scalar("reward")?, step.reward[0]);
    Ok(())
}

#[test]
fn test_reset_is_idempotent() -> Result<()> {
    let mut env = env()?;
    let first = env.reset(None)?;
    let second = env.reset(None)?;
    assert_eq!(first, second);
    assert_eq!(env.nao().transform(), (ROOT_POSITION, ROOT_QUATERNION));

    // Also after stepping in between.
    let rng = fastrand::Rng::with_seed(0);
    for _ in 0..5 {
        env.step(&random_act(&rng))?;
    }
    assert_eq!(env.reset(None)?, first);
    assert_eq!(env.nao().transform(), (ROOT_POSITION, ROOT_QUATERNION));
    Ok(())
}

#[test]
fn test_root_pose_literals() -> Result<()> {
    let mut env = env()?;
    let obs = env.reset(None)?;
    let root: Vec<f64> = obs.obs.iter().take(7).cloned().collect();
    assert_eq!(
        root,
        vec![
            -0.13252355,
            -0.0909888,
            0.05897925,
            0.69360432,
            0.13973604,
            -0.692682,
            0.13992331
        ]
    );
    Ok(())
}

#[test]
fn test_never_terminates_or_truncates() -> Result<()> {
    let mut env = env()?;
    env.reset(None)?;
    let rng = fastrand::Rng::with_seed(1);
    for i in 0..200 {
        let act = if i % 2 == 0 {
            random_act(&rng)
        } else {
            NaoAct::new(Array1::from_elem(N_JOINTS, 1e3))
        };
        let (step, _) = env.step(&act)?;
        assert_eq!(step.is_terminated, vec![0]);
        assert_eq!(step.is_truncated, vec![0]);
        assert!(!step.is_done());
    }
    assert_eq!(env.count_steps(), 200);
    Ok(())
}

#[test]
fn test_rate_penalty_does_not_leak_across_episodes() -> Result<()> {
    let rng = fastrand::Rng::with_seed(2);
    let a = random_act(&rng);
    let b = random_act(&rng);

    let mut fresh = env()?;
    fresh.reset(None)?;
    let (expected, _) = fresh.step(&b)?;

    let mut env = env()?;
    env.reset(None)?;
    env.step(&a)?;
    env.reset(None)?;
    let (step, _) = env.step(&b)?;

    assert_eq!(step.info.get("torque_change_rate"), Some(0.0));
    assert_eq!(step.info, expected.info);
    assert_eq!(step.obs, expected.obs);
    Ok(())
}

#[test]
fn test_rate_penalty_after_first_step() -> Result<()> {
    let mut env = env()?;
    env.reset(None)?;
    env.step(&NaoAct::zeros(N_JOINTS))?;
    let (step, _) = env.step(&NaoAct::new(Array1::from_elem(N_JOINTS, 0.5)))?;

    // |0.5 - 0| per actuator over dt = 4 * 0.005 s, weighted by -0.01.
    let expected = -0.01 * 0.5 / 0.02;
    let value = step.info.get("torque_change_rate").unwrap();
    assert!((value - expected).abs() < 1e-9, "{} != {}", value, expected);
    Ok(())
}

#[test]
fn test_invalid_actions_are_rejected() -> Result<()> {
    let mut env = env()?;
    env.reset(None)?;
    let before: NaoObs = env.observation();

    let err = env.step(&NaoAct::zeros(N_JOINTS - 1)).err().unwrap();
    assert_eq!(
        err.downcast_ref::<NaoGymError>(),
        Some(&NaoGymError::dimension_mismatch("action", N_JOINTS, N_JOINTS - 1))
    );

    let mut act = NaoAct::zeros(N_JOINTS);
    act.act[7] = f64::NAN;
    let err = env.step(&act).err().unwrap();
    assert_eq!(
        err.downcast_ref::<NaoGymError>(),
        Some(&NaoGymError::NonFiniteAction(7))
    );

    assert_eq!(env.observation(), before);
    assert_eq!(env.count_steps(), 0);

    // The rejected actions did not reach the rate penalty.
    let (step, _) = env.step(&NaoAct::new(Array1::from_elem(N_JOINTS, 1.0)))?;
    assert_eq!(step.info.get("torque_change_rate"), Some(0.0));
    Ok(())
}

#[test]
fn test_time_limit() -> Result<()> {
    let config = TimeLimitConfig::new(NaoStandupConfig::default(), 10);
    let mut env: TimeLimit<NaoStandup> = TimeLimit::build(&config, 0)?;
    env.reset(None)?;

    for _ in 0..9 {
        let (step, _) = env.step(&NaoAct::zeros(N_JOINTS))?;
        assert!(!step.is_done());
    }
    let (step, record) = env.step_with_reset(&NaoAct::zeros(N_JOINTS))?;
    assert_eq!(step.is_truncated, vec![1]);
    assert_eq!(step.is_terminated, vec![0]);
    assert_eq!(record.get_scalar("episode_length")?, 10.0);
    assert_eq!(step.init_obs.map(|obs| obs.obs.len()), Some(OBS_LEN));
    assert_eq!(env.inner().count_steps(), 0);
    Ok(())
}

struct ZeroPolicy;

impl<E: Env<Act = NaoAct>> Policy<E> for ZeroPolicy {
    fn sample(&mut self, _obs: &E::Obs) -> NaoAct {
        NaoAct::zeros(N_JOINTS)
    }
}

#[test]
fn test_evaluate_zero_policy() -> Result<()> {
    let config = TimeLimitConfig::new(NaoStandupConfig::default(), 20);
    let mut evaluator = DefaultEvaluator::<TimeLimit<NaoStandup>>::build(&config, 0, 2)?;
    let record = evaluator.evaluate(&mut ZeroPolicy)?;
    assert_eq!(record.get_scalar("Episode length")?, 20.0);
    assert!(record.get_scalar("Episode return")?.is_finite());
    Ok(())
}
