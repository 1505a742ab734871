use anyhow::Result;
use clap::Parser;
use log::info;
use nao_gym_core::{Env as _, TimeLimit, YamlConfig};
use nao_gym_env::{NaoAct, NaoStandup, NaoStandupConfig, RenderMode};
use nao_gym_sim::KinematicSimulatorConfig;

type Config = NaoStandupConfig<KinematicSimulatorConfig>;
type Env = TimeLimit<NaoStandup>;

/// Drives the standup task with zero or random actions and logs the rewards.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of episodes.
    #[arg(long, default_value_t = 2)]
    episodes: usize,

    /// Steps per episode.
    #[arg(long, default_value_t = 100)]
    max_steps: usize,

    /// Sample uniform random actions instead of zeros.
    #[arg(long, default_value_t = false)]
    random: bool,

    /// Throw tomatoes at the robot.
    #[arg(long, default_value_t = false)]
    tomatoes: bool,

    /// Render every step.
    #[arg(long, default_value_t = false)]
    render: bool,

    /// Environment configuration in YAML; overrides the flags above.
    #[arg(long)]
    config: Option<String>,

    /// Random seed.
    #[arg(long, default_value_t = 0)]
    seed: i64,
}

fn env_config(args: &Args) -> Result<Config> {
    match &args.config {
        Some(path) => Config::load(path),
        None => {
            let render_mode = if args.render {
                Some(RenderMode::Human)
            } else {
                None
            };
            Ok(Config::default()
                .throw_tomatoes(args.tomatoes)
                .render_mode(render_mode))
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mut env = Env::new(NaoStandup::build(&env_config(args)?, args.seed)?, args.max_steps);
    let n_actuators = env.inner().n_actuators();
    info!("Reward terms: {}", env.inner().reward_names().join(", "));
    let rng = fastrand::Rng::with_seed(args.seed as u64);

    for episode in 0..args.episodes {
        env.reset_with_index(episode)?;
        let mut episode_return = 0.0;

        loop {
            let act = if args.random {
                NaoAct::new((0..n_actuators).map(|_| rng.f64() * 2.0 - 1.0).collect())
            } else {
                NaoAct::zeros(n_actuators)
            };
            let (step, _) = env.step(&act)?;
            episode_return += step.reward[0];

            if step.is_done() {
                let terms = step
                    .info
                    .iter()
                    .map(|(name, value)| format!("{} = {:.5}", name, value))
                    .collect::<Vec<_>>()
                    .join(", ");
                info!(
                    "Episode {}, return = {:.3}, last step: {}",
                    episode, episode_return, terms
                );
                break;
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    run(&args)
}
