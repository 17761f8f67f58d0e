use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use td_tictactoe::agents::{Agent, InteractiveAgent, LineInput, TdAgent};
use td_tictactoe::core::{GameRng, Player};
use td_tictactoe::persistence::policy_path;
use td_tictactoe::training::{ConsoleObserver, SelfPlayDriver, SilentObserver};
use td_tictactoe::{AppConfig, PlayError};

/// Names of the two learning seats; policy files are keyed on these.
const TRAINING_NAMES: (&str, &str) = ("p1", "p2");

#[derive(Parser)]
#[command(author, version, about = "Tic-tac-toe by temporal-difference self-play", long_about = None)]
struct Cli {
    /// TOML configuration file. Missing files fall back to defaults.
    #[arg(long, short, global = true, default_value = "tictactoe.toml")]
    config: PathBuf,

    /// Seed for every agent RNG. Overrides the config file.
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Train two TD agents against each other", alias = "t")]
    Train {
        /// Episodes to play. Overrides the config file.
        #[arg(long, short)]
        episodes: Option<usize>,

        /// Directory to read existing policies from before training.
        #[arg(long)]
        load_dir: Option<PathBuf>,

        /// Directory the trained policies are written to.
        #[arg(long, default_value = "policies")]
        save_dir: PathBuf,
    },
    #[command(about = "Play against a trained agent", alias = "p")]
    Play {
        /// Policy file for the computer seat.
        #[arg(long, default_value = "policies/policy_p1.bin")]
        policy: PathBuf,

        /// Which seat the human takes.
        #[arg(long, value_enum, default_value_t = Seat::O)]
        human: Seat,

        /// Games to play.
        #[arg(long, short, default_value_t = 1)]
        episodes: usize,
    },
    #[command(about = "Print the default configuration as TOML")]
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum Seat {
    X,
    O,
}

impl From<Seat> for Player {
    fn from(seat: Seat) -> Self {
        match seat {
            Seat::X => Player::X,
            Seat::O => Player::O,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    match cli.command {
        Command::Train {
            episodes,
            load_dir,
            save_dir,
        } => {
            if let Some(episodes) = episodes {
                config.driver.episodes = episodes;
            }
            train(&config, load_dir.as_deref(), &save_dir)
        }
        Command::Play {
            policy,
            human,
            episodes,
        } => {
            config.driver.episodes = episodes;
            play(&config, &policy, human.into())
        }
        Command::Config => {
            print!("{}", AppConfig::default_toml()?);
            Ok(())
        }
    }
}

fn base_rng(config: &AppConfig) -> GameRng {
    config.seed.map_or_else(GameRng::from_entropy, GameRng::new)
}

fn train(config: &AppConfig, load_dir: Option<&Path>, save_dir: &Path) -> anyhow::Result<()> {
    config.validate()?;
    let mut rng = base_rng(config);
    let (x_name, o_name) = TRAINING_NAMES;
    let mut x = TdAgent::with_rng(x_name, config.agent.clone(), rng.fork());
    let mut o = TdAgent::with_rng(o_name, config.agent.clone(), rng.fork());

    if let Some(dir) = load_dir {
        for agent in [&mut x, &mut o] {
            let path = policy_path(dir, agent.name());
            // A failed load leaves the agent with an empty table.
            let _ = agent.load_policy(&path);
        }
    }

    log::info!(
        "training for {} episodes (seed {})",
        config.driver.episodes,
        rng.seed()
    );
    let mut driver = SelfPlayDriver::new(x, o, config.driver.clone());
    let summary = driver.run(&mut SilentObserver)?;
    log::info!(
        "win rate {:.3} / {:.3}, draw rate {:.3}, average length {:.2}",
        summary.win_rate(Player::X),
        summary.win_rate(Player::O),
        summary.draw_rate(),
        summary.average_game_length(),
    );

    let (x, o) = driver.into_agents();
    for agent in [&x, &o] {
        let path = policy_path(save_dir, agent.name());
        agent
            .save_policy(&path)
            .with_context(|| format!("saving policy for {}", agent.name()))?;
    }
    Ok(())
}

fn play(config: &AppConfig, policy: &Path, human_seat: Player) -> anyhow::Result<()> {
    config.validate()?;
    let mut rng = base_rng(config);

    let mut computer = TdAgent::with_rng("computer", config.agent.clone().greedy(), rng.fork());
    if computer.load_policy(policy).is_err() {
        log::warn!("computer is playing without a trained policy");
    }
    let human = InteractiveAgent::new("human", LineInput::stdin());

    let (x, o): (Box<dyn Agent>, Box<dyn Agent>) = match human_seat {
        Player::X => (Box::new(human), Box::new(computer)),
        Player::O => (Box::new(computer), Box::new(human)),
    };

    let mut driver = SelfPlayDriver::new(x, o, config.driver.clone());
    let mut observer = ConsoleObserver::stdout();
    match driver.run(&mut observer) {
        Ok(summary) => {
            println!(
                "{} wins {}, {} wins {}, {} ties",
                driver.agent(Player::X).name(),
                summary.x_wins,
                driver.agent(Player::O).name(),
                summary.o_wins,
                summary.draws,
            );
            Ok(())
        }
        Err(PlayError::InputClosed) => {
            log::info!("input closed, ending session");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
