mod config;
mod console_io;
mod error;
mod human_input;
mod menu;
mod participants;
mod render;
mod runner;

use std::io;
use std::time::Duration;

use clap::Parser;
use common::config::{ConfigError, Validate};
use common::games::SessionRng;
use common::{debug_log, log, logger};

use config::{GameMode, get_config_manager};
use runner::{GameRunner, RunnerSettings};

#[derive(Parser)]
#[command(name = "tictactoe")]
struct Args {
    /// Skip the menu and play this mode
    #[arg(long, value_enum)]
    mode: Option<GameMode>,

    /// Seed for the session RNG (first mover and seating)
    #[arg(long)]
    seed: Option<u64>,

    /// Path to the YAML config file
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    bot_delay_ms: Option<u64>,

    #[arg(long)]
    show_search_stats: bool,

    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.as_deref());
    let mut config = config_manager.get_config()?;
    if let Some(bot_delay_ms) = args.bot_delay_ms {
        config.bot_delay_ms = bot_delay_ms;
        config.validate().map_err(ConfigError::Validation)?;
    }

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose || config.verbose_logging);
    debug_log!("Loaded config: {:?}", config);

    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    debug_log!("Session seed: {}", rng.seed());

    let settings = RunnerSettings {
        bot_delay: Duration::from_millis(config.bot_delay_ms),
        show_search_stats: args.show_search_stats || config.show_search_stats,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut runner = GameRunner::new(stdin.lock(), stdout.lock(), settings);

    let summary = runner.run_session(args.mode.or(config.default_mode), &mut rng)?;
    log!(
        "Session finished: {:?} after {} moves, winner {}",
        summary.status,
        summary.move_count,
        summary.winner.unwrap_or("none")
    );
    for bot in &summary.bots {
        debug_log!(
            "{} as {}: {} moves, {} nodes, {:?}",
            bot.name,
            bot.mark,
            bot.moves,
            bot.stats.nodes_visited,
            bot.stats.elapsed
        );
    }

    Ok(())
}
