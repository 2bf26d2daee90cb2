//! Mancala CLI - Command-line interface
//!
//! Commands:
//! - show: Print a fresh board
//! - replay: Apply a list of moves and print the result
//! - play: Two players at one terminal, one move per line

mod play_cmd;
mod render;
mod replay_cmd;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mancala_core::Board;

#[derive(Parser)]
#[command(name = "mancala")]
#[command(about = "Kalah (6 pits, 4 seeds) rules engine")]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command
#[derive(Args, Clone, Copy, Debug, Default)]
pub struct GlobalOpts {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print boards as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a fresh board
    Show,
    /// Apply moves in order and print the final board
    Replay(replay_cmd::ReplayArgs),
    /// Play interactively, reading moves from stdin
    Play,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.global.verbose);

    match cli.command {
        Commands::Show => {
            render::print_board(&Board::new().view(), cli.global.json)?;
            Ok(())
        }
        Commands::Replay(args) => replay_cmd::run(args, cli.global),
        Commands::Play => play_cmd::run(cli.global),
    }
}

/// Install the stderr subscriber. `RUST_LOG` overrides the `-v` level.
fn init_logging(verbosity: u8) {
    let default_directive = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
