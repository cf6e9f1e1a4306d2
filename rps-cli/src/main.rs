use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rps_cli::{parse_pattern, run_session, simulate, standard_roster, CliError};
use rps_core::{EngineConfig, RoundEngine};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rps", about = "Rock Paper Scissors against a strategy-switching computer")]
struct Cli {
    /// Log engine decisions at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Seed for a reproducible session
    #[arg(long, env = "RPS_SEED", global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play interactively, one move per line
    Play {
        /// Keep only the most recent N rounds in the log
        #[arg(long)]
        log_capacity: Option<usize>,
    },
    /// Play a fixed move pattern against the computer
    Simulate {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value_t = 100)]
        rounds: u32,

        /// Player moves, cycled (e.g. RPS, RRP)
        #[arg(long, default_value = "RPS")]
        moves: String,

        /// Print the report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Play { log_capacity } => {
            let config = EngineConfig {
                seed: cli.seed,
                log_capacity,
            };
            let mut engine = RoundEngine::from_config(standard_roster(), &config);
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            run_session(&mut engine, stdin.lock(), &mut stdout)
        }
        Command::Simulate {
            rounds,
            moves,
            json,
        } => {
            let pattern = parse_pattern(&moves).map_err(rps_core::GameError::from)?;
            let config = EngineConfig {
                seed: cli.seed,
                log_capacity: None,
            };
            let mut engine = RoundEngine::from_config(standard_roster(), &config);
            let report = simulate(&mut engine, &pattern, rounds)?;
            if json {
                let text = serde_json::to_string_pretty(&report).map_err(io::Error::from)?;
                println!("{text}");
            } else {
                println!("{}", report.describe());
            }
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
