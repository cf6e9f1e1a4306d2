//! Terminal front end for the strategy engine.

use std::io::{self, BufRead, Write};

use cheat_strategy::CheatStrategy;
use last_used_strategy::LastUsedStrategy;
use least_used_strategy::LeastUsedStrategy;
use most_used_strategy::MostUsedStrategy;
use random_strategy::RandomStrategy;
use rps_core::{
    GameError, HistorySnapshot, InvalidMoveError, Move, RandomSource, RoundEngine, RoundLog,
    Roster, StrategyKind, StrategyUsage, Tally,
};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Game(#[from] GameError),
}

/// The five built-in strategies.
pub fn standard_roster() -> Roster {
    Roster::new(
        CheatStrategy,
        LeastUsedStrategy,
        MostUsedStrategy,
        LastUsedStrategy,
        RandomStrategy,
    )
}

/// Stats panel text.
pub fn render_stats(tally: &Tally) -> String {
    format!(
        "Player Wins: {}\nComputer Wins: {}\nTies: {}",
        tally.player_wins, tally.computer_wins, tally.ties
    )
}

/// Strategy counts in display order, e.g. `Cheat: 2, Least Used: 0, ...`.
pub fn render_usage(usage: &StrategyUsage) -> String {
    StrategyKind::ALL
        .iter()
        .map(|kind| format!("{}: {}", kind, usage.get(*kind)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Results area: the retained rounds, oldest first, and their strategy mix.
pub fn render_log(log: &RoundLog) -> String {
    let header = if log.evicted() > 0 {
        format!("Results ({} shown, {} dropped)", log.len(), log.evicted())
    } else {
        format!("Results ({} shown)", log.len())
    };
    let mut lines = vec![header];
    lines.extend(
        log.records()
            .map(|record| format!("{}. {}", record.round, record.describe())),
    );
    lines.push(format!("Strategies: {}", render_usage(&log.strategy_usage())));
    lines.join("\n")
}

fn is_quit(line: &str) -> bool {
    matches!(line.to_ascii_lowercase().as_str(), "q" | "quit")
}

fn is_log(line: &str) -> bool {
    line.eq_ignore_ascii_case("log")
}

/// Interactive loop: one move per line until `q`, `quit` or end of input.
/// `log` prints the retained results.
///
/// Bad input, including bytes that are not UTF-8, is reported and the
/// session continues. Read failures and other engine errors end it.
pub fn run_session<R, I, O>(
    engine: &mut RoundEngine<R>,
    mut input: I,
    output: &mut O,
) -> Result<(), CliError>
where
    R: RandomSource,
    I: BufRead,
    O: Write,
{
    writeln!(
        output,
        "Choose your move: [R]ock, [P]aper, [S]cissors, log or [Q]uit"
    )?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let text = String::from_utf8_lossy(&buf);
        let line = text.trim();
        if line.is_empty() {
            continue;
        }
        if is_quit(line) {
            break;
        }
        if is_log(line) {
            writeln!(output, "{}", render_log(engine.log()))?;
            continue;
        }

        match engine.play(line) {
            Ok(record) => {
                writeln!(output, "{}", record.describe())?;
                writeln!(output, "{}", render_stats(&engine.tally()))?;
            }
            Err(GameError::InvalidMove(err)) => {
                warn!(input = line, "rejected move");
                writeln!(output, "{err}")?;
            }
            Err(err) => return Err(err.into()),
        }
    }

    writeln!(
        output,
        "Game Stats\n{}\n{}",
        render_stats(&engine.tally()),
        render_log(engine.log())
    )?;
    Ok(())
}

/// Parse a move pattern such as `RPS` or `rrp`, one move per character.
pub fn parse_pattern(pattern: &str) -> Result<Vec<Move>, InvalidMoveError> {
    let moves = pattern
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_string().parse::<Move>())
        .collect::<Result<Vec<_>, _>>()?;
    if moves.is_empty() {
        return Err(InvalidMoveError(pattern.to_string()));
    }
    Ok(moves)
}

/// Aggregated results for a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    /// Player moves as symbols, e.g. `RPS`.
    pub pattern: String,
    pub rounds: u32,
    pub tally: Tally,
    pub usage: StrategyUsage,
    pub history: HistorySnapshot,
}

impl SimulationReport {
    pub fn describe(&self) -> String {
        format!(
            "pattern: {}\nrounds: {}\n{}\nstrategies: {}",
            self.pattern,
            self.rounds,
            self.tally.describe(),
            render_usage(&self.usage)
        )
    }
}

/// Play `rounds` rounds with the player cycling through `pattern`.
pub fn simulate<R: RandomSource>(
    engine: &mut RoundEngine<R>,
    pattern: &[Move],
    rounds: u32,
) -> Result<SimulationReport, GameError> {
    for player_move in pattern.iter().cycle().take(rounds as usize) {
        engine.play_round(*player_move)?;
    }

    Ok(SimulationReport {
        pattern: pattern.iter().map(|mv| mv.symbol()).collect(),
        rounds: engine.rounds_played(),
        tally: engine.tally(),
        usage: engine.usage(),
        history: engine.history(),
    })
}
