//! Bongo Solver - CLI
//!
//! Finds the highest-scoring 5x5 letter board for a tile inventory and a
//! multiplier schema by exhaustive parallel search.

use anyhow::{Context, Result};
use bongo_solver::{
    commands::{list_candidates, run_search, score_board},
    config::{Puzzle, load_puzzle},
    core::Dictionary,
    output::{print_candidates, print_score_report, print_search_report},
    solver::{DEFAULT_CHUNK_SIZE, SearchConfig, WildcardPlacement},
    wordlists::loader::{embedded, load_from_file},
};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "bongo_solver",
    about = "Exhaustive parallel solver for the 5x5 letter-placement puzzle",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle TOML with tiles and multiplier schema (default: built-in puzzle)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for the highest-scoring board (default)
    ///
    /// The search is exhaustive: it evaluates pool^5 boards. The built-in
    /// puzzle with the embedded word list yields about 193 candidate rows,
    /// roughly 2.7e11 boards, which takes hours even on many cores. Run
    /// `candidates` first to see the size, and use --config or --wordlist
    /// to shrink it.
    Search(SearchArgs),

    /// List the words usable as rows
    Candidates {
        /// Emit one candidate per possible wildcard cell
        #[arg(long)]
        exhaustive_wildcard: bool,
    },

    /// Validate and score a single board
    Score {
        /// Row words, top to bottom
        #[arg(required = true, num_args = 1..)]
        rows: Vec<String>,

        /// Cell covered by the wildcard as ROW,COL (1-based)
        #[arg(long, value_parser = parse_cell)]
        wildcard: Option<(usize, usize)>,
    },
}

#[derive(Args)]
struct SearchArgs {
    /// Boards evaluated per work unit
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: u64,

    /// Worker threads (default: available parallelism)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Emit one candidate per possible wildcard cell
    #[arg(long)]
    exhaustive_wildcard: bool,

    /// Hide the progress bar
    #[arg(long)]
    no_progress: bool,
}

impl Default for SearchArgs {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            threads: None,
            exhaustive_wildcard: false,
            no_progress: false,
        }
    }
}

const fn placement(exhaustive: bool) -> WildcardPlacement {
    if exhaustive {
        WildcardPlacement::Exhaustive
    } else {
        WildcardPlacement::Greedy
    }
}

/// Parse a 1-based `ROW,COL` pair into 0-based coordinates
fn parse_cell(text: &str) -> Result<(usize, usize), String> {
    let (row, col) = text
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got '{text}'"))?;
    let parse = |part: &str| -> Result<usize, String> {
        match part.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(n - 1),
            _ => Err(format!("'{part}' is not a positive number")),
        }
    };
    Ok((parse(row)?, parse(col)?))
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Load the dictionary selected by the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    match wordlist {
        "embedded" => Ok(embedded()),
        path => load_from_file(path).with_context(|| format!("Failed to load wordlist {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let puzzle: Puzzle = load_puzzle(cli.config.as_deref()).with_context(|| {
        cli.config.as_deref().map_or_else(
            || "Invalid built-in puzzle".to_string(),
            |path: &Path| format!("Failed to load puzzle from {}", path.display()),
        )
    })?;
    let dictionary = load_dictionary(&cli.wordlist)?;
    info!(
        words = dictionary.len(),
        tiles = puzzle.inventory.total_tiles(),
        "Puzzle ready"
    );

    // Default to Search if no command given
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Search(SearchArgs::default()));

    match command {
        Commands::Search(args) => run_search_command(&puzzle, &dictionary, &args),
        Commands::Candidates {
            exhaustive_wildcard,
        } => {
            let report = list_candidates(&puzzle, &dictionary, placement(exhaustive_wildcard));
            print_candidates(&report);
            Ok(())
        }
        Commands::Score { rows, wildcard } => {
            let report = score_board(&rows, wildcard, &puzzle, &dictionary)?;
            print_score_report(&report, &puzzle.schema);
            Ok(())
        }
    }
}

fn run_search_command(puzzle: &Puzzle, dictionary: &Dictionary, args: &SearchArgs) -> Result<()> {
    let config = SearchConfig {
        chunk_size: args.chunk_size,
        threads: args.threads,
        placement: placement(args.exhaustive_wildcard),
    };
    let report =
        run_search(puzzle, dictionary, config, !args.no_progress).context("Search failed")?;
    print_search_report(&report, &puzzle.schema);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cell_is_one_based() {
        assert_eq!(parse_cell("1,1"), Ok((0, 0)));
        assert_eq!(parse_cell("5, 3"), Ok((4, 2)));
    }

    #[test]
    fn parse_cell_rejects_bad_input() {
        assert!(parse_cell("0,1").is_err());
        assert!(parse_cell("2").is_err());
        assert!(parse_cell("a,b").is_err());
    }

    #[test]
    fn cli_defaults_to_search() {
        let cli = Cli::try_parse_from(["bongo_solver"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.wordlist, "embedded");
    }

    #[test]
    fn cli_parses_score() {
        let cli = Cli::try_parse_from([
            "bongo_solver",
            "score",
            "board",
            "stone",
            "--wildcard",
            "2,3",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Score { rows, wildcard }) => {
                assert_eq!(rows, ["board", "stone"]);
                assert_eq!(wildcard, Some((1, 2)));
            }
            _ => panic!("expected score command"),
        }
    }

    #[test]
    fn search_help_states_scale() {
        use clap::CommandFactory;

        let mut command = Cli::command();
        let search = command.find_subcommand_mut("search").unwrap();
        let help = search.render_long_help().to_string();
        assert!(help.contains("exhaustive"));
        assert!(help.contains("candidates"));
    }
}
