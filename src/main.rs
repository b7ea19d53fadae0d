//! Yahtzee Hold Planner - CLI
//!
//! Computes the expected-value-maximizing hold for upper-section Yahtzee.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use yahtzee_planner::{
    commands::{
        SolveConfig, analyze_hand, list_holds, print_table_statistics, run_example, run_table,
        score_hand, solve_hand,
    },
    core::Hand,
    output::{print_analysis_result, print_holds_result, print_score_result, print_solve_result},
};

#[derive(Parser)]
#[command(
    name = "yahtzee_planner",
    about = "Best dice to hold for upper-section Yahtzee, by exhaustive expected value",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of sides on each die
    #[arg(short, long, global = true, default_value_t = SolveConfig::DEFAULT_SIDES)]
    sides: u8,

    /// Largest hand (in dice) the planner will search, at most 16
    #[arg(
        long,
        global = true,
        default_value_t = SolveConfig::DEFAULT_MAX_DICE,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(0..=16)
    )]
    max_dice: usize,

    /// Largest die (in sides) the planner will search
    #[arg(long, global = true, default_value_t = SolveConfig::DEFAULT_MAX_SIDES)]
    max_sides: u8,

    /// Enable debug logging (otherwise RUST_LOG applies)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the built-in example hand (1, 1, 1, 6, 6) (default)
    Example,

    /// Find the best hold for a hand
    Solve {
        /// Dice faces, e.g. "1,1,1,6,6" or 11166
        hand: String,
    },

    /// Rank every hold of a hand by expected value
    Analyze {
        /// Dice faces, e.g. "1,1,1,6,6" or 11166
        hand: String,

        /// Number of holds to show
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },

    /// List every distinct hold of a hand
    Holds {
        /// Dice faces, e.g. "1,1,1,6,6" or 11166
        hand: String,
    },

    /// Upper-section score of a hand
    Score {
        /// Dice faces, e.g. "1,1,1,6,6" or 11166
        hand: String,
    },

    /// Best hold for every distinct hand of a given size
    Table {
        /// Dice per hand
        #[arg(short, long, default_value = "5")]
        dice: usize,

        /// Number of strongest and weakest hands to show
        #[arg(short = 'n', long, default_value = "5")]
        top: usize,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("yahtzee_planner=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Parse a HAND argument into a config carrying the global options
fn hand_config(text: &str, cli: &Cli) -> Result<SolveConfig> {
    let hand = Hand::parse(text, cli.sides).with_context(|| format!("Invalid hand '{text}'"))?;
    Ok(base_config(hand.dice().to_vec(), cli))
}

fn base_config(hand: Vec<u8>, cli: &Cli) -> SolveConfig {
    let mut config = SolveConfig::new(hand);
    config.num_die_sides = cli.sides;
    config.max_dice = cli.max_dice;
    config.max_sides = cli.max_sides;
    config
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Default to the example if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Example);

    match command {
        Commands::Example => {
            let result = run_example().context("Example hand failed")?;
            print_solve_result(&result, cli.verbose);
        }
        Commands::Solve { hand } => {
            let config = hand_config(hand, &cli)?;
            let result = solve_hand(&config).context("Cannot solve hand")?;
            print_solve_result(&result, true);
        }
        Commands::Analyze { hand, top } => {
            let config = hand_config(hand, &cli)?;
            let result = analyze_hand(&config, *top).context("Cannot analyze hand")?;
            print_analysis_result(&result);
        }
        Commands::Holds { hand } => {
            let config = hand_config(hand, &cli)?;
            let result = list_holds(&config).context("Cannot list holds")?;
            print_holds_result(&result);
        }
        Commands::Score { hand } => {
            let config = hand_config(hand, &cli)?;
            let result = score_hand(&config).context("Cannot score hand")?;
            print_score_result(&result);
        }
        Commands::Table { dice, top } => {
            let limits = base_config(Vec::new(), &cli);
            let stats = run_table(*dice, &limits, true).context("Cannot build strategy table")?;
            print_table_statistics(&stats, *top);
        }
    }

    Ok(())
}
