use clap::Parser;
use colored::Colorize;
use poker_odds::equity::{calculate, EquityError, Odds, Options, DEFAULT_ITERATIONS};
use poker_odds::hand::{CardGroup, CardGroupError};
use poker_odds::variants::{Variant, VariantParseError};
use std::process::ExitCode;

/// Win and tie odds for Texas Hold'em and short-deck hands
#[derive(Parser, Debug)]
#[command(name = "poker-odds", version, about, long_about = None)]
struct Args {
    /// Known board cards, e.g. "2d Jd Tc"
    #[arg(short, long)]
    board: Option<String>,

    /// Game variant: full or short
    #[arg(short, long, default_value = "full")]
    game: String,

    /// Random boards to simulate when no board is given
    #[arg(short, long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: u64,

    /// Seed for reproducible simulations
    #[arg(long)]
    seed: Option<u64>,

    /// Players' hands, e.g. AsKs QdQc
    #[arg(required = true)]
    hands: Vec<String>,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("you must enter at least 2 hands")]
    TooFewHands,
    #[error(transparent)]
    Variant(#[from] VariantParseError),
    #[error(transparent)]
    Cards(#[from] CardGroupError),
    #[error(transparent)]
    Equity(#[from] EquityError),
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    println!("\n{}\n", "Poker Odds Calculator".bold().bright_magenta());
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", format!("error: {err}").bright_red());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let variant: Variant = args.game.parse()?;
    let board = args.board.as_deref().map(str::parse::<CardGroup>).transpose()?;
    let hands = args
        .hands
        .iter()
        .map(|h| h.parse::<CardGroup>())
        .collect::<Result<Vec<_>, _>>()?;
    if hands.len() < 2 {
        return Err(CliError::TooFewHands);
    }

    let mut options = Options::default().with_variant(variant).with_iterations(args.iterations);
    if let Some(seed) = args.seed {
        options = options.with_seed(seed);
    }
    let odds = calculate(&hands, board.as_ref(), &options)?;

    if let Some(board) = &board {
        println!("{}\n", format!("Board: {board}").bright_yellow().bold());
    }
    print_players(&hands, &odds);

    if board.as_ref().map_or(true, |b| b.len() <= 3) {
        println!(
            "\n{}",
            format!(
                "Simulated {} random boards in {:.1} seconds",
                odds.iterations(),
                odds.elapsed().as_secs_f64()
            )
            .dimmed()
        );
    }
    println!();
    Ok(())
}

fn print_players(hands: &[CardGroup], odds: &Odds) {
    let share = |i: usize| odds.equity(i).map_or(0, |e| e.equity() + e.tie_percentage());
    let best = (0..hands.len()).map(share).max().unwrap_or(0);
    let prefix = if odds.is_exhaustive() { "" } else { "~" };

    for (i, hand) in hands.iter().enumerate() {
        let equity = odds.equity(i).map(ToString::to_string).unwrap_or_default();
        let mut line = format!("Player #{}  {}  {prefix}{equity}", i + 1, hand.to_string().bright_cyan());
        if let Some(made) = odds.hand_rank(i) {
            line.push_str(&format!("  {made}"));
        }
        if share(i) == best {
            println!("{}", line.bold().bright_green());
        } else {
            println!("{}", line.bright_red());
        }
    }
}
