//! Equity engine.
//!
//! Given two or more hands and an optional partial board, estimate how often
//! each hand ends up best. Boards with 3 or 4 known cards are enumerated
//! exhaustively, a complete board is a single trial, and an empty board is
//! sampled with a Monte Carlo budget.

mod accumulator;
mod combinations;
mod simulation;

pub use accumulator::HandEquity;

use crate::cards::{Card, Rank};
use crate::deck::Deck;
use crate::evaluator::{evaluate, EvalError, Evaluation, MIN_CARDS};
use crate::hand::CardGroup;
use crate::variants::{Rules, Variant};
use log::debug;
use rand::Rng;
use simulation::{Completions, Table};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Monte Carlo budget used when none (or zero) is given.
pub const DEFAULT_ITERATIONS: u64 = 100_000;

/// Cards on a complete board.
pub const BOARD_CARDS: usize = 5;

/// Cooperative cancellation flag, cheap to clone and share across threads.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Calculation settings.
///
/// ```
/// use poker_odds::equity::Options;
/// use poker_odds::variants::Variant;
///
/// let opts = Options::default().with_variant(Variant::ShortDeck).with_seed(42);
/// assert_eq!(opts.variant, Variant::ShortDeck);
/// assert_eq!(opts.seed, Some(42));
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    pub variant: Variant,
    /// Monte Carlo trials for an empty board; 0 means [`DEFAULT_ITERATIONS`].
    pub iterations: u64,
    pub seed: Option<u64>,
    pub cancel: Option<CancelToken>,
}

impl Default for Options {
    fn default() -> Self {
        Self { variant: Variant::Standard, iterations: DEFAULT_ITERATIONS, seed: None, cancel: None }
    }
}

impl Options {
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set a deterministic RNG seed for reproducible sampling.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    fn budget(&self) -> u64 {
        match self.iterations {
            0 => DEFAULT_ITERATIONS,
            n => n,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EquityError {
    #[error("the board must contain 0, 3, 4 or 5 cards, got {0}")]
    InvalidBoardLength(usize),
    #[error("at least one hand is required")]
    NoHands,
    #[error("hand #{} must hold 1 or 2 cards, got {len}", .index + 1)]
    HandSize { index: usize, len: usize },
    #[error("card {card} is out of range: only ranks {min} through A are valid")]
    RankOutOfRange { card: Card, min: Rank },
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
    #[error("not enough cards left to complete the board: need {needed}, {remaining} remaining")]
    NotEnoughCards { needed: usize, remaining: usize },
    #[error("calculation cancelled")]
    Cancelled,
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Result of [`calculate`].
#[derive(Debug, Clone)]
pub struct Odds {
    equities: Vec<HandEquity>,
    hand_ranks: Vec<Option<Evaluation>>,
    iterations: u64,
    elapsed: Duration,
    exhaustive: bool,
}

impl Odds {
    /// One tally per input hand, in input order.
    pub fn equities(&self) -> &[HandEquity] {
        &self.equities
    }

    pub fn equity(&self, index: usize) -> Option<&HandEquity> {
        self.equities.get(index)
    }

    /// Made hand on the known board; `None` while hand and board hold fewer
    /// than five cards.
    pub fn hand_rank(&self, index: usize) -> Option<&Evaluation> {
        self.hand_ranks.get(index).and_then(Option::as_ref)
    }

    /// Trials actually run.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Every completion of the board was evaluated, so the figures are exact.
    pub fn is_exhaustive(&self) -> bool {
        self.exhaustive
    }
}

/// Compute win and tie shares for each hand.
///
/// ```
/// use poker_odds::equity::{calculate, Options};
/// use poker_odds::hand::CardGroup;
///
/// let hands: Vec<CardGroup> = vec!["AsKc".parse().unwrap(), "AdAh".parse().unwrap()];
/// let board: CardGroup = "2d Jd Tc 4s".parse().unwrap();
/// let odds = calculate(&hands, Some(&board), &Options::default()).unwrap();
/// assert_eq!(odds.iterations(), 44);
/// assert_eq!(odds.equities()[0].equity(), 9);
/// assert_eq!(odds.equities()[1].equity(), 91);
/// ```
pub fn calculate(
    hands: &[CardGroup],
    board: Option<&CardGroup>,
    options: &Options,
) -> Result<Odds, EquityError> {
    let started = Instant::now();
    let rules = options.variant.rules();
    let board = board.map(CardGroup::as_slice).unwrap_or(&[]);

    let used = validate(rules, hands, board)?;

    let hand_ranks = hands
        .iter()
        .map(|hand| made_hand(rules, hand, board))
        .collect::<Result<Vec<_>, _>>()?;

    let draw = BOARD_CARDS - board.len();
    let completions = if draw == 0 {
        Completions::complete()
    } else {
        let deck = Deck::remaining(rules, &used);
        if deck.len() < draw {
            return Err(EquityError::NotEnoughCards { needed: draw, remaining: deck.len() });
        }
        if board.is_empty() {
            let seed = options.seed.unwrap_or_else(|| rand::rng().random());
            Completions::Sampled { deck, draw, iterations: options.budget(), seed }
        } else {
            Completions::enumerate(&deck, draw)
        }
    };

    debug!(
        "{} hands, {} board cards, variant {}: {} {} trials",
        hands.len(),
        board.len(),
        options.variant,
        completions.trials(),
        if board.is_empty() { "sampled" } else { "enumerated" },
    );

    let table = Table { rules, hands, board, cancel: options.cancel.as_ref() };
    let equities = table.run(&completions)?;
    let elapsed = started.elapsed();

    debug!("calculation finished in {:.3}s", elapsed.as_secs_f64());

    Ok(Odds {
        equities,
        hand_ranks,
        iterations: completions.trials(),
        elapsed,
        exhaustive: !board.is_empty(),
    })
}

/// Check inputs before any trial runs and return the set of cards in play.
fn validate(rules: &Rules, hands: &[CardGroup], board: &[Card]) -> Result<HashSet<Card>, EquityError> {
    if ![0, 3, 4, BOARD_CARDS].contains(&board.len()) {
        return Err(EquityError::InvalidBoardLength(board.len()));
    }

    if hands.is_empty() {
        return Err(EquityError::NoHands);
    }

    if let Some((index, hand)) = hands.iter().enumerate().find(|(_, h)| !(1..=2).contains(&h.len())) {
        return Err(EquityError::HandSize { index, len: hand.len() });
    }

    let all_cards = move || hands.iter().flat_map(CardGroup::iter).chain(board.iter()).copied();

    if let Some(card) = all_cards().find(|c| !rules.allows(c.rank())) {
        return Err(EquityError::RankOutOfRange { card, min: rules.min_rank() });
    }

    let mut used = HashSet::with_capacity(hands.len() * 2 + board.len());
    for card in all_cards() {
        if !used.insert(card) {
            return Err(EquityError::DuplicateCard(card));
        }
    }
    Ok(used)
}

fn made_hand(rules: &Rules, hand: &CardGroup, board: &[Card]) -> Result<Option<Evaluation>, EvalError> {
    if hand.len() + board.len() < MIN_CARDS {
        return Ok(None);
    }
    let mut cards = hand.as_slice().to_vec();
    cards.extend_from_slice(board);
    evaluate(rules, &cards).map(Some)
}
