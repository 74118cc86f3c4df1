pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

mod describe;

use crate::cards::{Card, Rank};
use crate::variants::Rules;
use core::cmp::Ordering;

/// Fewest cards a hand can be classified from.
pub const MIN_CARDS: usize = 5;
/// Most cards a hand can be classified from (two hole cards plus a full board).
pub const MAX_CARDS: usize = 7;

/// Compact, comparable hand strength. Higher is better.
/// Encodes the rules' category ordinal and ranked tiebreakers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue(u64);

/// The nine poker hand categories.
///
/// Not `Ord`: relative strength is per variant, see [`Rules::ordinal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Category {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

impl Category {
    /// Every category in standard strength order, weakest first.
    pub const ALL: [Category; 9] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    /// Position in [`Category::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Detailed evaluation result. `value` drives ordering.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    /// Best five cards, tie-break order. A wheel ends with its Ace.
    pub best_five: [Card; 5],
    value: HandValue,
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Evaluation {}

impl Evaluation {
    /// Return the packed comparable value for ordering/caching.
    pub const fn value(&self) -> HandValue {
        self.value
    }

    /// Category ordinal under the rules this hand was evaluated with.
    pub const fn ordinal(&self) -> u8 {
        self.value.ordinal()
    }

    /// Tie-break ranks, most significant first.
    pub fn tie_break_ranks(&self) -> [Rank; 5] {
        self.best_five.map(Card::rank)
    }
}

impl HandValue {
    const ORDINAL_SHIFT: u32 = 48;
    const RANK_STRIDE: u32 = 6;

    /// Return the packed comparable value.
    pub const fn raw(self) -> u64 {
        self.0
    }

    pub const fn ordinal(self) -> u8 {
        (self.0 >> Self::ORDINAL_SHIFT) as u8
    }

    /// Pack a category ordinal and five rank tiebreakers into a comparable value.
    pub fn from_parts(ordinal: u8, ranks: &[Rank; 5]) -> Self {
        // [ ordinal (8 bits) | r0 (6) | r1 (6) | r2 (6) | r3 (6) | r4 (6) | 18 zero bits ]
        let mut v: u64 = (ordinal as u64) << Self::ORDINAL_SHIFT;
        for (i, r) in ranks.iter().enumerate() {
            let offset = Self::ORDINAL_SHIFT - Self::RANK_STRIDE * (i as u32 + 1);
            v |= (r.value() as u64) << offset;
        }
        HandValue(v)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("not enough cards to evaluate: {0} (need at least 5)")]
    NotEnoughCards(usize),
    #[error("too many cards to evaluate: {0} (at most 7)")]
    TooManyCards(usize),
}

/// Classify the best five-card hand contained in 5 to 7 distinct cards.
///
/// ```
/// use poker_odds::evaluator::{evaluate, Category};
/// use poker_odds::hand::CardGroup;
/// use poker_odds::variants::STANDARD;
///
/// let cards: CardGroup = "Ah 9c Kc Jc Qc Tc 2c".parse().unwrap();
/// let eval = evaluate(&STANDARD, cards.as_slice()).unwrap();
/// assert_eq!(eval.category, Category::StraightFlush);
/// assert_eq!(eval.to_string(), "King high straight flush");
/// ```
pub fn evaluate(rules: &Rules, cards: &[Card]) -> Result<Evaluation, EvalError> {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    // Build analysis once (sorted cards, rank groups, flush/straight info)
    let analysis = HandAnalysis::new(rules, cards)?;

    // Check categories in priority order (highest to lowest)
    for detector in DETECTORS.iter() {
        if let Some(best_five) = detector.detect(&analysis) {
            return Ok(analysis.build_evaluation(detector.category(), best_five));
        }
    }

    // HighCard always matches once five cards are present
    Err(EvalError::NotEnoughCards(cards.len()))
}

/// Compare two evaluations made under the same rules.
///
/// ```
/// use poker_odds::evaluator::{compare, evaluate};
/// use poker_odds::hand::CardGroup;
/// use poker_odds::variants::STANDARD;
/// use std::cmp::Ordering;
///
/// let board: CardGroup = "Qc Jd 9h 3s 2c".parse().unwrap();
/// let aces: CardGroup = "As Ah".parse().unwrap();
/// let kings: CardGroup = "Ks Kh".parse().unwrap();
/// let a = evaluate(&STANDARD, aces.concat(&board).as_slice()).unwrap();
/// let b = evaluate(&STANDARD, kings.concat(&board).as_slice()).unwrap();
/// assert_eq!(compare(&a, &b), Ordering::Greater);
/// ```
pub fn compare(a: &Evaluation, b: &Evaluation) -> Ordering {
    a.cmp(b)
}
