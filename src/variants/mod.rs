//! Game variant rules.
//!
//! A variant is plain data: which ranks are dealt, how the nine hand
//! categories are ordered, and which ace-low straights count. The evaluator
//! and the equity engine take a `&Rules` and never branch on the variant
//! itself, so adding a variant means adding a `Rules` value.

use crate::cards::Rank;
use crate::evaluator::Category;
use std::fmt;
use std::str::FromStr;

/// Rule set consulted by the evaluator and the equity engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Legal ranks, ascending.
    ranks: &'static [Rank],
    /// Comparison ordinal per category, indexed by [`Category::index`].
    ordinals: [u8; 9],
    /// A-2-3-4-5 counts as a five-high straight.
    pub low_ace_straight: bool,
    /// A-6-7-8-9 counts as a nine-high straight.
    pub nine_high_wheel: bool,
}

const SHORT_DECK_RANKS: [Rank; 9] = [
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

/// Full 52-card deck.
pub const STANDARD: Rules = Rules {
    ranks: &Rank::ALL,
    // high card, pair, two pair, trips, straight, flush, full house, quads, straight flush
    ordinals: [1, 2, 3, 4, 5, 6, 7, 8, 9],
    low_ace_straight: true,
    nine_high_wheel: false,
};

/// 36-card deck (six through ace). A flush beats a full house.
pub const SHORT_DECK: Rules = Rules {
    ranks: &SHORT_DECK_RANKS,
    ordinals: [1, 2, 3, 4, 5, 7, 6, 8, 9],
    low_ace_straight: false,
    nine_high_wheel: true,
};

impl Rules {
    pub fn ranks(&self) -> &'static [Rank] {
        self.ranks
    }

    pub fn min_rank(&self) -> Rank {
        self.ranks.first().copied().unwrap_or(Rank::Two)
    }

    pub fn allows(&self, rank: Rank) -> bool {
        self.ranks.contains(&rank)
    }

    pub fn ordinal(&self, category: Category) -> u8 {
        self.ordinals[category.index()]
    }

    /// Top ranks of the enabled ace-low straights: Five for A-2-3-4-5, Nine
    /// for A-6-7-8-9.
    pub fn wheel_tops(&self) -> impl Iterator<Item = Rank> {
        let low = self.low_ace_straight.then_some(Rank::Five);
        let nine = self.nine_high_wheel.then_some(Rank::Nine);
        low.into_iter().chain(nine)
    }

    pub fn is_wheel_top(&self, rank: Rank) -> bool {
        self.wheel_tops().any(|top| top == rank)
    }
}

/// Selects one of the built-in rule sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    #[default]
    Standard,
    ShortDeck,
}

impl Variant {
    pub const fn rules(self) -> &'static Rules {
        match self {
            Variant::Standard => &STANDARD,
            Variant::ShortDeck => &SHORT_DECK,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Standard => f.write_str("full"),
            Variant::ShortDeck => f.write_str("short"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VariantParseError {
    #[error("invalid game variant: {0}")]
    Invalid(String),
}

impl FromStr for Variant {
    type Err = VariantParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" | "standard" => Ok(Variant::Standard),
            "short" | "short-deck" | "shortdeck" => Ok(Variant::ShortDeck),
            _ => Err(VariantParseError::Invalid(s.to_string())),
        }
    }
}
