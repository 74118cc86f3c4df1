use crate::cards::{Card, Suit};
use crate::hand::suit_counts;

/// The suit holding five or more of the cards, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuitInfo {
    pub flush_suit: Option<Suit>,
}

impl SuitInfo {
    pub fn detect(cards: &[Card]) -> Self {
        let counts = suit_counts(cards);
        let flush_suit = Suit::ALL.into_iter().find(|s| counts[s.index()] >= 5);
        SuitInfo { flush_suit }
    }

    pub fn is_flush(&self) -> bool {
        self.flush_suit.is_some()
    }
}
