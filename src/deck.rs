use crate::cards::{Card, Suit};
use crate::variants::Rules;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// The legal cards of a variant, minus whatever has been removed.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use poker_odds::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        Self::for_rules(&crate::variants::STANDARD)
    }

    /// Every suit crossed with the variant's rank universe.
    ///
    /// ```
    /// use poker_odds::deck::Deck;
    /// use poker_odds::variants::SHORT_DECK;
    ///
    /// assert_eq!(Deck::for_rules(&SHORT_DECK).len(), 36);
    /// ```
    pub fn for_rules(rules: &Rules) -> Self {
        let mut cards = Vec::with_capacity(Suit::ALL.len() * rules.ranks().len());
        for &s in &Suit::ALL {
            for &r in rules.ranks() {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    /// The deck left after dealing `used`.
    pub fn remaining(rules: &Rules, used: &HashSet<Card>) -> Self {
        let mut deck = Self::for_rules(rules);
        deck.cards.retain(|c| !used.contains(c));
        deck
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Move `n` uniformly chosen cards to the front (partial Fisher-Yates) and
    /// return them. The rest of the deck is left in arbitrary order.
    pub fn sample_front<R: Rng + ?Sized>(&mut self, rng: &mut R, n: usize) -> &[Card] {
        let (picked, _) = self.cards.partial_shuffle(rng, n);
        picked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;
    use crate::variants::{SHORT_DECK, STANDARD};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn standard_deck_has_52_distinct_cards() {
        let d = Deck::standard();
        assert_eq!(d.len(), 52);
        let set: HashSet<Card> = d.as_slice().iter().copied().collect();
        assert_eq!(set.len(), 52);
    }

    #[test]
    fn short_deck_starts_at_six() {
        let d = Deck::for_rules(&SHORT_DECK);
        assert_eq!(d.len(), 36);
        assert!(d.as_slice().iter().all(|c| c.rank() >= Rank::Six));
    }

    #[test]
    fn remaining_excludes_used_cards() {
        let used: HashSet<Card> =
            [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::Two, Suit::Clubs)].into();
        let d = Deck::remaining(&STANDARD, &used);
        assert_eq!(d.len(), 50);
        assert!(d.as_slice().iter().all(|c| !used.contains(c)));
    }

    #[test]
    fn seeded_sampling_is_reproducible_and_distinct() {
        let mut d1 = Deck::standard();
        let mut d2 = Deck::standard();
        let mut r1 = ChaCha8Rng::seed_from_u64(42);
        let mut r2 = ChaCha8Rng::seed_from_u64(42);
        let a = d1.sample_front(&mut r1, 5).to_vec();
        let b = d2.sample_front(&mut r2, 5).to_vec();
        assert_eq!(a, b);
        let set: HashSet<Card> = a.iter().copied().collect();
        assert_eq!(set.len(), 5);
        assert_eq!(d1.len(), 52);
    }
}
