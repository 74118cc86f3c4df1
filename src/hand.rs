use crate::cards::{Card, CardParseError};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardGroupError {
    #[error("invalid cards: {0}")]
    Malformed(String),
    #[error(transparent)]
    Card(#[from] CardParseError),
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
}

/// Sort direction for [`CardGroup::sort_cards`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

/// An ordered group of cards: a player's hand or the shared board.
///
/// ```
/// use poker_odds::hand::CardGroup;
///
/// let hand: CardGroup = "Ac, 4d Th".parse().unwrap();
/// assert_eq!(hand.len(), 3);
/// assert_eq!(hand.to_string(), "Ac 4d Th");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardGroup {
    cards: Vec<Card>,
}

impl CardGroup {
    /// Wrap cards without checking for repeats.
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn try_new(cards: Vec<Card>) -> Result<Self, CardGroupError> {
        let mut seen: HashSet<Card> = HashSet::with_capacity(cards.len());
        for &card in &cards {
            if !seen.insert(card) {
                return Err(CardGroupError::DuplicateCard(card));
            }
        }
        Ok(Self { cards })
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

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// A new group holding `self`'s cards followed by `other`'s.
    pub fn concat(&self, other: &CardGroup) -> CardGroup {
        let mut cards = Vec::with_capacity(self.len() + other.len());
        cards.extend_from_slice(&self.cards);
        cards.extend_from_slice(&other.cards);
        CardGroup { cards }
    }

    /// Rank frequencies indexed by rank value (2..=14).
    pub fn count_by_rank(&self) -> [u8; 15] {
        rank_counts(&self.cards)
    }

    /// Suit frequencies indexed by [`Suit::index`](crate::cards::Suit::index).
    pub fn count_by_suit(&self) -> [u8; 4] {
        suit_counts(&self.cards)
    }

    /// Sort in place by rank, then suit.
    pub fn sort_cards(&mut self, order: Order) {
        sort_slice(&mut self.cards, order);
    }
}

pub(crate) fn rank_counts<'a>(cards: impl IntoIterator<Item = &'a Card>) -> [u8; 15] {
    let mut counts = [0u8; 15];
    for card in cards {
        counts[card.rank().value() as usize] += 1;
    }
    counts
}

pub(crate) fn suit_counts<'a>(cards: impl IntoIterator<Item = &'a Card>) -> [u8; 4] {
    let mut counts = [0u8; 4];
    for card in cards {
        counts[card.suit().index()] += 1;
    }
    counts
}

pub(crate) fn sort_slice(cards: &mut [Card], order: Order) {
    match order {
        Order::Ascending => cards.sort(),
        Order::Descending => cards.sort_by(|a, b| b.cmp(a)),
    }
}

impl From<CardGroup> for Vec<Card> {
    fn from(group: CardGroup) -> Self {
        group.cards
    }
}

impl<'a> IntoIterator for &'a CardGroup {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for CardGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl FromStr for CardGroup {
    type Err = CardGroupError;

    /// Cards may be concatenated (`AsKd`) or delimited (`As, Kd`); anything
    /// that is not a letter or digit is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
        if chars.len() % 2 != 0 {
            return Err(CardGroupError::Malformed(s.to_string()));
        }
        let cards = chars
            .chunks(2)
            .map(|token| token.iter().collect::<String>().parse::<Card>())
            .collect::<Result<Vec<_>, _>>()?;
        CardGroup::try_new(cards)
    }
}
