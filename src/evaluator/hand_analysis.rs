use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank, Suit};
use crate::evaluator::{Category, EvalError, Evaluation, HandValue, MAX_CARDS, MIN_CARDS};
use crate::hand::{rank_counts, sort_slice, Order};
use crate::variants::Rules;

/// Pre-computed analysis of a 5 to 7 card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis<'r> {
    pub rules: &'r Rules,
    sorted: [Card; MAX_CARDS],
    len: usize,
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
    /// Straight among the flush-suit cards only; empty without a flush.
    pub flush_straight: StraightInfo,
}

impl<'r> HandAnalysis<'r> {
    pub fn new(rules: &'r Rules, cards: &[Card]) -> Result<Self, EvalError> {
        if cards.len() < MIN_CARDS {
            return Err(EvalError::NotEnoughCards(cards.len()));
        }
        if cards.len() > MAX_CARDS {
            return Err(EvalError::TooManyCards(cards.len()));
        }

        // Working copy, rank descending then suit descending
        let mut sorted = [cards[0]; MAX_CARDS];
        sorted[..cards.len()].copy_from_slice(cards);
        sort_slice(&mut sorted[..cards.len()], Order::Descending);
        let sorted_cards = &sorted[..cards.len()];

        let counts = rank_counts(sorted_cards);
        let rank_groups = RankGroups::from_counts(&counts);
        let suit_info = SuitInfo::detect(sorted_cards);
        let straight_info = StraightInfo::detect(rules, &counts);
        let flush_straight = match suit_info.flush_suit {
            Some(suit) => {
                let suited = rank_counts(sorted_cards.iter().filter(|c| c.suit() == suit));
                StraightInfo::detect(rules, &suited)
            }
            None => StraightInfo::default(),
        };

        Ok(Self {
            rules,
            sorted,
            len: cards.len(),
            rank_groups,
            suit_info,
            straight_info,
            flush_straight,
        })
    }

    /// All cards, rank descending.
    pub fn cards(&self) -> &[Card] {
        &self.sorted[..self.len]
    }

    pub fn with_rank(&self, rank: Rank) -> impl Iterator<Item = Card> + '_ {
        self.cards().iter().copied().filter(move |c| c.rank() == rank)
    }

    pub fn without_ranks<'a>(&'a self, ranks: &'a [Rank]) -> impl Iterator<Item = Card> + 'a {
        self.cards().iter().copied().filter(move |c| !ranks.contains(&c.rank()))
    }

    pub fn of_suit(&self, suit: Suit) -> impl Iterator<Item = Card> + '_ {
        self.cards().iter().copied().filter(move |c| c.suit() == suit)
    }

    /// The five cards of a detected straight, one per rank from the top down,
    /// optionally restricted to one suit. A wheel ends with an Ace.
    pub fn straight_cards(&self, info: StraightInfo, suit: Option<Suit>) -> Option<[Card; 5]> {
        let top = info.top_rank?;
        let run_len = if info.wheel { 4 } else { 5 };
        let pick = |rank: Rank| {
            self.with_rank(rank).find(|c| suit.map_or(true, |s| c.suit() == s))
        };
        let mut picked = Vec::with_capacity(5);
        for step in 0..run_len {
            picked.push(pick(Rank::from_value(top.value() - step)?)?);
        }
        if info.wheel {
            picked.push(pick(Rank::Ace)?);
        }
        take_five(picked)
    }

    pub fn build_evaluation(&self, category: Category, best_five: [Card; 5]) -> Evaluation {
        let ranks = best_five.map(Card::rank);
        let value = HandValue::from_parts(self.rules.ordinal(category), &ranks);
        Evaluation { category, best_five, value }
    }
}

/// The first five cards of `cards`, or `None` if there are fewer.
pub fn take_five<I: IntoIterator<Item = Card>>(cards: I) -> Option<[Card; 5]> {
    let mut it = cards.into_iter();
    Some([it.next()?, it.next()?, it.next()?, it.next()?, it.next()?])
}
