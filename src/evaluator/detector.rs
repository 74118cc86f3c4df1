use super::hand_analysis::{take_five, HandAnalysis};
use crate::cards::Card;
use crate::evaluator::Category;

/// Strategy pattern: each detector recognises one category and picks the five
/// cards that represent it, best first.
pub trait CategoryDetector {
    fn category(&self) -> Category;
    fn detect(&self, analysis: &HandAnalysis<'_>) -> Option<[Card; 5]>;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Straight Flush: five consecutive ranks within the flush suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn detect(&self, analysis: &HandAnalysis<'_>) -> Option<[Card; 5]> {
        if !analysis.flush_straight.is_straight() {
            return None;
        }
        let suit = analysis.suit_info.flush_suit?;
        analysis.straight_cards(analysis.flush_straight, Some(suit))
    }
}

/// Four of a Kind: the quad plus the best remaining card
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis<'_>) -> Option<[Card; 5]> {
        let [quad] = analysis.rank_groups.quads() else {
            return None;
        };
        take_five(analysis.with_rank(*quad).chain(analysis.without_ranks(&[*quad])))
    }
}

/// Full House: best trips plus the best pair, or two cards of the second trips
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn detect(&self, analysis: &HandAnalysis<'_>) -> Option<[Card; 5]> {
        let groups = &analysis.rank_groups;
        if !groups.has_full_house() {
            return None;
        }
        let trips = groups.trips()[0];
        let pair = match groups.trips().get(1) {
            Some(&second) => second,
            None => groups.pairs()[0],
        };
        take_five(analysis.with_rank(trips).chain(analysis.with_rank(pair).take(2)))
    }
}

/// Flush: the five highest cards of the flush suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn detect(&self, analysis: &HandAnalysis<'_>) -> Option<[Card; 5]> {
        if !analysis.suit_info.is_flush() {
            return None;
        }
        take_five(analysis.of_suit(analysis.suit_info.flush_suit?))
    }
}

/// Straight: five consecutive ranks, one card each
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn detect(&self, analysis: &HandAnalysis<'_>) -> Option<[Card; 5]> {
        if !analysis.straight_info.is_straight() {
            return None;
        }
        analysis.straight_cards(analysis.straight_info, None)
    }
}

/// Three of a Kind: trips plus the two best other cards
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis<'_>) -> Option<[Card; 5]> {
        let &trips = analysis.rank_groups.trips().first()?;
        take_five(analysis.with_rank(trips).chain(analysis.without_ranks(&[trips])))
    }
}

/// Two Pair: the two best pairs plus the best other card
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> Category {
        Category::TwoPair
    }

    fn detect(&self, analysis: &HandAnalysis<'_>) -> Option<[Card; 5]> {
        let [high, low, ..] = *analysis.rank_groups.pairs() else {
            return None;
        };
        take_five(
            analysis
                .with_rank(high)
                .chain(analysis.with_rank(low))
                .chain(analysis.without_ranks(&[high, low])),
        )
    }
}

/// One Pair: the pair plus the three best other cards
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn category(&self) -> Category {
        Category::Pair
    }

    fn detect(&self, analysis: &HandAnalysis<'_>) -> Option<[Card; 5]> {
        let &pair = analysis.rank_groups.pairs().first()?;
        take_five(analysis.with_rank(pair).chain(analysis.without_ranks(&[pair])))
    }
}

/// High Card: the five best cards
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> Category {
        Category::HighCard
    }

    fn detect(&self, analysis: &HandAnalysis<'_>) -> Option<[Card; 5]> {
        take_five(analysis.cards().iter().copied())
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 9] = [
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];
