use crate::cards::Rank;

/// Ranks that occur more than once in a hand, highest rank first.
///
/// Example: AAAKKK7 has trips [Ace, King] and no pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankGroups {
    quads: Vec<Rank>,
    trips: Vec<Rank>,
    pairs: Vec<Rank>,
}

impl RankGroups {
    /// Create RankGroups from a rank count array.
    /// The array should be indexed by rank value (2-14).
    pub fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let mut groups = Self::default();
        for rank in Rank::ALL.iter().rev().copied() {
            match rank_counts[rank.value() as usize] {
                4 => groups.quads.push(rank),
                3 => groups.trips.push(rank),
                2 => groups.pairs.push(rank),
                _ => {}
            }
        }
        groups
    }

    pub fn quads(&self) -> &[Rank] {
        &self.quads
    }

    pub fn trips(&self) -> &[Rank] {
        &self.trips
    }

    pub fn pairs(&self) -> &[Rank] {
        &self.pairs
    }

    /// Trips plus a pair, or two sets of trips.
    pub fn has_full_house(&self) -> bool {
        match self.trips.len() {
            0 => false,
            1 => !self.pairs.is_empty(),
            _ => true,
        }
    }
}
