use std::fmt;

/// Per-hand tally of simulated outcomes.
///
/// ```
/// use poker_odds::equity::HandEquity;
///
/// let mut eq = HandEquity::default();
/// eq.add_possibility(true, false);
/// eq.add_possibility(false, true);
/// eq.add_possibility(false, false);
/// eq.add_possibility(false, false);
/// assert_eq!(eq.to_string(), "25% (Tie: 25%)");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandEquity {
    possible: u64,
    best: u64,
    tie: u64,
}

impl HandEquity {
    /// Record one trial. A win takes precedence over a tie.
    pub fn add_possibility(&mut self, is_best: bool, is_tie: bool) {
        self.possible += 1;
        if is_best {
            self.best += 1;
        } else if is_tie {
            self.tie += 1;
        }
    }

    pub fn possible(&self) -> u64 {
        self.possible
    }

    pub fn wins(&self) -> u64 {
        self.best
    }

    pub fn ties(&self) -> u64 {
        self.tie
    }

    /// Win percentage rounded to the nearest integer.
    pub fn equity(&self) -> u32 {
        percentage(self.best, self.possible)
    }

    /// Tie percentage rounded to the nearest integer.
    pub fn tie_percentage(&self) -> u32 {
        percentage(self.tie, self.possible)
    }

    /// Fold another tally into this one.
    pub fn merge(&mut self, other: &HandEquity) {
        self.possible += other.possible;
        self.best += other.best;
        self.tie += other.tie;
    }
}

fn percentage(count: u64, possible: u64) -> u32 {
    if possible == 0 {
        return 0;
    }
    (count as f64 * 100.0 / possible as f64).round() as u32
}

impl fmt::Display for HandEquity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.equity())?;
        let tie = self.tie_percentage();
        if tie > 0 {
            write!(f, " (Tie: {tie}%)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(wins: u64, ties: u64, losses: u64) -> HandEquity {
        let mut eq = HandEquity::default();
        (0..wins).for_each(|_| eq.add_possibility(true, false));
        (0..ties).for_each(|_| eq.add_possibility(false, true));
        (0..losses).for_each(|_| eq.add_possibility(false, false));
        eq
    }

    #[test]
    fn empty_tally_is_zero() {
        let eq = HandEquity::default();
        assert_eq!(eq.equity(), 0);
        assert_eq!(eq.tie_percentage(), 0);
        assert_eq!(eq.to_string(), "0%");
    }

    #[test]
    fn percentages_round() {
        let eq = tally(10, 2, 8);
        assert_eq!(eq.possible(), 20);
        assert_eq!(eq.equity(), 50);
        assert_eq!(eq.tie_percentage(), 10);
        assert_eq!(eq.to_string(), "50% (Tie: 10%)");

        assert_eq!(tally(2, 0, 1).equity(), 67);
        assert_eq!(tally(1, 0, 2).equity(), 33);
    }

    #[test]
    fn tiny_tie_share_is_hidden() {
        let eq = tally(500, 1, 499);
        assert_eq!(eq.tie_percentage(), 0);
        assert_eq!(eq.to_string(), "50%");
    }

    #[test]
    fn win_wins_over_tie_flag() {
        let mut eq = HandEquity::default();
        eq.add_possibility(true, true);
        assert_eq!((eq.wins(), eq.ties()), (1, 0));
    }

    #[test]
    fn merge_sums_counters() {
        let mut a = tally(3, 1, 0);
        a.merge(&tally(1, 0, 5));
        assert_eq!((a.possible(), a.wins(), a.ties()), (10, 4, 1));
    }
}
