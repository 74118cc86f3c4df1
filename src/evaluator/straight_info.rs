use crate::cards::Rank;
use crate::variants::Rules;

/// Highest straight found among a set of ranks, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StraightInfo {
    pub top_rank: Option<Rank>,
    /// The Ace plays low: four ranks from `top_rank` down, completed by an Ace.
    pub wheel: bool,
}

impl StraightInfo {
    /// Scan the present ranks from Ace downward, tracking the current run of
    /// consecutive ranks. The first run to reach five wins. Failing that, a
    /// four-long run topped by one of the rules' wheel anchors counts when an
    /// Ace is present.
    pub fn detect(rules: &Rules, rank_counts: &[u8; 15]) -> Self {
        let present = |r: Rank| rank_counts[r.value() as usize] > 0;
        let has_ace = present(Rank::Ace);

        let mut wheel: Option<Rank> = None;
        let mut run_top = Rank::Ace;
        let mut run_len = 0u8;
        let mut last: Option<Rank> = None;

        let close_run = |top: Rank, len: u8, wheel: &mut Option<Rank>| {
            if wheel.is_none() && len == 4 && has_ace && rules.is_wheel_top(top) {
                *wheel = Some(top);
            }
        };

        for rank in Rank::ALL.iter().rev().copied().filter(|&r| present(r)) {
            if last.is_some_and(|l| l.value() == rank.value() + 1) {
                run_len += 1;
            } else {
                close_run(run_top, run_len, &mut wheel);
                run_top = rank;
                run_len = 1;
            }
            last = Some(rank);
            if run_len == 5 {
                return StraightInfo { top_rank: Some(run_top), wheel: false };
            }
        }
        close_run(run_top, run_len, &mut wheel);

        match wheel {
            Some(top) => StraightInfo { top_rank: Some(top), wheel: true },
            None => StraightInfo::default(),
        }
    }

    pub fn is_straight(&self) -> bool {
        self.top_rank.is_some()
    }
}
