use super::combinations::Combinations;
use super::{CancelToken, EquityError, HandEquity};
use crate::cards::Card;
use crate::deck::Deck;
use crate::evaluator::{evaluate, Evaluation, MAX_CARDS};
use crate::hand::CardGroup;
use crate::variants::Rules;
use log::trace;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

/// Trials handled by one rayon task.
pub(crate) const CHUNK_SIZE: u64 = 2_048;

/// Where the missing board cards of each trial come from.
#[derive(Debug, Clone)]
pub(crate) enum Completions {
    /// `iterations` random draws of `draw` cards. Chunk `k` reads stream `k`
    /// of a ChaCha8 generator seeded with `seed`.
    Sampled {
        deck: Deck,
        draw: usize,
        iterations: u64,
        seed: u64,
    },
    /// Every completion of `draw` cards, stored back to back.
    Enumerated { draw: usize, cards: Vec<Card> },
}

impl Completions {
    pub(crate) fn enumerate(deck: &Deck, draw: usize) -> Self {
        let pool = deck.as_slice();
        let mut cards = Vec::with_capacity(Combinations::total(pool.len(), draw) as usize * draw);
        for combo in Combinations::new(pool.len(), draw) {
            cards.extend(combo.into_iter().map(|i| pool[i]));
        }
        Completions::Enumerated { draw, cards }
    }

    /// The known board is already complete.
    pub(crate) fn complete() -> Self {
        Completions::Enumerated { draw: 0, cards: Vec::new() }
    }

    pub(crate) fn trials(&self) -> u64 {
        match self {
            Completions::Sampled { iterations, .. } => *iterations,
            Completions::Enumerated { draw: 0, .. } => 1,
            Completions::Enumerated { draw, cards } => (cards.len() / draw) as u64,
        }
    }
}

/// Read-only inputs shared by every trial.
pub(crate) struct Table<'a> {
    pub rules: &'a Rules,
    pub hands: &'a [CardGroup],
    pub board: &'a [Card],
    pub cancel: Option<&'a CancelToken>,
}

/// Reusable per-chunk buffers.
struct Scratch {
    cards: Vec<Card>,
    evals: Vec<Evaluation>,
}

impl<'a> Table<'a> {
    /// Run every trial, chunked across the rayon pool, folding chunk tallies
    /// pairwise as they finish.
    pub(crate) fn run(&self, completions: &Completions) -> Result<Vec<HandEquity>, EquityError> {
        let trials = completions.trials();
        let chunks = trials.div_ceil(CHUNK_SIZE);

        let hands = self.hands.len();
        (0..chunks)
            .into_par_iter()
            .map(|chunk| self.run_chunk(completions, chunk, trials))
            .try_reduce(
                || vec![HandEquity::default(); hands],
                |mut totals, partial| {
                    for (total, part) in totals.iter_mut().zip(&partial) {
                        total.merge(part);
                    }
                    Ok(totals)
                },
            )
    }

    fn run_chunk(
        &self,
        completions: &Completions,
        chunk: u64,
        trials: u64,
    ) -> Result<Vec<HandEquity>, EquityError> {
        let start = chunk * CHUNK_SIZE;
        let end = (start + CHUNK_SIZE).min(trials);
        let mut tally = vec![HandEquity::default(); self.hands.len()];
        let mut scratch = Scratch {
            cards: Vec::with_capacity(MAX_CARDS),
            evals: Vec::with_capacity(self.hands.len()),
        };

        match completions {
            Completions::Sampled { deck, draw, seed, .. } => {
                let mut rng = ChaCha8Rng::seed_from_u64(*seed);
                rng.set_stream(chunk);
                let mut deck = deck.clone();
                for _ in start..end {
                    self.check_cancelled()?;
                    let drawn = deck.sample_front(&mut rng, *draw);
                    self.resolve(drawn, &mut tally, &mut scratch)?;
                }
            }
            Completions::Enumerated { draw, cards } => {
                for trial in start..end {
                    self.check_cancelled()?;
                    let at = trial as usize * draw;
                    self.resolve(&cards[at..at + draw], &mut tally, &mut scratch)?;
                }
            }
        }

        trace!("chunk {chunk} finished trials {start}..{end}");
        Ok(tally)
    }

    fn check_cancelled(&self) -> Result<(), EquityError> {
        match self.cancel {
            Some(token) if token.is_cancelled() => Err(EquityError::Cancelled),
            _ => Ok(()),
        }
    }

    /// Classify every hand on one completed board and credit the leaders: a
    /// lone leader wins, several leaders each tie.
    fn resolve(
        &self,
        drawn: &[Card],
        tally: &mut [HandEquity],
        scratch: &mut Scratch,
    ) -> Result<(), EquityError> {
        scratch.evals.clear();
        for hand in self.hands {
            scratch.cards.clear();
            scratch.cards.extend_from_slice(hand.as_slice());
            scratch.cards.extend_from_slice(self.board);
            scratch.cards.extend_from_slice(drawn);
            scratch.evals.push(evaluate(self.rules, &scratch.cards)?);
        }

        let Some(best) = scratch.evals.iter().max().copied() else {
            return Ok(());
        };
        let leaders = scratch.evals.iter().filter(|&e| *e == best).count();
        for (equity, eval) in tally.iter_mut().zip(&scratch.evals) {
            let leading = *eval == best;
            equity.add_possibility(leading && leaders == 1, leading && leaders > 1);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::STANDARD;
    use std::collections::HashSet;

    fn groups(specs: &[&str]) -> Vec<CardGroup> {
        specs.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn enumerates_every_turn_and_river() {
        let used: HashSet<Card> = groups(&["AsKc", "AdAh", "2dJdTc"])
            .iter()
            .flat_map(|g| g.iter().copied())
            .collect();
        let deck = Deck::remaining(&STANDARD, &used);
        let completions = Completions::enumerate(&deck, 2);
        assert_eq!(completions.trials(), 990);
        assert_eq!(Completions::enumerate(&deck, 1).trials(), 45);
        assert_eq!(Completions::complete().trials(), 1);
    }

    #[test]
    fn lone_leader_wins_and_shared_lead_ties() {
        let hands = groups(&["AsAc", "AhAd", "KsKc"]);
        let board: CardGroup = "2d 7h 9c Jd 3s".parse().unwrap();
        let table = Table { rules: &STANDARD, hands: &hands, board: board.as_slice(), cancel: None };
        let totals = table.run(&Completions::complete()).unwrap();
        assert_eq!((totals[0].wins(), totals[0].ties()), (0, 1));
        assert_eq!((totals[1].wins(), totals[1].ties()), (0, 1));
        assert_eq!((totals[2].wins(), totals[2].ties(), totals[2].possible()), (0, 0, 1));
    }

    #[test]
    fn sampled_chunks_cover_every_iteration() {
        let hands = groups(&["AsAc", "7h2d"]);
        let used: HashSet<Card> = hands.iter().flat_map(|g| g.iter().copied()).collect();
        let completions = Completions::Sampled {
            deck: Deck::remaining(&STANDARD, &used),
            draw: 5,
            iterations: CHUNK_SIZE * 2 + 17,
            seed: 7,
        };
        let table = Table { rules: &STANDARD, hands: &hands, board: &[], cancel: None };
        let totals = table.run(&completions).unwrap();
        assert!(totals.iter().all(|t| t.possible() == CHUNK_SIZE * 2 + 17));
    }

    #[test]
    fn no_trials_give_empty_tallies_per_hand() {
        let hands = groups(&["AsAc", "7h2d"]);
        let completions = Completions::Sampled { deck: Deck::for_rules(&STANDARD), draw: 5, iterations: 0, seed: 1 };
        let table = Table { rules: &STANDARD, hands: &hands, board: &[], cancel: None };
        let totals = table.run(&completions).unwrap();
        assert_eq!(totals, vec![HandEquity::default(); 2]);
    }
}
