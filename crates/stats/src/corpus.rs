use super::*;
use hhs_core::HandId;
use hhs_core::PlayerId;
use hhs_records::HandError;
use hhs_records::HandRecord;
use hhs_records::Normalizer;
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Hands processed versus hands skipped in a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Summary {
    pub processed: usize,
    pub skipped: usize,
}

impl std::ops::Add for Summary {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            processed: self.processed + other.processed,
            skipped: self.skipped + other.skipped,
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} hands processed, {} skipped",
            self.processed, self.skipped
        )
    }
}

/// The normalized hands of one batch, typically one session.
///
/// Hands that fail to normalize are logged and counted, never fatal.
/// Hands keep their input order; every derived table is independent of
/// how the work is split across threads.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    hands: Vec<HandRecord>,
    skipped: usize,
}

impl Corpus {
    /// Normalizes every hand text in parallel.
    pub fn normalize<S>(texts: &[S], normalizer: Normalizer) -> Self
    where
        S: AsRef<str> + Sync,
    {
        let results = texts
            .par_iter()
            .enumerate()
            .map(|(i, text)| (i, normalizer.normalize(i, text.as_ref())))
            .collect::<Vec<(usize, Result<HandRecord, HandError>)>>();
        let mut corpus = Self::default();
        for (i, result) in results {
            match result {
                Ok(hand) => corpus.hands.push(hand),
                Err(e) => {
                    let id = Normalizer::id(texts[i].as_ref()).unwrap_or(i as HandId);
                    log::warn!("skipping hand {}: {}", id, e);
                    corpus.skipped += 1;
                }
            }
        }
        log::debug!("{}", corpus.summary());
        corpus
    }
    pub fn hands(&self) -> &[HandRecord] {
        &self.hands
    }
    pub fn summary(&self) -> Summary {
        Summary {
            processed: self.hands.len(),
            skipped: self.skipped,
        }
    }
    /// Every seated player, in order of first appearance.
    pub fn players(&self) -> Vec<PlayerId> {
        let mut players = Vec::<PlayerId>::new();
        self.hands
            .iter()
            .flat_map(|hand| hand.seats())
            .for_each(|seat| {
                if !players.iter().any(|p| p == seat.player()) {
                    players.push(seat.player().to_string());
                }
            });
        players
    }
    /// One player's accumulator over the whole corpus.
    pub fn accumulate(&self, player: &str) -> Accumulator {
        self.hands
            .par_iter()
            .fold(Accumulator::default, |mut acc, hand| {
                acc.observe(hand, player);
                acc
            })
            .reduce(Accumulator::default, |a, b| a + b)
    }
    /// Every seated player's accumulator.
    pub fn table(&self) -> Standings {
        Self::tabulate(&self.hands)
    }
    /// Separate tables per seat count, as "N-max" reports are kept.
    pub fn tables_by_size(&self) -> BTreeMap<usize, Standings> {
        let mut sizes = BTreeMap::<usize, Vec<HandRecord>>::new();
        for hand in self.hands.iter() {
            sizes.entry(hand.size()).or_default().push(hand.clone());
        }
        sizes
            .into_iter()
            .map(|(size, hands)| (size, Self::tabulate(&hands)))
            .collect()
    }
    fn tabulate(hands: &[HandRecord]) -> Standings {
        hands
            .par_iter()
            .fold(Standings::default, |mut table, hand| {
                for seat in hand.seats() {
                    table.absorb(seat.player(), Accumulator::from((hand, seat.player())));
                }
                table
            })
            .reduce(Standings::default, |a, b| a + b)
    }
}

impl From<Vec<HandRecord>> for Corpus {
    fn from(hands: Vec<HandRecord>) -> Self {
        Self { hands, skipped: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hhs_records::Aliases;

    const HEADS_UP: &str = "\
seat 1: A (1000 in chips)
seat 2: B (1000 in chips)
A: posts small blind 10
B: posts big blind 20
A: calls 20
B: checks
*** FLOP *** [2c 3d 4h]
B: checks
A: checks
*** TURN *** [2c 3d 4h] [5s]
B: checks
A: checks
*** RIVER *** [2c 3d 4h 5s] [Kh]
B: checks
A: checks
A: shows [Ah Kd]
B: shows [7c 7d]
A: wins 40";

    const THREE_BET: &str = "\
seat 1: A (1000 in chips)
seat 2: B (1000 in chips)
seat 3: C (1000 in chips)
C: posts small blind 10
A: posts big blind 20
B: raises to 60
C: folds
A: raises to 180
B: folds
A: wins 130";

    const CBET: &str = "\
seat 1: A (1000 in chips)
seat 2: B (1000 in chips)
seat 3: C (1000 in chips)
B: posts small blind 10
C: posts big blind 20
A: raises to 60
B: folds
C: calls 60
*** FLOP *** [Ah 7d 2c]
C: checks
A: bets 80
C: folds
A: wins 210";

    const BROKEN: &str = "A: calls 20\nB: checks";

    fn corpus() -> Corpus {
        Corpus::normalize(&[HEADS_UP, THREE_BET, BROKEN, CBET], Normalizer::default())
    }

    #[test]
    fn skipped_hands_are_counted_not_fatal() {
        let corpus = corpus();
        assert_eq!(
            corpus.summary(),
            Summary {
                processed: 3,
                skipped: 1
            }
        );
        let ids = corpus.hands().iter().map(|h| h.id()).collect::<Vec<_>>();
        assert_eq!(ids, vec![0, 1, 3]);
    }
    #[test]
    fn players_in_order_of_appearance() {
        assert_eq!(corpus().players(), vec!["A", "B", "C"]);
    }
    #[test]
    fn accumulate_one_player() {
        let a = corpus().accumulate("A");
        assert_eq!(a.hands(), 3);
        assert_eq!(a.get(Counter::VpipCount), 3);
        assert_eq!(a.get(Counter::PfrHands), 3);
        assert_eq!(a.get(Counter::PfrCount), 2);
        assert_eq!(a.get(Counter::ThreeBetHands), 1);
        assert_eq!(a.get(Counter::ThreeBetCount), 1);
        assert_eq!(a.get(Counter::CbHands), 1);
        assert_eq!(a.get(Counter::CbCount), 1);
        assert_eq!(a.get(Counter::WtsdHands), 2);
        assert_eq!(a.get(Counter::WtsdCount), 1);
        assert_eq!(a.get(Counter::WdsdCount), 1);
        assert_eq!(a.rate(Stat::Wtsd), 50.0);
        assert_eq!(a.rate(Stat::Wdsd), 100.0);
    }
    #[test]
    fn fold_to_three_bet_in_a_corpus() {
        let b = corpus().accumulate("B");
        assert_eq!(b.get(Counter::FoldToThreeBetHands), 1);
        assert_eq!(b.get(Counter::FoldToThreeBetCount), 1);
        assert_eq!(b.rate(Stat::FoldToThreeBet), 100.0);
    }
    #[test]
    fn table_matches_per_player_accumulation() {
        let corpus = corpus();
        let table = corpus.table();
        for player in corpus.players() {
            assert_eq!(table.get(&player), Some(&corpus.accumulate(&player)));
        }
        assert!(table.iter().all(|(_, acc)| acc.is_consistent()));
    }
    #[test]
    fn reprocessing_is_deterministic() {
        assert_eq!(corpus().table(), corpus().table());
    }
    #[test]
    fn split_corpus_merges_to_the_whole() {
        let whole = corpus().table();
        let left = Corpus::normalize(&[HEADS_UP, THREE_BET], Normalizer::default());
        let right = Corpus::normalize(&[BROKEN, CBET], Normalizer::default());
        assert_eq!(left.table() + right.table(), whole);
    }
    #[test]
    fn tables_by_size_partition_the_table() {
        let corpus = corpus();
        let sizes = corpus.tables_by_size();
        assert_eq!(sizes.keys().copied().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(sizes.values().cloned().sum::<Standings>(), corpus.table());
        assert!(sizes[&2].get("C").is_none());
    }
    #[test]
    fn aliases_merge_identities() {
        let aliases = [("B", "bob"), ("A", "alice")]
            .into_iter()
            .collect::<Aliases>();
        let corpus = Corpus::normalize(&[HEADS_UP, THREE_BET], Normalizer::from(&aliases));
        assert_eq!(corpus.players(), vec!["alice", "bob", "C"]);
        assert_eq!(corpus.accumulate("alice").hands(), 2);
        assert_eq!(corpus.accumulate("A").hands(), 0);
    }
}
