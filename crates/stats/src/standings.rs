use super::*;
use hhs_core::Chips;
use hhs_core::PlayerId;
use std::collections::BTreeMap;

/// Per-player accumulators rolled up across tables, sessions, or seasons.
///
/// Rolling up is accumulator addition per player, so standings built from
/// sessions in any order are identical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[derive(serde::Serialize)]
pub struct Standings(BTreeMap<PlayerId, Accumulator>);

impl Standings {
    /// Adds `acc` into `player`'s row.
    pub fn absorb(&mut self, player: &str, acc: Accumulator) {
        match self.0.get_mut(player) {
            Some(row) => *row += acc,
            None => {
                self.0.insert(player.to_string(), acc);
            }
        }
    }
    /// Adds ledger chips to `player`'s net.
    pub fn credit(&mut self, player: &str, chips: Chips) {
        let mut acc = Accumulator::default();
        acc.settle(chips);
        self.absorb(player, acc);
    }
    pub fn get(&self, player: &str) -> Option<&Accumulator> {
        self.0.get(player)
    }
    /// Rows by hands played, most first; ties by player id.
    pub fn ranked(&self) -> Vec<(&str, &Accumulator)> {
        let mut rows = self
            .0
            .iter()
            .map(|(player, acc)| (player.as_str(), acc))
            .collect::<Vec<_>>();
        rows.sort_by(|(p, a), (q, b)| b.hands().cmp(&a.hands()).then_with(|| p.cmp(q)));
        rows
    }
    /// Keeps only the listed players.
    pub fn retain(&mut self, players: &[PlayerId]) {
        self.0.retain(|player, _| players.contains(player));
    }
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Accumulator)> {
        self.0.iter().map(|(player, acc)| (player.as_str(), acc))
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::ops::AddAssign for Standings {
    fn add_assign(&mut self, other: Self) {
        for (player, acc) in other.0 {
            self.absorb(&player, acc);
        }
    }
}

impl std::ops::Add for Standings {
    type Output = Self;
    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl std::iter::Sum for Standings {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |a, b| a + b)
    }
}

impl std::fmt::Display for Standings {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (player, acc) in self.ranked() {
            writeln!(f, "{:<24}{}", player, acc)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hhs_core::Arbitrary;
    use hhs_records::Normalizer;

    fn random(players: &[&str]) -> Standings {
        let mut standings = Standings::default();
        for player in players {
            standings.absorb(player, Accumulator::random());
        }
        standings
    }

    #[test]
    fn rollup_is_order_independent() {
        for _ in 0..20 {
            let a = random(&["A", "B"]);
            let b = random(&["B", "C"]);
            let c = random(&["A", "C", "D"]);
            assert_eq!(
                a.clone() + b.clone() + c.clone(),
                c.clone() + a.clone() + b.clone()
            );
            assert_eq!(a.clone() + (b.clone() + c.clone()), (a.clone() + b.clone()) + c);
            assert_eq!(a.clone() + Standings::default(), a);
        }
    }
    #[test]
    fn rollup_sums_rows() {
        let a = random(&["A", "B"]);
        let b = random(&["B"]);
        let sum = a.clone() + b.clone();
        assert_eq!(sum.len(), 2);
        assert_eq!(sum.get("A"), a.get("A"));
        let b_row = a.get("B").copied().unwrap_or_default() + b.get("B").copied().unwrap_or_default();
        assert_eq!(sum.get("B").copied(), Some(b_row));
    }
    #[test]
    fn credit_creates_and_adds() {
        let mut standings = Standings::default();
        standings.credit("A", 100);
        standings.credit("A", -30);
        assert_eq!(standings.get("A").map(Accumulator::net), Some(70));
        assert_eq!(standings.get("A").map(Accumulator::hands), Some(0));
    }
    #[test]
    fn ranked_by_hands_then_name() {
        let text = "seat 1: A (100 in chips)\nseat 2: B (100 in chips)\n\
                    A: posts small blind 1\nB: posts big blind 2\nA: folds\nB: wins 2";
        let hand = Normalizer::default().normalize(0, text).unwrap();
        let played = |n: usize| -> Accumulator {
            (0..n).map(|_| Accumulator::from((&hand, "A"))).sum()
        };
        let mut standings = Standings::default();
        standings.absorb("zed", played(2));
        standings.absorb("cat", played(0));
        standings.absorb("amy", played(2));
        standings.absorb("bob", played(5));
        let names = standings
            .ranked()
            .into_iter()
            .map(|(p, _)| p)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["bob", "amy", "zed", "cat"]);
    }
    #[test]
    fn retain_filters_players() {
        let mut standings = random(&["A", "B", "C"]);
        standings.retain(&["B".to_string()]);
        let players = standings.iter().map(|(p, _)| p).collect::<Vec<_>>();
        assert_eq!(players, vec!["B"]);
    }
}
