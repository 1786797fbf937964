use super::*;
use hhs_core::Arbitrary;
use hhs_core::Chips;
use hhs_records::HandRecord;

/// Per-player statistic counters plus net chips.
///
/// Created zeroed, filled by observing hands, then combined with `+`.
/// Combination is a field-wise sum, so it is commutative and associative
/// with [`Accumulator::default`] as identity; merging per-session results
/// equals recomputing over the union of their hands.
///
/// # Fields
///
/// - `counts` — One slot per [`Counter`], indexed by [`Counter::index`]
/// - `net` — Chips won or lost, supplied by an external ledger
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Accumulator {
    counts: [u64; Counter::N],
    net: Chips,
}

impl Accumulator {
    pub fn get(&self, counter: Counter) -> u64 {
        self.counts[counter.index()]
    }
    pub fn hands(&self) -> u64 {
        self.get(Counter::Hands)
    }
    pub fn net(&self) -> Chips {
        self.net
    }
    /// Adds ledger chips to the running net.
    pub fn settle(&mut self, chips: Chips) {
        self.net += chips;
    }
    /// Adds one hand's contribution for `player`.
    pub fn observe(&mut self, hand: &HandRecord, player: &str) {
        *self += Self::from((hand, player));
    }
    /// Percentage for `stat`, rounded to two places.
    pub fn rate(&self, stat: Stat) -> f64 {
        hhs_core::percent(self.get(stat.count()), self.get(stat.hands()))
    }
    pub fn rates(&self) -> Rates {
        Rates::from(self)
    }
    /// Every numerator is bounded by its denominator.
    pub fn is_consistent(&self) -> bool {
        Stat::all()
            .iter()
            .all(|s| self.get(s.count()) <= self.get(s.hands()))
            && Stat::all()
                .iter()
                .filter(|s| s.owns_hands())
                .all(|s| self.get(s.hands()) <= self.hands())
    }
    fn increment(&mut self, counter: Counter) {
        self.counts[counter.index()] += 1;
    }
}

/// One hand's contribution for one player. Unseated players contribute
/// nothing.
impl From<(&HandRecord, &str)> for Accumulator {
    fn from((hand, player): (&HandRecord, &str)) -> Self {
        let mut acc = Self::default();
        if !hand.is_seated(player) {
            return acc;
        }
        acc.increment(Counter::Hands);
        for stat in Stat::all() {
            if let Some(qualified) = stat.sample(hand, player) {
                if stat.owns_hands() {
                    acc.increment(stat.hands());
                }
                if qualified {
                    acc.increment(stat.count());
                }
            }
        }
        acc
    }
}

impl std::ops::AddAssign for Accumulator {
    fn add_assign(&mut self, other: Self) {
        self.counts
            .iter_mut()
            .zip(other.counts.iter())
            .for_each(|(a, b)| *a += b);
        self.net += other.net;
    }
}

impl std::ops::Add for Accumulator {
    type Output = Self;
    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl std::iter::Sum for Accumulator {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |a, b| a + b)
    }
}

/// Random accumulator respecting every `count <= hands` bound.
impl Arbitrary for Accumulator {
    fn random() -> Self {
        let mut acc = Self::default();
        let hands = rand::random_range(0..1_000u64);
        acc.counts[Counter::Hands.index()] = hands;
        for stat in Stat::all().into_iter().filter(|s| s.owns_hands()) {
            let opportunities = rand::random_range(0..=hands);
            acc.counts[stat.hands().index()] = opportunities;
            acc.counts[stat.count().index()] = rand::random_range(0..=opportunities);
        }
        let showdowns = acc.get(Counter::WtsdCount);
        acc.counts[Counter::WdsdCount.index()] = rand::random_range(0..=showdowns);
        acc.net = rand::random_range(-100_000..=100_000);
        acc
    }
}

/// Serialized as a flat map of counter keys plus `net`.
impl serde::Serialize for Accumulator {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(Counter::N + 1))?;
        for counter in Counter::all() {
            map.serialize_entry(counter.key(), &self.get(counter))?;
        }
        map.serialize_entry("net", &self.net)?;
        map.end()
    }
}

impl std::fmt::Display for Accumulator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:>6} hands", self.hands())?;
        for stat in Stat::all() {
            write!(f, "  {} {:>6.2}", stat.label(), self.rate(stat))?;
        }
        write!(f, "  net {:+}", self.net)
    }
}
