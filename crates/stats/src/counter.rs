/// Named counters of a per-player accumulator.
///
/// Opportunity counters end in `Hands`, qualifying counters in `Count`.
/// `WdsdCount` has no opportunity counter of its own; its denominator is
/// `WtsdCount`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Counter {
    Hands = 0isize,
    VpipHands,
    VpipCount,
    PfrHands,
    PfrCount,
    ThreeBetHands,
    ThreeBetCount,
    FoldToThreeBetHands,
    FoldToThreeBetCount,
    CbHands,
    CbCount,
    WtsdHands,
    WtsdCount,
    WdsdCount,
}

impl Counter {
    pub const N: usize = 14;
    pub const fn all() -> [Self; Self::N] {
        [
            Self::Hands,
            Self::VpipHands,
            Self::VpipCount,
            Self::PfrHands,
            Self::PfrCount,
            Self::ThreeBetHands,
            Self::ThreeBetCount,
            Self::FoldToThreeBetHands,
            Self::FoldToThreeBetCount,
            Self::CbHands,
            Self::CbCount,
            Self::WtsdHands,
            Self::WtsdCount,
            Self::WdsdCount,
        ]
    }
    /// Column name used in reports and serialized output.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Hands => "hands",
            Self::VpipHands => "vpip_hands",
            Self::VpipCount => "vpip_count",
            Self::PfrHands => "pfr_hands",
            Self::PfrCount => "pfr_count",
            Self::ThreeBetHands => "three_bet_hands",
            Self::ThreeBetCount => "three_bet_count",
            Self::FoldToThreeBetHands => "fold_to_3bet_hands",
            Self::FoldToThreeBetCount => "fold_to_3bet_count",
            Self::CbHands => "cb_hands",
            Self::CbCount => "cb_count",
            Self::WtsdHands => "wtsd_hands",
            Self::WtsdCount => "wtsd_count",
            Self::WdsdCount => "wdsd_count",
        }
    }
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Counter {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl TryFrom<&str> for Counter {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| format!("unknown counter {:?}", s))
    }
}
