//! The seven per-hand statistics.
//!
//! Each statistic samples one hand for one player and answers with
//!
//! - `None` when the player had no opportunity in that hand,
//! - `Some(false)` when they had the opportunity but did not qualify,
//! - `Some(true)` when they qualified.
//!
//! Every sampler reads the structured [`HandRecord`] only.
use super::*;
use hhs_records::Classification;
use hhs_records::HandRecord;
use hhs_records::Street;
use hhs_records::Verb;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Vpip,
    Pfr,
    ThreeBet,
    FoldToThreeBet,
    Cb,
    Wtsd,
    Wdsd,
}

impl Stat {
    pub const fn all() -> [Self; 7] {
        [
            Self::Vpip,
            Self::Pfr,
            Self::ThreeBet,
            Self::FoldToThreeBet,
            Self::Cb,
            Self::Wtsd,
            Self::Wdsd,
        ]
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Vpip => "VPIP",
            Self::Pfr => "PFR",
            Self::ThreeBet => "3Bet",
            Self::FoldToThreeBet => "Fold3Bet",
            Self::Cb => "CB",
            Self::Wtsd => "WTSD",
            Self::Wdsd => "W$SD",
        }
    }
    /// Denominator counter.
    pub const fn hands(&self) -> Counter {
        match self {
            Self::Vpip => Counter::VpipHands,
            Self::Pfr => Counter::PfrHands,
            Self::ThreeBet => Counter::ThreeBetHands,
            Self::FoldToThreeBet => Counter::FoldToThreeBetHands,
            Self::Cb => Counter::CbHands,
            Self::Wtsd => Counter::WtsdHands,
            Self::Wdsd => Counter::WtsdCount,
        }
    }
    /// Numerator counter.
    pub const fn count(&self) -> Counter {
        match self {
            Self::Vpip => Counter::VpipCount,
            Self::Pfr => Counter::PfrCount,
            Self::ThreeBet => Counter::ThreeBetCount,
            Self::FoldToThreeBet => Counter::FoldToThreeBetCount,
            Self::Cb => Counter::CbCount,
            Self::Wtsd => Counter::WtsdCount,
            Self::Wdsd => Counter::WdsdCount,
        }
    }
    /// W$SD shares its denominator with WTSD's numerator.
    pub const fn owns_hands(&self) -> bool {
        !matches!(self, Self::Wdsd)
    }
    pub fn sample(&self, hand: &HandRecord, player: &str) -> Option<bool> {
        match self {
            Self::Vpip => Self::vpip(hand, player),
            Self::Pfr => Self::pfr(hand, player),
            Self::ThreeBet => Self::three_bet(hand, player),
            Self::FoldToThreeBet => Self::fold_to_three_bet(hand, player),
            Self::Cb => Self::cb(hand, player),
            Self::Wtsd => Self::wtsd(hand, player),
            Self::Wdsd => Self::wdsd(hand, player),
        }
    }
}

impl Stat {
    /// Seated players have the opportunity. Any preflop action set other
    /// than a lone fold or a lone check qualifies, so a big blind walk
    /// counts; blind posts alone do not.
    fn vpip(hand: &HandRecord, player: &str) -> Option<bool> {
        if !hand.is_seated(player) {
            return None;
        }
        let verbs = hand.preflop().actions_by(player);
        Some(!verbs.is_empty() && verbs != [Verb::Fold] && verbs != [Verb::Check])
    }
    /// Any preflop action, a win included, is the opportunity; any raise
    /// qualifies.
    fn pfr(hand: &HandRecord, player: &str) -> Option<bool> {
        let verbs = hand.preflop().actions_by(player);
        match verbs.is_empty() {
            true => None,
            false => Some(verbs.contains(&Verb::Raise)),
        }
    }
    /// The player's first decision after exactly one raise is the
    /// opportunity; raising there qualifies.
    fn three_bet(hand: &HandRecord, player: &str) -> Option<bool> {
        let mut raises = 0;
        for event in hand.preflop().choices() {
            if raises == 1 && event.by(player) {
                return Some(event.verb() == Verb::Raise);
            }
            if event.verb() == Verb::Raise {
                raises += 1;
            }
        }
        None
    }
    /// The original raiser facing exactly two raises has the opportunity;
    /// folding qualifies. A third raise by anyone, the raiser's own 4-bet
    /// included, closes the window. Scanning stops at the first response.
    fn fold_to_three_bet(hand: &HandRecord, player: &str) -> Option<bool> {
        let preflop = hand.preflop();
        if preflop.classify().original_aggressor() != Some(player) {
            return None;
        }
        let mut raises = 0;
        for event in preflop.choices() {
            if event.verb() == Verb::Raise {
                raises += 1;
            }
            if raises > 2 {
                return None;
            }
            if raises == 2 && event.by(player) {
                return Some(event.verb() == Verb::Fold);
            }
        }
        None
    }
    /// The last preflop aggressor on a dealt flop has the opportunity
    /// unless someone else bet, called, raised, or folded ahead of their
    /// first flop decision. Betting as that first decision qualifies; an
    /// aggressor with no recorded flop decision does not.
    fn cb(hand: &HandRecord, player: &str) -> Option<bool> {
        if hand.preflop().classify().last_aggressor() != Some(player) {
            return None;
        }
        let flop = hand.street(Street::Flop)?;
        let choices = flop.choices().collect::<Vec<_>>();
        let first = choices.iter().position(|e| e.by(player));
        let ahead = &choices[..first.unwrap_or(choices.len())];
        let donk = ahead
            .iter()
            .any(|e| !e.by(player) && e.verb() != Verb::Check);
        match first.map(|i| choices[i].verb()) {
            _ if donk => None,
            Some(verb) if verb.is_contest() => None,
            Some(verb) => Some(verb == Verb::Bet),
            None => Some(false),
        }
    }
    /// Preflop survivors of a hand that saw a flop have the opportunity;
    /// surviving a contested river qualifies.
    fn wtsd(hand: &HandRecord, player: &str) -> Option<bool> {
        hand.street(Street::Flop)?;
        if !hand.preflop().classify().is_survivor(player) {
            return None;
        }
        let river = hand
            .street(Street::Rive)
            .map(|river| river.classify())
            .unwrap_or_else(Classification::default);
        Some(river.is_contested() && river.is_survivor(player))
    }
    /// Reaching showdown is the opportunity; any win qualifies, chops
    /// included.
    fn wdsd(hand: &HandRecord, player: &str) -> Option<bool> {
        match Self::wtsd(hand, player) {
            Some(true) => Some(hand.has_won(player)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
