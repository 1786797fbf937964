use super::*;

/// Derived percentages of an [`Accumulator`], rounded to two places.
///
/// Empty denominators yield `0.0`. W$SD is measured against showdowns
/// reached, not showdown opportunities.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Rates {
    pub vpip: f64,
    pub pfr: f64,
    pub three_bet: f64,
    pub fold_to_three_bet: f64,
    pub cb: f64,
    pub wtsd: f64,
    pub wdsd: f64,
}

impl From<&Accumulator> for Rates {
    fn from(acc: &Accumulator) -> Self {
        Self {
            vpip: acc.rate(Stat::Vpip),
            pfr: acc.rate(Stat::Pfr),
            three_bet: acc.rate(Stat::ThreeBet),
            fold_to_three_bet: acc.rate(Stat::FoldToThreeBet),
            cb: acc.rate(Stat::Cb),
            wtsd: acc.rate(Stat::Wtsd),
            wdsd: acc.rate(Stat::Wdsd),
        }
    }
}

impl Rates {
    pub fn get(&self, stat: Stat) -> f64 {
        match stat {
            Stat::Vpip => self.vpip,
            Stat::Pfr => self.pfr,
            Stat::ThreeBet => self.three_bet,
            Stat::FoldToThreeBet => self.fold_to_three_bet,
            Stat::Cb => self.cb,
            Stat::Wtsd => self.wtsd,
            Stat::Wdsd => self.wdsd,
        }
    }
}
