use super::*;
use hhs_core::MAX_SEATS;
use hhs_core::MIN_SEATS;
use hhs_core::PlayerId;
use std::collections::BTreeMap;

/// Canonical preflop table position.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Position {
    #[serde(rename = "UTG")]
    Utg,
    #[serde(rename = "UTG+1")]
    Utg1,
    #[serde(rename = "UTG+2")]
    Utg2,
    #[serde(rename = "LJ")]
    Lojack,
    #[serde(rename = "HJ")]
    Hijack,
    #[serde(rename = "CO")]
    Cutoff,
    #[serde(rename = "BTN")]
    Button,
    #[serde(rename = "SB")]
    SmallBlind,
    #[serde(rename = "BB")]
    BigBlind,
}

impl Position {
    /// Short-handed and full-ring positions that act before the blinds,
    /// in action order starting after the big blind.
    ///
    /// - 2 seats: none, only the blinds
    /// - 3 to 6 seats: the last `n - 2` of `UTG HJ CO BTN`
    /// - 7 to 9 seats: `UTG`, then `n - 6` of `UTG+1 UTG+2 LJ`, then `HJ CO BTN`
    pub fn sequence(n: usize) -> Result<Vec<Self>, HandError> {
        const SHORT: [Position; 4] = [
            Position::Utg,
            Position::Hijack,
            Position::Cutoff,
            Position::Button,
        ];
        const MIDDLE: [Position; 3] = [Position::Utg1, Position::Utg2, Position::Lojack];
        match n {
            2 => Ok(vec![]),
            3..=6 => Ok(SHORT[SHORT.len() - (n - 2)..].to_vec()),
            7..=MAX_SEATS => Ok(std::iter::once(Self::Utg)
                .chain(MIDDLE[..n - 6].iter().copied())
                .chain(SHORT[1..].iter().copied())
                .collect()),
            n => {
                debug_assert!(n < MIN_SEATS || n > MAX_SEATS);
                Err(HandError::TableSize(n))
            }
        }
    }
    pub fn label(&self) -> &'static str {
        match self {
            Self::Utg => "UTG",
            Self::Utg1 => "UTG+1",
            Self::Utg2 => "UTG+2",
            Self::Lojack => "LJ",
            Self::Hijack => "HJ",
            Self::Cutoff => "CO",
            Self::Button => "BTN",
            Self::SmallBlind => "SB",
            Self::BigBlind => "BB",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Player-to-position assignment for one hand.
///
/// Blind posters are labelled directly. Everyone else is labelled by
/// walking the seat list circularly from the seat after the big blind,
/// taking labels from [`Position::sequence`] in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Positions(BTreeMap<PlayerId, Position>);

impl Positions {
    pub fn resolve(seats: &[Seat], sb: Option<&str>, bb: &str) -> Result<Self, HandError> {
        let n = seats.len();
        let order = Position::sequence(n)?;
        let seated = |name: &str| seats.iter().position(|s| s.player() == name);
        let big = seated(bb).ok_or_else(|| HandError::Unseated(bb.to_string()))?;
        if let Some(sb) = sb {
            seated(sb).ok_or_else(|| HandError::Unseated(sb.to_string()))?;
        }
        let blind = |name: &str| name == bb || Some(name) == sb;
        let mut positions = (1..=n)
            .map(|i| &seats[(big + i) % n])
            .filter(|s| !blind(s.player()))
            .zip(order)
            .map(|(s, p)| (s.player().to_string(), p))
            .collect::<BTreeMap<PlayerId, Position>>();
        positions.insert(bb.to_string(), Position::BigBlind);
        if let Some(sb) = sb {
            positions.insert(sb.to_string(), Position::SmallBlind);
        }
        Ok(Self(positions))
    }
    pub fn get(&self, player: &str) -> Option<Position> {
        self.0.get(player).copied()
    }
    /// Players in table order of action (UTG first, BB last).
    pub fn ordered(&self) -> Vec<(&str, Position)> {
        let mut ordered = self
            .0
            .iter()
            .map(|(player, position)| (player.as_str(), *position))
            .collect::<Vec<_>>();
        ordered.sort_by_key(|(_, position)| *position);
        ordered
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
