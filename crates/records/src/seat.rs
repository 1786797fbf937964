use super::*;
use hhs_core::Chips;
use hhs_core::PlayerId;
use regex::Regex;
use std::sync::LazyLock;

static SEAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^seat (?P<seat>\d+): (?P<name>.+) \((?P<stack>[^()]*) in chips\)")
        .expect("seat pattern compiles")
});

/// A player's seat at the start of a hand.
///
/// Seats are kept in the order their lines appear in the hand text. That
/// order, not the numeric seat id, defines table adjacency.
///
/// # Fields
///
/// - `seat` — Seat number as printed
/// - `player` — Canonical player identifier
/// - `stack` — Chips in front of the player when the hand began
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Seat {
    seat: usize,
    player: PlayerId,
    stack: Chips,
}

impl Seat {
    pub fn new(seat: usize, player: impl Into<PlayerId>, stack: Chips) -> Self {
        Self {
            seat,
            player: player.into(),
            stack,
        }
    }
    /// Parses a `seat N: name (S in chips)` line.
    ///
    /// Lines that are not seat lines yield `None`; seat lines whose number
    /// or stack is not an integer yield an error.
    pub fn parse(line: &str) -> Option<Result<Self, HandError>> {
        let captures = SEAT.captures(line.trim())?;
        let seat = captures["seat"].parse::<usize>();
        let stack = captures["stack"].trim().parse::<Chips>();
        Some(match (seat, stack) {
            (Ok(seat), Ok(stack)) => Ok(Self::new(seat, &captures["name"], stack)),
            _ => Err(HandError::Seat(line.trim().to_string())),
        })
    }
    /// Seat number as printed.
    pub fn seat(&self) -> usize {
        self.seat
    }
    /// Canonical player identifier.
    pub fn player(&self) -> &str {
        &self.player
    }
    /// Starting stack.
    pub fn stack(&self) -> Chips {
        self.stack
    }
    /// Same seat attributed to a different (canonical) player.
    pub fn renamed(self, player: impl Into<PlayerId>) -> Self {
        Self {
            player: player.into(),
            ..self
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "seat {}: {} ({} in chips)", self.seat, self.player, self.stack)
    }
}
