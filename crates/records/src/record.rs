use super::*;
use hhs_core::Chips;
use hhs_core::HandId;
use hhs_core::PlayerId;

/// Ordered actions of one dealt street.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreetRecord {
    street: Street,
    events: Vec<ActionEvent>,
}

impl StreetRecord {
    pub fn new(street: Street, events: Vec<ActionEvent>) -> Self {
        debug_assert!(events.iter().all(|e| e.street() == street));
        Self { street, events }
    }
    pub fn street(&self) -> Street {
        self.street
    }
    pub fn events(&self) -> &[ActionEvent] {
        &self.events
    }
    /// Betting decisions only: no posts, shows, or wins.
    pub fn choices(&self) -> impl Iterator<Item = &ActionEvent> {
        self.events.iter().filter(|e| e.verb().is_choice())
    }
    /// Verbs of everything `player` did voluntarily, reveals included.
    pub fn actions_by(&self, player: &str) -> Vec<Verb> {
        self.events
            .iter()
            .filter(|e| e.by(player) && !e.verb().is_forced())
            .map(|e| e.verb())
            .collect()
    }
    /// Did any `wins` event occur on this street.
    pub fn has_winner(&self) -> bool {
        self.events.iter().any(|e| e.verb() == Verb::Win)
    }
    pub fn classify(&self) -> Classification {
        Classification::from(self.events.as_slice())
    }
}

/// One hand, parsed once and never mutated afterward.
///
/// # Fields
///
/// - `id` — Hand number from the header, or its index in the corpus
/// - `seats` — Seats in listed order (2 to 9)
/// - `small_blind` — Small blind poster, absent on a dead small blind
/// - `big_blind` — Big blind poster
/// - `positions` — Canonical position of every labelled player
/// - `streets` — Dealt streets in order; preflop always first
/// - `winners` — Every player credited with a `wins` event, in order
/// - `complete` — False for a disconnected or truncated hand
#[derive(Debug, Clone)]
pub struct HandRecord {
    id: HandId,
    seats: Vec<Seat>,
    small_blind: Option<PlayerId>,
    big_blind: PlayerId,
    positions: Positions,
    streets: Vec<StreetRecord>,
    winners: Vec<PlayerId>,
    complete: bool,
}

impl HandRecord {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        id: HandId,
        seats: Vec<Seat>,
        small_blind: Option<PlayerId>,
        big_blind: PlayerId,
        positions: Positions,
        streets: Vec<StreetRecord>,
        winners: Vec<PlayerId>,
        complete: bool,
    ) -> Self {
        debug_assert!(streets.first().map(|s| s.street()) == Some(Street::Pref));
        Self {
            id,
            seats,
            small_blind,
            big_blind,
            positions,
            streets,
            winners,
            complete,
        }
    }
}

impl HandRecord {
    pub fn id(&self) -> HandId {
        self.id
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    /// Number of seated players.
    pub fn size(&self) -> usize {
        self.seats.len()
    }
    pub fn small_blind(&self) -> Option<&str> {
        self.small_blind.as_deref()
    }
    pub fn big_blind(&self) -> &str {
        &self.big_blind
    }
    pub fn positions(&self) -> &Positions {
        &self.positions
    }
    pub fn position(&self, player: &str) -> Option<Position> {
        self.positions.get(player)
    }
    pub fn is_seated(&self, player: &str) -> bool {
        self.seats.iter().any(|s| s.player() == player)
    }
    pub fn stack(&self, player: &str) -> Option<Chips> {
        self.seats
            .iter()
            .find(|s| s.player() == player)
            .map(|s| s.stack())
    }
    pub fn streets(&self) -> &[StreetRecord] {
        &self.streets
    }
    /// The record of `street`, if it was dealt.
    pub fn street(&self, street: Street) -> Option<&StreetRecord> {
        self.streets.iter().find(|s| s.street() == street)
    }
    /// Preflop always exists.
    pub fn preflop(&self) -> &StreetRecord {
        &self.streets[0]
    }
    /// Furthest street dealt.
    pub fn last_street(&self) -> Street {
        self.streets
            .last()
            .map(|s| s.street())
            .unwrap_or(Street::Pref)
    }
    pub fn winners(&self) -> &[PlayerId] {
        &self.winners
    }
    /// Whether `player` collected any pot, sole or split.
    pub fn has_won(&self, player: &str) -> bool {
        self.winners.iter().any(|w| w == player)
    }
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

impl std::fmt::Display for HandRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "hand #{} ({} seats)", self.id, self.size())?;
        for seat in self.seats.iter() {
            match self.position(seat.player()) {
                Some(position) => writeln!(f, "{:<4}{}", position.label(), seat)?,
                None => writeln!(f, "    {}", seat)?,
            }
        }
        for street in self.streets.iter() {
            writeln!(f, "*** {} ***", street.street().label().to_uppercase())?;
            for event in street.events() {
                writeln!(f, "{}", event)?;
            }
        }
        if !self.complete {
            writeln!(f, "(incomplete)")?;
        }
        Ok(())
    }
}
