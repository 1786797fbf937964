use super::*;
use hhs_core::HandId;
use hhs_core::PlayerId;
use regex::Regex;
use std::sync::LazyLock;

/// A `#<digits>` hand number on a title line.
static HAND_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(?P<id>\d+)").expect("hand id pattern compiles"));

/// Turns one hand's canonical text into a [`HandRecord`].
///
/// Every player name in the text (seats, blind posters, actors, winners) is
/// passed through the alias mapping the normalizer was built with. The
/// mapping is borrowed and never changes while parsing.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a> {
    aliases: &'a Aliases,
}

impl Default for Normalizer<'static> {
    fn default() -> Self {
        Self { aliases: &IDENTITY }
    }
}

impl<'a> From<&'a Aliases> for Normalizer<'a> {
    fn from(aliases: &'a Aliases) -> Self {
        Self { aliases }
    }
}

impl<'a> Normalizer<'a> {
    pub fn aliases(&self) -> &'a Aliases {
        self.aliases
    }

    /// Parses the hand at position `index` of its corpus.
    ///
    /// Fails if the hand has no seat lines, no big blind post, a seat count
    /// outside the supported range, or a blind poster who is not seated.
    /// A hand without a `wins` line is not an error; it is returned with
    /// `is_complete() == false` and whatever streets were captured.
    pub fn normalize(&self, index: usize, text: &str) -> Result<HandRecord, HandError> {
        let segmenter = Segmenter::from(text);
        let seats = self.seats(segmenter.lines())?;
        let header = segmenter
            .header()
            .iter()
            .filter(|line| Seat::parse(line).is_none())
            .filter_map(|line| ActionEvent::parse(line, Street::Pref))
            .filter(|e| e.verb().is_forced())
            .map(|e| self.rename(e))
            .collect::<Vec<ActionEvent>>();
        let big_blind = header
            .iter()
            .rev()
            .find(|e| e.verb() == Verb::PostBigBlind)
            .map(|e| e.actor().to_string())
            .ok_or(HandError::Blindless)?;
        let small_blind = header
            .iter()
            .find(|e| e.verb() == Verb::PostSmallBlind)
            .map(|e| e.actor().to_string());
        let positions = Positions::resolve(&seats, small_blind.as_deref(), &big_blind)?;
        let streets = segmenter
            .segments()
            .map(|segment| {
                let events = segment.events().map(|e| self.rename(e));
                let events = match segment.street() {
                    Street::Pref => header.iter().cloned().chain(events).collect(),
                    _ => events.collect(),
                };
                StreetRecord::new(segment.street(), events)
            })
            .collect::<Vec<StreetRecord>>();
        let winners = self.winners(segmenter.lines());
        let complete = segmenter.is_complete();
        let id = Self::id(text).unwrap_or(index as HandId);
        log::trace!(
            "normalized hand {} with {} seats over {} streets",
            id,
            seats.len(),
            streets.len()
        );
        Ok(HandRecord::new(
            id,
            seats,
            small_blind,
            big_blind,
            positions,
            streets,
            winners,
            complete,
        ))
    }

    fn seats(&self, lines: &[&str]) -> Result<Vec<Seat>, HandError> {
        let seats = lines
            .iter()
            .filter_map(|line| Seat::parse(line))
            .map(|seat| seat.map(|s| self.reseat(s)))
            .collect::<Result<Vec<Seat>, HandError>>()?;
        match seats.is_empty() {
            true => Err(HandError::Seatless),
            false => Ok(seats),
        }
    }
    fn winners(&self, lines: &[&str]) -> Vec<PlayerId> {
        let mut winners = Vec::<PlayerId>::new();
        lines
            .iter()
            .filter(|line| Seat::parse(line).is_none())
            .filter_map(|line| ActionEvent::parse(line, Street::Pref))
            .filter(|e| e.verb() == Verb::Win)
            .map(|e| self.aliases.resolve(e.actor()).to_string())
            .for_each(|winner| {
                if !winners.contains(&winner) {
                    winners.push(winner);
                }
            });
        winners
    }
    /// Hand number from a `#<digits>` title line before the first seat.
    /// Reads the text alone, so it works on hands that fail to normalize.
    pub fn id(text: &str) -> Option<HandId> {
        text.lines()
            .map(str::trim)
            .take_while(|line| Seat::parse(line).is_none())
            .find_map(|line| HAND_ID.captures(line))
            .and_then(|c| c["id"].parse::<HandId>().ok())
    }
    fn rename(&self, event: ActionEvent) -> ActionEvent {
        let actor = self.aliases.resolve(event.actor()).to_string();
        event.renamed(actor)
    }
    fn reseat(&self, seat: Seat) -> Seat {
        let player = self.aliases.resolve(seat.player()).to_string();
        seat.renamed(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HAND: &str = "\
Hand #4417 - Holdem (No Limit)
seat 1: Alice (1000 in chips)
seat 2: Bob (1000 in chips)
seat 3: Carol (800 in chips)
seat 4: Dave (1200 in chips)
Alice: posts small blind 10
Bob: posts big blind 20
Carol: raises to 60
Dave: folds
Alice: folds
Bob: calls 60
*** FLOP *** [Ah, 7d, 2c]
Bob: checks
Carol: bets 80
Bob: calls 80
*** TURN *** [Ah, 7d, 2c] [Ks]
Bob: checks
Carol: checks
*** RIVER *** [Ah, 7d, 2c, Ks] [3h]
Bob: bets 200
Carol: calls 200
*** SHOW DOWN ***
Bob: shows [Kd Kh]
Carol: shows [Ac Qd]
Bob: wins 710";

    #[test]
    fn full_hand() {
        let hand = Normalizer::default().normalize(0, HAND).unwrap();
        assert_eq!(hand.id(), 4417);
        assert_eq!(hand.size(), 4);
        assert_eq!(hand.small_blind(), Some("Alice"));
        assert_eq!(hand.big_blind(), "Bob");
        assert_eq!(hand.position("Carol"), Some(Position::Cutoff));
        assert_eq!(hand.position("Dave"), Some(Position::Button));
        assert_eq!(hand.streets().len(), 4);
        assert_eq!(hand.last_street(), Street::Rive);
        assert_eq!(hand.winners(), &["Bob".to_string()]);
        assert_eq!(hand.stack("Carol"), Some(800));
        assert!(hand.is_complete());
    }
    #[test]
    fn preflop_includes_blind_posts() {
        let hand = Normalizer::default().normalize(0, HAND).unwrap();
        let verbs = hand
            .preflop()
            .events()
            .iter()
            .map(|e| e.verb())
            .collect::<Vec<_>>();
        assert_eq!(
            verbs,
            vec![
                Verb::PostSmallBlind,
                Verb::PostBigBlind,
                Verb::Raise,
                Verb::Fold,
                Verb::Fold,
                Verb::Call,
            ]
        );
        assert_eq!(hand.preflop().actions_by("Bob"), vec![Verb::Call]);
    }
    #[test]
    fn showdown_belongs_to_the_river() {
        let hand = Normalizer::default().normalize(0, HAND).unwrap();
        let river = hand.street(Street::Rive).unwrap();
        assert_eq!(river.events().len(), 5);
        assert!(river.has_winner());
        assert!(river.classify().is_contested());
        assert!(!hand.street(Street::Turn).unwrap().has_winner());
    }
    #[test]
    fn index_is_the_fallback_id() {
        let text = HAND.lines().skip(1).collect::<Vec<_>>().join("\n");
        let hand = Normalizer::default().normalize(12, &text).unwrap();
        assert_eq!(hand.id(), 12);
    }
    #[test]
    fn id_survives_a_malformed_hand() {
        let text = "Hand #90210 - Holdem (No Limit)\nAlice: folds";
        assert_eq!(Normalizer::id(text), Some(90210));
        assert_eq!(Normalizer::id("seat 1: A (10 in chips)\nHand #5"), None);
        assert!(Normalizer::default().normalize(0, text).is_err());
    }
    #[test]
    fn aliases_apply_everywhere() {
        let aliases = [("Bob", "bob-id"), ("Carol", "carol-id")]
            .into_iter()
            .collect::<Aliases>();
        let hand = Normalizer::from(&aliases).normalize(0, HAND).unwrap();
        assert_eq!(hand.big_blind(), "bob-id");
        assert!(hand.is_seated("carol-id"));
        assert!(!hand.is_seated("Carol"));
        assert_eq!(hand.position("carol-id"), Some(Position::Cutoff));
        assert!(hand.has_won("bob-id"));
        assert!(hand
            .streets()
            .iter()
            .flat_map(|s| s.events())
            .all(|e| e.actor() != "Bob" && e.actor() != "Carol"));
    }
    #[test]
    fn disconnect_keeps_what_was_captured() {
        let text = "\
seat 1: A (500 in chips)
seat 2: B (500 in chips)
A: posts small blind 5
B: posts big blind 10
A: raises to 30
B: calls 30
*** FLOP *** [2h, 3h, 4h]
B: checks";
        let hand = Normalizer::default().normalize(0, text).unwrap();
        assert!(!hand.is_complete());
        assert_eq!(hand.last_street(), Street::Flop);
        assert!(hand.winners().is_empty());
    }
    #[test]
    fn split_pot_lists_every_winner() {
        let text = "\
seat 1: A (500 in chips)
seat 2: B (500 in chips)
A: posts small blind 5
B: posts big blind 10
A: calls 10
B: checks
A: wins 10
B: wins 10";
        let hand = Normalizer::default().normalize(0, text).unwrap();
        assert_eq!(hand.winners(), &["A".to_string(), "B".to_string()]);
    }
    #[test]
    fn malformed_hands() {
        let normalizer = Normalizer::default();
        assert_eq!(
            normalizer.normalize(0, "A: calls 10\nB: checks").unwrap_err(),
            HandError::Seatless
        );
        assert_eq!(
            normalizer
                .normalize(0, "seat 1: A (10 in chips)\nseat 2: B (10 in chips)\nA: calls 10")
                .unwrap_err(),
            HandError::Blindless
        );
        let ten = (1..=10)
            .map(|i| format!("seat {}: P{} (100 in chips)", i, i))
            .chain(["P1: posts small blind 1".into(), "P2: posts big blind 2".into()])
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(
            normalizer.normalize(0, &ten).unwrap_err(),
            HandError::TableSize(10)
        );
        let one = "seat 1: A (10 in chips)\nA: posts big blind 2";
        assert_eq!(
            normalizer.normalize(0, one).unwrap_err(),
            HandError::TableSize(1)
        );
    }
}
