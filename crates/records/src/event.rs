use super::*;
use hhs_core::Chips;
use hhs_core::PlayerId;
use regex::Regex;
use std::sync::LazyLock;

/// `<actor>: <verb text>`; the actor ends at the first `": "`.
static ACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<actor>.+?): (?P<text>\S.*)$").expect("action pattern compiles")
});

/// One recorded action on one street.
///
/// Events are ordered within their street and that order is the only
/// ordering guarantee; hand text carries no timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct ActionEvent {
    actor: PlayerId,
    verb: Verb,
    amount: Option<Chips>,
    street: Street,
}

impl ActionEvent {
    pub fn new(actor: impl Into<PlayerId>, verb: Verb, amount: Option<Chips>, street: Street) -> Self {
        Self {
            actor: actor.into(),
            verb,
            amount,
            street,
        }
    }
    /// Parses one line of hand text. Lines that are not action lines, or
    /// whose verb is not part of the vocabulary, yield `None`.
    pub fn parse(line: &str, street: Street) -> Option<Self> {
        let captures = ACTION.captures(line.trim())?;
        let actor = captures.name("actor")?.as_str();
        let text = captures.name("text")?.as_str();
        match Self::interpret(text) {
            Some((verb, amount)) => Some(Self::new(actor, verb, amount, street)),
            None => {
                log::trace!("ignoring unrecognized action line {:?}", line);
                None
            }
        }
    }
    /// Maps verb text to a verb and its chip amount.
    ///
    /// Raises report the "to" amount (`raises to 60`, `raises 40 to 60`);
    /// everything else reports the first number. A trailing
    /// `and go all in` is tolerated.
    fn interpret(text: &str) -> Option<(Verb, Option<Chips>)> {
        let words = text.split_whitespace().collect::<Vec<&str>>();
        let numbers = || words.iter().filter_map(|w| w.parse::<Chips>().ok());
        match *words.first()? {
            "posts" => {
                let verb = match words.get(1..3) {
                    Some(["small", "blind"]) => Verb::PostSmallBlind,
                    Some(["big", "blind"]) => Verb::PostBigBlind,
                    _ => Verb::Post,
                };
                Some((verb, numbers().last()))
            }
            "folds" => Some((Verb::Fold, None)),
            "checks" => Some((Verb::Check, None)),
            "shows" => Some((Verb::Show, None)),
            "calls" => Some((Verb::Call, numbers().next())),
            "bets" => Some((Verb::Bet, numbers().next())),
            "wins" => Some((Verb::Win, numbers().next())),
            "raises" => {
                let to = words
                    .iter()
                    .position(|w| *w == "to")
                    .and_then(|i| words.get(i + 1))
                    .and_then(|w| w.parse::<Chips>().ok());
                Some((Verb::Raise, to.or_else(|| numbers().next())))
            }
            _ => None,
        }
    }
}

impl ActionEvent {
    pub fn actor(&self) -> &str {
        &self.actor
    }
    pub fn verb(&self) -> Verb {
        self.verb
    }
    pub fn amount(&self) -> Option<Chips> {
        self.amount
    }
    pub fn street(&self) -> Street {
        self.street
    }
    /// True if `player` performed this action.
    pub fn by(&self, player: &str) -> bool {
        self.actor == player
    }
    /// Same event attributed to a different (canonical) actor.
    pub fn renamed(self, actor: impl Into<PlayerId>) -> Self {
        Self {
            actor: actor.into(),
            ..self
        }
    }
}

impl std::fmt::Display for ActionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.amount {
            Some(amount) if self.verb == Verb::Raise => {
                write!(f, "{}: {} to {}", self.actor, self.verb, amount)
            }
            Some(amount) => write!(f, "{}: {} {}", self.actor, self.verb, amount),
            None => write!(f, "{}: {}", self.actor, self.verb),
        }
    }
}
