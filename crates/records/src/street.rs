/// The four betting rounds of a Hold'em hand.
///
/// Preflop is always present once blinds have posted; each later street
/// exists only if its opening marker (`*** FLOP ***`, `*** TURN ***`,
/// `*** RIVER ***`) appears in the hand text.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    #[default]
    Pref = 0isize,
    Flop = 1isize,
    Turn = 2isize,
    Rive = 3isize,
}

impl Street {
    /// All four streets in order.
    pub const fn all() -> [Self; 4] {
        [Self::Pref, Self::Flop, Self::Turn, Self::Rive]
    }
    /// Human-readable name.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pref => "Preflop",
            Self::Flop => "Flop",
            Self::Turn => "Turn",
            Self::Rive => "River",
        }
    }
    /// Opening marker line. Preflop has none; it opens after the big blind.
    pub const fn marker(&self) -> Option<&'static str> {
        match self {
            Self::Pref => None,
            Self::Flop => Some("*** FLOP ***"),
            Self::Turn => Some("*** TURN ***"),
            Self::Rive => Some("*** RIVER ***"),
        }
    }
    /// Streets dealt after this one.
    pub fn later(&self) -> impl Iterator<Item = Self> + '_ {
        Self::all().into_iter().filter(move |s| s > self)
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pref => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::Rive => write!(f, "river"),
        }
    }
}

impl TryFrom<&str> for Street {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_uppercase().chars().next() {
            Some('P') => Ok(Self::Pref),
            Some('F') => Ok(Self::Flop),
            Some('T') => Ok(Self::Turn),
            Some('R') => Ok(Self::Rive),
            _ => Err(format!("invalid street {:?}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_streets() {
        assert_eq!(Street::Pref.later().count(), 3);
        assert_eq!(Street::Turn.later().collect::<Vec<_>>(), vec![Street::Rive]);
        assert_eq!(Street::Rive.later().count(), 0);
    }
    #[test]
    fn parse_by_initial() {
        assert_eq!(Street::try_from("river"), Ok(Street::Rive));
        assert_eq!(Street::try_from("Flop"), Ok(Street::Flop));
        assert!(Street::try_from("showdown").is_err());
    }
}
