/// What a player did on one action line.
///
/// Verbs split into three families:
///
/// - forced posts (`PostSmallBlind`, `PostBigBlind`, `Post`) which never
///   count as a voluntary decision
/// - decisions (`Fold`, `Check`, `Call`, `Bet`, `Raise`)
/// - reveals (`Show`, `Win`) which mark presence on a street but are never
///   part of a folded/not-folded judgment
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verb {
    PostSmallBlind,
    PostBigBlind,
    Post,
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    Show,
    Win,
}

impl Verb {
    /// True for blinds and any other forced post.
    pub fn is_forced(&self) -> bool {
        matches!(self, Self::PostSmallBlind | Self::PostBigBlind | Self::Post)
    }
    /// True for showing cards or collecting a pot.
    pub fn is_reveal(&self) -> bool {
        matches!(self, Self::Show | Self::Win)
    }
    /// True for a betting decision made by the player.
    pub fn is_choice(&self) -> bool {
        !self.is_forced() && !self.is_reveal()
    }
    /// True for a raise.
    pub fn is_aggro(&self) -> bool {
        matches!(self, Self::Raise)
    }
    /// True if this verb reacts to, or contests, a wager already placed.
    pub fn is_contest(&self) -> bool {
        matches!(self, Self::Call | Self::Raise | Self::Fold)
    }
    /// The word as it appears in hand text.
    pub fn word(&self) -> &'static str {
        match self {
            Self::PostSmallBlind => "posts small blind",
            Self::PostBigBlind => "posts big blind",
            Self::Post => "posts",
            Self::Fold => "folds",
            Self::Check => "checks",
            Self::Call => "calls",
            Self::Bet => "bets",
            Self::Raise => "raises",
            Self::Show => "shows",
            Self::Win => "wins",
        }
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.word())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_partition() {
        for verb in [
            Verb::PostSmallBlind,
            Verb::PostBigBlind,
            Verb::Post,
            Verb::Fold,
            Verb::Check,
            Verb::Call,
            Verb::Bet,
            Verb::Raise,
            Verb::Show,
            Verb::Win,
        ] {
            let families = [verb.is_forced(), verb.is_reveal(), verb.is_choice()];
            assert_eq!(families.iter().filter(|&&b| b).count(), 1, "{}", verb);
        }
    }
}
