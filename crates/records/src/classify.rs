use super::*;
use hhs_core::PlayerId;

/// Aggression and survivorship on a single street.
///
/// # Fields
///
/// - `original` — First player to raise
/// - `last` — Most recent raiser
/// - `raises` — Number of raises
/// - `survivors` — Players present on the street who never folded on it,
///   in order of first appearance
///
/// Survivorship is local to the street: a player with no recorded action
/// on it is not a survivor regardless of earlier streets. Forced posts do
/// not count as presence; shows and wins count as presence but never as
/// folding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    original: Option<PlayerId>,
    last: Option<PlayerId>,
    raises: usize,
    survivors: Vec<PlayerId>,
}

impl From<&[ActionEvent]> for Classification {
    fn from(events: &[ActionEvent]) -> Self {
        let raisers = events
            .iter()
            .filter(|e| e.verb().is_aggro())
            .map(|e| e.actor())
            .collect::<Vec<&str>>();
        let original = raisers.first().map(|s| s.to_string());
        let last = raisers.last().map(|s| s.to_string());
        let raises = raisers.len();
        let mut present = Vec::<&str>::new();
        events
            .iter()
            .filter(|e| !e.verb().is_forced())
            .map(|e| e.actor())
            .for_each(|actor| {
                if !present.contains(&actor) {
                    present.push(actor);
                }
            });
        let survivors = present
            .into_iter()
            .filter(|actor| {
                !events
                    .iter()
                    .any(|e| e.by(actor) && e.verb() == Verb::Fold)
            })
            .map(str::to_string)
            .collect();
        Self {
            original,
            last,
            raises,
            survivors,
        }
    }
}

impl Classification {
    /// First raiser on the street.
    pub fn original_aggressor(&self) -> Option<&str> {
        self.original.as_deref()
    }
    /// Most recent raiser on the street.
    pub fn last_aggressor(&self) -> Option<&str> {
        self.last.as_deref()
    }
    pub fn raise_count(&self) -> usize {
        self.raises
    }
    pub fn survivors(&self) -> &[PlayerId] {
        &self.survivors
    }
    pub fn is_survivor(&self, player: &str) -> bool {
        self.survivors.iter().any(|s| s == player)
    }
    /// At least two players remained when the street closed.
    pub fn is_contested(&self) -> bool {
        self.survivors.len() >= 2
    }
}
