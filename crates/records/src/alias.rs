use hhs_core::PlayerId;
use std::collections::BTreeMap;

/// Explicit name-to-canonical-id mapping handed to the normalizer.
///
/// Names without an entry map to themselves. The mapping is built once by
/// the caller and never mutated during parsing.
///
/// Deserializes from a player registry of the form
/// `{ "players": { "<canonical>": { "display_name": "...", "aliases": [...] } } }`
/// where both the display name and every alias resolve to the canonical id.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(from = "Registry")]
pub struct Aliases(BTreeMap<String, PlayerId>);

/// The identity mapping.
pub static IDENTITY: Aliases = Aliases(BTreeMap::new());

impl Aliases {
    /// Canonical identifier for `name`.
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.0.get(name).map(String::as_str).unwrap_or(name)
    }
    /// Records that `alias` refers to `canonical`.
    pub fn insert(&mut self, alias: impl Into<String>, canonical: impl Into<PlayerId>) {
        self.0.insert(alias.into(), canonical.into());
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<A, C> FromIterator<(A, C)> for Aliases
where
    A: Into<String>,
    C: Into<PlayerId>,
{
    fn from_iter<I: IntoIterator<Item = (A, C)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(alias, canonical)| (alias.into(), canonical.into()))
                .collect(),
        )
    }
}

#[derive(serde::Deserialize)]
struct Registry {
    #[serde(default)]
    players: BTreeMap<PlayerId, Entry>,
}

#[derive(serde::Deserialize)]
struct Entry {
    display_name: Option<String>,
    #[serde(default)]
    aliases: Vec<String>,
}

impl From<Registry> for Aliases {
    fn from(registry: Registry) -> Self {
        registry
            .players
            .into_iter()
            .flat_map(|(canonical, entry)| {
                entry
                    .display_name
                    .into_iter()
                    .chain(entry.aliases)
                    .filter(|alias| *alias != canonical)
                    .map(|alias| (alias, canonical.clone()))
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}
