use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Deduplicated candidates, iterated in ascending byte order.
pub type CandidateSet = BTreeSet<String>;

/// A full name split into lowercase, alphabetic-only parts.
///
/// `first` is never empty for a value produced by the parser. `last` stays
/// empty when the name had a single usable token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameComponents {
    pub first: String,
    pub middles: Vec<String>,
    pub last: String,
}

impl NameComponents {
    pub fn has_last(&self) -> bool {
        !self.last.is_empty()
    }

    /// First, middles and last in order, skipping empty parts.
    pub fn names(&self) -> Vec<&str> {
        std::iter::once(self.first.as_str())
            .chain(self.middles.iter().map(String::as_str))
            .chain(std::iter::once(self.last.as_str()))
            .filter(|name| !name.is_empty())
            .collect()
    }
}
