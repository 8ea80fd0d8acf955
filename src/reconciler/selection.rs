use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{DisagreementId, Side};

/// The operator's choices: which document's text to keep for each resolved
/// disagreement. Disagreements without an entry are unresolved.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    choices: BTreeMap<DisagreementId, Side>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Record a choice, returning the one it replaced.
    pub fn insert(&mut self, id: DisagreementId, side: Side) -> Option<Side> {
        self.choices.insert(id, side)
    }

    #[must_use]
    pub fn get(&self, id: DisagreementId) -> Option<Side> { self.choices.get(&id).copied() }

    #[must_use]
    pub fn contains(&self, id: DisagreementId) -> bool { self.choices.contains_key(&id) }

    #[must_use]
    pub fn len(&self) -> usize { self.choices.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.choices.is_empty() }

    /// Choices in increasing id order.
    pub fn iter(&self) -> impl Iterator<Item = (DisagreementId, Side)> + '_ {
        self.choices.iter().map(|(id, side)| (*id, *side))
    }
}

impl FromIterator<(DisagreementId, Side)> for Selection {
    fn from_iter<I: IntoIterator<Item = (DisagreementId, Side)>>(iter: I) -> Self {
        Self {
            choices: iter.into_iter().collect(),
        }
    }
}
