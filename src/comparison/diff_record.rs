#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Side;

/// Identifies one disagreement within a comparison. Ids start at 1 and follow
/// document order.
pub type DisagreementId = usize;

/// The competing texts of the two documents at one disagreement. Either text
/// may be empty when one document inserts what the other lacks.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiffRecord {
    id: DisagreementId,
    text_a: String,
    text_b: String,
}

impl DiffRecord {
    #[must_use]
    pub fn new(id: DisagreementId, text_a: String, text_b: String) -> Self {
        Self { id, text_a, text_b }
    }

    #[must_use]
    pub fn id(&self) -> DisagreementId { self.id }

    #[must_use]
    pub fn text_a(&self) -> &str { &self.text_a }

    #[must_use]
    pub fn text_b(&self) -> &str { &self.text_b }

    #[must_use]
    pub fn text(&self, side: Side) -> &str {
        match side {
            Side::A => &self.text_a,
            Side::B => &self.text_b,
        }
    }
}
