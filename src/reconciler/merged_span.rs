#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Side;

/// Where a piece of the merged document came from.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Text shared by both documents.
    Common,
    /// Text of a disagreement, taken from the chosen document.
    Chosen(Side),
}

/// Wrapper type for `(String, Origin)` describing a span of the merged
/// document.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MergedSpan {
    text: String,
    origin: Origin,
}

impl MergedSpan {
    #[must_use]
    pub fn new(text: String, origin: Origin) -> Self { MergedSpan { text, origin } }

    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    #[must_use]
    pub fn origin(&self) -> Origin { self.origin }
}
