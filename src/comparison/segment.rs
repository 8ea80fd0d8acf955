#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{diff_record::DisagreementId, numbered_runs};
use crate::{RunPair, Side};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Common,
    Changed,
}

/// A renderable piece of one document. Changed segments carry the id of the
/// disagreement they belong to, which is shared with the other document's
/// segment for the same disagreement.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    text: String,
    kind: SegmentKind,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    disagreement_id: Option<DisagreementId>,
}

impl Segment {
    #[must_use]
    pub fn common(text: String) -> Self {
        Self {
            text,
            kind: SegmentKind::Common,
            disagreement_id: None,
        }
    }

    #[must_use]
    pub fn changed(text: String, id: DisagreementId) -> Self {
        Self {
            text,
            kind: SegmentKind::Changed,
            disagreement_id: Some(id),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    #[must_use]
    pub fn kind(&self) -> SegmentKind { self.kind }

    #[must_use]
    pub fn disagreement_id(&self) -> Option<DisagreementId> { self.disagreement_id }

    #[must_use]
    pub fn is_changed(&self) -> bool { self.kind == SegmentKind::Changed }

    #[must_use]
    pub fn char_count(&self) -> usize { self.text.chars().count() }
}

/// Render one document's view of the alignment: one segment per run, in
/// order. Both sides number the changed runs identically.
#[must_use]
pub fn render(runs: &[RunPair], side: Side) -> Vec<Segment> {
    numbered_runs(runs)
        .map(|(id, run)| match id {
            Some(id) => Segment::changed(run.text(side), id),
            None => Segment::common(run.text(side)),
        })
        .collect()
}
