#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{
    diff_record::{DiffRecord, DisagreementId},
    diff_table::build_table,
    segment::{Segment, render},
};
use crate::{ReconcileError, RunPair, Side};

/// The complete, immutable outcome of comparing two documents: each
/// document's view as a list of segments and the table of disagreements
/// between them.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComparisonResult {
    segments_a: Vec<Segment>,
    segments_b: Vec<Segment>,
    diff_table: Vec<DiffRecord>,
}

impl ComparisonResult {
    #[must_use]
    pub fn from_runs(runs: &[RunPair]) -> Self {
        Self {
            segments_a: render(runs, Side::A),
            segments_b: render(runs, Side::B),
            diff_table: build_table(runs),
        }
    }

    /// Assemble a result from its parts, e.g. when it was transported in a
    /// format other than the serde one. The parts aren't checked, call
    /// [`ComparisonResult::validate`] before relying on them.
    #[must_use]
    pub fn from_parts(
        segments_a: Vec<Segment>,
        segments_b: Vec<Segment>,
        diff_table: Vec<DiffRecord>,
    ) -> Self {
        Self {
            segments_a,
            segments_b,
            diff_table,
        }
    }

    #[must_use]
    pub fn segments(&self, side: Side) -> &[Segment] {
        match side {
            Side::A => &self.segments_a,
            Side::B => &self.segments_b,
        }
    }

    #[must_use]
    pub fn segments_a(&self) -> &[Segment] { &self.segments_a }

    #[must_use]
    pub fn segments_b(&self) -> &[Segment] { &self.segments_b }

    #[must_use]
    pub fn diff_table(&self) -> &[DiffRecord] { &self.diff_table }

    /// Look up a disagreement by id.
    #[must_use]
    pub fn record(&self, id: DisagreementId) -> Option<&DiffRecord> {
        id.checked_sub(1)
            .and_then(|index| self.diff_table.get(index))
            .filter(|record| record.id() == id)
    }

    /// Reconstruct one of the compared documents from its segments.
    #[must_use]
    pub fn document(&self, side: Side) -> String {
        self.segments(side).iter().map(Segment::text).collect()
    }

    /// Whether the two documents were identical.
    #[must_use]
    pub fn is_identical(&self) -> bool { self.diff_table.is_empty() }

    /// Check the structural invariants linking the two segment lists and the
    /// diff table.
    ///
    /// # Errors
    ///
    /// `ReconcileError::InternalAlignment` describing the first violated
    /// invariant.
    pub fn validate(&self) -> Result<(), ReconcileError> {
        for (index, record) in self.diff_table.iter().enumerate() {
            if record.id() != index + 1 {
                return Err(ReconcileError::internal(format!(
                    "diff table entry {index} has id {} instead of {}",
                    record.id(),
                    index + 1
                )));
            }
        }

        if self.segments_a.len() != self.segments_b.len() {
            return Err(ReconcileError::internal(format!(
                "document A has {} segments but document B has {}",
                self.segments_a.len(),
                self.segments_b.len()
            )));
        }

        let mut expected_id = 1;
        for (segment_a, segment_b) in self.segments_a.iter().zip(&self.segments_b) {
            match (segment_a.disagreement_id(), segment_b.disagreement_id()) {
                (None, None) => {
                    if segment_a.is_changed() || segment_b.is_changed() {
                        return Err(ReconcileError::internal(
                            "changed segment without a disagreement id",
                        ));
                    }
                    if segment_a.text() != segment_b.text() {
                        return Err(ReconcileError::internal(format!(
                            "common segments differ: {:?} and {:?}",
                            segment_a.text(),
                            segment_b.text()
                        )));
                    }
                }
                (Some(id_a), Some(id_b)) if id_a == id_b && id_a == expected_id => {
                    if !segment_a.is_changed() || !segment_b.is_changed() {
                        return Err(ReconcileError::internal(format!(
                            "common segment carries disagreement id {id_a}"
                        )));
                    }
                    let record = self.record(id_a).ok_or_else(|| {
                        ReconcileError::internal(format!("disagreement {id_a} is not in the table"))
                    })?;
                    if record.text_a() != segment_a.text() || record.text_b() != segment_b.text() {
                        return Err(ReconcileError::internal(format!(
                            "segments of disagreement {id_a} differ from its table entry"
                        )));
                    }
                    expected_id += 1;
                }
                (id_a, id_b) => {
                    return Err(ReconcileError::internal(format!(
                        "segment ids {id_a:?} and {id_b:?} do not match, expected \
                         disagreement {expected_id}"
                    )));
                }
            }
        }

        if expected_id != self.diff_table.len() + 1 {
            return Err(ReconcileError::internal(format!(
                "the diff table has {} entries but the segments reference {}",
                self.diff_table.len(),
                expected_id - 1
            )));
        }

        Ok(())
    }
}
