//! Operator-driven resolution of the disagreements of one comparison.

pub mod merged_span;
pub mod selection;

use log::{debug, info};

use crate::{
    ComparisonResult, DisagreementId, ReconcileError, Side, utils::string_builder::StringBuilder,
};
use merged_span::{MergedSpan, Origin};
use selection::Selection;

/// Progress of a reconciliation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcilerState {
    /// No disagreement has been resolved yet.
    Empty,
    /// Some, but not all, disagreements have been resolved.
    Partial,
    /// Every disagreement has a selection; the merged document can be
    /// assembled.
    Complete,
}

/// Holds a `ComparisonResult` together with the operator's selections and
/// assembles the merged document once every disagreement is resolved.
///
/// Writes take `&mut self`, so a single writer is enforced at compile time.
/// Hosts with concurrent input can put the reconciler behind a `Mutex`.
///
/// ```
/// use consent_reconcile::{Reconciler, Side, compare};
///
/// let comparison = compare("Fast for 6 hours.", "Fast for 8 hours.").unwrap();
/// let mut reconciler = Reconciler::new(comparison).unwrap();
/// assert!(reconciler.assemble().is_err());
///
/// reconciler.select(1, Side::B).unwrap();
/// assert_eq!(reconciler.assemble().unwrap(), "Fast for 8 hours.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciler {
    comparison: ComparisonResult,
    selection: Selection,
}

impl Reconciler {
    /// Start an empty session.
    ///
    /// # Errors
    ///
    /// `ReconcileError::InternalAlignment` if `comparison` is inconsistent,
    /// for example because it was deserialized from a corrupted file.
    pub fn new(comparison: ComparisonResult) -> Result<Self, ReconcileError> {
        comparison.validate()?;

        Ok(Self {
            comparison,
            selection: Selection::new(),
        })
    }

    #[must_use]
    pub fn comparison(&self) -> &ComparisonResult { &self.comparison }

    /// Choose `side`'s text for disagreement `id`, replacing any earlier
    /// choice for the same id.
    ///
    /// # Errors
    ///
    /// `ReconcileError::Input` if there's no disagreement with this id.
    pub fn select(&mut self, id: DisagreementId, side: Side) -> Result<(), ReconcileError> {
        self.ensure_known(id)?;

        let previous = self.selection.insert(id, side);
        debug!("Selected side {side} for disagreement {id} (previously {previous:?})");

        Ok(())
    }

    /// Apply a batch of choices, e.g. one restored from disk. Nothing is
    /// written unless every id is known.
    ///
    /// # Errors
    ///
    /// `ReconcileError::Input` naming the first unknown id.
    pub fn apply_selection(&mut self, selection: &Selection) -> Result<(), ReconcileError> {
        for (id, _) in selection.iter() {
            self.ensure_known(id)?;
        }

        for (id, side) in selection.iter() {
            self.selection.insert(id, side);
        }

        Ok(())
    }

    #[must_use]
    pub fn selection(&self, id: DisagreementId) -> Option<Side> { self.selection.get(id) }

    #[must_use]
    pub fn selections(&self) -> &Selection { &self.selection }

    #[must_use]
    pub fn resolved_count(&self) -> usize { self.selection.len() }

    #[must_use]
    pub fn total(&self) -> usize { self.comparison.diff_table().len() }

    /// Ids still waiting for a choice, in increasing order.
    #[must_use]
    pub fn unresolved_ids(&self) -> Vec<DisagreementId> {
        (1..=self.total())
            .filter(|id| !self.selection.contains(*id))
            .collect()
    }

    /// Fraction of resolved disagreements; `1.0` when there's nothing to
    /// resolve.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.total() == 0 {
            1.0
        } else {
            self.resolved_count() as f64 / self.total() as f64
        }
    }

    #[must_use]
    pub fn state(&self) -> ReconcilerState {
        if self.resolved_count() == self.total() {
            ReconcilerState::Complete
        } else if self.selection.is_empty() {
            ReconcilerState::Empty
        } else {
            ReconcilerState::Partial
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool { self.state() == ReconcilerState::Complete }

    /// Build the merged document: common text verbatim and, for every
    /// disagreement, the text of the selected document.
    ///
    /// # Errors
    ///
    /// `ReconcileError::NotReady` while any disagreement is unresolved.
    pub fn assemble(&self) -> Result<String, ReconcileError> {
        self.ensure_complete()?;

        let document_a = self.comparison.document(Side::A);
        let mut builder = StringBuilder::new(&document_a);

        for segment in self.comparison.segments(Side::A) {
            let Some(id) = segment.disagreement_id() else {
                builder.retain(segment.char_count());
                continue;
            };

            match self.chosen(id)? {
                Side::A => builder.retain(segment.char_count()),
                Side::B => {
                    builder.delete(segment.char_count());
                    builder.insert(self.text_of(id, Side::B)?);
                }
            }
        }

        debug_assert_eq!(builder.remaining(), 0, "Document A must be fully consumed");
        let merged = builder.build();
        info!(
            "Assembled merged document of {} characters from {} selections",
            merged.chars().count(),
            self.resolved_count()
        );

        Ok(merged)
    }

    /// Like [`Reconciler::assemble`], but keeps the merged document split
    /// into spans that remember their origin. Empty spans are left out.
    ///
    /// # Errors
    ///
    /// `ReconcileError::NotReady` while any disagreement is unresolved.
    pub fn assemble_spans(&self) -> Result<Vec<MergedSpan>, ReconcileError> {
        self.ensure_complete()?;

        let mut spans = Vec::with_capacity(self.comparison.segments_a().len());
        for segment in self.comparison.segments(Side::A) {
            let span = match segment.disagreement_id() {
                None => MergedSpan::new(segment.text().to_owned(), Origin::Common),
                Some(id) => {
                    let side = self.chosen(id)?;
                    MergedSpan::new(self.text_of(id, side)?.to_owned(), Origin::Chosen(side))
                }
            };

            if !span.text().is_empty() {
                spans.push(span);
            }
        }

        Ok(spans)
    }

    fn ensure_known(&self, id: DisagreementId) -> Result<(), ReconcileError> {
        if self.comparison.record(id).is_none() {
            return Err(ReconcileError::input(format!(
                "there is no disagreement with id {id}, valid ids are 1 to {}",
                self.total()
            )));
        }

        Ok(())
    }

    fn ensure_complete(&self) -> Result<(), ReconcileError> {
        if self.is_complete() {
            Ok(())
        } else {
            Err(ReconcileError::NotReady {
                unresolved: self.total() - self.resolved_count(),
                total: self.total(),
            })
        }
    }

    fn chosen(&self, id: DisagreementId) -> Result<Side, ReconcileError> {
        self.selection
            .get(id)
            .ok_or_else(|| ReconcileError::internal(format!("disagreement {id} has no selection")))
    }

    fn text_of(&self, id: DisagreementId, side: Side) -> Result<&str, ReconcileError> {
        self.comparison
            .record(id)
            .map(|record| record.text(side))
            .ok_or_else(|| {
                ReconcileError::internal(format!("disagreement {id} is not in the table"))
            })
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ErrorKind, compare};

    fn reconciler(a: &str, b: &str) -> Reconciler {
        Reconciler::new(compare(a, b).unwrap()).unwrap()
    }

    #[test]
    fn test_literal_example() {
        let mut session = reconciler(
            "The patient agrees to procedure X.",
            "The patient agrees to procedure Y.",
        );
        assert_eq!(session.total(), 1);

        session.select(1, Side::A).unwrap();
        assert_snapshot!(session.assemble().unwrap(), @"The patient agrees to procedure X.");

        session.select(1, Side::B).unwrap();
        assert_snapshot!(session.assemble().unwrap(), @"The patient agrees to procedure Y.");
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_reconciler_is_send_and_sync() {
        assert_send_sync::<Reconciler>();
        assert_send_sync::<ComparisonResult>();
    }

    #[test]
    fn test_shared_session_behind_a_mutex() {
        let session = std::sync::Arc::new(std::sync::Mutex::new(reconciler("a b c", "x b y")));

        let handles: Vec<_> = [(1, Side::A), (2, Side::B)]
            .into_iter()
            .map(|(id, side)| {
                let session = std::sync::Arc::clone(&session);
                std::thread::spawn(move || session.lock().unwrap().select(id, side).unwrap())
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(session.lock().unwrap().assemble().unwrap(), "a b y");
    }

    #[test]
    fn test_state_machine() {
        let mut session = reconciler("a b c", "x b y");
        assert_eq!(session.total(), 2);
        assert_eq!(session.state(), ReconcilerState::Empty);
        assert_eq!(session.unresolved_ids(), vec![1, 2]);

        session.select(2, Side::A).unwrap();
        assert_eq!(session.state(), ReconcilerState::Partial);
        assert!(!session.is_complete());
        assert_eq!(session.unresolved_ids(), vec![1]);
        assert!((session.progress() - 0.5).abs() < f64::EPSILON);

        session.select(1, Side::B).unwrap();
        assert_eq!(session.state(), ReconcilerState::Complete);
        assert_eq!(session.assemble().unwrap(), "x b c");
    }

    #[test]
    fn test_assemble_requires_every_selection() {
        let mut session = reconciler("a b c", "x b y");
        session.select(1, Side::A).unwrap();

        assert_eq!(
            session.assemble(),
            Err(ReconcileError::NotReady {
                unresolved: 1,
                total: 2
            })
        );
        assert_eq!(
            session.assemble_spans().map_err(|error| error.kind()),
            Err(ErrorKind::NotReady)
        );
    }

    #[test]
    fn test_idempotent_reselection() {
        let mut session = reconciler("a", "b");
        session.select(1, Side::A).unwrap();
        session.select(1, Side::B).unwrap();

        assert_eq!(session.resolved_count(), 1);
        assert_eq!(session.selection(1), Some(Side::B));
        assert_eq!(session.assemble().unwrap(), "b");
    }

    #[test]
    fn test_unknown_ids_are_rejected() {
        let mut session = reconciler("a", "b");

        assert_eq!(session.select(0, Side::A).map_err(|error| error.kind()), Err(ErrorKind::Input));
        assert_eq!(session.select(2, Side::A).map_err(|error| error.kind()), Err(ErrorKind::Input));

        let batch: Selection = [(1, Side::B), (7, Side::A)].into_iter().collect();
        assert!(session.apply_selection(&batch).is_err());
        assert_eq!(session.state(), ReconcilerState::Empty);
    }

    #[test]
    fn test_apply_selection() {
        let mut session = reconciler("one two three", "uno two tres");
        let batch: Selection = [(1, Side::B), (2, Side::A)].into_iter().collect();

        session.apply_selection(&batch).unwrap();
        assert_eq!(session.assemble().unwrap(), "uno two three");
    }

    #[test]
    fn test_identical_documents_are_complete() {
        let session = reconciler("same", "same");

        assert_eq!(session.state(), ReconcilerState::Complete);
        assert!((session.progress() - 1.0).abs() < f64::EPSILON);
        assert_eq!(session.assemble().unwrap(), "same");
    }

    #[test]
    fn test_insertions_and_deletions() {
        let mut session = reconciler("Keep calm.", "Keep very calm.");
        session.select(1, Side::A).unwrap();
        assert_eq!(session.assemble().unwrap(), "Keep calm.");

        session.select(1, Side::B).unwrap();
        assert_eq!(session.assemble().unwrap(), "Keep very calm.");
    }

    #[test]
    fn test_assemble_spans() {
        let mut session = reconciler("אני מסכים לניתוח", "אני מסרב לניתוח");
        session.select(1, Side::B).unwrap();

        let spans = session.assemble_spans().unwrap();
        assert_eq!(
            spans,
            vec![
                MergedSpan::new("אני ".to_owned(), Origin::Common),
                MergedSpan::new("מסרב".to_owned(), Origin::Chosen(Side::B)),
                MergedSpan::new(" לניתוח".to_owned(), Origin::Common),
            ]
        );
        assert_eq!(
            spans.iter().map(MergedSpan::text).collect::<String>(),
            session.assemble().unwrap()
        );
    }

    #[test]
    fn test_rejects_inconsistent_comparison() {
        let valid = compare("a", "b").unwrap();
        let comparison = ComparisonResult::from_parts(
            valid.segments_a().to_vec(),
            Vec::new(),
            valid.diff_table().to_vec(),
        );

        assert_eq!(
            Reconciler::new(comparison).map_err(|error| error.kind()),
            Err(ErrorKind::InternalAlignment)
        );
    }
}
