use std::collections::BTreeMap;

use consent_reconcile::{ComparisonResult, DisagreementId, Selection, Side};
use pretty_assertions::assert_eq;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum Choice {
    A,
    B,
}

impl From<Choice> for Side {
    fn from(choice: Choice) -> Self {
        match choice {
            Choice::A => Side::A,
            Choice::B => Side::B,
        }
    }
}

/// `ExampleDocument` is one comparison and reconciliation scenario: two
/// versions of a document, the disagreements expected between them as
/// `(text in A, text in B)` pairs in id order, the operator's choices and the
/// merged document those choices produce.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ExampleDocument {
    a: String,
    b: String,
    differences: Vec<(String, String)>,
    selection: BTreeMap<DisagreementId, Choice>,
    merged: String,
}

impl ExampleDocument {
    #[must_use]
    pub fn a(&self) -> &str { &self.a }

    #[must_use]
    pub fn b(&self) -> &str { &self.b }

    #[must_use]
    pub fn text(&self, side: Side) -> &str {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
            .iter()
            .map(|(&id, &choice)| (id, choice.into()))
            .collect()
    }

    /// Asserts that the diff table lists exactly the expected disagreements.
    ///
    /// # Panics
    ///
    /// If the table differs from the expected one.
    pub fn assert_differences(&self, result: &ComparisonResult) {
        let differences = result
            .diff_table()
            .iter()
            .map(|record| (record.text_a().to_owned(), record.text_b().to_owned()))
            .collect::<Vec<_>>();

        assert_eq!(differences, self.differences, "{} vs {}", self.a, self.b);
    }

    /// Asserts that the merged document is the expected one.
    ///
    /// # Panics
    ///
    /// If the merged text differs from the expected one.
    pub fn assert_merged(&self, merged: &str) {
        assert_eq!(merged, self.merged, "{} vs {}", self.a, self.b);
    }
}
