use super::{diff_record::DiffRecord, numbered_runs};
use crate::{RunPair, Side};

/// One record per changed run, numbered from 1 in document order. Common runs
/// never make it into the table.
#[must_use]
pub fn build_table(runs: &[RunPair]) -> Vec<DiffRecord> {
    numbered_runs(runs)
        .filter_map(|(id, run)| {
            id.map(|id| DiffRecord::new(id, run.text(Side::A), run.text(Side::B)))
        })
        .collect()
}
