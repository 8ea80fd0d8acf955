//! LCS diff algorithm.
//!
//! * time: `O(NM)`, twice that when the table is checkpointed
//! * space: `O(NM)` cells, or `O(M√N)` when that exceeds the cell limit
//!
//! The common prefix is matched up-front, the rest goes through a suffix
//! table that is walked forward. Equal tokens are matched as soon as they are
//! met and, when the table allows either skip, the token of document B is
//! skipped so the earliest token of document A stays available for matching.
//! This makes the output a deterministic function of the input.
//!
//! Tables that don't fit the cell limit only keep every `stride`-th row and
//! recompute the rows in between when the walk reaches them. The values read
//! are the same, so the edit script is the same as with the full table.
use super::raw_operation::RawOperation;
use crate::{tokenizer::token::Token, utils::common_prefix_len::common_prefix_len};

/// Diff `old` against `new` returning one `RawOperation` per token, or
/// `None` if the table can't be held in `cell_limit` cells.
pub fn lcs_diff<'a>(
    old: &'a [Token],
    new: &'a [Token],
    cell_limit: usize,
) -> Option<Vec<RawOperation<'a>>> {
    let prefix = common_prefix_len(old, 0..old.len(), new, 0..new.len());
    let mut result: Vec<RawOperation<'a>> =
        old[..prefix].iter().map(RawOperation::Equal).collect();

    let old = &old[prefix..];
    let new = &new[prefix..];

    if !old.is_empty() && !new.is_empty() {
        let stride = stride(old.len(), new.len() + 1, cell_limit)?;
        walk(old, new, &mut Table::new(old, new, stride), &mut result);
    } else {
        result.extend(old.iter().map(RawOperation::Delete));
        result.extend(new.iter().map(RawOperation::Insert));
    }

    Some(result)
}

fn walk<'a>(
    old: &'a [Token],
    new: &'a [Token],
    table: &mut Table<'_>,
    result: &mut Vec<RawOperation<'a>>,
) {
    let mut old_idx = 0;
    let mut new_idx = 0;
    while old_idx < old.len() && new_idx < new.len() {
        if old[old_idx] == new[new_idx] {
            result.push(RawOperation::Equal(&old[old_idx]));
            old_idx += 1;
            new_idx += 1;
        } else if table.get(old_idx, new_idx + 1) >= table.get(old_idx + 1, new_idx) {
            result.push(RawOperation::Insert(&new[new_idx]));
            new_idx += 1;
        } else {
            result.push(RawOperation::Delete(&old[old_idx]));
            old_idx += 1;
        }
    }

    result.extend(old[old_idx..].iter().map(RawOperation::Delete));
    result.extend(new[new_idx..].iter().map(RawOperation::Insert));
}

/// The distance between stored rows for a table of `rows` rows of `width`
/// cells: `1` if the whole table fits `cell_limit`, about `√rows` if only
/// the checkpoints and one block of recomputed rows fit, `None` otherwise.
fn stride(rows: usize, width: usize, cell_limit: usize) -> Option<usize> {
    if rows.checked_mul(width)? <= cell_limit {
        return Some(1);
    }

    let stride = rows.isqrt().max(2);
    let stored_rows = rows.div_ceil(stride) + stride - 1;
    (stored_rows.checked_mul(width)? <= cell_limit).then_some(stride)
}

/// `get(i, j)` is the length of the LCS of `old[i..]` and `new[j..]`.
///
/// Rows that are multiples of `stride` are kept in `checkpoints`, the rows of
/// the block the walk is currently in are kept in `block`.
#[derive(Debug)]
struct Table<'a> {
    old: &'a [Token],
    new: &'a [Token],
    width: usize,
    stride: usize,
    checkpoints: Vec<u32>,
    block_start: Option<usize>,
    block: Vec<u32>,
}

impl<'a> Table<'a> {
    fn new(old: &'a [Token], new: &'a [Token], stride: usize) -> Self {
        let width = new.len() + 1;
        let mut checkpoints = vec![0; old.len().div_ceil(stride) * width];

        let mut below = vec![0; width];
        let mut row = vec![0; width];
        for i in (0..old.len()).rev() {
            fill_row(&old[i], new, &below, &mut row);
            if i % stride == 0 {
                let start = i / stride * width;
                checkpoints[start..start + width].copy_from_slice(&row);
            }
            std::mem::swap(&mut below, &mut row);
        }

        Self {
            old,
            new,
            width,
            stride,
            checkpoints,
            block_start: None,
            block: Vec::new(),
        }
    }

    fn get(&mut self, i: usize, j: usize) -> u32 {
        if i == self.old.len() || j == self.new.len() {
            return 0;
        }

        let checkpoint = i - i % self.stride;
        if checkpoint == i {
            return self.checkpoints[i / self.stride * self.width + j];
        }

        if self.block_start != Some(checkpoint) {
            self.fill_block(checkpoint);
        }
        self.block[(i - checkpoint - 1) * self.width + j]
    }

    /// Recompute the rows strictly between `checkpoint` and the next one.
    fn fill_block(&mut self, checkpoint: usize) {
        let next = (checkpoint + self.stride).min(self.old.len());
        let rows = next - checkpoint - 1;
        self.block.resize(rows * self.width, 0);

        let mut below = if next == self.old.len() {
            vec![0; self.width]
        } else {
            let start = next / self.stride * self.width;
            self.checkpoints[start..start + self.width].to_vec()
        };

        for i in (checkpoint + 1..next).rev() {
            let start = (i - checkpoint - 1) * self.width;
            let row = &mut self.block[start..start + self.width];
            fill_row(&self.old[i], self.new, &below, row);
            below.copy_from_slice(row);
        }

        self.block_start = Some(checkpoint);
    }
}

/// Compute one row of the suffix table from the row below it.
fn fill_row(token: &Token, new: &[Token], below: &[u32], row: &mut [u32]) {
    row[new.len()] = 0;
    for j in (0..new.len()).rev() {
        row[j] = if *token == new[j] {
            below[j + 1] + 1
        } else {
            below[j].max(row[j + 1])
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::alignment::raw_operation::replay;

    fn tokens(text: &str) -> Vec<Token> { text.chars().map(|c| c.to_string().into()).collect() }

    fn describe(operations: &[RawOperation<'_>]) -> String {
        operations
            .iter()
            .map(|operation| match operation {
                RawOperation::Equal(token) => format!("={}", token.original()),
                RawOperation::Delete(token) => format!("-{}", token.original()),
                RawOperation::Insert(token) => format!("+{}", token.original()),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn script(old: &str, new: &str) -> String {
        let old = tokens(old);
        let new = tokens(new);
        describe(&lcs_diff(&old, &new, usize::MAX).unwrap())
    }

    #[test]
    fn test_table() {
        let (old, new) = (tokens("ab"), tokens("xab"));
        let mut table = Table::new(&old, &new, 1);
        assert_eq!(table.get(0, 0), 2);
        assert_eq!(table.get(0, 1), 2);
        assert_eq!(table.get(1, 0), 1);
        assert_eq!(table.get(2, 3), 0);
    }

    #[test]
    fn test_checkpointed_table_matches_full_table() {
        let old = tokens("the quick brown fox jumps");
        let new = tokens("a quick brown dog jumped!");
        let mut full = Table::new(&old, &new, 1);

        for stride in [2, 3, 5, 7, old.len()] {
            let mut checkpointed = Table::new(&old, &new, stride);
            for i in 0..=old.len() {
                for j in 0..=new.len() {
                    assert_eq!(checkpointed.get(i, j), full.get(i, j), "{stride} {i} {j}");
                }
            }
        }
    }

    #[test]
    fn test_stride() {
        assert_eq!(stride(10, 10, 100), Some(1));
        assert_eq!(stride(100, 10, 999), Some(10));
        assert_eq!(stride(100, 10, 189), None);
        assert_eq!(stride(usize::MAX, 2, usize::MAX), None);
    }

    #[test]
    fn test_empty_examples() {
        assert_eq!(script("", ""), "");
        assert_eq!(script("a", ""), "-a");
        assert_eq!(script("", "a"), "+a");
    }

    #[test]
    fn test_replacement() {
        assert_eq!(script("abcd", "axd"), "=a +x -b -c =d");
        assert_eq!(script("abcd", "axcy"), "=a +x -b =c +y -d");
    }

    #[test]
    fn test_ties_prefer_earliest_match_in_old() {
        // Both "a"-s of `new` could pair with the single "a" of `old`.
        assert_eq!(script("a", "aa"), "=a +a");
        assert_eq!(script("ba", "ab"), "+a =b -a");
        assert_eq!(script("xay", "yax"), "+y +a =x -a -y");
    }

    #[test_case("nurse doctor, then rest", "doctor nurse, then rest")]
    #[test_case("a b a b a b a", "b a b a b a b")]
    #[test_case("the quick brown fox jumps", "a quick brown dog jumped!")]
    fn test_checkpointing_keeps_the_script(old: &str, new: &str) {
        let (old, new) = (tokens(old), tokens(new));
        let full = lcs_diff(&old, &new, usize::MAX).unwrap();

        let limit = old.len() * (new.len() + 1) - 1;
        let checkpointed = lcs_diff(&old, &new, limit).unwrap();

        assert_eq!(describe(&checkpointed), describe(&full));
    }

    #[test]
    fn test_does_not_fit() {
        assert!(lcs_diff(&tokens("abc"), &tokens("xyz"), 0).is_none());
        // Nothing left after the common prefix, no table is needed.
        assert!(lcs_diff(&tokens("abc"), &tokens("abc"), 0).is_some());
        assert!(lcs_diff(&tokens("abc"), &tokens("ab"), 0).is_some());
    }

    #[test]
    fn test_script_replays_both_inputs() {
        let old = tokens("the quick brown fox");
        let new = tokens("a quick brown dog!");
        let (replayed_old, replayed_new) = replay(&lcs_diff(&old, &new, usize::MAX).unwrap());

        assert_eq!(replayed_old.concat(), "the quick brown fox");
        assert_eq!(replayed_new.concat(), "a quick brown dog!");
    }
}
