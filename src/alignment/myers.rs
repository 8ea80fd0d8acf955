//! Myers' diff algorithm, used when the LCS table would not fit the memory
//! budget.
//!
//! * time: `O((N+M)D)`
//! * space `O(N+M)`
//!
//! Based on <https://github.com/mitsuhiko/similar/blob/7e15c44de11a1cd61e1149189929e189ef977fd8/src/algorithms/myers.rs>
//! and [the article by Eugene W. Myers](http://www.xmailserver.org/diff2.pdf).
//! Like the LCS variant it yields a maximal common subsequence, but ties
//! between equally long alignments are broken by the middle-snake search
//! rather than by position in document A.

use std::ops::{Index, IndexMut, Range};

use super::raw_operation::RawOperation;
use crate::{
    tokenizer::token::Token,
    utils::{common_prefix_len::common_prefix_len, common_suffix_len::common_suffix_len},
};

/// Diff `old` against `new` returning one `RawOperation` per token.
pub fn myers_diff<'a>(old: &'a [Token], new: &'a [Token]) -> Vec<RawOperation<'a>> {
    let max_d = (old.len() + new.len()).div_ceil(2) + 1;
    let mut vb = V::new(max_d);
    let mut vf = V::new(max_d);
    let mut result = Vec::with_capacity(old.len().max(new.len()));

    conquer(
        old,
        0..old.len(),
        new,
        0..new.len(),
        &mut vf,
        &mut vb,
        &mut result,
    );

    result
}

/// Furthest reaching endpoints of the D-paths, indexed by diagonal `k`
/// which may be negative. Only `x` is stored, `y` is `x - k`.
#[derive(Debug)]
struct V {
    offset: isize,
    v: Vec<usize>,
}

impl V {
    fn new(max_d: usize) -> Self {
        Self {
            offset: to_isize(max_d),
            v: vec![0; 2 * max_d],
        }
    }

    fn len(&self) -> usize { self.v.len() }

    fn position(&self, index: isize) -> usize {
        usize::try_from(index + self.offset)
            .unwrap_or(0)
            .min(self.v.len().saturating_sub(1))
    }
}

impl Index<isize> for V {
    type Output = usize;

    fn index(&self, index: isize) -> &Self::Output { &self.v[self.position(index)] }
}

impl IndexMut<isize> for V {
    fn index_mut(&mut self, index: isize) -> &mut Self::Output {
        let position = self.position(index);
        &mut self.v[position]
    }
}

fn to_isize(value: usize) -> isize { isize::try_from(value).unwrap_or(isize::MAX) }

fn split_at(range: Range<usize>, at: usize) -> (Range<usize>, Range<usize>) {
    (range.start..at, at..range.end)
}

/// Find the start of the middle snake of an optimal path by running the
/// search from both corners until the two frontiers overlap.
fn find_middle_snake(
    old: &[Token],
    old_range: Range<usize>,
    new: &[Token],
    new_range: Range<usize>,
    vf: &mut V,
    vb: &mut V,
) -> Option<(usize, usize)> {
    let n = old_range.len();
    let m = new_range.len();

    // The optimal edit script length has the same parity as `delta`.
    let delta = to_isize(n) - to_isize(m);
    let odd = delta & 1 == 1;

    vf[1] = 0;
    vb[1] = 0;

    let d_max = (n + m).div_ceil(2) + 1;
    debug_assert!(vf.len() >= d_max);
    debug_assert!(vb.len() >= d_max);

    for d in 0..to_isize(d_max) {
        // Forward path
        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && vf[k - 1] < vf[k + 1]) {
                vf[k + 1]
            } else {
                vf[k - 1] + 1
            };
            let y = usize::try_from(to_isize(x) - k).unwrap_or(0);

            let (x0, y0) = (x, y);
            if x < n && y < m {
                x += common_prefix_len(
                    old,
                    old_range.start + x..old_range.end,
                    new,
                    new_range.start + y..new_range.end,
                );
            }

            vf[k] = x;

            if odd && (k - delta).abs() <= (d - 1) && vf[k] + vb[-(k - delta)] >= n {
                return Some((x0 + old_range.start, y0 + new_range.start));
            }
        }

        // Backward path
        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && vb[k - 1] < vb[k + 1]) {
                vb[k + 1]
            } else {
                vb[k - 1] + 1
            };
            let mut y = usize::try_from(to_isize(x) - k).unwrap_or(0);

            if x < n && y < m {
                let advance = common_suffix_len(
                    old,
                    old_range.start..old_range.start + n - x,
                    new,
                    new_range.start..new_range.start + m - y,
                );
                x += advance;
                y += advance;
            }

            vb[k] = x;

            if !odd && (k - delta).abs() <= d && vb[k] + vf[-(k - delta)] >= n {
                return Some((n - x + old_range.start, m - y + new_range.start));
            }
        }
    }

    None
}

fn conquer<'a>(
    old: &'a [Token],
    mut old_range: Range<usize>,
    new: &'a [Token],
    mut new_range: Range<usize>,
    vf: &mut V,
    vb: &mut V,
    result: &mut Vec<RawOperation<'a>>,
) {
    let prefix_len = common_prefix_len(old, old_range.clone(), new, new_range.clone());
    result.extend(
        old[old_range.start..old_range.start + prefix_len]
            .iter()
            .map(RawOperation::Equal),
    );
    old_range.start += prefix_len;
    new_range.start += prefix_len;

    let suffix_len = common_suffix_len(old, old_range.clone(), new, new_range.clone());
    let suffix_start = old_range.end - suffix_len;
    old_range.end -= suffix_len;
    new_range.end -= suffix_len;

    if old_range.is_empty() && new_range.is_empty() {
        // nothing left between the prefix and the suffix
    } else if new_range.is_empty() {
        result.extend(old[old_range].iter().map(RawOperation::Delete));
    } else if old_range.is_empty() {
        result.extend(new[new_range].iter().map(RawOperation::Insert));
    } else if let Some((x_start, y_start)) =
        find_middle_snake(old, old_range.clone(), new, new_range.clone(), vf, vb)
    {
        let (old_a, old_b) = split_at(old_range, x_start);
        let (new_a, new_b) = split_at(new_range, y_start);
        conquer(old, old_a, new, new_a, vf, vb, result);
        conquer(old, old_b, new, new_b, vf, vb, result);
    } else {
        result.extend(old[old_range].iter().map(RawOperation::Delete));
        result.extend(new[new_range].iter().map(RawOperation::Insert));
    }

    result.extend(
        old[suffix_start..suffix_start + suffix_len]
            .iter()
            .map(RawOperation::Equal),
    );
}
