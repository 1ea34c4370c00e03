use crate::scan_diff::domain::{Component, RowPair};

/// MergeDiff service aligning two name-sorted component lists
///
/// This is a single-pass two-pointer merge, O(n + m). Both inputs must be
/// sorted ascending by name without duplicate names, which every
/// normalizer guarantees. Rows are produced in non-decreasing name order and
/// a name present on both sides yields exactly one combined row.
pub struct MergeDiff;

impl MergeDiff {
    pub fn diff<'a>(left: &'a [Component], right: &'a [Component]) -> Vec<RowPair<'a>> {
        let mut rows = Vec::with_capacity(left.len().max(right.len()));
        let mut right_iter = right.iter().peekable();

        for l in left {
            while let Some(r) = right_iter.next_if(|r| r.name() < l.name()) {
                rows.push(RowPair::RightOnly(r));
            }

            match right_iter.next_if(|r| r.name() == l.name()) {
                Some(r) => rows.push(RowPair::Both { left: l, right: r }),
                None => rows.push(RowPair::LeftOnly(l)),
            }
        }

        rows.extend(right_iter.map(RowPair::RightOnly));
        rows
    }
}
