use super::Component;

/// One aligned row of diff output.
///
/// A row always holds at least one component; the "both absent" case is not
/// representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowPair<'a> {
    LeftOnly(&'a Component),
    RightOnly(&'a Component),
    Both {
        left: &'a Component,
        right: &'a Component,
    },
}

impl<'a> RowPair<'a> {
    pub fn left(&self) -> Option<&'a Component> {
        match *self {
            RowPair::LeftOnly(c) => Some(c),
            RowPair::RightOnly(_) => None,
            RowPair::Both { left, .. } => Some(left),
        }
    }

    pub fn right(&self) -> Option<&'a Component> {
        match *self {
            RowPair::LeftOnly(_) => None,
            RowPair::RightOnly(c) => Some(c),
            RowPair::Both { right, .. } => Some(right),
        }
    }

    /// Name the row is aligned on
    pub fn name(&self) -> &'a str {
        match *self {
            RowPair::LeftOnly(c) | RowPair::RightOnly(c) => c.name(),
            RowPair::Both { left, .. } => left.name(),
        }
    }

    /// True when the component is on both sides but the vulnerability sets differ
    pub fn is_changed(&self) -> bool {
        match *self {
            RowPair::Both { left, right } => left.vulnerabilities() != right.vulnerabilities(),
            _ => false,
        }
    }
}

/// Row counts for one diff run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffSummary {
    pub left_only: usize,
    pub right_only: usize,
    pub in_both: usize,
    /// Subset of `in_both` whose vulnerability sets differ
    pub changed: usize,
}

impl DiffSummary {
    pub fn from_rows(rows: &[RowPair<'_>]) -> Self {
        rows.iter().fold(Self::default(), |mut summary, row| {
            match row {
                RowPair::LeftOnly(_) => summary.left_only += 1,
                RowPair::RightOnly(_) => summary.right_only += 1,
                RowPair::Both { .. } => {
                    summary.in_both += 1;
                    if row.is_changed() {
                        summary.changed += 1;
                    }
                }
            }
            summary
        })
    }

    pub fn total_rows(&self) -> usize {
        self.left_only + self.right_only + self.in_both
    }

    pub fn has_differences(&self) -> bool {
        self.left_only > 0 || self.right_only > 0 || self.changed > 0
    }
}
