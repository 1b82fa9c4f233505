use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;

use smallvec::SmallVec;

use crate::Span;

/// Spans added or removed by a single mutation, in ascending order.
pub type SpanList = SmallVec<[Span; 2]>;

/// Selected indices of a list, stored as disjoint ascending spans.
///
/// Stored spans are always normalized and never touch: between the end of one
/// span and the start of the next there is at least one unselected index.
/// Memory and time therefore scale with the number of contiguous selected
/// runs, not with the number of selected items.
///
/// Every mutator returns the exact sub-ranges whose selection state changed,
/// so the owner can decide what to repaint or whom to notify.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<Span>", into = "Vec<Span>")
)]
pub struct ListSelection {
    ranges: Vec<Span>,
}

/// Orders `probe` relative to `target`, treating any overlap as equal.
fn intersection_order(probe: &Span, target: &Span) -> Ordering {
    if probe.start > target.end {
        Ordering::Greater
    } else if target.start > probe.end {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

impl ListSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects every index in `[start, end]` (endpoints in either order).
    ///
    /// Returns the sub-ranges that were not selected before the call. Spans
    /// that overlap or touch the new range are merged with it into one.
    pub fn add_range(&mut self, start: usize, end: usize) -> SpanList {
        let range = Span::normalized(start, end);
        let mut added = SpanList::new();

        // First span ending at or after the new range's start, widened to
        // include a span that ends right before it.
        let mut lower = self.ranges.partition_point(|r| r.end < range.start);
        if lower > 0 && self.ranges[lower - 1].end + 1 == range.start {
            lower -= 1;
        }

        // One past the last span starting at or before the new range's end,
        // widened to include a span that starts right after it.
        let mut upper = self.ranges.partition_point(|r| r.start <= range.end);
        if upper < self.ranges.len() && self.ranges[upper].start - 1 == range.end {
            upper += 1;
        }

        if lower >= upper {
            self.ranges.insert(lower, range);
            added.push(range);
        } else {
            let first = self.ranges[lower];
            let last = self.ranges[upper - 1];

            if range.start < first.start {
                added.push(Span::new(range.start, first.start - 1));
            }
            for pair in self.ranges[lower..upper].windows(2) {
                added.push(Span::new(pair[0].end + 1, pair[1].start - 1));
            }
            if range.end > last.end {
                added.push(Span::new(last.end + 1, range.end));
            }

            self.ranges[lower] = Span::new(range.start.min(first.start), range.end.max(last.end));
            self.ranges.drain(lower + 1..upper);
        }

        self.debug_check();
        added
    }

    /// Deselects every index in `[start, end]` (endpoints in either order).
    ///
    /// Returns the sub-ranges that were selected before the call, left to
    /// right: the trimmed tail of a leading span, every span removed whole,
    /// then the trimmed head of a trailing span.
    pub fn remove_range(&mut self, start: usize, end: usize) -> SpanList {
        let range = Span::normalized(start, end);
        let mut removed = SpanList::new();

        let mut lower = self.ranges.partition_point(|r| r.end < range.start);
        let Some(&first) = self.ranges.get(lower) else {
            return removed;
        };

        if first.start < range.start && first.end > range.end {
            // Strictly inside one span: split it in two.
            self.ranges[lower] = Span::new(first.start, range.start - 1);
            self.ranges.insert(lower + 1, Span::new(range.end + 1, first.end));
            removed.push(range);
            self.debug_check();
            return removed;
        }

        let mut leading = None;
        if range.start > first.start {
            leading = Some(Span::new(range.start, first.end));
            self.ranges[lower] = Span::new(first.start, range.start - 1);
            lower += 1;
        }

        let mut upper = self.ranges.partition_point(|r| r.start <= range.end);
        let mut trailing = None;
        if upper > lower {
            let last = self.ranges[upper - 1];
            if range.end < last.end {
                trailing = Some(Span::new(last.start, range.end));
                self.ranges[upper - 1] = Span::new(range.end + 1, last.end);
                upper -= 1;
            }
        }

        removed.extend(leading);
        if upper > lower {
            removed.extend(self.ranges.drain(lower..upper));
        }
        removed.extend(trailing);

        self.debug_check();
        removed
    }

    pub fn clear(&mut self) {
        self.ranges.clear();
    }

    /// Number of stored spans (not selected indices, see [`Self::selected_count`]).
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<Span> {
        self.ranges.get(i).copied()
    }

    pub fn first(&self) -> Option<Span> {
        self.ranges.first().copied()
    }

    pub fn last(&self) -> Option<Span> {
        self.ranges.last().copied()
    }

    pub fn spans(&self) -> &[Span] {
        &self.ranges
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Span> {
        self.ranges.iter()
    }

    /// Every selected index, ascending.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.ranges.iter().flat_map(Span::indices)
    }

    /// Number of selected indices, saturating at `usize::MAX`.
    pub fn selected_count(&self) -> usize {
        self.ranges
            .iter()
            .fold(0, |count, span| count.saturating_add(span.len()))
    }

    /// Position of `span` if it is stored exactly as given.
    ///
    /// A span that merely overlaps a stored span yields `None`.
    pub fn index_of(&self, span: &Span) -> Option<usize> {
        let i = self.search(span).ok()?;
        (self.ranges[i] == *span).then_some(i)
    }

    pub fn contains_index(&self, index: usize) -> bool {
        self.search(&Span::single(index)).is_ok()
    }

    /// Shifts the selection to account for one item inserted at `index`.
    ///
    /// A span that contains `index` past its first position grows by one;
    /// every span after the insertion point moves up by one. Returns the
    /// number of spans that changed.
    ///
    /// A selected `usize::MAX` has nowhere to move and is deselected.
    pub fn insert_index(&mut self, index: usize) -> usize {
        let mut updated = 0;
        if self.ranges.last().is_some_and(|s| s.end == usize::MAX) {
            let len = self.ranges.len();
            self.remove_range(usize::MAX, usize::MAX);
            // Count the trimmed span here unless the shift below touches it.
            if self.ranges.len() < len || self.ranges[len - 1].end < index {
                updated += 1;
            }
        }

        let i = match self.search(&Span::single(index)) {
            Ok(i) if self.ranges[i].start < index => {
                self.ranges[i].end += 1;
                updated += 1;
                i + 1
            }
            Ok(i) | Err(i) => i,
        };

        for span in &mut self.ranges[i..] {
            span.start += 1;
            span.end += 1;
            updated += 1;
        }

        self.debug_check();
        updated
    }

    /// Shifts the selection to account for `count` items removed at `index`.
    ///
    /// Selection inside the removed block is dropped and returned; spans after
    /// it move down by `count`. Spans brought into contact by the shift are
    /// merged.
    pub fn remove_indexes(&mut self, index: usize, count: usize) -> SpanList {
        if count == 0 {
            return SpanList::new();
        }

        let removed = self.remove_range(index, index.saturating_add(count - 1));
        debug_assert!(
            !self.contains_index(index),
            "index {index} still selected after removal"
        );

        let i = self.ranges.partition_point(|r| r.start < index);
        for span in &mut self.ranges[i..] {
            span.start -= count;
            span.end -= count;
        }

        if i > 0 && i < self.ranges.len() && self.ranges[i - 1].end + 1 == self.ranges[i].start {
            self.ranges[i - 1].end = self.ranges[i].end;
            self.ranges.remove(i);
        }

        self.debug_check();
        removed
    }

    fn search(&self, span: &Span) -> Result<usize, usize> {
        let target = span.normalize();
        self.ranges
            .binary_search_by(|probe| intersection_order(probe, &target))
    }

    pub(crate) fn is_well_formed(&self) -> bool {
        self.ranges.iter().all(Span::is_normalized)
            && self.ranges.windows(2).all(|w| w[0].end + 1 < w[1].start)
    }

    fn debug_check(&self) {
        debug_assert!(self.is_well_formed(), "malformed list selection: {self}");
    }
}

impl Index<usize> for ListSelection {
    type Output = Span;

    fn index(&self, i: usize) -> &Span {
        &self.ranges[i]
    }
}

impl<'a> IntoIterator for &'a ListSelection {
    type Item = &'a Span;
    type IntoIter = std::slice::Iter<'a, Span>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

impl Extend<Span> for ListSelection {
    fn extend<T: IntoIterator<Item = Span>>(&mut self, iter: T) {
        for span in iter {
            self.add_range(span.start, span.end);
        }
    }
}

impl FromIterator<Span> for ListSelection {
    fn from_iter<T: IntoIterator<Item = Span>>(iter: T) -> Self {
        let mut selection = Self::new();
        selection.extend(iter);
        selection
    }
}

impl From<Vec<Span>> for ListSelection {
    fn from(spans: Vec<Span>) -> Self {
        spans.into_iter().collect()
    }
}

impl From<ListSelection> for Vec<Span> {
    fn from(selection: ListSelection) -> Self {
        selection.ranges
    }
}

impl fmt::Display for ListSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, span) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{span}")?;
        }
        f.write_str("]")
    }
}
