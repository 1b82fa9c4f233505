use std::fmt;
use std::ops::RangeInclusive;

/// A closed range of item indices, `[start, end]`.
///
/// `start` may be greater than `end`; such a span is "reversed" (e.g. the
/// result of a drag that went upwards). Use [`Span::normalized`] or
/// [`Span::normalize`] to get the ascending form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn single(index: usize) -> Self {
        Self::new(index, index)
    }

    /// Builds an ascending span from two endpoints given in any order.
    pub fn normalized(a: usize, b: usize) -> Self {
        Self::new(a.min(b), a.max(b))
    }

    pub fn min(&self) -> usize {
        self.start.min(self.end)
    }

    pub fn max(&self) -> usize {
        self.start.max(self.end)
    }

    /// Number of covered indices, saturating at `usize::MAX` for `[0, usize::MAX]`.
    pub fn len(&self) -> usize {
        self.start.abs_diff(self.end).saturating_add(1)
    }

    pub fn is_normalized(&self) -> bool {
        self.start <= self.end
    }

    pub fn normalize(&self) -> Self {
        Self::normalized(self.start, self.end)
    }

    /// Whether `other` lies entirely within this span.
    ///
    /// `other` is normalized first. A reversed `self` is compared with `end`
    /// as its low bound and `start` as its high bound.
    pub fn contains(&self, other: &Span) -> bool {
        let other = other.normalize();
        if self.start < self.end {
            self.start <= other.start && self.end >= other.end
        } else {
            self.end <= other.start && self.start >= other.end
        }
    }

    pub fn contains_index(&self, index: usize) -> bool {
        self.contains(&Span::single(index))
    }

    /// Whether the two spans share at least one index. Bounds are inclusive.
    pub fn intersects(&self, other: &Span) -> bool {
        let other = other.normalize();
        if self.start < self.end {
            self.start <= other.end && self.end >= other.start
        } else {
            self.end <= other.end && self.start >= other.start
        }
    }

    /// The indices covered by both spans, or `None` if they are disjoint.
    pub fn intersect(&self, other: &Span) -> Option<Span> {
        if !self.intersects(other) {
            return None;
        }
        Some(Span::new(
            self.min().max(other.min()),
            self.max().min(other.max()),
        ))
    }

    /// Smallest ascending span covering both spans (and any gap between them).
    ///
    /// Reversed spans contribute their low and high bounds, not their raw
    /// `start`/`end`, so `[10, 5] ∪ [3, 4]` is `[3, 10]`.
    pub fn union(&self, other: &Span) -> Span {
        Span::new(self.min().min(other.min()), self.max().max(other.max()))
    }

    /// Covered indices in ascending order.
    pub fn indices(&self) -> RangeInclusive<usize> {
        self.min()..=self.max()
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl From<RangeInclusive<usize>> for Span {
    fn from(range: RangeInclusive<usize>) -> Self {
        Span::new(*range.start(), *range.end())
    }
}

impl From<Span> for RangeInclusive<usize> {
    fn from(span: Span) -> Self {
        span.indices()
    }
}
