// Copyright 2025 the Starmesh Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The coalescing range set.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::ops::Bound;

use crate::iter::Spans;
use crate::merge::Merged;
use crate::types::{Inclusion, IndexKey, InvertedSpan, Span};

/// An accumulating set of closed key spans, kept coalesced.
///
/// Spans merged in any order and multiplicity are stored as the minimal
/// sorted set of disjoint, non-adjacent spans: no two stored spans overlap,
/// and no stored span ends exactly one key below where another begins.
/// Storage is a single ordered map from each span's `lo` to its `hi`, so
/// lookups and merges are logarithmic in the number of stored spans plus the
/// number of spans a merge absorbs.
///
/// The set is single-threaded and self-contained; use one instance per
/// in-flight query and serialize access externally if sharing one.
#[derive(Clone, Debug)]
pub struct RangeSet<K> {
    spans: BTreeMap<K, K>,
    cursor: Option<K>,
}

impl<K: IndexKey> RangeSet<K> {
    /// Create an empty set with the pull cursor at the start.
    pub fn new() -> Self {
        Self {
            spans: BTreeMap::new(),
            cursor: None,
        }
    }

    /// Merge a closed span into the set, coalescing as needed.
    ///
    /// Every stored span that overlaps `span` or abuts it (ends at
    /// `span.lo - 1` or begins at `span.hi + 1`) is absorbed, and the single
    /// covering span is stored in their place. Returns a [`Merged`] summary
    /// of what now covers the input.
    ///
    /// An inverted span is rejected with [`InvertedSpan`] and the set is left
    /// unchanged. The pull cursor is not adjusted; call [`reset`](Self::reset)
    /// before relying on a full traversal after any merge.
    pub fn merge(&mut self, span: Span<K>) -> Result<Merged<K>, InvertedSpan<K>> {
        if span.is_inverted() {
            return Err(InvertedSpan {
                lo: span.lo,
                hi: span.hi,
            });
        }

        // A stored span [a, b] is absorbed when a <= hi + 1 and b >= lo - 1.
        // Candidates are walked right to left from the last span starting at
        // or below hi + 1; their `b` values descend, so the first one that
        // falls short of lo - 1 ends the walk.
        let upper = match span.hi.succ() {
            Some(s) => Bound::Included(s),
            None => Bound::Unbounded,
        };
        let lo_edge = span.lo.pred();

        let mut new_lo = span.lo;
        let mut new_hi = span.hi;
        let mut covered = false;
        let mut doomed: Vec<K> = Vec::new();
        for (&a, &b) in self.spans.range((Bound::Unbounded, upper)).rev() {
            if !lo_edge.is_none_or(|e| b >= e) {
                break;
            }
            if a <= span.lo && span.hi <= b {
                covered = true;
            }
            doomed.push(a);
            new_lo = new_lo.min(a);
            new_hi = new_hi.max(b);
        }

        let absorbed = doomed.len();
        for a in &doomed {
            self.spans.remove(a);
        }
        self.spans.insert(new_lo, new_hi);

        // Invariant: the stored span must not touch its surviving neighbors.
        #[cfg(debug_assertions)]
        {
            if let Some((_, &b)) = self.spans.range(..new_lo).next_back() {
                debug_assert!(
                    b.succ().is_some_and(|s| s < new_lo),
                    "left neighbor overlaps or abuts the merged span"
                );
            }
            let after = (Bound::Excluded(new_lo), Bound::Unbounded);
            if let Some((&a, _)) = self.spans.range(after).next() {
                debug_assert!(
                    new_hi.succ().is_some_and(|s| s < a),
                    "right neighbor overlaps or abuts the merged span"
                );
            }
        }

        Ok(Merged {
            span: Span::new(new_lo, new_hi),
            absorbed,
            grew: !covered,
        })
    }

    /// Merge each span from an iterator.
    ///
    /// Stops at the first inverted span and returns its error; spans merged
    /// before the invalid one remain merged.
    pub fn merge_all<I>(&mut self, spans: I) -> Result<(), InvertedSpan<K>>
    where
        I: IntoIterator<Item = Span<K>>,
    {
        for span in spans {
            self.merge(span)?;
        }
        Ok(())
    }

    /// Classify a key against the stored spans with a single ordered search.
    ///
    /// For a single-key span `[p, p]`, `classify(p)` is [`Inclusion::Lo`].
    pub fn classify(&self, key: K) -> Inclusion {
        match self.spans.range(..=key).next_back() {
            Some((&lo, &hi)) if key <= hi => {
                if key == lo {
                    Inclusion::Lo
                } else if key == hi {
                    Inclusion::Hi
                } else {
                    Inclusion::Inside
                }
            }
            _ => Inclusion::Outside,
        }
    }

    /// Whether any stored span covers the key.
    pub fn contains(&self, key: K) -> bool {
        self.classify(key) != Inclusion::Outside
    }

    /// Whether any stored span overlaps the given closed span.
    ///
    /// Adjacency is not overlap, and an inverted query span is vacuously
    /// false; this is a read, so there is nothing to reject.
    pub fn intersects(&self, span: Span<K>) -> bool {
        if span.is_inverted() {
            return false;
        }
        match self.spans.range(..=span.hi).next_back() {
            Some((_, &hi)) => hi >= span.lo,
            None => false,
        }
    }

    /// Number of stored disjoint spans.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// True if no spans are stored.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The stored span with the smallest `lo`, if any.
    pub fn first(&self) -> Option<Span<K>> {
        self.spans
            .first_key_value()
            .map(|(&lo, &hi)| Span::new(lo, hi))
    }

    /// The stored span with the largest `lo`, if any.
    pub fn last(&self) -> Option<Span<K>> {
        self.spans
            .last_key_value()
            .map(|(&lo, &hi)| Span::new(lo, hi))
    }

    /// Iterate the stored spans in ascending `lo` order.
    ///
    /// Borrowing the set for the whole traversal, this is the snapshot-safe
    /// form: mutation while iterating is ruled out at compile time.
    pub fn iter(&self) -> Spans<'_, K> {
        Spans(self.spans.iter())
    }

    /// Pull the next stored span in ascending `lo` order.
    ///
    /// The first call after construction, [`reset`](Self::reset), or
    /// [`purge`](Self::purge) yields the smallest span. Exhaustion returns
    /// `None`, and every later call keeps returning `None` until the cursor
    /// is rewound. Interleaving merges with pulls leaves the traversal
    /// incomplete; call [`reset`](Self::reset) after mutating.
    pub fn next_span(&mut self) -> Option<Span<K>> {
        let next = match self.cursor {
            None => self.spans.iter().next(),
            Some(last) => self
                .spans
                .range((Bound::Excluded(last), Bound::Unbounded))
                .next(),
        };
        let (&lo, &hi) = next?;
        self.cursor = Some(lo);
        Some(Span::new(lo, hi))
    }

    /// Rewind the pull cursor to before the first span. Content is untouched.
    pub fn reset(&mut self) {
        self.cursor = None;
    }

    /// Discard every stored span and rewind the pull cursor.
    ///
    /// The set stays usable; this is a bulk clear, not a teardown.
    pub fn purge(&mut self) {
        self.spans.clear();
        self.cursor = None;
    }
}

impl<K: IndexKey> Default for RangeSet<K> {
    fn default() -> Self {
        Self::new()
    }
}
