// Copyright 2025 the Starmesh Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Merge summaries returned by [`RangeSet::merge`](crate::RangeSet::merge).

use crate::types::Span;

/// Summary of a single merge: what the set now stores where the input landed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Merged<K> {
    /// The covering span stored after coalescing.
    pub span: Span<K>,
    /// How many previously stored spans were folded into [`span`](Self::span).
    pub absorbed: usize,
    /// Whether total coverage grew. `false` exactly when the input was
    /// already wholly covered by one stored span.
    pub grew: bool,
}

impl<K> Merged<K> {
    /// True if the merge neither grew coverage nor replaced stored spans,
    /// i.e. the input was a strict no-op on the set's content.
    pub fn is_noop(&self) -> bool {
        !self.grew
    }
}
