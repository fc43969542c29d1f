// Copyright 2025 the Starmesh Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=starmesh_ranges --heading-base-level=0

//! Starmesh Ranges: coalesced sets of closed trixel-ID ranges.
//!
//! A sky-catalog region query starts upstream, where a patch of the sphere is
//! hashed into a batch of candidate index ranges. This crate owns the step
//! after that: accumulate arbitrary, possibly overlapping or adjacent closed
//! ranges of index keys and keep them coalesced into the minimal sorted set
//! of disjoint spans, so the catalog scan downstream is a short list of
//! contiguous reads instead of a per-object test.
//!
//! - Merge closed spans in any order and multiplicity with [`RangeSet::merge`];
//!   each merge reports what it coalesced via [`Merged`].
//! - Classify a key against the accumulated set with [`RangeSet::classify`].
//! - Walk the resulting disjoint spans with [`RangeSet::iter`] or the
//!   resettable pull cursor [`RangeSet::next_span`].
//!
//! It is generic over the endpoint type through [`IndexKey`] (implemented for
//! all primitive integers) and does not depend on any sky-hashing crate.
//! Higher layers compute trixel ranges for a region and feed them here.
//!
//! # Example
//!
//! ```rust
//! use starmesh_ranges::{Inclusion, RangeSet, Span};
//!
//! let mut set: RangeSet<u64> = RangeSet::new();
//! set.merge(Span::new(1, 3)).unwrap();
//! set.merge(Span::new(5, 7)).unwrap();
//! assert_eq!(set.len(), 2);
//!
//! // A single key bridges the two spans into one.
//! let merged = set.merge(Span::new(4, 4)).unwrap();
//! assert_eq!(merged.span, Span::new(1, 7));
//! assert_eq!(merged.absorbed, 2);
//! assert_eq!(set.len(), 1);
//!
//! assert_eq!(set.classify(1), Inclusion::Lo);
//! assert_eq!(set.classify(4), Inclusion::Inside);
//! assert_eq!(set.classify(8), Inclusion::Outside);
//! ```
//!
//! ## Choosing an iteration form
//!
//! - [`RangeSet::iter`]: borrowing, double-ended, exact-size. The borrow
//!   checker rules out mutation for the whole traversal; reach for this one
//!   unless a pull protocol is imposed on you.
//! - [`RangeSet::next_span`] / [`RangeSet::reset`]: a stateful pull cursor
//!   for callers that drain incrementally between other work. Exhaustion is
//!   a terminal `None`, not an error, and [`RangeSet::reset`] restarts the
//!   identical sequence. After a merge, call [`RangeSet::reset`] before
//!   relying on a full traversal.
//!
//! ### Inverted spans
//!
//! `merge` rejects a span whose endpoints are inverted (`hi < lo`) with an
//! [`InvertedSpan`] error and leaves the set untouched. Read-only queries
//! treat inverted spans as covering nothing.

#![no_std]

extern crate alloc;

pub mod iter;
pub mod merge;
pub mod set;
pub mod types;

pub use iter::Spans;
pub use merge::Merged;
pub use set::RangeSet;
pub use types::{Inclusion, IndexKey, InvertedSpan, Span};
