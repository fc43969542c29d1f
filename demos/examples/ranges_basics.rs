// Copyright 2025 the Starmesh Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range set basics.
//!
//! Merge overlapping and adjacent spans, inspect the merge summary, and
//! classify keys against the coalesced set.
//!
//! Run:
//! - `cargo run -p starmesh_demos --example ranges_basics`

use starmesh_ranges::{Inclusion, RangeSet, Span};

fn main() {
    let mut set: RangeSet<u64> = RangeSet::new();

    set.merge(Span::new(10, 20)).unwrap();
    set.merge(Span::new(30, 40)).unwrap();
    println!("two blocks: {} spans", set.len());

    // Overlap on the left block, adjacency on the right one.
    let merged = set.merge(Span::new(15, 29)).unwrap();
    println!(
        "bridge [15, 29] -> stored [{}, {}], absorbed {}",
        merged.span.lo, merged.span.hi, merged.absorbed
    );
    assert_eq!(set.len(), 1, "bridging should leave a single span");

    for key in [9, 10, 25, 40, 41] {
        let what = set.classify(key);
        println!("classify({key}): {what:?}");
    }
    assert_eq!(set.classify(10), Inclusion::Lo);
    assert_eq!(set.classify(40), Inclusion::Hi);

    // Inverted input is rejected; the set is untouched.
    let err = set.merge(Span::new(9, 3)).unwrap_err();
    println!("rejected: {err}");
    assert_eq!(set.len(), 1);
}
