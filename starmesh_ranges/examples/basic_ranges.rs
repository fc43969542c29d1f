// Copyright 2025 the Starmesh Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Starmesh Ranges: merge, coalesce, classify, and iterate.

use starmesh_ranges::{RangeSet, Span};

fn main() {
    let mut set: RangeSet<u64> = RangeSet::new();
    set.merge(Span::new(1, 3)).unwrap();
    set.merge(Span::new(5, 7)).unwrap();

    // Bridge the gap
    let merged = set.merge(Span::new(4, 4)).unwrap();
    println!(
        "merged into [{}, {}], absorbing {} spans",
        merged.span.lo, merged.span.hi, merged.absorbed
    );

    for span in &set {
        println!("stored: [{}, {}]", span.lo, span.hi);
    }
    println!("classify(4): {:?}", set.classify(4));
}
