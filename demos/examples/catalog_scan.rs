// Copyright 2025 the Starmesh Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated catalog scan.
//!
//! Stand in for an upstream region hash: emit many overlapping trixel ranges
//! for a circular region, coalesce them, then drain the pull cursor the way
//! a catalog reader would issue contiguous index scans.
//!
//! Run:
//! - `cargo run -p starmesh_demos --example catalog_scan`

use starmesh_ranges::{RangeSet, Span};

/// Fake region cover: trixel ranges a subdivided-sphere walk might emit,
/// deliberately overlapping and out of order.
fn region_cover(center: u64, radius: u64) -> Vec<Span<u64>> {
    let mut out = Vec::new();
    let mut offset = 0;
    while offset < radius {
        // Coarse block, then two finer blocks that overlap its edges.
        let lo = center + offset * 8;
        out.push(Span::new(lo, lo + 11));
        out.push(Span::new(lo + 10, lo + 14));
        if offset >= 2 {
            out.push(Span::new(center + (offset - 2) * 8 + 4, lo + 2));
        }
        offset += 3;
    }
    out
}

fn main() {
    let cover = region_cover(4096, 24);
    println!("upstream emitted {} candidate ranges", cover.len());

    let mut set: RangeSet<u64> = RangeSet::new();
    set.merge_all(cover).unwrap();
    println!("coalesced to {} disjoint scans", set.len());

    // Drain incrementally, as a reader interleaving scans with I/O would.
    let mut keys = 0u64;
    while let Some(span) = set.next_span() {
        println!("scan [{}, {}]", span.lo, span.hi);
        keys += span.hi - span.lo + 1;
    }
    println!("{keys} index keys covered");

    // A second pass needs an explicit rewind.
    set.reset();
    let rescan = set.next_span().expect("set is not empty");
    println!("first scan again: [{}, {}]", rescan.lo, rescan.hi);
}
