//! One-to-one pairing of lines at a single structural position.
//!
//! Candidates are paired in two passes: identical lines first, then lines
//! that correlate as modified. Within a pass, candidate pairs are taken
//! greedily by `(|i - j|, i + j, i)`, so a line prefers the counterpart
//! closest to its own position. The ordering key is symmetric in its two
//! sides, which makes swapping reference and compared swap the unmatched
//! sets exactly.
//!
//! Lines are bucketed by identity key, so only lines that correlate ever
//! meet. Each reference line offers only its nearest untaken partner per
//! bucket to a min-heap. A popped offer whose partner was taken meanwhile
//! is replaced by the next nearest one.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap, HashMap};

use nconf_tree::LineNode;

use crate::correlate::{correlate, identity_keys, Correlation};

/// A reference line paired with a compared line, by position in their lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Pairing {
    pub reference: usize,
    pub compared: usize,
    pub correlation: Correlation,
}

/// The outcome of matching one level.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct LevelMatch {
    /// Pairs, ordered by reference position.
    pub pairs: Vec<Pairing>,
    /// Reference positions left without a partner.
    pub unmatched_reference: Vec<usize>,
    /// Compared positions left without a partner.
    pub unmatched_compared: Vec<usize>,
}

/// An offered pair. Field order is the greedy order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Offer {
    distance: usize,
    sum: usize,
    reference: usize,
    compared: usize,
    bucket: usize,
}

pub(crate) fn match_level(reference: &[&LineNode], compared: &[&LineNode]) -> LevelMatch {
    let mut ref_taken = vec![false; reference.len()];
    let mut cmp_taken = vec![false; compared.len()];
    let mut pairs = Vec::new();

    for wanted in [Correlation::Identical, Correlation::Modified] {
        pairs.extend(match_pass(
            reference,
            compared,
            wanted,
            &mut ref_taken,
            &mut cmp_taken,
        ));
    }

    pairs.sort_by_key(|p| p.reference);
    LevelMatch {
        pairs,
        unmatched_reference: untaken(&ref_taken),
        unmatched_compared: untaken(&cmp_taken),
    }
}

fn match_pass(
    reference: &[&LineNode],
    compared: &[&LineNode],
    wanted: Correlation,
    ref_taken: &mut [bool],
    cmp_taken: &mut [bool],
) -> Vec<Pairing> {
    let mut bucket_ids = HashMap::new();
    let mut buckets: Vec<BTreeSet<usize>> = Vec::new();
    let mut cmp_buckets: Vec<Vec<usize>> = vec![Vec::new(); compared.len()];
    for (j, line) in compared.iter().enumerate() {
        if cmp_taken[j] {
            continue;
        }
        for key in identity_keys(&line.content, wanted) {
            let id = *bucket_ids.entry(key).or_insert_with(|| {
                buckets.push(BTreeSet::new());
                buckets.len() - 1
            });
            buckets[id].insert(j);
            cmp_buckets[j].push(id);
        }
    }

    let mut heap = BinaryHeap::new();
    for (i, line) in reference.iter().enumerate() {
        if ref_taken[i] {
            continue;
        }
        for key in identity_keys(&line.content, wanted) {
            if let Some(&bucket) = bucket_ids.get(&key) {
                if let Some(offer) = nearest(&buckets[bucket], i, bucket) {
                    heap.push(Reverse(offer));
                }
            }
        }
    }

    let mut pairs = Vec::new();
    while let Some(Reverse(offer)) = heap.pop() {
        let (i, j) = (offer.reference, offer.compared);
        if ref_taken[i] {
            continue;
        }
        if cmp_taken[j] {
            if let Some(next) = nearest(&buckets[offer.bucket], i, offer.bucket) {
                heap.push(Reverse(next));
            }
            continue;
        }
        ref_taken[i] = true;
        cmp_taken[j] = true;
        for &bucket in &cmp_buckets[j] {
            buckets[bucket].remove(&j);
        }
        pairs.push(Pairing {
            reference: i,
            compared: j,
            correlation: correlate(&reference[i].content, &compared[j].content),
        });
    }
    pairs
}

/// The untaken compared position in `bucket` closest to reference position
/// `i`, the lower one on a tie.
fn nearest(bucket: &BTreeSet<usize>, i: usize, id: usize) -> Option<Offer> {
    let below = bucket.range(..=i).next_back().copied();
    let above = bucket.range(i..).next().copied();
    let j = match (below, above) {
        (Some(b), Some(a)) if a - i < i - b => a,
        (Some(b), _) => b,
        (None, a) => a?,
    };
    Some(Offer {
        distance: i.abs_diff(j),
        sum: i + j,
        reference: i,
        compared: j,
        bucket: id,
    })
}

fn untaken(taken: &[bool]) -> Vec<usize> {
    taken
        .iter()
        .enumerate()
        .filter(|&(_, &t)| !t)
        .map(|(i, _)| i)
        .collect()
}
