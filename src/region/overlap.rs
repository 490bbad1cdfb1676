//! Overlap Detector: where two digits are both valid.

use std::collections::BTreeMap;

use super::membership::MembershipMap;
use crate::grid::GridMask;
use crate::table::{DigitPair, Radix};

/// Pointwise AND of the membership masks of every pair in `pairs`.
///
/// A digit the map has no mask for contributes an empty mask. Any pair list
/// is accepted; [`Radix::adjacent_pairs`] gives the value-adjacent one.
pub fn overlaps(map: &MembershipMap, pairs: &[DigitPair]) -> BTreeMap<DigitPair, GridMask> {
    pairs
        .iter()
        .map(|&pair| {
            let mask = match (map.mask(pair.upper()), map.mask(pair.lower())) {
                (Some(upper), Some(lower)) => upper.and(lower),
                _ => GridMask::empty(map.grid()),
            };
            (pair, mask)
        })
        .collect()
}

/// Every digit pair of `radix` that is not value-adjacent.
pub fn non_adjacent_pairs(radix: Radix) -> Vec<DigitPair> {
    let digits: Vec<_> = radix.digits().collect();
    let mut pairs = Vec::new();
    for (i, &lower) in digits.iter().enumerate() {
        for &upper in digits.iter().skip(i + 2) {
            pairs.push(DigitPair::new(upper, lower));
        }
    }
    pairs
}

/// Non-adjacent pairs that overlap somewhere. Empty for a well-formed table.
pub fn non_adjacent_overlaps(map: &MembershipMap) -> Vec<DigitPair> {
    overlaps(map, &non_adjacent_pairs(map.radix()))
        .into_iter()
        .filter(|(_, mask)| !mask.is_empty())
        .map(|(pair, _)| pair)
        .collect()
}
