// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive search over increasing mask lengths.
//!
//! For each candidate length `L` starting at the caller's minimum, every one
//! of the `k^L` masks of that length is enumerated and checked. The first
//! length that yields any complete mask is, by construction, the shortest
//! achievable, and *all* complete masks of that length are returned — ties
//! are deliberately preserved so a caller can rank them by a secondary
//! metric such as the transition count.
//!
//! The cost is k^L per length, so this is only tractable while k^L stays
//! small. The binary column case terminates at L = 10 after roughly two
//! thousand candidates; for the quaternary row case the same search would
//! need on the order of 4^66 candidates and must not be the strategy of
//! choice — use the constructive builder or the randomized hunt instead.

use crate::errors::MaskError;
use crate::mask::Mask;
use crate::pattern::PatternSpace;
use crate::search::{Counters, ExhaustiveOutcome, Statistics};

/// Increasing-length full enumeration of candidate masks.
pub struct ExhaustiveSearch {
    space: PatternSpace,
    statistics: Statistics,
}

impl ExhaustiveSearch {
    pub fn new(space: PatternSpace) -> Self {
        Self {
            space,
            statistics: Statistics::new(),
        }
    }

    /// Search lengths `min_len..=max_len`, stopping at the first length with
    /// at least one complete mask.
    ///
    /// Returns an outcome with `length: None` when the bound is exhausted
    /// without success.
    pub fn run(&mut self, min_len: usize, max_len: usize) -> Result<ExhaustiveOutcome, MaskError> {
        for len in min_len..=max_len {
            eprintln!(
                "[Exhaustive] Testing all {}^{} masks of length {}...",
                self.space.alphabet(),
                len,
                len
            );
            let masks = self.run_length(len)?;
            eprintln!(
                "[Exhaustive] Length {}: {} complete mask(s).",
                len,
                masks.len()
            );
            if !masks.is_empty() {
                return Ok(ExhaustiveOutcome {
                    length: Some(len),
                    masks,
                });
            }
        }
        Ok(ExhaustiveOutcome {
            length: None,
            masks: Vec::new(),
        })
    }

    /// Test every mask of exactly `len` symbols, returning the complete ones.
    pub fn run_length(&mut self, len: usize) -> Result<Vec<Mask>, MaskError> {
        let mut digits = vec![0u8; len];
        let mut found = Vec::new();
        loop {
            let candidate = Mask::new(digits.clone());
            self.statistics.increment(Counters::CandidatesTested);
            if self.space.is_complete(&candidate)? {
                self.statistics.increment(Counters::CompleteMasksFound);
                found.push(candidate);
            }
            if !next_candidate(&mut digits, self.space.alphabet()) {
                break;
            }
        }
        Ok(found)
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}

/// Advance `digits` to the next base-k value, odometer style.
///
/// Returns false once the enumeration wraps back to all zeros.
fn next_candidate(digits: &mut [u8], k: usize) -> bool {
    for digit in digits.iter_mut().rev() {
        *digit += 1;
        if (*digit as usize) < k {
            return true;
        }
        *digit = 0;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odometer_covers_all_candidates() {
        let mut digits = vec![0u8; 3];
        let mut seen = vec![digits.clone()];
        while next_candidate(&mut digits, 2) {
            seen.push(digits.clone());
        }
        assert_eq!(seen.len(), 8);
        assert_eq!(seen[0], vec![0, 0, 0]);
        assert_eq!(seen[3], vec![0, 1, 1]);
        assert_eq!(seen[7], vec![1, 1, 1]);
    }

    #[test]
    fn test_smallest_binary_window() {
        // k = 2, n = 2: four patterns need four windows, so length 5 is the
        // floor and the enumeration must stop exactly there.
        let space = PatternSpace::new(2, 2);
        let mut search = ExhaustiveSearch::new(space);
        let outcome = search.run(2, 8).unwrap();
        assert_eq!(outcome.length, Some(5));
        assert!(!outcome.masks.is_empty());
        for mask in &outcome.masks {
            assert_eq!(mask.len(), 5);
            assert!(space.is_complete(mask).unwrap());
        }
    }

    #[test]
    fn test_no_mask_below_lower_bound() {
        let space = PatternSpace::new(2, 2);
        let mut search = ExhaustiveSearch::new(space);
        let outcome = search.run(2, 4).unwrap();
        assert_eq!(outcome.length, None);
        assert!(outcome.masks.is_empty());
    }

    #[test]
    fn test_statistics_count_candidates() {
        let space = PatternSpace::new(2, 2);
        let mut search = ExhaustiveSearch::new(space);
        search.run_length(3).unwrap();
        assert_eq!(search.statistics().get(Counters::CandidatesTested), 8);
        assert_eq!(search.statistics().get(Counters::CompleteMasksFound), 0);
    }
}
