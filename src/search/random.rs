// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Randomized improvement search.
//!
//! For pattern spaces where exhaustive enumeration is infeasible (the
//! quaternary row case would need 4^66 candidates), this strategy draws
//! random masks of random length below a shrinking bound forever, keeping
//! the shortest complete mask seen so far. It is an anytime heuristic: no
//! termination guarantee, no optimality guarantee, just a stream of
//! improvements for as long as the caller keeps polling.
//!
//! The search is an [`Iterator`] over [`SearchEvent`]s so the algorithm owns
//! no I/O and no termination policy. A driver polls for improvements and
//! heartbeats, and cancels by raising the shared stop flag (or by setting an
//! attempt cap), at which point `next()` returns `None`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::mask::Mask;
use crate::pattern::PatternSpace;
use crate::search::{Counters, SearchEvent, Statistics};

/// How many trials between [`SearchEvent::Progress`] heartbeats by default.
const DEFAULT_PROGRESS_INTERVAL: u64 = 100_000;

/// Open-ended random hunt for ever-shorter complete masks.
pub struct RandomSearch {
    space: PatternSpace,
    rng: StdRng,
    /// Shortest complete length found so far (starts at the caller's bound).
    best: usize,
    attempts: u64,
    max_attempts: Option<u64>,
    progress_interval: u64,
    stop: Arc<AtomicBool>,
    statistics: Statistics,
}

impl RandomSearch {
    /// Start a search with trial lengths at or below `length_bound`.
    ///
    /// Bounds below the proven optimum `k^n + n - 1` are clamped up to it;
    /// nothing shorter can ever be complete, so trying is wasted work.
    pub fn new(space: PatternSpace, length_bound: usize) -> Self {
        Self::with_rng(space, length_bound, StdRng::from_entropy())
    }

    /// Start a deterministic search from a fixed seed (for tests).
    pub fn seeded(space: PatternSpace, length_bound: usize, seed: u64) -> Self {
        Self::with_rng(space, length_bound, StdRng::seed_from_u64(seed))
    }

    fn with_rng(space: PatternSpace, length_bound: usize, rng: StdRng) -> Self {
        let best = length_bound.max(space.optimal_mask_len());
        Self {
            space,
            rng,
            best,
            attempts: 0,
            max_attempts: None,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            stop: Arc::new(AtomicBool::new(false)),
            statistics: Statistics::new(),
        }
    }

    /// Stop after this many trials in total. Without a cap the iterator is
    /// infinite unless the stop flag is raised.
    pub fn max_attempts(mut self, cap: u64) -> Self {
        self.max_attempts = Some(cap);
        self
    }

    /// Emit a heartbeat every `every` trials.
    pub fn progress_interval(mut self, every: u64) -> Self {
        assert!(every > 0, "progress interval must be positive");
        self.progress_interval = every;
        self
    }

    /// Shared flag that cancels the search. Raise it from any thread; the
    /// search checks it between trials and then yields `None`.
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Shortest complete mask length found so far (or the initial bound).
    pub fn best_length(&self) -> usize {
        self.best
    }

    /// Total trials drawn so far.
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Draw and test one random mask, reporting an improvement if it is
    /// complete at or below the current best length.
    fn trial(&mut self) -> Option<SearchEvent> {
        let shortest_possible = self.space.optimal_mask_len();
        // Like the shrinking-window draw: one step above the best length
        // stays in range so equal-length masks keep being collected.
        let len = self.rng.gen_range(shortest_possible..=self.best + 1);
        let symbols = (0..len)
            .map(|_| self.rng.gen_range(0..self.space.alphabet()) as u8)
            .collect();
        let candidate = Mask::new(symbols);

        self.attempts += 1;
        self.statistics.increment(Counters::CandidatesTested);

        let complete = self
            .space
            .is_complete(&candidate)
            .expect("generated symbols are always inside the alphabet");
        if complete {
            self.statistics.increment(Counters::CompleteMasksFound);
            if len <= self.best {
                self.best = self.best.min(len);
                self.statistics.increment(Counters::Improvements);
                return Some(SearchEvent::Improvement {
                    mask: candidate,
                    length: len,
                    attempts: self.attempts,
                });
            }
        }
        None
    }
}

impl Iterator for RandomSearch {
    type Item = SearchEvent;

    fn next(&mut self) -> Option<SearchEvent> {
        loop {
            if self.stop.load(Ordering::Relaxed) {
                return None;
            }
            if let Some(cap) = self.max_attempts {
                if self.attempts >= cap {
                    return None;
                }
            }
            if let Some(event) = self.trial() {
                return Some(event);
            }
            if self.attempts % self.progress_interval == 0 {
                return Some(SearchEvent::Progress {
                    attempts: self.attempts,
                    best: self.best,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_search_finds_improvement() {
        let space = PatternSpace::new(2, 3);
        let mut search = RandomSearch::seeded(space, 24, 7).max_attempts(100_000);
        let improvement = search.find(|event| matches!(event, SearchEvent::Improvement { .. }));
        match improvement {
            Some(SearchEvent::Improvement { mask, length, .. }) => {
                assert!(space.is_complete(&mask).unwrap());
                assert_eq!(mask.len(), length);
                assert!((10..=25).contains(&length));
            }
            other => panic!("expected an improvement, got {:?}", other),
        }
    }

    #[test]
    fn test_bound_clamped_to_optimum() {
        let space = PatternSpace::new(2, 3);
        let search = RandomSearch::seeded(space, 3, 7);
        assert_eq!(search.best_length(), 10);
    }

    #[test]
    fn test_stop_flag_cancels() {
        let space = PatternSpace::new(2, 3);
        let mut search = RandomSearch::seeded(space, 24, 7);
        search.stop_flag().store(true, Ordering::Relaxed);
        assert_eq!(search.next(), None);
        assert_eq!(search.attempts(), 0);
    }

    #[test]
    fn test_attempt_cap_terminates() {
        let space = PatternSpace::new(2, 3);
        let mut search = RandomSearch::seeded(space, 10, 7).max_attempts(50);
        while search.next().is_some() {}
        assert_eq!(search.attempts(), 50);
    }
}
