// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search strategies and their shared result types.
//!
//! Three independent strategies produce complete masks:
//!
//! - [`debruijn`]: constructive, always optimal, runs in O(k^n)
//! - [`exhaustive`]: provably finds *all* shortest masks, exponential cost
//! - [`random`]: anytime improvement hunt with no termination guarantee
//!
//! Each strategy returns structured values (masks, lengths, counters) and
//! leaves rendering to the caller. Counters follow the statistics pattern
//! used throughout the crate: a flat `u64` array indexed by a counter enum.

pub mod debruijn;
pub mod exhaustive;
pub mod random;

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

use crate::mask::Mask;

/// Counters tracked across a search run.
#[derive(EnumCountMacro, Copy, Clone)]
#[repr(u8)]
pub enum Counters {
    /// Candidate masks tested for completeness.
    CandidatesTested,
    /// Candidates that passed the completeness check.
    CompleteMasksFound,
    /// Improvement events reported by the randomized search.
    Improvements,
}

/// Flat counter storage, one slot per [`Counters`] variant.
#[derive(Debug, Default)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

/// Result of an exhaustive search over increasing lengths.
///
/// `length` is `None` when the length bound was exhausted without finding a
/// complete mask. That is not an error: the caller decides whether to raise
/// the bound or switch strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExhaustiveOutcome {
    /// Smallest length at which complete masks exist, if found.
    pub length: Option<usize>,
    /// Every complete mask of that length, in enumeration order.
    pub masks: Vec<Mask>,
}

/// One event from the randomized improvement search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// A complete mask found at or below the current best length.
    Improvement {
        mask: Mask,
        length: usize,
        attempts: u64,
    },
    /// Periodic heartbeat so a driver can show liveness between
    /// improvements.
    Progress { attempts: u64, best: usize },
}
