// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Completeness checking: does a mask cover every pattern?
//!
//! A mask of length `L` exposes `L - n + 1` overlapping windows. The mask is
//! *complete* when those windows include every one of the `k^n` patterns at
//! least once. Every search strategy funnels its candidates through this one
//! check, so the strategies stay comparable.

use crate::errors::MaskError;
use crate::mask::Mask;
use crate::pattern::PatternSpace;

impl PatternSpace {
    /// Check whether `mask` contains every pattern of this space as a
    /// contiguous window.
    ///
    /// Fails with [`MaskError::InvalidSymbol`] if any mask symbol is outside
    /// the alphabet. A mask shorter than the window is simply incomplete,
    /// not an error.
    ///
    /// This is a deliberate O(k^n * L * n) scan: it is the verification
    /// oracle the searches trust, not a hot path, and the straight-line form
    /// is easy to convince yourself of.
    pub fn is_complete(&self, mask: &Mask) -> Result<bool, MaskError> {
        for (position, &symbol) in mask.symbols().iter().enumerate() {
            if symbol as usize >= self.alphabet() {
                return Err(MaskError::InvalidSymbol {
                    symbol,
                    alphabet: self.alphabet(),
                    position,
                });
            }
        }

        if mask.len() < self.window() {
            return Ok(false);
        }

        for value in 0..self.pattern_count() {
            let pattern = self.encode(value)?;
            let found = mask
                .symbols()
                .windows(self.window())
                .any(|window| window == pattern.as_slice());
            if !found {
                return Ok(false);
            }
        }

        Ok(true)
    }
}
