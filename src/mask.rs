// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mask values and diagnostics.
//!
//! A [`Mask`] is an owned symbol sequence of some length `L >= n`. Masks are
//! ephemeral: a search or builder constructs one, the completeness checker
//! validates it, and it is kept or discarded. The mask itself does not know
//! its alphabet; the [`PatternSpace`](crate::PatternSpace) it is checked
//! against supplies that.

use std::fmt;

use crate::errors::MaskError;

/// An ordered sequence of symbols slid across a fixed-width window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    symbols: Vec<u8>,
}

impl Mask {
    pub fn new(symbols: Vec<u8>) -> Self {
        Self { symbols }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Count adjacent symbol changes.
    ///
    /// Physically each transition is a boundary between a covering and a
    /// non-covering run of the mask, so among equally short complete binary
    /// masks, fewer transitions means fewer cuts to manufacture. The notion
    /// does not generalize to wider alphabets (a 2-bit symbol pair can
    /// differ in one row or two), so any `k != 2` fails with
    /// [`MaskError::NotSupported`] rather than producing a misleading count.
    pub fn transition_count(&self, k: usize) -> Result<usize, MaskError> {
        if k != 2 {
            return Err(MaskError::NotSupported { alphabet: k });
        }
        for (position, &symbol) in self.symbols.iter().enumerate() {
            if symbol as usize >= k {
                return Err(MaskError::InvalidSymbol {
                    symbol,
                    alphabet: k,
                    position,
                });
            }
        }
        Ok(self
            .symbols
            .windows(2)
            .filter(|pair| pair[0] != pair[1])
            .count())
    }
}

impl From<Vec<u8>> for Mask {
    fn from(symbols: Vec<u8>) -> Self {
        Self::new(symbols)
    }
}

impl fmt::Display for Mask {
    /// Renders the mask as a digit string, e.g. `0001011100`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_count_literal() {
        // Pairs (0,0) (0,0) (0,1) (1,0) (0,1): changes at indices 2, 3, 4.
        let mask = Mask::new(vec![0, 0, 0, 1, 0, 1]);
        assert_eq!(mask.transition_count(2).unwrap(), 3);
    }

    #[test]
    fn test_transition_count_constant_mask() {
        let mask = Mask::new(vec![1, 1, 1, 1]);
        assert_eq!(mask.transition_count(2).unwrap(), 0);
    }

    #[test]
    fn test_transition_count_rejects_wider_alphabet() {
        let mask = Mask::new(vec![0, 1, 2, 3]);
        assert_eq!(
            mask.transition_count(4),
            Err(MaskError::NotSupported { alphabet: 4 })
        );
    }

    #[test]
    fn test_transition_count_rejects_bad_symbol() {
        let mask = Mask::new(vec![0, 1, 2]);
        assert_eq!(
            mask.transition_count(2),
            Err(MaskError::InvalidSymbol {
                symbol: 2,
                alphabet: 2,
                position: 2
            })
        );
    }

    #[test]
    fn test_display() {
        let mask = Mask::new(vec![0, 0, 1, 3]);
        assert_eq!(mask.to_string(), "0013");
    }
}
