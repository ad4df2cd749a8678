// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pattern codec: a bijection between integers and fixed-width base-k
//! symbol sequences.
//!
//! A [`PatternSpace`] fixes the alphabet size `k`, the window length `n`,
//! and a [`DigitOrder`]. Together these name each of the `k^n` possible
//! patterns by a unique integer in `[0, k^n)`.
//!
//! # Digit order
//!
//! The two braille use cases name patterns differently:
//!
//! - The dot-column case (k = 2) reads a pattern as a binary string, most
//!   significant bit first: value 6 is `[1, 1, 0]`.
//! - The dot-row case (k = 4) packs row `i` into bits `[2i, 2i+1]` of the
//!   value, so the *least* significant digit comes first: value 6 is
//!   `[2, 1, 0]` in base 4.
//!
//! Completeness checking is order-independent (any bijection enumerates the
//! same set of patterns), but all code sharing a space must agree on which
//! integer names which pattern, so the order is part of the space rather
//! than a per-call argument.

use crate::errors::MaskError;

/// Placement of the least significant base-k digit within a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitOrder {
    /// Most significant digit at index 0 (binary-string convention).
    MostSignificantFirst,
    /// Least significant digit at index 0 (bit-packed row convention).
    LeastSignificantFirst,
}

/// The space of all length-`n` patterns over an alphabet of size `k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternSpace {
    k: usize,
    n: usize,
    count: usize,
    order: DigitOrder,
}

impl PatternSpace {
    /// Create a pattern space with the default most-significant-first order.
    ///
    /// # Panics
    ///
    /// Panics if `k` or `n` is zero, or if `k^n` overflows `usize`. Both are
    /// caller bugs: no meaningful pattern space exists for them.
    pub fn new(k: usize, n: usize) -> Self {
        Self::with_order(k, n, DigitOrder::MostSignificantFirst)
    }

    /// Create a pattern space with an explicit digit order.
    pub fn with_order(k: usize, n: usize, order: DigitOrder) -> Self {
        assert!(k >= 1, "alphabet size must be at least 1");
        assert!(n >= 1, "window length must be at least 1");
        let count = k
            .checked_pow(n as u32)
            .unwrap_or_else(|| panic!("pattern count {}^{} overflows usize", k, n));
        Self { k, n, count, order }
    }

    /// Alphabet size `k`.
    pub fn alphabet(&self) -> usize {
        self.k
    }

    /// Window length `n`.
    pub fn window(&self) -> usize {
        self.n
    }

    /// Number of distinct patterns, `k^n`.
    pub fn pattern_count(&self) -> usize {
        self.count
    }

    /// Shortest possible complete mask length, `k^n + n - 1`.
    ///
    /// A complete mask needs `k^n` distinct windows, and consecutive windows
    /// overlap by at most `n - 1` symbols, so no shorter mask can exist. The
    /// constructive builder attains this bound.
    pub fn optimal_mask_len(&self) -> usize {
        self.count + self.n - 1
    }

    /// Encode a pattern value as its `n` base-k digits.
    ///
    /// Fails with [`MaskError::InvalidValue`] when `value >= k^n`.
    pub fn encode(&self, value: usize) -> Result<Vec<u8>, MaskError> {
        if value >= self.count {
            return Err(MaskError::InvalidValue {
                value,
                limit: self.count,
            });
        }
        let mut digits = vec![0u8; self.n];
        let mut rest = value;
        for digit in digits.iter_mut() {
            *digit = (rest % self.k) as u8;
            rest /= self.k;
        }
        if self.order == DigitOrder::MostSignificantFirst {
            digits.reverse();
        }
        Ok(digits)
    }

    /// Decode `n` base-k digits back to their pattern value.
    ///
    /// Fails with [`MaskError::WrongWidth`] on a slice of the wrong length
    /// and [`MaskError::InvalidSymbol`] on out-of-alphabet digits.
    pub fn decode(&self, pattern: &[u8]) -> Result<usize, MaskError> {
        if pattern.len() != self.n {
            return Err(MaskError::WrongWidth {
                expected: self.n,
                actual: pattern.len(),
            });
        }
        for (position, &symbol) in pattern.iter().enumerate() {
            if symbol as usize >= self.k {
                return Err(MaskError::InvalidSymbol {
                    symbol,
                    alphabet: self.k,
                    position,
                });
            }
        }
        let mut value = 0usize;
        match self.order {
            DigitOrder::MostSignificantFirst => {
                for &symbol in pattern.iter() {
                    value = value * self.k + symbol as usize;
                }
            }
            DigitOrder::LeastSignificantFirst => {
                for &symbol in pattern.iter().rev() {
                    value = value * self.k + symbol as usize;
                }
            }
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_msb_first() {
        let space = PatternSpace::new(2, 3);
        assert_eq!(space.encode(0).unwrap(), vec![0, 0, 0]);
        assert_eq!(space.encode(1).unwrap(), vec![0, 0, 1]);
        assert_eq!(space.encode(6).unwrap(), vec![1, 1, 0]);
        assert_eq!(space.encode(7).unwrap(), vec![1, 1, 1]);
    }

    #[test]
    fn test_quaternary_lsb_first() {
        // Row i of the cell occupies bits [2i, 2i+1] of the value.
        let space = PatternSpace::with_order(4, 3, DigitOrder::LeastSignificantFirst);
        for value in 0..64 {
            let expected = vec![
                (value & 0b11) as u8,
                ((value >> 2) & 0b11) as u8,
                ((value >> 4) & 0b11) as u8,
            ];
            assert_eq!(space.encode(value).unwrap(), expected);
        }
    }

    #[test]
    fn test_round_trip_both_orders() {
        for order in [DigitOrder::MostSignificantFirst, DigitOrder::LeastSignificantFirst] {
            let space = PatternSpace::with_order(3, 4, order);
            for value in 0..space.pattern_count() {
                let pattern = space.encode(value).unwrap();
                assert_eq!(space.decode(&pattern).unwrap(), value);
            }
        }
    }

    #[test]
    fn test_out_of_range_value() {
        let space = PatternSpace::new(2, 3);
        assert_eq!(
            space.encode(8),
            Err(MaskError::InvalidValue { value: 8, limit: 8 })
        );
    }

    #[test]
    fn test_decode_rejects_bad_width_and_symbol() {
        let space = PatternSpace::new(2, 3);
        assert_eq!(
            space.decode(&[0, 1]),
            Err(MaskError::WrongWidth {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            space.decode(&[0, 2, 1]),
            Err(MaskError::InvalidSymbol {
                symbol: 2,
                alphabet: 2,
                position: 1
            })
        );
    }

    #[test]
    fn test_counts_and_optimal_length() {
        let column = PatternSpace::new(2, 3);
        assert_eq!(column.pattern_count(), 8);
        assert_eq!(column.optimal_mask_len(), 10);

        let row = PatternSpace::with_order(4, 3, DigitOrder::LeastSignificantFirst);
        assert_eq!(row.pattern_count(), 64);
        assert_eq!(row.optimal_mask_len(), 66);
    }

    #[test]
    #[should_panic(expected = "alphabet size must be at least 1")]
    fn test_zero_alphabet_rejected() {
        let _ = PatternSpace::new(0, 3);
    }
}
