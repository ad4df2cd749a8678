// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Constructive mask builder via de Bruijn sequences.
//!
//! A de Bruijn sequence B(k, n) is a cyclic sequence of length `k^n` in
//! which every length-`n` window, read around the cycle, appears exactly
//! once. Read *linearly* it is not a complete mask: the windows that wrap
//! past the end are lost. Appending the sequence's own first `n - 1` symbols
//! restores every wrapped window as a genuine linear sub-sequence, giving a
//! mask of length `k^n + n - 1` — the proven minimum, since `k^n` distinct
//! windows overlapping by at most `n - 1` symbols cannot fit in anything
//! shorter.
//!
//! Generation uses the Fredricksen–Maiorana recursion, which emits the
//! lexicographically least sequence by extending a working buffer with the
//! largest unused symbol and keeping each emitted block whenever its period
//! divides `n`. The algorithm is deterministic: identical `(k, n)` always
//! yields an identical mask.
//!
//! This module also carries the naive baseline (all patterns concatenated
//! back to back, length `n * k^n`) used as a sanity check and as the "no
//! overlap" comparison point for how much the de Bruijn construction saves.

use crate::mask::Mask;
use crate::pattern::PatternSpace;

/// Generate the lexicographically least de Bruijn sequence B(k, n).
///
/// # Panics
///
/// Panics on `k == 0` or `n == 0` (caller bug; no such sequence exists).
pub fn de_bruijn_sequence(k: usize, n: usize) -> Vec<u8> {
    assert!(k >= 1, "alphabet size must be at least 1");
    assert!(n >= 1, "window length must be at least 1");
    assert!(k <= u8::MAX as usize, "symbols must fit in u8");

    // Positions 0..=n are touched; k * n covers that except when k = 1.
    let mut buffer = vec![0u8; (k * n).max(n + 1)];
    let mut sequence = Vec::new();
    extend(1, 1, k, n, &mut buffer, &mut sequence);
    sequence
}

/// One step of the Fredricksen–Maiorana recursion.
///
/// `t` is the position being extended, `p` the period of the current prefix.
/// On completion (`t > n`) the block `buffer[1..=p]` is emitted iff `p`
/// divides `n`. The buffer has a single owner throughout; recursion depth is
/// bounded by `n + 1`.
fn extend(t: usize, p: usize, k: usize, n: usize, buffer: &mut [u8], sequence: &mut Vec<u8>) {
    if t > n {
        if n % p == 0 {
            sequence.extend_from_slice(&buffer[1..=p]);
        }
    } else {
        buffer[t] = buffer[t - p];
        extend(t + 1, p, k, n, buffer, sequence);
        for symbol in (buffer[t - p] + 1)..(k as u8) {
            buffer[t] = symbol;
            extend(t + 1, t, k, n, buffer, sequence);
        }
    }
}

/// Build the optimal complete mask of length `k^n + n - 1`.
///
/// The cyclic de Bruijn sequence unrolled by repeating its first `n - 1`
/// symbols at the end. Deterministic and always complete.
pub fn build_mask(k: usize, n: usize) -> Mask {
    let mut symbols = de_bruijn_sequence(k, n);
    // Cycling covers the degenerate k = 1 case, where the sequence itself
    // is shorter than n - 1.
    let tail: Vec<u8> = symbols.iter().copied().cycle().take(n - 1).collect();
    symbols.extend(tail);
    Mask::new(symbols)
}

/// Baseline mask: every pattern concatenated back to back, no overlap.
///
/// Length `n * k^n`. Complete by construction, and the yardstick the
/// de Bruijn mask is measured against.
pub fn naive_mask(space: &PatternSpace) -> Mask {
    let mut symbols = Vec::with_capacity(space.window() * space.pattern_count());
    for value in 0..space.pattern_count() {
        let pattern = space
            .encode(value)
            .expect("every value below pattern_count encodes");
        symbols.extend(pattern);
    }
    Mask::new(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_sequence_literal() {
        assert_eq!(de_bruijn_sequence(2, 3), vec![0, 0, 0, 1, 0, 1, 1, 1]);
    }

    #[test]
    fn test_cyclic_sequence_alone_is_not_complete() {
        // Linearly the bare sequence misses the wrapped windows 110 and 100.
        let space = PatternSpace::new(2, 3);
        let bare = Mask::new(de_bruijn_sequence(2, 3));
        assert!(!space.is_complete(&bare).unwrap());
    }

    #[test]
    fn test_unrolled_mask_is_optimal_and_complete() {
        for (k, n) in [(2, 2), (2, 3), (3, 2), (3, 3), (4, 2), (4, 3)] {
            let space = PatternSpace::new(k, n);
            let mask = build_mask(k, n);
            assert_eq!(mask.len(), space.optimal_mask_len(), "k={} n={}", k, n);
            assert!(space.is_complete(&mask).unwrap(), "k={} n={}", k, n);
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(build_mask(4, 3), build_mask(4, 3));
        assert_eq!(build_mask(2, 3), build_mask(2, 3));
    }

    #[test]
    fn test_window_of_one() {
        // B(k, 1) is just the alphabet; nothing to unroll.
        let mask = build_mask(4, 1);
        assert_eq!(mask.symbols(), &[0, 1, 2, 3]);
        assert!(PatternSpace::new(4, 1).is_complete(&mask).unwrap());
    }

    #[test]
    fn test_unary_alphabet() {
        let mask = build_mask(1, 3);
        assert_eq!(mask.symbols(), &[0, 0, 0]);
        assert!(PatternSpace::new(1, 3).is_complete(&mask).unwrap());
    }

    #[test]
    fn test_naive_mask_complete_but_longer() {
        let space = PatternSpace::new(2, 3);
        let naive = naive_mask(&space);
        assert_eq!(naive.len(), 24);
        assert!(space.is_complete(&naive).unwrap());
        assert!(naive.len() > build_mask(2, 3).len());
    }
}
