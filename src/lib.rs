// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search for the shortest sliding mask covering every dot pattern of a
//! braille cell.
//!
//! A braille cell column has 3 dots, so 2^3 = 8 possible dot patterns. A
//! physical mask slid over the column shows one 3-dot window at a time; the
//! shortest useful mask is the shortest symbol sequence containing all 8
//! patterns as contiguous sub-sequences. Reading a cell row-by-row instead
//! gives 2-dot rows (4 states each) and the same question over a 4-symbol
//! alphabet. Both are instances of one problem: find the shortest sequence
//! over an alphabet of size `k` containing every length-`n` pattern.
//!
//! # Architecture
//!
//! The crate is organized around [`PatternSpace`], which fixes the alphabet
//! size `k`, the window length `n`, and the digit order used to name each of
//! the `k^n` patterns by an integer. Three independent strategies produce
//! masks:
//!
//! 1. **Constructive** ([`search::debruijn`]): generate the de Bruijn
//!    sequence B(k, n) and unroll it non-cyclically. Always yields the
//!    proven-optimal length `k^n + n - 1`.
//! 2. **Exhaustive** ([`search::exhaustive`]): enumerate every mask of every
//!    length until the first length with a complete mask, keeping all ties.
//!    Only tractable for small `k^L` (the binary column case).
//! 3. **Randomized** ([`search::random`]): draw random masks below a
//!    shrinking length bound forever, reporting each improvement. A
//!    best-effort fallback for spaces where exhaustive search is infeasible.
//!
//! Every strategy validates candidates with the same completeness check
//! ([`PatternSpace::is_complete`]), so the strategies can be run and compared
//! independently.
//!
//! # References
//!
//! - Fredricksen, H. and Maiorana, J. (1978). "Necklaces of beads in k
//!   colors and k-ary de Bruijn sequences." Discrete Mathematics 23(3).

pub mod complete;
pub mod errors;
pub mod mask;
pub mod pattern;
pub mod search;

// Re-export commonly used types
pub use errors::MaskError;
pub use mask::Mask;
pub use pattern::{DigitOrder, PatternSpace};
pub use search::{ExhaustiveOutcome, SearchEvent, Statistics};
