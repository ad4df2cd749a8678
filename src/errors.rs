// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for mask construction and validation.
//!
//! Every variant is a caller bug rather than a runtime condition: the
//! routines here are pure computations, so there is nothing to retry and no
//! partial result to salvage. Errors are surfaced immediately.

use std::fmt;

/// Errors raised by the pattern codec, the completeness checker, and the
/// mask diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// A mask symbol lies outside the alphabet `[0, k)`.
    InvalidSymbol {
        symbol: u8,
        alphabet: usize,
        position: usize,
    },

    /// A pattern value lies outside `[0, k^n)`.
    InvalidValue { value: usize, limit: usize },

    /// A pattern slice does not have the window length of its space.
    WrongWidth { expected: usize, actual: usize },

    /// Diagnostics requested for an alphabet they define no semantics for.
    /// Transition counting is a binary notion; it must not silently degrade
    /// on wider symbols.
    NotSupported { alphabet: usize },
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskError::InvalidSymbol {
                symbol,
                alphabet,
                position,
            } => {
                write!(
                    f,
                    "Symbol {} at position {} is outside alphabet [0, {})",
                    symbol, position, alphabet
                )
            }
            MaskError::InvalidValue { value, limit } => {
                write!(f, "Pattern value {} is outside [0, {})", value, limit)
            }
            MaskError::WrongWidth { expected, actual } => {
                write!(
                    f,
                    "Pattern has {} symbols but the window length is {}",
                    actual, expected
                )
            }
            MaskError::NotSupported { alphabet } => {
                write!(
                    f,
                    "Transition counting is only defined for the binary alphabet (got k = {})",
                    alphabet
                )
            }
        }
    }
}

impl std::error::Error for MaskError {}
