//! Error types.

use thiserror::Error;

use crate::decimal::DecimalError;

/// Errors reported by the division kernel.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivisionError {
    /// The divisor was zero.
    #[error("integer division or modulo by zero")]
    ZeroDivisor,
}

/// A decimal string the decoder refused.
///
/// `position` is the 1-based character position of the first character that
/// is neither a digit nor a permitted separator. Position 0 means the input
/// held no digits at all.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid decimal string (position {position})")]
pub struct ParseDigitsError {
    /// 1-based position of the offending character, or 0 for no digits.
    pub position: usize,
}

impl ParseDigitsError {
    pub(crate) const EMPTY: Self = Self { position: 0 };

    pub(crate) fn at(position: usize) -> Self {
        Self { position }
    }

    /// Returns true if the input was rejected for holding no digits.
    pub fn is_empty_input(&self) -> bool {
        self.position == 0
    }
}

/// Any error the kernel can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// See [`DivisionError`].
    #[error(transparent)]
    Division(#[from] DivisionError),

    /// See [`ParseDigitsError`].
    #[error(transparent)]
    Parse(#[from] ParseDigitsError),

    /// See [`DecimalError`].
    #[error(transparent)]
    Decimal(#[from] DecimalError),
}
