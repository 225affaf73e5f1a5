//! 1D LUT error types.

use thiserror::Error;

use crate::types::Interpolation;

/// Result type for 1D LUT operations.
pub type Lut1dResult<T> = Result<T, Lut1dError>;

/// Broad classification of a [`Lut1dError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Length outside the allowed bounds.
    Range,
    /// Sample index at or past the end of the table.
    Index,
    /// Fields disagree with each other (found by validation).
    Consistency,
    /// Unrecognized enumeration tag.
    Parse,
}

/// Errors that can occur during 1D LUT operations.
///
/// A call that returns an error leaves the transform untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Lut1dError {
    /// Length below the minimum of 2 entries.
    #[error("1D LUT: length {length} must be at least {min}", min = crate::MIN_LENGTH)]
    LengthTooSmall {
        /// Requested length
        length: usize,
    },

    /// Length above the maximum of 1048576 entries.
    #[error("1D LUT: length {length} must not be greater than {max}", max = crate::MAX_LENGTH)]
    LengthTooLarge {
        /// Requested length
        length: usize,
    },

    /// Sample index out of range.
    #[error("1D LUT: index {index} should be less than the length {length}")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Current table length
        length: usize,
    },

    /// Half-domain table without exactly 65536 entries.
    #[error(
        "1D LUT: {length} entries found, {required} required for halfDomain 1D LUT",
        required = crate::HALF_DOMAIN_LENGTH
    )]
    HalfDomainLength {
        /// Current table length
        length: usize,
    },

    /// Interpolation a 1D LUT cannot be evaluated with.
    #[error("1D LUT does not support interpolation algorithm: {0}")]
    UnsupportedInterpolation(Interpolation),

    /// Unrecognized enumeration tag.
    #[error("unknown {kind} '{tag}'")]
    UnknownTag {
        /// What was being parsed
        kind: &'static str,
        /// The offending text
        tag: String,
    },
}

impl Lut1dError {
    /// Returns the kind of failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::LengthTooSmall { .. } | Self::LengthTooLarge { .. } => ErrorKind::Range,
            Self::IndexOutOfRange { .. } => ErrorKind::Index,
            Self::HalfDomainLength { .. } | Self::UnsupportedInterpolation(_) => {
                ErrorKind::Consistency
            }
            Self::UnknownTag { .. } => ErrorKind::Parse,
        }
    }
}
