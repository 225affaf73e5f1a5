//! Metadata enumerations carried by a 1D LUT transform.
//!
//! Each enum has a short textual tag used by the descriptor and accepted
//! back by [`FromStr`].

use std::fmt;
use std::str::FromStr;

use crate::error::Lut1dError;

/// Transform application direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransformDirection {
    /// Forward transform.
    #[default]
    Forward,
    /// Inverse transform.
    Inverse,
}

impl TransformDirection {
    /// Returns the opposite direction.
    #[inline]
    pub fn inverse(self) -> Self {
        match self {
            Self::Forward => Self::Inverse,
            Self::Inverse => Self::Forward,
        }
    }

    /// Descriptor tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Inverse => "inverse",
        }
    }
}

/// Bit depth hint for file writers.
///
/// Only recorded; stored samples are always `f32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BitDepth {
    /// Not specified.
    #[default]
    Unknown,
    /// 8-bit unsigned integer.
    Uint8,
    /// 10-bit unsigned integer.
    Uint10,
    /// 12-bit unsigned integer.
    Uint12,
    /// 14-bit unsigned integer.
    Uint14,
    /// 16-bit unsigned integer.
    Uint16,
    /// 32-bit unsigned integer.
    Uint32,
    /// 16-bit float.
    F16,
    /// 32-bit float.
    F32,
}

impl BitDepth {
    /// All variants, in tag order.
    pub const ALL: [Self; 9] = [
        Self::Unknown,
        Self::Uint8,
        Self::Uint10,
        Self::Uint12,
        Self::Uint14,
        Self::Uint16,
        Self::Uint32,
        Self::F16,
        Self::F32,
    ];

    /// Descriptor tag (`8ui`, `16f`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Uint8 => "8ui",
            Self::Uint10 => "10ui",
            Self::Uint12 => "12ui",
            Self::Uint14 => "14ui",
            Self::Uint16 => "16ui",
            Self::Uint32 => "32ui",
            Self::F16 => "16f",
            Self::F32 => "32f",
        }
    }
}

/// Hue handling mode requested from the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HueAdjust {
    /// Channels are processed independently.
    #[default]
    None,
    /// DW3 hue restoration.
    Dw3,
    /// WYPN hue restoration.
    Wypn,
}

impl HueAdjust {
    /// Numeric code written in the descriptor.
    pub fn code(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Dw3 => 1,
            Self::Wypn => 2,
        }
    }

    /// Option tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Dw3 => "dw3",
            Self::Wypn => "wypn",
        }
    }
}

/// Interpolation hint for the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Interpolation {
    /// Unspecified or unrecognized.
    Unknown,
    /// Nearest neighbor.
    Nearest,
    /// Linear interpolation.
    Linear,
    /// Tetrahedral interpolation (3D only).
    Tetrahedral,
    /// Best available.
    Best,
    /// Evaluator default.
    #[default]
    Default,
    /// Cubic interpolation.
    Cubic,
}

impl Interpolation {
    /// Descriptor tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Nearest => "nearest",
            Self::Linear => "linear",
            Self::Tetrahedral => "tetrahedral",
            Self::Best => "best",
            Self::Default => "default",
            Self::Cubic => "cubic",
        }
    }

    /// Returns true if a 1D LUT can be evaluated with this method.
    pub fn is_valid_for_1d(self) -> bool {
        matches!(self, Self::Nearest | Self::Linear | Self::Best | Self::Default)
    }
}

macro_rules! tag_traits {
    ($ty:ty, $kind:literal, [$($variant:expr),+ $(,)?]) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = Lut1dError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let lower = s.trim().to_ascii_lowercase();
                [$($variant),+]
                    .into_iter()
                    .find(|v| v.as_str() == lower)
                    .ok_or_else(|| Lut1dError::UnknownTag {
                        kind: $kind,
                        tag: s.to_string(),
                    })
            }
        }
    };
}

tag_traits!(TransformDirection, "direction", [
    TransformDirection::Forward,
    TransformDirection::Inverse,
]);
tag_traits!(BitDepth, "bit depth", [
    BitDepth::Unknown,
    BitDepth::Uint8,
    BitDepth::Uint10,
    BitDepth::Uint12,
    BitDepth::Uint14,
    BitDepth::Uint16,
    BitDepth::Uint32,
    BitDepth::F16,
    BitDepth::F32,
]);
tag_traits!(HueAdjust, "hue adjust", [HueAdjust::None, HueAdjust::Dw3, HueAdjust::Wypn]);
tag_traits!(Interpolation, "interpolation", [
    Interpolation::Unknown,
    Interpolation::Nearest,
    Interpolation::Linear,
    Interpolation::Tetrahedral,
    Interpolation::Best,
    Interpolation::Default,
    Interpolation::Cubic,
]);
