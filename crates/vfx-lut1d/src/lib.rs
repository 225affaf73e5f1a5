//! # vfx-lut1d
//!
//! In-memory 1D LUT transform descriptor for VFX color pipelines.
//!
//! A [`Lut1dTransform`] holds an ordered table of RGB samples plus the
//! metadata a downstream evaluator needs to apply it: direction, half-float
//! domain indexing, raw-half output, hue adjustment and a file bit-depth
//! hint. The table is freely mutable; [`Lut1dTransform::validate`] must be
//! called before handing it to a pipeline.
//!
//! # Usage
//!
//! ```rust
//! use vfx_lut1d::{BitDepth, Lut1dTransform, TransformDirection};
//!
//! let mut lut = Lut1dTransform::new();
//! lut.set_direction(TransformDirection::Inverse);
//! lut.set_length(3)?;
//! lut.set_value(1, 0.51, 0.52, 0.53)?;
//! lut.set_file_output_bit_depth(BitDepth::Uint8);
//! lut.validate()?;
//!
//! assert_eq!(lut.value(1)?, [0.51, 0.52, 0.53]);
//! println!("{lut}");
//! # Ok::<(), vfx_lut1d::Lut1dError>(())
//! ```
//!
//! # Out of scope
//!
//! Interpolation, GPU evaluation and file formats live with the consumers
//! of this crate. The [`Display`](std::fmt::Display) descriptor is a
//! diagnostic surface, not a persistence format.
//!
//! # Dependencies
//!
//! - [`half`] - Half-float domain indexing
//! - [`thiserror`] - Error handling
//! - [`tracing`] - Logging

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod numfmt;
pub mod half_domain;
mod transform;
mod types;

pub use error::{ErrorKind, Lut1dError, Lut1dResult};
pub use half_domain::{HALF_DOMAIN_LENGTH, half_domain_index};
pub use transform::{Lut1dTransform, MAX_LENGTH, MIN_LENGTH};
pub use types::{BitDepth, HueAdjust, Interpolation, TransformDirection};
