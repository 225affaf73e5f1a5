//! 1D LUT transform descriptor.
//!
//! A [`Lut1dTransform`] stores one RGB triple per table entry along with
//! the metadata an evaluator needs. It performs no evaluation itself.
//! Setters are independent of each other; cross-field rules are checked
//! by [`Lut1dTransform::validate`].

use std::fmt;

use tracing::{debug, trace};

use crate::half_domain::{self, HALF_DOMAIN_LENGTH};
use crate::numfmt::general;
use crate::types::{BitDepth, HueAdjust, Interpolation, TransformDirection};
use crate::{Lut1dError, Lut1dResult};

/// Smallest allowed table length.
pub const MIN_LENGTH: usize = 2;

/// Largest allowed table length (2^20).
pub const MAX_LENGTH: usize = 1024 * 1024;

/// A 1D LUT transform: an RGB sample table plus evaluation metadata.
///
/// # Structure
///
/// - `length` entries of `[r, g, b]`, unbounded `f32` values
/// - direction, interpolation and hue adjustment hints
/// - half-domain input / raw-half output flags
/// - file output bit depth (never affects the samples)
///
/// # Example
///
/// ```rust
/// use vfx_lut1d::Lut1dTransform;
///
/// let lut = Lut1dTransform::with_length(3, false)?;
/// assert_eq!(lut.value(1)?, [0.5, 0.5, 0.5]);
/// lut.validate()?;
/// # Ok::<(), vfx_lut1d::Lut1dError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Lut1dTransform {
    samples: Vec<[f32; 3]>,
    direction: TransformDirection,
    interpolation: Interpolation,
    input_half_domain: bool,
    output_raw_halfs: bool,
    hue_adjust: HueAdjust,
    file_output_bit_depth: BitDepth,
}

/// Equal when all metadata and every sample match. NaN samples compare
/// equal to NaN so that half-domain tables equal their copies.
impl PartialEq for Lut1dTransform {
    fn eq(&self, other: &Self) -> bool {
        self.direction == other.direction
            && self.interpolation == other.interpolation
            && self.input_half_domain == other.input_half_domain
            && self.output_raw_halfs == other.output_raw_halfs
            && self.hue_adjust == other.hue_adjust
            && self.file_output_bit_depth == other.file_output_bit_depth
            && self.samples.len() == other.samples.len()
            && self
                .samples
                .iter()
                .zip(&other.samples)
                .all(|(a, b)| a.iter().zip(b).all(|(x, y)| same_sample(*x, *y)))
    }
}

#[inline]
fn same_sample(a: f32, b: f32) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

impl Default for Lut1dTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl Lut1dTransform {
    /// Creates a 2-entry identity transform, forward, no half domain.
    pub fn new() -> Self {
        Self::from_valid_samples(identity_ramp(MIN_LENGTH))
    }

    /// Creates an identity ramp of `length` entries.
    ///
    /// `input_half_domain` is recorded as given; whether it agrees with
    /// `length` is only checked by [`validate`](Self::validate).
    ///
    /// # Errors
    ///
    /// Fails if `length` is outside `[2, 1048576]`.
    pub fn with_length(length: usize, input_half_domain: bool) -> Lut1dResult<Self> {
        check_length(length)?;
        let mut lut = Self::from_valid_samples(identity_ramp(length));
        lut.input_half_domain = input_half_domain;
        Ok(lut)
    }

    /// Creates a forward transform from explicit samples.
    ///
    /// # Errors
    ///
    /// Fails if the sample count is outside `[2, 1048576]`.
    pub fn from_samples(samples: Vec<[f32; 3]>) -> Lut1dResult<Self> {
        check_length(samples.len())?;
        Ok(Self::from_valid_samples(samples))
    }

    fn from_valid_samples(samples: Vec<[f32; 3]>) -> Self {
        Self {
            samples,
            direction: TransformDirection::default(),
            interpolation: Interpolation::default(),
            input_half_domain: false,
            output_raw_halfs: false,
            hue_adjust: HueAdjust::default(),
            file_output_bit_depth: BitDepth::default(),
        }
    }

    /// Returns the number of entries.
    #[inline]
    pub fn length(&self) -> usize {
        self.samples.len()
    }

    /// Resizes the table and resets it to an identity ramp.
    ///
    /// Existing samples are discarded, even if `length` is unchanged.
    ///
    /// # Errors
    ///
    /// Fails if `length` is outside `[2, 1048576]`; the table is left as is.
    pub fn set_length(&mut self, length: usize) -> Lut1dResult<()> {
        check_length(length)?;
        debug!(from = self.samples.len(), to = length, "Resetting 1D LUT to identity ramp");
        self.samples = identity_ramp(length);
        Ok(())
    }

    /// Returns the sample at `index`.
    ///
    /// # Errors
    ///
    /// Fails if `index` is not less than the length.
    pub fn value(&self, index: usize) -> Lut1dResult<[f32; 3]> {
        self.samples
            .get(index)
            .copied()
            .ok_or(Lut1dError::IndexOutOfRange {
                index,
                length: self.samples.len(),
            })
    }

    /// Overwrites the sample at `index`.
    ///
    /// # Errors
    ///
    /// Fails if `index` is not less than the length; no sample is written.
    pub fn set_value(&mut self, index: usize, r: f32, g: f32, b: f32) -> Lut1dResult<()> {
        let length = self.samples.len();
        let entry = self
            .samples
            .get_mut(index)
            .ok_or(Lut1dError::IndexOutOfRange { index, length })?;
        *entry = [r, g, b];
        Ok(())
    }

    /// All samples, in index order.
    #[inline]
    pub fn samples(&self) -> &[[f32; 3]] {
        &self.samples
    }

    /// Returns the direction.
    #[inline]
    pub fn direction(&self) -> TransformDirection {
        self.direction
    }

    /// Sets the direction. Samples are not reordered.
    #[inline]
    pub fn set_direction(&mut self, direction: TransformDirection) {
        self.direction = direction;
    }

    /// Returns the interpolation hint.
    #[inline]
    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    /// Sets the interpolation hint.
    #[inline]
    pub fn set_interpolation(&mut self, interpolation: Interpolation) {
        self.interpolation = interpolation;
    }

    /// Returns the hue adjustment mode.
    #[inline]
    pub fn hue_adjust(&self) -> HueAdjust {
        self.hue_adjust
    }

    /// Sets the hue adjustment mode.
    #[inline]
    pub fn set_hue_adjust(&mut self, hue_adjust: HueAdjust) {
        self.hue_adjust = hue_adjust;
    }

    /// Returns true if inputs index the table by their half-float bits.
    #[inline]
    pub fn input_half_domain(&self) -> bool {
        self.input_half_domain
    }

    /// Sets the half-domain flag without touching the samples.
    #[inline]
    pub fn set_input_half_domain(&mut self, half_domain: bool) {
        self.input_half_domain = half_domain;
    }

    /// Returns true if outputs are raw half-float bit patterns.
    #[inline]
    pub fn output_raw_halfs(&self) -> bool {
        self.output_raw_halfs
    }

    /// Sets the raw-half output flag.
    #[inline]
    pub fn set_output_raw_halfs(&mut self, raw_halfs: bool) {
        self.output_raw_halfs = raw_halfs;
    }

    /// Returns the bit depth hint for file writers.
    #[inline]
    pub fn file_output_bit_depth(&self) -> BitDepth {
        self.file_output_bit_depth
    }

    /// Sets the bit depth hint for file writers.
    #[inline]
    pub fn set_file_output_bit_depth(&mut self, bit_depth: BitDepth) {
        self.file_output_bit_depth = bit_depth;
    }

    /// Turns the table into a half-domain identity.
    ///
    /// Sets the half-domain flag and fills all 65536 entries with the value
    /// of their own bit pattern, so the table validates and maps every
    /// half input to itself.
    pub fn reset_half_domain_identity(&mut self) {
        debug!("Filling 1D LUT with half-domain identity");
        self.samples = half_domain::identity_samples();
        self.input_half_domain = true;
    }

    /// Per-channel minimum and maximum over all samples.
    ///
    /// NaN entries are skipped unless a channel holds nothing else.
    pub fn min_max(&self) -> ([f32; 3], [f32; 3]) {
        let first = self.samples[0];
        self.samples[1..]
            .iter()
            .fold((first, first), |(mut lo, mut hi), rgb| {
                for c in 0..3 {
                    lo[c] = lo[c].min(rgb[c]);
                    hi[c] = hi[c].max(rgb[c]);
                }
                (lo, hi)
            })
    }

    /// Checks that the transform is usable by an evaluator.
    ///
    /// In order: length bounds, half domain needing exactly 65536 entries,
    /// and an interpolation a 1D LUT supports.
    pub fn validate(&self) -> Lut1dResult<()> {
        let length = self.samples.len();
        trace!(length, half_domain = self.input_half_domain, "validate 1D LUT");

        check_length(length)?;

        if self.input_half_domain && length != HALF_DOMAIN_LENGTH {
            return Err(Lut1dError::HalfDomainLength { length });
        }

        if !self.interpolation.is_valid_for_1d() {
            return Err(Lut1dError::UnsupportedInterpolation(self.interpolation));
        }

        Ok(())
    }
}

impl fmt::Display for Lut1dTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lo, hi) = self.min_max();
        write!(
            f,
            "<Lut1DTransform direction={}, fileoutdepth={}, interpolation={}, \
             inputhalf={}, outputrawhalf={}, hueadjust={}, length={}, \
             minrgb=[{} {} {}], maxrgb=[{} {} {}]>",
            self.direction,
            self.file_output_bit_depth,
            self.interpolation,
            u8::from(self.input_half_domain),
            u8::from(self.output_raw_halfs),
            self.hue_adjust.code(),
            self.samples.len(),
            general(lo[0]),
            general(lo[1]),
            general(lo[2]),
            general(hi[0]),
            general(hi[1]),
            general(hi[2]),
        )
    }
}

fn check_length(length: usize) -> Lut1dResult<()> {
    if length < MIN_LENGTH {
        Err(Lut1dError::LengthTooSmall { length })
    } else if length > MAX_LENGTH {
        Err(Lut1dError::LengthTooLarge { length })
    } else {
        Ok(())
    }
}

fn identity_ramp(length: usize) -> Vec<[f32; 3]> {
    let step = (length - 1) as f32;
    (0..length)
        .map(|i| {
            let v = i as f32 / step;
            [v, v, v]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use approx::assert_relative_eq;

    #[test]
    fn test_default() {
        let lut = Lut1dTransform::new();
        assert_eq!(lut.length(), 2);
        assert_eq!(lut.direction(), TransformDirection::Forward);
        assert_eq!(lut.hue_adjust(), HueAdjust::None);
        assert_eq!(lut.interpolation(), Interpolation::Default);
        assert_eq!(lut.file_output_bit_depth(), BitDepth::Unknown);
        assert!(!lut.input_half_domain());
        assert!(!lut.output_raw_halfs());
        assert_eq!(lut.value(0).unwrap(), [0.0; 3]);
        assert_eq!(lut.value(1).unwrap(), [1.0; 3]);
        assert_eq!(lut, Lut1dTransform::default());
    }

    #[test]
    fn test_ramp() {
        let lut = Lut1dTransform::with_length(5, false).unwrap();
        assert_eq!(lut.value(2).unwrap(), [0.5; 3]);
        assert_relative_eq!(lut.value(1).unwrap()[1], 0.25);
        assert_eq!(lut.value(4).unwrap(), [1.0; 3]);
    }

    #[test]
    fn test_set_length_discards_values() {
        let mut lut = Lut1dTransform::with_length(3, false).unwrap();
        lut.set_value(1, 7.0, 8.0, 9.0).unwrap();
        lut.set_length(3).unwrap();
        assert_eq!(lut.value(1).unwrap(), [0.5; 3]);
    }

    #[test]
    fn test_length_bounds() {
        let mut lut = Lut1dTransform::with_length(3, false).unwrap();
        lut.set_value(1, 0.51, -0.52, 1.53).unwrap();
        let before = lut.clone();
        for length in [0, 1, MAX_LENGTH + 1] {
            assert_eq!(lut.set_length(length).unwrap_err().kind(), ErrorKind::Range);
            assert_eq!(lut.length(), 3);
            assert_eq!(lut.value(1).unwrap(), [0.51, -0.52, 1.53]);
        }
        assert_eq!(lut, before);
        assert!(Lut1dTransform::with_length(1, false).is_err());
        assert!(Lut1dTransform::from_samples(vec![[0.0; 3]]).is_err());
    }

    #[test]
    fn test_failed_set_value_keeps_state() {
        let mut lut = Lut1dTransform::new();
        let before = lut.clone();
        let err = lut.set_value(2, 1.0, 1.0, 1.0).unwrap_err();
        assert_eq!(err, Lut1dError::IndexOutOfRange { index: 2, length: 2 });
        assert_eq!(lut, before);
    }

    #[test]
    fn test_from_samples() {
        let lut = Lut1dTransform::from_samples(vec![[0.1, 0.2, 0.3], [-1.0, 4.0, 0.5]]).unwrap();
        assert_eq!(lut.length(), 2);
        assert_eq!(lut.samples()[1], [-1.0, 4.0, 0.5]);
        assert_eq!(lut.min_max(), ([-1.0, 0.2, 0.3], [0.1, 4.0, 0.5]));
    }

    #[test]
    fn test_min_max_skips_nan() {
        let mut lut = Lut1dTransform::with_length(3, false).unwrap();
        lut.set_value(1, f32::NAN, 2.0, -1.0).unwrap();
        let (lo, hi) = lut.min_max();
        assert_eq!(lo, [0.0, 0.0, -1.0]);
        assert_eq!(hi, [1.0, 2.0, 1.0]);
    }

    #[test]
    fn test_interpolation_validation() {
        let mut lut = Lut1dTransform::new();
        lut.set_interpolation(Interpolation::Linear);
        assert!(lut.validate().is_ok());
        lut.set_interpolation(Interpolation::Tetrahedral);
        let err = lut.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Consistency);
        assert!(err.to_string().contains("tetrahedral"));
    }

    #[test]
    fn test_half_domain_identity() {
        let mut lut = Lut1dTransform::new();
        lut.set_direction(TransformDirection::Inverse);
        lut.reset_half_domain_identity();
        assert!(lut.input_half_domain());
        assert_eq!(lut.length(), HALF_DOMAIN_LENGTH);
        assert_eq!(lut.direction(), TransformDirection::Inverse);
        assert!(lut.validate().is_ok());
        let (lo, hi) = lut.min_max();
        assert_eq!(lo, [f32::NEG_INFINITY; 3]);
        assert_eq!(hi, [f32::INFINITY; 3]);
    }

    #[test]
    fn test_eq_treats_nan_as_equal() {
        let mut a = Lut1dTransform::with_length(3, false).unwrap();
        a.set_value(1, f32::NAN, 0.5, 0.5).unwrap();
        assert_eq!(a, a.clone());

        let mut b = a.clone();
        b.set_value(1, 0.5, 0.5, 0.5).unwrap();
        assert_ne!(a, b);

        let mut c = a.clone();
        c.set_hue_adjust(HueAdjust::Wypn);
        assert_ne!(a, c);
    }

    #[test]
    fn test_display_flags() {
        let mut lut = Lut1dTransform::new();
        lut.set_output_raw_halfs(true);
        lut.set_hue_adjust(HueAdjust::Dw3);
        lut.set_interpolation(Interpolation::Nearest);
        lut.set_file_output_bit_depth(BitDepth::F16);
        assert_eq!(
            lut.to_string(),
            "<Lut1DTransform direction=forward, fileoutdepth=16f, interpolation=nearest, \
             inputhalf=0, outputrawhalf=1, hueadjust=1, length=2, \
             minrgb=[0 0 0], maxrgb=[1 1 1]>"
        );
    }
}
