//! Half-float domain indexing.
//!
//! A half-domain table is indexed by the raw 16-bit pattern of a half
//! float input, so it needs one entry for every pattern, NaNs and
//! infinities included.

use half::f16;

/// Number of entries a half-domain table must have.
pub const HALF_DOMAIN_LENGTH: usize = 1 << 16;

/// Returns the table index for a half-float input.
///
/// ```rust
/// use half::f16;
/// use vfx_lut1d::half_domain_index;
///
/// assert_eq!(half_domain_index(f16::ZERO), 0);
/// assert_eq!(half_domain_index(f16::ONE), 0x3c00);
/// ```
#[inline]
pub fn half_domain_index(value: f16) -> usize {
    value.to_bits() as usize
}

/// Identity samples over the whole half domain.
pub(crate) fn identity_samples() -> Vec<[f32; 3]> {
    (0..HALF_DOMAIN_LENGTH)
        .map(|i| {
            let v = f16::from_bits(i as u16).to_f32();
            [v, v, v]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_bit_pattern() {
        assert_eq!(half_domain_index(f16::from_f32(-0.0)), 0x8000);
        assert_eq!(half_domain_index(f16::INFINITY), 0x7c00);
        assert_eq!(half_domain_index(f16::MAX), 0x7bff);
    }

    #[test]
    fn identity_covers_every_pattern() {
        let samples = identity_samples();
        assert_eq!(samples.len(), HALF_DOMAIN_LENGTH);
        assert_eq!(samples[half_domain_index(f16::ONE)], [1.0; 3]);
        assert_eq!(samples[half_domain_index(f16::from_f32(-2.0))], [-2.0; 3]);
        assert!(samples[half_domain_index(f16::NAN)][0].is_nan());
    }
}
