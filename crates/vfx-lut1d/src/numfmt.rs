//! Float rendering for the transform descriptor.
//!
//! Matches the general (`%g`) notation with 6 significant digits, which is
//! how other color tools print LUT statistics, so descriptors stay
//! comparable across implementations.

const PRECISION: usize = 6;

/// Formats `value` with 6 significant digits, trailing zeros trimmed.
pub(crate) fn general(value: f32) -> String {
    let v = f64::from(value);
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // The exponent after rounding decides between fixed and scientific.
    let sci = format!("{:.*e}", PRECISION - 1, v);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= PRECISION as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exp.abs())
    } else {
        let decimals = (PRECISION as i32 - 1 - exp) as usize;
        trim_zeros(&format!("{:.*}", decimals, v)).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
