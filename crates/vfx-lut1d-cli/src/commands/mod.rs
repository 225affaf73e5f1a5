//! CLI command implementations

pub mod describe;
pub mod validate;

use anyhow::{Context, Result, bail};
use tracing::debug;
use vfx_lut1d::Lut1dTransform;

use crate::TableArgs;

/// Build a transform from the table options.
///
/// Options apply in a fixed order: length (or half identity), flags,
/// then `--set` entries in the order given. Validation is left to the caller.
pub fn build_table(args: &TableArgs) -> Result<Lut1dTransform> {
    debug!(?args, "Building 1D LUT");

    let mut lut = if args.half_identity {
        let mut lut = Lut1dTransform::new();
        lut.reset_half_domain_identity();
        lut
    } else {
        Lut1dTransform::with_length(args.length, args.half_domain)
            .with_context(|| format!("Invalid length {}", args.length))?
    };

    lut.set_output_raw_halfs(args.raw_halfs);
    let direction = if args.invert {
        args.direction.inverse()
    } else {
        args.direction
    };
    lut.set_direction(direction);
    lut.set_hue_adjust(args.hue);
    lut.set_file_output_bit_depth(args.bit_depth);
    lut.set_interpolation(args.interpolation);

    for spec in &args.set {
        let (index, [r, g, b]) = parse_entry(spec)?;
        lut.set_value(index, r, g, b)
            .with_context(|| format!("Failed to apply --set {}", spec))?;
    }

    Ok(lut)
}

/// Parse `INDEX=R,G,B`.
pub fn parse_entry(spec: &str) -> Result<(usize, [f32; 3])> {
    let Some((index, values)) = spec.split_once('=') else {
        bail!("Expected INDEX=R,G,B, got '{}'", spec);
    };
    let index: usize = index
        .trim()
        .parse()
        .with_context(|| format!("Invalid index in '{}'", spec))?;

    let values = values
        .split(',')
        .map(|v| v.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Invalid value in '{}'", spec))?;

    match values.as_slice() {
        &[r, g, b] => Ok((index, [r, g, b])),
        &[v] => Ok((index, [v, v, v])),
        _ => bail!("Expected 1 or 3 values in '{}', got {}", spec, values.len()),
    }
}
