//! Descriptor command

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::DescribeArgs;

pub fn run(args: DescribeArgs) -> Result<()> {
    let lut = super::build_table(&args.table)?;

    if args.check {
        lut.validate().context("Validation failed")?;
        debug!("1D LUT is valid");
    }

    println!("{}", lut);

    let (lo, hi) = lut.min_max();
    info!(length = lut.length(), ?lo, ?hi, "1D LUT stats");

    Ok(())
}
