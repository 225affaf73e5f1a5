//! Validation command

use anyhow::{Context, Result};
use tracing::debug;

use crate::TableArgs;

pub fn run(args: TableArgs) -> Result<()> {
    let lut = super::build_table(&args)?;
    lut.validate().context("Validation failed")?;

    debug!(length = lut.length(), half_domain = lut.input_half_domain(), "1D LUT is valid");
    println!("ok");

    Ok(())
}
