//! Convert command: convert one Gregorian date string.

use anyhow::Result;
use tracing::debug;

use nongli_calendar::{IcuEngine, gregorian_to_lunar};

use crate::cli::ConvertArgs;

/// Run a single conversion and print the result.
///
/// Validation failures are part of the normal output contract, so they
/// are printed like successful conversions rather than reported as errors.
pub fn run(args: ConvertArgs) -> Result<()> {
    let engine = IcuEngine::new();
    debug!(date = %args.date, "converting single date");
    println!("{}", gregorian_to_lunar(&engine, Some(&args.date)));
    Ok(())
}
