//! Batch command: convert dates read line by line.

use std::io::{self, BufRead, BufReader};

use anyhow::{Context, Result};
use tracing::info;

use nongli_calendar::{IcuEngine, gregorian_to_lunar};

use crate::cli::BatchArgs;

/// Run batch conversion from a file or stdin, one date per line.
///
/// Each input line produces exactly one output line, so results stay
/// aligned with their inputs even when some lines fail validation.
pub fn run(args: BatchArgs) -> Result<()> {
    let engine = IcuEngine::new();

    let reader: Box<dyn BufRead> = match args.input {
        Some(ref path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("failed to open input file: {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut count = 0usize;
    for line in reader.lines() {
        let line = line.context("failed to read input line")?;
        println!("{}", gregorian_to_lunar(&engine, Some(&line)));
        count += 1;
    }
    info!(count, "batch conversion finished");
    Ok(())
}
