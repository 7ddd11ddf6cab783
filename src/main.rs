//! Probabilistic GF(2) matrix-product verifier
//!
//! Reads a batch of (size, A, B, C) test cases and reports, per case,
//! whether the claimed product C = A·B holds; on a detected mismatch it
//! prints the 1-based (row, col) of one bad element. Verification is
//! Freivalds' randomized check, so a fixed seed makes runs reproducible.

use anyhow::{Context, Result};
use freivalds::batch;
use freivalds::verify::VerifierConfig;
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = freivalds::parse_args();

    let input = matches
        .get_one::<String>("input")
        .expect("Input file is required");
    let iterations = *matches
        .get_one::<usize>("iterations")
        .expect("iterations has a default");
    let seed = *matches.get_one::<u64>("seed").expect("seed has a default");

    let config = VerifierConfig { iterations };
    let mut rng = StdRng::seed_from_u64(seed);

    let file = File::open(input).with_context(|| format!("failed to open input file {}", input))?;
    let reader = BufReader::new(file);

    let processed = match matches.get_one::<String>("output") {
        Some(path) => {
            let out = File::create(path)
                .with_context(|| format!("failed to create output file {}", path))?;
            let mut writer = BufWriter::new(out);
            let processed = batch::run(reader, &mut writer, config, &mut rng)?;
            writer.flush()?;
            processed
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            batch::run(reader, &mut writer, config, &mut rng)?
        }
    };

    debug!("processed {} test case(s)", processed);
    Ok(())
}
