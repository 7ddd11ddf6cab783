use clap::{Arg, Command};
use std::fs;

pub fn parse_args() -> clap::ArgMatches {
    Command::new("freivalds")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Probabilistic GF(2) matrix-product verification with bad-element localization")
        .arg(
            Arg::new("input")
                .help("Input file with test cases")
                .required(true)
                .value_parser(|input: &str| {
                    let path =
                        fs::canonicalize(input).map_err(|_| "Failed to resolve input path")?;
                    if path.exists() {
                        Ok(path.to_string_lossy().to_string())
                    } else {
                        Err(String::from("Input file does not exist"))
                    }
                }),
        )
        .arg(
            Arg::new("output")
                .help("Output file (stdout when omitted)")
                .required(false),
        )
        .arg(
            Arg::new("iterations")
                .short('i')
                .long("iterations")
                .help("Random probes per test case")
                .value_name("N")
                .default_value("20")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .help("Seed for the probe vector generator")
                .value_name("SEED")
                .default_value("42")
                .value_parser(clap::value_parser!(u64)),
        )
        .get_matches()
}
