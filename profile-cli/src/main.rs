use anyhow::Context;
use clap::{Arg, Command};
use profile_lib::*;
use std::fs;
use std::io;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = Command::new("profile-reader")
        .version("0.1.0")
        .about("Read a key-value profile file into a structured record")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Profile file to read (stdin if not specified)")
                .required(false),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output file (stdout if not specified)")
                .required(false),
        )
        .arg(
            Arg::new("match")
                .short('m')
                .long("match")
                .value_name("STRATEGY")
                .help("How lines are matched to profile fields")
                .value_parser(["exact", "substring"])
                .default_value("exact"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Output format")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .get_matches();

    let strategy: MatchStrategy = matches
        .get_one::<String>("match")
        .map(|s| s.as_str().into())
        .unwrap_or_default();
    let parser = ProfileParser::with_strategy(strategy);

    let profile = match matches.get_one::<String>("input") {
        Some(input_file) => {
            log::info!("Reading profile from {}", input_file);
            parser
                .parse_file(input_file)
                .with_context(|| format!("Failed to read profile from {}", input_file))?
        }
        None => {
            log::info!("Reading profile from stdin");
            parser
                .parse_reader(io::stdin().lock())
                .context("Failed to read profile from stdin")?
        }
    };

    let rendered = match matches.get_one::<String>("format").map(String::as_str) {
        Some("json") => serde_json::to_string_pretty(&profile)? + "\n",
        _ => profile.to_string(),
    };

    if let Some(output_file) = matches.get_one::<String>("output") {
        fs::write(output_file, rendered)
            .with_context(|| format!("Failed to write {}", output_file))?;
    } else {
        print!("{}", rendered);
    }

    Ok(())
}
