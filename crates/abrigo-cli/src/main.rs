//! Abrigo CLI
//!
//! A command-line front end for the adoption matcher. Takes the two
//! adopters' toy lists and the processing order, runs one matching
//! round, and prints a line per animal (or the validation error).
//!
//! # Usage
//!
//! ```bash
//! abrigo "RATO,BOLA" "BOLA,LASER" "Rex,Mimi"
//! abrigo --json "RATO,BOLA" "BOLA,LASER" "Rex,Mimi"
//! ```

use std::process::ExitCode;

use abrigo::wire::Response;
use abrigo::Shelter;
use clap::Parser;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "abrigo")]
#[command(about = "Match shelter animals to two candidate adopters")]
struct Args {
    /// Adopter one's toy list, comma-delimited (e.g. "RATO,BOLA")
    prefs_one: String,

    /// Adopter two's toy list, comma-delimited
    prefs_two: String,

    /// Animal names to process, comma-delimited, in precedence order
    order: String,

    /// Print the wire JSON body instead of one line per animal
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        "abrigo=trace"
    } else {
        "abrigo=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let shelter = Shelter::new();
    debug!(
        "Matching {} animals against two preference lists",
        args.order.split(',').count()
    );

    let result = shelter.find_adopters(&args.prefs_one, &args.prefs_two, &args.order);

    if args.json {
        let response = Response::from(result.clone());
        match serde_json::to_string(&response) {
            Ok(body) => println!("{body}"),
            Err(err) => {
                eprintln!("failed to encode response: {err}");
                return ExitCode::FAILURE;
            }
        }
        return match result {
            Ok(_) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        };
    }

    match result {
        Ok(placements) => {
            info!("Resolved {} animals", placements.len());
            for placement in placements {
                println!("{placement}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
