use clap::Parser;
use std::process;
use tz_collector::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Run the report
    let result = commands::run(args);

    match result {
        Ok(_stats) => {
            // Success - the report has already been written to stdout
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
