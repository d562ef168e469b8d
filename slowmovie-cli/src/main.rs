// slowmovie-cli/src/main.rs
//
// Entry point for the `slowmovie` binary.
//
// Responsibilities:
// - Parsing arguments, with clap's own errors mapped to exit code 1
// - Setting up logging (debug flag raises verbosity)
// - Running the playback and reporting any error on stderr

use std::process;

use clap::Parser;
use clap::error::ErrorKind;

use slowmovie_cli::output::print_error;
use slowmovie_cli::{Cli, logging, run_play};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version are successful exits; everything else is a usage error.
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            process::exit(code);
        }
    };

    logging::init(cli.debug);

    if let Err(e) = run_play(&cli) {
        log::debug!("Run failed: {:?}", e);
        print_error(&e);
        process::exit(1);
    }
}
