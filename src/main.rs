//! `joshua-bundle` command-line entry point.

use std::io::Write as _;
use std::process::ExitCode;

use clap::Parser;

use joshua_bundle::{cli, commands, logging, options};

/// Exit status for every fatal error, including bad arguments.
const EXIT_FAILURE: u8 = 2;

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();

    let joshua_root = match options::joshua_root() {
        Ok(root) => root,
        Err(e) => {
            logging::init_subscriber(false);
            logging::Logger::new().error(&e.to_string());
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    let args = match cli::Cli::try_parse() {
        Ok(args) => args,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = writeln!(std::io::stderr(), "{}", cli::Cli::usage_error(&e));
            return ExitCode::from(EXIT_FAILURE);
        }
    };
    logging::init_subscriber(args.verbose);
    let log = logging::Logger::new();

    let result = options::BundleOptions::from_cli(args, joshua_root)
        .and_then(|opts| commands::bundle::run(&opts, &log));

    match result {
        Ok(()) => {
            log.print_summary();
            ExitCode::SUCCESS
        }
        Err(e) => {
            log.error(&format!("{e:#}"));
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
