use std::process;

use anyhow::Result;
use clap::error::ErrorKind;

use check_graphite::cli::build_cli;
use check_graphite::core::Severity;
use check_graphite::{commands, init_logging};

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            println!("{} - {:#}", Severity::Unknown, e);
            Severity::Unknown.exit_code()
        }
    };

    process::exit(code);
}

fn run() -> Result<i32> {
    let matches = match build_cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(Severity::Ok.exit_code());
        }
        // Usage errors must not look like a critical result
        Err(e) => {
            eprint!("{}", e.render());
            println!("{} - invalid arguments", Severity::Unknown);
            return Ok(Severity::Unknown.exit_code());
        }
    };

    init_logging(matches.get_flag("debug"));

    commands::check(&matches)
}
