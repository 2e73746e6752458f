use std::process;

use clap::Parser;
use thiserror::Error;

use datetty::cli::Cli;
use datetty::format::{self, FormatError};
use datetty::picker::CursorState;
use datetty::runtime::{self, SessionOutcome};
use datetty::{calendar, logging};

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("terminal session failed: {0}")]
    Session(#[from] std::io::Error),
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(error) = run(&cli) {
        eprintln!("Error: {error}");
        if matches!(error, AppError::Format(_)) {
            eprintln!("Run 'datetty --help' for format examples");
        }
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    format::validate_template(&cli.format)?;

    let state = CursorState::new(calendar::today_local());
    if let SessionOutcome::Selected(date) = runtime::run(state)? {
        // The single line on stdout is the whole output contract; everything
        // else goes to stderr.
        println!("{}", format::format_date(date, &cli.format));
    }

    Ok(())
}
