use clap::Parser;

use crate::format;

const FORMAT_HELP: &str = "\
Layout token reference (reference date: Mon Jan 2 2006):
  01 or 1   month
  02 or 2   day
  2006      year (4-digit)
  06        year (2-digit)
  January   full month name (`Jan` for the abbreviation)
  Monday    full weekday name (`Mon` for the abbreviation)

Examples:
  --format \"02.01.2006\"        DD.MM.YYYY (default)
  --format \"2006-01-02\"        YYYY-MM-DD
  --format \"01/02/2006\"        MM/DD/YYYY
  --format \"January 2, 2006\"   Month Day, Year
  --format \"Mon, 02 Jan 06\"    Weekday, DD Mon YY";

/// Keyboard-driven terminal date picker.
#[derive(Parser)]
#[command(
    name = "datetty",
    version,
    about = "Pick a date in the terminal and print it in the given format",
    after_help = FORMAT_HELP
)]
pub struct Cli {
    /// Output date format using reference-date layout tokens.
    #[arg(short, long, default_value = format::DEFAULT_TEMPLATE)]
    pub format: String,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_defaults_to_day_month_year_template() {
        // Arrange / Act
        let cli = Cli::parse_from(["datetty"]);

        // Assert
        assert_eq!(cli.format, format::DEFAULT_TEMPLATE);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_accepts_custom_format_and_verbosity() {
        // Arrange / Act
        let cli = Cli::parse_from(["datetty", "--format", "2006-01-02", "-vv"]);

        // Assert
        assert_eq!(cli.format, "2006-01-02");
        assert_eq!(cli.verbose, 2);
    }
}
