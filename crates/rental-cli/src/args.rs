//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use rental_core::Rental;

use crate::config::OutputFormat;

/// Price bike rentals and print the invoice.
///
/// Each RENTAL is `<kind>:<units>` where kind is hour, day or week,
/// e.g. `bike-rental day:1 hour:1 week:1`.
#[derive(Debug, Parser)]
#[command(name = "bike-rental", version, about)]
pub struct Args {
    /// Config file (defaults to the platform config directory).
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format, overriding config and environment.
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Rentals to put on the invoice, in order.
    #[arg(value_name = "RENTAL", required = true)]
    pub rentals: Vec<Rental>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_rentals_in_order() {
        let args = Args::try_parse_from(["bike-rental", "day:1", "hour:1", "week:1"]).unwrap();
        assert_eq!(
            args.rentals,
            vec![Rental::by_day(1), Rental::by_hour(1), Rental::by_week(1)]
        );
        assert!(args.format.is_none());
        assert!(args.config.is_none());
    }

    #[test]
    fn test_parses_flags() {
        let args =
            Args::try_parse_from(["bike-rental", "--format", "json", "-c", "x.toml", "hour:2"])
                .unwrap();
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.config, Some(PathBuf::from("x.toml")));
    }

    #[test]
    fn test_rejects_bad_rentals() {
        assert!(Args::try_parse_from(["bike-rental"]).is_err());
        assert!(Args::try_parse_from(["bike-rental", "month:1"]).is_err());
        assert!(Args::try_parse_from(["bike-rental", "hour:-1"]).is_err());
    }
}
