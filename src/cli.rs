use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "paxline")]
#[command(version, about = "Break-even and profitability calculator for tours")]
pub struct Cli {
    /// Scenario file (defaults to ~/.paxline/scenario.toml)
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Initialize scenario file with the default tour
    #[arg(long = "init")]
    pub init: bool,

    /// Print current scenario
    #[arg(long = "print")]
    pub print: bool,

    /// Check scenario
    #[arg(long = "check")]
    pub check: bool,

    /// Override maximum capacity (pax)
    #[arg(
        short = 'n',
        long = "capacity",
        value_name = "PAX",
        value_parser = clap::value_parser!(u32).range(1..=crate::config::MAX_CAPACITY as i64)
    )]
    pub capacity: Option<u32>,

    /// Flat price per pax in display currency (switches to flat pricing)
    #[arg(
        short = 'p',
        long = "price",
        value_name = "AMOUNT",
        conflicts_with = "tiered",
        allow_negative_numbers = true
    )]
    pub price: Option<f64>,

    /// Use the scenario's tiered pricing
    #[arg(long = "tiered")]
    pub tiered: bool,

    /// Override sales commission percentage
    #[arg(long = "commission", value_name = "PERCENT")]
    pub commission: Option<f64>,

    /// Display currency (USD, EUR, GBP)
    #[arg(short = 'c', long = "currency", value_name = "CODE")]
    pub currency: Option<String>,

    /// Print chart samples and the interpolated break-even point
    #[arg(long = "chart")]
    pub chart: bool,

    /// Chart resolution (steps between 0 and the chart limit)
    #[arg(
        long = "resolution",
        value_name = "STEPS",
        default_value_t = crate::pricing::chart::DEFAULT_RESOLUTION
    )]
    pub resolution: u32,

    /// Output the full report as JSON
    #[arg(long = "json")]
    pub json: bool,

    /// Compute projection rows in parallel
    #[arg(long = "parallel")]
    pub parallel: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::parse_from([
            "paxline",
            "--capacity",
            "30",
            "--price",
            "120.5",
            "--currency",
            "eur",
            "--json",
        ]);
        assert_eq!(cli.capacity, Some(30));
        assert_eq!(cli.price, Some(120.5));
        assert_eq!(cli.currency.as_deref(), Some("eur"));
        assert_eq!(cli.resolution, 30);
        assert!(cli.json);
    }

    #[test]
    fn test_capacity_bounds() {
        assert!(Cli::try_parse_from(["paxline", "-n", "0"]).is_err());
        assert!(Cli::try_parse_from(["paxline", "-n", "4000000000"]).is_err());

        let cli = Cli::try_parse_from(["paxline", "-n", "100000"]).unwrap();
        assert_eq!(cli.capacity, Some(100_000));
    }

    #[test]
    fn test_price_conflicts_with_tiered() {
        let result = Cli::try_parse_from(["paxline", "--price", "100", "--tiered"]);
        assert!(result.is_err());
    }
}
