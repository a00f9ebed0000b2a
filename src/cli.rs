use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "farmsight", version, about = "Smart-farm advisory CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run interactive setup
    Init,
    /// Validate config and test the weather connection
    Check,
    /// Run the advisory analysis on a set of readings
    Analyze(AnalyzeArgs),
    /// Estimate harvest revenue at regional prices
    Revenue(RevenueArgs),
    /// Show market prices and a simulated history
    Market(MarketArgs),
    /// Fetch current weather for the farm location
    Weather,
    /// List the advisory rule pipeline
    Rules,
}

/// Readings are taken as raw strings: a blank or unparsable field falls
/// back to its sentinel default instead of rejecting the analysis.
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Air temperature, °C
    #[arg(long)]
    pub temp: Option<String>,

    /// Relative humidity, %
    #[arg(long)]
    pub humidity: Option<String>,

    /// Light intensity, lux
    #[arg(long)]
    pub light: Option<String>,

    /// CO2 concentration, ppm
    #[arg(long)]
    pub co2: Option<String>,

    /// Leaf surface temperature, °C
    #[arg(long)]
    pub leaf_temp: Option<String>,

    /// Crop id (defaults to the configured crop)
    #[arg(long)]
    pub crop: Option<String>,

    /// Nutrient standard id (defaults to the configured standard)
    #[arg(long)]
    pub standard: Option<String>,

    /// Run the full nutrient analysis (rules 6-10)
    #[arg(long)]
    pub premium: bool,

    /// Supply solution EC, dS/m (premium)
    #[arg(long)]
    pub supply_ec: Option<String>,

    /// Supply solution pH (premium)
    #[arg(long)]
    pub supply_ph: Option<String>,

    /// Root-zone EC, dS/m (premium)
    #[arg(long)]
    pub root_ec: Option<String>,

    /// Root-zone pH (premium)
    #[arg(long)]
    pub root_ph: Option<String>,

    /// Root-zone temperature, °C (premium)
    #[arg(long)]
    pub root_temp: Option<String>,

    /// Drainage EC, dS/m (premium)
    #[arg(long)]
    pub drain_ec: Option<String>,

    /// Drainage pH (premium)
    #[arg(long)]
    pub drain_ph: Option<String>,

    /// Emit the raw analysis result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct RevenueArgs {
    /// Crop id (defaults to the configured crop)
    #[arg(long)]
    pub crop: Option<String>,

    /// Expected yield in kilograms
    #[arg(long)]
    pub yield_kg: f64,

    /// Farm latitude (defaults to the configured location)
    #[arg(long)]
    pub lat: Option<f64>,

    /// Farm longitude (defaults to the configured location)
    #[arg(long)]
    pub lng: Option<f64>,
}

#[derive(Args)]
pub struct MarketArgs {
    /// Crop id (defaults to the configured crop)
    #[arg(long)]
    pub crop: Option<String>,

    /// History window
    #[arg(long, value_enum, default_value_t = PeriodArg::Week)]
    pub period: PeriodArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PeriodArg {
    Week,
    Month,
    Year,
}

impl From<PeriodArg> for crate::models::MarketPeriod {
    fn from(value: PeriodArg) -> Self {
        match value {
            PeriodArg::Week => crate::models::MarketPeriod::Week,
            PeriodArg::Month => crate::models::MarketPeriod::Month,
            PeriodArg::Year => crate::models::MarketPeriod::Year,
        }
    }
}
