mod cli;
mod config;
mod datasources;
mod error;
mod logic;
mod models;
mod render;

use clap::Parser;
use cli::{AnalyzeArgs, Cli, Commands, MarketArgs, RevenueArgs};
use config::Config;
use datasources::OpenMeteoClient;
use error::{FarmSightError, Result};
use logic::rules::AdvisoryEngine;
use models::reading::{parse_or, NutrientSample};
use models::{
    AnalysisMode, Coordinates, CropProfile, GeolocationError, MarketPrice, NutrientStandard,
    Reading, RegionPriceModifier,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging; -v flags override the env filter default
    let default_filter = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init => {
            let (config, path) = Config::setup_interactive()?;
            tracing::info!("configuration written to {}", path.display());
            println!(
                "Farm '{}' configured: {} under the {} standard.",
                config.farm.name, config.farm.crop, config.farm.standard
            );
            Ok(())
        }
        Commands::Check => check(cli.config).await,
        Commands::Analyze(args) => analyze(cli.config, args),
        Commands::Revenue(args) => revenue(cli.config, args),
        Commands::Market(args) => market(cli.config, args),
        Commands::Weather => weather(cli.config).await,
        Commands::Rules => {
            render::print_rules(&AdvisoryEngine::new().list_rules());
            Ok(())
        }
    }
}

async fn check(config_override: Option<std::path::PathBuf>) -> Result<()> {
    let config = Config::load(config_override)?;
    println!(
        "Config OK: farm '{}', crop {}, standard {}, location {:.2}, {:.2}",
        config.farm.name,
        config.farm.crop,
        config.farm.standard,
        config.farm.latitude,
        config.farm.longitude
    );

    if config.weather.enabled {
        let client = OpenMeteoClient::new(config.farm.latitude, config.farm.longitude);
        match client.test_connection().await {
            Ok(true) => println!("Weather: OK"),
            Ok(false) => println!("Weather: OFFLINE"),
            Err(e) => println!("Weather: OFFLINE ({e})"),
        }
    } else {
        println!("Weather: disabled");
    }

    Ok(())
}

fn analyze(config_override: Option<std::path::PathBuf>, args: AnalyzeArgs) -> Result<()> {
    let config = Config::load_or_default(config_override);

    let crop_id = args.crop.unwrap_or(config.farm.crop);
    let standard_id = args.standard.unwrap_or(config.farm.standard);
    let mode = if args.premium {
        AnalysisMode::Premium
    } else {
        AnalysisMode::Basic
    };

    let reading = Reading {
        temperature_c: parse_or(args.temp.as_deref(), Reading::DEFAULT_TEMPERATURE),
        relative_humidity: parse_or(args.humidity.as_deref(), Reading::DEFAULT_HUMIDITY),
        light_lux: parse_or(args.light.as_deref(), Reading::DEFAULT_LIGHT),
        co2_ppm: parse_or(args.co2.as_deref(), Reading::DEFAULT_CO2),
        leaf_temperature_c: parse_or(args.leaf_temp.as_deref(), Reading::DEFAULT_LEAF_TEMPERATURE),
    };

    // Unentered nutrient fields parse to 0 = not measured.
    let mut sample = NutrientSample::default();
    sample.supply.ec = parse_or(args.supply_ec.as_deref(), 0.0);
    sample.supply.ph = parse_or(args.supply_ph.as_deref(), 0.0);
    sample.root_zone.ec = parse_or(args.root_ec.as_deref(), 0.0);
    sample.root_zone.ph = parse_or(args.root_ph.as_deref(), 0.0);
    sample.root_zone.temperature_c = parse_or(args.root_temp.as_deref(), 0.0);
    sample.drainage.ec = parse_or(args.drain_ec.as_deref(), 0.0);
    sample.drainage.ph = parse_or(args.drain_ph.as_deref(), 0.0);

    let profile = CropProfile::resolve(&crop_id);
    let standard = NutrientStandard::resolve(&crop_id, &standard_id);

    tracing::debug!(
        "analyzing crop={crop_id} standard={standard_id} mode={mode:?}"
    );

    let engine = AdvisoryEngine::new();
    let result = engine.analyze(mode, &reading, Some(&sample), &profile, &standard);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render::print_analysis(&result, &profile, &standard, mode);
    }

    Ok(())
}

fn revenue(config_override: Option<std::path::PathBuf>, args: RevenueArgs) -> Result<()> {
    // Explicit coordinates win; otherwise the registered farm location;
    // with neither, the lookup fails and the default region applies.
    let config = Config::load(config_override);
    let crop_id = match (&args.crop, &config) {
        (Some(crop), _) => crop.clone(),
        (None, Ok(config)) => config.farm.crop.clone(),
        (None, Err(_)) => {
            return Err(FarmSightError::Config(
                "No crop given and no config found. Pass --crop or run `farmsight init`.".into(),
            ))
        }
    };

    let lookup = match (args.lat, args.lng, &config) {
        (Some(latitude), Some(longitude), _) => Ok(Coordinates {
            latitude,
            longitude,
        }),
        (None, None, Ok(config)) => Ok(Coordinates {
            latitude: config.farm.latitude,
            longitude: config.farm.longitude,
        }),
        _ => Err(GeolocationError::Unavailable),
    };

    let region = RegionPriceModifier::from_lookup(lookup);
    let estimate = logic::revenue::estimate_revenue(&crop_id, args.yield_kg, region)?;
    render::print_revenue(&estimate, &crop_id, args.yield_kg);
    Ok(())
}

fn market(config_override: Option<std::path::PathBuf>, args: MarketArgs) -> Result<()> {
    let config = Config::load_or_default(config_override);
    let crop_id = args.crop.unwrap_or(config.farm.crop);
    let period = args.period.into();

    let price = MarketPrice::resolve(&crop_id);
    let (wholesale, retail) = logic::market::price_summary(price);
    let history = logic::market::generate_history(price.wholesale, period);

    render::print_market(&crop_id, &wholesale, &retail, &history);
    Ok(())
}

async fn weather(config_override: Option<std::path::PathBuf>) -> Result<()> {
    let config = Config::load(config_override)?;
    if !config.weather.enabled {
        return Err(FarmSightError::Config(
            "Weather fetch is disabled in the config.".into(),
        ));
    }

    let client = OpenMeteoClient::new(config.farm.latitude, config.farm.longitude);
    let conditions = client.fetch_current().await?;
    render::print_weather(&conditions);
    Ok(())
}
