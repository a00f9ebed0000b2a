//! Terminal presentation adapter. Everything here consumes structured
//! results from the engine; nothing here feeds back into analysis.

use crate::models::{
    AnalysisMode, AnalysisResult, CropProfile, CurrentConditions, NutrientStandard, PriceHistory,
    PriceSummary, RevenueEstimate,
};

pub fn print_analysis(
    result: &AnalysisResult,
    profile: &CropProfile,
    standard: &NutrientStandard,
    mode: AnalysisMode,
) {
    match mode {
        AnalysisMode::Premium => {
            println!("Integrated analysis report");
            println!(
                "{} - {}: target EC {} dS/m | pH {}",
                profile.display_name, standard.name, standard.target_ec, standard.target_ph
            );
        }
        AnalysisMode::Basic => {
            println!("Greenhouse environment report");
            println!("{} growing environment", profile.display_name);
        }
    }

    let overall = result.overall;
    println!(
        "Status: {} {} ({})",
        overall.symbol(),
        overall.label(),
        overall.as_str()
    );

    let metrics = &result.metrics;
    let mut line = format!(
        "VPD {} kPa | dew point {}°C",
        metrics.vpd, metrics.dew_point
    );
    if let Some(ec_delta) = metrics.ec_delta {
        line.push_str(&format!(" | EC Δ {ec_delta:+}"));
    }
    if let Some(ph_trend) = metrics.ph_trend {
        line.push_str(&format!(" | pH Δ {ph_trend:+}"));
    }
    println!("{line}");
    println!();

    for entry in &result.advisories {
        println!("  {} {}", entry.severity.symbol(), entry.message);
    }
}

pub fn print_revenue(estimate: &RevenueEstimate, crop_id: &str, yield_kg: f64) {
    let region = &estimate.region;
    println!("{} region pricing ({})", region.name, region.description);
    println!(
        "{crop_id}: wholesale {} KRW/kg | retail {} KRW/kg",
        estimate.wholesale_price, estimate.retail_price
    );
    println!(
        "Projected for {yield_kg} kg: wholesale {} KRW | retail {} KRW",
        estimate.wholesale_revenue, estimate.retail_revenue
    );
}

pub fn print_market(
    crop_id: &str,
    wholesale: &PriceSummary,
    retail: &PriceSummary,
    history: &PriceHistory,
) {
    println!("{crop_id} market prices (KRW/kg, Garak market reference)");
    println!(
        "wholesale: min {} / avg {} / max {}",
        wholesale.min, wholesale.avg, wholesale.max
    );
    println!(
        "retail:    min {} / avg {} / max {}",
        retail.min, retail.avg, retail.max
    );
    println!();
    println!("Simulated wholesale history:");
    for (label, price) in history.labels.iter().zip(&history.prices) {
        println!("  {label:>14}  {price}");
    }
}

pub fn print_weather(conditions: &CurrentConditions) {
    println!(
        "Weather at {:.2}, {:.2} (fetched {})",
        conditions.latitude,
        conditions.longitude,
        conditions.fetched_at.format("%Y-%m-%d %H:%M UTC")
    );
    let mut line = format!(
        "{} {} | {:.1}°C | wind {:.1} km/h",
        conditions.condition.symbol(),
        conditions.condition,
        conditions.temperature_c,
        conditions.wind_speed_kmh
    );
    if let Some(humidity) = conditions.humidity_percent {
        line.push_str(&format!(" | humidity {humidity:.0}%"));
    }
    if let Some(pop) = conditions.precipitation_probability {
        line.push_str(&format!(" | precip {pop:.0}%"));
    }
    println!("{line}");
}

pub fn print_rules(rules: &[(&'static str, &'static str, bool)]) {
    println!("Advisory rule pipeline (in evaluation order):");
    for (id, name, premium_only) in rules {
        let tier = if *premium_only { "premium" } else { "all" };
        println!("  {id:<24} {name:<32} [{tier}]");
    }
}
