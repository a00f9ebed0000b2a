use serde::{Deserialize, Serialize};

/// One set of greenhouse environment readings. Immutable per analysis
/// call; values arrive already parsed (see [`parse_or`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub temperature_c: f64,
    pub relative_humidity: f64,
    pub light_lux: f64,
    pub co2_ppm: f64,
    pub leaf_temperature_c: f64,
}

impl Reading {
    /// Sentinel defaults applied when a form field is blank or fails to
    /// parse. The analysis always runs; it never rejects input.
    pub const DEFAULT_TEMPERATURE: f64 = 26.5;
    pub const DEFAULT_HUMIDITY: f64 = 65.0;
    pub const DEFAULT_LIGHT: f64 = 12_000.0;
    pub const DEFAULT_CO2: f64 = 450.0;
    pub const DEFAULT_LEAF_TEMPERATURE: f64 = 24.8;
}

impl Default for Reading {
    fn default() -> Self {
        Self {
            temperature_c: Self::DEFAULT_TEMPERATURE,
            relative_humidity: Self::DEFAULT_HUMIDITY,
            light_lux: Self::DEFAULT_LIGHT,
            co2_ppm: Self::DEFAULT_CO2,
            leaf_temperature_c: Self::DEFAULT_LEAF_TEMPERATURE,
        }
    }
}

/// EC/pH pair for the supplied ("in") and drained ("out") solution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SolutionReading {
    pub ec: f64,
    pub ph: f64,
}

/// Conditions in the growing medium around the roots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RootZoneReading {
    pub ec: f64,
    pub ph: f64,
    pub temperature_c: f64,
}

/// Premium-tier nutrient solution sample. A field left at zero means
/// "not measured" and suppresses the rule that depends on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientSample {
    pub supply: SolutionReading,
    pub root_zone: RootZoneReading,
    pub drainage: SolutionReading,
}

/// Zero (or a negative artifact of parsing) counts as not measured.
pub fn measured(value: f64) -> bool {
    value > 0.0
}

/// Parse a raw user-entered field, falling back to `default` when the
/// field is absent, blank, or not a number.
pub fn parse_or(raw: Option<&str>, default: f64) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .unwrap_or(default)
}
