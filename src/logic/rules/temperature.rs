use super::{Rule, RuleInput};
use crate::models::{AdvisoryEntry, Severity};

/// Air temperature vs the crop's day/night targets.
///
/// The daytime band tolerates +3°C before a heat warning; the cold
/// check uses the night target minus 5°C so a single reading without
/// day/night context only trips on clearly low values.
pub struct TemperatureRule;

const DAY_TOLERANCE_C: f64 = 3.0;
const NIGHT_TOLERANCE_C: f64 = 5.0;

impl Rule for TemperatureRule {
    fn id(&self) -> &'static str {
        "temperature_deviation"
    }

    fn name(&self) -> &'static str {
        "Temperature Deviation"
    }

    fn evaluate(&self, input: &RuleInput) -> Vec<AdvisoryEntry> {
        let temp = input.reading.temperature_c;
        let profile = input.profile;

        if temp > profile.day_temp + DAY_TOLERANCE_C {
            return vec![AdvisoryEntry::new(
                Severity::Warning,
                "thermometer",
                format!(
                    "[High temperature] {temp}°C is above the optimal daytime range for {} ({}°C). Ventilation or shading is needed.",
                    profile.display_name, profile.day_temp
                ),
            )];
        }

        if temp < profile.night_temp - NIGHT_TOLERANCE_C {
            return vec![AdvisoryEntry::new(
                Severity::Warning,
                "thermometer-snowflake",
                format!(
                    "[Low temperature] {temp}°C is well below the target range. Growth delay is likely."
                ),
            )];
        }

        Vec::new()
    }
}
