use super::{Rule, RuleInput};
use crate::models::{AdvisoryEntry, Severity};

/// Radiation-to-temperature ratio balance (premium integrated
/// analysis). High temperature under weak light burns assimilates in
/// respiration faster than photosynthesis replaces them.
pub struct RtrBalanceRule;

const LOW_LIGHT_LUX: f64 = 10_000.0;
const HIGH_TEMP_C: f64 = 25.0;

impl Rule for RtrBalanceRule {
    fn id(&self) -> &'static str {
        "rtr_balance"
    }

    fn name(&self) -> &'static str {
        "Radiation/Temperature Balance"
    }

    fn premium_only(&self) -> bool {
        true
    }

    fn evaluate(&self, input: &RuleInput) -> Vec<AdvisoryEntry> {
        let reading = input.reading;
        if reading.light_lux < LOW_LIGHT_LUX && reading.temperature_c > HIGH_TEMP_C {
            return vec![AdvisoryEntry::new(
                Severity::Warning,
                "sun",
                format!(
                    "[RTR imbalance] Light ({:.0} lux) is low while temperature ({}°C) stays high. Respiration is consuming assimilates and the crop will weaken. Bring the average temperature down toward 20°C.",
                    reading.light_lux, reading.temperature_c
                ),
            )];
        }
        Vec::new()
    }
}
