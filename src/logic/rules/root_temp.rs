use super::{Rule, RuleInput};
use crate::models::reading::measured;
use crate::models::{AdvisoryEntry, Severity};

/// Root-zone temperature band: dissolved oxygen drops above 25°C,
/// phosphorus uptake suffers below 15°C.
pub struct RootTempRule;

const HIGH_LIMIT_C: f64 = 25.0;
const LOW_LIMIT_C: f64 = 15.0;

impl Rule for RootTempRule {
    fn id(&self) -> &'static str {
        "root_zone_temperature"
    }

    fn name(&self) -> &'static str {
        "Root-Zone Temperature"
    }

    fn premium_only(&self) -> bool {
        true
    }

    fn evaluate(&self, input: &RuleInput) -> Vec<AdvisoryEntry> {
        let Some(sample) = input.sample else {
            return Vec::new();
        };
        let root_temp = sample.root_zone.temperature_c;
        if !measured(root_temp) {
            return Vec::new();
        }

        let entry = if root_temp > HIGH_LIMIT_C {
            AdvisoryEntry::new(
                Severity::Warning,
                "thermometer",
                format!(
                    "Root-zone temperature ({root_temp}°C) exceeds the upper limit. Falling dissolved oxygen will sap root vigor; run shading and solution cooling."
                ),
            )
        } else if root_temp < LOW_LIMIT_C {
            AdvisoryEntry::new(
                Severity::Info,
                "thermometer-snowflake",
                format!(
                    "Root-zone temperature ({root_temp}°C) is low. Phosphorus uptake can fail; root-zone heating is needed."
                ),
            )
        } else {
            AdvisoryEntry::new(
                Severity::Success,
                "check-circle",
                format!(
                    "Root-zone temperature ({root_temp}°C) is within the optimal growth range (18-23°C)."
                ),
            )
        };

        vec![entry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::reading::NutrientSample;
    use crate::models::{AnalysisMode, CropProfile, NutrientStandard, Reading};

    fn evaluate(root_temp: f64) -> Vec<AdvisoryEntry> {
        let profile = CropProfile::resolve("cucumber");
        let standard = NutrientStandard::resolve("cucumber", "yamazaki");
        let reading = Reading::default();
        let mut sample = NutrientSample::default();
        sample.root_zone.temperature_c = root_temp;
        RootTempRule.evaluate(&RuleInput {
            mode: AnalysisMode::Premium,
            reading: &reading,
            sample: Some(&sample),
            profile: &profile,
            standard: &standard,
        })
    }

    #[test]
    fn bands() {
        assert_eq!(evaluate(26.0)[0].severity, Severity::Warning);
        assert_eq!(evaluate(14.0)[0].severity, Severity::Info);
        assert_eq!(evaluate(20.0)[0].severity, Severity::Success);
        // Limits themselves are in band.
        assert_eq!(evaluate(25.0)[0].severity, Severity::Success);
        assert_eq!(evaluate(15.0)[0].severity, Severity::Success);
    }

    #[test]
    fn unmeasured_is_skipped() {
        assert!(evaluate(0.0).is_empty());
    }
}
