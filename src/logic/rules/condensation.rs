use super::{Rule, RuleInput};
use crate::logic::calculations;
use crate::models::{AdvisoryEntry, Severity};

/// Condensation / disease risk: leaf temperature approaching the dew
/// point means dew forms on the leaf surface.
pub struct CondensationRule;

/// Minimum safe margin between leaf temperature and dew point, °C.
const DEW_POINT_MARGIN_C: f64 = 2.0;

impl Rule for CondensationRule {
    fn id(&self) -> &'static str {
        "condensation_risk"
    }

    fn name(&self) -> &'static str {
        "Condensation Risk"
    }

    fn evaluate(&self, input: &RuleInput) -> Vec<AdvisoryEntry> {
        let reading = input.reading;
        let dew_point =
            calculations::dew_point(reading.temperature_c, reading.relative_humidity);
        let leaf_temp = reading.leaf_temperature_c;

        if leaf_temp - dew_point < DEW_POINT_MARGIN_C {
            return vec![AdvisoryEntry::new(
                Severity::Danger,
                "shield-alert",
                format!(
                    "[Condensation risk] Leaf temperature ({leaf_temp:.1}°C) is close to the dew point ({dew_point:.1}°C). Dew on the leaf surface sharply raises the risk of fungal disease (powdery mildew, downy mildew). Heat the house or run circulation fans."
                ),
            )];
        }

        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnalysisMode, CropProfile, NutrientStandard, Reading};

    fn evaluate(temp: f64, hum: f64, leaf_temp: f64) -> Vec<AdvisoryEntry> {
        let profile = CropProfile::resolve("lettuce");
        let standard = NutrientStandard::resolve("lettuce", "yamazaki");
        let reading = Reading {
            temperature_c: temp,
            relative_humidity: hum,
            leaf_temperature_c: leaf_temp,
            ..Reading::default()
        };
        CondensationRule.evaluate(&RuleInput {
            mode: AnalysisMode::Basic,
            reading: &reading,
            sample: None,
            profile: &profile,
            standard: &standard,
        })
    }

    #[test]
    fn safe_margin_is_silent() {
        // dew point = 26.5 - 35/5 = 19.5; leaf 24.8 gives a 5.3°C margin
        assert!(evaluate(26.5, 65.0, 24.8).is_empty());
        // exactly at the 2°C margin: not under it, no entry
        assert!(evaluate(26.5, 65.0, 21.5).is_empty());
    }

    #[test]
    fn narrow_margin_is_danger() {
        let entries = evaluate(26.5, 65.0, 21.4);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].severity, Severity::Danger);
        assert!(entries[0].message.contains("dew point (19.5°C)"));
    }

    #[test]
    fn saturated_air_always_triggers() {
        // At 100% humidity the dew point equals air temperature, so any
        // leaf cooler than temp + 2 is at risk.
        let entries = evaluate(22.0, 100.0, 23.0);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].severity, Severity::Danger);
    }
}
