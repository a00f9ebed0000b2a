use super::{Rule, RuleInput};
use crate::models::{AdvisoryEntry, AnalysisMode, Severity};

/// Light vs the crop requirement, plus the CO2 interaction.
///
/// The CO2 check is tier-dependent: the basic report surfaces ample
/// light as an enrichment opportunity (info), the premium integrated
/// analysis flags CO2 as the limiting factor earlier and harder
/// (warning at 20 klux instead of 25 klux).
pub struct LightRule;

/// Fraction of the crop's light requirement below which supplemental
/// lighting is advised.
const DEFICIT_FRACTION: f64 = 0.5;

const CO2_FLOOR_PPM: f64 = 400.0;
const AMPLE_LIGHT_BASIC_LUX: f64 = 25_000.0;
const AMPLE_LIGHT_PREMIUM_LUX: f64 = 20_000.0;

impl Rule for LightRule {
    fn id(&self) -> &'static str {
        "light_balance"
    }

    fn name(&self) -> &'static str {
        "Light / CO2 Balance"
    }

    fn evaluate(&self, input: &RuleInput) -> Vec<AdvisoryEntry> {
        let reading = input.reading;
        let profile = input.profile;
        let light = reading.light_lux;
        let co2 = reading.co2_ppm;

        if light < profile.target_light * DEFICIT_FRACTION {
            return vec![AdvisoryEntry::new(
                Severity::Warning,
                "moon",
                format!(
                    "[Insufficient light] Current light ({light:.0} lux) falls far short of the {} requirement ({:.0} lux). Consider supplemental lighting.",
                    profile.display_name, profile.target_light
                ),
            )];
        }

        match input.mode {
            AnalysisMode::Basic if light > AMPLE_LIGHT_BASIC_LUX && co2 < CO2_FLOOR_PPM => {
                vec![AdvisoryEntry::new(
                    Severity::Info,
                    "wind",
                    format!(
                        "[CO2 opportunity] Light is ample ({light:.0} lux) but CO2 ({co2:.0} ppm) is low. Carbon dioxide enrichment would raise yield."
                    ),
                )]
            }
            AnalysisMode::Premium if light > AMPLE_LIGHT_PREMIUM_LUX && co2 < CO2_FLOOR_PPM => {
                vec![AdvisoryEntry::new(
                    Severity::Warning,
                    "wind",
                    format!(
                        "[Photosynthesis limited] Strong light ({light:.0} lux) with low CO2 ({co2:.0} ppm) is capping photosynthetic efficiency. Restrict ventilation and strengthen CO2 dosing."
                    ),
                )]
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CropProfile, NutrientStandard, Reading};

    fn evaluate(light: f64, co2: f64, mode: AnalysisMode) -> Vec<AdvisoryEntry> {
        let profile = CropProfile::resolve("lettuce"); // requirement 25k lux
        let standard = NutrientStandard::resolve("lettuce", "yamazaki");
        let reading = Reading {
            light_lux: light,
            co2_ppm: co2,
            ..Reading::default()
        };
        LightRule.evaluate(&RuleInput {
            mode,
            reading: &reading,
            sample: None,
            profile: &profile,
            standard: &standard,
        })
    }

    #[test]
    fn deficit_warns_in_both_modes() {
        for mode in [AnalysisMode::Basic, AnalysisMode::Premium] {
            let entries = evaluate(12_000.0, 450.0, mode);
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].severity, Severity::Warning);
            assert!(entries[0].message.contains("Insufficient light"));
        }
    }

    #[test]
    fn co2_opportunity_is_info_in_basic() {
        let entries = evaluate(26_000.0, 380.0, AnalysisMode::Basic);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].severity, Severity::Info);
        assert!(entries[0].message.contains("CO2 opportunity"));
    }

    #[test]
    fn co2_limit_is_warning_in_premium() {
        // 22 klux is below the basic trigger but above the premium one.
        let entries = evaluate(22_000.0, 380.0, AnalysisMode::Premium);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].severity, Severity::Warning);
        assert!(entries[0].message.contains("Photosynthesis limited"));

        assert!(evaluate(22_000.0, 380.0, AnalysisMode::Basic).is_empty());
    }

    #[test]
    fn healthy_co2_is_silent() {
        assert!(evaluate(30_000.0, 450.0, AnalysisMode::Basic).is_empty());
        assert!(evaluate(30_000.0, 450.0, AnalysisMode::Premium).is_empty());
    }
}
