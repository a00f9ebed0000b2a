use super::{Rule, RuleInput};
use crate::logic::calculations;
use crate::models::{AdvisoryEntry, AnalysisMode, Severity};

/// VPD band check. Always emits exactly one entry: humid warning, dry
/// warning, or success.
///
/// The dry-stress threshold differs by tier (1.5 kPa premium, 1.6 kPa
/// basic). The two constants are intentionally kept separate rather
/// than unified.
pub struct VpdRule;

const HUMID_VPD_KPA: f64 = 0.5;
const DRY_VPD_PREMIUM_KPA: f64 = 1.5;
const DRY_VPD_BASIC_KPA: f64 = 1.6;

fn dry_threshold(mode: AnalysisMode) -> f64 {
    match mode {
        AnalysisMode::Premium => DRY_VPD_PREMIUM_KPA,
        AnalysisMode::Basic => DRY_VPD_BASIC_KPA,
    }
}

impl Rule for VpdRule {
    fn id(&self) -> &'static str {
        "vpd_bands"
    }

    fn name(&self) -> &'static str {
        "Vapor Pressure Deficit"
    }

    fn evaluate(&self, input: &RuleInput) -> Vec<AdvisoryEntry> {
        let reading = input.reading;
        let vpd = calculations::vpd(reading.temperature_c, reading.relative_humidity);

        let entry = if vpd < HUMID_VPD_KPA {
            AdvisoryEntry::new(
                Severity::Warning,
                "cloud-rain",
                format!(
                    "[Humidity warning] Air moisture is high (VPD {vpd:.1} kPa). Heat and ventilate to prevent fungal disease."
                ),
            )
        } else if vpd > dry_threshold(input.mode) {
            AdvisoryEntry::new(
                Severity::Warning,
                "sun",
                format!(
                    "[Dry stress] The air is dry (VPD {vpd:.1} kPa). Raise humidity to keep stomata from closing."
                ),
            )
        } else {
            AdvisoryEntry::new(
                Severity::Success,
                "check-circle",
                format!(
                    "Atmospheric moisture (VPD {vpd:.1} kPa) is in the optimal range for crop growth."
                ),
            )
        };

        vec![entry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CropProfile, NutrientStandard, Reading};

    fn evaluate(temp: f64, hum: f64, mode: AnalysisMode) -> AdvisoryEntry {
        let profile = CropProfile::resolve("tomato");
        let standard = NutrientStandard::resolve("tomato", "yamazaki");
        let reading = Reading {
            temperature_c: temp,
            relative_humidity: hum,
            ..Reading::default()
        };
        let mut entries = VpdRule.evaluate(&RuleInput {
            mode,
            reading: &reading,
            sample: None,
            profile: &profile,
            standard: &standard,
        });
        assert_eq!(entries.len(), 1);
        entries.remove(0)
    }

    #[test]
    fn humid_band_warns() {
        // 20°C / 90% -> VPD ~0.23 kPa
        let entry = evaluate(20.0, 90.0, AnalysisMode::Basic);
        assert_eq!(entry.severity, Severity::Warning);
        assert!(entry.message.contains("Humidity warning"));
    }

    #[test]
    fn dry_band_warns() {
        // 32°C / 40% -> VPD ~2.85 kPa
        let entry = evaluate(32.0, 40.0, AnalysisMode::Basic);
        assert_eq!(entry.severity, Severity::Warning);
        assert!(entry.message.contains("Dry stress"));
    }

    #[test]
    fn optimal_band_succeeds() {
        // 26.5°C / 65% -> VPD ~1.21 kPa
        let entry = evaluate(26.5, 65.0, AnalysisMode::Premium);
        assert_eq!(entry.severity, Severity::Success);
    }

    #[test]
    fn tier_thresholds_differ_between_modes() {
        // 28°C / 59% -> VPD ~1.55 kPa: dry for premium, optimal for basic.
        let premium = evaluate(28.0, 59.0, AnalysisMode::Premium);
        let basic = evaluate(28.0, 59.0, AnalysisMode::Basic);
        assert_eq!(premium.severity, Severity::Warning);
        assert_eq!(basic.severity, Severity::Success);
    }
}
