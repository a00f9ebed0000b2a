use super::{Rule, RuleInput};
use crate::models::reading::measured;
use crate::models::{AdvisoryEntry, Severity};

/// Root-zone EC vs the prescription target.
///
/// Tolerance is asymmetric: +0.5 dS/m before salt accumulation is
/// flagged, -0.3 dS/m before dilution is flagged. Skipped when the
/// root-zone EC was not measured.
pub struct RootEcRule;

const EXCESS_TOLERANCE: f64 = 0.5;
const DEFICIT_TOLERANCE: f64 = 0.3;

impl Rule for RootEcRule {
    fn id(&self) -> &'static str {
        "root_zone_ec"
    }

    fn name(&self) -> &'static str {
        "Root-Zone EC"
    }

    fn premium_only(&self) -> bool {
        true
    }

    fn evaluate(&self, input: &RuleInput) -> Vec<AdvisoryEntry> {
        let Some(sample) = input.sample else {
            return Vec::new();
        };
        let root_ec = sample.root_zone.ec;
        if !measured(root_ec) {
            return Vec::new();
        }

        let target_ec = input.standard.target_ec;

        let entry = if root_ec > target_ec + EXCESS_TOLERANCE {
            AdvisoryEntry::new(
                Severity::Warning,
                "alert-triangle",
                format!(
                    "Root-zone EC ({root_ec} dS/m) is above the target ({target_ec} dS/m). Salt accumulation risk: lower the supply EC by 0.2-0.5 dS/m or raise the drainage ratio above 30% to flush the medium."
                ),
            )
        } else if root_ec < target_ec - DEFICIT_TOLERANCE {
            AdvisoryEntry::new(
                Severity::Info,
                "flask-conical",
                format!(
                    "Root-zone EC ({root_ec} dS/m) is below the target ({target_ec} dS/m). Growth may slow; step the supply EC up in 0.2 dS/m increments."
                ),
            )
        } else {
            AdvisoryEntry::new(
                Severity::Success,
                "check-circle",
                format!(
                    "Root-zone EC ({root_ec} dS/m) is holding steady within the ±0.3 dS/m tolerance band."
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

    fn evaluate(root_ec: f64) -> Vec<AdvisoryEntry> {
        let profile = CropProfile::resolve("tomato");
        let standard = NutrientStandard::resolve("tomato", "cooper"); // target EC 2.5
        let reading = Reading::default();
        let mut sample = NutrientSample::default();
        sample.root_zone.ec = root_ec;
        RootEcRule.evaluate(&RuleInput {
            mode: AnalysisMode::Premium,
            reading: &reading,
            sample: Some(&sample),
            profile: &profile,
            standard: &standard,
        })
    }

    #[test]
    fn excess_warns_with_values_interpolated() {
        let entries = evaluate(3.2);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].severity, Severity::Warning);
        assert!(entries[0].message.contains("3.2 dS/m"));
        assert!(entries[0].message.contains("2.5 dS/m"));
    }

    #[test]
    fn deficit_is_info() {
        let entries = evaluate(2.1);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].severity, Severity::Info);
    }

    #[test]
    fn in_band_is_success() {
        let entries = evaluate(2.4);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].severity, Severity::Success);

        // Band edges are inclusive.
        assert_eq!(evaluate(3.0)[0].severity, Severity::Success);
        assert_eq!(evaluate(2.2)[0].severity, Severity::Success);
    }

    #[test]
    fn unmeasured_is_skipped() {
        assert!(evaluate(0.0).is_empty());

        let profile = CropProfile::resolve("tomato");
        let standard = NutrientStandard::resolve("tomato", "cooper");
        let reading = Reading::default();
        let entries = RootEcRule.evaluate(&RuleInput {
            mode: AnalysisMode::Premium,
            reading: &reading,
            sample: None,
            profile: &profile,
            standard: &standard,
        });
        assert!(entries.is_empty());
    }
}
