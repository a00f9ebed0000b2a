use super::{Rule, RuleInput};
use crate::models::reading::measured;
use crate::models::{AdvisoryEntry, Severity};

/// Root-zone pH vs the prescription target, ±0.5 tolerance.
///
/// Low pH is graded harder than high: acidification damages roots
/// directly, alkalinity "only" locks out trace elements.
pub struct RootPhRule;

const PH_TOLERANCE: f64 = 0.5;

impl Rule for RootPhRule {
    fn id(&self) -> &'static str {
        "root_zone_ph"
    }

    fn name(&self) -> &'static str {
        "Root-Zone pH"
    }

    fn premium_only(&self) -> bool {
        true
    }

    fn evaluate(&self, input: &RuleInput) -> Vec<AdvisoryEntry> {
        let Some(sample) = input.sample else {
            return Vec::new();
        };
        let root_ph = sample.root_zone.ph;
        if !measured(root_ph) {
            return Vec::new();
        }

        let target_ph = input.standard.target_ph;

        let entry = if root_ph > target_ph + PH_TOLERANCE {
            AdvisoryEntry::new(
                Severity::Warning,
                "alert-circle",
                format!(
                    "Root-zone pH ({root_ph}) is high. Fe, Mn and B deficiencies can develop; bring the supply pH down with nitric or phosphoric acid."
                ),
            )
        } else if root_ph < target_ph - PH_TOLERANCE {
            AdvisoryEntry::new(
                Severity::Danger,
                "skull",
                format!(
                    "Root-zone pH ({root_ph}) is low. Root damage and Ca/Mg deficiencies are likely; raise the supply pH with potassium hydroxide."
                ),
            )
        } else {
            AdvisoryEntry::new(
                Severity::Success,
                "check-circle",
                format!("Root-zone pH ({root_ph}) is within the range optimal for nutrient uptake."),
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

    fn evaluate(root_ph: f64) -> Vec<AdvisoryEntry> {
        let profile = CropProfile::resolve("tomato");
        let standard = NutrientStandard::resolve("tomato", "yamazaki"); // target pH 6.0
        let reading = Reading::default();
        let mut sample = NutrientSample::default();
        sample.root_zone.ph = root_ph;
        RootPhRule.evaluate(&RuleInput {
            mode: AnalysisMode::Premium,
            reading: &reading,
            sample: Some(&sample),
            profile: &profile,
            standard: &standard,
        })
    }

    #[test]
    fn high_ph_warns() {
        let entries = evaluate(6.8);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].severity, Severity::Warning);
    }

    #[test]
    fn low_ph_is_danger() {
        let entries = evaluate(5.2);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].severity, Severity::Danger);
        assert!(entries[0].message.contains("5.2"));
    }

    #[test]
    fn in_band_is_success() {
        assert_eq!(evaluate(6.0)[0].severity, Severity::Success);
        assert_eq!(evaluate(6.5)[0].severity, Severity::Success);
        assert_eq!(evaluate(5.5)[0].severity, Severity::Success);
    }

    #[test]
    fn unmeasured_is_skipped() {
        assert!(evaluate(0.0).is_empty());
    }
}
