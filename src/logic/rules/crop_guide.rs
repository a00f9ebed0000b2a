use super::{Rule, RuleInput};
use crate::models::{AdvisoryEntry, Severity};

/// Crop guide rule - always the first entry in the report.
///
/// Emits the crop's growing-guide tip, and in premium mode also the
/// selected nutrient standard's name and description, so the report
/// opens with what the grower is being measured against.
pub struct CropGuideRule;

impl Rule for CropGuideRule {
    fn id(&self) -> &'static str {
        "crop_guide"
    }

    fn name(&self) -> &'static str {
        "Crop Growing Guide"
    }

    fn evaluate(&self, input: &RuleInput) -> Vec<AdvisoryEntry> {
        let mut entries = vec![AdvisoryEntry::new(
            Severity::Info,
            "book",
            format!(
                "[{} growing guide] {}",
                input.profile.display_name, input.profile.guidance
            ),
        )];

        if input.mode.is_premium() {
            entries.push(AdvisoryEntry::new(
                Severity::Info,
                "book-open",
                format!("[{}] {}", input.standard.name, input.standard.description),
            ));
        }

        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnalysisMode, CropProfile, NutrientStandard, Reading};

    fn fixtures() -> (CropProfile, NutrientStandard, Reading) {
        (
            CropProfile::resolve("tomato"),
            NutrientStandard::resolve("tomato", "yamazaki"),
            Reading::default(),
        )
    }

    #[test]
    fn basic_emits_guide_tip_only() {
        let (profile, standard, reading) = fixtures();
        let entries = CropGuideRule.evaluate(&RuleInput {
            mode: AnalysisMode::Basic,
            reading: &reading,
            sample: None,
            profile: &profile,
            standard: &standard,
        });
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].severity, Severity::Info);
        assert!(entries[0].message.contains("Tomato growing guide"));
    }

    #[test]
    fn premium_adds_standard_description() {
        let (profile, standard, reading) = fixtures();
        let entries = CropGuideRule.evaluate(&RuleInput {
            mode: AnalysisMode::Premium,
            reading: &reading,
            sample: None,
            profile: &profile,
            standard: &standard,
        });
        assert_eq!(entries.len(), 2);
        assert!(entries[1].message.contains("Yamazaki"));
    }
}
