use super::{
    condensation::CondensationRule, crop_guide::CropGuideRule, drainage::DrainageRule,
    light::LightRule, root_ec::RootEcRule, root_ph::RootPhRule, root_temp::RootTempRule,
    rtr_balance::RtrBalanceRule, temperature::TemperatureRule, vpd::VpdRule,
    water_stress::WaterStressRule, Rule, RuleInput,
};
use crate::logic::calculations;
use crate::models::reading::{measured, NutrientSample};
use crate::models::{
    AdvisoryEntry, AnalysisMetrics, AnalysisMode, AnalysisResult, CropProfile, NutrientStandard,
    Reading, Severity,
};

/// Runs the advisory rule pipeline in a fixed order: guide tip first,
/// then the environment checks, then the nutrient-solution checks.
/// The order of the emitted entries is their priority order.
pub struct AdvisoryEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl AdvisoryEngine {
    pub fn new() -> Self {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(CropGuideRule),
            Box::new(TemperatureRule),
            Box::new(VpdRule),
            Box::new(CondensationRule),
            Box::new(LightRule),
            Box::new(RtrBalanceRule),
            Box::new(RootEcRule),
            Box::new(RootPhRule),
            Box::new(RootTempRule),
            Box::new(DrainageRule),
            Box::new(WaterStressRule),
        ];

        Self { rules }
    }

    /// Run one complete analysis. Pure and synchronous: no clocks, no
    /// randomness, no shared state between invocations.
    pub fn analyze(
        &self,
        mode: AnalysisMode,
        reading: &Reading,
        sample: Option<&NutrientSample>,
        profile: &CropProfile,
        standard: &NutrientStandard,
    ) -> AnalysisResult {
        // Nutrient data only participates in premium analysis.
        let sample = if mode.is_premium() { sample } else { None };

        let input = RuleInput {
            mode,
            reading,
            sample,
            profile,
            standard,
        };

        let mut advisories: Vec<AdvisoryEntry> = Vec::new();
        for rule in &self.rules {
            if rule.premium_only() && !mode.is_premium() {
                continue;
            }
            advisories.extend(rule.evaluate(&input));
        }

        if advisories.is_empty() {
            advisories.push(AdvisoryEntry::new(
                Severity::Success,
                "check-circle",
                "All parameters are within the accepted tolerance ranges.",
            ));
        }

        AnalysisResult {
            overall: overall_severity(&advisories),
            metrics: compute_metrics(reading, sample),
            advisories,
        }
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str, bool)> {
        self.rules
            .iter()
            .map(|r| (r.id(), r.name(), r.premium_only()))
            .collect()
    }
}

impl Default for AdvisoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Worst severity wins; later low-severity entries never downgrade it.
fn overall_severity(entries: &[AdvisoryEntry]) -> Severity {
    entries
        .iter()
        .map(|e| e.severity)
        .max()
        .unwrap_or(Severity::Success)
}

fn compute_metrics(reading: &Reading, sample: Option<&NutrientSample>) -> AnalysisMetrics {
    let vpd = calculations::vpd(reading.temperature_c, reading.relative_humidity);
    let dew_point = calculations::dew_point(reading.temperature_c, reading.relative_humidity);

    let ec_delta = sample
        .filter(|s| measured(s.root_zone.ec) && measured(s.supply.ec))
        .map(|s| calculations::round2(calculations::ec_delta(s.root_zone.ec, s.supply.ec)));
    let ph_trend = sample
        .filter(|s| measured(s.root_zone.ph) && measured(s.supply.ph))
        .map(|s| calculations::round2(calculations::ph_trend(s.root_zone.ph, s.supply.ph)));

    AnalysisMetrics {
        vpd: calculations::round2(vpd),
        dew_point: calculations::round1(dew_point),
        ec_delta,
        ph_trend,
    }
}
