use super::{Rule, RuleInput};
use crate::models::reading::measured;
use crate::models::{AdvisoryEntry, Severity};

/// Drainage-vs-supply EC delta: which of water and nutrients the crop
/// is taking up faster. Needs both EC readings; informational only.
pub struct DrainageRule;

const DELTA_TOLERANCE: f64 = 0.3;

impl Rule for DrainageRule {
    fn id(&self) -> &'static str {
        "drainage_ec_delta"
    }

    fn name(&self) -> &'static str {
        "Drainage EC Pattern"
    }

    fn premium_only(&self) -> bool {
        true
    }

    fn evaluate(&self, input: &RuleInput) -> Vec<AdvisoryEntry> {
        let Some(sample) = input.sample else {
            return Vec::new();
        };
        let drain_ec = sample.drainage.ec;
        let supply_ec = sample.supply.ec;
        if !measured(drain_ec) || !measured(supply_ec) {
            return Vec::new();
        }

        let delta = drain_ec - supply_ec;

        if delta > DELTA_TOLERANCE {
            vec![AdvisoryEntry::new(
                Severity::Info,
                "activity",
                "Drain EC is higher than the supply (concentrating). Water uptake is outpacing nutrient uptake; transpiration is heavy, so watch for overheating and excessive drying.",
            )]
        } else if delta < -DELTA_TOLERANCE {
            vec![AdvisoryEntry::new(
                Severity::Info,
                "droplet",
                "Drain EC is lower than the supply. Nutrient uptake is very active; hold the supply concentration or raise it slightly.",
            )]
        } else {
            Vec::new()
        }
    }
}
