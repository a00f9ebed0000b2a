use super::{Rule, RuleInput};
use crate::logic::calculations;
use crate::models::reading::measured;
use crate::models::{AdvisoryEntry, Severity};

/// Combined water-stress analysis: atmosphere (VPD) crossed with
/// root-zone concentration. The dangerous corner is dry air over a
/// salty root zone; the opposite corner risks etiolation.
pub struct WaterStressRule;

const DRY_VPD_KPA: f64 = 1.5;
const HUMID_VPD_KPA: f64 = 0.5;
const HIGH_ROOT_EC: f64 = 2.5;
const LOW_ROOT_EC: f64 = 1.0;

impl Rule for WaterStressRule {
    fn id(&self) -> &'static str {
        "water_stress"
    }

    fn name(&self) -> &'static str {
        "Combined Water Stress"
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

        let reading = input.reading;
        let vpd = calculations::vpd(reading.temperature_c, reading.relative_humidity);

        if vpd > DRY_VPD_KPA && root_ec > HIGH_ROOT_EC {
            return vec![AdvisoryEntry::new(
                Severity::Danger,
                "droplet",
                format!(
                    "[Water stress risk] Dry air (VPD {vpd:.1} kPa) combined with a concentrated root zone ({root_ec} dS/m) makes water uptake very difficult. Tip-burn and wilting risk is high: humidify or lower the supply EC immediately."
                ),
            )];
        }

        if vpd < HUMID_VPD_KPA && root_ec < LOW_ROOT_EC {
            return vec![AdvisoryEntry::new(
                Severity::Warning,
                "cloud-drizzle",
                "[Etiolation risk] Humid air over a dilute root zone suppresses transpiration and invites leggy growth. Ventilate toward 60% humidity and raise the supply EC slightly.",
            )];
        }

        Vec::new()
    }
}
