use crate::error::{FarmSightError, Result};
use crate::models::{MarketPrice, RegionPriceModifier, RevenueEstimate};

/// Project wholesale/retail income for a harvest at regional prices.
///
/// Unit prices are adjusted by the region modifier first, then scaled
/// by yield; both steps round to whole KRW.
pub fn estimate_revenue(
    crop_id: &str,
    yield_kg: f64,
    region: RegionPriceModifier,
) -> Result<RevenueEstimate> {
    if !yield_kg.is_finite() || yield_kg <= 0.0 {
        return Err(FarmSightError::InvalidData(format!(
            "yield must be a positive number of kilograms, got {yield_kg}"
        )));
    }

    let base = MarketPrice::resolve(crop_id);
    let wholesale_price = (base.wholesale as f64 * region.modifier).round() as i64;
    let retail_price = (base.retail as f64 * region.modifier).round() as i64;

    Ok(RevenueEstimate {
        wholesale_revenue: (yield_kg * wholesale_price as f64).round() as i64,
        retail_revenue: (yield_kg * retail_price as f64).round() as i64,
        wholesale_price,
        retail_price,
        region,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Region;

    #[test]
    fn baseline_region_leaves_prices_untouched() {
        let estimate =
            estimate_revenue("tomato", 100.0, RegionPriceModifier::default_region()).unwrap();
        assert_eq!(estimate.wholesale_price, 18_000);
        assert_eq!(estimate.retail_price, 25_000);
        assert_eq!(estimate.wholesale_revenue, 1_800_000);
        assert_eq!(estimate.retail_revenue, 2_500_000);
    }

    #[test]
    fn modifier_adjusts_unit_price_before_scaling() {
        let jeolla = RegionPriceModifier::for_region(Region::Jeolla); // 0.88
        let estimate = estimate_revenue("tomato", 10.0, jeolla).unwrap();
        assert_eq!(estimate.wholesale_price, 15_840);
        assert_eq!(estimate.wholesale_revenue, 158_400);
    }

    #[test]
    fn fractional_yield_rounds_revenue() {
        let estimate =
            estimate_revenue("lettuce", 2.5, RegionPriceModifier::default_region()).unwrap();
        // 8000 * 2.5
        assert_eq!(estimate.wholesale_revenue, 20_000);
    }

    #[test]
    fn unknown_crop_uses_fallback_price() {
        let estimate =
            estimate_revenue("durian", 1.0, RegionPriceModifier::default_region()).unwrap();
        assert_eq!(estimate.wholesale_price, 35_000);
    }

    #[test]
    fn non_positive_yield_is_rejected() {
        for bad in [0.0, -3.0, f64::NAN] {
            let err = estimate_revenue("tomato", bad, RegionPriceModifier::default_region());
            assert!(matches!(err, Err(FarmSightError::InvalidData(_))));
        }
    }
}
