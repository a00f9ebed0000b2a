use crate::models::{MarketPeriod, MarketPrice, PriceHistory, PriceSummary};
use rand::Rng;

/// Price fluctuation amplitude for the simulated history, ±15%.
const FLUCTUATION: f64 = 0.15;

/// Min/avg/max band for the crop's wholesale and retail base prices.
pub fn price_summary(price: MarketPrice) -> (PriceSummary, PriceSummary) {
    (
        PriceSummary::from_average(price.wholesale),
        PriceSummary::from_average(price.retail),
    )
}

/// Simulated wholesale price history. Deliberately random: each call
/// produces a fresh plausible series around the base price. This is the
/// one non-deterministic component and lives outside the advisory
/// engine.
pub fn generate_history(base_price: i64, period: MarketPeriod) -> PriceHistory {
    let mut rng = rand::thread_rng();
    let points = period.points();
    let unit = period.label_unit();

    let mut labels = Vec::with_capacity(points);
    let mut prices = Vec::with_capacity(points);

    for i in (1..=points).rev() {
        labels.push(format!("{i} {unit}"));
        let fluctuation = 1.0 + (rng.gen::<f64>() * 2.0 * FLUCTUATION - FLUCTUATION);
        prices.push((base_price as f64 * fluctuation).round() as i64);
    }

    PriceHistory { labels, prices }
}
