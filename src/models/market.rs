use super::crop::Crop;
use super::region::RegionPriceModifier;
use serde::Serialize;

/// National-average base prices in KRW per kg (Garak market reference).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarketPrice {
    pub wholesale: i64,
    pub retail: i64,
}

impl MarketPrice {
    /// Total lookup; unknown crop ids fall back to the strawberry entry.
    pub fn resolve(crop_id: &str) -> MarketPrice {
        let crop = Crop::from_str(crop_id).unwrap_or(Crop::Strawberry);
        Self::for_crop(crop)
    }

    pub fn for_crop(crop: Crop) -> MarketPrice {
        let (wholesale, retail) = match crop {
            Crop::Strawberry => (35_000, 48_000),
            Crop::Tomato => (18_000, 25_000),
            Crop::Lettuce => (8_000, 12_000),
            Crop::Cucumber => (15_000, 22_000),
            Crop::Paprika => (28_000, 38_000),
            Crop::Eggplant => (12_000, 18_000),
            Crop::Leafy => (5_000, 9_000),
            Crop::Melon => (45_000, 60_000),
        };
        MarketPrice { wholesale, retail }
    }
}

/// Displayed min/avg/max band: average ±20%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceSummary {
    pub max: i64,
    pub avg: i64,
    pub min: i64,
}

impl PriceSummary {
    pub fn from_average(avg: i64) -> PriceSummary {
        PriceSummary {
            max: (avg as f64 * 1.2).round() as i64,
            avg,
            min: (avg as f64 * 0.8).round() as i64,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketPeriod {
    Week,
    Month,
    Year,
}

impl MarketPeriod {
    /// Number of history points: daily for week/month, monthly for year.
    pub fn points(&self) -> usize {
        match self {
            MarketPeriod::Week => 7,
            MarketPeriod::Month => 30,
            MarketPeriod::Year => 12,
        }
    }

    pub fn label_unit(&self) -> &'static str {
        match self {
            MarketPeriod::Year => "months ago",
            _ => "days ago",
        }
    }
}

/// Simulated price history, oldest point first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceHistory {
    pub labels: Vec<String>,
    pub prices: Vec<i64>,
}

/// Projected income for a harvest at regional prices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueEstimate {
    pub region: RegionPriceModifier,
    /// Region-adjusted unit prices, KRW per kg.
    pub wholesale_price: i64,
    pub retail_price: i64,
    /// Projected totals for the entered yield, KRW.
    pub wholesale_revenue: i64,
    pub retail_revenue: i64,
}
