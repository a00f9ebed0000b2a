use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Crop {
    Strawberry,
    Tomato,
    Lettuce,
    Cucumber,
    Paprika,
    Eggplant,
    Leafy,
    Melon,
}

impl Crop {
    pub const ALL: [Crop; 8] = [
        Crop::Strawberry,
        Crop::Tomato,
        Crop::Lettuce,
        Crop::Cucumber,
        Crop::Paprika,
        Crop::Eggplant,
        Crop::Leafy,
        Crop::Melon,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Crop::Strawberry => "strawberry",
            Crop::Tomato => "tomato",
            Crop::Lettuce => "lettuce",
            Crop::Cucumber => "cucumber",
            Crop::Paprika => "paprika",
            Crop::Eggplant => "eggplant",
            Crop::Leafy => "leafy",
            Crop::Melon => "melon",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Crop::Strawberry => "Strawberry",
            Crop::Tomato => "Tomato",
            Crop::Lettuce => "Lettuce",
            Crop::Cucumber => "Cucumber",
            Crop::Paprika => "Paprika",
            Crop::Eggplant => "Eggplant",
            Crop::Leafy => "Leafy greens",
            Crop::Melon => "Melon",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "strawberry" => Some(Crop::Strawberry),
            "tomato" => Some(Crop::Tomato),
            "lettuce" => Some(Crop::Lettuce),
            "cucumber" => Some(Crop::Cucumber),
            "paprika" => Some(Crop::Paprika),
            "eggplant" => Some(Crop::Eggplant),
            "leafy" | "leafy greens" => Some(Crop::Leafy),
            "melon" => Some(Crop::Melon),
            _ => None,
        }
    }
}

impl std::fmt::Display for Crop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Growth targets and the guidance tip for one crop. Static table;
/// resolution never fails (unknown ids get the generic profile).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropProfile {
    pub id: &'static str,
    pub display_name: &'static str,
    /// Optimal daytime temperature, °C.
    pub day_temp: f64,
    /// Optimal nighttime temperature, °C.
    pub night_temp: f64,
    /// Target relative humidity, %.
    pub target_humidity: f64,
    /// Light requirement, lux.
    pub target_light: f64,
    pub guidance: &'static str,
}

impl CropProfile {
    /// Total resolver: any string maps to a profile.
    pub fn resolve(crop_id: &str) -> CropProfile {
        match Crop::from_str(crop_id) {
            Some(crop) => Self::for_crop(crop),
            None => Self::generic(),
        }
    }

    pub fn for_crop(crop: Crop) -> CropProfile {
        let (day_temp, night_temp, target_humidity, target_light, guidance) = match crop {
            Crop::Strawberry => (
                23.0,
                8.0,
                60.0,
                35_000.0,
                "Cold-tolerant crop. Above 25°C expect malformed fruit and poor pollen germination.",
            ),
            Crop::Tomato => (
                25.0,
                15.0,
                70.0,
                50_000.0,
                "High light demand. Prune leaves so light reaches the lower canopy.",
            ),
            Crop::Paprika => (
                24.0,
                18.0,
                75.0,
                40_000.0,
                "Temperature management follows fruit load. Raise night temperature slightly while fruit is swelling.",
            ),
            Crop::Cucumber => (
                26.0,
                18.0,
                80.0,
                45_000.0,
                "Fast grower. Balance vegetative and reproductive growth by adjusting feed concentration.",
            ),
            Crop::Lettuce => (
                20.0,
                15.0,
                65.0,
                25_000.0,
                "Cool-season crop. High temperatures trigger bolting; deploy shade screens.",
            ),
            Crop::Melon => (
                30.0,
                20.0,
                60.0,
                55_000.0,
                "Heat-loving crop. Keep humidity stable during net formation for best quality.",
            ),
            Crop::Eggplant => (
                28.0,
                18.0,
                70.0,
                40_000.0,
                "Warm-season crop. Growth drops off sharply below 15°C.",
            ),
            Crop::Leafy => (
                22.0,
                15.0,
                70.0,
                20_000.0,
                "Ventilate thoroughly to prevent tip-burn.",
            ),
        };

        CropProfile {
            id: crop.id(),
            display_name: crop.display_name(),
            day_temp,
            night_temp,
            target_humidity,
            target_light,
            guidance,
        }
    }

    /// Fallback profile for unrecognized crop ids.
    pub fn generic() -> CropProfile {
        CropProfile {
            id: "generic",
            display_name: "Crop",
            day_temp: 25.0,
            night_temp: 15.0,
            target_humidity: 70.0,
            target_light: 35_000.0,
            guidance: "Maintain a standard growing environment and avoid abrupt changes.",
        }
    }
}
