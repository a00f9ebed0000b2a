use super::crop::Crop;
use serde::Serialize;

/// A nutrient prescription standard: the EC/pH targets the root-zone
/// rules compare against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientStandard {
    pub name: &'static str,
    /// Target solution concentration, dS/m.
    pub target_ec: f64,
    pub target_ph: f64,
    pub description: &'static str,
}

impl NutrientStandard {
    /// Total resolver with a three-tier fallback: exact (crop, standard)
    /// pair, then the generic table by standard id, then the hardcoded
    /// Yamazaki default. Never fails.
    pub fn resolve(crop_id: &str, standard_id: &str) -> NutrientStandard {
        let standard_id = standard_id.trim().to_lowercase();

        if let Some(crop) = Crop::from_str(crop_id) {
            if let Some(standard) = Self::for_crop(crop, &standard_id) {
                return standard;
            }
        }

        Self::default_table(&standard_id).unwrap_or_else(Self::yamazaki_generic)
    }

    fn for_crop(crop: Crop, standard_id: &str) -> Option<NutrientStandard> {
        let entry = match (crop, standard_id) {
            (Crop::Strawberry, "yamazaki") => (
                "Yamazaki",
                0.8,
                6.0,
                "Nitrate-nitrogen focused prescription managed at low EC.",
            ),
            (Crop::Strawberry, "japan_enshi") => (
                "Japan Enshi",
                0.9,
                6.5,
                "The most widely used general-purpose prescription in Japan.",
            ),
            (Crop::Strawberry, "netherlands") => (
                "Netherlands (PBG)",
                1.2,
                5.5,
                "High-EC management that maximizes productivity.",
            ),
            (Crop::Strawberry, "korea_rda") => (
                "Korea RDA",
                1.0,
                5.8,
                "Standard prescription of the Rural Development Administration.",
            ),
            (Crop::Tomato, "yamazaki") => (
                "Yamazaki",
                2.2,
                6.0,
                "Tomato-specific Yamazaki prescription.",
            ),
            (Crop::Tomato, "netherlands") => (
                "Netherlands (PBG)",
                3.0,
                5.5,
                "High-concentration prescription for quality and heavy yield.",
            ),
            (Crop::Tomato, "cooper") => {
                ("Cooper", 2.5, 6.0, "Well suited to NFT cultivation.")
            }
            (Crop::Tomato, "korea_uos") => (
                "University of Seoul (UOS)",
                2.4,
                6.0,
                "Tomato prescription tuned for domestic conditions.",
            ),
            (Crop::Paprika, "netherlands") => (
                "Netherlands (PBG)",
                2.8,
                5.5,
                "The de facto standard for paprika production.",
            ),
            (Crop::Paprika, "belgium") => {
                ("Belgium", 2.6, 5.8, "Encourages balanced growth.")
            }
            (Crop::Cucumber, "yamazaki") => {
                ("Yamazaki", 2.0, 6.0, "Favors cucumber root development.")
            }
            (Crop::Cucumber, "japan_hort") => (
                "Japan Hort",
                2.2,
                5.8,
                "Favorable during fruit enlargement.",
            ),
            (Crop::Lettuce, "yamazaki") => (
                "Yamazaki",
                1.2,
                6.0,
                "Low-concentration prescription for leafy crops.",
            ),
            (Crop::Lettuce, "utrecht") => {
                ("Utrecht", 1.4, 6.0, "Suits European-style lettuce production.")
            }
            (Crop::Melon, "yamazaki") => (
                "Yamazaki",
                2.2,
                6.0,
                "Raises melon aroma and sugar content.",
            ),
            (Crop::Melon, "netherlands") => (
                "Netherlands (PBG)",
                2.5,
                5.5,
                "EC management matters most after net formation.",
            ),
            (Crop::Eggplant, "yamazaki") => (
                "Yamazaki",
                2.0,
                5.8,
                "Potassium-balanced prescription optimized for eggplant.",
            ),
            (Crop::Eggplant, "netherlands") => (
                "Netherlands (PBG)",
                2.6,
                5.5,
                "High concentration for harvest-period yield.",
            ),
            (Crop::Leafy, "yamazaki") => (
                "Yamazaki",
                1.3,
                6.0,
                "General-purpose prescription for leafy vegetables.",
            ),
            (Crop::Leafy, "korea_common") => (
                "Korea standard",
                1.5,
                5.8,
                "Matched to domestic leafy-crop conditions.",
            ),
            _ => return None,
        };

        let (name, target_ec, target_ph, description) = entry;
        Some(NutrientStandard {
            name,
            target_ec,
            target_ph,
            description,
        })
    }

    fn default_table(standard_id: &str) -> Option<NutrientStandard> {
        match standard_id {
            "yamazaki" => Some(Self::yamazaki_generic()),
            "general" => Some(NutrientStandard {
                name: "General standard",
                target_ec: 1.5,
                target_ph: 6.0,
                description: "A common hydroponic baseline.",
            }),
            _ => None,
        }
    }

    fn yamazaki_generic() -> NutrientStandard {
        NutrientStandard {
            name: "Yamazaki (standard)",
            target_ec: 1.5,
            target_ph: 6.0,
            description: "General-purpose Yamazaki prescription.",
        }
    }

    /// Standard ids selectable for a crop, for CLI listings and prompts.
    pub fn ids_for_crop(crop: Crop) -> &'static [&'static str] {
        match crop {
            Crop::Strawberry => &["yamazaki", "japan_enshi", "netherlands", "korea_rda"],
            Crop::Tomato => &["yamazaki", "netherlands", "cooper", "korea_uos"],
            Crop::Paprika => &["netherlands", "belgium"],
            Crop::Cucumber => &["yamazaki", "japan_hort"],
            Crop::Lettuce => &["yamazaki", "utrecht"],
            Crop::Melon => &["yamazaki", "netherlands"],
            Crop::Eggplant => &["yamazaki", "netherlands"],
            Crop::Leafy => &["yamazaki", "korea_common"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_pair_match() {
        let std = NutrientStandard::resolve("tomato", "netherlands");
        assert_eq!(std.name, "Netherlands (PBG)");
        assert_eq!(std.target_ec, 3.0);
        assert_eq!(std.target_ph, 5.5);
    }

    #[test]
    fn falls_back_to_default_table_on_unknown_crop() {
        let std = NutrientStandard::resolve("no-such-crop", "general");
        assert_eq!(std.name, "General standard");
        assert_eq!(std.target_ec, 1.5);
    }

    #[test]
    fn falls_back_to_yamazaki_when_pair_missing() {
        // Paprika has no Cooper prescription; Cooper is not in the
        // default table either, so the generic Yamazaki wins.
        let std = NutrientStandard::resolve("paprika", "cooper");
        assert_eq!(std.name, "Yamazaki (standard)");
        assert_eq!(std.target_ec, 1.5);
        assert_eq!(std.target_ph, 6.0);
    }

    #[test]
    fn never_fails_even_for_nonsense() {
        let std = NutrientStandard::resolve("", "");
        assert_eq!(std.name, "Yamazaki (standard)");

        let std = NutrientStandard::resolve("🌱", "💧");
        assert_eq!(std.target_ec, 1.5);
    }

    #[test]
    fn every_listed_id_resolves_exactly() {
        for crop in Crop::ALL {
            for id in NutrientStandard::ids_for_crop(crop) {
                let std = NutrientStandard::resolve(crop.id(), id);
                assert_ne!(
                    std.name, "Yamazaki (standard)",
                    "listed pair ({}, {}) fell through to the generic default",
                    crop.id(),
                    id
                );
            }
        }
    }
}
