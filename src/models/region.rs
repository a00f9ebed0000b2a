use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Failure modes of the location collaborator (GPS, registered farm
/// address, manual entry). Any of these degrades to the default region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GeolocationError {
    PermissionDenied,
    Unavailable,
    Timeout,
}

impl std::fmt::Display for GeolocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GeolocationError::PermissionDenied => "location permission denied",
            GeolocationError::Unavailable => "location unavailable",
            GeolocationError::Timeout => "location request timed out",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Seoul,
    Gangwon,
    Chungcheong,
    Jeolla,
    Gyeongsang,
    Jeju,
}

/// Regional wholesale/retail price adjustment relative to the Garak
/// market baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionPriceModifier {
    pub region: Region,
    pub name: &'static str,
    pub modifier: f64,
    pub description: &'static str,
}

/// Bounding box per region, checked in this fixed order. Boxes may
/// overlap (Seoul/Gangwon, Gangwon/Gyeongsang); the first match wins.
const REGION_BOXES: [(Region, f64, f64, f64, f64); 6] = [
    (Region::Seoul, 37.2, 37.7, 126.7, 127.3),
    (Region::Gangwon, 37.3, 38.6, 127.5, 129.0),
    (Region::Chungcheong, 36.0, 37.0, 126.3, 128.0),
    (Region::Jeolla, 34.5, 36.0, 126.0, 127.5),
    (Region::Gyeongsang, 34.6, 36.8, 127.5, 129.5),
    (Region::Jeju, 33.0, 34.0, 126.0, 127.0),
];

impl RegionPriceModifier {
    pub fn for_region(region: Region) -> RegionPriceModifier {
        let (name, modifier, description) = match region {
            Region::Seoul => ("Seoul/Gyeonggi", 1.0, "Garak wholesale market baseline"),
            Region::Gangwon => ("Gangwon", 0.92, "Adjusted for logistics cost"),
            Region::Chungcheong => ("Chungcheong", 0.95, "Central region average"),
            Region::Jeolla => ("Jeolla", 0.88, "Farm-gate direct trading"),
            Region::Gyeongsang => ("Gyeongsang", 0.90, "Busan/Daegu market baseline"),
            Region::Jeju => ("Jeju", 1.05, "Island freight surcharge"),
        };
        RegionPriceModifier {
            region,
            name,
            modifier,
            description,
        }
    }

    /// Default region applied when no box matches or location is unknown.
    pub fn default_region() -> RegionPriceModifier {
        Self::for_region(Region::Seoul)
    }

    /// Total resolver: every coordinate pair, including out-of-range
    /// values, maps to some region.
    pub fn from_coordinates(latitude: f64, longitude: f64) -> RegionPriceModifier {
        for (region, lat_min, lat_max, lng_min, lng_max) in REGION_BOXES {
            if latitude >= lat_min
                && latitude <= lat_max
                && longitude >= lng_min
                && longitude <= lng_max
            {
                return Self::for_region(region);
            }
        }
        Self::default_region()
    }

    /// Resolve from the location collaborator's outcome, degrading to
    /// the default region on failure.
    pub fn from_lookup(
        lookup: std::result::Result<Coordinates, GeolocationError>,
    ) -> RegionPriceModifier {
        match lookup {
            Ok(coords) => Self::from_coordinates(coords.latitude, coords.longitude),
            Err(err) => {
                tracing::debug!("geolocation failed ({err}), using default region");
                Self::default_region()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_each_region() {
        assert_eq!(
            RegionPriceModifier::from_coordinates(37.5, 127.0).region,
            Region::Seoul
        );
        assert_eq!(
            RegionPriceModifier::from_coordinates(38.0, 128.2).region,
            Region::Gangwon
        );
        assert_eq!(
            RegionPriceModifier::from_coordinates(36.5, 127.0).region,
            Region::Chungcheong
        );
        assert_eq!(
            RegionPriceModifier::from_coordinates(35.0, 126.8).region,
            Region::Jeolla
        );
        assert_eq!(
            RegionPriceModifier::from_coordinates(35.5, 128.5).region,
            Region::Gyeongsang
        );
        assert_eq!(
            RegionPriceModifier::from_coordinates(33.5, 126.5).region,
            Region::Jeju
        );
    }

    #[test]
    fn overlap_resolved_by_priority_order() {
        // 35.9, 127.5 sits inside both the Jeolla and Gyeongsang boxes;
        // Jeolla is checked first.
        let region = RegionPriceModifier::from_coordinates(35.9, 127.5);
        assert_eq!(region.region, Region::Jeolla);
    }

    #[test]
    fn out_of_range_coordinates_default_to_seoul() {
        assert_eq!(
            RegionPriceModifier::from_coordinates(0.0, 0.0).region,
            Region::Seoul
        );
        assert_eq!(
            RegionPriceModifier::from_coordinates(-90.0, 500.0).region,
            Region::Seoul
        );
        assert_eq!(
            RegionPriceModifier::from_coordinates(f64::NAN, f64::NAN).region,
            Region::Seoul
        );
    }

    #[test]
    fn lookup_failure_degrades_to_default() {
        let region = RegionPriceModifier::from_lookup(Err(GeolocationError::PermissionDenied));
        assert_eq!(region.region, Region::Seoul);
        assert_eq!(region.modifier, 1.0);

        let region = RegionPriceModifier::from_lookup(Ok(Coordinates {
            latitude: 33.4,
            longitude: 126.6,
        }));
        assert_eq!(region.region, Region::Jeju);
        assert_eq!(region.modifier, 1.05);
    }
}
