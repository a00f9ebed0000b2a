//! Pure physical metric calculators shared by the advisory rules.

/// Vapor pressure deficit in kPa (Tetens saturation curve).
///
/// Inputs are not clamped; out-of-domain values propagate
/// mathematically.
pub fn vpd(temp_c: f64, relative_humidity: f64) -> f64 {
    let es = 0.6108 * ((17.27 * temp_c) / (temp_c + 237.3)).exp();
    let ea = es * (relative_humidity / 100.0);
    es - ea
}

/// Coarse linear dew-point approximation in °C. Intentionally not the
/// full Magnus formula; the tolerance of the condensation rule absorbs
/// the approximation error.
pub fn dew_point(temp_c: f64, relative_humidity: f64) -> f64 {
    temp_c - (100.0 - relative_humidity) / 5.0
}

/// Root-zone EC relative to the supplied solution, dS/m.
pub fn ec_delta(root_ec: f64, supply_ec: f64) -> f64 {
    root_ec - supply_ec
}

/// Root-zone pH drift relative to the supplied solution.
pub fn ph_trend(root_ph: f64, supply_ph: f64) -> f64 {
    root_ph - supply_ph
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn saturated_air_has_zero_deficit() {
        assert_relative_eq!(vpd(20.0, 100.0), 0.0, epsilon = 1e-12);
        assert_relative_eq!(vpd(35.0, 100.0), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn vpd_monotonic_in_temperature() {
        let mut prev = vpd(0.0, 65.0);
        let mut t = 1.0;
        while t <= 45.0 {
            let next = vpd(t, 65.0);
            assert!(
                next > prev,
                "VPD not increasing at {t}°C: {next} <= {prev}"
            );
            prev = next;
            t += 1.0;
        }
    }

    #[test]
    fn vpd_known_value() {
        // 26.5°C / 65% is the sentinel default scenario; ~1.21 kPa.
        let value = vpd(26.5, 65.0);
        assert!((1.1..1.3).contains(&value), "vpd = {value}");
    }

    #[test]
    fn dew_point_approximation() {
        assert_relative_eq!(dew_point(26.5, 65.0), 19.5);
        assert_relative_eq!(dew_point(20.0, 100.0), 20.0);
        // Drier air pushes the dew point down linearly.
        assert_relative_eq!(dew_point(20.0, 50.0), 10.0);
    }

    #[test]
    fn deltas() {
        assert_relative_eq!(ec_delta(3.2, 2.5), 0.7, epsilon = 1e-12);
        assert_relative_eq!(ph_trend(5.6, 6.0), -0.4, epsilon = 1e-12);
    }

    #[test]
    fn rounding() {
        assert_eq!(round2(1.2117), 1.21);
        assert_eq!(round2(1.236), 1.24);
        assert_eq!(round1(19.46), 19.5);
        assert_eq!(round1(-0.34), -0.3);
    }
}
