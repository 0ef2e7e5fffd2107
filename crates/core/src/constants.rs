//! Physical constants

/// Speed of light in vacuum, meters per second
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// c² in joules per kilogram, derived from `SPEED_OF_LIGHT` so the two
/// values cannot drift apart
pub const C_SQUARED: f64 = SPEED_OF_LIGHT * SPEED_OF_LIGHT;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c_squared_matches_speed_of_light() {
        assert_eq!(C_SQUARED, SPEED_OF_LIGHT * SPEED_OF_LIGHT);
        // Sanity check the order of magnitude: ~8.988e16 J/kg
        assert!((C_SQUARED - 8.98755178737e16).abs() < 1e7);
    }
}
