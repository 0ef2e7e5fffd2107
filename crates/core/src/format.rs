//! Scaled number formatting.
//!
//! The bucket boundaries keep displayed mantissas in [1, 1000) so results
//! stay readable across the enormous dynamic range E = mc² produces.
//! Lower bounds are inclusive: 1e3 formats as "1.000000 × 10³".

/// Format a magnitude as a human-readable scaled string
pub fn format_scaled(num: f64) -> String {
    if num == 0.0 {
        return "0".to_string();
    }
    if num.is_nan() {
        return "Invalid".to_string();
    }

    let abs = num.abs();
    if abs >= 1e12 {
        format!("{:.6} × 10¹²", num / 1e12)
    } else if abs >= 1e9 {
        format!("{:.6} × 10⁹", num / 1e9)
    } else if abs >= 1e6 {
        format!("{:.6} × 10⁶", num / 1e6)
    } else if abs >= 1e3 {
        format!("{:.6} × 10³", num / 1e3)
    } else if abs >= 1.0 {
        format!("{:.6}", num)
    } else if abs >= 1e-3 {
        format!("{:.6} × 10⁻³", num * 1e3)
    } else if abs >= 1e-6 {
        format!("{:.6} × 10⁻⁶", num * 1e6)
    } else if abs >= 1e-9 {
        format!("{:.6} × 10⁻⁹", num * 1e9)
    } else {
        format!("{:.6e}", num)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_and_invalid() {
        assert_eq!(format_scaled(0.0), "0");
        assert_eq!(format_scaled(-0.0), "0");
        assert_eq!(format_scaled(f64::NAN), "Invalid");
    }

    #[test]
    fn test_bucket_lower_bounds_inclusive() {
        assert_eq!(format_scaled(1e12), "1.000000 × 10¹²");
        assert_eq!(format_scaled(1e9), "1.000000 × 10⁹");
        assert_eq!(format_scaled(1e6), "1.000000 × 10⁶");
        assert_eq!(format_scaled(1e3), "1.000000 × 10³");
        assert_eq!(format_scaled(1.0), "1.000000");
        assert_eq!(format_scaled(1e-3), "1.000000 × 10⁻³");
        assert_eq!(format_scaled(1e-6), "1.000000 × 10⁻⁶");
        assert_eq!(format_scaled(1e-9), "1.000000 × 10⁻⁹");
    }

    #[test]
    fn test_crossing_the_kilo_boundary_changes_suffix() {
        assert_eq!(format_scaled(999.999999), "999.999999");
        assert_eq!(format_scaled(1000.0), "1.000000 × 10³");
        assert_ne!(format_scaled(999.999999), format_scaled(1000.0));
    }

    #[test]
    fn test_sign_is_preserved() {
        assert_eq!(format_scaled(-1e12), "-1.000000 × 10¹²");
        assert_eq!(format_scaled(-2.5), "-2.500000");
        assert_eq!(format_scaled(-5e-3), "-5.000000 × 10⁻³");
        // 5e-4 sits below the inclusive 1e-3 bound, so it scales against 1e-6
        assert_eq!(format_scaled(-5e-4), "-500.000000 × 10⁻⁶");
    }

    #[test]
    fn test_values_above_1e12_scale_against_1e12() {
        assert_eq!(format_scaled(999.5e9), "999.500000 × 10⁹");
        assert_eq!(format_scaled(8.98755178737e16), "89875.517874 × 10¹²");
    }

    #[test]
    fn test_tiny_values_fall_through_to_exponential() {
        assert_eq!(format_scaled(1.5e-12), "1.500000e-12");
    }
}
