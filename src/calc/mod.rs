//! Agronomic calculation engine
//!
//! Pure, deterministic functions over user-entered form values. Strict
//! validation for structurally required numerics, lenient dictionary-lookup
//! fallbacks for unknown crop/stage/soil labels.

pub mod irrigation;
pub mod productivity;

/// Round to 2 decimal places, the precision of every calculator output
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::round2;

    #[test]
    fn round2_half_away_from_zero() {
        assert_eq!(round2(58.333_333), 58.33);
        assert_eq!(round2(0.875), 0.88);
        assert_eq!(round2(-0.875), -0.88);
        assert_eq!(round2(100.0), 100.0);
    }
}
