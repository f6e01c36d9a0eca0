//! # Unit Rescaler
//!
//! Re-expresses a solved triangle in another linear unit. Lengths scale by
//! the unit factor, area by its square; angles and classification are
//! carried over untouched.

use crate::units::LinearUnit;

use super::triangle::{Altitudes, Triangle};

/// Convert `triangle` (in whatever unit it carries) to `unit`.
pub fn rescale(triangle: &Triangle, unit: LinearUnit) -> Triangle {
    let from = triangle.unit;
    let length = |v: f64| unit.from_base(from.to_base(v));
    let area_base = triangle.area * from.factor().powi(2);

    Triangle {
        sides: triangle.sides.map(&length),
        angles: triangle.angles,
        perimeter: length(triangle.perimeter),
        area: unit.area_from_base(area_base),
        altitudes: Altitudes {
            ha: length(triangle.altitudes.ha),
            hb: length(triangle.altitudes.hb),
            hc: length(triangle.altitudes.hc),
        },
        classification: triangle.classification,
        unit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::solver::solve;
    use crate::normalize::CanonicalInput;
    use crate::pattern::CongruencePattern;
    use crate::tolerance::Tolerance;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    fn base_345() -> Triangle {
        let input = CanonicalInput::from_base_values(CongruencePattern::Sss, [3.0, 4.0, 5.0]);
        solve(&input, Tolerance::default()).unwrap()
    }

    #[test]
    fn test_meters_to_centimeters() {
        let t = rescale(&base_345(), LinearUnit::Centimeter);
        assert_eq!(t.unit, LinearUnit::Centimeter);
        assert!(approx_eq(t.sides.c, 500.0, 1e-9));
        assert!(approx_eq(t.perimeter, 1200.0, 1e-9));
        assert!(approx_eq(t.area, 60_000.0, 1e-6));
        assert!(approx_eq(t.altitudes.ha, 400.0, 1e-9));
    }

    #[test]
    fn test_angles_and_classification_unchanged() {
        let base = base_345();
        let t = rescale(&base, LinearUnit::Inch);
        assert_eq!(t.angles, base.angles);
        assert_eq!(t.classification, base.classification);
    }

    #[test]
    fn test_rescale_back_and_forth() {
        let base = base_345();
        let back = rescale(&rescale(&base, LinearUnit::Foot), LinearUnit::Meter);
        assert!(approx_eq(back.sides.a, base.sides.a, 1e-12));
        assert!(approx_eq(back.area, base.area, 1e-12));
    }
}
