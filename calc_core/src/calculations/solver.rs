//! # Triangle Solver
//!
//! Derives the complete triangle from a [`CanonicalInput`] in base units
//! (meters, degrees).
//!
//! ## Method per pattern
//!
//! | Pattern | Given     | Derived                                              |
//! |---------|-----------|------------------------------------------------------|
//! | SSS     | a, b, c   | A, B by Law of Cosines; C = 180 - A - B              |
//! | SAS     | a, B, c   | b by Law of Cosines; A by Law of Cosines; C = 180 - A - B |
//! | ASA     | A, c, B   | C = 180 - A - B; a, b by Law of Sines over sin C     |
//! | AAS     | A, B, a   | C = 180 - A - B; b, c by Law of Sines over sin A     |
//!
//! SAS derives A with the Law of Cosines rather than `asin`, which cannot
//! tell an obtuse angle from its acute supplement.
//!
//! After the pattern step every triangle goes through Heron's formula. An
//! area that is NaN or not above the absolute tolerance fails the solve, as
//! does any derived angle that rounded to zero. This catches near-degenerate
//! results the individual checks let through.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::solver::solve;
//! use calc_core::normalize::CanonicalInput;
//! use calc_core::pattern::CongruencePattern;
//! use calc_core::tolerance::Tolerance;
//!
//! let input = CanonicalInput::from_base_values(CongruencePattern::Sss, [3.0, 4.0, 5.0]);
//! let tri = solve(&input, Tolerance::default()).unwrap();
//! assert!((tri.angles.c - 90.0).abs() < 1e-9);
//! assert!((tri.area - 6.0).abs() < 1e-9);
//! ```

use crate::errors::{SolveError, SolveResult};
use crate::normalize::CanonicalInput;
use crate::pattern::{CongruencePattern, Field};
use crate::tolerance::Tolerance;
use crate::units::{acos_degrees, cos_degrees, sin_degrees, LinearUnit};

use super::classify::classify;
use super::triangle::{Altitudes, Angles, Sides, Triangle};

/// Solve the triangle described by `input`.
///
/// The returned triangle is in meters. Checks run in a fixed order and the
/// first failure is returned.
pub fn solve(input: &CanonicalInput, tol: Tolerance) -> SolveResult<Triangle> {
    let (sides, angles) = match input.pattern() {
        CongruencePattern::Sss => solve_sss(input, tol)?,
        CongruencePattern::Sas => solve_sas(input)?,
        CongruencePattern::Asa => solve_asa(input, tol)?,
        CongruencePattern::Aas => solve_aas(input, tol)?,
    };

    let triangle = derive(sides, angles, tol)?;
    log::debug!(
        "solved {}: sides {:?} angles {:?} area {}",
        input.pattern(),
        triangle.sides,
        triangle.angles,
        triangle.area
    );
    Ok(triangle)
}

/// Perimeter, Heron area, altitudes and classification for solved
/// sides/angles in meters.
fn derive(sides: Sides, angles: Angles, tol: Tolerance) -> SolveResult<Triangle> {
    let perimeter = sides.sum();
    let area = heron_area(sides);

    if !area.is_finite() || area <= tol.absolute {
        return Err(SolveError::InvalidTriangleGeometry { area });
    }

    // A needle-thin triangle can keep a real area while acos rounds an
    // angle to exactly 0
    if angles
        .to_array()
        .iter()
        .any(|&x| !x.is_finite() || x <= tol.absolute)
    {
        return Err(SolveError::InvalidTriangleGeometry { area });
    }

    Ok(Triangle {
        sides,
        angles,
        perimeter,
        area,
        altitudes: Altitudes::from_area(area, sides),
        classification: classify(&sides, &angles, tol),
        unit: LinearUnit::Meter,
    })
}

/// Heron's formula. NaN when rounding leaves a negative product.
pub fn heron_area(sides: Sides) -> f64 {
    let s = sides.sum() / 2.0;
    (s * (s - sides.a) * (s - sides.b) * (s - sides.c)).sqrt()
}

// ============================================================================
// Pattern steps
// ============================================================================

fn solve_sss(input: &CanonicalInput, tol: Tolerance) -> SolveResult<(Sides, Angles)> {
    let a = side(input, Field::SideA)?;
    let b = side(input, Field::SideB)?;
    let c = side(input, Field::SideC)?;

    if a + b <= c + tol.absolute || a + c <= b + tol.absolute || b + c <= a + tol.absolute {
        return Err(SolveError::TriangleInequalityViolated { a, b, c });
    }

    let angle_a = law_of_cosines_angle(a, b, c);
    let angle_b = law_of_cosines_angle(b, a, c);
    let angle_c = 180.0 - angle_a - angle_b;

    Ok((Sides::new(a, b, c), Angles::new(angle_a, angle_b, angle_c)))
}

fn solve_sas(input: &CanonicalInput) -> SolveResult<(Sides, Angles)> {
    let a = side(input, Field::SideA)?;
    let c = side(input, Field::SideC)?;
    let angle_b = angle(input, Field::AngleB)?;

    let b = (a.powi(2) + c.powi(2) - 2.0 * a * c * cos_degrees(angle_b)).sqrt();
    let angle_a = law_of_cosines_angle(a, b, c);
    let angle_c = 180.0 - angle_a - angle_b;

    Ok((Sides::new(a, b, c), Angles::new(angle_a, angle_b, angle_c)))
}

fn solve_asa(input: &CanonicalInput, tol: Tolerance) -> SolveResult<(Sides, Angles)> {
    let c = side(input, Field::SideC)?;
    let (angle_a, angle_b, angle_c) = two_angles(input, tol)?;

    let sin_c = sin_degrees(angle_c);
    if tol.is_zero(sin_c) {
        return Err(SolveError::DegenerateTriangle { angle: Field::AngleC });
    }

    let a = c * sin_degrees(angle_a) / sin_c;
    let b = c * sin_degrees(angle_b) / sin_c;

    Ok((Sides::new(a, b, c), Angles::new(angle_a, angle_b, angle_c)))
}

fn solve_aas(input: &CanonicalInput, tol: Tolerance) -> SolveResult<(Sides, Angles)> {
    let a = side(input, Field::SideA)?;
    let (angle_a, angle_b, angle_c) = two_angles(input, tol)?;

    let sin_a = sin_degrees(angle_a);
    if tol.is_zero(sin_a) {
        return Err(SolveError::DegenerateTriangle { angle: Field::AngleA });
    }

    let b = a * sin_degrees(angle_b) / sin_a;
    let c = a * sin_degrees(angle_c) / sin_a;

    Ok((Sides::new(a, b, c), Angles::new(angle_a, angle_b, angle_c)))
}

// ============================================================================
// Helpers
// ============================================================================

/// Angle opposite `opposite`, in degrees, from the two adjacent sides.
fn law_of_cosines_angle(opposite: f64, adj1: f64, adj2: f64) -> f64 {
    acos_degrees((adj1.powi(2) + adj2.powi(2) - opposite.powi(2)) / (2.0 * adj1 * adj2))
}

/// Validated angles A and B plus the derived C.
fn two_angles(input: &CanonicalInput, tol: Tolerance) -> SolveResult<(f64, f64, f64)> {
    let angle_a = angle(input, Field::AngleA)?;
    let angle_b = angle(input, Field::AngleB)?;

    let sum = angle_a + angle_b;
    if sum >= 180.0 - tol.absolute {
        return Err(SolveError::AngleSumExceeded { sum });
    }

    Ok((angle_a, angle_b, 180.0 - sum))
}

/// A required side; must be strictly positive.
fn side(input: &CanonicalInput, field: Field) -> SolveResult<f64> {
    let value = required(input, field);
    if value.is_nan() || value <= 0.0 {
        return Err(SolveError::non_positive_side(field, value));
    }
    Ok(value)
}

/// A required angle; must lie strictly inside (0°, 180°).
fn angle(input: &CanonicalInput, field: Field) -> SolveResult<f64> {
    let value = required(input, field);
    if value.is_nan() || value <= 0.0 || value >= 180.0 {
        return Err(SolveError::invalid_angle(field, value));
    }
    Ok(value)
}

/// Every pattern step only asks for its own fields, which a
/// `CanonicalInput` always carries. NaN makes the range checks fail.
fn required(input: &CanonicalInput, field: Field) -> f64 {
    input.value(field).unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::triangle::{AngleType, SideType};

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    fn run(pattern: CongruencePattern, values: [f64; 3]) -> SolveResult<Triangle> {
        solve(
            &CanonicalInput::from_base_values(pattern, values),
            Tolerance::default(),
        )
    }

    #[test]
    fn test_sss_right_triangle() {
        let t = run(CongruencePattern::Sss, [3.0, 4.0, 5.0]).unwrap();
        assert!(approx_eq(t.angles.c, 90.0, 1e-9));
        assert!(approx_eq(t.angles.a, 36.869897645844, 1e-9));
        assert!(approx_eq(t.area, 6.0, 1e-9));
        assert!(approx_eq(t.perimeter, 12.0, 1e-12));
        assert!(approx_eq(t.altitudes.hc, 2.4, 1e-9));
        assert_eq!(t.classification.angle_type, AngleType::Right);
        assert_eq!(t.classification.side_type, SideType::Scalene);
    }

    #[test]
    fn test_sss_rejections() {
        assert_eq!(
            run(CongruencePattern::Sss, [1.0, 1.0, 5.0]).unwrap_err().error_code(),
            "TRIANGLE_INEQUALITY_VIOLATED"
        );
        // Exactly degenerate: a + b == c
        assert_eq!(
            run(CongruencePattern::Sss, [1.0, 2.0, 3.0]).unwrap_err().error_code(),
            "TRIANGLE_INEQUALITY_VIOLATED"
        );
        assert_eq!(
            run(CongruencePattern::Sss, [0.0, 4.0, 5.0]).unwrap_err(),
            SolveError::non_positive_side(Field::SideA, 0.0)
        );
    }

    #[test]
    fn test_sas_obtuse_angle_not_mirrored() {
        // a = 10, B = 20°, c = 3: angle A is obtuse, which asin would miss
        let t = run(CongruencePattern::Sas, [10.0, 20.0, 3.0]).unwrap();
        assert!(t.angles.a > 90.0);
        assert_eq!(t.classification.angle_type, AngleType::Obtuse);
        assert!(approx_eq(t.angles.sum(), 180.0, 1e-9));
    }

    #[test]
    fn test_sas_right_triangle() {
        let t = run(CongruencePattern::Sas, [3.0, 90.0, 4.0]).unwrap();
        assert!(approx_eq(t.sides.b, 5.0, 1e-9));
        assert!(approx_eq(t.area, 6.0, 1e-9));
    }

    #[test]
    fn test_sas_rejections() {
        assert_eq!(
            run(CongruencePattern::Sas, [-1.0, 60.0, 5.0]).unwrap_err(),
            SolveError::non_positive_side(Field::SideA, -1.0)
        );
        assert_eq!(
            run(CongruencePattern::Sas, [1.0, 180.0, 5.0]).unwrap_err(),
            SolveError::invalid_angle(Field::AngleB, 180.0)
        );
        assert_eq!(
            run(CongruencePattern::Sas, [1.0, 0.0, 5.0]).unwrap_err(),
            SolveError::invalid_angle(Field::AngleB, 0.0)
        );
    }

    #[test]
    fn test_asa() {
        // A = 30, c = 2, B = 60 -> C = 90, a = 1, b = sqrt(3)
        let t = run(CongruencePattern::Asa, [30.0, 2.0, 60.0]).unwrap();
        assert!(approx_eq(t.angles.c, 90.0, 1e-9));
        assert!(approx_eq(t.sides.a, 1.0, 1e-9));
        assert!(approx_eq(t.sides.b, 3.0_f64.sqrt(), 1e-9));
    }

    #[test]
    fn test_asa_rejections() {
        assert_eq!(
            run(CongruencePattern::Asa, [100.0, 2.0, 80.0]).unwrap_err(),
            SolveError::AngleSumExceeded { sum: 180.0 }
        );
        assert_eq!(
            run(CongruencePattern::Asa, [30.0, 0.0, 60.0]).unwrap_err().error_code(),
            "NON_POSITIVE_SIDE"
        );
        assert_eq!(
            run(CongruencePattern::Asa, [200.0, 2.0, 10.0]).unwrap_err(),
            SolveError::invalid_angle(Field::AngleA, 200.0)
        );
    }

    #[test]
    fn test_asa_degenerate_sine() {
        // C is ~1e-11 degrees, sin C ~ 1.7e-13
        let a = 90.0;
        let b = 90.0 - 1e-11;
        let err = run(CongruencePattern::Asa, [a, 1.0, b]).unwrap_err();
        assert!(matches!(
            err,
            SolveError::AngleSumExceeded { .. } | SolveError::DegenerateTriangle { .. }
        ));

        let tight = Tolerance::new(1e-12, 1e-9, 1e-9);
        let input = CanonicalInput::from_base_values(CongruencePattern::Asa, [a, 1.0, b]);
        assert_eq!(
            solve(&input, tight).unwrap_err(),
            SolveError::DegenerateTriangle { angle: Field::AngleC }
        );
    }

    #[test]
    fn test_aas() {
        // A = 30, B = 60, a = 1 -> b = sqrt(3), c = 2
        let t = run(CongruencePattern::Aas, [30.0, 60.0, 1.0]).unwrap();
        assert!(approx_eq(t.sides.b, 3.0_f64.sqrt(), 1e-9));
        assert!(approx_eq(t.sides.c, 2.0, 1e-9));
        assert_eq!(t.classification.angle_type, AngleType::Right);
    }

    #[test]
    fn test_aas_degenerate_sine() {
        let tol = Tolerance::default();
        let input = CanonicalInput::from_base_values(CongruencePattern::Aas, [1e-12, 60.0, 1.0]);
        assert_eq!(
            solve(&input, tol).unwrap_err(),
            SolveError::DegenerateTriangle { angle: Field::AngleA }
        );
    }

    #[test]
    fn test_tiny_area_is_invalid_geometry() {
        // Valid shape, but area 6e-12 m² is below the absolute tolerance
        let err = run(CongruencePattern::Sss, [3e-6, 4e-6, 5e-6]).unwrap_err();
        assert!(matches!(err, SolveError::InvalidTriangleGeometry { .. }));
    }

    #[test]
    fn test_needle_triangle_with_zero_angle_rejected() {
        // Area is ~0.005 m², but acos rounds angle A to exactly 0
        let err = run(CongruencePattern::Sss, [1e-5, 1000.0, 1000.0]).unwrap_err();
        assert!(matches!(err, SolveError::InvalidTriangleGeometry { area } if area > 0.0));
    }

    #[test]
    fn test_thin_triangle_still_solves() {
        let t = run(CongruencePattern::Sss, [0.01, 1000.0, 1000.0]).unwrap();
        assert!(t.angles.a > 0.0);
        assert!(approx_eq(t.angles.b, t.angles.c, 1e-6));
        assert_eq!(t.classification.side_type, SideType::Isosceles);
    }

    #[test]
    fn test_heron_area() {
        assert!(approx_eq(heron_area(Sides::new(3.0, 4.0, 5.0)), 6.0, 1e-12));
        assert!(approx_eq(
            heron_area(Sides::new(2.0, 2.0, 2.0)),
            3.0_f64.sqrt(),
            1e-12
        ));
    }
}
