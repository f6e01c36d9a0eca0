//! # Classifier
//!
//! Labels a solved triangle by angle type (acute/right/obtuse) and side
//! type (equilateral/isosceles/scalene).
//!
//! Classification runs once, on base-unit sides, and the result is carried
//! through unit rescaling unchanged. Re-deriving it from display-unit sides
//! could flip a near-isosceles triangle depending on the chosen unit.

use crate::tolerance::Tolerance;

use super::triangle::{AngleType, Angles, Classification, SideType, Sides};

/// Classify a triangle from its sides (base units) and angles (degrees).
///
/// Returns [`Classification::INVALID`] if the angles do not sum to 180° or
/// any angle is not positive. A solved triangle never takes that path.
pub fn classify(sides: &Sides, angles: &Angles, tol: Tolerance) -> Classification {
    let [a_deg, b_deg, c_deg] = angles.to_array();

    if (angles.sum() - 180.0).abs() > tol.absolute
        || a_deg <= tol.absolute
        || b_deg <= tol.absolute
        || c_deg <= tol.absolute
    {
        log::warn!("cannot classify triangle with angles {:?}", angles);
        return Classification::INVALID;
    }

    Classification {
        angle_type: angle_type(angles, tol),
        side_type: side_type(sides, tol),
    }
}

/// Right wins over obtuse so float noise near 90° cannot flip the label.
fn angle_type(angles: &Angles, tol: Tolerance) -> AngleType {
    let all = angles.to_array();
    if all.iter().any(|&x| tol.is_right(x)) {
        AngleType::Right
    } else if all.iter().any(|&x| x > 90.0) {
        AngleType::Obtuse
    } else {
        AngleType::Acute
    }
}

fn side_type(sides: &Sides, tol: Tolerance) -> SideType {
    let Sides { a, b, c } = *sides;
    let matches = [
        tol.sides_equal(a, b),
        tol.sides_equal(b, c),
        tol.sides_equal(a, c),
    ]
    .iter()
    .filter(|&&eq| eq)
    .count();

    match matches {
        3 => SideType::Equilateral,
        0 => SideType::Scalene,
        _ => SideType::Isosceles,
    }
}
