//! # Triangle Calculations
//!
//! The solve pipeline:
//!
//! 1. [`normalize`](crate::normalize::normalize) reads the pattern's three
//!    fields and converts sides to meters
//! 2. [`solver::solve`] derives the full triangle in meters and classifies it
//! 3. [`rescale::rescale`] re-expresses it in the caller's unit
//!
//! Each call is independent; nothing is cached between calls.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::solve_triangle;
//! use calc_core::normalize::TriangleFields;
//! use calc_core::pattern::{CongruencePattern, Field};
//! use calc_core::units::LinearUnit;
//!
//! let fields = TriangleFields::new()
//!     .with(Field::SideA, "3")
//!     .with(Field::SideB, "4")
//!     .with(Field::SideC, "5");
//!
//! let tri = solve_triangle(CongruencePattern::Sss, &fields, LinearUnit::Foot)
//!     .expect("all fields filled in")
//!     .expect("3-4-5 is a valid triangle");
//!
//! assert_eq!(tri.type_label(), "Right Scalene");
//! assert!((tri.area - 6.0).abs() < 1e-9); // ft²
//! ```

pub mod classify;
pub mod rescale;
pub mod solver;
pub mod triangle;

use crate::errors::SolveResult;
use crate::normalize::{normalize, TriangleFields};
use crate::pattern::CongruencePattern;
use crate::tolerance::Tolerance;
use crate::units::LinearUnit;

// Re-export commonly used types
pub use triangle::{Altitudes, AngleType, Angles, Classification, SideType, Sides, Triangle};

/// Solve a triangle from raw field values with the default tolerances.
///
/// # Returns
///
/// * `None` - a required field is missing or not a number (input incomplete)
/// * `Some(Ok(Triangle))` - lengths in `unit`, area in `unit`², angles in degrees
/// * `Some(Err(SolveError))` - the values cannot form a triangle
pub fn solve_triangle(
    pattern: CongruencePattern,
    fields: &TriangleFields,
    unit: LinearUnit,
) -> Option<SolveResult<Triangle>> {
    solve_triangle_with(pattern, fields, unit, Tolerance::default())
}

/// [`solve_triangle`] with explicit tolerances.
pub fn solve_triangle_with(
    pattern: CongruencePattern,
    fields: &TriangleFields,
    unit: LinearUnit,
    tol: Tolerance,
) -> Option<SolveResult<Triangle>> {
    let input = normalize(pattern, fields, unit)?;
    Some(solver::solve(&input, tol).map(|base| rescale::rescale(&base, unit)))
}
