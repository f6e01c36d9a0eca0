//! # calc_core - Triangle Solver Engine
//!
//! `calc_core` is the computational heart of Trigon. Given three of a
//! triangle's six measurements (SSS, SAS, ASA or AAS) it derives the whole
//! triangle: all sides and angles, perimeter, area, altitudes and a
//! classification, in meters, centimeters, feet or inches.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: Inputs, results and errors implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Explicit Tolerances**: Every float comparison goes through [`tolerance::Tolerance`]
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::{solve_triangle, CongruencePattern, Field, LinearUnit, TriangleFields};
//!
//! let fields = TriangleFields::new()
//!     .with(Field::AngleA, "30")
//!     .with(Field::SideC, "2")
//!     .with(Field::AngleB, "60");
//!
//! match solve_triangle(CongruencePattern::Asa, &fields, LinearUnit::Meter) {
//!     None => println!("keep typing"),
//!     Some(Ok(tri)) => println!("{} with area {:.2} m²", tri.type_label(), tri.area),
//!     Some(Err(e)) => println!("{}", e),
//! }
//! ```
//!
//! ## Modules
//!
//! - [`pattern`] - Congruence patterns and the six measurement fields
//! - [`normalize`] - Raw field parsing and conversion to base units
//! - [`calculations`] - Solver, classifier, unit rescaler and result types
//! - [`units`] - Linear units and angle helpers
//! - [`tolerance`] - Named floating-point tolerances
//! - [`format`] - Display formatting
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod format;
pub mod normalize;
pub mod pattern;
pub mod tolerance;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{solve_triangle, solve_triangle_with, Classification, Triangle};
pub use errors::{SolveError, SolveResult};
pub use normalize::{normalize, CanonicalInput, RawValue, TriangleFields};
pub use pattern::{CongruencePattern, Field};
pub use tolerance::Tolerance;
pub use units::LinearUnit;
