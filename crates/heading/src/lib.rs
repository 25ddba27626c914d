//! Angle normalization and shortest-rotation arithmetic.
//!
//! Purpose
//! - Provide the canonical-range wrap (degrees and radians) and the signed
//!   shortest-path angle difference used by pose/heading callers.
//! - Keep the API minimal (free functions, `f64 -> f64`) and the boundary
//!   convention explicit: the ±180°/±π seam canonicalizes to +180°/+π.
//!
//! Callers are expected to normalize before comparing or accumulating
//! headings, and to use [`angle::angle_difference_degrees`] for any delta
//! that may cross the seam.

pub mod angle;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::angle::{
        angle_difference_degrees, fold_quarter_degrees, normalize_degrees, normalize_radians,
    };
}
