//! Canonical-range angle wrap and shortest-rotation difference.
//!
//! Conventions
//! - Degrees canonicalize into (-180, 180], radians into (-π, π].
//! - The seam representative is +180 (+π): exact odd multiples of 180° map
//!   to +180°, never -180°. The same rule holds in both units and inside
//!   the difference, so the boundary never flips sign between call sites.
//! - Non-finite inputs are not rejected; NaN/±∞ flow through the arithmetic
//!   and come out NaN (IEEE-754 semantics).
//!
//! The wrap is closed-form: one exact remainder plus at most one ±period
//! correction. A subtract-in-a-loop wrap would cost O(|angle|/period) and
//! drift for large inputs; this stays O(1) at any magnitude.

use std::f64::consts::TAU;

/// Wrap `angle` by `period`, canonicalizing the seam to `+period/2`.
///
/// `rem_euclid` is an exact floating-point remainder, so the wrap is exact
/// for every finite input; the single correction step folds [0, period)
/// into (-period/2, period/2]. An exact seam value stays at `+period/2`.
#[inline]
fn wrap(angle: f64, period: f64) -> f64 {
    let wrapped = angle.rem_euclid(period);
    if wrapped > 0.5 * period {
        wrapped - period
    } else {
        wrapped
    }
}

/// Canonicalize a degree value into (-180, 180].
///
/// Returns the unique `angle + 360k` (k integer) in range:
/// `normalize_degrees(540.0) == 180.0`, `normalize_degrees(-181.0) == 179.0`,
/// `normalize_degrees(-180.0) == 180.0`.
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    wrap(angle, 360.0)
}

/// Canonicalize a radian value into (-π, π].
///
/// Same wrap as [`normalize_degrees`] rescaled by π/180, so the two agree up
/// to floating-point rounding: `normalize_radians(x)` ≈
/// `normalize_degrees(x.to_degrees()).to_radians()`.
#[inline]
pub fn normalize_radians(angle: f64) -> f64 {
    wrap(angle, TAU)
}

/// Signed shortest rotation from orientation `b` to orientation `a`,
/// in degrees, canonicalized into (-180, 180].
///
/// A raw `a - b` reports 358° where the true shortest delta is -2°; wrapping
/// the raw difference is what makes headings comparable across the seam.
///
/// Antisymmetric (`diff(a, b) == -diff(b, a)`) except at exactly 180° of
/// separation, where both argument orders return +180: 180° and -180° denote
/// the same physical rotation, so the degeneration is accepted rather than
/// special-cased.
#[inline]
pub fn angle_difference_degrees(a: f64, b: f64) -> f64 {
    normalize_degrees(a - b)
}

/// Fold a degree value into [0, 90) under quarter-turn symmetry.
///
/// For orientations of markers that are indistinguishable modulo 90°:
/// `fold_quarter_degrees(-86.41)` ≈ 3.59, `fold_quarter_degrees(90.0) == 0.0`.
#[inline]
pub fn fold_quarter_degrees(angle: f64) -> f64 {
    angle.rem_euclid(90.0)
}
