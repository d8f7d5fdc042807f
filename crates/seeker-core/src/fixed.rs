//! 16.16 fixed-point arithmetic.
//!
//! Every quantity the controller touches (positions, momentum, speeds,
//! scales) is a `Fixed`. All operations are integer-only so that replays
//! reproduce bit-identical results on any host.

/// Signed 16.16 fixed-point value.
pub type Fixed = i32;

pub const FRACBITS: u32 = 16;
pub const FRACUNIT: Fixed = 1 << FRACBITS;

/// Largest whole-unit magnitude that survives conversion to `Fixed`.
pub const MAX_MAP_UNITS: i32 = i32::MAX >> FRACBITS;

/// Convert whole map units to fixed point.
#[inline]
pub const fn int_to_fixed(units: i32) -> Fixed {
    units << FRACBITS
}

/// Whether `units` converts to `Fixed` without wrapping.
#[inline]
pub const fn units_in_range(units: i32) -> bool {
    units >= -MAX_MAP_UNITS && units <= MAX_MAP_UNITS
}

/// Multiply two fixed-point values.
#[inline]
pub fn fixed_mul(a: Fixed, b: Fixed) -> Fixed {
    ((a as i64 * b as i64) >> FRACBITS) as Fixed
}

/// Divide two fixed-point values.
///
/// Saturates to `i32::MAX` / `i32::MIN` when the quotient would not fit,
/// which also covers division by zero.
#[inline]
pub fn fixed_div(a: Fixed, b: Fixed) -> Fixed {
    if (a.unsigned_abs() >> (FRACBITS - 2)) >= b.unsigned_abs() {
        return if (a ^ b) < 0 { i32::MIN } else { i32::MAX };
    }
    (((a as i64) << FRACBITS) / b as i64) as Fixed
}

/// Integer square root (floor).
pub fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }
    let mut bit: u128 = 1 << ((127 - n.leading_zeros()) & !1);
    let mut rem = n;
    let mut root: u128 = 0;
    while bit != 0 {
        if rem >= root + bit {
            rem -= root + bit;
            root = (root >> 1) + bit;
        } else {
            root >>= 1;
        }
        bit >>= 2;
    }
    root
}

/// Octagonal distance approximation used for cheap range checks.
#[inline]
pub fn approx_distance(dx: Fixed, dy: Fixed) -> Fixed {
    let dx = dx.saturating_abs();
    let dy = dy.saturating_abs();
    if dx < dy {
        dx.saturating_add(dy) - (dx >> 1)
    } else {
        dx.saturating_add(dy) - (dy >> 1)
    }
}

/// Exact planar distance between two points, clamped to `Fixed` range.
pub fn point_to_dist(x1: Fixed, y1: Fixed, x2: Fixed, y2: Fixed) -> Fixed {
    let dx = (x2 as i64 - x1 as i64).unsigned_abs() as u128;
    let dy = (y2 as i64 - y1 as i64).unsigned_abs() as u128;
    isqrt(dx * dx + dy * dy).min(i32::MAX as u128) as Fixed
}

/// Exact 3D distance in fixed units, widened so it never saturates.
pub fn distance_3d(dx: i64, dy: i64, dz: i64) -> i64 {
    let dx = dx.unsigned_abs() as u128;
    let dy = dy.unsigned_abs() as u128;
    let dz = dz.unsigned_abs() as u128;
    isqrt(dx * dx + dy * dy + dz * dz).min(i64::MAX as u128) as i64
}
