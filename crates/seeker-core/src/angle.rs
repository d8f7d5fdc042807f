//! Binary angle measurement and integer trigonometry.
//!
//! Angles are 32-bit BAM values: a full turn is 2^32 and arithmetic wraps
//! naturally. Sine, cosine and atan2 use CORDIC iterations over integers,
//! so results are identical on every platform.

use crate::fixed::Fixed;

/// 32-bit binary angle, counterclockwise from +X.
pub type Angle = u32;

pub const ANGLE_45: Angle = 0x2000_0000;
pub const ANGLE_90: Angle = 0x4000_0000;
pub const ANGLE_180: Angle = 0x8000_0000;
pub const ANGLE_270: Angle = 0xC000_0000;
pub const ANG1: Angle = 0x00B6_0B61;
pub const ANG10: Angle = 0x071C_71C7;

const CORDIC_ITERATIONS: usize = 30;

/// atan(2^-i) expressed in BAM units.
const CORDIC_ATAN: [i64; CORDIC_ITERATIONS] = [
    536_870_912, 316_933_406, 167_458_907, 85_004_756, 42_667_331, 21_354_465, 10_679_838,
    5_340_245, 2_670_163, 1_335_087, 667_544, 333_772, 166_886, 83_443, 41_722, 20_861, 10_430,
    5_215, 2_608, 1_304, 652, 326, 163, 81, 41, 20, 10, 5, 3, 1,
];

/// CORDIC gain reciprocal in Q2.30.
const CORDIC_GAIN_Q30: i64 = 652_032_874;

/// Returns (cos, sin) in Q2.30.
fn cordic_rotate(angle: Angle) -> (i64, i64) {
    let mut z = angle as i32 as i64;
    let mut flip = false;
    if z > ANGLE_90 as i64 {
        z -= ANGLE_180 as i64;
        flip = true;
    } else if z < -(ANGLE_90 as i64) {
        z += ANGLE_180 as i64;
        flip = true;
    }

    let mut x = CORDIC_GAIN_Q30;
    let mut y = 0i64;
    for (i, step) in CORDIC_ATAN.iter().enumerate() {
        let (dx, dy) = (y >> i, x >> i);
        if z >= 0 {
            x -= dx;
            y += dy;
            z -= step;
        } else {
            x += dx;
            y -= dy;
            z += step;
        }
    }

    if flip {
        (-x, -y)
    } else {
        (x, y)
    }
}

#[inline]
fn q30_to_fixed(v: i64) -> Fixed {
    ((v + (1 << 13)) >> 14) as Fixed
}

/// Sine of a binary angle, as 16.16 fixed point.
pub fn fine_sine(angle: Angle) -> Fixed {
    q30_to_fixed(cordic_rotate(angle).1)
}

/// Cosine of a binary angle, as 16.16 fixed point.
pub fn fine_cosine(angle: Angle) -> Fixed {
    q30_to_fixed(cordic_rotate(angle).0)
}

/// Angle of the vector (dx, dy).
pub fn vector_angle(dx: i64, dy: i64) -> Angle {
    match (dx.signum(), dy.signum()) {
        (0, 0) | (1, 0) => return 0,
        (-1, 0) => return ANGLE_180,
        (0, 1) => return ANGLE_90,
        (0, -1) => return ANGLE_270,
        _ => {}
    }

    let (mut x, mut y, base) = if dx < 0 {
        (-dx, -dy, ANGLE_180)
    } else {
        (dx, dy, 0)
    };

    // Normalize magnitude so the shifts keep precision for short vectors.
    let mag = x.unsigned_abs().max(y.unsigned_abs());
    let bits = 64 - mag.leading_zeros() as i32;
    let shift = 40 - bits;
    if shift > 0 {
        x <<= shift;
        y <<= shift;
    } else if shift < 0 {
        x >>= -shift;
        y >>= -shift;
    }

    let mut z = 0i64;
    for (i, step) in CORDIC_ATAN.iter().enumerate() {
        let (dx, dy) = (y >> i, x >> i);
        if y > 0 {
            x += dx;
            y -= dy;
            z += step;
        } else {
            x -= dx;
            y += dy;
            z -= step;
        }
    }

    base.wrapping_add(z as i32 as u32)
}

/// Angle from (x1, y1) looking toward (x2, y2).
#[inline]
pub fn point_to_angle(x1: Fixed, y1: Fixed, x2: Fixed, y2: Fixed) -> Angle {
    vector_angle(x2 as i64 - x1 as i64, y2 as i64 - y1 as i64)
}

/// Unsigned shortest difference between two angles (at most 180 degrees).
#[inline]
pub fn angle_delta(a: Angle, b: Angle) -> Angle {
    let d = a.wrapping_sub(b);
    if d > ANGLE_180 {
        d.wrapping_neg()
    } else {
        d
    }
}

/// Signed shortest difference `to - from`, in [-180, 180) degrees.
#[inline]
pub fn signed_delta(to: Angle, from: Angle) -> i32 {
    to.wrapping_sub(from) as i32
}

/// Convert a binary angle to fixed-point degrees in [0, 360).
#[inline]
pub fn angle_to_degrees_fixed(angle: Angle) -> Fixed {
    ((angle as u64 * (360u64 << 16)) >> 32) as Fixed
}

/// Whole degrees to binary angle.
#[inline]
pub fn degrees(deg: u32) -> Angle {
    ((deg as u64 % 360) * (1u64 << 32) / 360) as Angle
}
