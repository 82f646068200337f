// Copyright (c) 2026, Chad Hogan
// All rights reserved.
//
// This source code is licensed under the BSD-3-Clause license found in the
// LICENSE file in the root directory of this source tree.

//! The constant π and the ordering helpers used throughout the solver.
//!
//! Every helper takes its arguments by value, so an argument expression is
//! evaluated exactly once no matter which branch is taken.

/// π to full double precision. Identical to [`std::f64::consts::PI`].
pub const PI: f64 = std::f64::consts::PI;

/// Return the greater of two values.
///
/// Returns `x` if `x > y`, otherwise `y`. With unordered inputs (NaN) the
/// comparison is false and `y` is returned.
#[inline]
#[must_use]
pub fn max<T: PartialOrd>(x: T, y: T) -> T {
    if x > y {
        x
    } else {
        y
    }
}

/// Return the lesser of two values.
///
/// Returns `x` if `x < y`, otherwise `y`.
#[inline]
#[must_use]
pub fn min<T: PartialOrd>(x: T, y: T) -> T {
    if x < y {
        x
    } else {
        y
    }
}

/// Return the greatest of three values.
#[inline]
#[must_use]
pub fn max3<T: PartialOrd>(x: T, y: T, z: T) -> T {
    let yz = max(y, z);
    if x > yz {
        x
    } else {
        yz
    }
}

/// Return the least of three values.
#[inline]
#[must_use]
pub fn min3<T: PartialOrd>(x: T, y: T, z: T) -> T {
    let yz = min(y, z);
    if x < yz {
        x
    } else {
        yz
    }
}
