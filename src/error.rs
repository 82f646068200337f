// Copyright (c) 2026, Chad Hogan
// All rights reserved.
//
// This source code is licensed under the BSD-3-Clause license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;

/// Errors that can occur while querying the build configuration or
/// validating solver settings.
#[derive(Debug, Clone, PartialEq)]
pub enum FteikError {
    /// Sweep count is zero.
    InvalidSweepCount(usize),
    /// Source radius (in grid points) is negative or not finite.
    InvalidSourceRadius(f64),
    /// Convergence tolerance is negative or not finite.
    InvalidConvergenceTolerance(f64),
    /// Feature name is not one of the known build features.
    UnknownFeature(String),
    /// Backend name could not be parsed.
    UnknownBackend(String),
}

impl fmt::Display for FteikError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FteikError::InvalidSweepCount(n) => {
                write!(f, "invalid sweep count: {} (must be >= 1)", n)
            }
            FteikError::InvalidSourceRadius(eps) => {
                write!(
                    f,
                    "invalid source radius: {} (must be non-negative and finite)",
                    eps
                )
            }
            FteikError::InvalidConvergenceTolerance(tol) => {
                write!(
                    f,
                    "invalid convergence tolerance: {} (must be non-negative and finite)",
                    tol
                )
            }
            FteikError::UnknownFeature(name) => {
                write!(f, "unknown feature '{}' (expected 'intel' or 'h5')", name)
            }
            FteikError::UnknownBackend(name) => write!(f, "unknown backend: {}", name),
        }
    }
}

impl std::error::Error for FteikError {}

/// Convenience type alias for Results with FteikError.
pub type Result<T> = std::result::Result<T, FteikError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_sweep_count() {
        let e = FteikError::InvalidSweepCount(0);
        assert_eq!(e.to_string(), "invalid sweep count: 0 (must be >= 1)");
    }

    #[test]
    fn display_invalid_source_radius() {
        let e = FteikError::InvalidSourceRadius(-1.5);
        assert_eq!(
            e.to_string(),
            "invalid source radius: -1.5 (must be non-negative and finite)"
        );
    }

    #[test]
    fn display_invalid_convergence_tolerance() {
        let e = FteikError::InvalidConvergenceTolerance(f64::NAN);
        assert_eq!(
            e.to_string(),
            "invalid convergence tolerance: NaN (must be non-negative and finite)"
        );
    }

    #[test]
    fn display_unknown_feature() {
        let e = FteikError::UnknownFeature("mkl".to_string());
        assert!(e.to_string().contains("'mkl'"));
    }

    #[test]
    fn is_std_error() {
        let e: Box<dyn std::error::Error> = Box::new(FteikError::UnknownBackend("x".into()));
        assert!(e.source().is_none());
        assert_eq!(e.to_string(), "unknown backend: x");
    }
}
