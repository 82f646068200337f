// Copyright (c) 2026, Chad Hogan
// All rights reserved.
//
// This source code is licensed under the BSD-3-Clause license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;

use tracing::level_filters::LevelFilter;

use crate::error::{FteikError, Result};

/// Tunables handed to the solver at initialization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverSettings {
    nsweep: usize,
    eps: f64,
    conv_tol: f64,
    verbosity: u8,
}

impl SolverSettings {
    /// Default number of Gauss-Seidel sweeps.
    pub const DEFAULT_NSWEEP: usize = 2;
    /// Default source radius, in grid points.
    pub const DEFAULT_EPS: f64 = 5.0;
    /// Default convergence tolerance, in seconds.
    pub const DEFAULT_CONV_TOL: f64 = 0.0;

    /// Create a validated settings set.
    ///
    /// # Parameters
    /// - `nsweep`: Number of Gauss-Seidel sweeps (must be >= 1)
    /// - `eps`: Radius in grid points around the source inside which the
    ///   spherical update is used instead of the cartesian one (non-negative, finite)
    /// - `conv_tol`: Sweeping stops once updates fall below this many seconds
    ///   (non-negative, finite; 0 runs all `nsweep` sweeps)
    /// - `verbosity`: 0 is quiet, larger values log more
    ///
    /// # Errors
    /// Returns an error if any numeric parameter is out of range.
    pub fn new(nsweep: usize, eps: f64, conv_tol: f64, verbosity: u8) -> Result<Self> {
        Self::default()
            .with_nsweep(nsweep)?
            .with_eps(eps)?
            .with_conv_tol(conv_tol)
            .map(|s| s.with_verbosity(verbosity))
    }

    /// Set the sweep count (builder method).
    ///
    /// # Errors
    /// Returns an error if `nsweep` is zero.
    pub fn with_nsweep(mut self, nsweep: usize) -> Result<Self> {
        if nsweep == 0 {
            return Err(FteikError::InvalidSweepCount(nsweep));
        }
        self.nsweep = nsweep;
        Ok(self)
    }

    /// Set the source radius in grid points (builder method).
    ///
    /// # Errors
    /// Returns an error if `eps` is negative or not finite.
    pub fn with_eps(mut self, eps: f64) -> Result<Self> {
        if !eps.is_finite() || eps < 0.0 {
            return Err(FteikError::InvalidSourceRadius(eps));
        }
        self.eps = eps;
        Ok(self)
    }

    /// Set the convergence tolerance in seconds (builder method).
    ///
    /// # Errors
    /// Returns an error if `conv_tol` is negative or not finite.
    pub fn with_conv_tol(mut self, conv_tol: f64) -> Result<Self> {
        if !conv_tol.is_finite() || conv_tol < 0.0 {
            return Err(FteikError::InvalidConvergenceTolerance(conv_tol));
        }
        self.conv_tol = conv_tol;
        Ok(self)
    }

    /// Set the verbosity level (builder method).
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Number of Gauss-Seidel sweeps.
    pub fn nsweep(&self) -> usize {
        self.nsweep
    }

    /// Source radius in grid points.
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Convergence tolerance in seconds.
    pub fn conv_tol(&self) -> f64 {
        self.conv_tol
    }

    /// Verbosity level.
    pub fn verbosity(&self) -> u8 {
        self.verbosity
    }

    /// Log level corresponding to the verbosity.
    pub fn level_filter(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

impl Default for SolverSettings {
    fn default() -> Self {
        SolverSettings {
            nsweep: Self::DEFAULT_NSWEEP,
            eps: Self::DEFAULT_EPS,
            conv_tol: Self::DEFAULT_CONV_TOL,
            verbosity: 0,
        }
    }
}

impl fmt::Display for SolverSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nsweep={} eps={} conv_tol={} verbosity={}",
            self.nsweep, self.eps, self.conv_tol, self.verbosity
        )
    }
}
