// Copyright (c) 2026, Chad Hogan
// All rights reserved.
//
// This source code is licensed under the BSD-3-Clause license found in the
// LICENSE file in the root directory of this source tree.

//! Build configuration and numeric helpers for the fteik travel-time solver.
//!
//! The solver selects its math backend and archive support at build time
//! through the Cargo features `intel` and `h5` (both on by default). This
//! crate exposes those choices as constants, along with π and the small
//! ordering helpers (`max`, `min`, `max3`, `min3`) the solver uses for
//! upwind neighbor selection.

#![warn(missing_docs)]

/// Build-time feature toggles.
pub mod config;
/// Error types for the library.
pub mod error;
/// The constant π and generic ordering helpers.
pub mod numeric;
/// Solver tunables and their validation.
pub mod settings;

pub use crate::config::{ArchiveBackend, BuildConfig, MathBackend, USE_H5, USE_INTEL};
pub use crate::error::{FteikError, Result};
pub use crate::numeric::{max, max3, min, min3, PI};
pub use crate::settings::SolverSettings;
