// Copyright (c) 2026, Chad Hogan
// All rights reserved.
//
// This source code is licensed under the BSD-3-Clause license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use crate::error::{FteikError, Result};

/// True when the crate was built with the vendor-optimized math backend
/// (Cargo feature `intel`).
pub const USE_INTEL: bool = cfg!(feature = "intel");

/// True when the crate was built with the HDF5 archive path
/// (Cargo feature `h5`).
pub const USE_H5: bool = cfg!(feature = "h5");

/// Math backend selected at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathBackend {
    /// Vendor-optimized vector math.
    Intel,
    /// Portable fallback.
    Generic,
}

/// Archive library selected at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveBackend {
    /// Hierarchical data format (HDF5).
    Hdf5,
    /// No archive support compiled in.
    None,
}

impl fmt::Display for MathBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathBackend::Intel => write!(f, "intel"),
            MathBackend::Generic => write!(f, "generic"),
        }
    }
}

impl fmt::Display for ArchiveBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchiveBackend::Hdf5 => write!(f, "hdf5"),
            ArchiveBackend::None => write!(f, "none"),
        }
    }
}

/// Parses `intel` (alias `mkl`) or `generic`, case-insensitively.
impl FromStr for MathBackend {
    type Err = FteikError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "intel" | "mkl" => Ok(MathBackend::Intel),
            "generic" => Ok(MathBackend::Generic),
            _ => Err(FteikError::UnknownBackend(s.to_string())),
        }
    }
}

/// Parses `hdf5` (alias `h5`, the feature name) or `none`, case-insensitively.
impl FromStr for ArchiveBackend {
    type Err = FteikError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hdf5" | "h5" => Ok(ArchiveBackend::Hdf5),
            "none" => Ok(ArchiveBackend::None),
            _ => Err(FteikError::UnknownBackend(s.to_string())),
        }
    }
}

/// The feature set a build of this crate was compiled with.
///
/// Consumers that need to branch at compile time should use [`USE_INTEL`]
/// and [`USE_H5`] directly; this type is for reporting and for run-time
/// dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BuildConfig {
    math: MathBackend,
    archive: ArchiveBackend,
}

impl BuildConfig {
    /// The configuration of the running build.
    pub const fn current() -> Self {
        BuildConfig {
            math: if USE_INTEL {
                MathBackend::Intel
            } else {
                MathBackend::Generic
            },
            archive: if USE_H5 {
                ArchiveBackend::Hdf5
            } else {
                ArchiveBackend::None
            },
        }
    }

    /// Selected math backend.
    pub fn math_backend(&self) -> MathBackend {
        self.math
    }

    /// Selected archive backend.
    pub fn archive_backend(&self) -> ArchiveBackend {
        self.archive
    }

    /// Whether the vendor-optimized math backend is selected.
    pub fn use_intel(&self) -> bool {
        self.math == MathBackend::Intel
    }

    /// Whether HDF5 archive support is selected.
    pub fn use_h5(&self) -> bool {
        self.archive == ArchiveBackend::Hdf5
    }

    /// Names of the enabled Cargo features, in declaration order.
    pub fn enabled_features(&self) -> Vec<&'static str> {
        let mut features = Vec::with_capacity(2);
        if self.use_intel() {
            features.push("intel");
        }
        if self.use_h5() {
            features.push("h5");
        }
        features
    }

    /// Check whether the named feature is enabled.
    ///
    /// Names are matched case-insensitively after trimming whitespace.
    ///
    /// # Errors
    /// Returns [`FteikError::UnknownFeature`] if `name` is not a known feature.
    pub fn has_feature(&self, name: &str) -> Result<bool> {
        match name.trim().to_ascii_lowercase().as_str() {
            "intel" => Ok(self.use_intel()),
            "h5" => Ok(self.use_h5()),
            _ => Err(FteikError::UnknownFeature(name.to_string())),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for BuildConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "math={} archive={}", self.math, self.archive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_matches_flags() {
        let cfg = BuildConfig::current();
        assert_eq!(cfg.use_intel(), USE_INTEL);
        assert_eq!(cfg.use_h5(), USE_H5);
        assert_eq!(cfg, BuildConfig::default());
    }

    #[cfg(feature = "intel")]
    #[test]
    fn intel_feature_selects_intel_backend() {
        assert_eq!(BuildConfig::current().math_backend(), MathBackend::Intel);
    }

    #[cfg(not(feature = "intel"))]
    #[test]
    fn no_intel_feature_selects_generic_backend() {
        assert_eq!(BuildConfig::current().math_backend(), MathBackend::Generic);
    }

    #[cfg(feature = "h5")]
    #[test]
    fn h5_feature_selects_hdf5() {
        assert_eq!(BuildConfig::current().archive_backend(), ArchiveBackend::Hdf5);
    }

    #[cfg(not(feature = "h5"))]
    #[test]
    fn no_h5_feature_selects_none() {
        assert_eq!(BuildConfig::current().archive_backend(), ArchiveBackend::None);
    }

    #[test]
    fn enabled_features_agree_with_has_feature() {
        let cfg = BuildConfig::current();
        let enabled = cfg.enabled_features();
        assert_eq!(enabled.contains(&"intel"), cfg.has_feature("intel").unwrap());
        assert_eq!(enabled.contains(&"h5"), cfg.has_feature("h5").unwrap());
    }

    #[test]
    fn has_feature_normalizes_name() {
        let cfg = BuildConfig::current();
        assert_eq!(cfg.has_feature(" INTEL ").unwrap(), USE_INTEL);
        assert_eq!(cfg.has_feature("H5").unwrap(), USE_H5);
    }

    #[test]
    fn has_feature_rejects_unknown() {
        let err = BuildConfig::current().has_feature("openmp").unwrap_err();
        assert_eq!(err, FteikError::UnknownFeature("openmp".to_string()));
    }

    #[test]
    fn backends_parse_and_display() {
        assert_eq!("MKL".parse::<MathBackend>().unwrap(), MathBackend::Intel);
        assert_eq!("generic".parse::<MathBackend>().unwrap(), MathBackend::Generic);
        assert_eq!("h5".parse::<ArchiveBackend>().unwrap(), ArchiveBackend::Hdf5);
        assert_eq!(ArchiveBackend::None.to_string(), "none");
        assert!("cuda".parse::<MathBackend>().is_err());
    }

    #[test]
    fn display_names_parse_back() {
        for b in [MathBackend::Intel, MathBackend::Generic] {
            assert_eq!(b.to_string().parse::<MathBackend>().unwrap(), b);
        }
        for b in [ArchiveBackend::Hdf5, ArchiveBackend::None] {
            assert_eq!(b.to_string().to_uppercase().parse::<ArchiveBackend>().unwrap(), b);
        }
    }

    #[test]
    fn display_summary() {
        let s = BuildConfig::current().to_string();
        assert!(s.starts_with("math="));
        assert!(s.contains(" archive="));
    }
}
