// Copyright (c) 2026, Chad Hogan
// All rights reserved.
//
// This source code is licensed under the BSD-3-Clause license found in the
// LICENSE file in the root directory of this source tree.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use fteik::{BuildConfig, SolverSettings, PI};

#[derive(Parser)]
#[command(
    name = "fteik-config",
    about = "Report the fteik build configuration and check solver settings"
)]
struct Cli {
    /// Exit 0 if the named feature (intel or h5) is enabled, 1 if disabled,
    /// 2 if the name is unknown
    #[arg(
        long,
        value_name = "FEATURE",
        conflicts_with_all = ["pi", "nsweep", "eps", "conv_tol"]
    )]
    has: Option<String>,

    /// Print pi at full double precision
    #[arg(long, conflicts_with_all = ["nsweep", "eps", "conv_tol"])]
    pi: bool,

    /// Number of Gauss-Seidel sweeps to validate
    #[arg(long)]
    nsweep: Option<usize>,

    /// Source radius in grid points to validate
    #[arg(long, allow_negative_numbers = true)]
    eps: Option<f64>,

    /// Convergence tolerance in seconds to validate
    #[arg(long, allow_negative_numbers = true)]
    conv_tol: Option<f64>,

    /// Increase verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn wants_settings(&self) -> bool {
        self.nsweep.is_some() || self.eps.is_some() || self.conv_tol.is_some()
    }

    fn settings(&self) -> Result<SolverSettings> {
        let mut settings = SolverSettings::default().with_verbosity(self.verbose);
        if let Some(nsweep) = self.nsweep {
            settings = settings.with_nsweep(nsweep).context("invalid --nsweep")?;
        }
        if let Some(eps) = self.eps {
            settings = settings.with_eps(eps).context("invalid --eps")?;
        }
        if let Some(conv_tol) = self.conv_tol {
            settings = settings
                .with_conv_tol(conv_tol)
                .context("invalid --conv-tol")?;
        }
        Ok(settings)
    }
}

/// Answer to a `--has` query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FeatureStatus {
    Enabled,
    Disabled,
    Unknown,
}

impl FeatureStatus {
    fn code(self) -> u8 {
        match self {
            FeatureStatus::Enabled => 0,
            FeatureStatus::Disabled => 1,
            FeatureStatus::Unknown => 2,
        }
    }
}

fn feature_status(config: &BuildConfig, name: &str) -> FeatureStatus {
    match config.has_feature(name) {
        Ok(true) => FeatureStatus::Enabled,
        Ok(false) => FeatureStatus::Disabled,
        Err(e) => {
            eprintln!("Error: {}", e);
            FeatureStatus::Unknown
        }
    }
}

fn format_pi() -> String {
    // 17 significant digits round-trip an f64
    format!("{:.16}", PI)
}

fn summary(config: &BuildConfig) -> String {
    format!(
        "math backend:    {}\narchive backend: {}\nfeatures:        {}",
        config.math_backend(),
        config.archive_backend(),
        config.enabled_features().join(",")
    )
}

fn init_logging(settings: &SolverSettings) {
    // RUST_LOG wins over -v
    let filter = EnvFilter::builder()
        .with_default_directive(settings.level_filter().into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let settings = cli.settings()?;
    init_logging(&settings);

    let config = BuildConfig::current();
    debug!(%config, "build configuration");

    if let Some(name) = &cli.has {
        let status = feature_status(&config, name);
        info!(feature = name.as_str(), ?status, "feature query");
        return Ok(ExitCode::from(status.code()));
    }

    if cli.pi {
        println!("{}", format_pi());
        return Ok(ExitCode::SUCCESS);
    }

    if cli.wants_settings() {
        info!(%settings, "settings accepted");
        println!("{}", settings);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", summary(&config));

    Ok(ExitCode::SUCCESS)
}
