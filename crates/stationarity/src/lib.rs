//! # kairos-stationarity
//!
//! Augmented Dickey-Fuller and KPSS stationarity tests with tabular reports.
//!
//! ```text
//! &[f64] ──StationarityTests::adf_test──▶ StationarityResult ──.report()──▶ Report
//!        ──StationarityTests::kpss_test─▶ StationarityResult
//! ```
//!
//! | Test | Null hypothesis | Stationary when |
//! |------|-----------------|-----------------|
//! | [`AdfTest`] | unit root | `p < significance` |
//! | [`KpssTest`] | level stationarity | `p > significance` |
//!
//! Both tests use one fixed lag. ADF p-values follow MacKinnon's (1994)
//! regression-surface approximation and its critical values MacKinnon (2010);
//! KPSS p-values are interpolated from the Kwiatkowski et al. (1992) table.
//!
//! ## Quick Start
//!
//! ```ignore
//! use kairos_stationarity::StationarityTests;
//!
//! let tests = StationarityTests::new();
//! let adf = tests.adf_test(&load)?;
//! let kpss = tests.kpss_test(&load)?;
//! println!("{}\n{}", adf.report(), kpss.report());
//! ```

mod adf;
mod error;
mod hypothesis;
mod kpss;
mod mackinnon;
mod result;
mod suite;

pub use adf::{ADF_LAGS, ADF_MIN_LEN, AdfTest};
pub use error::StationarityError;
pub use hypothesis::HypothesisTest;
pub use kpss::{KPSS_LAGS, KPSS_MIN_LEN, KpssTest};
pub use mackinnon::{mackinnon_crit, mackinnon_p};
pub use result::{CriticalValue, Report, StationarityResult, TestKind};
pub use suite::{DEFAULT_SIGNIFICANCE, StationarityTests};
