//! Fixed-width bucket resampling for time-indexed load tables.
//!
//! A [`TimeFrame`] holds named `f64` columns over a timestamp index.
//! [`resample`] groups rows into buckets of a [`ResampleRule`] width,
//! anchored at midnight of the first day, and reduces each column with the
//! [`Agg`] named in an [`AggSpec`]. [`resampling_data`] is the load-table
//! shortcut: `Hour` and `Minutes` are averaged, features are summed.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │  TimeFrame    │────▶│  Bucket index  │────▶│  Agg per column  │
//!  │  (rows)       │     │  (rule/origin) │     │  (empty -> 0/NaN)│
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```ignore
//! use kairos_resample::{TimeFrame, resampling_data};
//!
//! let frame = TimeFrame::new(timestamps)
//!     .with_column("Load", load)?
//!     .with_column("Hour", hours)?
//!     .with_column("Minutes", minutes)?;
//! let hourly = resampling_data(&frame, &["Load"], "h")?;
//! ```

mod agg;
mod error;
mod frame;
mod resample;
mod rule;

pub use agg::{Agg, AggSpec};
pub use error::ResampleError;
pub use frame::TimeFrame;
pub use resample::{HOUR_COLUMN, MINUTES_COLUMN, resample, resampling_data};
pub use rule::ResampleRule;
