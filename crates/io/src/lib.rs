//! # kairos-io
//!
//! CSV input and output for kairos. Bridges delimited text files into the
//! `&[f64]` series and [`kairos_resample::TimeFrame`] tables used by the
//! other crates.

mod error;
mod reader;
mod writer;

pub use error::IoError;
pub use reader::{DEFAULT_DATE_COLUMN, DEFAULT_DATE_FORMATS, ReadOptions, read_frame, read_series};
pub use writer::{WRITE_DATE_FORMAT, write_frame, write_series};
