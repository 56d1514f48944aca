//! # kairos-trend
//!
//! Least-squares trend fitting for load series.
//!
//! ```mermaid
//! graph LR
//!     A["(x, y)"] -->|"linear_fit(&x, &y)?"| B["fitted m*x + q"]
//!     A -->|"LineFit::fit(&x, &y)?"| C["LineFit"]
//!     C --> D[".detrend(&y)"]
//!     A -->|"LeastSquares.polynomial_fit(&x, &y, deg)?"| E["coefficients"]
//! ```
//!
//! The [`PolynomialFit`] trait is the seam for alternate numeric backends;
//! [`LeastSquares`] is the built-in one. [`ols`] is exposed for callers that
//! need a general regression with standard errors.

mod error;
mod fit;
mod line;
mod ols;

pub use error::TrendError;
pub use fit::{LeastSquares, PolynomialFit, polyval};
pub use line::{LineFit, fit_line_with, linear_fit};
pub use ols::{OlsFit, ols};
