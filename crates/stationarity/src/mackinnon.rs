//! MacKinnon approximations for the constant-only Dickey-Fuller distribution.

use statrs::distribution::{ContinuousCDF, Normal};

/// Above this statistic the p-value is 1.
const TAU_MAX: f64 = 2.74;
/// Below this statistic the p-value is 0.
const TAU_MIN: f64 = -18.83;
/// Switch point between the small-p and large-p polynomials.
const TAU_STAR: f64 = -1.61;

/// Small-p polynomial in the statistic, lowest order first (MacKinnon 1994).
const TAU_SMALLP: [f64; 3] = [2.1659, 1.4412, 0.038269];
/// Large-p polynomial in the statistic, lowest order first (MacKinnon 1994).
const TAU_LARGEP: [f64; 4] = [1.7339, 0.93202, -0.12745, -0.010368];

/// Response-surface coefficients in `1/nobs` for 1 %, 5 % and 10 %
/// (MacKinnon 2010).
const TAU_CRIT: [(&str, [f64; 4]); 3] = [
    ("1%", [-3.43035, -6.5393, -16.786, -79.433]),
    ("5%", [-2.86154, -2.8903, -4.234, -40.040]),
    ("10%", [-2.56677, -1.5384, -2.809, 0.0]),
];

/// Evaluates `c[0] + c[1] x + c[2] x^2 + ...`.
fn poly(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

fn std_normal_cdf(x: f64) -> f64 {
    match Normal::new(0.0, 1.0) {
        Ok(n) => n.cdf(x),
        Err(_) => f64::NAN,
    }
}

/// Approximate p-value of a Dickey-Fuller t-statistic (constant, one
/// integrated series).
pub fn mackinnon_p(stat: f64) -> f64 {
    if stat > TAU_MAX {
        return 1.0;
    }
    if stat < TAU_MIN {
        return 0.0;
    }
    let coeffs: &[f64] = if stat <= TAU_STAR {
        &TAU_SMALLP
    } else {
        &TAU_LARGEP
    };
    std_normal_cdf(poly(coeffs, stat))
}

/// Critical values at 1 %, 5 % and 10 % for `nobs` regression observations.
pub fn mackinnon_crit(nobs: usize) -> Vec<(&'static str, f64)> {
    let inv = 1.0 / nobs as f64;
    TAU_CRIT
        .iter()
        .map(|(level, c)| (*level, poly(c, inv)))
        .collect()
}
