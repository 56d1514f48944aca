//! Test outcomes and their tabular report.

use std::fmt;

use serde::Serialize;

/// Which stationarity test produced a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TestKind {
    /// Augmented Dickey-Fuller (null: unit root).
    Adf,
    /// Kwiatkowski-Phillips-Schmidt-Shin (null: level stationarity).
    Kpss,
}

impl TestKind {
    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Adf => "ADF",
            Self::Kpss => "KPSS",
        }
    }

    /// Report column title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Adf => "Dickey-Fuller Test Results",
            Self::Kpss => "KPSS Test Results",
        }
    }

    fn statistic_label(&self) -> &'static str {
        match self {
            Self::Adf => "DF Test Statistic",
            Self::Kpss => "KPSS Test Statistic",
        }
    }
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A critical value of the test statistic at a named significance level.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CriticalValue {
    /// Level key such as `"5%"`.
    pub level: String,
    /// Critical value of the statistic.
    pub value: f64,
}

/// Outcome of a single stationarity test.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StationarityResult {
    kind: TestKind,
    statistic: f64,
    p_value: f64,
    lags: usize,
    nobs: usize,
    critical_values: Vec<CriticalValue>,
    significance: f64,
    is_stationary: bool,
}

impl StationarityResult {
    pub(crate) fn new(
        kind: TestKind,
        statistic: f64,
        p_value: f64,
        lags: usize,
        nobs: usize,
        critical_values: Vec<CriticalValue>,
        significance: f64,
    ) -> Self {
        // ADF rejects a unit root; KPSS fails to reject stationarity.
        let is_stationary = match kind {
            TestKind::Adf => p_value < significance,
            TestKind::Kpss => p_value > significance,
        };
        Self {
            kind,
            statistic,
            p_value,
            lags,
            nobs,
            critical_values,
            significance,
            is_stationary,
        }
    }

    pub fn kind(&self) -> TestKind {
        self.kind
    }

    pub fn statistic(&self) -> f64 {
        self.statistic
    }

    pub fn p_value(&self) -> f64 {
        self.p_value
    }

    /// Number of lags used.
    pub fn lags(&self) -> usize {
        self.lags
    }

    /// Number of observations used.
    pub fn nobs(&self) -> usize {
        self.nobs
    }

    /// Critical values in reporting order.
    pub fn critical_values(&self) -> &[CriticalValue] {
        &self.critical_values
    }

    /// Critical value at `level` (e.g. `"5%"`), if tabulated.
    pub fn critical_value(&self, level: &str) -> Option<f64> {
        self.critical_values
            .iter()
            .find(|c| c.level == level)
            .map(|c| c.value)
    }

    /// Significance level the verdict was taken at.
    pub fn significance(&self) -> f64 {
        self.significance
    }

    /// Verdict at [`significance`](Self::significance).
    pub fn is_stationary(&self) -> bool {
        self.is_stationary
    }

    /// Builds the labelled report table.
    pub fn report(&self) -> Report {
        let mut rows = vec![
            (
                self.kind.statistic_label().to_string(),
                format_float(self.statistic),
            ),
            ("P-Value".to_string(), format_float(self.p_value)),
            ("# Lags Used".to_string(), self.lags.to_string()),
            ("# Observations Used".to_string(), self.nobs.to_string()),
        ];
        rows.extend(self.critical_values.iter().map(|c| {
            (
                format!("Critical Value ({})", c.level),
                format_float(c.value),
            )
        }));
        rows.push((
            "Is the time series stationary?".to_string(),
            if self.is_stationary { "Yes" } else { "No" }.to_string(),
        ));
        Report {
            title: self.kind.title().to_string(),
            rows,
        }
    }
}

fn format_float(v: f64) -> String {
    format!("{v:.6}")
}

/// Two-column report: a title over `(label, value)` rows.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    title: String,
    rows: Vec<(String, String)>,
}

impl Report {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rows(&self) -> &[(String, String)] {
        &self.rows
    }

    /// Value of the row labelled `label`.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.rows.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
        writeln!(f, "{:width$}  {}", "", self.title)?;
        for (label, value) in &self.rows {
            writeln!(f, "{label:<width$}  {value}")?;
        }
        Ok(())
    }
}
