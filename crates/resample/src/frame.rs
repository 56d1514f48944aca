//! Time-indexed table of named numeric columns.

use chrono::NaiveDateTime;

use crate::error::ResampleError;

/// A table of `f64` columns sharing one timestamp index.
///
/// Columns keep their insertion order. Every column has exactly one value
/// per index entry.
///
/// # Example
///
/// ```ignore
/// use kairos_resample::TimeFrame;
///
/// let frame = TimeFrame::new(timestamps)
///     .with_column("Load", load)?
///     .with_column("Hour", hours)?;
/// assert_eq!(frame.column("Load").map(<[f64]>::len), Some(frame.len()));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimeFrame {
    index: Vec<NaiveDateTime>,
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl TimeFrame {
    /// Creates a frame with an index and no columns.
    pub fn new(index: Vec<NaiveDateTime>) -> Self {
        Self {
            index,
            names: Vec::new(),
            columns: Vec::new(),
        }
    }

    /// Adds a column, consuming and returning the frame.
    ///
    /// # Errors
    ///
    /// See [`TimeFrame::push_column`].
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<Self, ResampleError> {
        self.push_column(name, values)?;
        Ok(self)
    }

    /// Adds a column in place.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ResampleError::LengthMismatch`] | `values.len()` differs from the index |
    /// | [`ResampleError::DuplicateColumn`] | a column with this name exists |
    pub fn push_column(
        &mut self,
        name: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<(), ResampleError> {
        let name = name.into();
        if values.len() != self.index.len() {
            return Err(ResampleError::LengthMismatch {
                field: name,
                expected: self.index.len(),
                got: values.len(),
            });
        }
        if self.position(&name).is_some() {
            return Err(ResampleError::DuplicateColumn { name });
        }
        self.names.push(name);
        self.columns.push(values);
        Ok(())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Timestamp index.
    pub fn index(&self) -> &[NaiveDateTime] {
        &self.index
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if the frame has no rows.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Column values by name.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.position(name).map(|i| self.columns[i].as_slice())
    }

    /// Column values by name, failing if absent.
    ///
    /// # Errors
    ///
    /// Returns [`ResampleError::MissingColumn`] if no such column exists.
    pub fn require(&self, name: &str) -> Result<&[f64], ResampleError> {
        self.column(name).ok_or_else(|| ResampleError::MissingColumn {
            name: name.to_string(),
        })
    }

    /// `(name, values)` pairs in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.names
            .iter()
            .zip(&self.columns)
            .map(|(n, c)| (n.as_str(), c.as_slice()))
    }

    /// Copy of the frame restricted to `names`, in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`ResampleError::MissingColumn`] for an unknown name.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<TimeFrame, ResampleError> {
        let mut out = TimeFrame::new(self.index.clone());
        for name in names {
            let name = name.as_ref();
            out.push_column(name, self.require(name)?.to_vec())?;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn index(n: usize) -> Vec<NaiveDateTime> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        (0..n)
            .map(|i| start + chrono::TimeDelta::minutes(i as i64))
            .collect()
    }

    #[test]
    fn build_and_query() {
        let frame = TimeFrame::new(index(3))
            .with_column("Load", vec![1.0, 2.0, 3.0])
            .unwrap()
            .with_column("Hour", vec![0.0, 0.0, 0.0])
            .unwrap();
        assert_eq!(frame.len(), 3);
        assert_eq!(frame.width(), 2);
        assert!(!frame.is_empty());
        assert_eq!(frame.column("Load"), Some([1.0, 2.0, 3.0].as_slice()));
        assert_eq!(frame.column("Nope"), None);
        let names: Vec<&str> = frame.column_names().collect();
        assert_eq!(names, ["Load", "Hour"]);
    }

    #[test]
    fn length_mismatch_rejected() {
        let err = TimeFrame::new(index(3))
            .with_column("Load", vec![1.0])
            .unwrap_err();
        assert!(matches!(
            err,
            ResampleError::LengthMismatch {
                expected: 3,
                got: 1,
                ..
            }
        ));
    }

    #[test]
    fn duplicate_rejected() {
        let err = TimeFrame::new(index(1))
            .with_column("Load", vec![1.0])
            .unwrap()
            .with_column("Load", vec![2.0])
            .unwrap_err();
        assert!(matches!(err, ResampleError::DuplicateColumn { ref name } if name == "Load"));
    }

    #[test]
    fn require_reports_missing() {
        let frame = TimeFrame::new(index(2));
        let err = frame.require("Minutes").unwrap_err();
        assert!(matches!(err, ResampleError::MissingColumn { ref name } if name == "Minutes"));
    }

    #[test]
    fn select_reorders() {
        let frame = TimeFrame::new(index(2))
            .with_column("a", vec![1.0, 2.0])
            .unwrap()
            .with_column("b", vec![3.0, 4.0])
            .unwrap();
        let sub = frame.select(&["b", "a"]).unwrap();
        let cols: Vec<(&str, &[f64])> = sub.columns().collect();
        assert_eq!(cols, vec![("b", [3.0, 4.0].as_slice()), ("a", [1.0, 2.0].as_slice())]);
        assert!(frame.select(&["c"]).is_err());
    }
}
