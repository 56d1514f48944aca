//! Input checks shared by the denoising and plotting entry points.

use std::ops::Deref;

use crate::error::WaveletError;

/// Fewest samples a decomposable load series may hold.
pub const MIN_SERIES_LEN: usize = 2;

/// Borrowed load series that has passed the length and finiteness checks.
///
/// Dereferences to `[f64]`, so it can be handed straight to [`crate::dwt`].
#[derive(Clone, Copy, Debug)]
pub struct TimeSeries<'a> {
    samples: &'a [f64],
}

impl<'a> TimeSeries<'a> {
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`WaveletError::SeriesTooShort`] | fewer than [`MIN_SERIES_LEN`] samples |
    /// | [`WaveletError::NonFiniteData`] | a NaN or infinite sample |
    pub fn new(samples: &'a [f64]) -> Result<Self, WaveletError> {
        if samples.len() < MIN_SERIES_LEN {
            return Err(WaveletError::SeriesTooShort {
                len: samples.len(),
                min: MIN_SERIES_LEN,
            });
        }
        if samples.iter().any(|v| !v.is_finite()) {
            return Err(WaveletError::NonFiniteData);
        }
        Ok(Self { samples })
    }

    pub fn as_slice(&self) -> &'a [f64] {
        self.samples
    }
}

impl Deref for TimeSeries<'_> {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        self.samples
    }
}
