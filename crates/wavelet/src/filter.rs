//! Orthogonal wavelet filter banks.

use std::fmt;
use std::str::FromStr;

use crate::error::WaveletError;

const SQRT_HALF: f64 = std::f64::consts::FRAC_1_SQRT_2;

const HAAR: [f64; 2] = [SQRT_HALF, SQRT_HALF];

const DB2: [f64; 4] = [
    0.482_962_913_144_690_25,
    0.836_516_303_737_468_99,
    0.224_143_868_041_857_35,
    -0.129_409_522_550_921_45,
];

const DB3: [f64; 6] = [
    0.332_670_552_950_956_9,
    0.806_891_509_313_338_8,
    0.459_877_502_119_331_3,
    -0.135_011_020_010_390_84,
    -0.085_441_273_882_241_49,
    0.035_226_291_882_100_656,
];

const DB4: [f64; 8] = [
    0.230_377_813_308_855_23,
    0.714_846_570_552_541_5,
    0.630_880_767_929_590_4,
    -0.027_983_769_416_983_85,
    -0.187_034_811_718_881_14,
    0.030_841_381_835_986_965,
    0.032_883_011_666_982_945,
    -0.010_597_401_784_997_278,
];

const SYM4: [f64; 8] = [
    0.032_223_100_604_042_7,
    -0.012_603_967_262_037_833,
    -0.099_219_543_576_847_22,
    0.297_857_795_605_277_36,
    0.803_738_751_805_916_1,
    0.497_618_667_632_015_45,
    -0.029_635_527_645_998_51,
    -0.075_765_714_789_273_33,
];

const SYM5: [f64; 10] = [
    0.019_538_882_735_286_728,
    -0.021_101_834_024_758_855,
    -0.175_328_089_908_450_47,
    0.016_602_105_764_522_32,
    0.633_978_963_458_211_9,
    0.723_407_690_402_420_6,
    0.199_397_533_977_393_6,
    -0.039_134_249_302_383_094,
    0.029_519_490_925_774_643,
    0.027_333_068_345_077_982,
];

/// Supported orthogonal wavelets.
///
/// Each wavelet is defined by its reconstruction low-pass (scaling) filter;
/// the other three filters follow from the quadrature mirror relationship.
///
/// # Example
///
/// ```ignore
/// use kairos_wavelet::Wavelet;
///
/// let w = Wavelet::from_name("sym4")?;
/// assert_eq!(w.length(), 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Wavelet {
    /// Haar wavelet (length 2).
    Haar,
    /// Daubechies with 2 vanishing moments (length 4).
    Db2,
    /// Daubechies with 3 vanishing moments (length 6).
    Db3,
    /// Daubechies with 4 vanishing moments (length 8).
    Db4,
    /// Symlet with 4 vanishing moments (length 8).
    Sym4,
    /// Symlet with 5 vanishing moments (length 10).
    Sym5,
}

impl Default for Wavelet {
    /// Returns `Wavelet::Sym4`, the default for load-curve denoising.
    fn default() -> Self {
        Self::Sym4
    }
}

impl Wavelet {
    /// All supported wavelets.
    pub const ALL: [Wavelet; 6] = [
        Self::Haar,
        Self::Db2,
        Self::Db3,
        Self::Db4,
        Self::Sym4,
        Self::Sym5,
    ];

    /// Returns the filter length (number of coefficients).
    pub fn length(&self) -> usize {
        self.rec_lo().len()
    }

    /// Returns the canonical lower-case name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Haar => "haar",
            Self::Db2 => "db2",
            Self::Db3 => "db3",
            Self::Db4 => "db4",
            Self::Sym4 => "sym4",
            Self::Sym5 => "sym5",
        }
    }

    /// Reconstruction low-pass (scaling) filter.
    pub fn rec_lo(&self) -> &'static [f64] {
        match self {
            Self::Haar => &HAAR,
            Self::Db2 => &DB2,
            Self::Db3 => &DB3,
            Self::Db4 => &DB4,
            Self::Sym4 => &SYM4,
            Self::Sym5 => &SYM5,
        }
    }

    /// Reconstruction high-pass filter: `rec_hi[i] = (-1)^i rec_lo[L-1-i]`.
    pub fn rec_hi(&self) -> Vec<f64> {
        let lo = self.rec_lo();
        let l = lo.len();
        (0..l)
            .map(|i| {
                let v = lo[l - 1 - i];
                if i % 2 == 0 { v } else { -v }
            })
            .collect()
    }

    /// Decomposition low-pass filter (time reverse of `rec_lo`).
    pub fn dec_lo(&self) -> Vec<f64> {
        self.rec_lo().iter().rev().copied().collect()
    }

    /// Decomposition high-pass filter (time reverse of `rec_hi`).
    pub fn dec_hi(&self) -> Vec<f64> {
        let mut hi = self.rec_hi();
        hi.reverse();
        hi
    }

    /// Parses a wavelet from a case-insensitive name string.
    ///
    /// # Supported Names
    ///
    /// | Input | Wavelet |
    /// |-------|---------|
    /// | `"haar"`, `"db1"` | [`Wavelet::Haar`] |
    /// | `"db2"` | [`Wavelet::Db2`] |
    /// | `"db3"` | [`Wavelet::Db3`] |
    /// | `"db4"` | [`Wavelet::Db4`] |
    /// | `"sym4"` | [`Wavelet::Sym4`] |
    /// | `"sym5"` | [`Wavelet::Sym5`] |
    ///
    /// # Errors
    ///
    /// Returns [`WaveletError::UnsupportedWavelet`] if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, WaveletError> {
        match name.trim().to_lowercase().as_str() {
            "haar" | "db1" => Ok(Self::Haar),
            "db2" => Ok(Self::Db2),
            "db3" => Ok(Self::Db3),
            "db4" => Ok(Self::Db4),
            "sym4" => Ok(Self::Sym4),
            "sym5" => Ok(Self::Sym5),
            _ => Err(WaveletError::UnsupportedWavelet(name.to_string())),
        }
    }
}

impl FromStr for Wavelet {
    type Err = WaveletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Wavelet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
