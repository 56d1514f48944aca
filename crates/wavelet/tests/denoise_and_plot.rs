use approx::assert_abs_diff_eq;
use kairos_wavelet::{
    Dwt, PlotOptions, Wavelet, WaveletError, WaveletTransform, dwt_max_level, wavelet_coeffs_plot,
    wavelet_filter,
};

/// Smooth daily-like curve plus a deterministic high-frequency jitter.
fn noisy_load(n: usize) -> (Vec<f64>, Vec<f64>) {
    let clean: Vec<f64> = (0..n)
        .map(|i| {
            let t = i as f64;
            100.0 + 20.0 * (2.0 * std::f64::consts::PI * t / 96.0).sin()
        })
        .collect();
    let noisy = clean
        .iter()
        .enumerate()
        .map(|(i, v)| v + if i % 2 == 0 { 1.5 } else { -1.5 })
        .collect();
    (clean, noisy)
}

fn rms(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len().min(b.len());
    (a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum::<f64>() / n as f64).sqrt()
}

#[test]
fn haar_shrinkage_halves_alternating_noise() {
    // Every finest-level Haar detail equals 3/sqrt(2), so a relative threshold
    // of 0.5 halves the jitter; coarser details are exactly zero.
    let n = 512;
    let clean = vec![100.0; n];
    let noisy: Vec<f64> = (0..n)
        .map(|i| 100.0 + if i % 2 == 0 { 1.5 } else { -1.5 })
        .collect();
    let out = wavelet_filter(&noisy, Wavelet::Haar, 0.5).unwrap();
    assert_eq!(out.len(), n);
    assert_abs_diff_eq!(rms(&noisy, &clean), 1.5, epsilon = 1e-12);
    assert_abs_diff_eq!(rms(&out, &clean), 0.75, epsilon = 1e-9);
}

#[test]
fn every_wavelet_reconstructs_with_zero_threshold() {
    let (_, noisy) = noisy_load(300);
    for w in Wavelet::ALL {
        let out = wavelet_filter(&noisy, w, 0.0).unwrap();
        assert_eq!(out.len(), 300, "{w}");
        for (a, b) in noisy.iter().zip(&out) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-6);
        }
    }
}

#[test]
fn backend_round_trip_at_max_level() {
    let (_, noisy) = noisy_load(1000);
    let level = dwt_max_level(noisy.len(), Wavelet::Db3.length());
    let coeffs = Dwt.forward(&noisy, Wavelet::Db3, level).unwrap();
    assert_eq!(coeffs.level(), level);
    let back = Dwt.inverse(&coeffs).unwrap();
    for (a, b) in noisy.iter().zip(&back) {
        assert_abs_diff_eq!(a, b, epsilon = 1e-6);
    }
}

#[test]
fn unknown_wavelet_name() {
    assert!(matches!(
        Wavelet::from_name("coif5"),
        Err(WaveletError::UnsupportedWavelet(_))
    ));
}

#[test]
fn coefficient_plot_renders_svg() {
    let (_, noisy) = noisy_load(128);
    let options = PlotOptions {
        figsize: (6.0, 8.0),
        ..PlotOptions::default()
    };
    let plot = wavelet_coeffs_plot(&noisy, Wavelet::Sym4, options).unwrap();
    assert_eq!(plot.levels(), 4);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("coeffs.svg");
    plot.render_svg(&path).unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Approximation coefficients"));
    assert!(svg.contains("Level 4"));
}

#[test]
fn coefficient_plot_without_levels_cannot_render() {
    let plot = wavelet_coeffs_plot(&[1.0, 2.0, 3.0, 4.0], Wavelet::Sym5, PlotOptions::default())
        .unwrap();
    let dir = tempfile::tempdir().unwrap();
    let err = plot.render_svg(&dir.path().join("empty.svg")).unwrap_err();
    assert!(matches!(err, WaveletError::PlotFailed(_)));
}
