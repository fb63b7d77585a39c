//! Helper functions shared by the integration tests

#![allow(dead_code)]

pub fn init_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Info)
        .try_init();
}

/// Tolerance for comparing a reconstructed signal against the original
pub fn tolerance(signal: &[f64]) -> f64 {
    let max = signal.iter().map(|v| v.abs()).fold(1.0, f64::max);
    1e-12 * max
}

pub fn assert_slices_approx_eq(expected: &[f64], actual: &[f64], eps: f64) {
    assert_eq!(expected.len(), actual.len(), "length mismatch");
    for (i, (&exp, &act)) in expected.iter().zip(actual.iter()).enumerate() {
        assert!(
            (exp - act).abs() <= eps,
            "Mismatch at index {}: expected {}, got {}",
            i,
            exp,
            act
        );
    }
}
