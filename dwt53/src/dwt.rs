//! Discrete Wavelet Transformation, biorthogonal CDF 5/3
//!
//! This module implements the forward and inverse CDF 5/3 wavelet transformations
//! using the lifting scheme. Both operate in place on a one-dimensional signal
//! whose length is a power of two.
//!
//! The forward transform leaves the buffer in split layout:
//! - `xn[..n/2]` approximation coefficients (the even samples after lifting)
//! - `xn[n/2..]` detail coefficients (the odd samples after lifting)
//!
//! The edges are handled by symmetric extension, so a boundary sample is lifted
//! from its single neighbour counted twice.

use log::{debug, trace};

use crate::error::DwtError;

/// Lifting parameters for the 5-3 filter
pub mod lifting_params_53 {
    /// Predict coefficient
    pub const P: f64 = -0.5;
    /// Inverse predict coefficient
    pub const IP: f64 = -P;
    /// Update coefficient
    pub const U: f64 = 0.25;
    /// Inverse update coefficient
    pub const IU: f64 = -U;
    /// Band normalisation factor, √2
    pub const SCALE: f64 = std::f64::consts::SQRT_2;
    /// Reciprocal of [`SCALE`]
    pub const ISCALE: f64 = 1.0 / SCALE;
}

/// Check that the signal length is a positive power of two and return it.
pub fn validate_len(xn: &[f64]) -> Result<usize, DwtError> {
    let n = xn.len();
    if !n.is_power_of_two() {
        debug!("Rejecting signal of length {}", n);
        return Err(DwtError::InvalidLength { len: n });
    }
    Ok(n)
}

// ========================================================================
// Lifting steps
// ========================================================================

/// Predict step, odd samples from their even neighbours.
///
/// The last sample is always odd and mirrors its left neighbour.
fn lift_predict(xn: &mut [f64], coeff: f64) {
    let n = xn.len();
    for i in (1..n - 2).step_by(2) {
        xn[i] += coeff * (xn[i - 1] + xn[i + 1]);
    }
    xn[n - 1] += 2.0 * coeff * xn[n - 2];
}

/// Update step, even samples from their odd neighbours.
///
/// The first sample mirrors its right neighbour.
fn lift_update(xn: &mut [f64], coeff: f64) {
    let n = xn.len();
    for i in (2..n).step_by(2) {
        xn[i] += coeff * (xn[i - 1] + xn[i + 1]);
    }
    xn[0] += 2.0 * coeff * xn[1];
}

/// Multiply odd samples by `factor`, divide even samples by it.
fn scale(xn: &mut [f64], factor: f64) {
    for (i, x) in xn.iter_mut().enumerate() {
        if i % 2 != 0 {
            *x *= factor;
        } else {
            *x /= factor;
        }
    }
}

/// Deinterleave: [e0, o0, e1, o1, ...] -> [e0, e1, ..., o0, o1, ...]
fn pack(xn: &mut [f64]) {
    let half = xn.len() / 2;
    let mut tb = vec![0.0; xn.len()];
    for i in 0..half {
        tb[i] = xn[2 * i];
        tb[half + i] = xn[2 * i + 1];
    }
    xn.copy_from_slice(&tb);
}

/// Interleave: [e0, e1, ..., o0, o1, ...] -> [e0, o0, e1, o1, ...]
fn unpack(xn: &mut [f64]) {
    let half = xn.len() / 2;
    let mut tb = vec![0.0; xn.len()];
    for i in 0..half {
        tb[2 * i] = xn[i];
        tb[2 * i + 1] = xn[half + i];
    }
    xn.copy_from_slice(&tb);
}

// ========================================================================
// Transforms
// ========================================================================

/// Forward 5-3 DWT using lifting.
///
/// The signal in `xn` is replaced by its transformation. The first half holds the
/// approximation coefficients, the second half the detail coefficients.
///
/// The length of `xn` must be a power of two, otherwise [`DwtError::InvalidLength`]
/// is returned and `xn` is left untouched. A single sample is its own transform.
pub fn fwt53(xn: &mut [f64]) -> Result<(), DwtError> {
    use lifting_params_53::*;

    let n = validate_len(xn)?;
    trace!("Forward 5-3 transform of {} samples", n);
    if n < 2 {
        return Ok(());
    }

    // Step 1: Predict
    lift_predict(xn, P);

    // Step 2: Update
    lift_update(xn, U);

    // Step 3: Scale
    scale(xn, SCALE);

    // Step 4: Pack
    pack(xn);

    Ok(())
}

/// Inverse 5-3 DWT using lifting.
///
/// This is the inverse of [`fwt53`], so that `iwt53(fwt53(xn)) == xn` up to
/// floating point rounding. The coefficients in `xn` are replaced by the signal.
///
/// The length of `xn` must be a power of two, otherwise [`DwtError::InvalidLength`]
/// is returned and `xn` is left untouched.
pub fn iwt53(xn: &mut [f64]) -> Result<(), DwtError> {
    use lifting_params_53::*;

    let n = validate_len(xn)?;
    trace!("Inverse 5-3 transform of {} samples", n);
    if n < 2 {
        return Ok(());
    }

    // Step 1: Unpack
    unpack(xn);

    // Step 2: Undo scale
    scale(xn, ISCALE);

    // Step 3: Undo update
    lift_update(xn, IU);

    // Step 4: Undo predict
    lift_predict(xn, IP);

    Ok(())
}

// ========================================================================
// Sub-band access
// ========================================================================

/// Split a transformed signal into its (approximation, detail) bands.
pub fn split_bands(xn: &[f64]) -> Result<(&[f64], &[f64]), DwtError> {
    let n = validate_len(xn)?;
    Ok(xn.split_at(n.div_ceil(2)))
}

/// Mutable variant of [`split_bands`].
///
/// Transforming the approximation band again gives the next decomposition level.
pub fn split_bands_mut(xn: &mut [f64]) -> Result<(&mut [f64], &mut [f64]), DwtError> {
    let n = validate_len(xn)?;
    Ok(xn.split_at_mut(n.div_ceil(2)))
}

// ============================================================================
// Unit Tests
// ============================================================================
