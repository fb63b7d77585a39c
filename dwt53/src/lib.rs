//! Biorthogonal CDF 5/3 wavelet transform.
//!
//! A single level of the lifting based 5/3 discrete wavelet transform, as used by
//! the reversible path of JPEG 2000. The transform runs in place on a signal whose
//! length is a power of two and splits it into approximation and detail bands.
//!
//! ```
//! let mut xn = [4.0, 2.0, 6.0, 8.0];
//! dwt53::fwt53(&mut xn)?;
//! let (approx, detail) = dwt53::split_bands(&xn)?;
//! assert_eq!(approx.len(), 2);
//! assert_eq!(detail.len(), 2);
//! dwt53::iwt53(&mut xn)?;
//! # Ok::<(), dwt53::DwtError>(())
//! ```
//!
//! Multiple decomposition levels are obtained by transforming the approximation
//! band again, see [`split_bands_mut`].

mod dwt;
mod error;

pub use dwt::{fwt53, iwt53, lifting_params_53, split_bands, split_bands_mut, validate_len};
pub use error::DwtError;
