use std::error;
use std::fmt;

/// Error values that may be returned from the wavelet transform functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DwtError {
    /// Invalid signal length.
    ///
    /// The lifting steps and the band split both assume the signal length is a
    /// positive power of two. Any other length, including an empty signal, is
    /// rejected before the buffer is touched.
    InvalidLength { len: usize },
}

impl error::Error for DwtError {}
impl fmt::Display for DwtError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidLength { len } => {
                write!(f, "invalid signal length {}: must be a power of two", len)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_length_display() {
        let err = DwtError::InvalidLength { len: 6 };
        assert_eq!(
            err.to_string(),
            "invalid signal length 6: must be a power of two"
        );
    }

    #[test]
    fn test_boxes_as_std_error() {
        let boxed: Box<dyn error::Error + Send + Sync> = DwtError::InvalidLength { len: 0 }.into();
        assert_eq!(
            boxed.to_string(),
            "invalid signal length 0: must be a power of two"
        );
    }
}
