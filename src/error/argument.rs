use thiserror::Error;

/// Error returned when a flat key/value list cannot be split into pairs.
///
/// # Example
/// ```
/// use entity_error::error::argument::InvalidArgumentError;
///
/// let err = InvalidArgumentError::new(3);
/// assert_eq!(
///     err.to_string(),
///     "Invalid entries. The array length should be even, representing key-value pairs."
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid entries. The array length should be even, representing key-value pairs.")]
pub struct InvalidArgumentError {
    len: usize,
}

impl InvalidArgumentError {
    pub fn new(len: usize) -> Self {
        Self { len }
    }

    /// Length of the rejected list.
    pub fn length(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_does_not_include_length() {
        let err = InvalidArgumentError::new(5);
        assert!(!err.to_string().contains('5'));
        assert_eq!(err.length(), 5);
    }

    #[test]
    fn converts_into_anyhow() {
        let err: anyhow::Error = InvalidArgumentError::new(1).into();
        assert!(err.downcast_ref::<InvalidArgumentError>().is_some());
    }
}
