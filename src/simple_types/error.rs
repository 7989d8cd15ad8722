//! Validation error type definition

use thiserror::Error;

/// Struct representing a validation error
///
/// Shared by every constrained type. Holds the name of the offending field
/// and a human-readable message.
///
/// # Examples
///
/// ```
/// use shipping_zones::simple_types::ValidationError;
///
/// let error = ValidationError::new("orderTotal", "Must not be negative");
/// assert_eq!(error.field_name, "orderTotal");
/// assert_eq!(error.to_string(), "orderTotal: Must not be negative");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{field_name}: {message}")]
pub struct ValidationError {
    /// Name of the field where the error occurred
    pub field_name: String,
    /// Error message
    pub message: String,
}

impl ValidationError {
    /// Creates a new `ValidationError`
    #[must_use]
    pub fn new(field_name: &str, message: &str) -> Self {
        Self {
            field_name: field_name.to_string(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_validation_error_new() {
        let error = ValidationError::new("country", "Must not be empty");

        assert_eq!(error.field_name, "country");
        assert_eq!(error.message, "Must not be empty");
    }

    #[rstest]
    fn test_validation_error_display() {
        let error = ValidationError::new("country", "Must not be empty");

        assert_eq!(error.to_string(), "country: Must not be empty");
    }

    #[rstest]
    fn test_validation_error_error_trait() {
        let error = ValidationError::new("shippingCost", "Must not be negative");

        let _: &dyn std::error::Error = &error;
    }
}
