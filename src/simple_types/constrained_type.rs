//! Helper functions for generating constrained types
//!
//! Each function is generic over the newtype constructor, so the same
//! validation rules are shared by every string and integer type in the crate.

use super::error::ValidationError;

/// Creates a string type with a maximum length constraint
///
/// Surrounding whitespace is trimmed before validation.
///
/// # Errors
///
/// Returns [`ValidationError`] in the following cases:
/// - When the trimmed input is empty
/// - When the trimmed input exceeds the maximum length (in chars)
///
/// # Examples
///
/// ```
/// use shipping_zones::simple_types::ValidationError;
/// use shipping_zones::simple_types::constrained_type::create_string;
///
/// #[derive(Debug, PartialEq)]
/// struct Label(String);
///
/// fn create_label(value: &str) -> Result<Label, ValidationError> {
///     create_string("label", Label, 10, value)
/// }
///
/// assert_eq!(create_label("  express "), Ok(Label("express".to_string())));
/// assert!(create_label("   ").is_err());
/// assert!(create_label("much too long for ten").is_err());
/// ```
pub fn create_string<T, F>(
    field_name: &str,
    constructor: F,
    max_length: usize,
    value: &str,
) -> Result<T, ValidationError>
where
    F: FnOnce(String) -> T,
{
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::new(field_name, "Must not be empty"))
    } else if trimmed.chars().count() > max_length {
        Err(ValidationError::new(
            field_name,
            &format!("Must not be more than {max_length} chars"),
        ))
    } else {
        Ok(constructor(trimmed.to_string()))
    }
}

/// Creates an optional string type; blank input yields `None`
///
/// # Errors
///
/// Returns [`ValidationError`] when the trimmed input exceeds the maximum length.
pub fn create_string_option<T, F>(
    field_name: &str,
    constructor: F,
    max_length: usize,
    value: &str,
) -> Result<Option<T>, ValidationError>
where
    F: FnOnce(String) -> T,
{
    if value.trim().is_empty() {
        Ok(None)
    } else {
        create_string(field_name, constructor, max_length, value).map(Some)
    }
}

/// Creates a non-negative integer type from a signed input
///
/// Money values arrive as signed integers from JSON and YAML; anything below
/// zero is rejected here instead of wrapping.
///
/// # Errors
///
/// Returns [`ValidationError`] when the input is negative.
///
/// # Examples
///
/// ```
/// use shipping_zones::simple_types::constrained_type::create_non_negative;
///
/// let ok: Result<u64, _> = create_non_negative("total", |v| v, 150);
/// assert_eq!(ok, Ok(150));
///
/// let err: Result<u64, _> = create_non_negative("total", |v| v, -1);
/// assert!(err.is_err());
/// ```
pub fn create_non_negative<T, F>(
    field_name: &str,
    constructor: F,
    value: i64,
) -> Result<T, ValidationError>
where
    F: FnOnce(u64) -> T,
{
    u64::try_from(value)
        .map(constructor)
        .map_err(|_| ValidationError::new(field_name, "Must not be negative"))
}

/// Creates an integer type from a wider integer read from configuration
///
/// The target width `N` defines the accepted range.
///
/// # Errors
///
/// Returns [`ValidationError`] when the value does not fit in `N`.
///
/// # Examples
///
/// ```
/// use shipping_zones::simple_types::constrained_type::create_bounded;
///
/// let ok: Result<u32, _> = create_bounded("days", |days: u32| days, 7);
/// assert_eq!(ok, Ok(7));
///
/// let err: Result<u32, _> = create_bounded("days", |days: u32| days, -7);
/// assert!(err.is_err());
/// ```
pub fn create_bounded<N, T, F>(
    field_name: &str,
    constructor: F,
    value: i64,
) -> Result<T, ValidationError>
where
    N: TryFrom<i64>,
    F: FnOnce(N) -> T,
{
    N::try_from(value)
        .map(constructor)
        .map_err(|_| ValidationError::new(field_name, &format!("{value} is out of range")))
}
