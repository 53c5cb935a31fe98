//! Request validation utilities for consistent validation across handlers
//!
//! This module provides a `RequestValidation` trait and helper macros to
//! centralize validation logic and ensure consistent error messages.

use crate::error::ApiError;

/// Trait for validating request payloads
///
/// Implement this trait for all submission request types so every endpoint
/// rejects incomplete payloads the same way.
pub trait RequestValidation {
    /// Validates the request and returns an error if validation fails
    ///
    /// Returns `Ok(())` if validation passes, or `Err(ApiError)` with
    /// a validation error message if validation fails.
    fn validate(&self) -> Result<(), ApiError>;
}

/// Macro for validating fields with custom predicates
///
/// # Usage
///
/// ```rust,ignore
/// validate_field!(self.sex, !self.sex.trim().is_empty(), "Sex is required");
/// ```
#[macro_export]
macro_rules! validate_field {
    ($field:expr, $predicate:expr, $message:expr) => {
        if !$predicate {
            return Err($crate::error::ApiError::validation($message));
        }
    };
}

/// Macro for validating required fields (non-empty strings)
///
/// # Usage
///
/// ```rust,ignore
/// validate_required!(self.name, "Patient name is required");
/// ```
#[macro_export]
macro_rules! validate_required {
    ($field:expr, $message:expr) => {
        $crate::validate_field!($field, !$field.trim().is_empty(), $message);
    };
}

/// Macro for validating string length
///
/// # Usage
///
/// ```rust,ignore
/// validate_length!(self.name, 1, 255, "Name must be between 1 and 255 characters");
/// ```
#[macro_export]
macro_rules! validate_length {
    ($field:expr, $min:expr, $max:expr, $message:expr) => {
        let len = $field.len();
        $crate::validate_field!($field, len >= $min && len <= $max, $message);
    };
}

/// Macro for validating numeric ranges
///
/// # Usage
///
/// ```rust,ignore
/// validate_range!(self.age, 0, 150, "Age must be between 0 and 150");
/// ```
#[macro_export]
macro_rules! validate_range {
    ($field:expr, $min:expr, $max:expr, $message:expr) => {
        $crate::validate_field!($field, $field >= $min && $field <= $max, $message);
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestRequest {
        patient_name: String,
        age: i32,
    }

    impl RequestValidation for TestRequest {
        fn validate(&self) -> Result<(), ApiError> {
            validate_required!(self.patient_name, "Patient name is required");
            validate_length!(
                self.patient_name,
                1,
                255,
                "Patient name must be between 1 and 255 characters"
            );
            validate_range!(self.age, 0, 150, "Age must be between 0 and 150");
            Ok(())
        }
    }

    #[test]
    fn test_validation_success() {
        let request = TestRequest {
            patient_name: "Maria Santos".to_string(),
            age: 58,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validation_blank_name() {
        let request = TestRequest {
            patient_name: "   ".to_string(),
            age: 58,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_validation_age_out_of_range() {
        let request = TestRequest {
            patient_name: "Maria Santos".to_string(),
            age: 200,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_validation_negative_age() {
        let request = TestRequest {
            patient_name: "Maria Santos".to_string(),
            age: -1,
        };
        assert!(request.validate().is_err());
    }
}
