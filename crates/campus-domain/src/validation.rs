//! Validation for course records

use super::Course;
use serde::{Deserialize, Serialize};

/// Severity of a validation error
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

/// A validation error or warning
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub severity: ValidationSeverity,
}

/// Validate a course and return errors/warnings
///
/// Advisory only: nothing refuses to construct an invalid course, the UI
/// surfaces these next to the edit form.
pub fn validate_course(course: &Course) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // Required fields
    if course.code.is_empty() {
        errors.push(ValidationError {
            field: "code".to_string(),
            message: "Course code is required".to_string(),
            severity: ValidationSeverity::Error,
        });
    }

    if course.title.is_empty() {
        errors.push(ValidationError {
            field: "title".to_string(),
            message: "Title is required".to_string(),
            severity: ValidationSeverity::Error,
        });
    }

    // Warnings for recommended fields
    if course.description.is_empty() {
        errors.push(ValidationError {
            field: "description".to_string(),
            message: "A description is recommended".to_string(),
            severity: ValidationSeverity::Warning,
        });
    }

    if course.subject.is_empty() {
        errors.push(ValidationError {
            field: "subject".to_string(),
            message: "A subject is recommended".to_string(),
            severity: ValidationSeverity::Warning,
        });
    }

    if course.capacity == 0 {
        errors.push(ValidationError {
            field: "capacity".to_string(),
            message: "Capacity is zero; the course cannot accept enrollments".to_string(),
            severity: ValidationSeverity::Warning,
        });
    }

    if course.enrolled > course.capacity {
        errors.push(ValidationError {
            field: "enrolled".to_string(),
            message: "Enrollment exceeds capacity".to_string(),
            severity: ValidationSeverity::Warning,
        });
    }

    errors
}
