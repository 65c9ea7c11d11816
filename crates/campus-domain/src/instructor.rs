//! Instructor representation

use serde::{Deserialize, Serialize};

/// The person teaching a course
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Instructor {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub department: Option<String>,
}

impl Instructor {
    /// Create a new instructor with just a display name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            email: None,
            department: None,
        }
    }

    /// Builder method to add an email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Builder method to add a department
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }
}
