//! Course domain model

use super::Instructor;
use serde::{Deserialize, Serialize};

/// Difficulty level of a course
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseLevel::Beginner => "beginner",
            CourseLevel::Intermediate => "intermediate",
            CourseLevel::Advanced => "advanced",
        }
    }

    /// Parse from a string (case-insensitive)
    pub fn parse(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "beginner" => Some(CourseLevel::Beginner),
            "intermediate" => Some(CourseLevel::Intermediate),
            "advanced" => Some(CourseLevel::Advanced),
            _ => None,
        }
    }
}

/// A course in the catalog
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Course {
    pub id: String,
    pub code: String,
    pub title: String,
    pub description: String,
    pub subject: String,
    pub level: CourseLevel,
    pub credits: u32,
    pub instructor: Instructor,
    pub capacity: u32,
    pub enrolled: u32,
    pub tags: Vec<String>,
    pub created_at: Option<String>, // ISO 8601
}

impl Course {
    /// Create a new course with required fields
    pub fn new(code: impl Into<String>, title: impl Into<String>, instructor: Instructor) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            code: code.into(),
            title: title.into(),
            description: String::new(),
            subject: String::new(),
            level: CourseLevel::Beginner,
            credits: 0,
            instructor,
            capacity: 0,
            enrolled: 0,
            tags: Vec::new(),
            created_at: None,
        }
    }

    /// Builder method to set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder method to set the subject slug
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Builder method to set the level
    pub fn with_level(mut self, level: CourseLevel) -> Self {
        self.level = level;
        self
    }

    /// Builder method to set the credit count
    pub fn with_credits(mut self, credits: u32) -> Self {
        self.credits = credits;
        self
    }

    /// Builder method to set capacity and current enrollment
    pub fn with_enrollment(mut self, capacity: u32, enrolled: u32) -> Self {
        self.capacity = capacity;
        self.enrolled = enrolled;
        self
    }

    /// Builder method to add a tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Seats still available, saturating at zero when over-enrolled
    pub fn seats_remaining(&self) -> u32 {
        self.capacity.saturating_sub(self.enrolled)
    }

    /// Whether the course can still accept enrollments
    pub fn has_open_seats(&self) -> bool {
        self.seats_remaining() > 0
    }

    /// Serialize to JSON for cross-app transfer
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
