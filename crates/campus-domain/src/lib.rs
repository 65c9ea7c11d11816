//! Domain types shared across the campus front-end core
//!
//! This crate provides the canonical domain models for the learning-management
//! front end:
//! - Course: A catalog entry with enrollment state
//! - Instructor: The person teaching a course
//! - CitationRecord: A bibliographic record for the citation generator
//! - Validation: Advisory checks on course records

pub mod citation;
pub mod course;
pub mod instructor;
pub mod validation;

pub use citation::*;
pub use course::*;
pub use instructor::*;
pub use validation::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
