//! Citation formatting
//!
//! This crate turns a CitationRecord and a CitationStyle into a single
//! formatted citation string. The formatter is pure: no I/O, no internal
//! state, and no failure mode beyond an empty-string result for incomplete
//! records or source types without a template.

mod formatter;
mod placeholder;

pub use formatter::format_citation;
pub use placeholder::{
    ACCESS_DATE_PLACEHOLDER, ISSUE_PLACEHOLDER, JOURNAL_NAME_PLACEHOLDER, PAGES_PLACEHOLDER,
    URL_PLACEHOLDER, VOLUME_PLACEHOLDER,
};

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
