//! Placeholder tokens for absent optional fields
//!
//! When an optional field is missing the formatter substitutes one of these
//! fixed tokens so the output stays a well-formed sentence. Exported so the
//! UI can grey the tokens out in the preview.

/// Substituted for a missing website URL
pub const URL_PLACEHOLDER: &str = "URL";

/// Substituted for a missing access date
pub const ACCESS_DATE_PLACEHOLDER: &str = "Day Month Year";

/// Substituted for a missing journal name
pub const JOURNAL_NAME_PLACEHOLDER: &str = "Journal Name";

/// Substituted for a missing volume number
pub const VOLUME_PLACEHOLDER: &str = "Volume";

/// Substituted for a missing issue number
pub const ISSUE_PLACEHOLDER: &str = "Issue";

/// Substituted for a missing page range
pub const PAGES_PLACEHOLDER: &str = "Pages";
