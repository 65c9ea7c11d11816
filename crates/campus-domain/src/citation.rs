//! Bibliographic record types for the citation generator
//!
//! A CitationRecord is built transiently from form input on every keystroke
//! and never persisted. Source-specific fields live in the SourceFields sum
//! type so that a book record cannot carry a journal's page range.

use serde::{Deserialize, Serialize};

/// Citation style selected by the user
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum CitationStyle {
    Apa,
    Mla,
    Chicago,
}

impl CitationStyle {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            CitationStyle::Apa => "apa",
            CitationStyle::Mla => "mla",
            CitationStyle::Chicago => "chicago",
        }
    }

    /// Parse from a string (case-insensitive)
    pub fn parse(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "apa" => Some(CitationStyle::Apa),
            "mla" => Some(CitationStyle::Mla),
            "chicago" => Some(CitationStyle::Chicago),
            _ => None,
        }
    }
}

/// Category of cited work
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum SourceType {
    Book,
    Website,
    Journal,
    Newspaper,
}

impl SourceType {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Book => "book",
            SourceType::Website => "website",
            SourceType::Journal => "journal",
            SourceType::Newspaper => "newspaper",
        }
    }

    /// Parse from a string (case-insensitive)
    pub fn parse(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "book" => Some(SourceType::Book),
            "website" => Some(SourceType::Website),
            "journal" => Some(SourceType::Journal),
            "newspaper" => Some(SourceType::Newspaper),
            _ => None,
        }
    }
}

/// Source-specific fields, one variant per source type
///
/// Every field is optional: the form never enforces completeness, and the
/// formatter substitutes placeholder tokens for anything absent. An empty
/// string is treated the same as an absent field.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum SourceFields {
    Book {
        publisher: Option<String>,
    },
    Website {
        url: Option<String>,
        access_date: Option<String>,
    },
    Journal {
        journal_name: Option<String>,
        volume: Option<String>,
        issue: Option<String>,
        pages: Option<String>,
    },
    Newspaper,
}

impl SourceFields {
    /// The discriminant for this variant
    pub fn source_type(&self) -> SourceType {
        match self {
            SourceFields::Book { .. } => SourceType::Book,
            SourceFields::Website { .. } => SourceType::Website,
            SourceFields::Journal { .. } => SourceType::Journal,
            SourceFields::Newspaper => SourceType::Newspaper,
        }
    }
}

/// A bibliographic record as entered in the citation generator form
///
/// All values are free text; the year is deliberately not validated as
/// numeric, matching what the form accepts.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct CitationRecord {
    pub authors: String,
    pub title: String,
    pub year: String,
    pub source: SourceFields,
}

impl CitationRecord {
    /// Create a record from the three required form fields and a source variant
    pub fn new(
        authors: impl Into<String>,
        title: impl Into<String>,
        year: impl Into<String>,
        source: SourceFields,
    ) -> Self {
        Self {
            authors: authors.into(),
            title: title.into(),
            year: year.into(),
            source,
        }
    }

    /// Create a book record
    pub fn book(
        authors: impl Into<String>,
        title: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self::new(authors, title, year, SourceFields::Book { publisher: None })
    }

    /// Create a website record
    pub fn website(
        authors: impl Into<String>,
        title: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self::new(
            authors,
            title,
            year,
            SourceFields::Website {
                url: None,
                access_date: None,
            },
        )
    }

    /// Create a journal record
    pub fn journal(
        authors: impl Into<String>,
        title: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self::new(
            authors,
            title,
            year,
            SourceFields::Journal {
                journal_name: None,
                volume: None,
                issue: None,
                pages: None,
            },
        )
    }

    /// Create a newspaper record (no template exists for this source type)
    pub fn newspaper(
        authors: impl Into<String>,
        title: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self::new(authors, title, year, SourceFields::Newspaper)
    }

    /// Builder method to set the publisher on a book record (no-op otherwise)
    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        if let SourceFields::Book { publisher: p } = &mut self.source {
            *p = Some(publisher.into());
        }
        self
    }

    /// The discriminant of the source variant
    pub fn source_type(&self) -> SourceType {
        self.source.source_type()
    }

    /// Whether all three required fields are non-empty
    ///
    /// Callers treat an incomplete record as "not ready" and display no
    /// citation output.
    pub fn has_required_fields(&self) -> bool {
        !self.authors.is_empty() && !self.title.is_empty() && !self.year.is_empty()
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
