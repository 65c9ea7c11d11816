//! Combined filter parser for the catalog search box.
//!
//! Parses filter expressions that combine text search, subject, level,
//! credit count, and seat availability into a unified filter.
//!
//! # Syntax
//!
//! ```text
//! subject:cs level:beginner credits:4 open "exact phrase"
//! ```
//!
//! Tokens:
//! - `subject:cs` — subject slug (last one wins)
//! - `level:beginner`, `level:intermediate`, `level:advanced` — course level
//! - `credits:3` — exact credit count
//! - `open` — only courses with seats remaining
//! - Everything else — text search terms

use campus_domain::{Course, CourseLevel};

/// A combined filter for catalog courses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFilter {
    /// Text search terms (matched against code, title, description,
    /// instructor, tags)
    pub text_terms: Vec<String>,
    /// Subject filter
    pub subject: Option<String>,
    /// Level filter
    pub level: Option<CourseLevel>,
    /// Exact credit count filter
    pub credits: Option<u32>,
    /// Only courses with open seats
    pub open_only: bool,
}

impl CatalogFilter {
    /// Parse a filter expression string.
    pub fn parse(input: &str) -> Self {
        let mut filter = Self::default();

        // Tokenize: respect quoted strings
        let tokens = tokenize(input);

        for token in tokens {
            // Try subject filter
            if let Some(rest) = token.strip_prefix("subject:") {
                if !rest.is_empty() {
                    filter.subject = Some(rest.to_lowercase());
                    continue;
                }
            }

            // Try level filter
            if let Some(rest) = token.strip_prefix("level:") {
                if let Some(level) = CourseLevel::parse(rest) {
                    filter.level = Some(level);
                    continue;
                }
            }

            // Try credit filter
            if let Some(rest) = token.strip_prefix("credits:") {
                if let Ok(credits) = rest.parse::<u32>() {
                    filter.credits = Some(credits);
                    continue;
                }
            }

            // Seat availability
            if token.eq_ignore_ascii_case("open") {
                filter.open_only = true;
                continue;
            }

            // Everything else is a text search term
            filter.text_terms.push(token);
        }

        filter
    }

    /// Whether this filter is empty (matches everything).
    pub fn is_empty(&self) -> bool {
        self.text_terms.is_empty()
            && self.subject.is_none()
            && self.level.is_none()
            && self.credits.is_none()
            && !self.open_only
    }

    /// Test whether a course matches this filter.
    ///
    /// All text terms must match (implicit AND), case-insensitively, against
    /// the code, title, description, instructor name, or tags.
    pub fn matches(&self, course: &Course) -> bool {
        if let Some(subject) = &self.subject {
            if !course.subject.eq_ignore_ascii_case(subject) {
                return false;
            }
        }

        if let Some(level) = self.level {
            if course.level != level {
                return false;
            }
        }

        if let Some(credits) = self.credits {
            if course.credits != credits {
                return false;
            }
        }

        if self.open_only && !course.has_open_seats() {
            return false;
        }

        self.text_terms.iter().all(|term| {
            let term = term.to_lowercase();
            course.code.to_lowercase().contains(&term)
                || course.title.to_lowercase().contains(&term)
                || course.description.to_lowercase().contains(&term)
                || course.instructor.name.to_lowercase().contains(&term)
                || course.tags.iter().any(|t| t.to_lowercase().contains(&term))
        })
    }
}

/// Tokenize a filter string, respecting quoted strings.
fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in input.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                if !in_quotes && !current.is_empty() {
                    tokens.push(current.clone());
                    current.clear();
                }
            }
            ' ' if !in_quotes => {
                if !current.is_empty() {
                    tokens.push(current.clone());
                    current.clear();
                }
            }
            _ => {
                current.push(c);
            }
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
