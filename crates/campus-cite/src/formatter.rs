//! Citation formatting module
//!
//! Dispatches on the (style, source type) grid. Nine cells have templates;
//! newspaper sources have none and fall through to an empty string. The
//! publisher clause on book citations is omitted entirely when absent,
//! while website and journal fields always render with a placeholder token
//! standing in for anything missing.

use campus_domain::{CitationRecord, CitationStyle, SourceFields};

use crate::placeholder::{
    ACCESS_DATE_PLACEHOLDER, ISSUE_PLACEHOLDER, JOURNAL_NAME_PLACEHOLDER, PAGES_PLACEHOLDER,
    URL_PLACEHOLDER, VOLUME_PLACEHOLDER,
};

/// Format a citation record in the given style
///
/// Returns an empty string when any of the required fields (authors, title,
/// year) is empty, or when the source type has no template.
pub fn format_citation(record: &CitationRecord, style: CitationStyle) -> String {
    if !record.has_required_fields() {
        return String::new();
    }

    match (style, &record.source) {
        (CitationStyle::Apa, SourceFields::Book { publisher }) => apa_book(record, publisher),
        (CitationStyle::Apa, SourceFields::Website { url, access_date }) => {
            apa_website(record, url, access_date)
        }
        (CitationStyle::Apa, SourceFields::Journal { journal_name, volume, issue, pages }) => {
            apa_journal(record, journal_name, volume, issue, pages)
        }
        (CitationStyle::Mla, SourceFields::Book { publisher }) => {
            author_first_book(record, publisher)
        }
        (CitationStyle::Mla, SourceFields::Website { url, access_date }) => {
            mla_website(record, url, access_date)
        }
        (CitationStyle::Mla, SourceFields::Journal { journal_name, volume, issue, pages }) => {
            mla_journal(record, journal_name, volume, issue, pages)
        }
        (CitationStyle::Chicago, SourceFields::Book { publisher }) => {
            author_first_book(record, publisher)
        }
        (CitationStyle::Chicago, SourceFields::Website { url, access_date }) => {
            chicago_website(record, url, access_date)
        }
        (CitationStyle::Chicago, SourceFields::Journal { journal_name, volume, issue, pages }) => {
            chicago_journal(record, journal_name, volume, issue, pages)
        }
        // No template exists for newspaper sources
        (_, SourceFields::Newspaper) => String::new(),
    }
}

/// A field value if present and non-empty
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// A field value, or its placeholder token when absent
fn or_placeholder<'a>(value: &'a Option<String>, placeholder: &'a str) -> &'a str {
    present(value).unwrap_or(placeholder)
}

/// The optional ". {publisher}" clause; fully absent when publisher is empty
fn publisher_clause(publisher: &Option<String>) -> String {
    match present(publisher) {
        Some(p) => format!(". {}", p),
        None => String::new(),
    }
}

/// Author segment with a terminating period, without doubling one the input
/// already carries ("Doe, A." stays "Doe, A.")
fn author_lead(authors: &str) -> String {
    if authors.ends_with('.') {
        authors.to_string()
    } else {
        format!("{}.", authors)
    }
}

fn apa_book(record: &CitationRecord, publisher: &Option<String>) -> String {
    format!(
        "{} ({}). *{}*{}.",
        record.authors,
        record.year,
        record.title,
        publisher_clause(publisher)
    )
}

fn apa_website(
    record: &CitationRecord,
    url: &Option<String>,
    access_date: &Option<String>,
) -> String {
    format!(
        "{} ({}). *{}*. Retrieved {}, from {}",
        record.authors,
        record.year,
        record.title,
        or_placeholder(access_date, ACCESS_DATE_PLACEHOLDER),
        or_placeholder(url, URL_PLACEHOLDER)
    )
}

fn apa_journal(
    record: &CitationRecord,
    journal_name: &Option<String>,
    volume: &Option<String>,
    issue: &Option<String>,
    pages: &Option<String>,
) -> String {
    format!(
        "{} ({}). {}. *{}*, *{}*({}), {}.",
        record.authors,
        record.year,
        record.title,
        or_placeholder(journal_name, JOURNAL_NAME_PLACEHOLDER),
        or_placeholder(volume, VOLUME_PLACEHOLDER),
        or_placeholder(issue, ISSUE_PLACEHOLDER),
        or_placeholder(pages, PAGES_PLACEHOLDER)
    )
}

/// MLA and Chicago share the author-first book template
fn author_first_book(record: &CitationRecord, publisher: &Option<String>) -> String {
    format!(
        "{} *{}*{}, {}.",
        author_lead(&record.authors),
        record.title,
        publisher_clause(publisher),
        record.year
    )
}

fn mla_website(
    record: &CitationRecord,
    url: &Option<String>,
    access_date: &Option<String>,
) -> String {
    format!(
        "{} \"{}.\" {}. Web. {}. <{}>.",
        author_lead(&record.authors),
        record.title,
        record.year,
        or_placeholder(access_date, ACCESS_DATE_PLACEHOLDER),
        or_placeholder(url, URL_PLACEHOLDER)
    )
}

fn mla_journal(
    record: &CitationRecord,
    journal_name: &Option<String>,
    volume: &Option<String>,
    issue: &Option<String>,
    pages: &Option<String>,
) -> String {
    format!(
        "{} \"{}.\" *{}* {}.{} ({}): {}. Print.",
        author_lead(&record.authors),
        record.title,
        or_placeholder(journal_name, JOURNAL_NAME_PLACEHOLDER),
        or_placeholder(volume, VOLUME_PLACEHOLDER),
        or_placeholder(issue, ISSUE_PLACEHOLDER),
        record.year,
        or_placeholder(pages, PAGES_PLACEHOLDER)
    )
}

fn chicago_website(
    record: &CitationRecord,
    url: &Option<String>,
    access_date: &Option<String>,
) -> String {
    format!(
        "{} \"{}.\" Accessed {}. {}.",
        author_lead(&record.authors),
        record.title,
        or_placeholder(access_date, ACCESS_DATE_PLACEHOLDER),
        or_placeholder(url, URL_PLACEHOLDER)
    )
}

fn chicago_journal(
    record: &CitationRecord,
    journal_name: &Option<String>,
    volume: &Option<String>,
    issue: &Option<String>,
    pages: &Option<String>,
) -> String {
    format!(
        "{} \"{}.\" *{}* {}, no. {} ({}): {}.",
        author_lead(&record.authors),
        record.title,
        or_placeholder(journal_name, JOURNAL_NAME_PLACEHOLDER),
        or_placeholder(volume, VOLUME_PLACEHOLDER),
        or_placeholder(issue, ISSUE_PLACEHOLDER),
        record.year,
        or_placeholder(pages, PAGES_PLACEHOLDER)
    )
}

// FFI exports
#[cfg(feature = "uniffi")]
mod ffi {
    use super::*;

    /// Format a citation record in the given style
    #[uniffi::export]
    pub fn render_citation(record: CitationRecord, style: CitationStyle) -> String {
        format_citation(&record, style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_domain::SourceFields;

    #[test]
    fn test_apa_book_with_publisher() {
        let record = CitationRecord::book("Smith, J.", "Learning Systems", "2020")
            .with_publisher("Acme Press");
        assert_eq!(
            format_citation(&record, CitationStyle::Apa),
            "Smith, J. (2020). *Learning Systems*. Acme Press."
        );
    }

    #[test]
    fn test_apa_book_without_publisher() {
        // No dangling ". ." artifact: the publisher clause is fully absent
        let record = CitationRecord::book("Ng, P.", "Data Structures", "2018");
        assert_eq!(
            format_citation(&record, CitationStyle::Apa),
            "Ng, P. (2018). *Data Structures*."
        );
    }

    #[test]
    fn test_empty_publisher_same_as_absent() {
        let record =
            CitationRecord::book("Ng, P.", "Data Structures", "2018").with_publisher("");
        assert_eq!(
            format_citation(&record, CitationStyle::Apa),
            "Ng, P. (2018). *Data Structures*."
        );
    }

    #[test]
    fn test_mla_website_placeholders() {
        let record = CitationRecord::website("Doe, A.", "Intro to Web", "2019");
        assert_eq!(
            format_citation(&record, CitationStyle::Mla),
            "Doe, A. \"Intro to Web.\" 2019. Web. Day Month Year. <URL>."
        );
    }

    #[test]
    fn test_apa_website_placeholders() {
        let record = CitationRecord::website("Doe, A.", "Intro to Web", "2019");
        let output = format_citation(&record, CitationStyle::Apa);
        assert_eq!(
            output,
            "Doe, A. (2019). *Intro to Web*. Retrieved Day Month Year, from URL"
        );
        assert!(output.contains(crate::ACCESS_DATE_PLACEHOLDER));
        assert!(output.contains(crate::URL_PLACEHOLDER));
    }

    #[test]
    fn test_chicago_journal() {
        let record = CitationRecord::new(
            "Lee, K.",
            "Graph Theory Advances",
            "2021",
            SourceFields::Journal {
                journal_name: Some("J. Math".to_string()),
                volume: Some("12".to_string()),
                issue: Some("3".to_string()),
                pages: Some("45-60".to_string()),
            },
        );
        assert_eq!(
            format_citation(&record, CitationStyle::Chicago),
            "Lee, K. \"Graph Theory Advances.\" *J. Math* 12, no. 3 (2021): 45-60."
        );
    }

    #[test]
    fn test_author_period_not_doubled() {
        // "Doe, A." already ends with a period; the template must not add another
        let record = CitationRecord::website("Doe, A.", "Intro to Web", "2019");
        let output = format_citation(&record, CitationStyle::Mla);
        assert!(output.starts_with("Doe, A. \""));
        assert!(!output.contains(".."));
    }

    #[test]
    fn test_author_without_trailing_period_gets_one() {
        let record = CitationRecord::website("Doe", "Intro to Web", "2019");
        assert_eq!(
            format_citation(&record, CitationStyle::Mla),
            "Doe. \"Intro to Web.\" 2019. Web. Day Month Year. <URL>."
        );
    }

    #[test]
    fn test_missing_required_field_yields_empty() {
        let record = CitationRecord::book("", "Learning Systems", "2020");
        assert_eq!(format_citation(&record, CitationStyle::Apa), "");
        assert_eq!(format_citation(&record, CitationStyle::Mla), "");
        assert_eq!(format_citation(&record, CitationStyle::Chicago), "");
    }

    #[test]
    fn test_newspaper_has_no_template() {
        let record = CitationRecord::newspaper("Smith, J.", "Local Headline", "2022");
        assert_eq!(format_citation(&record, CitationStyle::Apa), "");
        assert_eq!(format_citation(&record, CitationStyle::Mla), "");
        assert_eq!(format_citation(&record, CitationStyle::Chicago), "");
    }

    #[test]
    fn test_deterministic() {
        let record = CitationRecord::website("Doe, A.", "Intro to Web", "2019");
        let first = format_citation(&record, CitationStyle::Chicago);
        let second = format_citation(&record, CitationStyle::Chicago);
        assert_eq!(first, second);
    }
}
