//! Sort state for the catalog list.

use campus_domain::Course;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Field the catalog list is sorted by
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Code,
    Credits,
    Level,
    Enrollment,
}

impl SortKey {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Code => "code",
            SortKey::Credits => "credits",
            SortKey::Level => "level",
            SortKey::Enrollment => "enrollment",
        }
    }

    /// Parse from a string (case-insensitive)
    pub fn parse(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "title" => Some(SortKey::Title),
            "code" => Some(SortKey::Code),
            "credits" => Some(SortKey::Credits),
            "level" => Some(SortKey::Level),
            "enrollment" => Some(SortKey::Enrollment),
            _ => None,
        }
    }
}

/// Sort direction
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Sort state for the catalog list
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourseSort {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for CourseSort {
    fn default() -> Self {
        Self {
            key: SortKey::Title,
            direction: SortDirection::Ascending,
        }
    }
}

impl CourseSort {
    /// Create an ascending sort on the given key
    pub fn ascending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    /// Create a descending sort on the given key
    pub fn descending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Descending,
        }
    }

    /// Compare two courses under this sort
    pub fn compare(&self, a: &Course, b: &Course) -> Ordering {
        let ordering = match self.key {
            SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortKey::Code => a.code.to_lowercase().cmp(&b.code.to_lowercase()),
            SortKey::Credits => a.credits.cmp(&b.credits),
            SortKey::Level => a.level.cmp(&b.level),
            SortKey::Enrollment => a.enrolled.cmp(&b.enrolled),
        };
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Sort courses in place, stably, under the given sort state
pub fn sort_courses(courses: &mut [Course], sort: &CourseSort) {
    courses.sort_by(|a, b| sort.compare(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_domain::{CourseLevel, Instructor};

    fn course(code: &str, title: &str, credits: u32, level: CourseLevel) -> Course {
        Course::new(code, title, Instructor::new("Staff"))
            .with_credits(credits)
            .with_level(level)
    }

    #[test]
    fn sort_by_title_case_insensitive() {
        let mut courses = vec![
            course("B", "zeta", 3, CourseLevel::Beginner),
            course("A", "Alpha", 3, CourseLevel::Beginner),
        ];
        sort_courses(&mut courses, &CourseSort::default());
        assert_eq!(courses[0].title, "Alpha");
        assert_eq!(courses[1].title, "zeta");
    }

    #[test]
    fn sort_by_credits_descending() {
        let mut courses = vec![
            course("A", "a", 2, CourseLevel::Beginner),
            course("B", "b", 5, CourseLevel::Beginner),
            course("C", "c", 3, CourseLevel::Beginner),
        ];
        sort_courses(&mut courses, &CourseSort::descending(SortKey::Credits));
        let credits: Vec<u32> = courses.iter().map(|c| c.credits).collect();
        assert_eq!(credits, vec![5, 3, 2]);
    }

    #[test]
    fn sort_by_level_uses_ordinal() {
        let mut courses = vec![
            course("A", "a", 3, CourseLevel::Advanced),
            course("B", "b", 3, CourseLevel::Beginner),
            course("C", "c", 3, CourseLevel::Intermediate),
        ];
        sort_courses(&mut courses, &CourseSort::ascending(SortKey::Level));
        assert_eq!(courses[0].level, CourseLevel::Beginner);
        assert_eq!(courses[2].level, CourseLevel::Advanced);
    }

    #[test]
    fn sort_is_stable_on_ties() {
        let mut courses = vec![
            course("B", "Same", 3, CourseLevel::Beginner),
            course("A", "Same", 3, CourseLevel::Beginner),
        ];
        sort_courses(&mut courses, &CourseSort::ascending(SortKey::Title));
        // Equal titles keep their original order
        assert_eq!(courses[0].code, "B");
        assert_eq!(courses[1].code, "A");
    }

    #[test]
    fn sort_key_parse_round_trip() {
        for key in [
            SortKey::Title,
            SortKey::Code,
            SortKey::Credits,
            SortKey::Level,
            SortKey::Enrollment,
        ] {
            assert_eq!(SortKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(SortKey::parse("popularity"), None);
    }
}
