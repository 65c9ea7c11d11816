//! Teacher-mode enrollment summaries.

use campus_domain::Course;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Course count for one subject
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SubjectCount {
    pub subject: String,
    pub courses: u32,
}

/// Aggregate enrollment view for the teacher-mode dashboard
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CatalogSummary {
    pub total_courses: u32,
    pub total_enrolled: u32,
    pub total_capacity: u32,
    pub full_courses: u32,
    /// Per-subject counts, sorted by subject slug
    pub by_subject: Vec<SubjectCount>,
}

impl CatalogSummary {
    /// Seats filled as a fraction of capacity, 0.0 when capacity is zero
    pub fn utilization(&self) -> f64 {
        if self.total_capacity == 0 {
            0.0
        } else {
            f64::from(self.total_enrolled) / f64::from(self.total_capacity)
        }
    }
}

/// Summarize a course list for the teacher-mode dashboard
pub fn summarize(courses: &[Course]) -> CatalogSummary {
    let mut by_subject: BTreeMap<String, u32> = BTreeMap::new();
    let mut total_enrolled = 0;
    let mut total_capacity = 0;
    let mut full_courses = 0;

    for course in courses {
        total_enrolled += course.enrolled;
        total_capacity += course.capacity;
        if !course.has_open_seats() {
            full_courses += 1;
        }
        *by_subject.entry(course.subject.clone()).or_insert(0) += 1;
    }

    CatalogSummary {
        total_courses: courses.len() as u32,
        total_enrolled,
        total_capacity,
        full_courses,
        by_subject: by_subject
            .into_iter()
            .map(|(subject, count)| SubjectCount {
                subject,
                courses: count,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_domain::Instructor;

    fn course(code: &str, subject: &str, capacity: u32, enrolled: u32) -> Course {
        Course::new(code, code, Instructor::new("Staff"))
            .with_subject(subject)
            .with_enrollment(capacity, enrolled)
    }

    #[test]
    fn test_summarize_totals() {
        let courses = vec![
            course("CS101", "cs", 30, 12),
            course("CS301", "cs", 20, 20),
            course("MATH210", "math", 25, 10),
        ];
        let summary = summarize(&courses);
        assert_eq!(summary.total_courses, 3);
        assert_eq!(summary.total_enrolled, 42);
        assert_eq!(summary.total_capacity, 75);
        assert_eq!(summary.full_courses, 1);
    }

    #[test]
    fn test_summarize_by_subject_sorted() {
        let courses = vec![
            course("MATH210", "math", 25, 10),
            course("CS101", "cs", 30, 12),
            course("CS301", "cs", 20, 20),
        ];
        let summary = summarize(&courses);
        assert_eq!(
            summary.by_subject,
            vec![
                SubjectCount {
                    subject: "cs".to_string(),
                    courses: 2
                },
                SubjectCount {
                    subject: "math".to_string(),
                    courses: 1
                },
            ]
        );
    }

    #[test]
    fn test_utilization() {
        let summary = summarize(&[course("CS101", "cs", 30, 15)]);
        assert!((summary.utilization() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_utilization_zero_capacity() {
        let summary = summarize(&[]);
        assert_eq!(summary.utilization(), 0.0);
    }
}
