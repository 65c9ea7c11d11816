//! The catalog browse pipeline: filter, then sort.

use campus_domain::Course;

use crate::filter::CatalogFilter;
use crate::sort::{sort_courses, CourseSort};

/// Apply a filter and sort to a course list, leaving the input untouched.
pub fn browse(courses: &[Course], filter: &CatalogFilter, sort: &CourseSort) -> Vec<Course> {
    let mut matched: Vec<Course> = courses
        .iter()
        .filter(|c| filter.matches(c))
        .cloned()
        .collect();
    sort_courses(&mut matched, sort);
    matched
}
