//! Builtin demo catalog.
//!
//! Demo mode runs the catalog screens against a compiled-in sample catalog
//! seeded into the local store, so the UI works with no backend attached.
//! IDs are fixed strings so bookmarks and recently-viewed entries survive a
//! reload.

use campus_domain::{Course, CourseLevel, Instructor};

use crate::store::{KeyValueStore, StoreError};

/// Store key for the demo catalog
pub const DEMO_CATALOG_KEY: &str = "campus.demo.catalog";

/// Build one demo course with a fixed ID
fn demo_course(id: &str, code: &str, title: &str, instructor: Instructor) -> Course {
    let mut course = Course::new(code, title, instructor);
    course.id = id.to_string();
    course
}

/// Returns the builtin demo catalog
pub fn demo_courses() -> Vec<Course> {
    vec![
        demo_course(
            "demo-cs101",
            "CS101",
            "Intro to Programming",
            Instructor::new("Grace Hopper").with_department("Computer Science"),
        )
        .with_description("Variables, control flow, and first programs in Python.")
        .with_subject("cs")
        .with_level(CourseLevel::Beginner)
        .with_credits(4)
        .with_enrollment(30, 18)
        .with_tag("programming")
        .with_tag("python"),
        demo_course(
            "demo-cs205",
            "CS205",
            "Data Structures",
            Instructor::new("Barbara Liskov").with_department("Computer Science"),
        )
        .with_description("Lists, trees, hash tables, and the trade-offs between them.")
        .with_subject("cs")
        .with_level(CourseLevel::Intermediate)
        .with_credits(4)
        .with_enrollment(25, 25)
        .with_tag("programming"),
        demo_course(
            "demo-cs301",
            "CS301",
            "Compilers",
            Instructor::new("John Backus").with_department("Computer Science"),
        )
        .with_description("Lexing, parsing, and code generation for a small language.")
        .with_subject("cs")
        .with_level(CourseLevel::Advanced)
        .with_credits(3)
        .with_enrollment(20, 11)
        .with_tag("systems"),
        demo_course(
            "demo-math210",
            "MATH210",
            "Graph Theory",
            Instructor::new("Paul Erdos").with_department("Mathematics"),
        )
        .with_description("Paths, cycles, colorings, and extremal problems.")
        .with_subject("math")
        .with_level(CourseLevel::Intermediate)
        .with_credits(3)
        .with_enrollment(25, 9)
        .with_tag("proofs"),
        demo_course(
            "demo-math110",
            "MATH110",
            "Calculus I",
            Instructor::new("Emmy Noether").with_department("Mathematics"),
        )
        .with_description("Limits, derivatives, and integrals of one variable.")
        .with_subject("math")
        .with_level(CourseLevel::Beginner)
        .with_credits(4)
        .with_enrollment(60, 48),
        demo_course(
            "demo-hist150",
            "HIST150",
            "History of Science",
            Instructor::new("Thomas Kuhn").with_department("History"),
        )
        .with_description("From natural philosophy to modern research institutions.")
        .with_subject("history")
        .with_level(CourseLevel::Beginner)
        .with_credits(3)
        .with_enrollment(40, 22)
        .with_tag("writing-intensive"),
        demo_course(
            "demo-bio220",
            "BIO220",
            "Genetics",
            Instructor::new("Barbara McClintock").with_department("Biology"),
        )
        .with_description("Mendelian inheritance through modern genomics.")
        .with_subject("biology")
        .with_level(CourseLevel::Intermediate)
        .with_credits(4)
        .with_enrollment(35, 35)
        .with_tag("lab"),
    ]
}

/// Seed the demo catalog into the store if nothing is there yet.
///
/// Idempotent: a returning demo user keeps whatever state has accumulated.
/// Returns true when the catalog was written.
pub fn seed_demo(store: &dyn KeyValueStore) -> Result<bool, StoreError> {
    if store.get(DEMO_CATALOG_KEY)?.is_some() {
        return Ok(false);
    }
    let json = serde_json::to_string(&demo_courses())?;
    store.set(DEMO_CATALOG_KEY, json)?;
    Ok(true)
}

/// Load the demo catalog from the store, if seeded.
pub fn load_demo(store: &dyn KeyValueStore) -> Result<Option<Vec<Course>>, StoreError> {
    match store.get(DEMO_CATALOG_KEY)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}
