// Entity Models
// "Identity persists, values change"
//
// Each entity has:
// - Stable identity (UUID) that NEVER changes
// - Values that change over time (subject text, grade)
// - A registry (the GradeBook) for normalization and lookups

pub mod grade;

pub use grade::{GradeBook, GradeEntry, GRADE_NOT_FOUND};
