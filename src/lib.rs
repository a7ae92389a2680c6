// Gradebook - Core Library
// Exposes the grade container and report rendering for use by host layers
// (CLI binary, tests, or an embedding UI).

pub mod entities;
pub mod report;

// Re-export commonly used types
pub use entities::{GradeBook, GradeEntry, GRADE_NOT_FOUND};
pub use report::ReportCard;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
