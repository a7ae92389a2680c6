// 📒 Grade Entity - Subject/grade pairs with stable identity
//
// "Subject name is a VALUE (can change via rename), Entry UUID is IDENTITY (never changes)"
//
// Problem solved:
// - "Math", "MATH", "math" → all the same subject entry
// - Insertion order preserved for rendering the report card
// - Renaming a subject doesn't break the entry's identity or position

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel returned by [`GradeBook::lookup`] when a subject is absent.
///
/// This collides with a legitimate grade of -1.0; callers that need to tell
/// the two apart should use [`GradeBook::get`] instead.
pub const GRADE_NOT_FOUND: f64 = -1.0;

// ============================================================================
// GRADE ENTRY
// ============================================================================

/// One (subject, grade) pair held by a [`GradeBook`].
///
/// Identity: UUID (never changes)
/// Values: subject text, grade, timestamps (can change over time)
///
/// The subject text is stored exactly as entered; only comparison is
/// case-insensitive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeEntry {
    /// Stable identity (UUID) - survives renames
    pub id: String,

    /// Subject name as the caller wrote it (e.g., "History")
    pub subject: String,

    /// Numeric grade, no declared range
    pub grade: f64,

    /// Bumped on every grade change or rename
    pub version: i64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GradeEntry {
    /// Create a new entry at version 1
    pub fn new(subject: impl Into<String>, grade: f64) -> Self {
        let now = Utc::now();

        GradeEntry {
            id: uuid::Uuid::new_v4().to_string(),
            subject: subject.into(),
            grade,
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if this entry is identified by `subject` (case-insensitive)
    pub fn matches(&self, subject: &str) -> bool {
        normalize_subject(&self.subject) == normalize_subject(subject)
    }

    fn touch(&mut self) {
        self.version += 1;
        self.updated_at = Utc::now();
    }
}

// ============================================================================
// GRADE BOOK
// ============================================================================

/// Insertion-ordered collection of grades, unique by subject.
///
/// The only invariant: no two entries share a subject under case-insensitive
/// comparison. Everything else (count, render order) derives from the
/// sequence itself.
///
/// All operations are total: absence is signaled through a `bool`, a
/// sentinel, or an `Option` - never a panic or an error.
///
/// Not synchronized: the book is meant to live on a single thread (the host
/// UI thread). Concurrent use from multiple threads requires external
/// synchronization, e.g. wrapping the whole book in a `Mutex`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct GradeBook {
    entries: Vec<GradeEntry>,
}

impl GradeBook {
    /// Create a new empty grade book
    pub fn new() -> Self {
        GradeBook {
            entries: Vec::new(),
        }
    }

    /// Add a grade for a new subject.
    ///
    /// Returns `true` if the entry was appended, or `false` (no mutation)
    /// when the subject already exists under any case variant.
    pub fn add(&mut self, subject: &str, grade: f64) -> bool {
        if self.position(subject).is_some() {
            return false;
        }

        self.entries.push(GradeEntry::new(subject, grade));
        true
    }

    /// Replace the grade of an existing subject, keeping its text and
    /// position. Returns `false` and leaves the book unchanged when the
    /// subject does not exist.
    pub fn modify(&mut self, subject: &str, new_grade: f64) -> bool {
        match self.position(subject) {
            Some(n) => {
                let entry = &mut self.entries[n];
                entry.grade = new_grade;
                entry.touch();
                true
            }
            None => false,
        }
    }

    /// Remove a subject's entry. Returns `true` iff the subject existed.
    pub fn delete(&mut self, subject: &str) -> bool {
        match self.position(subject) {
            Some(n) => {
                self.entries.remove(n);
                true
            }
            None => false,
        }
    }

    /// Rename a subject, preserving its grade, identity and position.
    ///
    /// Returns `false` when `subject` is absent or when `new_subject`
    /// collides with a different entry. Renaming an entry to a case variant
    /// of itself is allowed and updates the stored text.
    pub fn rename(&mut self, subject: &str, new_subject: &str) -> bool {
        let n = match self.position(subject) {
            Some(n) => n,
            None => return false,
        };

        // The target name must not belong to another entry.
        if let Some(taken) = self.position(new_subject) {
            if taken != n {
                return false;
            }
        }

        let entry = &mut self.entries[n];
        entry.subject = new_subject.to_string();
        entry.touch();
        true
    }

    /// Grade for a subject, or [`GRADE_NOT_FOUND`] (-1.0) when absent.
    ///
    /// Kept for host layers built around the sentinel contract; prefer
    /// [`GradeBook::get`] in new code.
    pub fn lookup(&self, subject: &str) -> f64 {
        self.get(subject).unwrap_or(GRADE_NOT_FOUND)
    }

    /// Grade for a subject, `None` when absent
    pub fn get(&self, subject: &str) -> Option<f64> {
        self.entry(subject).map(|entry| entry.grade)
    }

    /// Borrow the full entry for a subject
    pub fn entry(&self, subject: &str) -> Option<&GradeEntry> {
        self.position(subject).map(|n| &self.entries[n])
    }

    /// Number of entries currently held
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[GradeEntry] {
        &self.entries
    }

    /// Render the book as a human-readable multi-line string, one line per
    /// entry in insertion order:
    ///
    /// ```text
    /// Subject "History": grade 7.5
    /// Subject "Math": grade 9
    /// ```
    ///
    /// No trailing newline; an empty book renders as `""`.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("Subject \"{}\": grade {}", entry.subject, entry.grade))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Index of the first (and only) entry matching `subject`
    fn position(&self, subject: &str) -> Option<usize> {
        let wanted = normalize_subject(subject);
        self.entries
            .iter()
            .position(|entry| normalize_subject(&entry.subject) == wanted)
    }
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Normalize a subject name for identity comparison.
///
/// Lowercase only - no trimming, no punctuation stripping. Case-insensitive
/// matching is the single piece of input normalization the book performs.
fn normalize_subject(s: &str) -> String {
    s.to_lowercase()
}

// ============================================================================
// TESTS
// ============================================================================
