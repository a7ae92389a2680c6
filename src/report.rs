// 📋 Report Card - Snapshot of a GradeBook for display and export
//
// The book itself only knows the one-line-per-subject format; everything a
// host layer might want on top (summary numbers, JSON export, a timestamp)
// lives here so the container stays minimal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{GradeBook, GradeEntry};

// ============================================================================
// REPORT CARD
// ============================================================================

/// Serializable snapshot of a [`GradeBook`] at a point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportCard {
    /// When this snapshot was taken
    pub generated_at: DateTime<Utc>,

    /// Number of subjects on the card
    pub subject_count: usize,

    /// Mean of all grades, `None` for an empty book
    pub average_grade: Option<f64>,

    /// Entries in insertion order
    pub entries: Vec<GradeEntry>,
}

impl ReportCard {
    /// Snapshot a grade book
    pub fn from_book(book: &GradeBook) -> Self {
        let entries = book.entries().to_vec();

        let average_grade = if entries.is_empty() {
            None
        } else {
            let sum: f64 = entries.iter().map(|entry| entry.grade).sum();
            Some(sum / entries.len() as f64)
        };

        ReportCard {
            generated_at: Utc::now(),
            subject_count: entries.len(),
            average_grade,
            entries,
        }
    }

    /// Human-readable card, one line per subject in insertion order.
    ///
    /// Same line format as [`GradeBook::render`]; an empty card is `""`.
    pub fn to_text(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("Subject \"{}\": grade {}", entry.subject, entry.grade))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Pretty-printed JSON export
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_average() {
        let mut book = GradeBook::new();
        book.add("Math", 7.5);
        book.add("History", 8.5);

        let card = ReportCard::from_book(&book);

        assert_eq!(card.subject_count, 2);
        assert_eq!(card.average_grade, Some(8.0));
    }

    #[test]
    fn test_report_on_empty_book() {
        let card = ReportCard::from_book(&GradeBook::new());

        assert_eq!(card.subject_count, 0);
        assert_eq!(card.average_grade, None);
        assert_eq!(card.to_text(), "");
    }

    #[test]
    fn test_report_text_matches_book_render() {
        let mut book = GradeBook::new();
        book.add("History", 7.5);
        book.add("Art", 9.5);

        let card = ReportCard::from_book(&book);

        assert_eq!(card.to_text(), book.render());
    }

    #[test]
    fn test_report_json_export() {
        let mut book = GradeBook::new();
        book.add("Math", 9.5);

        let card = ReportCard::from_book(&book);
        let json = card.to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["subject_count"], 1);
        assert_eq!(value["entries"][0]["subject"], "Math");
        assert_eq!(value["entries"][0]["grade"], 9.5);
    }
}
