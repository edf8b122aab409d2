//! Paper-level types.

use super::{total_marks, QuestionRecord};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Title used when the caller leaves it blank.
pub const DEFAULT_TITLE: &str = "Generated Paper";

/// Header information printed at the top of the first page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Paper title
    pub title: String,

    /// Total marks shown in the summary line
    pub total_marks: u32,

    /// Exam duration in minutes
    pub duration_minutes: u32,

    /// Generation timestamp
    pub generated_at: DateTime<Local>,
}

impl DocumentMetadata {
    /// Create metadata stamped with the current local time.
    pub fn new(title: impl Into<String>, total_marks: u32, duration_minutes: u32) -> Self {
        let title = title.into();
        let title = if title.trim().is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            title
        };

        Self {
            title,
            total_marks,
            duration_minutes,
            generated_at: Local::now(),
        }
    }

    /// Create metadata whose total marks is the sum over `questions`.
    pub fn for_questions(
        title: impl Into<String>,
        duration_minutes: u32,
        questions: &[QuestionRecord],
    ) -> Self {
        Self::new(title, total_marks(questions), duration_minutes)
    }

    /// Override the generation timestamp.
    pub fn with_generated_at(mut self, at: DateTime<Local>) -> Self {
        self.generated_at = at;
        self
    }

    /// Title as printed, falling back to the default when blank.
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            DEFAULT_TITLE
        } else {
            &self.title
        }
    }

    /// The marks/duration summary line.
    pub fn summary_line(&self) -> String {
        format!(
            "Total Marks: {}    Duration: {} mins",
            self.total_marks, self.duration_minutes
        )
    }

    /// The generation timestamp line.
    pub fn timestamp_line(&self) -> String {
        format!(
            "Generated: {}",
            self.generated_at.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

/// Everything needed to export one paper to disk.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    /// Header metadata
    pub metadata: DocumentMetadata,

    /// Questions in print order
    pub questions: Vec<QuestionRecord>,

    /// Interleave the answer key
    pub include_answers: bool,

    /// Output file path
    pub destination: PathBuf,
}

impl RenderRequest {
    /// Create a request without answers.
    pub fn new(
        metadata: DocumentMetadata,
        questions: Vec<QuestionRecord>,
        destination: impl Into<PathBuf>,
    ) -> Self {
        Self {
            metadata,
            questions,
            include_answers: false,
            destination: destination.into(),
        }
    }

    /// Enable or disable the answer key.
    pub fn with_answers(mut self, include: bool) -> Self {
        self.include_answers = include;
        self
    }
}
