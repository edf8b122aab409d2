//! Question sources.
//!
//! The renderer only needs an ordered list of [`QuestionRecord`]s. Where
//! they come from is up to the caller; this module provides the in-memory
//! case and a JSON question file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::model::QuestionRecord;

/// Supplies questions in print order.
pub trait QuestionSource {
    /// Return every question, in the order it should be printed.
    fn list_questions(&self) -> Result<Vec<QuestionRecord>>;
}

impl QuestionSource for [QuestionRecord] {
    fn list_questions(&self) -> Result<Vec<QuestionRecord>> {
        Ok(self.to_vec())
    }
}

impl QuestionSource for Vec<QuestionRecord> {
    fn list_questions(&self) -> Result<Vec<QuestionRecord>> {
        Ok(self.clone())
    }
}

/// Contents of a question file.
///
/// Either a bare array of questions or an object carrying paper defaults
/// alongside the `questions` array.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QuestionFile {
    /// Paper title
    #[serde(default)]
    pub title: Option<String>,

    /// Duration in minutes
    #[serde(default)]
    pub duration_minutes: Option<u32>,

    /// Total marks; summed from the questions when absent
    #[serde(default)]
    pub total_marks: Option<u32>,

    /// Questions in print order
    pub questions: Vec<QuestionRecord>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawQuestionFile {
    List(Vec<QuestionRecord>),
    Paper(QuestionFile),
}

impl QuestionFile {
    /// Parse question file JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let file = match serde_json::from_str::<RawQuestionFile>(json)? {
            RawQuestionFile::List(questions) => QuestionFile {
                questions,
                ..Default::default()
            },
            RawQuestionFile::Paper(file) => file,
        };
        file.validate()?;
        Ok(file)
    }

    fn validate(&self) -> Result<()> {
        for (index, question) in self.questions.iter().enumerate() {
            if question.text.trim().is_empty() {
                return Err(Error::InvalidSource(format!(
                    "question {} has no text",
                    index + 1
                )));
            }
        }
        Ok(())
    }
}

/// A JSON question file on disk.
#[derive(Debug, Clone)]
pub struct JsonQuestionFile {
    path: PathBuf,
}

impl JsonQuestionFile {
    /// Refer to the file at `path`. Nothing is read until used.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the whole file.
    pub fn load(&self) -> Result<QuestionFile> {
        let json = std::fs::read_to_string(&self.path)?;
        let file = QuestionFile::from_json(&json)?;
        log::debug!(
            "Loaded {} question(s) from {}",
            file.questions.len(),
            self.path.display()
        );
        Ok(file)
    }
}

impl QuestionSource for JsonQuestionFile {
    fn list_questions(&self) -> Result<Vec<QuestionRecord>> {
        Ok(self.load()?.questions)
    }
}
