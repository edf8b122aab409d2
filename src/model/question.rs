//! Question records.

use serde::{Deserialize, Serialize};

/// A single question as supplied by a question source.
///
/// Position in the input list is significant: the rendered question number
/// is the 1-based index of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// Question body text
    pub text: String,

    /// Marks awarded for the question
    pub marks: u32,

    /// Answer key text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl QuestionRecord {
    /// Create a question without an answer.
    pub fn new(text: impl Into<String>, marks: u32) -> Self {
        Self {
            text: text.into(),
            marks,
            answer: None,
        }
    }

    /// Attach an answer.
    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = Some(answer.into());
        self
    }

    /// Whether the record carries an answer with visible text.
    pub fn has_answer(&self) -> bool {
        self.answer
            .as_deref()
            .is_some_and(|answer| !answer.trim().is_empty())
    }

    /// The body line as printed on the paper, before wrapping.
    pub fn heading(&self, number: usize) -> String {
        format!("Q{}. {} ({} marks)", number, self.text, self.marks)
    }

    /// The answer line as printed in the answer key, before wrapping.
    pub fn answer_line(&self) -> Option<String> {
        if self.has_answer() {
            self.answer.as_deref().map(|answer| format!("Ans: {}", answer))
        } else {
            None
        }
    }
}

/// Sum of marks over a question list, saturating at `u32::MAX`.
pub fn total_marks(questions: &[QuestionRecord]) -> u32 {
    questions
        .iter()
        .fold(0u32, |total, q| total.saturating_add(q.marks))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_format() {
        let q = QuestionRecord::new("What is 2+2?", 2);
        assert_eq!(q.heading(1), "Q1. What is 2+2? (2 marks)");
        assert_eq!(q.heading(17), "Q17. What is 2+2? (2 marks)");
    }

    #[test]
    fn test_has_answer() {
        assert!(!QuestionRecord::new("a", 1).has_answer());
        assert!(!QuestionRecord::new("a", 1).with_answer("").has_answer());
        assert!(!QuestionRecord::new("a", 1).with_answer("  \n").has_answer());
        assert!(QuestionRecord::new("a", 1).with_answer("4").has_answer());
    }

    #[test]
    fn test_answer_line() {
        let q = QuestionRecord::new("What is 2+2?", 2).with_answer("4");
        assert_eq!(q.answer_line().as_deref(), Some("Ans: 4"));
        assert_eq!(QuestionRecord::new("x", 1).answer_line(), None);
    }

    #[test]
    fn test_total_marks() {
        let questions = vec![
            QuestionRecord::new("a", 2),
            QuestionRecord::new("b", 5),
            QuestionRecord::new("c", 3),
        ];
        assert_eq!(total_marks(&questions), 10);
        assert_eq!(total_marks(&[]), 0);
    }

    #[test]
    fn test_total_marks_saturates() {
        let questions = vec![
            QuestionRecord::new("a", u32::MAX),
            QuestionRecord::new("b", 1),
            QuestionRecord::new("c", 7),
        ];
        assert_eq!(total_marks(&questions), u32::MAX);
    }

    #[test]
    fn test_deserialize_without_answer() {
        let q: QuestionRecord = serde_json::from_str(r#"{"text":"Define force.","marks":3}"#).unwrap();
        assert_eq!(q.text, "Define force.");
        assert_eq!(q.marks, 3);
        assert!(q.answer.is_none());
    }
}
