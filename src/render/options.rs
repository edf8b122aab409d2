//! Rendering options and configuration.

use crate::error::{Error, Result};
use crate::layout::PageLayout;

/// Default wrap width for question and answer text, in characters.
pub const DEFAULT_WRAP_WIDTH: usize = 80;

/// Options for rendering a question paper.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Interleave answers after their questions
    pub include_answers: bool,

    /// Wrap width for question bodies (characters)
    pub wrap_width: usize,

    /// Wrap width for answers (characters)
    pub answer_wrap_width: usize,

    /// What to do when there are no questions
    pub empty_policy: EmptyDocumentPolicy,

    /// Page geometry and spacing
    pub layout: PageLayout,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the answer key.
    pub fn with_answers(mut self, include: bool) -> Self {
        self.include_answers = include;
        self
    }

    /// Set the wrap width for both questions and answers.
    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width;
        self.answer_wrap_width = width;
        self
    }

    /// Set the wrap width for answers only.
    pub fn with_answer_wrap_width(mut self, width: usize) -> Self {
        self.answer_wrap_width = width;
        self
    }

    /// Set the empty document policy.
    pub fn with_empty_policy(mut self, policy: EmptyDocumentPolicy) -> Self {
        self.empty_policy = policy;
        self
    }

    /// Set the page layout.
    pub fn with_layout(mut self, layout: PageLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Check the options before a render starts.
    pub fn validate(&self) -> Result<()> {
        if self.wrap_width == 0 || self.answer_wrap_width == 0 {
            return Err(Error::InvalidOptions(
                "wrap width must be at least 1".to_string(),
            ));
        }
        self.layout.validate().map_err(Error::InvalidOptions)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_answers: false,
            wrap_width: DEFAULT_WRAP_WIDTH,
            answer_wrap_width: DEFAULT_WRAP_WIDTH,
            empty_policy: EmptyDocumentPolicy::TitleOnly,
            layout: PageLayout::a4(),
        }
    }
}

/// Behaviour for a paper with no questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyDocumentPolicy {
    /// Emit a single page with the header only
    #[default]
    TitleOnly,
    /// Fail with [`Error::EmptyDocument`]
    Reject,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_answers(true)
            .with_wrap_width(60)
            .with_answer_wrap_width(70)
            .with_empty_policy(EmptyDocumentPolicy::Reject);

        assert!(options.include_answers);
        assert_eq!(options.wrap_width, 60);
        assert_eq!(options.answer_wrap_width, 70);
        assert_eq!(options.empty_policy, EmptyDocumentPolicy::Reject);
    }

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert!(!options.include_answers);
        assert_eq!(options.wrap_width, DEFAULT_WRAP_WIDTH);
        assert_eq!(options.empty_policy, EmptyDocumentPolicy::TitleOnly);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_zero_wrap_width_rejected() {
        let options = RenderOptions::new().with_wrap_width(0);
        assert!(matches!(options.validate(), Err(Error::InvalidOptions(_))));
    }
}
