//! Render summary.

use serde::{Deserialize, Serialize};

/// Counts collected while rendering a paper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSummary {
    /// Pages emitted
    pub page_count: u32,

    /// Questions rendered
    pub question_count: usize,

    /// Answer blocks rendered
    pub answer_count: usize,

    /// Lines placed, header included
    pub line_count: usize,
}

impl RenderSummary {
    /// Whether any answer text made it onto the paper.
    pub fn has_answers(&self) -> bool {
        self.answer_count > 0
    }
}
