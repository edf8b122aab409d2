//! Text layout primitives: wrapping, page geometry and line blocks.

mod page;
mod wrap;

pub use page::{FontStyle, PageLayout, A4_HEIGHT, A4_WIDTH};
pub use wrap::wrap_text;

/// Wrapped lines of one logical text unit sharing a style and indent.
#[derive(Debug, Clone, PartialEq)]
pub struct LineBlock {
    /// Lines in print order
    pub lines: Vec<String>,
    /// Style applied to every line
    pub style: FontStyle,
    /// Offset from the left margin
    pub indent: f32,
}

impl LineBlock {
    /// Wrap `text` at `width` characters into a block.
    pub fn wrap(text: &str, width: usize, style: FontStyle, indent: f32) -> Self {
        Self {
            lines: wrap_text(text, width),
            style,
            indent,
        }
    }

    /// A block holding exactly one unwrapped line.
    pub fn single(text: impl Into<String>, style: FontStyle) -> Self {
        Self {
            lines: vec![text.into()],
            style,
            indent: 0.0,
        }
    }

    /// Total vertical space the block occupies.
    pub fn height(&self) -> f32 {
        self.lines.len() as f32 * self.style.line_height()
    }

    /// Check whether the block has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
