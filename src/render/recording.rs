//! In-memory sink that records the placed layout.
//!
//! The recorded [`RenderedDocument`] is what the JSON layout dump and the
//! plain-text preview are built from.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::layout::FontStyle;

use super::PageSink;

/// One line as placed on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedLine {
    /// Left edge
    pub x: f32,
    /// Baseline
    pub y: f32,
    /// Style the line was drawn in
    pub style: FontStyle,
    /// Line content
    pub text: String,
}

/// One recorded page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedPage {
    /// 1-based page number
    pub number: u32,
    /// Lines top to bottom
    pub lines: Vec<PlacedLine>,
}

/// The full recorded layout of a render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderedDocument {
    /// Pages in order
    pub pages: Vec<RenderedPage>,
}

impl RenderedDocument {
    /// Number of pages.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Iterate over `(page number, line)` pairs in print order.
    pub fn lines(&self) -> impl Iterator<Item = (u32, &PlacedLine)> {
        self.pages
            .iter()
            .flat_map(|page| page.lines.iter().map(move |line| (page.number, line)))
    }

    /// Find the first line with exactly this text.
    pub fn find_line(&self, text: &str) -> Option<(u32, &PlacedLine)> {
        self.lines().find(|(_, line)| line.text == text)
    }

    /// Plain-text preview with a separator between pages.
    pub fn to_text(&self) -> String {
        let mut output = String::new();
        for page in &self.pages {
            output.push_str(&format!("--- Page {} ---\n", page.number));
            for line in &page.lines {
                let indent = if line.style == FontStyle::Answer { "    " } else { "" };
                output.push_str(indent);
                output.push_str(&line.text);
                output.push('\n');
            }
            output.push('\n');
        }
        output.trim_end().to_string()
    }

    /// Serialize the layout to JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

/// A [`PageSink`] that keeps every placed line in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    document: RenderedDocument,
    style: Option<FontStyle>,
    style_changes: Vec<(u32, FontStyle)>,
    finished: bool,
}

impl RecordingSink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every style selection as `(page number, style)`.
    pub fn style_changes(&self) -> &[(u32, FontStyle)] {
        &self.style_changes
    }

    /// Whether `finish` was called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Take the recorded layout.
    pub fn into_document(self) -> RenderedDocument {
        self.document
    }

    fn current_page(&mut self) -> Result<&mut RenderedPage> {
        self.document
            .pages
            .last_mut()
            .ok_or_else(|| Error::Render("no page has been started".to_string()))
    }
}

impl PageSink for RecordingSink {
    fn start_page(&mut self, number: u32) -> Result<()> {
        self.document.pages.push(RenderedPage {
            number,
            lines: Vec::new(),
        });
        self.style = None;
        Ok(())
    }

    fn set_style(&mut self, style: FontStyle) -> Result<()> {
        let page = self.current_page()?.number;
        self.style = Some(style);
        self.style_changes.push((page, style));
        Ok(())
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str) -> Result<()> {
        let style = self
            .style
            .ok_or_else(|| Error::Render("text drawn before a style was selected".to_string()))?;
        self.current_page()?.lines.push(PlacedLine {
            x,
            y,
            style,
            text: text.to_string(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}
