//! Vertical cursor tracking and page breaking.
//!
//! The paginator owns a [`RenderState`] for exactly one render. Every line
//! goes through the same check: if writing it would push the cursor below
//! the bottom margin, the current page is committed and a new one started
//! before the line is placed. Answer text can therefore split across pages
//! independently of the question it belongs to.

use crate::error::{Error, Result};
use crate::layout::{FontStyle, LineBlock, PageLayout};

use super::PageSink;

/// Lifecycle phase of a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The cursor is at a writable position
    Ready,
    /// The next line does not fit; a page break is in progress
    NeedsBreak,
    /// The document was closed; writes are rejected
    Finalized,
}

/// Mutable state of a single render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    /// Baseline of the next line
    pub cursor_y: f32,
    /// 1-based number of the open page, 0 before the first write
    pub current_page: u32,
    /// Style currently selected on the sink
    pub current_style: Option<FontStyle>,
    /// Lifecycle phase
    pub phase: Phase,
}

impl RenderState {
    fn new(layout: &PageLayout) -> Self {
        Self {
            cursor_y: layout.top(),
            current_page: 0,
            current_style: None,
            phase: Phase::Ready,
        }
    }
}

/// Places lines on a [`PageSink`], breaking pages as needed.
pub struct Paginator<S: PageSink> {
    sink: S,
    layout: PageLayout,
    state: RenderState,
    lines_written: usize,
}

impl<S: PageSink> Paginator<S> {
    /// Create a paginator drawing onto `sink`.
    pub fn new(sink: S, layout: PageLayout) -> Self {
        let state = RenderState::new(&layout);
        Self {
            sink,
            layout,
            state,
            lines_written: 0,
        }
    }

    /// Current render state.
    pub fn state(&self) -> &RenderState {
        &self.state
    }

    /// Layout in use.
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Number of pages started so far.
    pub fn page_count(&self) -> u32 {
        self.state.current_page
    }

    /// Number of lines placed so far.
    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    /// Whether [`finalize`](Self::finalize) has been called.
    pub fn is_finalized(&self) -> bool {
        self.state.phase == Phase::Finalized
    }

    /// Place one line at the cursor, breaking the page first if it does not fit.
    pub fn write_line(&mut self, text: &str, style: FontStyle, indent: f32) -> Result<()> {
        self.ensure_open()?;

        let line_height = style.line_height();
        if self.state.current_page == 0 {
            self.open_page(1)?;
        } else if self.state.cursor_y - line_height < self.layout.bottom_margin {
            self.state.phase = Phase::NeedsBreak;
            self.page_break()?;
        }

        if self.state.current_style != Some(style) {
            self.sink.set_style(style)?;
            self.state.current_style = Some(style);
        }

        let x = self.layout.left_margin + indent;
        self.sink.draw_text(x, self.state.cursor_y, text)?;
        self.state.cursor_y -= line_height;
        self.lines_written += 1;
        Ok(())
    }

    /// Place every line of `block`.
    pub fn write_block(&mut self, block: &LineBlock) -> Result<()> {
        for line in &block.lines {
            self.write_line(line, block.style, block.indent)?;
        }
        Ok(())
    }

    /// Move the cursor down by `amount`, keeping it inside the writable band.
    ///
    /// A gap before the first line opens page one so the space is kept.
    pub fn gap(&mut self, amount: f32) -> Result<()> {
        self.ensure_open()?;
        if self.state.current_page == 0 {
            self.open_page(1)?;
        }
        self.state.cursor_y = (self.state.cursor_y - amount)
            .min(self.layout.top())
            .max(self.layout.bottom_margin);
        Ok(())
    }

    /// Close the document. Returns the number of pages emitted.
    ///
    /// A document with no lines still gets one blank page.
    pub fn finalize(&mut self) -> Result<u32> {
        self.ensure_open()?;
        if self.state.current_page == 0 {
            self.open_page(1)?;
        }
        self.state.phase = Phase::Finalized;
        self.sink.finish()?;
        log::debug!(
            "Finalized document: {} pages, {} lines",
            self.state.current_page,
            self.lines_written
        );
        Ok(self.state.current_page)
    }

    /// Give back the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn ensure_open(&self) -> Result<()> {
        if self.state.phase == Phase::Finalized {
            return Err(Error::DocumentClosed);
        }
        Ok(())
    }

    fn open_page(&mut self, number: u32) -> Result<()> {
        self.sink.start_page(number)?;
        self.state.current_page = number;
        self.state.cursor_y = self.layout.top();
        Ok(())
    }

    fn page_break(&mut self) -> Result<()> {
        let next = self.state.current_page + 1;
        log::debug!(
            "Page break at y={:.1}, starting page {}",
            self.state.cursor_y,
            next
        );
        self.open_page(next)?;

        // Fonts are page-scoped on the sink
        if let Some(style) = self.state.current_style {
            self.sink.set_style(style)?;
        }
        self.state.phase = Phase::Ready;
        Ok(())
    }
}
