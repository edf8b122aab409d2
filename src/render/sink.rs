//! Drawing surface abstraction.

use crate::error::Result;
use crate::layout::FontStyle;

/// A surface the paginator draws onto.
///
/// Calls arrive in a fixed pattern: `start_page`, then any number of
/// `set_style` / `draw_text` calls, then either the next `start_page` or
/// `finish`. A style set on one page does not carry over to the next;
/// the paginator re-applies it after every page break.
pub trait PageSink {
    /// Begin page `number` (1-based), closing the previous one if any.
    fn start_page(&mut self, number: u32) -> Result<()>;

    /// Select the font for subsequent text on the current page.
    fn set_style(&mut self, style: FontStyle) -> Result<()>;

    /// Place `text` with its baseline at `(x, y)`.
    fn draw_text(&mut self, x: f32, y: f32, text: &str) -> Result<()>;

    /// Close the last page and commit the document.
    fn finish(&mut self) -> Result<()>;
}

impl<S: PageSink + ?Sized> PageSink for &mut S {
    fn start_page(&mut self, number: u32) -> Result<()> {
        (**self).start_page(number)
    }

    fn set_style(&mut self, style: FontStyle) -> Result<()> {
        (**self).set_style(style)
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str) -> Result<()> {
        (**self).draw_text(x, y, text)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}
