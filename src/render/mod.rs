//! Rendering module: pagination, paper assembly and output sinks.

mod options;
mod paginator;
mod paper;
mod pdf;
mod recording;
mod result;
mod sink;

pub use options::{EmptyDocumentPolicy, RenderOptions, DEFAULT_WRAP_WIDTH};
pub use paginator::{Paginator, Phase, RenderState};
pub use paper::{render_layout, PaperRenderer};
pub use pdf::{encode_win_ansi, PdfSink};
pub use recording::{PlacedLine, RecordingSink, RenderedDocument, RenderedPage};
pub use result::RenderSummary;
pub use sink::PageSink;
