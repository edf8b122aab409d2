//! # qpaper
//!
//! Paginated question paper rendering for Rust.
//!
//! This library lays out an ordered list of questions into a printable,
//! multi-page document: a title block, marks and duration summary, then
//! every question numbered in order, optionally followed by its answer.
//!
//! ## Quick Start
//!
//! ```no_run
//! use qpaper::{render_to_file, DocumentMetadata, QuestionRecord, RenderRequest};
//!
//! fn main() -> qpaper::Result<()> {
//!     let questions = vec![
//!         QuestionRecord::new("What is 2+2?", 2).with_answer("4"),
//!         QuestionRecord::new("State Newton's second law.", 3),
//!     ];
//!     let metadata = DocumentMetadata::for_questions("Unit Test 1", 30, &questions);
//!
//!     let request = RenderRequest::new(metadata, questions, "papers/unit-test-1.pdf")
//!         .with_answers(true);
//!     let summary = render_to_file(&request)?;
//!     println!("{} page(s)", summary.page_count);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Greedy word wrap**: character-count wrapping that never splits words
//! - **Per-line page breaking**: answers can cross pages independently
//! - **PDF output**: standard Helvetica fonts, written atomically
//! - **Layout inspection**: record the placed lines as JSON or plain text

pub mod error;
pub mod fs;
pub mod layout;
pub mod model;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use error::{Error, Result};
pub use layout::{wrap_text, FontStyle, LineBlock, PageLayout};
pub use model::{DocumentMetadata, QuestionRecord, RenderRequest};
pub use render::{
    render_layout, EmptyDocumentPolicy, PageSink, PaperRenderer, PdfSink, RecordingSink,
    RenderOptions, RenderSummary, RenderedDocument, DEFAULT_WRAP_WIDTH,
};
pub use source::{JsonQuestionFile, QuestionFile, QuestionSource};

use std::path::Path;

/// Render a request to its destination PDF with default layout.
///
/// The destination directory is created if missing.
pub fn render_to_file(request: &RenderRequest) -> Result<RenderSummary> {
    let options = RenderOptions::new().with_answers(request.include_answers);
    render_to_file_with_options(request, &options)
}

/// Render a request with custom options.
///
/// `request.include_answers` takes precedence over `options.include_answers`.
pub fn render_to_file_with_options(
    request: &RenderRequest,
    options: &RenderOptions,
) -> Result<RenderSummary> {
    let options = options.clone().with_answers(request.include_answers);
    if let Some(parent) = request.destination.parent() {
        fs::ensure_directory(parent)?;
    }

    let sink = PdfSink::new(&request.destination, options.layout.clone())
        .with_metadata(&request.metadata);
    PaperRenderer::new(&options).render(&request.metadata, &request.questions, sink)
}

/// Builder for rendering question papers.
///
/// # Example
///
/// ```no_run
/// use qpaper::{JsonQuestionFile, QuestionPaper};
///
/// let summary = QuestionPaper::new("Physics Mid-term")
///     .with_duration(90)
///     .with_answers(true)
///     .from_source(&JsonQuestionFile::new("questions.json"))?
///     .write_pdf("generated_papers/physics.pdf")?;
/// # Ok::<(), qpaper::Error>(())
/// ```
pub struct QuestionPaper {
    title: String,
    duration_minutes: u32,
    total_marks: Option<u32>,
    render_options: RenderOptions,
}

impl QuestionPaper {
    /// Create a builder for a paper titled `title`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            duration_minutes: 0,
            total_marks: None,
            render_options: RenderOptions::default(),
        }
    }

    /// Set the duration in minutes.
    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration_minutes = minutes;
        self
    }

    /// Override the total marks instead of summing the questions.
    pub fn with_total_marks(mut self, marks: u32) -> Self {
        self.total_marks = Some(marks);
        self
    }

    /// Include the answer key.
    pub fn with_answers(mut self, include: bool) -> Self {
        self.render_options = self.render_options.with_answers(include);
        self
    }

    /// Set the empty document policy.
    pub fn with_empty_policy(mut self, policy: EmptyDocumentPolicy) -> Self {
        self.render_options = self.render_options.with_empty_policy(policy);
        self
    }

    /// Replace the render options.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Take questions from a source and fix the metadata.
    pub fn from_source<Q: QuestionSource + ?Sized>(self, source: &Q) -> Result<PreparedPaper> {
        let questions = source.list_questions()?;
        Ok(self.with_questions(questions))
    }

    /// Use `questions` as given and fix the metadata.
    pub fn with_questions(self, questions: Vec<QuestionRecord>) -> PreparedPaper {
        let total = self
            .total_marks
            .unwrap_or_else(|| model::total_marks(&questions));
        let metadata = DocumentMetadata::new(self.title, total, self.duration_minutes);
        PreparedPaper {
            metadata,
            questions,
            render_options: self.render_options,
        }
    }
}

/// A paper whose questions and metadata are fixed, ready to render.
pub struct PreparedPaper {
    /// Header metadata
    pub metadata: DocumentMetadata,
    /// Questions in print order
    pub questions: Vec<QuestionRecord>,
    render_options: RenderOptions,
}

impl PreparedPaper {
    /// Render to a PDF file at `path`, creating its directory if needed.
    pub fn write_pdf<P: AsRef<Path>>(&self, path: P) -> Result<RenderSummary> {
        let request = RenderRequest::new(
            self.metadata.clone(),
            self.questions.clone(),
            path.as_ref(),
        )
        .with_answers(self.render_options.include_answers);
        render_to_file_with_options(&request, &self.render_options)
    }

    /// Render into an in-memory layout.
    pub fn layout(&self) -> Result<RenderedDocument> {
        render_layout(&self.metadata, &self.questions, &self.render_options)
    }

    /// Render onto any sink.
    pub fn render_to<S: PageSink>(&self, sink: S) -> Result<RenderSummary> {
        PaperRenderer::new(&self.render_options).render(&self.metadata, &self.questions, sink)
    }

    /// Render options in use.
    pub fn options(&self) -> &RenderOptions {
        &self.render_options
    }
}
