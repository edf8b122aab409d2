//! Question paper assembly.
//!
//! Sections are emitted in a fixed order: title, marks/duration summary,
//! generation timestamp, a gap, then every question with its optional answer.

use crate::error::{Error, Result};
use crate::layout::{FontStyle, LineBlock};
use crate::model::{DocumentMetadata, QuestionRecord};

use super::{EmptyDocumentPolicy, PageSink, Paginator, RenderOptions, RenderSummary};

/// Lays out one question paper onto a [`PageSink`].
pub struct PaperRenderer<'a> {
    options: &'a RenderOptions,
}

impl<'a> PaperRenderer<'a> {
    /// Create a renderer with the given options.
    pub fn new(options: &'a RenderOptions) -> Self {
        Self { options }
    }

    /// Render the paper and finalize the sink.
    pub fn render<S: PageSink>(
        &self,
        metadata: &DocumentMetadata,
        questions: &[QuestionRecord],
        sink: S,
    ) -> Result<RenderSummary> {
        self.options.validate()?;
        if questions.is_empty() && self.options.empty_policy == EmptyDocumentPolicy::Reject {
            return Err(Error::EmptyDocument);
        }

        let layout = self.options.layout.clone();
        let mut paginator = Paginator::new(sink, layout);

        self.write_header(&mut paginator, metadata)?;

        let mut answers_written = 0;
        for (index, question) in questions.iter().enumerate() {
            if self.write_question(&mut paginator, index + 1, question)? {
                answers_written += 1;
            }
        }

        let page_count = paginator.finalize()?;
        let summary = RenderSummary {
            page_count,
            question_count: questions.len(),
            answer_count: answers_written,
            line_count: paginator.lines_written(),
        };
        log::info!(
            "Rendered \"{}\": {} questions on {} page(s)",
            metadata.display_title(),
            summary.question_count,
            summary.page_count
        );
        Ok(summary)
    }

    fn write_header<S: PageSink>(
        &self,
        paginator: &mut Paginator<S>,
        metadata: &DocumentMetadata,
    ) -> Result<()> {
        paginator.write_line(metadata.display_title(), FontStyle::Title, 0.0)?;
        paginator.write_line(&metadata.summary_line(), FontStyle::Caption, 0.0)?;
        paginator.write_line(&metadata.timestamp_line(), FontStyle::Caption, 0.0)?;
        paginator.gap(self.options.layout.header_gap)
    }

    /// Returns whether an answer block was written.
    fn write_question<S: PageSink>(
        &self,
        paginator: &mut Paginator<S>,
        number: usize,
        question: &QuestionRecord,
    ) -> Result<bool> {
        let layout = &self.options.layout;

        let body = LineBlock::wrap(
            &question.heading(number),
            self.options.wrap_width,
            FontStyle::Body,
            0.0,
        );
        log::debug!(
            "Question {}: {} line(s), starting on page {}",
            number,
            body.lines.len(),
            paginator.page_count().max(1)
        );
        paginator.write_block(&body)?;
        paginator.gap(layout.question_gap)?;

        if !self.options.include_answers {
            return Ok(false);
        }
        let Some(answer) = question.answer_line() else {
            return Ok(false);
        };

        let block = LineBlock::wrap(
            &answer,
            self.options.answer_wrap_width,
            FontStyle::Answer,
            layout.answer_indent,
        );
        paginator.write_block(&block)?;
        paginator.gap(layout.answer_gap)?;
        Ok(true)
    }
}

/// Render into an in-memory layout.
pub fn render_layout(
    metadata: &DocumentMetadata,
    questions: &[QuestionRecord],
    options: &RenderOptions,
) -> Result<super::RenderedDocument> {
    let mut sink = super::RecordingSink::new();
    PaperRenderer::new(options).render(metadata, questions, &mut sink)?;
    Ok(sink.into_document())
}
