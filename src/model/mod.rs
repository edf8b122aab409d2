//! Document model for question papers.
//!
//! These types are the input side of rendering: header metadata, the
//! ordered question list, and the request that ties them to an output path.

mod paper;
mod question;

pub use paper::{DocumentMetadata, RenderRequest, DEFAULT_TITLE};
pub use question::{total_marks, QuestionRecord};
