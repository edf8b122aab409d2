//! Output location helpers.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use chrono::{DateTime, Local};
use regex::Regex;

use crate::error::Result;
use crate::model::DocumentMetadata;

/// Default directory for exported papers.
pub const PAPERS_DIR: &str = "generated_papers";

/// Create `path` and any missing parents. Succeeds if it already exists.
pub fn ensure_directory<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() || path.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(path)?;
    log::debug!("Created directory {}", path.display());
    Ok(())
}

fn unsafe_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9]+").expect("valid file name pattern"))
}

/// File name for a paper: sanitized title plus generation time.
///
/// `"Unit Test 1 (Algebra)"` generated at 2025-10-31 11:08:18 becomes
/// `Unit_Test_1_Algebra_2025-10-31_11-08-18.pdf`.
pub fn paper_file_name(title: &str, generated_at: &DateTime<Local>) -> String {
    let slug = unsafe_chars().replace_all(title, "_");
    let slug = slug.trim_matches('_');
    let slug = if slug.is_empty() { "paper" } else { slug };
    format!("{}_{}.pdf", slug, generated_at.format("%Y-%m-%d_%H-%M-%S"))
}

/// Default output path for `metadata` inside `dir`.
pub fn default_paper_path<P: AsRef<Path>>(dir: P, metadata: &DocumentMetadata) -> PathBuf {
    dir.as_ref()
        .join(paper_file_name(metadata.display_title(), &metadata.generated_at))
}
