//! Integration tests for PDF output.

use lopdf::content::Content;
use lopdf::{Document, Object};
use qpaper::render::render_layout;
use qpaper::{
    render_to_file, DocumentMetadata, EmptyDocumentPolicy, Error, QuestionPaper, QuestionRecord,
    RenderOptions, RenderRequest,
};

/// All `Tj` strings on a page, decoded as Latin-1.
fn page_strings(doc: &Document, page_number: u32) -> Vec<String> {
    let pages = doc.get_pages();
    let page_id = pages[&page_number];
    let data = doc.get_page_content(page_id).unwrap();
    let content = Content::decode(&data).unwrap();

    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| match op.operands.first() {
            Some(Object::String(bytes, _)) => Some(bytes.iter().map(|&b| b as char).collect()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_pdf_contains_question_and_answer() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quiz.pdf");

    let questions = vec![QuestionRecord::new("What is 2+2?", 2).with_answer("4")];
    let metadata = DocumentMetadata::for_questions("Quick Quiz", 5, &questions);
    let request = RenderRequest::new(metadata, questions, &path).with_answers(true);
    let summary = render_to_file(&request).unwrap();
    assert_eq!(summary.page_count, 1);

    let doc = Document::load(&path).unwrap();
    assert_eq!(doc.get_pages().len(), 1);

    let strings = page_strings(&doc, 1);
    let question = strings
        .iter()
        .position(|s| s == "Q1. What is 2+2? (2 marks)")
        .unwrap();
    let answer = strings.iter().position(|s| s == "Ans: 4").unwrap();
    assert!(answer > question);
    assert_eq!(strings[0], "Quick Quiz");
    assert_eq!(strings[1], "Total Marks: 2    Duration: 5 mins");
}

#[test]
fn test_pdf_page_count_matches_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("long.pdf");

    let body = "Discuss the causes and consequences of the event in detail. ".repeat(5);
    let questions: Vec<_> = (0..200)
        .map(|_| QuestionRecord::new(body.trim(), 5))
        .collect();
    let paper = QuestionPaper::new("Long Paper")
        .with_duration(180)
        .with_questions(questions);

    let summary = paper.write_pdf(&path).unwrap();
    let layout = paper.layout().unwrap();
    assert_eq!(summary.page_count, layout.page_count());

    let doc = Document::load(&path).unwrap();
    assert_eq!(doc.get_pages().len() as u32, summary.page_count);

    let (page, line) = layout
        .lines()
        .find(|(_, line)| line.text.starts_with("Q200. "))
        .unwrap();
    assert!(page_strings(&doc, page).contains(&line.text));
}

#[test]
fn test_empty_paper_title_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.pdf");

    let summary = QuestionPaper::new("Nothing Yet")
        .with_questions(Vec::new())
        .write_pdf(&path)
        .unwrap();
    assert_eq!(summary.page_count, 1);
    assert_eq!(summary.question_count, 0);

    let doc = Document::load(&path).unwrap();
    assert_eq!(page_strings(&doc, 1)[0], "Nothing Yet");
}

#[test]
fn test_rejected_empty_paper_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rejected.pdf");

    let result = QuestionPaper::new("Nothing")
        .with_empty_policy(EmptyDocumentPolicy::Reject)
        .with_questions(Vec::new())
        .write_pdf(&path);
    assert!(matches!(result, Err(Error::EmptyDocument)));
    assert!(!path.exists());
}

#[test]
fn test_unwritable_destination_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"file").unwrap();
    let path = blocker.join("paper.pdf");

    let request = RenderRequest::new(
        DocumentMetadata::new("Quiz", 1, 10),
        vec![QuestionRecord::new("Q", 1)],
        &path,
    );
    assert!(matches!(render_to_file(&request), Err(Error::Io(_))));
    assert!(!path.exists());
}

#[test]
fn test_layout_and_pdf_agree_with_answers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("answers.pdf");

    let questions: Vec<_> = (0..40)
        .map(|i| {
            QuestionRecord::new(format!("Prove statement {}", i + 1), 4)
                .with_answer("By induction on n, the base case holds and the step follows. ".repeat(4))
        })
        .collect();
    let metadata = DocumentMetadata::for_questions("Proofs", 120, &questions);
    let options = RenderOptions::new().with_answers(true);
    let layout = render_layout(&metadata, &questions, &options).unwrap();

    let request = RenderRequest::new(metadata, questions, &path).with_answers(true);
    let summary = render_to_file(&request).unwrap();
    assert_eq!(summary.page_count, layout.page_count());
    assert_eq!(summary.answer_count, 40);
}
