//! qpaper CLI - question paper rendering tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use qpaper::fs::{default_paper_path, PAPERS_DIR};
use qpaper::{
    EmptyDocumentPolicy, JsonQuestionFile, PreparedPaper, QuestionPaper, RenderOptions,
    DEFAULT_WRAP_WIDTH,
};

#[derive(Parser)]
#[command(name = "qpaper")]
#[command(version)]
#[command(about = "Render question papers with optional answer keys to PDF", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that lays out a paper.
#[derive(clap::Args)]
struct PaperArgs {
    /// Question file (JSON)
    #[arg(value_name = "QUESTIONS")]
    input: PathBuf,

    /// Paper title (overrides the question file)
    #[arg(short, long)]
    title: Option<String>,

    /// Duration in minutes (overrides the question file)
    #[arg(short, long)]
    duration: Option<u32>,

    /// Total marks (defaults to the sum of question marks)
    #[arg(long)]
    total_marks: Option<u32>,

    /// Include the answer key
    #[arg(short, long)]
    answers: bool,

    /// Fail instead of emitting a title-only paper when there are no questions
    #[arg(long)]
    reject_empty: bool,

    /// Wrap width in characters
    #[arg(long, default_value_t = DEFAULT_WRAP_WIDTH)]
    wrap_width: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a question paper to PDF
    Render {
        #[command(flatten)]
        paper: PaperArgs,

        /// Output file (generated under the output directory if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output directory for generated file names
        #[arg(long, value_name = "DIR", env = "QPAPER_OUTPUT_DIR", default_value = PAPERS_DIR)]
        output_dir: PathBuf,
    },

    /// Print the page layout as JSON
    Layout {
        #[command(flatten)]
        paper: PaperArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Print a plain-text preview of every page
    Preview {
        #[command(flatten)]
        paper: PaperArgs,
    },

    /// Show question file information
    Info {
        /// Question file (JSON)
        #[arg(value_name = "QUESTIONS")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            paper,
            output,
            output_dir,
        } => cmd_render(&paper, output.as_deref(), &output_dir),
        Commands::Layout {
            paper,
            output,
            compact,
        } => cmd_layout(&paper, output.as_deref(), compact),
        Commands::Preview { paper } => cmd_preview(&paper),
        Commands::Info { input } => cmd_info(&input),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn prepare(args: &PaperArgs) -> Result<PreparedPaper, Box<dyn std::error::Error>> {
    let file = JsonQuestionFile::new(&args.input).load()?;

    let title = args.title.clone().or(file.title).unwrap_or_default();
    let duration = args.duration.or(file.duration_minutes).unwrap_or(0);

    let policy = if args.reject_empty {
        EmptyDocumentPolicy::Reject
    } else {
        EmptyDocumentPolicy::TitleOnly
    };
    let options = RenderOptions::new()
        .with_answers(args.answers)
        .with_wrap_width(args.wrap_width)
        .with_empty_policy(policy);

    let mut builder = QuestionPaper::new(title)
        .with_duration(duration)
        .with_options(options);
    if let Some(total) = args.total_marks.or(file.total_marks) {
        builder = builder.with_total_marks(total);
    }

    Ok(builder.with_questions(file.questions))
}

fn cmd_render(
    args: &PaperArgs,
    output: Option<&Path>,
    output_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let paper = prepare(args)?;
    let path = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| default_paper_path(output_dir, &paper.metadata));

    log::debug!(
        "Rendering {} question(s) to {}",
        paper.questions.len(),
        path.display()
    );
    let summary = paper.write_pdf(&path)?;

    println!("{} {}", "Saved to".green(), path.display());
    println!(
        "  {} {} question(s), {} page(s)",
        "├─".dimmed(),
        summary.question_count,
        summary.page_count
    );
    println!(
        "  {} answers: {}",
        "└─".dimmed(),
        if summary.has_answers() {
            summary.answer_count.to_string()
        } else {
            "none".to_string()
        }
    );

    Ok(())
}

fn cmd_layout(
    args: &PaperArgs,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let paper = prepare(args)?;
    let json = paper.layout()?.to_json(!compact)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_preview(args: &PaperArgs) -> Result<(), Box<dyn std::error::Error>> {
    let paper = prepare(args)?;
    println!("{}", paper.layout()?.to_text());
    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = JsonQuestionFile::new(input).load()?;
    let with_answers = file.questions.iter().filter(|q| q.has_answer()).count();
    let marks = qpaper::model::total_marks(&file.questions);

    println!("{}", "Question File".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if let Some(ref title) = file.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(duration) = file.duration_minutes {
        println!("{}: {} mins", "Duration".bold(), duration);
    }
    println!("{}: {}", "Questions".bold(), file.questions.len());
    println!("{}: {}", "With answers".bold(), with_answers);
    println!("{}: {}", "Sum of marks".bold(), marks);
    if let Some(total) = file.total_marks {
        if total != marks {
            println!(
                "{}: declared total {} differs from sum {}",
                "Warning".yellow().bold(),
                total,
                marks
            );
        }
    }

    let questions_only = QuestionPaper::new(file.title.unwrap_or_default())
        .with_questions(file.questions.clone())
        .layout()?;
    let with_key = QuestionPaper::new("")
        .with_answers(true)
        .with_questions(file.questions)
        .layout()?;

    println!();
    println!("{}", "Layout".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Pages".bold(), questions_only.page_count());
    println!("{}: {}", "Pages with answers".bold(), with_key.page_count());

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "qpaper".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Question paper rendering tool");
    println!();
    println!("License: MIT");
}
