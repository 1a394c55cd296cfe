//! gradetrack CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

use commands::add_assessment::Kind;
use commands::report::ReportFormat;
use commands::summary::SummaryFormat;
use commands::Session;

#[derive(Parser)]
#[command(name = "gradetrack", version, about = "Student grade tracker")]
struct Cli {
    /// Gradebook TOML file (overrides the config)
    #[arg(long, global = true)]
    gradebook: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter config and a demo gradebook
    Init,

    /// Add a new student
    AddStudent {
        /// Full name
        #[arg(long)]
        name: String,

        /// Student ID (unique, case-insensitive)
        #[arg(long)]
        id: String,
    },

    /// Record an assignment or exam for a student
    AddAssessment {
        /// Student ID
        #[arg(long)]
        student: String,

        /// Assessment type
        #[arg(long, value_enum)]
        kind: Kind,

        /// Assessment name
        #[arg(long)]
        name: String,

        /// Score earned
        #[arg(long, allow_negative_numbers = true)]
        score: f64,

        /// Maximum score
        #[arg(long, allow_negative_numbers = true)]
        max_score: f64,

        /// Exam weight multiplier (exams only)
        #[arg(long, allow_negative_numbers = true)]
        weight: Option<f64>,
    },

    /// Show one student's assessments, average, and letter grade
    Report {
        /// Student ID
        #[arg(long)]
        student: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },

    /// Show every student's average and the class average
    Summary {
        /// Output format
        #[arg(long, value_enum, default_value_t = SummaryFormat::Table)]
        format: SummaryFormat,

        /// Also save a JSON class report to this path
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Export per-student summaries to CSV
    Export {
        /// CSV path (defaults to the configured export path)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Display a previously exported CSV file
    ShowExport {
        /// CSV path (defaults to the configured export path)
        #[arg(long)]
        path: Option<PathBuf>,
    },

    /// Check the gradebook for out-of-range or degenerate entries
    Validate,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gradetrack=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = Session::open(cli.config, cli.gradebook).and_then(|session| match cli.command {
        Commands::Init => commands::init::execute(&session),
        Commands::AddStudent { name, id } => commands::add_student::execute(&session, name, id),
        Commands::AddAssessment {
            student,
            kind,
            name,
            score,
            max_score,
            weight,
        } => commands::add_assessment::execute(
            &session, student, kind, name, score, max_score, weight,
        ),
        Commands::Report { student, format } => {
            commands::report::execute(&session, student, format)
        }
        Commands::Summary { format, output } => {
            commands::summary::execute(&session, format, output)
        }
        Commands::Export { output } => commands::export::execute(&session, output),
        Commands::ShowExport { path } => commands::show_export::execute(&session, path),
        Commands::Validate => commands::validate::execute(&session),
    });

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
