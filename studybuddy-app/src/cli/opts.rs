use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, ValueEnum)]
pub enum StoreKind {
    Json,
    Memory,
}

#[derive(Debug, Parser, Clone)]
#[command(name = "studybuddy", version, about = "Study Buddy CLI")]
pub struct Cli {
    /// Storage backend (memory keeps nothing across runs)
    #[arg(long, value_enum, default_value_t = StoreKind::Json)]
    pub store: StoreKind,

    /// Store file path when --store json (defaults to app data dir)
    #[arg(long)]
    pub store_path: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Answer a question and file it as a flashcard
    Solve(SolveCmd),
    /// Flashcard operations
    #[command(subcommand)]
    Cards(CardsCmd),
    /// Ask history
    #[command(subcommand)]
    History(HistoryCmd),
    /// Streak and study analytics
    Insights,
    /// Export flashcards
    #[command(subcommand)]
    Export(ExportCmd),
}

#[derive(Debug, Args, Clone)]
pub struct SolveCmd {
    /// The question, free-form text
    pub question: Vec<String>,

    /// Review difficulty label: easy, medium, or hard
    #[arg(long, default_value = "medium")]
    pub difficulty: String,
}

#[derive(Debug, Subcommand, Clone)]
pub enum CardsCmd {
    /// All cards, in creation order
    List,
    /// Cards due for review now
    Due,
}

#[derive(Debug, Subcommand, Clone)]
pub enum HistoryCmd {
    List {
        #[arg(long)]
        search: Option<String>,
    },
    Clear,
}

#[derive(Debug, Subcommand, Clone)]
pub enum ExportCmd {
    Json { path: PathBuf },
    Csv { path: PathBuf },
    Anki { path: PathBuf },
    Markdown { path: PathBuf },
}
