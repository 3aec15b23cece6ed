use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use dayplan_core::{Language, parser::DEFAULT_REPEAT_CYCLE};

use crate::cli::{DocumentCommands, PlanCommands, TodoCommands};

/// Turn generated nutrition and workout plans into daily checklists
///
/// Dayplan imports a generated plan document, recovers its day-by-day
/// schedule (expanding "Day 8 to Day 14" style repeats), and tracks which
/// meals and exercises of each day have been done once the plan is confirmed
/// for a date range.
#[derive(Parser)]
#[command(version, about, name = "dayplan", arg_required_else_help = true)]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/dayplan/dayplan.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Language the plan documents are written in
    #[arg(long, global = true, value_enum, default_value_t = LanguageArg::En)]
    pub language: LanguageArg,

    /// JSON file with a custom marker vocabulary; overrides --language
    #[arg(long, global = true)]
    pub vocabulary: Option<PathBuf>,

    /// Days between a repeated range and the day it copies
    #[arg(long, global = true, default_value_t = DEFAULT_REPEAT_CYCLE)]
    pub repeat_cycle: u32,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Dayplan CLI
///
/// - `document`: import and inspect generated plan documents
/// - `plan`: confirm a document for a date range and view its calendar
/// - `todo`: view and check off one day's checklist
#[derive(Subcommand)]
pub enum Commands {
    /// Manage generated plan documents
    #[command(alias = "d")]
    Document {
        #[command(subcommand)]
        command: DocumentCommands,
    },
    /// Manage confirmed plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Check off a day's todos
    #[command(alias = "t")]
    Todo {
        #[command(subcommand)]
        command: TodoCommands,
    },
}

/// Built-in document languages.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LanguageArg {
    /// English markers ("Day 1:", "Nutrition Plan")
    En,
    /// Vietnamese markers ("Ngày 1:", "Kế hoạch Dinh dưỡng")
    Vi,
}

impl From<LanguageArg> for Language {
    fn from(val: LanguageArg) -> Self {
        match val {
            LanguageArg::En => Language::English,
            LanguageArg::Vi => Language::Vietnamese,
        }
    }
}
