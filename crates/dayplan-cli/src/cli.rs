//! Subcommand arguments and their handlers.
//!
//! Argument structs carry the clap derives and convert into the core's plain
//! parameter types, so the core stays free of interface-specific attributes:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker
//! ```

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use dayplan_core::{Tracker, params::*};

use crate::renderer::TerminalRenderer;

// ============================================================================
// CLI Argument Wrapper Implementations
// ============================================================================

/// Selects whose records a command works on.
#[derive(Args)]
pub struct OwnerArg {
    /// ID of the user the records belong to
    #[arg(long = "owner", default_value_t = 1)]
    pub owner_id: u64,
}

impl From<OwnerArg> for Owner {
    fn from(val: OwnerArg) -> Self {
        Owner {
            owner_id: val.owner_id,
        }
    }
}

/// Import a generated plan document
///
/// The file is stored verbatim; parsing happens on every read so parser
/// improvements apply to documents imported earlier.
#[derive(Args)]
pub struct ImportDocumentArgs {
    /// Path of the generated plan text
    #[arg(help = "Path of the generated plan text file to import")]
    pub file: PathBuf,
    #[command(flatten)]
    pub owner: OwnerArg,
    /// Title for listings; defaults to the document's first line
    #[arg(short, long)]
    pub title: Option<String>,
    /// Requested plan length in days; later day numbers are ignored
    #[arg(short, long)]
    pub days: Option<u32>,
    /// Body-status label the plan was generated for
    #[arg(short, long)]
    pub label: Option<String>,
}

impl ImportDocumentArgs {
    /// Reads the document file and builds the core parameters.
    pub fn into_params(self) -> Result<ImportDocument> {
        let body = fs::read_to_string(&self.file)
            .with_context(|| format!("Failed to read {}", self.file.display()))?;
        Ok(ImportDocument {
            owner_id: self.owner.owner_id,
            title: self.title.unwrap_or_default(),
            body,
            day_count: self.days,
            status_label: self.label,
        })
    }
}

/// Show a document's parsed schedule
#[derive(Args)]
pub struct ShowDocumentArgs {
    /// ID of the document to parse
    #[arg(help = "Unique identifier of the document to show")]
    pub id: u64,
}

impl From<ShowDocumentArgs> for Id {
    fn from(val: ShowDocumentArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum DocumentCommands {
    /// Import a generated plan document
    #[command(alias = "i")]
    Import(ImportDocumentArgs),
    /// List imported documents
    #[command(aliases = ["l", "ls"])]
    List(OwnerArg),
    /// Show a document's parsed schedule
    #[command(alias = "s")]
    Show(ShowDocumentArgs),
}

/// Confirm a document as a dated plan
///
/// Day 1 of the document falls on the start date. Days past the end date are
/// left out of the calendar.
#[derive(Args)]
pub struct ConfirmPlanArgs {
    /// ID of the document to follow
    #[arg(help = "Unique identifier of the document to confirm")]
    pub document_id: u64,
    #[command(flatten)]
    pub owner: OwnerArg,
    /// Name of the plan
    #[arg(short, long)]
    pub name: String,
    /// First day of the plan (YYYY-MM-DD)
    #[arg(short, long)]
    pub start: String,
    /// Last day of the plan (YYYY-MM-DD)
    #[arg(short, long)]
    pub end: String,
}

impl From<ConfirmPlanArgs> for ConfirmPlan {
    fn from(val: ConfirmPlanArgs) -> Self {
        ConfirmPlan {
            owner_id: val.owner.owner_id,
            document_id: val.document_id,
            name: val.name,
            start_date: val.start,
            end_date: val.end,
        }
    }
}

/// Show a plan's calendar with progress
#[derive(Args)]
pub struct ShowPlanArgs {
    /// ID of the plan to display
    #[arg(help = "Unique identifier of the plan to show")]
    pub id: u64,
    #[command(flatten)]
    pub owner: OwnerArg,
}

impl From<ShowPlanArgs> for PlanAccess {
    fn from(val: ShowPlanArgs) -> Self {
        PlanAccess {
            plan_id: val.id,
            principal: val.owner.owner_id,
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Confirm a document as a dated plan
    #[command(alias = "c")]
    Confirm(ConfirmPlanArgs),
    /// Show a plan's calendar with progress
    #[command(alias = "s")]
    Show(ShowPlanArgs),
    /// Show the most recently confirmed plan
    #[command(alias = "cur")]
    Current(OwnerArg),
    /// List confirmed plans
    #[command(aliases = ["l", "ls"])]
    List(OwnerArg),
}

/// Show one day's checklist
#[derive(Args)]
pub struct ShowDayArgs {
    /// ID of the plan
    pub plan_id: u64,
    /// Day number within the plan, starting at 1
    pub day: u32,
    #[command(flatten)]
    pub owner: OwnerArg,
}

impl From<ShowDayArgs> for DayAccess {
    fn from(val: ShowDayArgs) -> Self {
        DayAccess {
            plan_id: val.plan_id,
            principal: val.owner.owner_id,
            day: val.day,
        }
    }
}

/// Check or uncheck one todo
///
/// Todos are addressed by their position in the day's checklist as shown by
/// `todo show`.
#[derive(Args)]
pub struct CheckTodoArgs {
    /// ID of the plan
    pub plan_id: u64,
    /// Day number within the plan, starting at 1
    pub day: u32,
    /// Position of the todo in the day's checklist, starting at 0
    pub index: usize,
    #[command(flatten)]
    pub owner: OwnerArg,
    /// Uncheck the todo instead
    #[arg(long)]
    pub undo: bool,
}

impl From<CheckTodoArgs> for SetCompletion {
    fn from(val: CheckTodoArgs) -> Self {
        SetCompletion {
            plan_id: val.plan_id,
            principal: val.owner.owner_id,
            day: val.day,
            index: val.index,
            completed: !val.undo,
        }
    }
}

#[derive(Subcommand)]
pub enum TodoCommands {
    /// Show one day's checklist
    #[command(alias = "s")]
    Show(ShowDayArgs),
    /// Check or uncheck one todo
    #[command(alias = "c")]
    Check(CheckTodoArgs),
}

// ============================================================================
// Command Handlers
// ============================================================================

/// Runs parsed commands against a tracker and renders the results.
pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    pub async fn handle_document_command(&self, command: DocumentCommands) -> Result<()> {
        match command {
            DocumentCommands::Import(args) => {
                let params = args.into_params()?;
                let result = self
                    .tracker
                    .import_document_result(&params)
                    .await
                    .context("Failed to import document")?;
                self.renderer.render(&result.to_string())
            }
            DocumentCommands::List(args) => {
                let documents = self
                    .tracker
                    .list_documents_display(&args.into())
                    .await
                    .context("Failed to list documents")?;
                self.renderer.render(&documents.to_string())
            }
            DocumentCommands::Show(args) => {
                let (document, parsed) = self
                    .tracker
                    .parse_document(&args.into())
                    .await
                    .context("Failed to parse document")?;
                self.renderer.render(&format!("{document}\n{parsed}"))
            }
        }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Confirm(args) => {
                let result = self
                    .tracker
                    .confirm_plan_result(&args.into())
                    .await
                    .context("Failed to confirm plan")?;
                self.renderer.render(&result.to_string())
            }
            PlanCommands::Show(args) => {
                let schedule = self
                    .tracker
                    .plan_schedule(&args.into())
                    .await
                    .context("Failed to load plan")?;
                self.renderer.render(&schedule.to_string())
            }
            PlanCommands::Current(args) => {
                let schedule = self
                    .tracker
                    .current_schedule(&args.into())
                    .await
                    .context("Failed to load current plan")?;
                match schedule {
                    Some(schedule) => self.renderer.render(&schedule.to_string()),
                    None => self.renderer.render("No confirmed plan found.\n"),
                }
            }
            PlanCommands::List(args) => {
                let plans = self
                    .tracker
                    .list_plans_display(&args.into())
                    .await
                    .context("Failed to list plans")?;
                self.renderer.render(&plans.to_string())
            }
        }
    }

    pub async fn handle_todo_command(&self, command: TodoCommands) -> Result<()> {
        match command {
            TodoCommands::Show(args) => {
                let day = self
                    .tracker
                    .day_checklist(&args.into())
                    .await
                    .context("Failed to load day")?;
                self.renderer.render(&day.to_string())
            }
            TodoCommands::Check(args) => {
                let result = self
                    .tracker
                    .set_completion_result(&args.into())
                    .await
                    .context("Failed to update todo")?;
                self.renderer.render(&result.to_string())
            }
        }
    }
}
