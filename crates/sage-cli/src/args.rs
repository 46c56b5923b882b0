use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CompleteArgs, DateArgs, GenerateArgs, MaterialsArgs, TasksArgs};

/// Main command-line interface for the Sage study planner
///
/// Sage turns a skill, a daily time budget and an availability profile into
/// a four-week day-by-day study schedule, enriches every task with
/// learning-material links, and tracks completion. Plan generation can use
/// an external generative-model command; without one, a deterministic local
/// schedule is built instead.
#[derive(Parser)]
#[command(version, about, name = "sage")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/sage/sage.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// User the plans belong to
    #[arg(long, global = true, default_value = "default")]
    pub user: String,

    /// External generator command (reads the prompt on stdin, writes the
    /// response to stdout). Without it, generation uses the offline
    /// fallback path.
    #[arg(long, global = true)]
    pub generator_cmd: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Sage CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a new four-week study plan
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// List task titles for today, this week or this month
    #[command(alias = "t")]
    Tasks(TasksArgs),
    /// List all plans in the user's history
    #[command(alias = "p")]
    Plans,
    /// Show the schedule for a specific date
    #[command(alias = "d")]
    Date(DateArgs),
    /// List tasks completed yesterday
    Review,
    /// Show review materials for yesterday's first topic
    Yesterday,
    /// Look up learning materials for a topic
    #[command(alias = "m")]
    Materials(MaterialsArgs),
    /// Mark a task as done or not done
    #[command(alias = "c")]
    Complete(CompleteArgs),
}
