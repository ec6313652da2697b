//! Command-line entry point for projtrack.
//!
//! # Responsibility
//! - Parse the subcommand surface and global options.
//! - Map handler errors to a one-line message and a non-zero exit code.

use clap::{ArgAction, Parser, Subcommand};
use projtrack_core::{default_log_level, init_logging};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "projtrack", version, about = "Project management from the command line")]
struct Cli {
    /// Path to the SQLite database file.
    #[arg(long, default_value = "projtrack.db", global = true)]
    db: PathBuf,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add a new project.
    AddProject {
        name: String,
        description: String,
        /// Deadline as YYYY-MM-DD.
        deadline: String,
    },
    /// Add a new employee.
    AddEmployee { name: String, role: String },
    /// Add a new task under a project.
    AddTask {
        title: String,
        description: String,
        /// Deadline as YYYY-MM-DD.
        deadline: String,
        /// One of Low, Medium or High.
        priority: String,
        project_id: i64,
    },
    /// Assign an employee to a task.
    AssignEmployee { task_id: i64, employee_id: i64 },
    /// Mark a task as completed.
    CompleteTask { task_id: i64 },
    /// List all projects with completion progress.
    ListProjects,
    /// List all tasks not yet completed.
    ListPendingTasks,
    /// Show every task assigned to an employee.
    ViewEmployeeWorkload { employee_id: i64 },
    /// Print global totals and a per-employee breakdown.
    GenerateReport,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => default_log_level(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    if let Err(err) = init_logging(level) {
        eprintln!("warning: {err}");
    }

    match commands::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
