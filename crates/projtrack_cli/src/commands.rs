//! One handler per subcommand.
//!
//! Each handler opens the database, wraps its storage access in a single
//! transaction, runs one service operation, commits, and prints. An error
//! on any path drops the transaction, which rolls it back.

use crate::{Cli, Command};
use chrono::NaiveDate;
use log::info;
use projtrack_core::db::{open_db, DbError};
use projtrack_core::service::report::{generate_report, EmployeeLoad};
use projtrack_core::{
    AssignmentService, EmployeeService, NewEmployee, NewProject, NewTask, ParsePriorityError,
    Priority, ProjectOverview, ProjectService, RepoError, SqliteAssignmentRepository,
    SqliteEmployeeRepository, SqliteProjectRepository, SqliteTaskRepository, Task, TaskService,
};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// User-facing failure of one CLI invocation.
#[derive(Debug)]
pub(crate) enum CliError {
    Date {
        value: String,
        source: chrono::format::ParseError,
    },
    Priority(ParsePriorityError),
    Db(DbError),
    Repo(RepoError),
    Sqlite(rusqlite::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date { value, .. } => {
                write!(f, "invalid date `{value}`; expected YYYY-MM-DD")
            }
            Self::Priority(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Date { source, .. } => Some(source),
            Self::Priority(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<DbError> for CliError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<RepoError> for CliError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<rusqlite::Error> for CliError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

pub(crate) fn run(cli: Cli) -> Result<(), CliError> {
    let mut conn = open_db(&cli.db)?;
    match cli.command {
        Command::AddProject {
            name,
            description,
            deadline,
        } => add_project(&mut conn, &name, description, &deadline),
        Command::AddEmployee { name, role } => add_employee(&mut conn, &name, role),
        Command::AddTask {
            title,
            description,
            deadline,
            priority,
            project_id,
        } => add_task(&mut conn, &title, description, &deadline, &priority, project_id),
        Command::AssignEmployee {
            task_id,
            employee_id,
        } => assign_employee(&mut conn, task_id, employee_id),
        Command::CompleteTask { task_id } => complete_task(&mut conn, task_id),
        Command::ListProjects => list_projects(&mut conn),
        Command::ListPendingTasks => list_pending_tasks(&mut conn),
        Command::ViewEmployeeWorkload { employee_id } => {
            view_employee_workload(&mut conn, employee_id)
        }
        Command::GenerateReport => generate_report_cmd(&mut conn),
    }
}

fn add_project(
    conn: &mut Connection,
    name: &str,
    description: String,
    deadline: &str,
) -> Result<(), CliError> {
    let deadline = parse_date(deadline)?;
    let tx = conn.transaction()?;
    let id = {
        let service = ProjectService::new(
            SqliteProjectRepository::new(&tx),
            SqliteTaskRepository::new(&tx),
        );
        service.create_project(&NewProject {
            name: name.to_string(),
            description: optional(description),
            deadline: Some(deadline),
        })?
    };
    tx.commit()?;
    info!("event=add_project module=cli status=ok id={id}");
    println!("Project '{name}' added (id {id})");
    Ok(())
}

fn add_employee(conn: &mut Connection, name: &str, role: String) -> Result<(), CliError> {
    let tx = conn.transaction()?;
    let id = {
        let service = EmployeeService::new(
            SqliteEmployeeRepository::new(&tx),
            SqliteAssignmentRepository::new(&tx),
        );
        service.create_employee(&NewEmployee {
            name: name.to_string(),
            role: optional(role),
        })?
    };
    tx.commit()?;
    info!("event=add_employee module=cli status=ok id={id}");
    println!("Employee '{name}' added (id {id})");
    Ok(())
}

fn add_task(
    conn: &mut Connection,
    title: &str,
    description: String,
    deadline: &str,
    priority: &str,
    project_id: i64,
) -> Result<(), CliError> {
    let deadline = parse_date(deadline)?;
    let priority: Priority = priority.parse().map_err(CliError::Priority)?;
    let tx = conn.transaction()?;
    let id = {
        let service = TaskService::new(SqliteTaskRepository::new(&tx));
        service.create_task(&NewTask {
            title: title.to_string(),
            description: optional(description),
            deadline: Some(deadline),
            priority,
            project_id,
        })?
    };
    tx.commit()?;
    info!("event=add_task module=cli status=ok id={id} project_id={project_id}");
    println!("Task '{title}' added (id {id})");
    Ok(())
}

fn assign_employee(conn: &mut Connection, task_id: i64, employee_id: i64) -> Result<(), CliError> {
    let tx = conn.transaction()?;
    let (employee, task) = {
        let service = AssignmentService::new(
            SqliteEmployeeRepository::new(&tx),
            SqliteTaskRepository::new(&tx),
            SqliteAssignmentRepository::new(&tx),
        );
        // The CLI surface takes <task_id> <employee_id>; the core API is
        // (employee_id, task_id).
        service.assign(employee_id, task_id)?
    };
    tx.commit()?;
    info!("event=assign_employee module=cli status=ok employee_id={employee_id} task_id={task_id}");
    println!(
        "Employee '{}' assigned to task '{}'",
        employee.name, task.title
    );
    Ok(())
}

fn complete_task(conn: &mut Connection, task_id: i64) -> Result<(), CliError> {
    let tx = conn.transaction()?;
    let task = {
        let service = TaskService::new(SqliteTaskRepository::new(&tx));
        service.complete_task(task_id)?
    };
    tx.commit()?;
    info!("event=complete_task module=cli status=ok id={task_id}");
    println!("Task '{}' completed", task.title);
    Ok(())
}

fn list_projects(conn: &mut Connection) -> Result<(), CliError> {
    let tx = conn.transaction()?;
    let overviews = {
        let service = ProjectService::new(
            SqliteProjectRepository::new(&tx),
            SqliteTaskRepository::new(&tx),
        );
        service.list_projects()?
    };
    tx.commit()?;
    for overview in &overviews {
        println!("{}", project_line(overview));
    }
    Ok(())
}

fn list_pending_tasks(conn: &mut Connection) -> Result<(), CliError> {
    let tx = conn.transaction()?;
    let tasks = {
        let service = TaskService::new(SqliteTaskRepository::new(&tx));
        service.list_pending_tasks()?
    };
    tx.commit()?;
    for task in &tasks {
        println!("{}", pending_task_line(task));
    }
    Ok(())
}

fn view_employee_workload(conn: &mut Connection, employee_id: i64) -> Result<(), CliError> {
    let tx = conn.transaction()?;
    let (employee, tasks) = {
        let service = EmployeeService::new(
            SqliteEmployeeRepository::new(&tx),
            SqliteAssignmentRepository::new(&tx),
        );
        service.workload(employee_id)?
    };
    tx.commit()?;
    println!("Workload for {}:", employee.name);
    if tasks.is_empty() {
        println!("(no tasks assigned)");
    }
    for task in &tasks {
        println!("{}", workload_line(task));
    }
    Ok(())
}

fn generate_report_cmd(conn: &mut Connection) -> Result<(), CliError> {
    let tx = conn.transaction()?;
    let report = generate_report(
        &SqliteEmployeeRepository::new(&tx),
        &SqliteTaskRepository::new(&tx),
        &SqliteAssignmentRepository::new(&tx),
    )?;
    tx.commit()?;
    println!("Total tasks: {}", report.totals.total);
    println!("Completed: {}", report.totals.completed);
    println!("Pending: {}", report.totals.pending());
    for load in &report.employees {
        println!("{}", employee_load_line(load));
    }
    Ok(())
}

fn parse_date(value: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| CliError::Date {
        value: value.to_string(),
        source,
    })
}

fn optional(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

fn fmt_date(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| "-".to_string(), |d| d.format(DATE_FORMAT).to_string())
}

fn project_line(overview: &ProjectOverview) -> String {
    format!(
        "{}: {} (Deadline: {}, Progress: {:.2}%)",
        overview.project.id,
        overview.project.name,
        fmt_date(overview.project.deadline),
        overview.progress_percent()
    )
}

fn pending_task_line(task: &Task) -> String {
    format!(
        "{}: {} (Deadline: {}, Priority: {})",
        task.id,
        task.title,
        fmt_date(task.deadline),
        task.priority
    )
}

fn workload_line(task: &Task) -> String {
    let status = if task.completed { "Completed" } else { "Pending" };
    format!(
        "- {} (Deadline: {}, Status: {})",
        task.title,
        fmt_date(task.deadline),
        status
    )
}

fn employee_load_line(load: &EmployeeLoad) -> String {
    format!(
        "{}: {}/{} tasks completed",
        load.name, load.completed, load.assigned
    )
}
