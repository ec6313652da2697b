use projtrack_core::db::open_db_in_memory;
use projtrack_core::service::report::generate_report;
use projtrack_core::{
    AssignmentService, EmployeeService, NewEmployee, NewProject, NewTask, Priority,
    ProjectRepository, Report, SqliteAssignmentRepository, SqliteEmployeeRepository,
    SqliteProjectRepository, SqliteTaskRepository, TaskRepository,
};
use rusqlite::Connection;

#[test]
fn empty_store_reports_zero_totals() {
    let conn = open_db_in_memory().unwrap();

    let report = build_report(&conn);
    assert_eq!(report.totals.total, 0);
    assert_eq!(report.totals.completed, 0);
    assert_eq!(report.totals.pending(), 0);
    assert!(report.employees.is_empty());
}

#[test]
fn completed_plus_pending_equals_total_across_states() {
    let conn = open_db_in_memory().unwrap();
    let projects = SqliteProjectRepository::new(&conn);
    let tasks = SqliteTaskRepository::new(&conn);

    let project_id = projects.create_project(&NewProject::new("Audit")).unwrap();
    let task_ids: Vec<_> = (0..5)
        .map(|n| {
            tasks
                .create_task(&NewTask::new(format!("item {n}"), Priority::Low, project_id))
                .unwrap()
        })
        .collect();

    for task_id in task_ids {
        let report = build_report(&conn);
        assert_eq!(
            report.totals.completed + report.totals.pending(),
            report.totals.total
        );
        tasks.set_completed(task_id, true).unwrap();
    }

    let report = build_report(&conn);
    assert_eq!(report.totals.total, 5);
    assert_eq!(report.totals.completed, 5);
    assert_eq!(report.totals.pending(), 0);
}

#[test]
fn per_employee_breakdown_counts_completed_and_assigned() {
    let conn = open_db_in_memory().unwrap();
    let projects = SqliteProjectRepository::new(&conn);
    let tasks = SqliteTaskRepository::new(&conn);
    let employee_service = EmployeeService::new(
        SqliteEmployeeRepository::new(&conn),
        SqliteAssignmentRepository::new(&conn),
    );
    let assignments = AssignmentService::new(
        SqliteEmployeeRepository::new(&conn),
        SqliteTaskRepository::new(&conn),
        SqliteAssignmentRepository::new(&conn),
    );

    let project_id = projects.create_project(&NewProject::new("Launch")).unwrap();
    let first = tasks
        .create_task(&NewTask::new("first", Priority::High, project_id))
        .unwrap();
    let second = tasks
        .create_task(&NewTask::new("second", Priority::Low, project_id))
        .unwrap();
    tasks.set_completed(first, true).unwrap();

    let alice = employee_service
        .create_employee(&NewEmployee::new("Alice"))
        .unwrap();
    let bob = employee_service
        .create_employee(&NewEmployee::new("Bob"))
        .unwrap();
    assignments.assign(alice, first).unwrap();
    assignments.assign(alice, second).unwrap();
    assignments.assign(bob, second).unwrap();

    let report = build_report(&conn);
    assert_eq!(report.totals.total, 2);
    assert_eq!(report.totals.completed, 1);

    assert_eq!(report.employees.len(), 2);
    let alice_load = &report.employees[0];
    assert_eq!(alice_load.name, "Alice");
    assert_eq!(alice_load.assigned, 2);
    assert_eq!(alice_load.completed, 1);
    let bob_load = &report.employees[1];
    assert_eq!(bob_load.name, "Bob");
    assert_eq!(bob_load.assigned, 1);
    assert_eq!(bob_load.completed, 0);
}

#[test]
fn unassigned_employee_appears_with_zero_counts() {
    let conn = open_db_in_memory().unwrap();
    let employee_service = EmployeeService::new(
        SqliteEmployeeRepository::new(&conn),
        SqliteAssignmentRepository::new(&conn),
    );
    employee_service
        .create_employee(&NewEmployee::new("Idle"))
        .unwrap();

    let report = build_report(&conn);
    assert_eq!(report.employees.len(), 1);
    assert_eq!(report.employees[0].assigned, 0);
    assert_eq!(report.employees[0].completed, 0);
}

fn build_report(conn: &Connection) -> Report {
    generate_report(
        &SqliteEmployeeRepository::new(conn),
        &SqliteTaskRepository::new(conn),
        &SqliteAssignmentRepository::new(conn),
    )
    .unwrap()
}
