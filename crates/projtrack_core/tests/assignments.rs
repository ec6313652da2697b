use projtrack_core::db::open_db_in_memory;
use projtrack_core::{
    AssignmentService, EmployeeService, NewEmployee, NewProject, NewTask, Priority,
    ProjectRepository, RepoError, SqliteAssignmentRepository, SqliteEmployeeRepository,
    SqliteProjectRepository, SqliteTaskRepository, TaskRepository,
};
use rusqlite::Connection;

#[test]
fn assign_links_employee_to_task() {
    let conn = open_db_in_memory().unwrap();
    let (employee_id, task_id) = seed_employee_and_task(&conn);

    let (employee, task) = assignment_service(&conn)
        .assign(employee_id, task_id)
        .unwrap();
    assert_eq!(employee.id, employee_id);
    assert_eq!(task.id, task_id);
    assert_eq!(assignment_count(&conn), 1);
}

#[test]
fn duplicate_assignment_errors_and_keeps_one_row() {
    let conn = open_db_in_memory().unwrap();
    let (employee_id, task_id) = seed_employee_and_task(&conn);
    let service = assignment_service(&conn);

    service.assign(employee_id, task_id).unwrap();
    let err = service.assign(employee_id, task_id).unwrap_err();

    assert!(matches!(
        err,
        RepoError::AlreadyAssigned {
            employee_id: e,
            task_id: t,
        } if e == employee_id && t == task_id
    ));
    assert_eq!(assignment_count(&conn), 1);
}

#[test]
fn assign_with_missing_employee_inserts_nothing() {
    let conn = open_db_in_memory().unwrap();
    let (_, task_id) = seed_employee_and_task(&conn);

    let err = assignment_service(&conn).assign(99, task_id).unwrap_err();
    assert!(matches!(err, RepoError::EmployeeNotFound(99)));
    assert_eq!(assignment_count(&conn), 0);
}

#[test]
fn assign_with_missing_task_inserts_nothing() {
    let conn = open_db_in_memory().unwrap();
    let (employee_id, _) = seed_employee_and_task(&conn);

    let err = assignment_service(&conn).assign(employee_id, 99).unwrap_err();
    assert!(matches!(err, RepoError::TaskNotFound(99)));
    assert_eq!(assignment_count(&conn), 0);
}

#[test]
fn double_assign_leaves_single_workload_entry() {
    let conn = open_db_in_memory().unwrap();
    let projects = SqliteProjectRepository::new(&conn);
    let tasks = SqliteTaskRepository::new(&conn);

    let project_id = projects.create_project(&NewProject::new("Website")).unwrap();
    let task_id = tasks
        .create_task(&NewTask::new("First task", Priority::Medium, project_id))
        .unwrap();
    let alice_id = EmployeeService::new(
        SqliteEmployeeRepository::new(&conn),
        SqliteAssignmentRepository::new(&conn),
    )
    .create_employee(&NewEmployee::new("Alice"))
    .unwrap();

    let service = assignment_service(&conn);
    service.assign(alice_id, task_id).unwrap();
    assert!(service.assign(alice_id, task_id).is_err());

    let (alice, workload) = EmployeeService::new(
        SqliteEmployeeRepository::new(&conn),
        SqliteAssignmentRepository::new(&conn),
    )
    .workload(alice_id)
    .unwrap();
    assert_eq!(alice.name, "Alice");
    assert_eq!(workload.len(), 1);
    assert_eq!(workload[0].id, task_id);
}

#[test]
fn workload_reports_completion_status_per_task() {
    let conn = open_db_in_memory().unwrap();
    let projects = SqliteProjectRepository::new(&conn);
    let tasks = SqliteTaskRepository::new(&conn);

    let project_id = projects.create_project(&NewProject::new("Ops")).unwrap();
    let open_id = tasks
        .create_task(&NewTask::new("triage", Priority::Low, project_id))
        .unwrap();
    let done_id = tasks
        .create_task(&NewTask::new("deploy", Priority::High, project_id))
        .unwrap();
    tasks.set_completed(done_id, true).unwrap();

    let employee_service = EmployeeService::new(
        SqliteEmployeeRepository::new(&conn),
        SqliteAssignmentRepository::new(&conn),
    );
    let bob_id = employee_service
        .create_employee(&NewEmployee::new("Bob"))
        .unwrap();

    let assignments = assignment_service(&conn);
    assignments.assign(bob_id, open_id).unwrap();
    assignments.assign(bob_id, done_id).unwrap();

    let (_, workload) = employee_service.workload(bob_id).unwrap();
    assert_eq!(workload.len(), 2);
    assert!(!workload[0].completed);
    assert!(workload[1].completed);
}

#[test]
fn workload_for_missing_employee_fails_with_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = EmployeeService::new(
        SqliteEmployeeRepository::new(&conn),
        SqliteAssignmentRepository::new(&conn),
    );

    let err = service.workload(5).unwrap_err();
    assert!(matches!(err, RepoError::EmployeeNotFound(5)));
}

fn assignment_service(
    conn: &Connection,
) -> AssignmentService<
    SqliteEmployeeRepository<'_>,
    SqliteTaskRepository<'_>,
    SqliteAssignmentRepository<'_>,
> {
    AssignmentService::new(
        SqliteEmployeeRepository::new(conn),
        SqliteTaskRepository::new(conn),
        SqliteAssignmentRepository::new(conn),
    )
}

fn seed_employee_and_task(conn: &Connection) -> (i64, i64) {
    let project_id = SqliteProjectRepository::new(conn)
        .create_project(&NewProject::new("Fixture"))
        .unwrap();
    let task_id = SqliteTaskRepository::new(conn)
        .create_task(&NewTask::new("fixture task", Priority::Medium, project_id))
        .unwrap();
    let employee_id = EmployeeService::new(
        SqliteEmployeeRepository::new(conn),
        SqliteAssignmentRepository::new(conn),
    )
    .create_employee(&NewEmployee::new("Fixture person"))
    .unwrap();
    (employee_id, task_id)
}

fn assignment_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM employee_task;", [], |row| row.get(0))
        .unwrap()
}
