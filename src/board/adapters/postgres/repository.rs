//! `PostgreSQL` repository implementation for board storage.

use super::{
    models::{NewTaskRow, ProjectRow, TaskRow, UserRow},
    schema::{projects, tasks, users},
};
use crate::board::{
    domain::{
        PersistedTaskData, Project, ProjectId, ProjectStatus, Task, TaskId, TaskPriority,
        TaskStatus, User, UserId, UserRole,
    },
    ports::{BoardRepository, BoardRepositoryError, BoardRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by board adapters.
pub type BoardPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed board repository.
#[derive(Debug, Clone)]
pub struct PostgresBoardRepository {
    pool: BoardPgPool,
}

impl From<DieselError> for BoardRepositoryError {
    fn from(err: DieselError) -> Self {
        Self::persistence(err)
    }
}

impl PostgresBoardRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> BoardRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> BoardRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(BoardRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(BoardRepositoryError::persistence)?
    }
}

#[async_trait]
impl BoardRepository for PostgresBoardRepository {
    async fn create_task(&self, task: &Task) -> BoardRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        BoardRepositoryError::DuplicateTask(task_id)
                    }
                    _ => BoardRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn create_subtasks(&self, batch: &[Task]) -> BoardRepositoryResult<()> {
        let new_rows: Vec<NewTaskRow> = batch.iter().map(to_new_row).collect();
        let batch_ids: Vec<uuid::Uuid> = batch.iter().map(|task| task.id().into_inner()).collect();

        self.run_blocking(move |connection| {
            connection.transaction::<(), BoardRepositoryError, _>(|tx| {
                // This pre-check improves semantic error reporting but is not
                // relied on for correctness: the primary key still enforces
                // integrity in the TOCTOU window between check and insert,
                // and the transaction discards every row on failure.
                let existing: Option<uuid::Uuid> = tasks::table
                    .filter(tasks::id.eq_any(&batch_ids))
                    .select(tasks::id)
                    .first(tx)
                    .optional()?;
                if let Some(duplicate_id) = existing {
                    return Err(BoardRepositoryError::DuplicateTask(TaskId::from_uuid(
                        duplicate_id,
                    )));
                }

                diesel::insert_into(tasks::table)
                    .values(&new_rows)
                    .execute(tx)?;
                Ok(())
            })
        })
        .await
    }

    async fn update_task(&self, task: &Task) -> BoardRepositoryResult<()> {
        let task_id = task.id();
        let changed_row = to_new_row(task);

        self.run_blocking(move |connection| {
            let affected = diesel::update(tasks::table.find(task_id.into_inner()))
                .set(&changed_row)
                .execute(connection)
                .map_err(BoardRepositoryError::persistence)?;
            if affected == 0 {
                return Err(BoardRepositoryError::TaskNotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_task(&self, id: TaskId) -> BoardRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.into_inner())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(BoardRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn find_project(&self, id: ProjectId) -> BoardRepositoryResult<Option<Project>> {
        self.run_blocking(move |connection| {
            let row = projects::table
                .find(id.into_inner())
                .select(ProjectRow::as_select())
                .first::<ProjectRow>(connection)
                .optional()
                .map_err(BoardRepositoryError::persistence)?;
            row.map(row_to_project).transpose()
        })
        .await
    }

    async fn list_active_users(&self) -> BoardRepositoryResult<Vec<User>> {
        self.run_blocking(move |connection| {
            let rows = users::table
                .filter(users::is_active.eq(true))
                .select(UserRow::as_select())
                .load::<UserRow>(connection)
                .map_err(BoardRepositoryError::persistence)?;
            rows.into_iter().map(row_to_user).collect()
        })
        .await
    }

    async fn list_tasks_by_project(
        &self,
        project_id: ProjectId,
    ) -> BoardRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::project_id.eq(project_id.into_inner()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(BoardRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        project_id: task.project_id().into_inner(),
        title: task.title().to_owned(),
        description: task.description().map(str::to_owned),
        status: task.status().as_str().to_owned(),
        priority: task.priority().as_str().to_owned(),
        estimated_hours: task.estimated_hours(),
        actual_hours: task.actual_hours(),
        due_date: task.due_date(),
        completed_date: task.completed_date(),
        assigned_to: task.assigned_to().map(UserId::into_inner),
        parent_task_id: task.parent_task_id().map(TaskId::into_inner),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn row_to_task(row: TaskRow) -> BoardRepositoryResult<Task> {
    let status =
        TaskStatus::try_from(row.status.as_str()).map_err(BoardRepositoryError::persistence)?;
    let priority =
        TaskPriority::try_from(row.priority.as_str()).map_err(BoardRepositoryError::persistence)?;

    let data = PersistedTaskData {
        id: TaskId::from_uuid(row.id),
        project_id: ProjectId::from_uuid(row.project_id),
        title: row.title,
        description: row.description,
        status,
        priority,
        estimated_hours: row.estimated_hours,
        actual_hours: row.actual_hours,
        due_date: row.due_date,
        completed_date: row.completed_date,
        assigned_to: row.assigned_to.map(UserId::from_uuid),
        parent_task_id: row.parent_task_id.map(TaskId::from_uuid),
        created_at: row.created_at,
        updated_at: row.updated_at,
    };
    Ok(Task::from_persisted(data))
}

fn row_to_project(row: ProjectRow) -> BoardRepositoryResult<Project> {
    let status =
        ProjectStatus::try_from(row.status.as_str()).map_err(BoardRepositoryError::persistence)?;

    Ok(Project {
        id: ProjectId::from_uuid(row.id),
        name: row.name,
        department: row.department,
        manager_id: UserId::from_uuid(row.manager_id),
        status,
        budget: row.budget,
        actual_cost: row.actual_cost,
        completion_percentage: row.completion_percentage,
    })
}

fn row_to_user(row: UserRow) -> BoardRepositoryResult<User> {
    let role = UserRole::try_from(row.role.as_str()).map_err(BoardRepositoryError::persistence)?;

    Ok(User {
        id: UserId::from_uuid(row.id),
        username: row.username,
        full_name: row.full_name,
        role,
        department: row.department,
        is_active: row.is_active,
    })
}
