//! In-memory board repository for tests and examples.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{Project, ProjectId, Task, TaskId, User},
    ports::{BoardRepository, BoardRepositoryError, BoardRepositoryResult},
};

/// Thread-safe in-memory board repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardRepository {
    state: Arc<RwLock<InMemoryBoardState>>,
}

#[derive(Debug, Default)]
struct InMemoryBoardState {
    tasks: HashMap<TaskId, Task>,
    projects: HashMap<ProjectId, Project>,
    users: Vec<User>,
    project_index: HashMap<ProjectId, Vec<TaskId>>,
}

impl InMemoryBoardRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a project record.
    ///
    /// Projects are owned by the surrounding system, not the engine; this
    /// seeding hook stands in for that system in tests.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the state lock is poisoned.
    pub fn insert_project(&self, project: Project) -> BoardRepositoryResult<()> {
        let mut state = write_state(&self.state)?;
        state.projects.insert(project.id, project);
        Ok(())
    }

    /// Seeds a user record.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the state lock is poisoned.
    pub fn insert_user(&self, user: User) -> BoardRepositoryResult<()> {
        let mut state = write_state(&self.state)?;
        state.users.push(user);
        Ok(())
    }
}

type StateGuard<'a> = std::sync::RwLockWriteGuard<'a, InMemoryBoardState>;

fn write_state(
    state: &Arc<RwLock<InMemoryBoardState>>,
) -> BoardRepositoryResult<StateGuard<'_>> {
    state
        .write()
        .map_err(|err| BoardRepositoryError::persistence(std::io::Error::other(err.to_string())))
}

fn insert_task(state: &mut InMemoryBoardState, task: &Task) {
    state
        .project_index
        .entry(task.project_id())
        .or_default()
        .push(task.id());
    state.tasks.insert(task.id(), task.clone());
}

#[async_trait]
impl BoardRepository for InMemoryBoardRepository {
    async fn create_task(&self, task: &Task) -> BoardRepositoryResult<()> {
        let mut state = write_state(&self.state)?;
        if state.tasks.contains_key(&task.id()) {
            return Err(BoardRepositoryError::DuplicateTask(task.id()));
        }
        insert_task(&mut state, task);
        Ok(())
    }

    async fn create_subtasks(&self, tasks: &[Task]) -> BoardRepositoryResult<()> {
        let mut state = write_state(&self.state)?;
        // Validate the whole batch before touching the store so a rejected
        // task leaves zero new records behind.
        for task in tasks {
            if state.tasks.contains_key(&task.id()) {
                return Err(BoardRepositoryError::DuplicateTask(task.id()));
            }
        }
        for task in tasks {
            insert_task(&mut state, task);
        }
        Ok(())
    }

    async fn update_task(&self, task: &Task) -> BoardRepositoryResult<()> {
        let mut state = write_state(&self.state)?;
        if !state.tasks.contains_key(&task.id()) {
            return Err(BoardRepositoryError::TaskNotFound(task.id()));
        }
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_task(&self, id: TaskId) -> BoardRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| {
            BoardRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn find_project(&self, id: ProjectId) -> BoardRepositoryResult<Option<Project>> {
        let state = self.state.read().map_err(|err| {
            BoardRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.projects.get(&id).cloned())
    }

    async fn list_active_users(&self) -> BoardRepositoryResult<Vec<User>> {
        let state = self.state.read().map_err(|err| {
            BoardRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .users
            .iter()
            .filter(|user| user.is_active)
            .cloned()
            .collect())
    }

    async fn list_tasks_by_project(
        &self,
        project_id: ProjectId,
    ) -> BoardRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            BoardRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let tasks = state
            .project_index
            .get(&project_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.tasks.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(tasks)
    }
}
