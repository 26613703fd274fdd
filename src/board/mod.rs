//! In-memory task board for the selected project.
//!
//! The board partitions tasks into status columns and applies moves as
//! single state transitions: the caller updates the model, issues one PUT,
//! and on failure either restores the previous status or replaces the whole
//! task list with a fresh fetch. Concurrent moves are not queued and
//! conflicts are not detected.

pub mod filter;

pub use filter::{AssigneeFilter, TaskFilter};

use crate::errors::BoardError;
use crate::models::{Task, TaskStatus};

/// One status column and the tasks currently in it, in fetch order.
#[derive(Debug)]
pub struct Column<'a> {
    pub status: TaskStatus,
    pub tasks: Vec<&'a Task>,
}

/// Result of applying a move to the model.
#[derive(Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The status changed; `previous` allows the caller to undo locally.
    Moved { previous: TaskStatus },
    /// The task was already in the target column.
    Unmoved,
}

/// Transient board state for one project. Rebuilt from the server whenever
/// the project selection changes.
#[derive(Debug)]
pub struct Board {
    project_id: i64,
    tasks: Vec<Task>,
}

impl Board {
    pub fn new(project_id: i64, tasks: Vec<Task>) -> Self {
        Self { project_id, tasks }
    }

    pub fn project_id(&self) -> i64 {
        self.project_id
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn task(&self, task_id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    /// Partition every task into its status column. Each task lands in
    /// exactly one column; columns follow `TaskStatus::ALL` order.
    pub fn columns(&self) -> Vec<Column<'_>> {
        self.partition(|_| true)
    }

    /// Partition only the tasks matching `filter`.
    pub fn filtered_columns(&self, filter: &TaskFilter) -> Vec<Column<'_>> {
        self.partition(|task| filter.matches(task))
    }

    fn partition<'a, F>(&'a self, keep: F) -> Vec<Column<'a>>
    where
        F: Fn(&Task) -> bool,
    {
        TaskStatus::ALL
            .iter()
            .map(|&status| Column {
                status,
                tasks: self
                    .tasks
                    .iter()
                    .filter(|&t| t.status == status && keep(t))
                    .collect(),
            })
            .collect()
    }

    /// Number of tasks currently in `status`, ignoring filters.
    pub fn status_count(&self, status: TaskStatus) -> usize {
        self.tasks.iter().filter(|t| t.status == status).count()
    }

    /// Apply a move to the model. The caller is responsible for issuing the
    /// PUT; on server failure, restore via [`Board::revert_move`] or replace
    /// the list with a refetch.
    pub fn move_task(
        &mut self,
        task_id: i64,
        target: TaskStatus,
    ) -> Result<MoveOutcome, BoardError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or(BoardError::UnknownTask { id: task_id })?;
        if task.status == target {
            return Ok(MoveOutcome::Unmoved);
        }
        let previous = task.status;
        task.status = target;
        Ok(MoveOutcome::Moved { previous })
    }

    /// Undo a move that the server rejected.
    pub fn revert_move(&mut self, task_id: i64, previous: TaskStatus) -> Result<(), BoardError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or(BoardError::UnknownTask { id: task_id })?;
        task.status = previous;
        Ok(())
    }

    /// Reconcile with server state after a refetch.
    pub fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Insert a server-confirmed task, or replace the existing one with the
    /// same id.
    pub fn upsert_task(&mut self, task: Task) {
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => *existing = task,
            None => self.tasks.push(task),
        }
    }

    pub fn remove_task(&mut self, task_id: i64) -> Result<Task, BoardError> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.id == task_id)
            .ok_or(BoardError::UnknownTask { id: task_id })?;
        Ok(self.tasks.remove(idx))
    }
}
