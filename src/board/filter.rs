//! Board filtering: a linear predicate scan over the task list.

use crate::models::{Task, TaskPriority};

/// Assignee criterion. "Unassigned" is an explicit choice, distinct from not
/// filtering by assignee at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssigneeFilter {
    Member(i64),
    Unassigned,
}

/// Search/priority/assignee filter. Criteria compose conjunctively; a
/// default filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Case-insensitive substring matched against title or description.
    pub search: Option<String>,
    pub priority: Option<TaskPriority>,
    pub assignee: Option<AssigneeFilter>,
}

impl TaskFilter {
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.priority.is_none() && self.assignee.is_none()
    }

    pub fn matches(&self, task: &Task) -> bool {
        if let Some(needle) = &self.search {
            let needle = needle.to_lowercase();
            let in_title = task.title.to_lowercase().contains(&needle);
            let in_description = task.description.to_lowercase().contains(&needle);
            if !in_title && !in_description {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if task.priority != priority {
                return false;
            }
        }
        match self.assignee {
            Some(AssigneeFilter::Member(id)) if task.assignee_id != Some(id) => return false,
            Some(AssigneeFilter::Unassigned) if task.assignee_id.is_some() => return false,
            _ => {}
        }
        true
    }
}
