//! Task endpoints, scoped under a project. `move_task` is the single PUT a
//! board move issues; there is no queueing or conflict detection.

use serde::Serialize;

use crate::api::ApiClient;
use crate::errors::ApiError;
use crate::models::{Task, TaskDraft, TaskStatus};

/// Body of a board move: only the status changes.
#[derive(Debug, Serialize)]
struct StatusPatch {
    status: TaskStatus,
}

impl ApiClient {
    /// Tasks for the selected project. Refetched per selection.
    pub async fn list_tasks(&self, project_id: i64) -> Result<Vec<Task>, ApiError> {
        let endpoint = format!("/api/projects/{}/tasks", project_id);
        let request = self.http().get(self.url(&endpoint));
        let response = self.execute(request, &endpoint).await?;
        self.decode(response, &endpoint).await
    }

    pub async fn create_task(
        &self,
        project_id: i64,
        draft: &TaskDraft,
    ) -> Result<Task, ApiError> {
        let endpoint = format!("/api/projects/{}/tasks", project_id);
        let request = self.http().post(self.url(&endpoint)).json(draft);
        let response = self.execute(request, &endpoint).await?;
        self.decode(response, &endpoint).await
    }

    pub async fn update_task(
        &self,
        project_id: i64,
        task_id: i64,
        draft: &TaskDraft,
    ) -> Result<Task, ApiError> {
        let endpoint = format!("/api/projects/{}/tasks/{}", project_id, task_id);
        let request = self.http().put(self.url(&endpoint)).json(draft);
        let response = self.execute(request, &endpoint).await?;
        self.decode(response, &endpoint).await
    }

    /// Move a task to another status column.
    pub async fn move_task(
        &self,
        project_id: i64,
        task_id: i64,
        status: TaskStatus,
    ) -> Result<(), ApiError> {
        let endpoint = format!("/api/projects/{}/tasks/{}", project_id, task_id);
        let request = self
            .http()
            .put(self.url(&endpoint))
            .json(&StatusPatch { status });
        self.execute(request, &endpoint).await?;
        Ok(())
    }

    pub async fn delete_task(&self, project_id: i64, task_id: i64) -> Result<(), ApiError> {
        let endpoint = format!("/api/projects/{}/tasks/{}", project_id, task_id);
        let request = self.http().delete(self.url(&endpoint));
        self.execute(request, &endpoint).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskPriority;

    #[test]
    fn test_status_patch_serializes_snake_case() {
        let body = serde_json::to_value(StatusPatch {
            status: TaskStatus::InProgress,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"status": "in_progress"}));
    }

    #[test]
    fn test_task_draft_serializes_enum_strings() {
        let draft = TaskDraft {
            title: "Fix session expiry".to_string(),
            description: String::new(),
            priority: TaskPriority::Urgent,
            status: TaskStatus::Todo,
            assignee_id: Some(4),
            due_date: None,
        };
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body["priority"], "urgent");
        assert_eq!(body["status"], "todo");
        assert_eq!(body["assignee_id"], 4);
    }
}
