//! Project CRUD, invitations, and member listing. The client holds only a
//! transient cached list; every command refetches.

use serde::Serialize;

use crate::api::ApiClient;
use crate::errors::ApiError;
use crate::models::{Project, ProjectDraft, User};

#[derive(Debug, Serialize)]
struct InviteRequest<'a> {
    email: &'a str,
}

impl ApiClient {
    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        let endpoint = "/api/projects";
        let request = self.http().get(self.url(endpoint));
        let response = self.execute(request, endpoint).await?;
        self.decode(response, endpoint).await
    }

    pub async fn create_project(&self, draft: &ProjectDraft) -> Result<Project, ApiError> {
        let endpoint = "/api/projects";
        let request = self.http().post(self.url(endpoint)).json(draft);
        let response = self.execute(request, endpoint).await?;
        self.decode(response, endpoint).await
    }

    pub async fn update_project(
        &self,
        project_id: i64,
        draft: &ProjectDraft,
    ) -> Result<Project, ApiError> {
        let endpoint = format!("/api/projects/{}", project_id);
        let request = self.http().put(self.url(&endpoint)).json(draft);
        let response = self.execute(request, &endpoint).await?;
        self.decode(response, &endpoint).await
    }

    pub async fn delete_project(&self, project_id: i64) -> Result<(), ApiError> {
        let endpoint = format!("/api/projects/{}", project_id);
        let request = self.http().delete(self.url(&endpoint));
        self.execute(request, &endpoint).await?;
        Ok(())
    }

    /// Invite a user to the project by email.
    pub async fn invite_member(&self, project_id: i64, email: &str) -> Result<(), ApiError> {
        let endpoint = format!("/api/projects/{}/invite", project_id);
        let request = self
            .http()
            .post(self.url(&endpoint))
            .json(&InviteRequest { email });
        self.execute(request, &endpoint).await?;
        Ok(())
    }

    /// Users who are members of the project; drives the assignee picker.
    pub async fn list_members(&self, project_id: i64) -> Result<Vec<User>, ApiError> {
        let endpoint = format!("/api/projects/{}/members", project_id);
        let request = self.http().get(self.url(&endpoint));
        let response = self.execute(request, &endpoint).await?;
        self.decode(response, &endpoint).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectStatus;

    #[test]
    fn test_invite_request_shape() {
        let body = serde_json::to_value(InviteRequest {
            email: "grace@example.com",
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"email": "grace@example.com"}));
    }

    #[test]
    fn test_project_draft_serializes_status_string() {
        let draft = ProjectDraft {
            name: "Launch".to_string(),
            description: "Q1 launch".to_string(),
            status: ProjectStatus::Active,
        };
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body["status"], "active");
        assert_eq!(body["name"], "Launch");
    }
}
