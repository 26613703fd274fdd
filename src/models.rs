use std::str::FromStr;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Minimum password length accepted by the registration form.
pub const MIN_PASSWORD_LEN: usize = 6;

// Compile once using LazyLock
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// A user account, as returned by the backend. Never constructed client-side
/// outside of deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Active,
    Completed,
    Archived,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [Self::Active, Self::Completed, Self::Archived];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Archived => "archived",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "archived" => Ok(Self::Archived),
            _ => Err(format!("Invalid project status: {}", s)),
        }
    }
}

/// Top-level collaboration unit owning tasks and members.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub member_count: u32,
}

/// Board columns, in display order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Review,
    Done,
}

impl TaskStatus {
    /// Column order on the board.
    pub const ALL: [TaskStatus; 4] = [Self::Todo, Self::InProgress, Self::Review, Self::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Review => "review",
            Self::Done => "done",
        }
    }

    /// Column heading shown on the rendered board.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Review => "Review",
            Self::Done => "Done",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(Self::Todo),
            "in_progress" => Ok(Self::InProgress),
            "review" => Ok(Self::Review),
            "done" => Ok(Self::Done),
            _ => Err(format!("Invalid task status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 4] = [Self::Low, Self::Medium, Self::High, Self::Urgent];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            _ => Err(format!("Invalid priority: {}", s)),
        }
    }
}

/// A task on a project board. Belongs to exactly one project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub project_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    #[serde(default)]
    pub assignee_id: Option<i64>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

/// Backend health probe response.
#[derive(Debug, Clone, Deserialize)]
pub struct Health {
    pub status: String,
    pub service: String,
}

// Form drafts. These carry user input and reject bad submissions before any
// network call, mirroring the required-field checks of the original forms.

/// Login/registration form input. `name` is only required when registering.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn login(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: None,
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn register(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(ValidationError::Required { field: "name" });
            }
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::Required { field: "email" });
        }
        if !EMAIL_REGEX.is_match(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        Ok(())
    }
}

/// Project create/edit form input.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
}

impl ProjectDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::Required { field: "name" });
        }
        Ok(())
    }
}

impl From<&Project> for ProjectDraft {
    fn from(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            description: project.description.clone(),
            status: project.status,
        }
    }
}

/// Task create/edit form input.
#[derive(Debug, Clone, Serialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub assignee_id: Option<i64>,
    pub due_date: Option<NaiveDate>,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            priority: TaskPriority::Medium,
            status: TaskStatus::Todo,
            assignee_id: None,
            due_date: None,
        }
    }
}

impl TaskDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::Required { field: "title" });
        }
        Ok(())
    }
}

impl From<&Task> for TaskDraft {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            priority: task.priority,
            status: task.status,
            assignee_id: task.assignee_id,
            due_date: task.due_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_status_roundtrip() {
        for s in &["todo", "in_progress", "review", "done"] {
            let parsed: TaskStatus = s.parse().unwrap();
            assert_eq!(parsed.as_str(), *s);
        }
        assert!("invalid".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn test_task_priority_roundtrip() {
        for s in &["low", "medium", "high", "urgent"] {
            let parsed: TaskPriority = s.parse().unwrap();
            assert_eq!(parsed.as_str(), *s);
        }
        assert!("critical".parse::<TaskPriority>().is_err());
    }

    #[test]
    fn test_project_status_roundtrip() {
        for s in &["active", "completed", "archived"] {
            let parsed: ProjectStatus = s.parse().unwrap();
            assert_eq!(parsed.as_str(), *s);
        }
        assert!("paused".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn test_serde_produces_lowercase_strings() {
        // Verify JSON serialization uses lowercase snake_case, not PascalCase
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(
            serde_json::to_string(&TaskPriority::Urgent).unwrap(),
            "\"urgent\""
        );
        assert_eq!(
            serde_json::to_string(&ProjectStatus::Archived).unwrap(),
            "\"archived\""
        );
    }

    #[test]
    fn test_serde_deserialize_lowercase_strings() {
        assert_eq!(
            serde_json::from_str::<TaskStatus>("\"in_progress\"").unwrap(),
            TaskStatus::InProgress
        );
        assert_eq!(
            serde_json::from_str::<TaskPriority>("\"medium\"").unwrap(),
            TaskPriority::Medium
        );
    }

    #[test]
    fn test_status_all_is_column_order() {
        assert_eq!(
            TaskStatus::ALL,
            [
                TaskStatus::Todo,
                TaskStatus::InProgress,
                TaskStatus::Review,
                TaskStatus::Done
            ]
        );
    }

    #[test]
    fn test_task_deserialize_full() {
        let json = r#"{
            "id": 7,
            "project_id": 2,
            "title": "Wire up login",
            "description": "Session cookie handling",
            "priority": "high",
            "status": "in_progress",
            "assignee_id": 3,
            "due_date": "2026-01-15"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 7);
        assert_eq!(task.priority, TaskPriority::High);
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.assignee_id, Some(3));
        assert_eq!(
            task.due_date,
            Some(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap())
        );
    }

    #[test]
    fn test_task_deserialize_optional_fields_absent() {
        let json = r#"{
            "id": 8,
            "project_id": 2,
            "title": "Unassigned chore",
            "priority": "low",
            "status": "todo"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert!(task.description.is_empty());
        assert!(task.assignee_id.is_none());
        assert!(task.due_date.is_none());
    }

    #[test]
    fn test_project_deserialize() {
        let json = r#"{
            "id": 1,
            "name": "Launch",
            "description": "Q1 launch work",
            "status": "active",
            "owner_name": "Ada",
            "member_count": 4
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.name, "Launch");
        assert_eq!(project.status, ProjectStatus::Active);
        assert_eq!(project.member_count, 4);
        assert_eq!(project.owner_name.as_deref(), Some("Ada"));
    }

    // ── Credentials validation ───────────────────────────────────────

    #[test]
    fn test_credentials_login_valid() {
        let creds = Credentials::login("ada@example.com", "secret1");
        assert!(creds.validate().is_ok());
    }

    #[test]
    fn test_credentials_rejects_blank_email() {
        let creds = Credentials::login("   ", "secret1");
        assert_eq!(
            creds.validate(),
            Err(ValidationError::Required { field: "email" })
        );
    }

    #[test]
    fn test_credentials_rejects_malformed_email() {
        for bad in &["not-an-email", "a@b", "@example.com", "a b@example.com"] {
            let creds = Credentials::login(*bad, "secret1");
            assert_eq!(creds.validate(), Err(ValidationError::InvalidEmail), "{}", bad);
        }
    }

    #[test]
    fn test_credentials_rejects_short_password() {
        let creds = Credentials::login("ada@example.com", "short");
        assert_eq!(
            creds.validate(),
            Err(ValidationError::PasswordTooShort { min: 6 })
        );
    }

    #[test]
    fn test_credentials_register_requires_name() {
        let creds = Credentials::register("  ", "ada@example.com", "secret1");
        assert_eq!(
            creds.validate(),
            Err(ValidationError::Required { field: "name" })
        );
    }

    #[test]
    fn test_credentials_login_serializes_without_name() {
        let creds = Credentials::login("ada@example.com", "secret1");
        let json = serde_json::to_value(&creds).unwrap();
        assert!(json.get("name").is_none());
        assert_eq!(json["email"], "ada@example.com");
    }

    // ── Draft validation ─────────────────────────────────────────────

    #[test]
    fn test_project_draft_requires_name() {
        let draft = ProjectDraft {
            name: "  ".to_string(),
            description: String::new(),
            status: ProjectStatus::Active,
        };
        assert_eq!(
            draft.validate(),
            Err(ValidationError::Required { field: "name" })
        );
    }

    #[test]
    fn test_task_draft_requires_title() {
        let draft = TaskDraft::default();
        assert_eq!(
            draft.validate(),
            Err(ValidationError::Required { field: "title" })
        );
    }

    #[test]
    fn test_task_draft_defaults() {
        let draft = TaskDraft::default();
        assert_eq!(draft.priority, TaskPriority::Medium);
        assert_eq!(draft.status, TaskStatus::Todo);
        assert!(draft.assignee_id.is_none());
        assert!(draft.due_date.is_none());
    }

    #[test]
    fn test_task_draft_from_task_preserves_fields() {
        let task = Task {
            id: 1,
            project_id: 2,
            title: "Review PR".to_string(),
            description: "Check the session changes".to_string(),
            priority: TaskPriority::Urgent,
            status: TaskStatus::Review,
            assignee_id: Some(9),
            due_date: None,
        };
        let draft = TaskDraft::from(&task);
        assert_eq!(draft.title, "Review PR");
        assert_eq!(draft.priority, TaskPriority::Urgent);
        assert_eq!(draft.status, TaskStatus::Review);
        assert_eq!(draft.assignee_id, Some(9));
    }
}
