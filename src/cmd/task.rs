//! Task management commands — `crewboard task`.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use console::style;
use dialoguer::{Confirm, Input, Select};

use crewboard::api::ApiClient;
use crewboard::config::Config;
use crewboard::errors::BoardError;
use crewboard::models::{Task, TaskDraft, TaskPriority, TaskStatus, User};
use crewboard::ui::icons::{CHECK, priority_color};
use crewboard::ui::spinner::with_spinner;

use super::super::TaskCommands;

pub async fn cmd_task(config: &Config, command: TaskCommands) -> Result<()> {
    let client = ApiClient::new(config)?;

    match command {
        TaskCommands::Add { project } => {
            let members =
                with_spinner("Fetching members...", client.list_members(project)).await?;
            let draft = task_form(&members, None)?;
            let task =
                with_spinner("Creating task...", client.create_task(project, &draft)).await?;
            println!("{} Created task #{} '{}'", CHECK, task.id, task.title);
        }
        TaskCommands::Edit { project, task } => {
            let tasks = with_spinner("Fetching tasks...", client.list_tasks(project)).await?;
            let Some(existing) = tasks.iter().find(|t| t.id == task) else {
                return Err(BoardError::UnknownTask { id: task }.into());
            };
            let members =
                with_spinner("Fetching members...", client.list_members(project)).await?;
            let draft = task_form(&members, Some(existing))?;
            let updated =
                with_spinner("Updating task...", client.update_task(project, task, &draft))
                    .await?;
            println!("{} Updated task #{} '{}'", CHECK, updated.id, updated.title);
        }
        TaskCommands::Delete { project, task, force } => {
            if !force {
                let confirm = Confirm::new()
                    .with_prompt(format!("Delete task {}?", task))
                    .default(false)
                    .interact()
                    .unwrap_or(false);
                if !confirm {
                    println!("Deletion cancelled.");
                    return Ok(());
                }
            }
            with_spinner("Deleting task...", client.delete_task(project, task)).await?;
            println!("{} Deleted task {}", CHECK, task);
        }
    }

    Ok(())
}

/// Interactive task form, matching the fields of the original dialog:
/// title, description, priority, status, assignee, due date.
fn task_form(members: &[User], existing: Option<&Task>) -> Result<TaskDraft> {
    let title: String = Input::new()
        .with_prompt("Title")
        .with_initial_text(existing.map(|t| t.title.clone()).unwrap_or_default())
        .interact_text()
        .context("Failed to read title")?;

    let description: String = Input::new()
        .with_prompt("Description")
        .with_initial_text(existing.map(|t| t.description.clone()).unwrap_or_default())
        .allow_empty(true)
        .interact_text()
        .context("Failed to read description")?;

    let priority_labels: Vec<String> = TaskPriority::ALL
        .iter()
        .map(|&p| style(p.as_str()).fg(priority_color(p)).to_string())
        .collect();
    let default_priority = existing
        .and_then(|t| TaskPriority::ALL.iter().position(|&p| p == t.priority))
        .unwrap_or(1); // medium
    let picked_priority = Select::new()
        .with_prompt("Priority")
        .items(&priority_labels)
        .default(default_priority)
        .interact()
        .context("Failed to read priority")?;

    let status_labels: Vec<&str> = TaskStatus::ALL.iter().map(|s| s.label()).collect();
    let default_status = existing
        .and_then(|t| TaskStatus::ALL.iter().position(|&s| s == t.status))
        .unwrap_or(0); // todo
    let picked_status = Select::new()
        .with_prompt("Status")
        .items(&status_labels)
        .default(default_status)
        .interact()
        .context("Failed to read status")?;

    let mut assignee_labels = vec!["(unassigned)".to_string()];
    assignee_labels.extend(
        members
            .iter()
            .map(|m| format!("{} <{}>", m.name, m.email)),
    );
    let default_assignee = existing
        .and_then(|t| t.assignee_id)
        .and_then(|id| members.iter().position(|m| m.id == id).map(|i| i + 1))
        .unwrap_or(0);
    let picked_assignee = Select::new()
        .with_prompt("Assignee")
        .items(&assignee_labels)
        .default(default_assignee)
        .interact()
        .context("Failed to read assignee")?;
    let assignee_id = if picked_assignee == 0 {
        None
    } else {
        Some(members[picked_assignee - 1].id)
    };

    let due_input: String = Input::new()
        .with_prompt("Due date (YYYY-MM-DD, empty for none)")
        .with_initial_text(
            existing
                .and_then(|t| t.due_date)
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        )
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() || NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").is_ok()
            {
                Ok(())
            } else {
                Err("Use the YYYY-MM-DD format")
            }
        })
        .interact_text()
        .context("Failed to read due date")?;
    let due_date = if due_input.trim().is_empty() {
        None
    } else {
        NaiveDate::parse_from_str(due_input.trim(), "%Y-%m-%d").ok()
    };

    let draft = TaskDraft {
        title,
        description,
        priority: TaskPriority::ALL[picked_priority],
        status: TaskStatus::ALL[picked_status],
        assignee_id,
        due_date,
    };
    draft.validate()?;
    Ok(draft)
}
