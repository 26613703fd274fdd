//! Project management commands — `crewboard project`.

use anyhow::{Context, Result};
use console::style;
use dialoguer::{Confirm, Input, Select};

use crewboard::api::ApiClient;
use crewboard::config::Config;
use crewboard::errors::BoardError;
use crewboard::models::{Project, ProjectDraft, ProjectStatus};
use crewboard::ui::icons::{CHECK, MEMBERS};
use crewboard::ui::spinner::with_spinner;

use super::super::ProjectCommands;

pub async fn cmd_project(config: &Config, command: Option<ProjectCommands>) -> Result<()> {
    let client = ApiClient::new(config)?;

    match command {
        None | Some(ProjectCommands::List) => {
            let projects =
                with_spinner("Fetching projects...", client.list_projects()).await?;
            print_project_list(&projects);
        }
        Some(ProjectCommands::Create) => {
            let draft = project_form(None)?;
            let project =
                with_spinner("Creating project...", client.create_project(&draft)).await?;
            println!("{} Created project '{}' (id {})", CHECK, project.name, project.id);
        }
        Some(ProjectCommands::Edit { id }) => {
            let projects =
                with_spinner("Fetching projects...", client.list_projects()).await?;
            let Some(existing) = projects.iter().find(|p| p.id == id) else {
                return Err(BoardError::UnknownProject { id }.into());
            };
            let draft = project_form(Some(existing))?;
            let project =
                with_spinner("Updating project...", client.update_project(id, &draft)).await?;
            println!("{} Updated project '{}'", CHECK, project.name);
        }
        Some(ProjectCommands::Delete { id, force }) => {
            if !force {
                let confirm = Confirm::new()
                    .with_prompt(format!("Delete project {} and all of its tasks?", id))
                    .default(false)
                    .interact()
                    .unwrap_or(false);
                if !confirm {
                    println!("Deletion cancelled.");
                    return Ok(());
                }
            }
            with_spinner("Deleting project...", client.delete_project(id)).await?;
            println!("{} Deleted project {}", CHECK, id);
        }
        Some(ProjectCommands::Invite { id, email }) => {
            let email = match email {
                Some(email) => email,
                None => Input::new()
                    .with_prompt("Email to invite")
                    .interact_text()
                    .context("Failed to read email")?,
            };
            with_spinner("Sending invitation...", client.invite_member(id, &email)).await?;
            println!("{} Invited {} to project {}", CHECK, email, id);
        }
        Some(ProjectCommands::Members { id }) => {
            let members = with_spinner("Fetching members...", client.list_members(id)).await?;
            println!();
            println!("{} Members of project {}", MEMBERS, id);
            println!();
            if members.is_empty() {
                println!("  (none)");
            }
            for member in &members {
                println!("  {:>4}  {}  <{}>", member.id, style(&member.name).bold(), member.email);
            }
        }
    }

    Ok(())
}

fn print_project_list(projects: &[Project]) {
    println!();
    if projects.is_empty() {
        println!("No projects yet. Create one with `crewboard project create`.");
        return;
    }
    for project in projects {
        let status = style(project.status.as_str());
        let status = match project.status {
            ProjectStatus::Active => status.green(),
            ProjectStatus::Completed => status.cyan(),
            ProjectStatus::Archived => status.dim(),
        };
        let owner = project.owner_name.as_deref().unwrap_or("-");
        println!(
            "  {:>4}  {:<28}  {:<10}  owner: {:<12}  {} member(s)",
            project.id,
            style(&project.name).bold(),
            status,
            owner,
            project.member_count
        );
        if !project.description.is_empty() {
            println!("        {}", style(&project.description).dim());
        }
    }
    println!();
    println!("{} project(s)", projects.len());
}

/// Interactive create/edit form. Prefills from `existing` when editing.
fn project_form(existing: Option<&Project>) -> Result<ProjectDraft> {
    let name: String = Input::new()
        .with_prompt("Project name")
        .with_initial_text(existing.map(|p| p.name.clone()).unwrap_or_default())
        .interact_text()
        .context("Failed to read project name")?;

    let description: String = Input::new()
        .with_prompt("Description")
        .with_initial_text(existing.map(|p| p.description.clone()).unwrap_or_default())
        .allow_empty(true)
        .interact_text()
        .context("Failed to read description")?;

    let labels: Vec<&str> = ProjectStatus::ALL.iter().map(|s| s.as_str()).collect();
    let default = existing
        .and_then(|p| ProjectStatus::ALL.iter().position(|&s| s == p.status))
        .unwrap_or(0);
    let picked = Select::new()
        .with_prompt("Status")
        .items(&labels)
        .default(default)
        .interact()
        .context("Failed to read status")?;

    let draft = ProjectDraft {
        name,
        description,
        status: ProjectStatus::ALL[picked],
    };
    draft.validate()?;
    Ok(draft)
}
