//! Dashboard command — counts, completion rate, and insights over every
//! project the user can see.

use anyhow::Result;
use console::style;

use crewboard::api::ApiClient;
use crewboard::config::Config;
use crewboard::models::{Task, TaskPriority, TaskStatus};
use crewboard::stats::{DashboardStats, Efficiency, PriorityLoad, ProjectActivity};
use crewboard::ui::icons::{CHART, priority_color, status_color};
use crewboard::ui::spinner::with_spinner;

const BAR_WIDTH: usize = 30;

pub async fn cmd_stats(config: &Config) -> Result<()> {
    let client = ApiClient::new(config)?;

    let projects = with_spinner("Fetching projects...", client.list_projects()).await?;
    let mut tasks: Vec<Task> = Vec::new();
    for project in &projects {
        let mut batch = with_spinner(
            &format!("Fetching tasks for '{}'...", project.name),
            client.list_tasks(project.id),
        )
        .await?;
        tasks.append(&mut batch);
    }

    let stats = DashboardStats::collect(&tasks, &projects);

    println!();
    println!("{} Team dashboard", CHART);
    println!();
    println!(
        "  Tasks: {}   Projects: {}   Completion: {}%",
        style(stats.total_tasks).bold(),
        style(stats.total_projects).bold(),
        style(stats.completion_rate).bold()
    );

    println!();
    println!("  Tasks by status");
    for status in TaskStatus::ALL {
        let share = stats.status_share(status);
        println!(
            "    {:<12} {:>3}  {} {}%",
            status.label(),
            stats.status_count(status),
            style(bar(share)).fg(status_color(status)),
            share
        );
    }

    println!();
    println!("  Tasks by priority");
    for priority in TaskPriority::ALL {
        let share = stats.priority_share(priority);
        println!(
            "    {:<12} {:>3}  {} {}%",
            priority.as_str(),
            stats.priority_count(priority),
            style(bar(share)).fg(priority_color(priority)),
            share
        );
    }

    if !stats.projects.is_empty() {
        println!();
        println!("  Projects");
        for summary in &stats.projects {
            println!(
                "    {:<24} {:>3} task(s)  {:>2} member(s)  {} {}%",
                summary.name,
                summary.task_count,
                summary.member_count,
                bar(summary.progress),
                summary.progress
            );
        }
    }

    println!();
    println!("  Insights");
    let efficiency = stats.efficiency();
    let efficiency_text = match efficiency {
        Efficiency::Excellent => style(efficiency.label()).green(),
        Efficiency::Adequate => style(efficiency.label()).yellow(),
        Efficiency::NeedsAttention => style(efficiency.label()).red(),
    };
    println!(
        "    Completion rate {}%: {}",
        stats.completion_rate, efficiency_text
    );
    match stats.priority_load() {
        PriorityLoad::Heavy => println!(
            "    {} high-priority task(s): {}",
            stats.priority_count(TaskPriority::High),
            style("a lot on fire").red()
        ),
        PriorityLoad::Balanced => println!(
            "    {} high-priority task(s): {}",
            stats.priority_count(TaskPriority::High),
            style("priorities look balanced").green()
        ),
    }
    match stats.project_activity() {
        ProjectActivity::Rich => println!(
            "    {} active project(s): {}",
            stats.total_projects,
            style("plenty going on").green()
        ),
        ProjectActivity::Sparse => println!(
            "    {} project(s): {}",
            stats.total_projects,
            style("room for more").dim()
        ),
    }
    println!();

    Ok(())
}

/// Fixed-width bar with `share` percent filled.
fn bar(share: u32) -> String {
    let filled = (share as usize * BAR_WIDTH).div_ceil(100).min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}
