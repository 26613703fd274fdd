//! Board commands — render the kanban view and move tasks between columns.

use anyhow::{Result, bail};
use console::style;

use crewboard::api::ApiClient;
use crewboard::board::{AssigneeFilter, Board, MoveOutcome, TaskFilter};
use crewboard::config::Config;
use crewboard::models::TaskStatus;
use crewboard::ui::board_render::render_board;
use crewboard::ui::icons::{BOARD, CHECK};
use crewboard::ui::spinner::with_spinner;

pub struct BoardArgs {
    pub project: i64,
    pub search: Option<String>,
    pub priority: Option<String>,
    pub assignee: Option<i64>,
    pub unassigned: bool,
}

pub async fn cmd_board(config: &Config, args: BoardArgs) -> Result<()> {
    let filter = build_filter(&args)?;

    let client = ApiClient::new(config)?;
    let tasks = with_spinner("Fetching tasks...", client.list_tasks(args.project)).await?;
    let board = Board::new(args.project, tasks);

    println!();
    println!("{} Project {} board", BOARD, args.project);
    println!();

    let columns = if filter.is_empty() {
        board.columns()
    } else {
        board.filtered_columns(&filter)
    };
    print!("{}", render_board(&columns));

    let shown: usize = columns.iter().map(|c| c.tasks.len()).sum();
    println!();
    if filter.is_empty() {
        println!("{} task(s)", board.len());
    } else {
        println!("{} of {} task(s) match the filter", shown, board.len());
    }
    Ok(())
}

pub async fn cmd_move(config: &Config, project: i64, task: i64, status: String) -> Result<()> {
    let Ok(target) = status.parse::<TaskStatus>() else {
        bail!(
            "Unknown status '{}'. Expected one of: todo, in_progress, review, done",
            status
        );
    };

    let client = ApiClient::new(config)?;
    let tasks = with_spinner("Fetching tasks...", client.list_tasks(project)).await?;
    let mut board = Board::new(project, tasks);

    // Apply the transition locally first, then confirm it with the one PUT
    match board.move_task(task, target)? {
        MoveOutcome::Unmoved => {
            println!("Task {} is already in {}.", task, target.label());
            return Ok(());
        }
        MoveOutcome::Moved { previous } => {
            match with_spinner("Moving task...", client.move_task(project, task, target)).await
            {
                Ok(()) => {
                    println!(
                        "{} Moved task {} from {} to {}",
                        CHECK,
                        task,
                        previous.label(),
                        style(target.label()).bold()
                    );
                }
                Err(err) => {
                    // The server said no: surface the message and fall back
                    // to server state, as the original did
                    super::report_api_error(&err);
                    let refreshed =
                        with_spinner("Refreshing board...", client.list_tasks(project)).await?;
                    board.replace_tasks(refreshed);
                    if let Some(current) = board.task(task) {
                        println!("Task {} is still in {}.", task, current.status.label());
                    }
                }
            }
        }
    }
    Ok(())
}

fn build_filter(args: &BoardArgs) -> Result<TaskFilter> {
    let priority = match &args.priority {
        Some(raw) => match raw.parse() {
            Ok(priority) => Some(priority),
            Err(_) => bail!(
                "Unknown priority '{}'. Expected one of: low, medium, high, urgent",
                raw
            ),
        },
        None => None,
    };
    let assignee = if args.unassigned {
        Some(AssigneeFilter::Unassigned)
    } else {
        args.assignee.map(AssigneeFilter::Member)
    };
    Ok(TaskFilter {
        search: args.search.clone(),
        priority,
        assignee,
    })
}
