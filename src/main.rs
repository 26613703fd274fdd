use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

mod cmd;

use crewboard::config::Config;

#[derive(Parser)]
#[command(name = "crewboard")]
#[command(version, about = "Terminal client for your team's collaboration service")]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Backend base URL. Overrides crewboard.toml and CREWBOARD_BASE_URL.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and save the session
    Login {
        /// Email to log in with; prompted for when omitted
        email: Option<String>,
    },
    /// Create an account (logs you in directly)
    Register,
    /// End the session
    Logout,
    /// Show who the current session belongs to
    Whoami,
    /// Check that the backend is up
    Health,
    /// List registered users
    Users,
    /// Manage projects
    Project {
        #[command(subcommand)]
        command: Option<ProjectCommands>,
    },
    /// Manage tasks within a project
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Show a project's task board
    Board {
        /// Project id
        project: i64,

        /// Only show tasks whose title or description contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Only show tasks at this priority: low, medium, high, urgent
        #[arg(long)]
        priority: Option<String>,

        /// Only show tasks assigned to this user id
        #[arg(long)]
        assignee: Option<i64>,

        /// Only show unassigned tasks
        #[arg(long, conflicts_with = "assignee")]
        unassigned: bool,
    },
    /// Move a task to another status column
    Move {
        /// Project id
        project: i64,
        /// Task id
        task: i64,
        /// Target status: todo, in_progress, review, done
        status: String,
    },
    /// Show the team dashboard
    Stats,
    /// Open the session-local announcement board
    Announce,
    /// Open the session-local discussion thread
    Comments,
    /// Pick a background image
    Background {
        #[command(subcommand)]
        command: Option<BackgroundCommands>,
    },
    /// View or initialize configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
pub enum ProjectCommands {
    /// List all projects
    List,
    /// Create a project interactively
    Create,
    /// Edit a project interactively
    Edit { id: i64 },
    /// Delete a project
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
    /// Invite a user to a project by email
    Invite { id: i64, email: Option<String> },
    /// List a project's members
    Members { id: i64 },
}

#[derive(Subcommand, Clone)]
pub enum TaskCommands {
    /// Create a task interactively
    Add {
        /// Project id
        project: i64,
    },
    /// Edit a task interactively
    Edit {
        /// Project id
        project: i64,
        /// Task id
        task: i64,
    },
    /// Delete a task
    Delete {
        /// Project id
        project: i64,
        /// Task id
        task: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand, Clone)]
pub enum BackgroundCommands {
    /// List background candidates in the configured directory
    List,
    /// Pick a random background
    Pick,
    /// Pick a random background and open it
    Preview,
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show the resolved configuration
    Show,
    /// Write a default crewboard.toml into the current directory
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // --verbose turns on debug traces for the client unless RUST_LOG says otherwise
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("crewboard=debug"))
    } else {
        tracing_subscriber::EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let working_dir = std::env::current_dir().context("Failed to get current directory")?;
    let config = Config::load(&working_dir, cli.base_url.clone(), cli.verbose)?;

    match cli.command {
        Commands::Login { email } => cmd::cmd_login(&config, email).await?,
        Commands::Register => cmd::cmd_register(&config).await?,
        Commands::Logout => cmd::cmd_logout(&config).await?,
        Commands::Whoami => cmd::cmd_whoami(&config).await?,
        Commands::Health => cmd::cmd_health(&config).await?,
        Commands::Users => cmd::cmd_users(&config).await?,
        Commands::Project { command } => cmd::cmd_project(&config, command).await?,
        Commands::Task { command } => cmd::cmd_task(&config, command).await?,
        Commands::Board {
            project,
            search,
            priority,
            assignee,
            unassigned,
        } => {
            cmd::cmd_board(
                &config,
                cmd::board::BoardArgs {
                    project,
                    search,
                    priority,
                    assignee,
                    unassigned,
                },
            )
            .await?
        }
        Commands::Move {
            project,
            task,
            status,
        } => cmd::cmd_move(&config, project, task, status).await?,
        Commands::Stats => cmd::cmd_stats(&config).await?,
        Commands::Announce => cmd::cmd_announce(&config).await?,
        Commands::Comments => cmd::cmd_comments(&config).await?,
        Commands::Background { command } => cmd::cmd_background(&config, command).await?,
        Commands::Config { command } => cmd::cmd_config(&working_dir, &config, command)?,
    }

    Ok(())
}
