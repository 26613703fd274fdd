//! Derived dashboard statistics over the cached task and project lists.
//! Read-only: counting, percentages, and threshold classification.

use crate::models::{Project, Task, TaskPriority, TaskStatus};

/// How the team is doing against its completion rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Efficiency {
    Excellent,
    Adequate,
    NeedsAttention,
}

impl Efficiency {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Adequate => "room to improve",
            Self::NeedsAttention => "needs attention",
        }
    }
}

/// Whether high-priority work is piling up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityLoad {
    Balanced,
    Heavy,
}

/// How much is going on across projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectActivity {
    Rich,
    Sparse,
}

/// Per-project roll-up shown on the dashboard. Only the first
/// [`DashboardStats::PROJECT_LIMIT`] projects are summarized.
#[derive(Debug, Clone)]
pub struct ProjectSummary {
    pub id: i64,
    pub name: String,
    pub member_count: u32,
    pub task_count: usize,
    /// Member-derived progress value, capped at 100.
    pub progress: u32,
}

#[derive(Debug)]
pub struct DashboardStats {
    pub total_tasks: usize,
    pub total_projects: usize,
    /// Rounded percentage of tasks in the done column. 0 with no tasks.
    pub completion_rate: u32,
    status_counts: [usize; TaskStatus::ALL.len()],
    priority_counts: [usize; TaskPriority::ALL.len()],
    pub projects: Vec<ProjectSummary>,
}

impl DashboardStats {
    pub const PROJECT_LIMIT: usize = 5;

    /// Completion rate above which work efficiency counts as excellent.
    const EXCELLENT_RATE: u32 = 70;
    /// Completion rate above which work efficiency still counts as adequate.
    const ADEQUATE_RATE: u32 = 40;
    /// High-priority task count beyond which the load counts as heavy.
    const HEAVY_HIGH_PRIORITY: usize = 5;
    /// Project count beyond which activity counts as rich.
    const RICH_PROJECTS: usize = 3;

    pub fn collect(tasks: &[Task], projects: &[Project]) -> Self {
        let mut status_counts = [0usize; TaskStatus::ALL.len()];
        let mut priority_counts = [0usize; TaskPriority::ALL.len()];
        for task in tasks {
            status_counts[Self::status_index(task.status)] += 1;
            priority_counts[Self::priority_index(task.priority)] += 1;
        }

        let total_tasks = tasks.len();
        let completed = status_counts[Self::status_index(TaskStatus::Done)];
        let completion_rate = Self::percentage(completed, total_tasks);

        let project_summaries = projects
            .iter()
            .take(Self::PROJECT_LIMIT)
            .map(|project| ProjectSummary {
                id: project.id,
                name: project.name.clone(),
                member_count: project.member_count,
                task_count: tasks.iter().filter(|t| t.project_id == project.id).count(),
                progress: (project.member_count * 20).min(100),
            })
            .collect();

        Self {
            total_tasks,
            total_projects: projects.len(),
            completion_rate,
            status_counts,
            priority_counts,
            projects: project_summaries,
        }
    }

    pub fn status_count(&self, status: TaskStatus) -> usize {
        self.status_counts[Self::status_index(status)]
    }

    pub fn priority_count(&self, priority: TaskPriority) -> usize {
        self.priority_counts[Self::priority_index(priority)]
    }

    /// Rounded share of all tasks in `status`.
    pub fn status_share(&self, status: TaskStatus) -> u32 {
        Self::percentage(self.status_count(status), self.total_tasks)
    }

    /// Rounded share of all tasks at `priority`.
    pub fn priority_share(&self, priority: TaskPriority) -> u32 {
        Self::percentage(self.priority_count(priority), self.total_tasks)
    }

    pub fn efficiency(&self) -> Efficiency {
        if self.completion_rate > Self::EXCELLENT_RATE {
            Efficiency::Excellent
        } else if self.completion_rate > Self::ADEQUATE_RATE {
            Efficiency::Adequate
        } else {
            Efficiency::NeedsAttention
        }
    }

    pub fn priority_load(&self) -> PriorityLoad {
        if self.priority_count(TaskPriority::High) > Self::HEAVY_HIGH_PRIORITY {
            PriorityLoad::Heavy
        } else {
            PriorityLoad::Balanced
        }
    }

    pub fn project_activity(&self) -> ProjectActivity {
        if self.total_projects > Self::RICH_PROJECTS {
            ProjectActivity::Rich
        } else {
            ProjectActivity::Sparse
        }
    }

    fn percentage(part: usize, whole: usize) -> u32 {
        if whole == 0 {
            return 0;
        }
        (part as f64 / whole as f64 * 100.0).round() as u32
    }

    fn status_index(status: TaskStatus) -> usize {
        TaskStatus::ALL
            .iter()
            .position(|&s| s == status)
            .unwrap_or(0)
    }

    fn priority_index(priority: TaskPriority) -> usize {
        TaskPriority::ALL
            .iter()
            .position(|&p| p == priority)
            .unwrap_or(0)
    }
}
