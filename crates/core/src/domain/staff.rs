// Employee task board: assignments, filters, workload

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::{DomainError, Result};
use super::labels::{tally, Tally};
use super::priority::Priority;
use super::validation::{in_range, required, required_short};

/// Employee task state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkStatus {
    Pending,
    InProgress,
    Completed,
}

impl std::fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkStatus::Pending => write!(f, "pending"),
            WorkStatus::InProgress => write!(f, "in-progress"),
            WorkStatus::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    Cleaning,
    Prep,
    Inventory,
    Maintenance,
    Service,
    Other,
}

impl std::fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskCategory::Cleaning => write!(f, "cleaning"),
            TaskCategory::Prep => write!(f, "prep"),
            TaskCategory::Inventory => write!(f, "inventory"),
            TaskCategory::Maintenance => write!(f, "maintenance"),
            TaskCategory::Service => write!(f, "service"),
            TaskCategory::Other => write!(f, "other"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeTask {
    pub id: String,
    pub title: String,
    pub description: String,
    pub assigned_to: String,
    pub priority: Priority,
    pub status: WorkStatus,
    pub due_date: NaiveDate,
    pub created_date: NaiveDate,
    /// Minutes
    pub estimated_duration: u32,
    pub category: TaskCategory,
}

impl EmployeeTask {
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status != WorkStatus::Completed && self.due_date < today
    }

    pub fn start(&mut self) -> Result<()> {
        if self.status != WorkStatus::Pending {
            return Err(DomainError::transition(self.status, WorkStatus::InProgress));
        }
        self.status = WorkStatus::InProgress;
        Ok(())
    }

    pub fn complete(&mut self) -> Result<()> {
        if self.status != WorkStatus::InProgress {
            return Err(DomainError::transition(self.status, WorkStatus::Completed));
        }
        self.status = WorkStatus::Completed;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    Available,
    Busy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub role: String,
    pub status: EmployeeStatus,
    pub current_tasks: u32,
}

/// Task form input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployeeTask {
    pub title: String,
    pub description: String,
    pub assigned_to: String,
    #[serde(default = "default_priority")]
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    #[serde(default = "default_duration")]
    pub estimated_duration: u32,
    #[serde(default = "default_category")]
    pub category: TaskCategory,
    #[serde(default = "default_status")]
    pub status: WorkStatus,
}

fn default_priority() -> Priority {
    Priority::Low
}

fn default_duration() -> u32 {
    30
}

fn default_category() -> TaskCategory {
    TaskCategory::Cleaning
}

fn default_status() -> WorkStatus {
    WorkStatus::Pending
}

impl NewEmployeeTask {
    pub fn into_task(
        self,
        id: String,
        employees: &[Employee],
        today: NaiveDate,
    ) -> Result<EmployeeTask> {
        let title = required_short("title", &self.title)?;
        let description = required("description", &self.description)?;
        let assigned_to = self.assigned_to.trim().to_string();
        if !employees.iter().any(|e| e.name == assigned_to) {
            return Err(DomainError::invalid(
                "assigned_to",
                format!("unknown employee '{}'", assigned_to),
            ));
        }
        let estimated_duration = in_range("estimated_duration", self.estimated_duration, 5, 480)?;
        if self.status == WorkStatus::Completed {
            return Err(DomainError::invalid(
                "status",
                "new tasks must be pending or in-progress",
            ));
        }

        Ok(EmployeeTask {
            id,
            title,
            description,
            assigned_to,
            priority: self.priority,
            status: self.status,
            due_date: self.due_date.unwrap_or(today),
            created_date: today,
            estimated_duration,
            category: self.category,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffOverview {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub overdue: usize,
}

pub fn overview(tasks: &[EmployeeTask], today: NaiveDate) -> StaffOverview {
    let count = |status: WorkStatus| tasks.iter().filter(|t| t.status == status).count();
    StaffOverview {
        total: tasks.len(),
        pending: count(WorkStatus::Pending),
        in_progress: count(WorkStatus::InProgress),
        completed: count(WorkStatus::Completed),
        overdue: tasks.iter().filter(|t| t.is_overdue(today)).count(),
    }
}

/// Optional filters; `None` means "All".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffFilter {
    pub status: Option<WorkStatus>,
    pub employee: Option<String>,
    pub category: Option<TaskCategory>,
}

impl StaffFilter {
    pub fn matches(&self, task: &EmployeeTask) -> bool {
        self.status.map_or(true, |s| task.status == s)
            && self
                .employee
                .as_deref()
                .map_or(true, |e| task.assigned_to == e)
            && self.category.map_or(true, |c| task.category == c)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffTaskRow {
    #[serde(flatten)]
    pub task: EmployeeTask,
    pub overdue: bool,
}

/// Filtered tasks, most urgent first, then earliest due.
pub fn list(tasks: &[EmployeeTask], filter: &StaffFilter, today: NaiveDate) -> Vec<StaffTaskRow> {
    let mut rows: Vec<StaffTaskRow> = tasks
        .iter()
        .filter(|t| filter.matches(t))
        .map(|t| StaffTaskRow {
            overdue: t.is_overdue(today),
            task: t.clone(),
        })
        .collect();
    rows.sort_by(|a, b| {
        a.task
            .priority
            .rank()
            .cmp(&b.task.priority.rank())
            .then_with(|| a.task.due_date.cmp(&b.task.due_date))
    });
    rows
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub statuses: Vec<WorkStatus>,
    pub employees: Vec<String>,
    pub categories: Vec<TaskCategory>,
}

/// Distinct values present on the board, first-appearance order.
pub fn filter_options(tasks: &[EmployeeTask]) -> FilterOptions {
    let mut options = FilterOptions {
        statuses: Vec::new(),
        employees: Vec::new(),
        categories: Vec::new(),
    };
    for task in tasks {
        if !options.statuses.contains(&task.status) {
            options.statuses.push(task.status);
        }
        if !options.employees.contains(&task.assigned_to) {
            options.employees.push(task.assigned_to.clone());
        }
        if !options.categories.contains(&task.category) {
            options.categories.push(task.category);
        }
    }
    options
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffAnalytics {
    pub by_status: Vec<Tally>,
    pub by_priority: Vec<Tally>,
    /// Active (not completed) tasks per assignee
    pub workload: Vec<Tally>,
}

pub fn analytics(tasks: &[EmployeeTask]) -> StaffAnalytics {
    StaffAnalytics {
        by_status: tally(tasks.iter().map(|t| t.status.to_string())),
        by_priority: tally(tasks.iter().map(|t| t.priority.as_str())),
        workload: tally(
            tasks
                .iter()
                .filter(|t| t.status != WorkStatus::Completed)
                .map(|t| t.assigned_to.as_str()),
        ),
    }
}
