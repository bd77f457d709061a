// Employee task board use cases

use super::KitchenService;
use crate::domain::error::Result as DomainResult;
use crate::domain::sequence::next_id;
use crate::domain::staff::{
    self, Employee, EmployeeTask, FilterOptions, NewEmployeeTask, StaffAnalytics, StaffFilter,
    StaffOverview, StaffTaskRow,
};
use crate::domain::DomainError;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffBoard {
    pub overview: StaffOverview,
    pub employees: Vec<Employee>,
    pub options: FilterOptions,
    pub tasks: Vec<StaffTaskRow>,
}

impl KitchenService {
    pub async fn staff_board(&self, filter: StaffFilter) -> StaffBoard {
        let today = self.time_provider.today();
        let state = self.state.read().await;
        StaffBoard {
            overview: staff::overview(&state.staff_tasks, today),
            employees: state.employees.clone(),
            options: staff::filter_options(&state.staff_tasks),
            tasks: staff::list(&state.staff_tasks, &filter, today),
        }
    }

    pub async fn add_staff_task(&self, req: NewEmployeeTask) -> Result<EmployeeTask> {
        let today = self.time_provider.today();
        let mut state = self.state.write().await;
        let id = next_id("TASK", state.staff_tasks.iter().map(|t| t.id.as_str()));
        let task = req.into_task(id, &state.employees, today)?;
        info!(
            task_id = %task.id,
            assigned_to = %task.assigned_to,
            priority = %task.priority,
            "Staff task assigned"
        );
        state.staff_tasks.push(task.clone());
        Ok(task)
    }

    pub async fn start_staff_task(&self, id: &str) -> Result<EmployeeTask> {
        self.transition_staff_task(id, EmployeeTask::start).await
    }

    pub async fn complete_staff_task(&self, id: &str) -> Result<EmployeeTask> {
        self.transition_staff_task(id, EmployeeTask::complete).await
    }

    pub async fn staff_analytics(&self) -> StaffAnalytics {
        staff::analytics(&self.state.read().await.staff_tasks)
    }

    async fn transition_staff_task(
        &self,
        id: &str,
        apply: fn(&mut EmployeeTask) -> DomainResult<()>,
    ) -> Result<EmployeeTask> {
        let mut state = self.state.write().await;
        let task = state
            .staff_tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| DomainError::not_found("EmployeeTask", id))?;
        apply(task)?;
        info!(task_id = id, status = %task.status, "Staff task status changed");
        Ok(task.clone())
    }
}
