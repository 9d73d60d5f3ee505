use crate::dtos::DeliveryResultDTO;
use serde::{Deserialize, Serialize};
use taskflow_domain::{TaskDispatchReport, ID};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TaskDispatchReportDTO {
    pub task_id: ID,
    pub task_title: String,
    pub deliveries: Vec<DeliveryResultDTO>,
}

impl TaskDispatchReportDTO {
    pub fn new(report: &TaskDispatchReport) -> Self {
        Self {
            task_id: report.task_id.clone(),
            task_title: report.task_title.clone(),
            deliveries: report.deliveries.iter().map(DeliveryResultDTO::new).collect(),
        }
    }
}
