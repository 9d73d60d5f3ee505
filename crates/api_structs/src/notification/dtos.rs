use serde::{Deserialize, Serialize};
use taskflow_domain::DeliveryResult;

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryResultDTO {
    pub url: String,
    pub success: bool,
    pub error: Option<String>,
}

impl DeliveryResultDTO {
    pub fn new(result: &DeliveryResult) -> Self {
        Self {
            url: result.url.clone(),
            success: result.success,
            error: result.error.clone(),
        }
    }
}
