use crate::dtos::DeliveryResultDTO;
use serde::{Deserialize, Serialize};
use taskflow_domain::{DeliveryResult, ID};

pub mod send_test_notification {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub device_id: Option<ID>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub message: String,
        pub results: Vec<DeliveryResultDTO>,
    }

    impl APIResponse {
        pub fn new(results: Vec<DeliveryResult>) -> Self {
            let delivered = results.iter().filter(|result| result.success).count();
            Self {
                message: format!("Delivered to {}/{} devices", delivered, results.len()),
                results: results.iter().map(DeliveryResultDTO::new).collect(),
            }
        }
    }
}
