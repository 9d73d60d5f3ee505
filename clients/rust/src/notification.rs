use crate::base::{APIResponse, BaseClient};
use reqwest::StatusCode;
use std::sync::Arc;
use taskflow_api_structs::*;
use taskflow_domain::ID;

#[derive(Clone)]
pub struct NotificationClient {
    base: Arc<BaseClient>,
}

pub struct SendTestNotificationInput {
    pub device_id: Option<ID>,
}

impl NotificationClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn send_test(
        &self,
        input: SendTestNotificationInput,
    ) -> APIResponse<send_test_notification::APIResponse> {
        let body = send_test_notification::RequestBody {
            device_id: input.device_id,
        };
        self.base
            .post(body, "notifications/test".into(), StatusCode::OK)
            .await
    }
}
