use crate::error::TaskflowError;
use crate::shared::usecase::{execute, UseCase};

use actix_web::{web, HttpResponse};
use std::time::Duration;
use taskflow_api_structs::send_test_notification::{APIResponse, RequestBody};
use taskflow_domain::{DeliveryResult, NotificationPayload, ID};
use taskflow_infra::{BarkClient, TaskflowContext};

pub async fn send_test_notification_controller(
    ctx: web::Data<TaskflowContext>,
    body: Option<web::Json<RequestBody>>,
) -> Result<HttpResponse, TaskflowError> {
    let body = body.map(|body| body.into_inner()).unwrap_or_default();

    let usecase = SendTestNotificationUseCase {
        device_id: body.device_id,
    };
    execute(usecase, &ctx)
        .await
        .map(|results| HttpResponse::Ok().json(APIResponse::new(results)))
        .map_err(TaskflowError::from)
}

/// Pushes a canned notification so a device registration can be verified
/// end to end without involving any task.
#[derive(Debug)]
pub struct SendTestNotificationUseCase {
    /// When unset every enabled device gets the push
    pub device_id: Option<ID>,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
    NoMatchingDevices,
}

impl From<UseCaseError> for TaskflowError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
            UseCaseError::NoMatchingDevices => {
                Self::BadClientData("No matching enabled devices".into())
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendTestNotificationUseCase {
    type Response = Vec<DeliveryResult>;
    type Error = UseCaseError;

    const NAME: &'static str = "SendTestNotification";

    async fn execute(&mut self, ctx: &TaskflowContext) -> Result<Self::Response, Self::Error> {
        let devices = match &self.device_id {
            Some(device_id) => ctx
                .repos
                .devices
                .find(device_id)
                .await
                .filter(|device| device.enabled)
                .map(|device| vec![device])
                .ok_or(UseCaseError::NoMatchingDevices)?,
            None => ctx
                .repos
                .devices
                .find_enabled()
                .await
                .map_err(|_| UseCaseError::StorageError)?,
        };
        if devices.is_empty() {
            return Err(UseCaseError::NoMatchingDevices);
        }

        let client = BarkClient::new(Duration::from_millis(ctx.config.push_timeout_millis));
        let device_urls: Vec<_> = devices.iter().map(|device| device.url.clone()).collect();

        let payload = NotificationPayload::test_notification();
        Ok(client.broadcast(&device_urls, &payload).await)
    }
}
