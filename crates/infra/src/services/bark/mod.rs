use futures::future::join_all;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use taskflow_domain::{DeliveryResult, NotificationLevel, NotificationPayload};
use tracing::warn;

/// Wire body of the Bark push API. Matches what the Bark server parses, so
/// the toggles travel as `"1"` / `"0"` strings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BarkRequestBody {
    title: String,
    body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sound: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_archive: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    level: Option<NotificationLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    call: Option<String>,
}

impl BarkRequestBody {
    fn new(payload: &NotificationPayload) -> Self {
        let options = &payload.options;
        Self {
            title: payload.title.clone(),
            body: payload.body.clone(),
            group: options.group.clone(),
            sound: options.sound.clone(),
            icon: options.icon.clone(),
            url: options.url.clone(),
            is_archive: options
                .is_archive
                .map(|archive| if archive { "1" } else { "0" }.to_string()),
            level: options.level,
            call: options.call.then(|| "1".to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct BarkAck {
    code: i64,
    message: Option<String>,
}

/// Client for the Bark push server API
pub struct BarkClient {
    client: Client,
}

impl BarkClient {
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("The bark http client to be created");
        Self { client }
    }

    /// Pushes one payload to one device. Transport failures, non-2xx
    /// statuses and rejecting acks all map to a failed `DeliveryResult`,
    /// never to an `Err`.
    pub async fn send(&self, device_url: &str, payload: &NotificationPayload) -> DeliveryResult {
        let url = normalize_device_url(device_url);
        let body = BarkRequestBody::new(payload);

        let res = match self.client.post(&url).json(&body).send().await {
            Ok(res) => res,
            Err(e) => {
                warn!("Bark push to {} failed: {:?}", device_url, e);
                let detail = if e.is_timeout() {
                    "Request timed out".to_string()
                } else {
                    e.to_string()
                };
                return DeliveryResult::failed(device_url, detail);
            }
        };

        let status = res.status();
        if !status.is_success() {
            return DeliveryResult::failed(
                device_url,
                format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                ),
            );
        }

        match res.json::<BarkAck>().await {
            Ok(ack) if ack.code == 200 => DeliveryResult::delivered(device_url),
            Ok(ack) => DeliveryResult::failed(
                device_url,
                ack.message.unwrap_or_else(|| "Unknown error".to_string()),
            ),
            Err(e) => {
                warn!("Bark push to {} returned a malformed ack: {:?}", device_url, e);
                DeliveryResult::failed(device_url, "Malformed response from device")
            }
        }
    }

    /// Fans one payload out to all given devices concurrently. The returned
    /// results keep the order of `device_urls`.
    pub async fn broadcast(
        &self,
        device_urls: &[String],
        payload: &NotificationPayload,
    ) -> Vec<DeliveryResult> {
        let sends = device_urls.iter().map(|url| self.send(url, payload));
        join_all(sends).await
    }
}

/// Device urls are stored as pasted by users. Trim them and append the
/// trailing slash the Bark server routes on.
fn normalize_device_url(device_url: &str) -> String {
    let mut url = device_url.trim().to_string();
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

#[cfg(test)]
mod test {
    use super::*;
    use taskflow_domain::Task;

    #[test]
    fn it_normalizes_device_urls() {
        assert_eq!(
            normalize_device_url("https://api.day.app/key"),
            "https://api.day.app/key/"
        );
        assert_eq!(
            normalize_device_url("https://api.day.app/key/"),
            "https://api.day.app/key/"
        );
        assert_eq!(
            normalize_device_url("  https://api.day.app/key "),
            "https://api.day.app/key/"
        );
    }

    #[test]
    fn it_serializes_the_wire_body() {
        let mut task = Task::new("Ship the release");
        task.due_date = Some("2025-03-10".parse().unwrap());
        task.reminder.enabled = true;
        task.reminder.remind_time = Some("09:00".into());
        task.reminder.critical = true;

        let payload = NotificationPayload::task_reminder(&task);
        let body = serde_json::to_value(BarkRequestBody::new(&payload)).unwrap();

        assert_eq!(body["title"], "🟡 Task reminder");
        assert_eq!(
            body["body"],
            "Ship the release\n📅 Due: 2025-03-10\n⏰ Remind at: 09:00"
        );
        assert_eq!(body["group"], "TaskFlow");
        assert_eq!(body["sound"], "bell");
        assert_eq!(body["level"], "critical");
        assert!(body.get("icon").is_none());
        assert!(body.get("isArchive").is_none());
        assert!(body.get("call").is_none());
    }

    #[test]
    fn it_stringifies_flag_options() {
        let mut payload = NotificationPayload::test_notification();
        payload.options.is_archive = Some(true);
        payload.options.call = true;

        let body = serde_json::to_value(BarkRequestBody::new(&payload)).unwrap();
        assert_eq!(body["isArchive"], "1");
        assert_eq!(body["call"], "1");

        payload.options.is_archive = Some(false);
        let body = serde_json::to_value(BarkRequestBody::new(&payload)).unwrap();
        assert_eq!(body["isArchive"], "0");
    }
}
