use actix_web::{web, App, HttpServer};
use serde_json::Value;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use taskflow_domain::{date, Task};

/// A stand-in for a Bark push server. Records every body it receives and
/// acks like the real thing; device keys starting with "reject" get a
/// failure ack instead.
pub struct FakeBarkDevice {
    pub address: String,
    pub received: Arc<Mutex<Vec<Value>>>,
}

impl FakeBarkDevice {
    pub fn device_url(&self, device_key: &str) -> String {
        format!("{}/{}", self.address, device_key)
    }

    pub fn push_count(&self) -> usize {
        self.received.lock().unwrap().len()
    }
}

pub async fn spawn_fake_bark_device() -> FakeBarkDevice {
    let received: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));
    let recorded = received.clone();

    let listener = TcpListener::bind("127.0.0.1:0").expect("To bind the fake device listener");
    let port = listener
        .local_addr()
        .expect("To read the fake device address")
        .port();

    let server = HttpServer::new(move || {
        let recorded = recorded.clone();
        App::new()
            .app_data(web::Data::new(recorded))
            .route("/{device_key}/", web::post().to(record_push))
    })
    .listen(listener)
    .expect("To listen on the fake device port")
    .workers(1)
    .run();
    let _ = actix_web::rt::spawn(server);

    FakeBarkDevice {
        address: format!("http://127.0.0.1:{}", port),
        received,
    }
}

async fn record_push(
    recorded: web::Data<Arc<Mutex<Vec<Value>>>>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> web::Json<Value> {
    let device_key = path.into_inner();
    recorded.lock().unwrap().push(body.into_inner());

    if device_key.starts_with("reject") {
        web::Json(serde_json::json!({ "code": 400, "message": "device token invalid" }))
    } else {
        web::Json(serde_json::json!({ "code": 200, "message": "success" }))
    }
}

/// A task that is eligible right now: due today with a remind time of
/// midnight, so any minute of the day is past the remind instant.
pub fn task_due_now(title: &str) -> Task {
    let mut task = Task::new(title);
    task.due_date = Some(date::civil_date(chrono::Utc::now()));
    task.reminder.enabled = true;
    task.reminder.remind_time = Some("00:00".into());
    task
}
