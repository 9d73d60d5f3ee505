use taskflow_api::Application;
use taskflow_infra::{setup_context, Config, TaskflowContext};
use taskflow_sdk::TaskflowSDK;

pub struct TestApp {
    pub config: Config,
    /// Shares its repos with the running application, so tests can seed
    /// tasks and devices directly.
    pub ctx: TaskflowContext,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, TaskflowSDK, String) {
    spawn_app_with(|_| {}).await
}

pub async fn spawn_app_with<F>(customize: F) -> (TestApp, TaskflowSDK, String)
where
    F: FnOnce(&mut TaskflowContext),
{
    let mut ctx = setup_context().await;
    ctx.config.port = 0; // Random port
    ctx.config.cron_secret = None;
    // Passes are triggered over HTTP, never by the minutely job
    ctx.config.enable_reminder_job = false;
    customize(&mut ctx);

    let config = ctx.config.clone();
    let app_ctx = ctx.clone();
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}/api/v1", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp {
        config,
        ctx: app_ctx,
    };
    let sdk = TaskflowSDK::new(address.clone(), "");
    (app, sdk, address)
}
