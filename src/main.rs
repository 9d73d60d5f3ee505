mod telemetry;

use taskflow_api::Application;
use taskflow_infra::{run_migration, setup_context};
use telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    openssl_probe::init_ssl_cert_env_vars();

    let subscriber = get_subscriber("taskflow_server".into(), "info".into());
    init_subscriber(subscriber);

    // Schema setup is an explicit startup step, never deferred to the first
    // request that happens to touch the database.
    if std::env::var("DATABASE_URL").is_ok() {
        run_migration()
            .await
            .expect("Database migrations should run");
    }

    let context = setup_context().await;

    let app = Application::new(context).await?;
    app.start().await
}
