pub mod force_task_reminder;
pub mod run_reminder_pass;

use actix_web::web;
use force_task_reminder::force_task_reminder_controller;
use run_reminder_pass::run_reminder_pass_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // External cron services typically only support GET, the POST route is
    // for everything else
    cfg.route("/reminders/run", web::post().to(run_reminder_pass_controller));
    cfg.route("/reminders/run", web::get().to(run_reminder_pass_controller));
    cfg.route(
        "/reminders/test",
        web::post().to(force_task_reminder_controller),
    );
}
