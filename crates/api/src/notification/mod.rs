mod send_test_notification;

use actix_web::web;
use send_test_notification::send_test_notification_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/notifications/test",
        web::post().to(send_test_notification_controller),
    );
}
