use crate::reminder::run_reminder_pass::RunReminderPassUseCase;
use crate::shared::usecase::execute;
use actix_web::rt::time::{interval, sleep_until, Instant};
use std::time::Duration;
use taskflow_infra::TaskflowContext;

/// Seconds until the next minute boundary, shifted `secs_before_min`
/// seconds earlier
pub fn get_start_delay(now_ts: usize, secs_before_min: usize) -> usize {
    let secs_to_next_minute = 60 - (now_ts / 1000) % 60;
    if secs_to_next_minute > secs_before_min {
        secs_to_next_minute - secs_before_min
    } else {
        secs_to_next_minute + (60 - secs_before_min)
    }
}

/// Runs a reminder pass every minute, aligned to the minute boundary so
/// `HH:MM` remind times fire at `HH:MM` and not up to a minute late.
pub fn start_send_reminders_job(ctx: TaskflowContext) {
    actix_web::rt::spawn(async move {
        let now = ctx.sys.now().timestamp_millis();
        let secs_to_next_run = get_start_delay(now as usize, 0);
        let start = Instant::now() + Duration::from_secs(secs_to_next_run as u64);

        sleep_until(start).await;
        let mut minutely_interval = interval(Duration::from_secs(60));
        loop {
            minutely_interval.tick().await;
            let context = ctx.clone();
            actix_web::rt::spawn(async move {
                // The pass lock in the context keeps this from overlapping
                // with an externally triggered run
                let _ = execute(RunReminderPassUseCase, &context).await;
            });
        }
    });
}
