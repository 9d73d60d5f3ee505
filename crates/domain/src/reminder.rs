use crate::date::RemindTime;
use crate::notification::DeliveryResult;
use crate::shared::entity::ID;
use chrono::{DateTime, Utc};

/// Minimum spacing in minutes between two dispatches for the same task.
pub const COOLDOWN_MINUTES: i64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderEvaluation {
    pub should_fire: bool,
    /// Minutes from now until the computed remind instant, when that instant
    /// falls on the current civil day. Diagnostic only, negative once passed.
    pub minutes_until_remind: Option<i64>,
}

impl ReminderEvaluation {
    fn no_fire() -> Self {
        Self {
            should_fire: false,
            minutes_until_remind: None,
        }
    }

    fn at_minute(target_minute: i64, current_minute: i64) -> Self {
        Self {
            should_fire: current_minute >= target_minute,
            minutes_until_remind: Some(target_minute - current_minute),
        }
    }
}

/// Decide whether a reminder fires at the current minute.
///
/// `days_until_due` is a civil-date difference (midnight to midnight in the
/// fixed offset), `current_minute_of_day` the minutes since civil midnight.
///
/// The three day buckets use deliberately different formulas: a lead time
/// crosses at most one midnight, and folding the buckets into one
/// day-crossing expression drops multi-day leads that cross exactly one
/// midnight. Keep the branches separate.
pub fn evaluate_reminder(
    days_until_due: i64,
    remind_time: &RemindTime,
    remind_before_minutes: u32,
    current_minute_of_day: u32,
) -> ReminderEvaluation {
    let remind_total_minutes = remind_time.total_minutes() as i64;
    let remind_before = remind_before_minutes as i64;
    let current = current_minute_of_day as i64;

    if days_until_due < 0 {
        // Past-due tasks never fire from this path
        return ReminderEvaluation::no_fire();
    }

    if days_until_due == 0 {
        // Due today: subtract the lead, clamped to civil midnight. Leads of a
        // day or more only contribute their sub-day remainder here.
        let actual_remind_minutes = std::cmp::max(0, remind_total_minutes - remind_before % 1440);
        return ReminderEvaluation::at_minute(actual_remind_minutes, current);
    }

    if days_until_due == 1 {
        if remind_before >= 1440 {
            // A full-day lead lands on today at the nominal clock time
            return ReminderEvaluation::at_minute(remind_total_minutes, current);
        }
        if remind_before > 0 {
            // A sub-day lead reaches today only when it crosses midnight
            let cross_day_minutes = 1440 - remind_before + remind_total_minutes;
            if cross_day_minutes < 1440 {
                return ReminderEvaluation::at_minute(cross_day_minutes, current);
            }
        }
        return ReminderEvaluation::no_fire();
    }

    // Due further out: only a lead long enough to reach back the whole span
    // puts the remind instant on today, again at the nominal clock time.
    if remind_before >= days_until_due * 1440 - (1440 - remind_total_minutes) {
        return ReminderEvaluation::at_minute(remind_total_minutes, current);
    }
    ReminderEvaluation::no_fire()
}

/// Cool-down check on the last dispatch instant. Compared at seconds
/// precision; a future-dated timestamp never suppresses.
pub fn is_suppressed(last_fired_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    let last_fired_at = match last_fired_at {
        Some(instant) => instant,
        None => return false,
    };
    let elapsed_secs = now.signed_duration_since(last_fired_at).num_seconds();
    elapsed_secs >= 0 && elapsed_secs < COOLDOWN_MINUTES * 60
}

/// Per-target outcomes for one task that entered dispatch.
#[derive(Debug, Clone)]
pub struct TaskDispatchReport {
    pub task_id: ID,
    pub task_title: String,
    pub deliveries: Vec<DeliveryResult>,
}

/// Outcome of one complete evaluation pass.
#[derive(Debug, Clone)]
pub struct ReminderPassSummary {
    pub tasks_checked: usize,
    pub tasks_fired: usize,
    /// Civil wall clock `HH:MM` at the start of the pass.
    pub current_time: String,
    pub reports: Vec<TaskDispatchReport>,
}
