//! Duty-status simulation engine producing the day-by-day logbook.

use crate::config::HosConfig;
use crate::logbook::{
    ACTION_BREAK, ACTION_DROP_OFF, ACTION_PICKUP, ACTION_PRE_TRIP, ACTION_REFUEL,
    ACTION_SLEEPER_RESET, ACTION_SLEEPER_RESET_PART_1, ACTION_SLEEPER_RESET_PART_2, DayLog,
    DutyStatus, LogEntry,
};
use crate::numbers::round2;
use crate::state::DriverState;

/// Stop rules evaluated before every drive step, highest priority first.
/// Exactly one rule fires per loop iteration; driving is the fallthrough.
const STOP_RULES: [StopRule; 4] = [
    StopRule::ShiftReset,
    StopRule::MandatoryBreak,
    StopRule::Refuel,
    StopRule::Pickup,
];

/// Regulatory interruptions that preempt driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StopRule {
    ShiftReset,
    MandatoryBreak,
    Refuel,
    Pickup,
}

/// Action labels attached to the closing entries of a logged span.
///
/// An unsplit span writes `whole`; a span split at midnight writes
/// `split_first` on the boundary entry and `split_second` at the end of the
/// carried-over part.
#[derive(Debug, Clone, Copy)]
struct SpanLabels {
    whole: Option<&'static str>,
    split_first: Option<&'static str>,
    split_second: Option<&'static str>,
}

impl SpanLabels {
    /// Same label on every closing entry; duplicated across a split so charts
    /// can title both halves of the interval.
    const fn uniform(action: Option<&'static str>) -> Self {
        Self {
            whole: action,
            split_first: action,
            split_second: action,
        }
    }

    const fn none() -> Self {
        Self::uniform(None)
    }
}

/// Deterministic state machine that advances a virtual driver clock in fixed
/// steps and emits one `DayLog` per calendar day touched by the trip.
///
/// One simulator serves one trip: `generate` consumes it. Loop work is linear
/// in required driving hours over the step size, so callers bound inputs
/// before constructing one.
#[derive(Debug)]
pub struct LogbookSimulator<'a> {
    config: &'a HosConfig,
    state: DriverState,
    required_driving_hrs: f64,
    average_speed_mph: f64,
    days: Vec<DayLog>,
    current_day: DayLog,
    pickup_pending: bool,
    pickup_due_hrs: f64,
}

impl<'a> LogbookSimulator<'a> {
    #[must_use]
    pub fn new(total_dist: f64, total_time_mins: f64, config: &'a HosConfig) -> Self {
        let required_driving_hrs = total_time_mins / config.minutes_per_hour;
        // A zero-time trip simulates no driving, so speed never divides by zero.
        let average_speed_mph = if required_driving_hrs > 0.0 {
            total_dist / required_driving_hrs
        } else {
            0.0
        };
        Self {
            config,
            state: DriverState::default(),
            required_driving_hrs,
            average_speed_mph,
            days: Vec::new(),
            current_day: DayLog::open(0.0),
            pickup_pending: true,
            pickup_due_hrs: 0.0,
        }
    }

    /// Run the trip to completion and return the day-by-day logbook.
    ///
    /// `pickup_time_mins` is the driving time that must elapse before the
    /// pickup stop becomes due.
    #[must_use]
    pub fn generate(mut self, pickup_time_mins: f64) -> Vec<DayLog> {
        self.pickup_due_hrs = pickup_time_mins / self.config.minutes_per_hour;

        self.log_off_duty(self.config.initial_rest_duration, None);
        self.log_on_duty(self.config.pre_trip_duration, ACTION_PRE_TRIP);

        while self.state.total_trip_time_elapsed_hrs < self.required_driving_hrs {
            if let Some(rule) = self.next_stop() {
                self.apply_stop(rule);
                continue;
            }
            let is_new_block = self
                .current_day
                .entries
                .last()
                .is_none_or(|entry| entry.status != DutyStatus::Driving);
            self.log_drive_step(is_new_block);
        }

        self.log_on_duty(self.config.post_trip_duration, ACTION_DROP_OFF);
        let remaining = self.config.hours_in_day - self.state.current_hour_of_day;
        if remaining > 0.0 {
            self.log_off_duty(remaining, None);
        }
        self.seal_day();
        self.days
    }

    /// First stop rule whose guard passes, in priority order.
    fn next_stop(&self) -> Option<StopRule> {
        STOP_RULES
            .into_iter()
            .find(|rule| self.rule_triggered(*rule))
    }

    fn rule_triggered(&self, rule: StopRule) -> bool {
        let state = &self.state;
        match rule {
            StopRule::ShiftReset => {
                state.daily_driving_hrs >= self.config.max_driving_time
                    || state.daily_duty_hrs >= self.config.max_duty_window
            }
            StopRule::MandatoryBreak => {
                state.hrs_since_last_break >= self.config.break_required_after
            }
            StopRule::Refuel => state.miles_since_refuel >= self.config.refuel_threshold_miles,
            StopRule::Pickup => {
                self.pickup_pending && state.total_trip_time_elapsed_hrs >= self.pickup_due_hrs
            }
        }
    }

    fn apply_stop(&mut self, rule: StopRule) {
        match rule {
            StopRule::ShiftReset => self.log_sleeper(self.config.sleeper_berth_required),
            StopRule::MandatoryBreak => {
                self.log_off_duty(self.config.mandatory_break_duration, Some(ACTION_BREAK));
            }
            StopRule::Refuel => {
                self.log_on_duty(self.config.refuel_duration, ACTION_REFUEL);
                self.state.miles_since_refuel = 0.0;
            }
            StopRule::Pickup => {
                self.log_on_duty(self.config.pickup_duration, ACTION_PICKUP);
                self.pickup_pending = false;
            }
        }
    }

    fn log_off_duty(&mut self, duration: f64, action: Option<&'static str>) {
        self.log_span(
            DutyStatus::OffDuty,
            duration,
            true,
            SpanLabels::uniform(action),
        );
        // Any off-duty span at least as long as the mandatory break counts
        // as one, including the initial rest and day-end padding.
        if duration >= self.config.mandatory_break_duration {
            self.state.hrs_since_last_break = 0.0;
        }
    }

    fn log_on_duty(&mut self, duration: f64, action: &'static str) {
        self.log_span(
            DutyStatus::OnDuty,
            duration,
            true,
            SpanLabels::uniform(Some(action)),
        );
        self.state.daily_duty_hrs += duration;
        self.state.hrs_since_last_break += duration;
    }

    fn log_sleeper(&mut self, duration: f64) {
        self.log_span(
            DutyStatus::Sleeper,
            duration,
            true,
            SpanLabels {
                whole: Some(ACTION_SLEEPER_RESET),
                split_first: Some(ACTION_SLEEPER_RESET_PART_1),
                split_second: Some(ACTION_SLEEPER_RESET_PART_2),
            },
        );
        self.state.reset_shift_counters();
    }

    fn log_drive_step(&mut self, is_new_block: bool) {
        let step = self.config.time_step;
        self.log_span(DutyStatus::Driving, step, is_new_block, SpanLabels::none());
        self.state.daily_driving_hrs += step;
        self.state.daily_duty_hrs += step;
        self.state.hrs_since_last_break += step;
        self.state.total_trip_time_elapsed_hrs += step;
        self.state.miles_since_refuel += self.average_speed_mph * step;
    }

    /// Log one duty-status span, splitting it at midnight when it would carry
    /// the clock past hour 24.
    ///
    /// The comparison is strict: a span ending exactly at 24.0 stays on the
    /// open day, and the next span rotates with a zero-length first part.
    /// Only calendar-day accumulators advance here; shift accumulators are
    /// the caller's concern and always receive the combined duration.
    fn log_span(
        &mut self,
        status: DutyStatus,
        duration: f64,
        start_marker: bool,
        labels: SpanLabels,
    ) {
        let remaining = self.config.hours_in_day - self.state.current_hour_of_day;
        if duration > remaining {
            if start_marker {
                self.push_entry(self.state.current_hour_of_day, status, None);
            }
            self.add_day_hours(status, remaining);
            self.state.current_hour_of_day = self.config.hours_in_day;
            self.push_entry(self.config.hours_in_day, status, labels.split_first);
            self.rotate_day();

            let remainder = duration - remaining;
            self.push_entry(0.0, status, None);
            self.state.current_hour_of_day += remainder;
            self.add_day_hours(status, remainder);
            self.push_entry(self.state.current_hour_of_day, status, labels.split_second);
        } else {
            if start_marker {
                self.push_entry(self.state.current_hour_of_day, status, None);
            }
            self.state.current_hour_of_day += duration;
            self.add_day_hours(status, duration);
            self.push_entry(self.state.current_hour_of_day, status, labels.whole);
        }
    }

    fn push_entry(&mut self, hour: f64, status: DutyStatus, action: Option<&'static str>) {
        self.current_day
            .entries
            .push(LogEntry::new(hour, status, action));
    }

    const fn add_day_hours(&mut self, status: DutyStatus, hours: f64) {
        match status {
            DutyStatus::OffDuty => self.state.day_off_duty += hours,
            DutyStatus::OnDuty => self.state.day_on_duty += hours,
            DutyStatus::Driving => self.state.day_driving += hours,
            DutyStatus::Sleeper => self.state.day_sleeper += hours,
        }
    }

    /// Seal the day summaries, append the day, reset the clock and the
    /// calendar-day accumulators, and open the next day.
    fn rotate_day(&mut self) {
        self.seal_day();
        self.state.current_hour_of_day = 0.0;
        self.state.reset_day_counters();
        self.current_day = self.open_day();
    }

    fn seal_day(&mut self) {
        let mut day = std::mem::take(&mut self.current_day);
        day.off_duty_hrs = round2(self.state.day_off_duty);
        day.on_duty_hrs = round2(self.state.day_on_duty);
        day.driving_hrs = round2(self.state.day_driving);
        day.sleeper_hrs = round2(self.state.day_sleeper);
        self.days.push(day);
    }

    fn open_day(&self) -> DayLog {
        DayLog::open(round2(
            self.state.total_trip_time_elapsed_hrs * self.config.minutes_per_hour,
        ))
    }
}
