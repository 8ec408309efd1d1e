//! Mutable driver accumulators for one simulation run.

/// Clock position and duty counters for the virtual driver.
///
/// Shift accumulators (`daily_driving_hrs`, `daily_duty_hrs`,
/// `hrs_since_last_break`) reset only on a sleeper-berth shift reset.
/// Calendar-day accumulators (`day_*`) reset only at midnight rotation.
/// The two families never reset together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriverState {
    /// Position on the active calendar day's clock, in [0, 24].
    pub current_hour_of_day: f64,
    /// Driving hours completed so far; advances only on drive steps.
    pub total_trip_time_elapsed_hrs: f64,
    /// Miles accumulated since the last refuel stop.
    pub miles_since_refuel: f64,

    // Shift accumulators
    pub daily_driving_hrs: f64,
    pub daily_duty_hrs: f64,
    pub hrs_since_last_break: f64,

    // Calendar-day accumulators
    pub day_off_duty: f64,
    pub day_on_duty: f64,
    pub day_driving: f64,
    pub day_sleeper: f64,
}

impl DriverState {
    /// Zero the calendar-day accumulators at midnight rotation.
    pub const fn reset_day_counters(&mut self) {
        self.day_off_duty = 0.0;
        self.day_on_duty = 0.0;
        self.day_driving = 0.0;
        self.day_sleeper = 0.0;
    }

    /// Zero the shift accumulators after a sleeper-berth reset.
    pub const fn reset_shift_counters(&mut self) {
        self.daily_driving_hrs = 0.0;
        self.daily_duty_hrs = 0.0;
        self.hrs_since_last_break = 0.0;
    }

    /// Sum of the calendar-day accumulators, which equals the hours elapsed on
    /// the active day.
    #[must_use]
    pub fn day_total(&self) -> f64 {
        self.day_off_duty + self.day_on_duty + self.day_driving + self.day_sleeper
    }
}
