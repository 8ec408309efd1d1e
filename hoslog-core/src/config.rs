//! Regulatory configuration shared by the estimator and the simulator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Immutable bundle of HOS numeric constants.
///
/// Values default to the US property-carrying limits (70h/8-day cycle) and are
/// loaded once per process; nothing mutates the bundle after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HosConfig {
    // Regulatory ceilings
    #[serde(default = "HosConfig::default_max_driving_time")]
    pub max_driving_time: f64,
    #[serde(default = "HosConfig::default_max_duty_window")]
    pub max_duty_window: f64,
    #[serde(default = "HosConfig::default_max_weekly_cycle")]
    pub max_weekly_cycle: f64,

    // Break and reset rules
    #[serde(default = "HosConfig::default_break_required_after")]
    pub break_required_after: f64,
    #[serde(default = "HosConfig::default_mandatory_break_duration")]
    pub mandatory_break_duration: f64,
    #[serde(default = "HosConfig::default_sleeper_berth_required")]
    pub sleeper_berth_required: f64,

    // Fixed task durations
    #[serde(default = "HosConfig::default_pre_trip_duration")]
    pub pre_trip_duration: f64,
    #[serde(default = "HosConfig::default_pickup_duration")]
    pub pickup_duration: f64,
    #[serde(default = "HosConfig::default_post_trip_duration")]
    pub post_trip_duration: f64,
    #[serde(default = "HosConfig::default_initial_rest_duration")]
    pub initial_rest_duration: f64,
    #[serde(default = "HosConfig::default_fixed_on_duty_hours")]
    pub fixed_on_duty_hours: f64,

    // Refuel rule
    #[serde(default = "HosConfig::default_refuel_threshold_miles")]
    pub refuel_threshold_miles: f64,
    #[serde(default = "HosConfig::default_refuel_duration")]
    pub refuel_duration: f64,

    // Clock and grid constants
    #[serde(default = "HosConfig::default_hours_in_day")]
    pub hours_in_day: f64,
    #[serde(default = "HosConfig::default_minutes_per_hour")]
    pub minutes_per_hour: f64,
    #[serde(default = "HosConfig::default_time_step")]
    pub time_step: f64,
}

impl HosConfig {
    #[must_use]
    pub const fn default_max_driving_time() -> f64 {
        11.0
    }

    #[must_use]
    pub const fn default_max_duty_window() -> f64 {
        14.0
    }

    #[must_use]
    pub const fn default_max_weekly_cycle() -> f64 {
        70.0
    }

    #[must_use]
    pub const fn default_break_required_after() -> f64 {
        8.0
    }

    #[must_use]
    pub const fn default_mandatory_break_duration() -> f64 {
        0.5
    }

    #[must_use]
    pub const fn default_sleeper_berth_required() -> f64 {
        10.0
    }

    #[must_use]
    pub const fn default_pre_trip_duration() -> f64 {
        0.5
    }

    #[must_use]
    pub const fn default_pickup_duration() -> f64 {
        0.5
    }

    #[must_use]
    pub const fn default_post_trip_duration() -> f64 {
        0.5
    }

    #[must_use]
    pub const fn default_initial_rest_duration() -> f64 {
        6.5
    }

    /// Pre-trip + pickup + post-trip bundled for the feasibility estimate.
    #[must_use]
    pub const fn default_fixed_on_duty_hours() -> f64 {
        1.5
    }

    #[must_use]
    pub const fn default_refuel_threshold_miles() -> f64 {
        980.0
    }

    #[must_use]
    pub const fn default_refuel_duration() -> f64 {
        0.5
    }

    #[must_use]
    pub const fn default_hours_in_day() -> f64 {
        24.0
    }

    #[must_use]
    pub const fn default_minutes_per_hour() -> f64 {
        60.0
    }

    #[must_use]
    pub const fn default_time_step() -> f64 {
        0.5
    }

    /// Validate configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns `HosConfigError` when any field violates the documented bounds.
    pub fn validate(&self) -> Result<(), HosConfigError> {
        self.validate_ceilings()?;
        self.validate_durations()?;
        self.validate_clock()?;
        Ok(())
    }

    fn validate_ceilings(&self) -> Result<(), HosConfigError> {
        let positive = [
            ("max_driving_time", self.max_driving_time),
            ("max_duty_window", self.max_duty_window),
            ("max_weekly_cycle", self.max_weekly_cycle),
            ("break_required_after", self.break_required_after),
            ("sleeper_berth_required", self.sleeper_berth_required),
            ("refuel_threshold_miles", self.refuel_threshold_miles),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(HosConfigError::NonPositive { field, value });
            }
        }
        Ok(())
    }

    fn validate_durations(&self) -> Result<(), HosConfigError> {
        let non_negative = [
            ("mandatory_break_duration", self.mandatory_break_duration),
            ("pre_trip_duration", self.pre_trip_duration),
            ("pickup_duration", self.pickup_duration),
            ("post_trip_duration", self.post_trip_duration),
            ("initial_rest_duration", self.initial_rest_duration),
            ("fixed_on_duty_hours", self.fixed_on_duty_hours),
            ("refuel_duration", self.refuel_duration),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(HosConfigError::Negative { field, value });
            }
        }
        Ok(())
    }

    fn validate_clock(&self) -> Result<(), HosConfigError> {
        let positive = [
            ("hours_in_day", self.hours_in_day),
            ("minutes_per_hour", self.minutes_per_hour),
            ("time_step", self.time_step),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(HosConfigError::NonPositive { field, value });
            }
        }
        if self.time_step > self.hours_in_day {
            return Err(HosConfigError::StepExceedsDay {
                step: self.time_step,
                hours_in_day: self.hours_in_day,
            });
        }
        Ok(())
    }
}

impl Default for HosConfig {
    fn default() -> Self {
        Self {
            max_driving_time: Self::default_max_driving_time(),
            max_duty_window: Self::default_max_duty_window(),
            max_weekly_cycle: Self::default_max_weekly_cycle(),
            break_required_after: Self::default_break_required_after(),
            mandatory_break_duration: Self::default_mandatory_break_duration(),
            sleeper_berth_required: Self::default_sleeper_berth_required(),
            pre_trip_duration: Self::default_pre_trip_duration(),
            pickup_duration: Self::default_pickup_duration(),
            post_trip_duration: Self::default_post_trip_duration(),
            initial_rest_duration: Self::default_initial_rest_duration(),
            fixed_on_duty_hours: Self::default_fixed_on_duty_hours(),
            refuel_threshold_miles: Self::default_refuel_threshold_miles(),
            refuel_duration: Self::default_refuel_duration(),
            hours_in_day: Self::default_hours_in_day(),
            minutes_per_hour: Self::default_minutes_per_hour(),
            time_step: Self::default_time_step(),
        }
    }
}

/// Errors raised when configuration invariants are violated.
#[derive(Debug, Error, PartialEq)]
pub enum HosConfigError {
    #[error("{field} must be positive (got {value:.2})")]
    NonPositive { field: &'static str, value: f64 },
    #[error("{field} must be non-negative (got {value:.2})")]
    Negative { field: &'static str, value: f64 },
    #[error("time_step {step:.2} exceeds hours_in_day {hours_in_day:.2}")]
    StepExceedsDay { step: f64, hours_in_day: f64 },
}
