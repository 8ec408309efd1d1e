//! Quick arithmetic pre-check of trip feasibility against the weekly cycle.

use serde::{Deserialize, Serialize};

use crate::config::HosConfig;
use crate::numbers::{count_to_f64, floor_to_count};

/// Outcome of the feasibility pre-check, with the computed intermediates.
///
/// `message` is empty when the trip is feasible; otherwise it carries the
/// client-facing rejection text verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripFeasibility {
    pub feasible: bool,
    pub predicted_on_duty_hrs: f64,
    pub remaining_cycle_hrs: f64,
    pub refuel_stops: u32,
    pub message: String,
}

/// Estimate whether a trip fits the driver's remaining weekly cycle.
///
/// The prediction sums required driving, the fixed pre-trip/pickup/post-trip
/// block, forced refuel stops, and mandatory 30-minute breaks. It deliberately
/// ignores sleeper-berth shift resets forced by the driving and duty-window
/// ceilings, so the full simulation can show a long multi-day trip consuming
/// materially more elapsed time than predicted here.
#[must_use]
pub fn estimate_trip_feasibility(
    total_dist: f64,
    total_time_mins: f64,
    cycle_hours_used: f64,
    config: &HosConfig,
) -> TripFeasibility {
    let driving_hrs = total_time_mins / config.minutes_per_hour;
    let remaining_cycle_hrs = config.max_weekly_cycle - cycle_hours_used;

    let refuel_stops = floor_to_count(total_dist / config.refuel_threshold_miles);
    let refuel_hrs = count_to_f64(refuel_stops) * config.refuel_duration;

    let subtotal = driving_hrs + config.fixed_on_duty_hours + refuel_hrs;
    let breaks = floor_to_count(subtotal / config.break_required_after);
    let predicted_on_duty_hrs = subtotal + count_to_f64(breaks) * config.mandatory_break_duration;

    let feasible = predicted_on_duty_hrs <= remaining_cycle_hrs;
    let message = if feasible {
        String::new()
    } else {
        format!(
            "Insufficient cycle hours. Trip requires ~{predicted_on_duty_hrs:.2}h on-duty. \
             You only have {remaining_cycle_hrs:.2}h left in your cycle."
        )
    };

    TripFeasibility {
        feasible,
        predicted_on_duty_hrs,
        remaining_cycle_hrs,
        refuel_stops,
        message,
    }
}
