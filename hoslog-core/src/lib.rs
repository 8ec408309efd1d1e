//! Hoslog Core
//!
//! Platform-agnostic Hours-of-Service logic: trip feasibility estimation and
//! the deterministic duty-status logbook simulation. This crate carries no
//! transport or storage concerns; boundary layers hand it validated numeric
//! inputs and render the day-logs it returns.

pub mod config;
pub mod feasibility;
pub mod logbook;
pub mod numbers;
pub mod simulator;
pub mod state;
pub mod trip;

// Re-export commonly used types
pub use config::{HosConfig, HosConfigError};
pub use feasibility::{TripFeasibility, estimate_trip_feasibility};
pub use logbook::{
    ACTION_BREAK, ACTION_DROP_OFF, ACTION_PICKUP, ACTION_PRE_TRIP, ACTION_REFUEL,
    ACTION_SLEEPER_RESET, ACTION_SLEEPER_RESET_PART_1, ACTION_SLEEPER_RESET_PART_2, DayLog,
    DutyStatus, LogEntry,
};
pub use simulator::LogbookSimulator;
pub use state::DriverState;
pub use trip::{REQUIRED_FIELDS, TripRequest, TripRequestError};
