//! Well-typed trip inputs handed across the API boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::HosConfig;

/// Request fields every caller must supply, in wire order.
pub const REQUIRED_FIELDS: [&str; 4] = [
    "total_distance_miles",
    "total_driving_time",
    "current_cycle_hour",
    "pickup_time",
];

/// Validated numeric inputs for one trip.
///
/// Field renames pin the legacy wire names; `total_driving_time` and
/// `pickup_time` are minutes, `current_cycle_hour` is hours already consumed
/// in the rolling cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    pub total_distance_miles: f64,
    #[serde(rename = "total_driving_time")]
    pub total_driving_time_mins: f64,
    #[serde(rename = "current_cycle_hour")]
    pub cycle_hours_used: f64,
    #[serde(rename = "pickup_time")]
    pub pickup_time_mins: f64,
}

impl TripRequest {
    /// Validate the numeric ranges before the core runs.
    ///
    /// # Errors
    ///
    /// Returns `TripRequestError` when a field is non-finite, negative, or the
    /// cycle hours exceed the weekly limit.
    pub fn validate(&self, config: &HosConfig) -> Result<(), TripRequestError> {
        let fields = [
            ("total_distance_miles", self.total_distance_miles),
            ("total_driving_time", self.total_driving_time_mins),
            ("current_cycle_hour", self.cycle_hours_used),
            ("pickup_time", self.pickup_time_mins),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(TripRequestError::NotFinite { field });
            }
            if value < 0.0 {
                return Err(TripRequestError::Negative { field, value });
            }
        }
        if self.cycle_hours_used > config.max_weekly_cycle {
            return Err(TripRequestError::CycleBeyondLimit {
                value: self.cycle_hours_used,
                max: config.max_weekly_cycle,
            });
        }
        Ok(())
    }
}

/// Errors raised when trip inputs fall outside the accepted ranges.
#[derive(Debug, Error, PartialEq)]
pub enum TripRequestError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("{field} must be non-negative (got {value:.2})")]
    Negative { field: &'static str, value: f64 },
    #[error("current_cycle_hour {value:.2} exceeds the weekly cycle limit of {max:.2}h")]
    CycleBeyondLimit { value: f64, max: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> TripRequest {
        TripRequest {
            total_distance_miles: 500.0,
            total_driving_time_mins: 600.0,
            cycle_hours_used: 20.0,
            pickup_time_mins: 0.0,
        }
    }

    #[test]
    fn accepts_ordinary_trip() {
        assert!(request().validate(&HosConfig::default()).is_ok());
    }

    #[test]
    fn rejects_negative_distance() {
        let trip = TripRequest {
            total_distance_miles: -5.0,
            ..request()
        };
        assert_eq!(
            trip.validate(&HosConfig::default()),
            Err(TripRequestError::Negative {
                field: "total_distance_miles",
                value: -5.0,
            })
        );
    }

    #[test]
    fn rejects_non_finite_minutes() {
        let trip = TripRequest {
            total_driving_time_mins: f64::NAN,
            ..request()
        };
        assert_eq!(
            trip.validate(&HosConfig::default()),
            Err(TripRequestError::NotFinite {
                field: "total_driving_time",
            })
        );
    }

    #[test]
    fn rejects_cycle_hours_beyond_limit() {
        let trip = TripRequest {
            cycle_hours_used: 80.0,
            ..request()
        };
        assert_eq!(
            trip.validate(&HosConfig::default()),
            Err(TripRequestError::CycleBeyondLimit {
                value: 80.0,
                max: 70.0,
            })
        );
    }

    #[test]
    fn wire_names_deserialize() {
        let trip: TripRequest = serde_json::from_str(
            r#"{"total_distance_miles": 300, "total_driving_time": 300,
                "current_cycle_hour": 20, "pickup_time": 60}"#,
        )
        .unwrap();
        assert!((trip.total_driving_time_mins - 300.0).abs() < f64::EPSILON);
        assert!((trip.pickup_time_mins - 60.0).abs() < f64::EPSILON);
    }
}
