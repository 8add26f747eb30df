//! Rough human-readable figures for a tour
//!
//! Tour lengths are in raw coordinate units (degrees). One degree is taken as
//! 111.32 km and travel time assumes a constant average speed. Both are
//! display approximations only.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Kilometres per degree at the equator
pub const KM_PER_DEGREE: f64 = 111.32;

/// Average speed used for travel time estimates
pub const DEFAULT_SPEED_KMPH: f64 = 40.0;

/// Approximate distance and travel time of a tour
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RouteSummary {
    /// Approximate tour length in kilometres
    #[schema(example = 47.66)]
    pub distance_km: f64,
    /// Whole hours of the travel time estimate
    #[schema(example = 1)]
    pub hours: u64,
    /// Remaining minutes of the travel time estimate (0-59)
    #[schema(example = 11)]
    pub minutes: u64,
}

impl RouteSummary {
    /// Summarise a tour length given in degrees, at `speed_kmph`
    pub fn from_degrees(total_distance: f64, speed_kmph: f64) -> Self {
        let distance_km = total_distance * KM_PER_DEGREE;
        let total_minutes = if speed_kmph > 0.0 && distance_km.is_finite() {
            (distance_km / speed_kmph * 60.0).round().max(0.0) as u64
        } else {
            0
        };
        Self {
            distance_km,
            hours: total_minutes / 60,
            minutes: total_minutes % 60,
        }
    }
}

impl fmt::Display for RouteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Distance: {:.2} km, Time: {}h {}m",
            self.distance_km, self.hours, self.minutes
        )
    }
}
