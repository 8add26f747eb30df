//! Stop records as they travel over the wire
//!
//! A stop carries a `lat`/`lng` pair plus whatever else the caller attached
//! (names, addresses, ids). Only the coordinates are read; the rest is kept
//! in a side-map and written back out unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::tour::Located;

/// A stop to visit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
    /// Caller-supplied fields, passed through opaquely
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Stop {
    /// Create a stop with no extra fields
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            extra: Map::new(),
        }
    }

    /// Attach an opaque field (builder style)
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

impl Located for Stop {
    #[inline]
    fn lat(&self) -> f64 {
        self.lat
    }

    #[inline]
    fn lng(&self) -> f64 {
        self.lng
    }
}
