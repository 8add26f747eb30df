//! Request/response bodies shared by the HTTP endpoint and the `solve` command

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use super::error::{Error, Result};
use super::stop::Stop;
use super::tour::build_tour;

/// Stops to order
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct OptimizeRequest {
    /// Stops with numeric `lat`/`lng`; any other fields are echoed back.
    /// `null` is read as no stops.
    #[serde(deserialize_with = "null_as_empty")]
    #[schema(
        value_type = Vec<Object>,
        example = json!([
            {"lat": 19.0760, "lng": 72.8777, "name": "Depot"},
            {"lat": 19.0330, "lng": 73.0297},
            {"lat": 19.2183, "lng": 72.9781}
        ])
    )]
    pub stops: Vec<Stop>,
}

/// Stops in visit order plus the closed tour length
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct OptimizeResponse {
    /// Input stops, reordered; the first input stop is always first
    #[schema(value_type = Vec<Object>)]
    pub optimized_route: Vec<Stop>,

    /// Planar length of the tour in coordinate units, closing edge included
    #[schema(example = 0.4281)]
    pub total_distance: f64,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Stop>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Stop>>::deserialize(deserializer)?.unwrap_or_default())
}

impl OptimizeRequest {
    /// Decode a JSON request body. Anything that is not `{"stops": [...]}`
    /// with numeric coordinates is `InvalidInput`.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| Error::InvalidInput(e.to_string()))
    }

    /// Reject requests with more than `max_stops` stops
    pub fn check_stop_limit(&self, max_stops: usize) -> Result<()> {
        if self.stops.len() > max_stops {
            return Err(Error::TooManyStops {
                count: self.stops.len(),
                max: max_stops,
            });
        }
        Ok(())
    }
}

/// Order the requested stops.
///
/// Fails only when the coordinates are so large that the tour length
/// overflows `f64`; such a length cannot be written as a JSON number.
pub fn optimize(request: OptimizeRequest) -> Result<OptimizeResponse> {
    let tour = build_tour(request.stops);
    if !tour.total_distance.is_finite() {
        return Err(Error::InvalidInput(
            "coordinates too large: tour length is not a finite number".to_string(),
        ));
    }
    Ok(OptimizeResponse {
        optimized_route: tour.stops,
        total_distance: tour.total_distance,
    })
}
