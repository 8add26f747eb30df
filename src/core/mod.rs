//! Core library modules for butterfly-trip
//!
//! Tour construction plus the stop model, error types and route exports
//! around it.

pub mod error;
pub mod gpx;
pub mod request;
pub mod stop;
pub mod summary;
pub mod tour;

// Re-export main types for internal use
pub use request::{optimize, OptimizeRequest, OptimizeResponse};
pub use gpx::to_gpx;
pub use stop::Stop;
pub use summary::RouteSummary;
pub use tour::{build_tour, nearest_neighbor_order, Located, Tour, TourOrder};
