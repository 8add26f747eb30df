//! # Butterfly-trip Library
//!
//! Orders a set of stops into a closed tour using the nearest-neighbor
//! heuristic, and serves that over a small HTTP API.
//!
//! The tour starts at the first stop, always moves to the closest stop not
//! yet visited (ties go to the earlier stop), and finally returns to the
//! start. Distances are planar Euclidean on raw lat/lng values.
//!
//! ## Basic Usage
//!
//! ```rust
//! use butterfly_trip::{build_tour, Stop};
//!
//! let stops = vec![
//!     Stop::new(0.0, 0.0).with_field("name", "Depot"),
//!     Stop::new(4.0, 0.0),
//!     Stop::new(0.0, 3.0),
//!     Stop::new(4.0, 3.0),
//! ];
//!
//! let tour = build_tour(stops);
//! assert_eq!(tour.stops[0].extra["name"], "Depot");
//! assert_eq!(tour.total_distance, 14.0);
//! ```
//!
//! Any type implementing [`Located`] can be ordered, including plain
//! `(lat, lng)` tuples:
//!
//! ```rust
//! let order = butterfly_trip::nearest_neighbor_order(&[(0.0, 0.0), (1.0, 0.0), (1.0, 0.0)]);
//! assert_eq!(order.order, vec![0, 1, 2]);
//! ```

pub mod cli;
pub mod core;
pub mod logging;
pub mod server;

pub use crate::core::error::{Error, Result};
pub use crate::core::gpx::to_gpx;
pub use crate::core::request::{optimize, OptimizeRequest, OptimizeResponse};
pub use crate::core::stop::Stop;
pub use crate::core::summary::RouteSummary;
pub use crate::core::tour::{
    build_tour, nearest_neighbor_order, planar_distance, tour_length, Located, Tour, TourOrder,
};
pub use crate::server::ServerConfig;
