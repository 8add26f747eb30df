//! Tour construction (nearest-neighbor greedy)
//!
//! Builds a closed visiting order over a set of points by always moving to
//! the closest unvisited point, starting from the first input point, then
//! returning to it.
//!
//! Distances are planar Euclidean on raw lat/lng values. This is not a
//! geographic distance; it is kept as-is so results stay reproducible.

use std::time::Instant;

/// Anything with a latitude and a longitude
pub trait Located {
    fn lat(&self) -> f64;
    fn lng(&self) -> f64;
}

impl Located for (f64, f64) {
    #[inline]
    fn lat(&self) -> f64 {
        self.0
    }

    #[inline]
    fn lng(&self) -> f64 {
        self.1
    }
}

impl Located for [f64; 2] {
    #[inline]
    fn lat(&self) -> f64 {
        self[0]
    }

    #[inline]
    fn lng(&self) -> f64 {
        self[1]
    }
}

impl<T: Located + ?Sized> Located for &T {
    #[inline]
    fn lat(&self) -> f64 {
        (**self).lat()
    }

    #[inline]
    fn lng(&self) -> f64 {
        (**self).lng()
    }
}

/// Visit order as indices into the input, plus the closed tour length
#[derive(Debug, Clone, PartialEq)]
pub struct TourOrder {
    /// Indices into the input, in visit order. Always starts with 0.
    pub order: Vec<usize>,
    /// Sum of all legs including the closing edge back to the start
    pub total_distance: f64,
}

/// A tour over owned records
#[derive(Debug, Clone, PartialEq)]
pub struct Tour<P> {
    /// Input records, reordered into visit order
    pub stops: Vec<P>,
    /// Sum of all legs including the closing edge back to the start
    pub total_distance: f64,
}

/// Planar Euclidean distance on raw lat/lng values
#[inline]
pub fn planar_distance<A: Located + ?Sized, B: Located + ?Sized>(a: &A, b: &B) -> f64 {
    let d_lat = a.lat() - b.lat();
    let d_lng = a.lng() - b.lng();
    (d_lat * d_lat + d_lng * d_lng).sqrt()
}

/// Compute the nearest-neighbor visit order.
///
/// Starts at index 0. At each step the unvisited points are scanned in
/// ascending index order and the first strictly-closest one is taken, so
/// ties go to the lower index. The closing edge from the last visited point
/// back to the start is always added to the total.
///
/// O(N²) time, O(N) scratch space. Empty input yields an empty order and a
/// distance of 0.
pub fn nearest_neighbor_order<P: Located>(points: &[P]) -> TourOrder {
    let n = points.len();
    if n == 0 {
        return TourOrder {
            order: vec![],
            total_distance: 0.0,
        };
    }

    let start_time = Instant::now();

    let start = 0;
    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut total_distance = 0.0;

    let mut current = start;
    visited[current] = true;
    order.push(current);

    for _ in 1..n {
        let mut nearest = usize::MAX;
        let mut min_distance = f64::INFINITY;

        for (j, candidate) in points.iter().enumerate() {
            if visited[j] {
                continue;
            }
            let d = planar_distance(&points[current], candidate);
            if d < min_distance {
                min_distance = d;
                nearest = j;
            }
        }

        if nearest == usize::MAX {
            // Only non-finite distances left (NaN coordinates): take the
            // lowest unvisited index so the order stays a permutation.
            nearest = visited.iter().position(|&v| !v).unwrap_or(current);
            min_distance = planar_distance(&points[current], &points[nearest]);
        }

        total_distance += min_distance;
        visited[nearest] = true;
        order.push(nearest);
        current = nearest;
    }

    total_distance += planar_distance(&points[current], &points[start]);

    tracing::debug!(
        stops = n,
        total_distance,
        elapsed_us = start_time.elapsed().as_micros() as u64,
        "nearest-neighbor tour built"
    );

    TourOrder {
        order,
        total_distance,
    }
}

/// Build a tour, moving the input records into visit order.
pub fn build_tour<P: Located>(points: Vec<P>) -> Tour<P> {
    let TourOrder {
        order,
        total_distance,
    } = nearest_neighbor_order(&points);

    let mut slots: Vec<Option<P>> = points.into_iter().map(Some).collect();
    let stops = order
        .iter()
        .filter_map(|&i| slots[i].take())
        .collect();

    Tour {
        stops,
        total_distance,
    }
}

/// Closed length of `order` over `points`: consecutive legs, then the edge
/// from the last back to the first. Legs are summed in visit order, matching
/// the accumulation in [`nearest_neighbor_order`].
pub fn tour_length<P: Located>(points: &[P], order: &[usize]) -> f64 {
    if order.len() <= 1 {
        return 0.0;
    }

    let mut total = 0.0;
    for w in order.windows(2) {
        total += planar_distance(&points[w[0]], &points[w[1]]);
    }
    if let (Some(&first), Some(&last)) = (order.first(), order.last()) {
        total += planar_distance(&points[last], &points[first]);
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Helper: deterministic scatter of points in a lat/lng box
    fn random_points(seed: u64, n: usize) -> Vec<(f64, f64)> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n)
            .map(|_| (rng.random_range(-60.0..60.0), rng.random_range(-180.0..180.0)))
            .collect()
    }

    #[test]
    fn test_tour_empty() {
        let points: Vec<(f64, f64)> = vec![];
        let result = nearest_neighbor_order(&points);
        assert!(result.order.is_empty());
        assert_eq!(result.total_distance, 0.0);

        let tour = build_tour(points);
        assert!(tour.stops.is_empty());
        assert_eq!(tour.total_distance, 0.0);
    }

    #[test]
    fn test_tour_single_point() {
        let tour = build_tour(vec![(5.0, 5.0)]);
        assert_eq!(tour.stops, vec![(5.0, 5.0)]);
        assert_eq!(tour.total_distance, 0.0);
    }

    #[test]
    fn test_tour_two_points_counts_closing_edge() {
        // 3-4-5 triangle leg, there and back
        let tour = build_tour(vec![(0.0, 0.0), (3.0, 4.0)]);
        assert_eq!(tour.stops, vec![(0.0, 0.0), (3.0, 4.0)]);
        assert_eq!(tour.total_distance, 10.0);
    }

    #[test]
    fn test_tour_rectangle() {
        // 3x4 rectangle:
        //   (0,0) -> (0,3) = 3
        //   (0,3) -> (4,3) = 4
        //   (4,3) -> (4,0) = 3
        //   (4,0) -> (0,0) = 4 (closing edge)
        let points = vec![(0.0, 0.0), (0.0, 3.0), (4.0, 3.0), (4.0, 0.0)];
        let result = nearest_neighbor_order(&points);
        assert_eq!(result.order, vec![0, 1, 2, 3]);
        assert_eq!(result.total_distance, 14.0);

        let tour = build_tour(points.clone());
        assert_eq!(tour.stops, points);
        assert_eq!(tour.total_distance, 14.0);
    }

    #[test]
    fn test_tour_reorders_shuffled_input() {
        // Same rectangle, input scrambled. From (0,0):
        //   nearest is (0,3) at index 3, then (4,3) at index 1, then (4,0) at index 2
        let points = vec![(0.0, 0.0), (4.0, 3.0), (4.0, 0.0), (0.0, 3.0)];
        let result = nearest_neighbor_order(&points);
        assert_eq!(result.order, vec![0, 3, 1, 2]);
        assert_eq!(result.total_distance, 14.0);
    }

    #[test]
    fn test_tour_tie_break_prefers_lower_index() {
        // B and C coincide; B has the lower index so it goes first
        let points = vec![(0.0, 0.0), (1.0, 0.0), (1.0, 0.0)];
        let result = nearest_neighbor_order(&points);
        assert_eq!(result.order, vec![0, 1, 2]);
        // 1 + 0 + 1
        assert_eq!(result.total_distance, 2.0);
    }

    #[test]
    fn test_tour_tie_break_equidistant_sides() {
        // (1,0) and (-1,0) are both at distance 1 from the start.
        // Index 1 wins even though index 2 is the same distance.
        let points = vec![(0.0, 0.0), (-1.0, 0.0), (1.0, 0.0)];
        let result = nearest_neighbor_order(&points);
        assert_eq!(result.order, vec![0, 1, 2]);
        // 1 + 2 + 1
        assert_eq!(result.total_distance, 4.0);
    }

    #[test]
    fn test_tour_all_coincident() {
        let points = vec![(7.5, -2.25); 5];
        let result = nearest_neighbor_order(&points);
        assert_eq!(result.order, vec![0, 1, 2, 3, 4]);
        assert_eq!(result.total_distance, 0.0);
    }

    #[test]
    fn test_tour_collinear() {
        // Points on a line, start in the middle:
        //   0 -> 1 (1), 1 -> 2 (1), 2 -> 3 (4), closing 3 -> 0 (2)
        let points = vec![(0.0, 0.0), (0.0, 1.0), (0.0, 2.0), (0.0, -2.0)];
        let result = nearest_neighbor_order(&points);
        assert_eq!(result.order, vec![0, 1, 2, 3]);
        assert_eq!(result.total_distance, 8.0);
    }

    #[test]
    fn test_tour_is_permutation_with_fixed_start() {
        for seed in 0..8 {
            let points = random_points(seed, 60);
            let result = nearest_neighbor_order(&points);

            assert_eq!(result.order.len(), points.len());
            assert_eq!(result.order[0], 0);

            let mut seen = result.order.clone();
            seen.sort_unstable();
            assert_eq!(seen, (0..points.len()).collect::<Vec<_>>());

            assert!(result.total_distance > 0.0);
        }
    }

    #[test]
    fn test_tour_total_matches_recomputed_length() {
        let points = random_points(7, 40);
        let result = nearest_neighbor_order(&points);
        assert_eq!(tour_length(&points, &result.order), result.total_distance);
    }

    #[test]
    fn test_tour_is_deterministic() {
        let points = random_points(42, 100);
        let first = nearest_neighbor_order(&points);
        let second = nearest_neighbor_order(&points);
        assert_eq!(first.order, second.order);
        assert_eq!(
            first.total_distance.to_bits(),
            second.total_distance.to_bits()
        );
    }

    #[test]
    fn test_tour_each_step_is_greedy() {
        // Every move must go to a closest remaining point
        let points = random_points(3, 30);
        let result = nearest_neighbor_order(&points);

        for step in 1..result.order.len() {
            let current = result.order[step - 1];
            let chosen = result.order[step];
            let chosen_d = planar_distance(&points[current], &points[chosen]);
            for &later in &result.order[step + 1..] {
                let d = planar_distance(&points[current], &points[later]);
                assert!(chosen_d <= d, "step {} skipped a closer point", step);
            }
        }
    }

    #[test]
    fn test_tour_nan_coordinates_still_permutation() {
        let points = vec![(0.0, 0.0), (f64::NAN, 1.0), (2.0, 2.0)];
        let result = nearest_neighbor_order(&points);
        let mut seen = result.order.clone();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2]);
        assert_eq!(result.order[0], 0);
    }

    #[test]
    fn test_build_tour_moves_records_in_order() {
        struct Named([f64; 2], &'static str);
        impl Located for Named {
            fn lat(&self) -> f64 {
                self.0[0]
            }
            fn lng(&self) -> f64 {
                self.0[1]
            }
        }

        let tour = build_tour(vec![
            Named([0.0, 0.0], "depot"),
            Named([10.0, 10.0], "far"),
            Named([1.0, 1.0], "near"),
        ]);
        let visited: Vec<&str> = tour.stops.iter().map(|s| s.1).collect();
        assert_eq!(visited, vec!["depot", "near", "far"]);
    }

    #[test]
    fn test_tour_length_function() {
        let points = vec![[0.0, 0.0], [0.0, 3.0], [4.0, 3.0]];
        // 3 + 4 + 5
        assert_eq!(tour_length(&points, &[0, 1, 2]), 12.0);
        assert_eq!(tour_length(&points, &[0]), 0.0);
        assert_eq!(tour_length(&points, &[]), 0.0);
    }
}
