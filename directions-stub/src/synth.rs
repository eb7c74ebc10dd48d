//! Synthesized route geometry for pairs the catalog has no canned
//! figures for: a gently wandering line between the endpoints, measured
//! with the haversine formula and timed at a fixed cruise speed.

use wayline_shared::Coordinate;

const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Roughly 76 km/h, a motorway-and-towns average.
pub const DRIVING_SPEED_MPS: f64 = 21.0;

pub fn generate_path(start: Coordinate, end: Coordinate) -> Vec<Coordinate> {
    const STEPS: usize = 32;
    let perp = perpendicular_unit(start, end);
    let mut path = Vec::with_capacity(STEPS + 1);

    for i in 0..=STEPS {
        let t = i as f64 / STEPS as f64;
        let mut point = start.interpolate(end, t);
        // Endpoints stay exact because sin(0) = 0 and the last wiggle is
        // suppressed below.
        let wiggle = if i == STEPS {
            0.0
        } else {
            ((i as f64) * 0.45).sin() * 0.002
        };
        point.lat += perp.lat * wiggle;
        point.lon += perp.lon * wiggle;
        path.push(point);
    }

    path
}

pub fn path_distance_m(path: &[Coordinate]) -> f64 {
    path.windows(2).map(|w| haversine_m(w[0], w[1])).sum()
}

pub fn duration_s(distance_m: f64) -> f64 {
    distance_m / DRIVING_SPEED_MPS
}

fn perpendicular_unit(start: Coordinate, end: Coordinate) -> Coordinate {
    let dx = end.lon - start.lon;
    let dy = end.lat - start.lat;
    let len = (dx * dx + dy * dy).sqrt().max(f64::EPSILON);
    Coordinate {
        lon: -dy / len,
        lat: dx / len,
    }
}

pub fn haversine_m(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let sin_dlat = (dlat / 2.0).sin();
    let sin_dlon = (dlon / 2.0).sin();

    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sofia() -> Coordinate {
        Coordinate {
            lat: 42.6977,
            lon: 23.3219,
        }
    }

    fn plovdiv() -> Coordinate {
        Coordinate {
            lat: 42.1354,
            lon: 24.7453,
        }
    }

    #[test]
    fn haversine_of_a_point_with_itself_is_zero() {
        assert_eq!(haversine_m(sofia(), sofia()), 0.0);
    }

    #[test]
    fn haversine_is_symmetric() {
        assert_eq!(
            haversine_m(sofia(), plovdiv()),
            haversine_m(plovdiv(), sofia())
        );
    }

    #[test]
    fn empty_and_single_point_paths_have_no_length() {
        assert_eq!(path_distance_m(&[]), 0.0);
        assert_eq!(path_distance_m(&[sofia()]), 0.0);
    }

    #[test]
    fn generated_path_keeps_its_endpoints_exact() {
        let path = generate_path(sofia(), plovdiv());
        assert_eq!(path.len(), 33);
        assert_eq!(path[0], sofia());
        assert_eq!(path[32], plovdiv());
    }

    #[test]
    fn sofia_to_plovdiv_synthesizes_a_plausible_distance() {
        let path = generate_path(sofia(), plovdiv());
        let distance = path_distance_m(&path);
        assert!(distance > 120_000.0, "too short: {distance}");
        assert!(distance < 200_000.0, "too long: {distance}");
    }

    #[test]
    fn duration_follows_the_fixed_speed() {
        assert_eq!(duration_s(21_000.0), 1_000.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn valid_coord() -> impl Strategy<Value = Coordinate> {
            (-85.0..=85.0, -180.0..=180.0).prop_map(|(lat, lon)| Coordinate { lat, lon })
        }

        proptest! {
            #[test]
            fn prop_haversine_non_negative(a in valid_coord(), b in valid_coord()) {
                prop_assert!(haversine_m(a, b) >= 0.0);
            }

            #[test]
            fn prop_haversine_symmetric(a in valid_coord(), b in valid_coord()) {
                let forward = haversine_m(a, b);
                let backward = haversine_m(b, a);
                prop_assert!((forward - backward).abs() < 1e-6);
            }

            #[test]
            fn prop_haversine_bounded_by_half_circumference(
                a in valid_coord(),
                b in valid_coord()
            ) {
                let max = std::f64::consts::PI * EARTH_RADIUS_M;
                prop_assert!(haversine_m(a, b) <= max + 1.0);
            }

            #[test]
            fn prop_path_is_at_least_as_long_as_the_straight_line(
                a in valid_coord(),
                b in valid_coord()
            ) {
                let path = generate_path(a, b);
                let along = path_distance_m(&path);
                let direct = haversine_m(a, b);
                prop_assert!(along + 1.0 >= direct);
            }

            #[test]
            fn prop_generated_paths_always_span_the_endpoints(
                a in valid_coord(),
                b in valid_coord()
            ) {
                let path = generate_path(a, b);
                prop_assert_eq!(path.len(), 33);
                prop_assert_eq!(path[0], a);
                prop_assert_eq!(path[32], b);
            }
        }
    }
}
