use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Linear blend between two coordinates, exact at `t = 0` and `t = 1`.
    pub fn interpolate(self, other: Self, t: f64) -> Self {
        Self {
            lat: self.lat * (1.0 - t) + other.lat * t,
            lon: self.lon * (1.0 - t) + other.lon * t,
        }
    }
}

/// An endpoint the directions service accepts: an exact position, or a
/// free-form address/place string it resolves itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocationRef {
    Position(Coordinate),
    Address(String),
}

impl fmt::Display for LocationRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationRef::Position(position) => {
                write!(f, "({:.5}, {:.5})", position.lat, position.lon)
            }
            LocationRef::Address(address) => f.write_str(address),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
    Bicycling,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionsRequest {
    pub origin: LocationRef,
    pub destination: LocationRef,
    #[serde(default)]
    pub mode: TravelMode,
}

/// A magnitude plus the human-readable string the provider rendered for it.
/// Distances are meters, durations seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueText {
    pub value: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    pub distance: ValueText,
    pub duration: ValueText,
    pub start_address: String,
    pub end_address: String,
    pub path: Vec<Coordinate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    pub legs: Vec<RouteLeg>,
}

impl RoutePlan {
    pub fn first_leg(&self) -> Option<&RouteLeg> {
        self.legs.first()
    }

    /// Concatenated leg paths, deduplicating the shared point at each seam.
    pub fn path(&self) -> Vec<Coordinate> {
        let mut points: Vec<Coordinate> = Vec::new();
        for leg in &self.legs {
            for &point in &leg.path {
                if points.last() != Some(&point) {
                    points.push(point);
                }
            }
        }
        points
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionsResponse {
    pub routes: Vec<RoutePlan>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl RouteBounds {
    pub fn enclosing(path: &[Coordinate]) -> Option<Self> {
        let first = path.first()?;
        let mut bounds = Self {
            min_lat: first.lat,
            max_lat: first.lat,
            min_lon: first.lon,
            max_lon: first.lon,
        };
        for point in &path[1..] {
            bounds.min_lat = bounds.min_lat.min(point.lat);
            bounds.max_lat = bounds.max_lat.max(point.lat);
            bounds.min_lon = bounds.min_lon.min(point.lon);
            bounds.max_lon = bounds.max_lon.max(point.lon);
        }
        Some(bounds)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolation_is_exact_at_the_endpoints() {
        let a = Coordinate {
            lat: 42.6977,
            lon: 23.3219,
        };
        let b = Coordinate {
            lat: 42.1354,
            lon: 24.7453,
        };
        assert_eq!(a.interpolate(b, 0.0), a);
        assert_eq!(a.interpolate(b, 1.0), b);

        let mid = a.interpolate(b, 0.5);
        assert!(mid.lat < a.lat && mid.lat > b.lat);
        assert!(mid.lon > a.lon && mid.lon < b.lon);
    }

    #[test]
    fn location_ref_address_is_a_bare_string_on_the_wire() {
        let json = serde_json::to_string(&LocationRef::Address("Sofia".into())).unwrap();
        assert_eq!(json, "\"Sofia\"");

        let back: LocationRef = serde_json::from_str("\"Plovdiv\"").unwrap();
        assert_eq!(back, LocationRef::Address("Plovdiv".into()));
    }

    #[test]
    fn location_ref_position_is_an_object_on_the_wire() {
        let position = LocationRef::Position(Coordinate {
            lat: 42.698334,
            lon: 23.319941,
        });
        let json = serde_json::to_value(&position).unwrap();
        assert_eq!(json["lat"], 42.698334);

        let back: LocationRef = serde_json::from_value(json).unwrap();
        assert_eq!(back, position);
    }

    #[test]
    fn travel_mode_defaults_to_driving() {
        let req: DirectionsRequest = serde_json::from_str(
            r#"{"origin": "Sofia", "destination": {"lat": 42.1354, "lon": 24.7453}}"#,
        )
        .unwrap();
        assert_eq!(req.mode, TravelMode::Driving);
        assert_eq!(
            serde_json::to_value(TravelMode::Driving).unwrap(),
            serde_json::json!("driving")
        );
    }

    #[test]
    fn plan_path_joins_legs_without_repeating_the_seam() {
        let a = Coordinate { lat: 42.0, lon: 23.0 };
        let b = Coordinate { lat: 42.1, lon: 23.2 };
        let c = Coordinate { lat: 42.2, lon: 23.4 };
        let leg = |path: Vec<Coordinate>| RouteLeg {
            distance: ValueText {
                value: 0.0,
                text: String::new(),
            },
            duration: ValueText {
                value: 0.0,
                text: String::new(),
            },
            start_address: String::new(),
            end_address: String::new(),
            path,
        };
        let plan = RoutePlan {
            legs: vec![leg(vec![a, b]), leg(vec![b, c])],
        };
        assert_eq!(plan.path(), vec![a, b, c]);
    }

    #[test]
    fn enclosing_bounds_cover_every_point() {
        let path = [
            Coordinate { lat: 42.7, lon: 23.3 },
            Coordinate { lat: 42.1, lon: 24.7 },
            Coordinate { lat: 42.5, lon: 23.9 },
        ];
        let bounds = RouteBounds::enclosing(&path).unwrap();
        assert_eq!(bounds.min_lat, 42.1);
        assert_eq!(bounds.max_lat, 42.7);
        assert_eq!(bounds.min_lon, 23.3);
        assert_eq!(bounds.max_lon, 24.7);

        assert!(RouteBounds::enclosing(&[]).is_none());
    }
}
