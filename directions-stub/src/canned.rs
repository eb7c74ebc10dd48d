//! The embedded place catalog: the handful of cities the stub can
//! geocode, plus fixed distance/duration figures for well-known pairs.

use serde::Deserialize;
use wayline_shared::Coordinate;

use crate::error::StubError;

const PLACES_JSON: &str = include_str!("../data/places.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlaceRecord {
    /// Accepted spellings, matched case-insensitively.
    pub names: Vec<String>,
    /// The canonical address echoed back in responses.
    pub address: String,
    pub position: Coordinate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CannedLeg {
    pub from: String,
    pub to: String,
    pub distance_m: f64,
    pub duration_s: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    places: Vec<PlaceRecord>,
    canned_legs: Vec<CannedLeg>,
}

impl Catalog {
    pub fn embedded() -> Result<Self, serde_json::Error> {
        serde_json::from_str(PLACES_JSON)
    }

    pub fn place_count(&self) -> usize {
        self.places.len()
    }

    pub fn resolve(&self, query: &str) -> Result<&PlaceRecord, StubError> {
        let needle = query.trim();
        self.places
            .iter()
            .find(|place| {
                place
                    .names
                    .iter()
                    .any(|name| name.eq_ignore_ascii_case(needle))
            })
            .ok_or_else(|| StubError::UnknownPlace(query.to_string()))
    }

    /// Canned figures for a pair of canonical addresses, direction-agnostic.
    pub fn canned_between(&self, a: &str, b: &str) -> Option<&CannedLeg> {
        self.canned_legs
            .iter()
            .find(|leg| (leg.from == a && leg.to == b) || (leg.from == b && leg.to == a))
    }
}
