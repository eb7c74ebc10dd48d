use serde::{Deserialize, Serialize};
use uuid::Uuid;
use wayline_shared::Coordinate;

use crate::place::Place;

/// Stable handle for one dropped marker. Identity never depends on the
/// coordinate, so two clicks on the same spot stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkerId(Uuid);

impl MarkerId {
    fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub id: MarkerId,
    pub position: Coordinate,
    /// The place the click captured, when the active strategy produced one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<Place>,
}

/// Dropped markers in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarkerSet {
    markers: Vec<Marker>,
}

impl MarkerSet {
    pub fn add(&mut self, position: Coordinate, place: Option<Place>) -> MarkerId {
        let id = MarkerId::fresh();
        self.markers.push(Marker { id, position, place });
        id
    }

    pub fn remove(&mut self, id: MarkerId) -> Option<Marker> {
        let index = self.markers.iter().position(|marker| marker.id == id)?;
        Some(self.markers.remove(index))
    }

    pub fn get(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.iter().find(|marker| marker.id == id)
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
