use serde::Serialize;
use wayline_shared::{Coordinate, LocationRef};

/// A geocoded location with the name it was presented under.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    pub name: String,
    pub position: Coordinate,
}

/// How origin and destination get filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureStrategy {
    /// Provider suggestions attached to the text inputs.
    #[default]
    Autocomplete,
    /// Whatever the user types is sent as an address.
    FreeText,
    /// Clicking the map sets the destination, the map center is the origin.
    MapClick,
}

impl CaptureStrategy {
    pub fn label(self) -> &'static str {
        match self {
            CaptureStrategy::Autocomplete => "Suggestions",
            CaptureStrategy::FreeText => "Free text",
            CaptureStrategy::MapClick => "Map click",
        }
    }
}

/// One endpoint input: the literal text in the box, plus the place a
/// selection resolved it to when the active strategy produces one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaceField {
    text: String,
    place: Option<Place>,
}

impl PlaceField {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Typing replaces the text and invalidates any earlier selection;
    /// the text box is the source of truth for what the field holds.
    pub fn set_text(&mut self, text: String) {
        self.text = text;
        self.place = None;
    }

    pub fn set_place(&mut self, place: Place) {
        self.text = place.name.clone();
        self.place = Some(place);
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.place = None;
    }

    /// The endpoint this field contributes to a directions request, or
    /// `None` when the field is empty under the given strategy.
    pub fn location_ref(&self, strategy: CaptureStrategy) -> Option<LocationRef> {
        match strategy {
            CaptureStrategy::FreeText => {
                let address = self.text.trim();
                if address.is_empty() {
                    None
                } else {
                    Some(LocationRef::Address(address.to_string()))
                }
            }
            CaptureStrategy::Autocomplete | CaptureStrategy::MapClick => self
                .place
                .as_ref()
                .map(|place| LocationRef::Position(place.position)),
        }
    }
}
