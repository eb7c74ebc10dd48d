//! Map display options, built once and handed to the provider bridge.

use serde::Serialize;

/// Star outline drawn for the geolocated home marker.
const HOME_GLYPH_PATH: &str = "M8 12l-4.7023 2.4721.898-5.236L.3916 5.5279l5.2574-.764L8 0l2.3511 4.764 5.2574.7639-3.8043 3.7082.898 5.236z";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MapTypeId {
    Roadmap,
    Satellite,
    Hybrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ControlStyle {
    HorizontalBar,
    DropdownMenu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ControlPosition {
    TopCenter,
    TopLeft,
    TopRight,
    BottomCenter,
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapTypeControlOptions {
    pub style: ControlStyle,
    pub position: ControlPosition,
    pub map_type_ids: Vec<MapTypeId>,
}

/// One provider style rule, e.g. hiding a label layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRule {
    pub feature_type: &'static str,
    pub element_type: &'static str,
    pub stylers: Vec<Styler>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Styler {
    pub visibility: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions {
    pub street_view_control: bool,
    pub scale_control: bool,
    pub fullscreen_control: bool,
    pub styles: Vec<StyleRule>,
    pub gesture_handling: &'static str,
    pub disable_double_click_zoom: bool,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub map_type_control: bool,
    pub map_type_id: MapTypeId,
    pub map_type_control_options: MapTypeControlOptions,
    pub zoom_control: bool,
    pub clickable_icons: bool,
}

/// Glyph descriptor for the home marker, serialized for the bridge.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerGlyph {
    pub path: &'static str,
    pub fill_color: &'static str,
    pub fill_opacity: f64,
    pub scale: f64,
    pub stroke_color: &'static str,
    pub stroke_weight: u32,
}

pub fn home_marker_glyph() -> MarkerGlyph {
    MarkerGlyph {
        path: HOME_GLYPH_PATH,
        fill_color: "yellow",
        fill_opacity: 0.9,
        scale: 2.0,
        stroke_color: "gold",
        stroke_weight: 2,
    }
}

/// Fixed display options for the map. Input state never feeds into these,
/// so the bridge receives the same configuration on every load.
pub fn map_options() -> MapOptions {
    MapOptions {
        street_view_control: false,
        scale_control: true,
        fullscreen_control: false,
        styles: vec![StyleRule {
            feature_type: "poi.business",
            element_type: "labels",
            stylers: vec![Styler { visibility: "off" }],
        }],
        gesture_handling: "greedy",
        disable_double_click_zoom: true,
        min_zoom: 11,
        max_zoom: 18,
        map_type_control: true,
        map_type_id: MapTypeId::Satellite,
        map_type_control_options: MapTypeControlOptions {
            style: ControlStyle::HorizontalBar,
            position: ControlPosition::BottomCenter,
            map_type_ids: vec![MapTypeId::Roadmap, MapTypeId::Satellite, MapTypeId::Hybrid],
        },
        zoom_control: true,
        clickable_icons: false,
    }
}
