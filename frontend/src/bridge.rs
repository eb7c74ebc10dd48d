//! Thin seam to the provider glue in `map_bridge.js`. Everything the map
//! does for us goes out through these calls; everything it tells us comes
//! back as window `CustomEvent`s decoded here.

use serde::{Deserialize, Serialize};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::{JsCast, prelude::*};
use wayline_shared::{Coordinate, RouteBounds};

use crate::markers::{Marker, MarkerId};
use crate::options::{MapOptions, MarkerGlyph};

pub const EV_MAP_READY: &str = "map-ready";
pub const EV_MAP_CLICK: &str = "map-click";
pub const EV_PLACE_SELECTED: &str = "place-selected";
pub const EV_MARKER_CLICK: &str = "marker-click";
pub const EV_MARKER_REMOVE: &str = "marker-remove";
pub const EV_OVERLAY_CLOSED: &str = "overlay-closed";

#[wasm_bindgen(module = "/map_bridge.js")]
extern "C" {
    #[wasm_bindgen(js_name = initMap)]
    fn init_map_js(config: JsValue);
    #[wasm_bindgen(js_name = setMarkers)]
    fn set_markers_js(markers: JsValue);
    #[wasm_bindgen(js_name = setRouteOverlay)]
    fn set_route_overlay_js(path: JsValue);
    #[wasm_bindgen(js_name = clearRouteOverlay)]
    fn clear_route_overlay_js();
    #[wasm_bindgen(js_name = fitBounds)]
    fn fit_bounds_js(bounds: JsValue);
    #[wasm_bindgen(js_name = showInfoOverlay)]
    fn show_info_overlay_js(lat: f64, lon: f64, text: &str);
    #[wasm_bindgen(js_name = hideInfoOverlay)]
    fn hide_info_overlay_js();
    #[wasm_bindgen(js_name = panTo)]
    fn pan_to_js(lat: f64, lon: f64, zoom: u8);
    #[wasm_bindgen(js_name = setAutocompleteEnabled)]
    fn set_autocomplete_enabled_js(enabled: bool);
}

/// Everything the bridge needs to boot the provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitConfig<'a> {
    pub api_key: Option<&'a str>,
    pub container_id: &'a str,
    pub origin_input_id: &'a str,
    pub destination_input_id: &'a str,
    pub center: Coordinate,
    pub zoom: u8,
    pub options: MapOptions,
    pub home_glyph: MarkerGlyph,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointSlot {
    Origin,
    Destination,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MapClickPayload {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlaceSelectedPayload {
    pub slot: EndpointSlot,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MarkerEventPayload {
    pub id: MarkerId,
}

/// Pulls the typed detail out of a bridge `CustomEvent`.
pub fn decode_event<T>(event: web_sys::Event) -> Option<T>
where
    T: serde::de::DeserializeOwned,
{
    let event = event.dyn_into::<web_sys::CustomEvent>().ok()?;
    from_value(event.detail()).ok()
}

pub fn init_map(config: &InitConfig) {
    match to_value(config) {
        Ok(value) => init_map_js(value),
        Err(err) => log::error!("map init config did not serialize: {err}"),
    }
}

pub fn set_markers(markers: &[Marker]) {
    match to_value(markers) {
        Ok(value) => set_markers_js(value),
        Err(err) => log::error!("marker list did not serialize: {err}"),
    }
}

pub fn set_route_overlay(path: &[Coordinate]) {
    match to_value(path) {
        Ok(value) => set_route_overlay_js(value),
        Err(err) => log::error!("route path did not serialize: {err}"),
    }
}

pub fn clear_route_overlay() {
    clear_route_overlay_js();
}

pub fn fit_bounds(bounds: &RouteBounds) {
    match to_value(bounds) {
        Ok(value) => fit_bounds_js(value),
        Err(err) => log::error!("route bounds did not serialize: {err}"),
    }
}

pub fn show_info_overlay(position: Coordinate, text: &str) {
    show_info_overlay_js(position.lat, position.lon, text);
}

pub fn hide_info_overlay() {
    hide_info_overlay_js();
}

pub fn pan_to(center: Coordinate, zoom: u8) {
    pan_to_js(center.lat, center.lon, zoom);
}

pub fn set_autocomplete_enabled(enabled: bool) {
    set_autocomplete_enabled_js(enabled);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn map_click_payload_decodes_from_bridge_json() {
        let payload: MapClickPayload =
            serde_json::from_value(json!({ "lat": 42.1354, "lon": 24.7453 })).unwrap();
        assert_eq!(payload.lat, 42.1354);
        assert_eq!(payload.lon, 24.7453);
    }

    #[test]
    fn place_selected_payload_names_its_slot() {
        let payload: PlaceSelectedPayload = serde_json::from_value(json!({
            "slot": "destination",
            "name": "Plovdiv, Bulgaria",
            "lat": 42.1354,
            "lon": 24.7453
        }))
        .unwrap();
        assert_eq!(payload.slot, EndpointSlot::Destination);
        assert_eq!(payload.name, "Plovdiv, Bulgaria");
    }

    #[test]
    fn marker_event_payload_round_trips_a_marker_id() {
        let mut markers = crate::markers::MarkerSet::default();
        let id = markers.add(Coordinate { lat: 1.0, lon: 2.0 }, None);

        let wire = serde_json::to_value(&markers.markers()[0]).unwrap();
        let payload: MarkerEventPayload =
            serde_json::from_value(json!({ "id": wire["id"] })).unwrap();
        assert_eq!(payload.id, id);
    }
}
