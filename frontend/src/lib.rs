use seed::{prelude::*, virtual_dom::AtValue, *};
use wasm_bindgen::prelude::wasm_bindgen;
use wayline_shared::{Coordinate, DirectionsResponse, RouteBounds, RoutePlan};

mod bridge;
mod config;
mod directions;
mod geolocate;
mod markers;
mod options;
mod place;

use bridge::{EndpointSlot, MapClickPayload, MarkerEventPayload, PlaceSelectedPayload};
use directions::DirectionsError;
use geolocate::GeolocateError;
use markers::{MarkerId, MarkerSet};
use place::{CaptureStrategy, Place, PlaceField};

const MAP_CONTAINER_ID: &str = "map";
const ORIGIN_INPUT_ID: &str = "origin-input";
const DESTINATION_INPUT_ID: &str = "destination-input";

#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    map_ready: bool,
    center: Coordinate,
    zoom: u8,
    strategy: CaptureStrategy,
    origin: PlaceField,
    destination: PlaceField,
    pending: bool,
    route: Option<RoutePlan>,
    distance: String,
    duration: String,
    route_error: Option<String>,
    markers: MarkerSet,
    selected_marker: Option<MarkerId>,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            map_ready: false,
            center: config::DEFAULT_CENTER,
            zoom: config::DEFAULT_ZOOM,
            strategy: CaptureStrategy::default(),
            origin: PlaceField::default(),
            destination: PlaceField::default(),
            pending: false,
            route: None,
            distance: String::new(),
            duration: String::new(),
            route_error: None,
            markers: MarkerSet::default(),
            selected_marker: None,
        }
    }
}

pub enum Msg {
    MapReady,
    ControlsRendered,
    Geolocated(Result<Coordinate, GeolocateError>),
    StrategyChanged(CaptureStrategy),
    OriginChanged(String),
    DestinationChanged(String),
    PlaceSelected(Option<PlaceSelectedPayload>),
    MapClicked(Option<MapClickPayload>),
    MarkerClicked(Option<MarkerEventPayload>),
    MarkerRemoveRequested(Option<MarkerEventPayload>),
    InfoOverlayClosed,
    CalculateRoute,
    RouteFetched(Result<DirectionsResponse, DirectionsError>),
    ClearRoute,
    Recenter,
}

pub fn init(_: Url, orders: &mut impl Orders<Msg>) -> Model {
    orders.stream(streams::window_event(Ev::from(bridge::EV_MAP_READY), |_| {
        Msg::MapReady
    }));
    orders.stream(streams::window_event(
        Ev::from(bridge::EV_MAP_CLICK),
        |event| Msg::MapClicked(bridge::decode_event(event)),
    ));
    orders.stream(streams::window_event(
        Ev::from(bridge::EV_PLACE_SELECTED),
        |event| Msg::PlaceSelected(bridge::decode_event(event)),
    ));
    orders.stream(streams::window_event(
        Ev::from(bridge::EV_MARKER_CLICK),
        |event| Msg::MarkerClicked(bridge::decode_event(event)),
    ));
    orders.stream(streams::window_event(
        Ev::from(bridge::EV_MARKER_REMOVE),
        |event| Msg::MarkerRemoveRequested(bridge::decode_event(event)),
    ));
    orders.stream(streams::window_event(
        Ev::from(bridge::EV_OVERLAY_CLOSED),
        |_| Msg::InfoOverlayClosed,
    ));

    orders.perform_cmd(async { Msg::Geolocated(geolocate::current_position().await) });

    Model::default()
}

pub fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::MapReady => {
            model.map_ready = true;
            bridge::pan_to(model.center, model.zoom);
            // The inputs only exist once the controls replace the skeleton.
            orders.after_next_render(|_| Msg::ControlsRendered);
        }
        Msg::ControlsRendered => {
            bridge::set_autocomplete_enabled(model.strategy == CaptureStrategy::Autocomplete);
        }
        Msg::Geolocated(Ok(position)) => {
            model.center = position;
            if model.map_ready {
                bridge::pan_to(model.center, model.zoom);
            }
        }
        Msg::Geolocated(Err(err)) => {
            log::debug!("geolocation unavailable, keeping the default center: {err}");
        }
        Msg::StrategyChanged(strategy) => {
            if apply_strategy(model, strategy) {
                bridge::clear_route_overlay();
                if model.map_ready {
                    bridge::set_autocomplete_enabled(strategy == CaptureStrategy::Autocomplete);
                }
            }
        }
        Msg::OriginChanged(text) => {
            model.origin.set_text(text);
            if clear_stale_route(model) {
                bridge::clear_route_overlay();
            }
        }
        Msg::DestinationChanged(text) => {
            model.destination.set_text(text);
            if clear_stale_route(model) {
                bridge::clear_route_overlay();
            }
        }
        Msg::PlaceSelected(Some(pick)) => {
            if model.strategy == CaptureStrategy::Autocomplete {
                apply_place_selection(model, pick);
            }
        }
        Msg::MapClicked(Some(click)) => {
            capture_map_click(
                model,
                Coordinate {
                    lat: click.lat,
                    lon: click.lon,
                },
            );
            bridge::set_markers(model.markers.markers());
        }
        Msg::MarkerClicked(Some(marker)) => {
            if let Some((position, text)) = select_marker(model, marker.id) {
                bridge::show_info_overlay(position, &text);
            }
        }
        Msg::MarkerRemoveRequested(Some(marker)) => {
            if let Some(was_selected) = remove_marker(model, marker.id) {
                bridge::set_markers(model.markers.markers());
                if was_selected {
                    bridge::hide_info_overlay();
                }
            }
        }
        Msg::PlaceSelected(None) | Msg::MapClicked(None) => {
            log::warn!("discarding a malformed map event");
        }
        Msg::MarkerClicked(None) | Msg::MarkerRemoveRequested(None) => {
            log::warn!("discarding a marker event without a valid id");
        }
        Msg::InfoOverlayClosed => {
            model.selected_marker = None;
        }
        Msg::CalculateRoute => {
            if let Some(payload) = try_begin_calculate(model) {
                orders.perform_cmd(async move {
                    Msg::RouteFetched(directions::fetch_directions(payload).await)
                });
            }
        }
        Msg::RouteFetched(result) => {
            apply_route_result(model, directions::select_route(result));
            // The inputs may have been cleared while the request was out.
            clear_stale_route(model);
            match &model.route {
                Some(plan) => {
                    let path = plan.path();
                    bridge::set_route_overlay(&path);
                    if let Some(bounds) = RouteBounds::enclosing(&path) {
                        bridge::fit_bounds(&bounds);
                    }
                }
                None => bridge::clear_route_overlay(),
            }
        }
        Msg::ClearRoute => {
            clear_route(model);
            bridge::clear_route_overlay();
        }
        Msg::Recenter => {
            bridge::pan_to(model.center, model.zoom);
        }
    }
}

/// Switches the capture strategy, resetting both endpoints since each
/// strategy captures its own. Returns false when nothing changed.
fn apply_strategy(model: &mut Model, strategy: CaptureStrategy) -> bool {
    if model.strategy == strategy {
        return false;
    }
    model.strategy = strategy;
    clear_route(model);
    true
}

/// Guards a route request: nothing leaves while one is in flight or
/// while either endpoint is empty.
fn try_begin_calculate(model: &mut Model) -> Option<wayline_shared::DirectionsRequest> {
    if model.pending {
        return None;
    }
    let payload = directions::request_from(model.strategy, &model.origin, &model.destination)?;
    model.pending = true;
    model.route_error = None;
    Some(payload)
}

fn apply_route_result(model: &mut Model, result: Result<RoutePlan, DirectionsError>) {
    model.pending = false;
    match result {
        Ok(plan) => {
            if let Some(leg) = plan.first_leg() {
                model.distance = leg.distance.text.clone();
                model.duration = leg.duration.text.clone();
            }
            model.route = Some(plan);
            model.route_error = None;
        }
        Err(err) => {
            drop_route(model);
            model.route_error = Some(err.to_string());
        }
    }
}

/// Drops the displayed route and its summary texts, nothing else.
fn drop_route(model: &mut Model) {
    model.route = None;
    model.distance.clear();
    model.duration.clear();
    model.route_error = None;
}

/// The clear action wipes the whole routing slate: route, summary texts,
/// any error, and both endpoint fields. Markers stay.
fn clear_route(model: &mut Model) {
    drop_route(model);
    model.origin.clear();
    model.destination.clear();
}

/// A displayed route must never outlive the inputs that produced it.
/// Returns true when a stale route was dropped.
fn clear_stale_route(model: &mut Model) -> bool {
    if model.route.is_some()
        && directions::request_from(model.strategy, &model.origin, &model.destination).is_none()
    {
        drop_route(model);
        return true;
    }
    false
}

/// Every click drops a marker. In map-click mode the click also fills
/// the endpoints: destination from the click, origin from the center.
fn capture_map_click(model: &mut Model, position: Coordinate) -> MarkerId {
    let captured = if model.strategy == CaptureStrategy::MapClick {
        Some(Place {
            name: format_position(position),
            position,
        })
    } else {
        None
    };
    let id = model.markers.add(position, captured.clone());
    if let Some(destination) = captured {
        model.origin.set_place(Place {
            name: format_position(model.center),
            position: model.center,
        });
        model.destination.set_place(destination);
    }
    id
}

fn apply_place_selection(model: &mut Model, pick: PlaceSelectedPayload) {
    let place = Place {
        name: pick.name,
        position: Coordinate {
            lat: pick.lat,
            lon: pick.lon,
        },
    };
    match pick.slot {
        EndpointSlot::Origin => model.origin.set_place(place),
        EndpointSlot::Destination => model.destination.set_place(place),
    }
}

/// Marks the marker as selected and renders its overlay text, or `None`
/// for ids that no longer exist. The captured place names the overlay
/// when there is one, the raw position otherwise.
fn select_marker(model: &mut Model, id: MarkerId) -> Option<(Coordinate, String)> {
    let marker = model.markers.get(id)?;
    let position = marker.position;
    let label = marker
        .place
        .as_ref()
        .map(|place| place.name.clone())
        .unwrap_or_else(|| format_position(position));
    model.selected_marker = Some(id);
    Some((position, format!("Position: {label}")))
}

/// Removes the marker; `Some(true)` means the overlay was attached to it.
fn remove_marker(model: &mut Model, id: MarkerId) -> Option<bool> {
    model.markers.remove(id)?;
    let was_selected = model.selected_marker == Some(id);
    if was_selected {
        model.selected_marker = None;
    }
    Some(was_selected)
}

pub fn view(model: &Model) -> Node<Msg> {
    if !model.map_ready {
        return view_skeleton();
    }

    form![
        C!["controls"],
        view_strategy_picker(model),
        view_endpoints(model),
        view_actions(model),
        view_route_summary(model),
        if let Some(error) = &model.route_error {
            p![C!["error"], error]
        } else {
            empty![]
        }
    ]
}

fn view_skeleton() -> Node<Msg> {
    div![
        C!["controls", "controls-skeleton"],
        div![C!["skeleton-line"]],
        div![C!["skeleton-line"]],
        div![C!["skeleton-line"]],
    ]
}

fn view_strategy_picker(model: &Model) -> Node<Msg> {
    let current = model.strategy;
    let option = |strategy: CaptureStrategy| {
        label![
            input![
                attrs! {
                    At::Type => "radio",
                    At::Name => "capture-strategy",
                    At::Checked => bool_attr(strategy == current),
                },
                ev(Ev::Change, move |_| Msg::StrategyChanged(strategy)),
            ],
            span![strategy.label()],
        ]
    };

    fieldset![
        legend!["Input mode"],
        div![
            C!["capture-strategy"],
            option(CaptureStrategy::Autocomplete),
            option(CaptureStrategy::FreeText),
            option(CaptureStrategy::MapClick),
        ],
        small![strategy_hint(model.strategy)],
    ]
}

fn strategy_hint(strategy: CaptureStrategy) -> &'static str {
    match strategy {
        CaptureStrategy::Autocomplete => "Pick a suggestion for each field.",
        CaptureStrategy::FreeText => "Names are sent to the directions service as typed.",
        CaptureStrategy::MapClick => {
            "Click the map to set the destination; the origin follows the map center."
        }
    }
}

fn view_endpoints(model: &Model) -> Node<Msg> {
    let display_only = model.strategy == CaptureStrategy::MapClick;
    let input_field = |id: &str, label_text: &str, value: &str, msg: fn(String) -> Msg| {
        div![
            C!["input-field"],
            label![attrs! { At::For => id }, label_text],
            input![
                attrs! {
                    At::Id => id,
                    At::Value => value,
                    At::Placeholder => label_text,
                    At::AutoComplete => "off",
                    At::SpellCheck => "false",
                    At::Disabled => bool_attr(display_only),
                },
                input_ev(Ev::Input, msg),
            ]
        ]
    };

    fieldset![
        legend!["Route"],
        input_field(
            ORIGIN_INPUT_ID,
            "Origin",
            model.origin.text(),
            Msg::OriginChanged
        ),
        input_field(
            DESTINATION_INPUT_ID,
            "Destination",
            model.destination.text(),
            Msg::DestinationChanged
        ),
    ]
}

fn view_actions(model: &Model) -> Node<Msg> {
    div![
        C!["actions"],
        button![
            "Calculate route",
            ev(Ev::Click, |event| {
                event.prevent_default();
                Msg::CalculateRoute
            }),
            attrs! { At::Disabled => bool_attr(model.pending) },
        ],
        button![
            "Clear",
            C!["clear-btn"],
            ev(Ev::Click, |event| {
                event.prevent_default();
                Msg::ClearRoute
            }),
        ],
        button![
            "Recenter",
            C!["recenter-btn"],
            ev(Ev::Click, |event| {
                event.prevent_default();
                Msg::Recenter
            }),
        ],
    ]
}

fn view_route_summary(model: &Model) -> Node<Msg> {
    div![
        C!["route-summary"],
        p![format!("Distance: {}", model.distance)],
        p![format!("Duration: {}", model.duration)],
    ]
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let api_key = config::maps_api_key();
    if api_key.is_none() {
        log::warn!("no maps API key configured; the map will stay on its skeleton");
    }

    bridge::init_map(&bridge::InitConfig {
        api_key,
        container_id: MAP_CONTAINER_ID,
        origin_input_id: ORIGIN_INPUT_ID,
        destination_input_id: DESTINATION_INPUT_ID,
        center: config::DEFAULT_CENTER,
        zoom: config::DEFAULT_ZOOM,
        options: options::map_options(),
        home_glyph: options::home_marker_glyph(),
    });

    App::start("app", init, update, view);
}

fn bool_attr(value: bool) -> AtValue {
    if value {
        AtValue::Some("true".into())
    } else {
        AtValue::Ignored
    }
}

fn format_position(position: Coordinate) -> String {
    format!("{:.5}, {:.5}", position.lat, position.lon)
}
