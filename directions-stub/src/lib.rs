pub mod canned;
pub mod error;
pub mod format;
pub mod synth;

use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use tower_http::cors::{Any, CorsLayer};
use wayline_shared::{
    ApiError, Coordinate, DirectionsRequest, DirectionsResponse, LocationRef, RouteLeg, RoutePlan,
    ValueText,
};

use crate::canned::Catalog;
use crate::error::StubError;
use crate::format::{format_distance_text, format_duration_text};
use crate::synth::{duration_s, generate_path, path_distance_m};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/directions", post(directions_handler))
        .layer(cors)
        .with_state(state)
}

async fn directions_handler(
    State(state): State<AppState>,
    Json(req): Json<DirectionsRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<ApiError>)> {
    let origin = resolve(&state.catalog, &req.origin).map_err(not_found)?;
    let destination = resolve(&state.catalog, &req.destination).map_err(not_found)?;

    tracing::debug!(
        origin = %origin.address,
        destination = %destination.address,
        mode = ?req.mode,
        "building directions"
    );

    let leg = build_leg(&state.catalog, &origin, &destination);
    let response = DirectionsResponse {
        routes: vec![RoutePlan { legs: vec![leg] }],
    };
    Ok(Json(response))
}

#[derive(Debug, Clone)]
struct Endpoint {
    address: String,
    position: Coordinate,
}

/// Turns a request endpoint into an address and a position. Raw
/// positions pass through with a formatted pseudo-address; place names
/// must exist in the catalog.
fn resolve(catalog: &Catalog, location: &LocationRef) -> Result<Endpoint, StubError> {
    match location {
        LocationRef::Position(position) => Ok(Endpoint {
            address: format!("{:.5}, {:.5}", position.lat, position.lon),
            position: *position,
        }),
        LocationRef::Address(query) => {
            let place = catalog.resolve(query)?;
            Ok(Endpoint {
                address: place.address.clone(),
                position: place.position,
            })
        }
    }
}

/// One driving leg between two resolved endpoints. Canned pairs keep
/// their fixed figures; everything else is measured off the synthesized
/// path.
fn build_leg(catalog: &Catalog, origin: &Endpoint, destination: &Endpoint) -> RouteLeg {
    let path = generate_path(origin.position, destination.position);
    let (distance_m, duration_sec) =
        match catalog.canned_between(&origin.address, &destination.address) {
            Some(figures) => (figures.distance_m, figures.duration_s),
            None => {
                let distance = path_distance_m(&path);
                (distance, duration_s(distance))
            }
        };

    RouteLeg {
        distance: ValueText {
            value: distance_m,
            text: format_distance_text(distance_m),
        },
        duration: ValueText {
            value: duration_sec,
            text: format_duration_text(duration_sec),
        },
        start_address: origin.address.clone(),
        end_address: destination.address.clone(),
        path,
    }
}

fn not_found(err: StubError) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError {
            message: err.to_string(),
        }),
    )
}
