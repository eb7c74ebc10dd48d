use seed::prelude::*;
use thiserror::Error;
use wayline_shared::{DirectionsRequest, DirectionsResponse, RoutePlan, TravelMode};

use crate::config;
use crate::place::{CaptureStrategy, PlaceField};

#[derive(Debug, Error)]
pub enum DirectionsError {
    #[error("directions request could not be sent: {0}")]
    Request(String),
    #[error("directions service answered with an error status: {0}")]
    Status(String),
    #[error("directions response could not be decoded: {0}")]
    Decode(String),
    #[error("no route found between the given points")]
    NoRoute,
}

/// Builds the request for the current inputs, or `None` when either
/// endpoint is empty under the active strategy. Routing is driving-only.
pub fn request_from(
    strategy: CaptureStrategy,
    origin: &PlaceField,
    destination: &PlaceField,
) -> Option<DirectionsRequest> {
    let origin = origin.location_ref(strategy)?;
    let destination = destination.location_ref(strategy)?;
    Some(DirectionsRequest {
        origin,
        destination,
        mode: TravelMode::Driving,
    })
}

pub async fn fetch_directions(
    payload: DirectionsRequest,
) -> Result<DirectionsResponse, DirectionsError> {
    log::debug!(
        "sending directions request {} -> {}",
        payload.origin,
        payload.destination
    );
    let request = Request::new(config::directions_endpoint())
        .method(Method::Post)
        .json(&payload)
        .map_err(|err| DirectionsError::Request(format!("{err:?}")))?;
    let raw = request
        .fetch()
        .await
        .map_err(|err| DirectionsError::Request(format!("{err:?}")))?;
    let response = raw
        .check_status()
        .map_err(|status_err| DirectionsError::Status(format!("{status_err:?}")))?;
    response
        .json::<DirectionsResponse>()
        .await
        .map_err(|err| DirectionsError::Decode(format!("{err:?}")))
}

/// First returned route, the only one this client displays. A route
/// without legs counts as no route at all.
pub fn select_route(
    result: Result<DirectionsResponse, DirectionsError>,
) -> Result<RoutePlan, DirectionsError> {
    let mut response = result?;
    if response.routes.is_empty() {
        return Err(DirectionsError::NoRoute);
    }
    let plan = response.routes.remove(0);
    if plan.legs.is_empty() {
        return Err(DirectionsError::NoRoute);
    }
    Ok(plan)
}
