use js_sys::{Promise, Reflect};
use thiserror::Error;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use wayline_shared::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeolocateError {
    #[error("geolocation is not available in this browser")]
    Unavailable,
    #[error("position lookup was denied or timed out")]
    Denied,
    #[error("geolocation returned a malformed position")]
    Malformed,
}

/// One best-effort query for the device position. Callers fall back to
/// the default center on any failure, so errors carry no detail beyond
/// their kind.
pub async fn current_position() -> Result<Coordinate, GeolocateError> {
    let geolocation = web_sys::window()
        .and_then(|window| window.navigator().geolocation().ok())
        .ok_or(GeolocateError::Unavailable)?;

    let lookup = Promise::new(&mut |resolve, reject| {
        if geolocation
            .get_current_position_with_error_callback(&resolve, Some(&reject))
            .is_err()
        {
            // Without this the promise would never settle.
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("geolocation refused"));
        }
    });

    let position = JsFuture::from(lookup)
        .await
        .map_err(|_| GeolocateError::Denied)?;
    let coords = Reflect::get(&position, &JsValue::from_str("coords"))
        .map_err(|_| GeolocateError::Malformed)?;

    Ok(Coordinate {
        lat: read_f64(&coords, "latitude")?,
        lon: read_f64(&coords, "longitude")?,
    })
}

fn read_f64(target: &JsValue, key: &str) -> Result<f64, GeolocateError> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .and_then(|value| value.as_f64())
        .ok_or(GeolocateError::Malformed)
}
