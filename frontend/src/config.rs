use wayline_shared::Coordinate;

/// Fallback map center when geolocation is unavailable: Sofia.
pub const DEFAULT_CENTER: Coordinate = Coordinate {
    lat: 42.698334,
    lon: 23.319941,
};

pub const DEFAULT_ZOOM: u8 = 15;

/// The map provider's API key, baked in at build time. Without it the
/// provider loader never comes up and the view stays on its skeleton.
pub fn maps_api_key() -> Option<&'static str> {
    option_env!("WAYLINE_MAPS_API_KEY")
}

pub fn directions_endpoint() -> String {
    if let Some(url) = option_env!("WAYLINE_DIRECTIONS_URL") {
        return url.trim_end_matches('/').to_string();
    }
    "http://localhost:8080/api/directions".to_string()
}
