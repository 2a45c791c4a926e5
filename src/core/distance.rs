use crate::error::CoreError;
use crate::models::Coordinate;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers.
///
/// Implements the haversine formula. Both coordinates are re-checked for
/// finiteness and range; callers that hand in unnormalized input get
/// `InvalidCoordinate` rather than a garbage distance.
pub fn distance_km(a: &Coordinate, b: &Coordinate) -> Result<f64, CoreError> {
    validate(a)?;
    validate(b)?;
    Ok(haversine(a, b))
}

#[inline]
fn validate(c: &Coordinate) -> Result<(), CoreError> {
    if !c.latitude.is_finite()
        || !c.longitude.is_finite()
        || !(-90.0..=90.0).contains(&c.latitude)
        || !(-180.0..=180.0).contains(&c.longitude)
    {
        return Err(CoreError::InvalidCoordinate {
            lat: c.latitude,
            lon: c.longitude,
        });
    }
    Ok(())
}

#[inline]
fn haversine(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat1_rad = a.latitude.to_radians();
    let lat2_rad = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}
