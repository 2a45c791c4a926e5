use crate::core::distance::distance_km;
use crate::error::CoreError;
use crate::models::{BloodBankRecord, Coordinate};

/// Single closest blood bank to the user, or `None` on empty input.
///
/// Absence is not an error: an empty registry yields `Ok(None)` so the
/// display layer can render its "no blood bank found nearby" state. Ties
/// keep the first record in input order. A record whose stored coordinate
/// fails validation is skipped with a warning rather than failing the whole
/// reduction; only a bad user location is fatal to the call.
pub fn nearest<'a>(
    records: &'a [BloodBankRecord],
    user_location: &Coordinate,
) -> Result<Option<&'a BloodBankRecord>, CoreError> {
    // Re-validate through the distance module so a malformed user location
    // surfaces as InvalidCoordinate instead of silently skipping everything.
    Coordinate::new(user_location.latitude, user_location.longitude)?;

    let mut best: Option<(&BloodBankRecord, f64)> = None;
    for record in records {
        let distance = match distance_km(user_location, &record.coordinate) {
            Ok(d) => d,
            Err(e) => {
                tracing::warn!("skipping blood bank {}: {}", record.id, e);
                continue;
            }
        };
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((record, distance)),
        }
    }

    Ok(best.map(|(record, _)| record))
}
