use crate::core::{
    distance::distance_km,
    filters::{matches_required_services, matches_search_term, passes_open_filter, within_radius},
};
use crate::error::CoreError;
use crate::models::{Coordinate, Facility, FilterCriteria, RankedResult, SortKey};
use crate::services::{CacheKey, ResultCache};
use std::cmp::Ordering;
use std::sync::Arc;

/// Proximity filter and ranker.
///
/// # Pipeline stages
/// 1. Per-facility distance from the user (when a location is available)
/// 2. Radius cap
/// 3. Free-text filter over name and address
/// 4. Required-service intersection
/// 5. Open-only filter
/// 6. Total, deterministic sort
///
/// Results are cached by a signature over (criteria, rounded user location,
/// facility-set version); identical queries return the cached ranking.
#[derive(Clone)]
pub struct Ranker {
    cache: Arc<ResultCache>,
}

impl Ranker {
    pub fn new(cache: Arc<ResultCache>) -> Self {
        Self { cache }
    }

    /// Rank a facility set against the user's location and criteria.
    ///
    /// `dataset_version` identifies the upstream fetch the facility set came
    /// from; bumping it makes every previously cached ranking unreachable.
    ///
    /// A missing user location degrades to "no distance available": every
    /// facility sorts as distance-less and a configured radius cap matches
    /// nothing. The returned list is owned by the caller and never mutated
    /// by the cache.
    pub fn rank(
        &self,
        facilities: &[Facility],
        user_location: Option<&Coordinate>,
        criteria: &FilterCriteria,
        dataset_version: u64,
    ) -> Result<Vec<RankedResult>, CoreError> {
        use validator::Validate;
        criteria
            .validate()
            .map_err(|e| CoreError::InvalidArgument(e.to_string()))?;

        let signature = CacheKey::results(criteria, user_location, dataset_version);
        if let Some(entry) = self.cache.get(&signature) {
            return Ok(entry.results.clone());
        }

        let mut results: Vec<RankedResult> = facilities
            .iter()
            // Stage 1: derive distance per facility; a stored coordinate the
            // calculator rejects skips that record, not the batch
            .filter_map(|facility| {
                let distance = match (user_location, facility.coordinate.as_ref()) {
                    (Some(user), Some(here)) => match distance_km(user, here) {
                        Ok(d) => Some(d),
                        Err(e) => {
                            tracing::warn!("skipping facility {}: {}", facility.id, e);
                            return None;
                        }
                    },
                    _ => None,
                };
                Some((facility, distance))
            })
            // Stages 2-5: documented filters
            .filter(|(_, distance)| within_radius(*distance, criteria.radius_cap_km))
            .filter(|(facility, _)| matches_search_term(facility, &criteria.search))
            .filter(|(facility, _)| matches_required_services(facility, &criteria.required_services))
            .filter(|(facility, _)| passes_open_filter(facility, criteria.open_only))
            .map(|(facility, distance)| RankedResult {
                facility: facility.clone(),
                distance_km: distance,
                position: 0,
            })
            .collect();

        // Stage 6: total order, ties broken down to the name so identical
        // inputs always rank identically.
        results.sort_by(|a, b| match criteria.sort_by {
            SortKey::Distance => cmp_distance(a, b)
                .then_with(|| cmp_rating(a, b))
                .then_with(|| a.facility.name.cmp(&b.facility.name)),
            SortKey::Rating => cmp_rating(a, b)
                .then_with(|| cmp_distance(a, b))
                .then_with(|| a.facility.name.cmp(&b.facility.name)),
        });

        for (index, result) in results.iter_mut().enumerate() {
            result.position = index + 1;
        }

        self.cache.put(&signature, results.clone(), dataset_version);
        Ok(results)
    }
}

/// Ascending distance; facilities without one sort last.
#[inline]
fn cmp_distance(a: &RankedResult, b: &RankedResult) -> Ordering {
    let da = a.distance_km.unwrap_or(f64::INFINITY);
    let db = b.distance_km.unwrap_or(f64::INFINITY);
    da.total_cmp(&db)
}

/// Descending rating; facilities without one sort last.
#[inline]
fn cmp_rating(a: &RankedResult, b: &RankedResult) -> Ordering {
    let ra = a.facility.rating.unwrap_or(f64::NEG_INFINITY);
    let rb = b.facility.rating.unwrap_or(f64::NEG_INFINITY);
    rb.total_cmp(&ra)
}
