use crate::models::Facility;

/// Case-insensitive substring match against facility name and address.
///
/// An empty or whitespace-only term keeps everything.
#[inline]
pub fn matches_search_term(facility: &Facility, term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    facility.name.to_lowercase().contains(&needle)
        || facility.address.to_lowercase().contains(&needle)
}

/// Facility must offer at least one required service; an empty required set
/// keeps everything. Tags compare case-sensitively.
#[inline]
pub fn matches_required_services(facility: &Facility, required: &[String]) -> bool {
    required.is_empty()
        || required
            .iter()
            .any(|tag| facility.services.iter().any(|offered| offered == tag))
}

/// Radius-cap check. A facility with no computed distance never matches a
/// cap; with no cap configured, everything passes.
#[inline]
pub fn within_radius(distance_km: Option<f64>, cap_km: Option<f64>) -> bool {
    match cap_km {
        None => true,
        Some(cap) => distance_km.is_some_and(|d| d <= cap),
    }
}

/// Open-only check; unknown status counts as closed.
#[inline]
pub fn passes_open_filter(facility: &Facility, open_only: bool) -> bool {
    !open_only || facility.status.is_open()
}
