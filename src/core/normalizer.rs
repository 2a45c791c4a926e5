use crate::error::CoreError;
use crate::models::{
    BloodBankRecord, Coordinate, Facility, FacilityStatus, RawBloodBankRow, RawFacilityRecord,
};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Name used when the upstream record carries no display name.
pub const UNNAMED_FACILITY: &str = "Unnamed Facility";

/// Default name-validity pattern: letters and whitespace only.
///
/// This mirrors the upstream feed's data-quality filter, which drops records
/// whose names carry embedded numerals, punctuation artifacts, or non-Latin
/// tagging noise. It is deliberately strict and rejects legitimate names like
/// "St. Mary's Hospital - Wing 2", which is why it is injectable.
pub const DEFAULT_NAME_PATTERN: &str = r"^[A-Za-z\s]+$";

/// Injectable name-validity predicate.
pub type NamePredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Maps heterogeneous upstream records into uniform domain records.
///
/// Normalization never errors on individual bad records: a record that fails
/// the rules is skipped with a diagnostic and the rest of the batch proceeds.
#[derive(Clone)]
pub struct Normalizer {
    name_check: NamePredicate,
}

impl Normalizer {
    /// Normalizer with the default letters-and-whitespace name check.
    pub fn new() -> Self {
        let pattern = Regex::new(DEFAULT_NAME_PATTERN).expect("default pattern is valid");
        Self {
            name_check: Arc::new(move |name| pattern.is_match(name)),
        }
    }

    /// Normalizer with a caller-supplied name pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self, CoreError> {
        let regex = Regex::new(pattern)
            .map_err(|e| CoreError::InvalidArgument(format!("bad name pattern: {}", e)))?;
        Ok(Self {
            name_check: Arc::new(move |name| regex.is_match(name)),
        })
    }

    /// Normalizer with an arbitrary name predicate.
    pub fn with_predicate<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            name_check: Arc::new(predicate),
        }
    }

    /// Normalizer that accepts every name.
    pub fn permissive() -> Self {
        Self::with_predicate(|_| true)
    }

    /// Normalize one points-of-interest record.
    ///
    /// Returns `None` when the record is skipped: name fails the validity
    /// check, or its coordinate is present but out of range. A record with no
    /// coordinate at all is retained for text-only listing.
    pub fn normalize(&self, raw: RawFacilityRecord) -> Option<Facility> {
        let name = match raw.name.as_deref().map(str::trim) {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => UNNAMED_FACILITY.to_string(),
        };

        if !(self.name_check)(&name) {
            tracing::debug!("skipping record {}: name {:?} failed validity check", raw.id, name);
            return None;
        }

        let coordinate = match (raw.latitude, raw.longitude) {
            (Some(lat), Some(lon)) => match Coordinate::new(lat, lon) {
                Ok(c) => Some(c),
                Err(e) => {
                    tracing::warn!("skipping record {}: {}", raw.id, e);
                    return None;
                }
            },
            (None, None) => None,
            _ => {
                // One-sided coordinates are unusable; keep the record for
                // text-only listing like a coordinate-less one.
                tracing::debug!("record {}: dropping partial coordinate", raw.id);
                None
            }
        };

        let status = match raw.is_open {
            Some(true) => FacilityStatus::Open,
            Some(false) => FacilityStatus::Closed,
            None => FacilityStatus::Unknown,
        };

        // Deduplicate service tags, preserving first-seen order.
        let mut services: Vec<String> = Vec::with_capacity(raw.services.len());
        for tag in raw.services {
            let tag = tag.trim().to_string();
            if !tag.is_empty() && !services.contains(&tag) {
                services.push(tag);
            }
        }

        Some(Facility {
            id: raw.id,
            name,
            address: raw.address.unwrap_or_default(),
            phone_number: raw.phone_number,
            coordinate,
            status,
            services,
            // Missing ratings stay missing; the core never fabricates them.
            rating: raw.rating,
        })
    }

    /// Normalize a whole fetch, skipping rejected records.
    pub fn normalize_all(&self, raws: Vec<RawFacilityRecord>) -> Vec<Facility> {
        let total = raws.len();
        let facilities: Vec<Facility> = raws.into_iter().filter_map(|r| self.normalize(r)).collect();
        if facilities.len() < total {
            tracing::debug!(
                "normalized {} of {} facility records",
                facilities.len(),
                total
            );
        }
        facilities
    }

    /// Normalize one blood-bank registry row.
    ///
    /// The registry delivers latitude/longitude and unit counts as strings;
    /// a row whose coordinate does not parse as a valid floating-point pair
    /// is skipped with a warning. Unparseable unit counts drop only that
    /// blood group.
    pub fn normalize_blood_bank(&self, row: RawBloodBankRow) -> Option<BloodBankRecord> {
        let lat = match row.latitude.trim().parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                tracing::warn!(
                    "skipping blood bank {}: unparseable latitude {:?}",
                    row.id,
                    row.latitude
                );
                return None;
            }
        };
        let lon = match row.longitude.trim().parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                tracing::warn!(
                    "skipping blood bank {}: unparseable longitude {:?}",
                    row.id,
                    row.longitude
                );
                return None;
            }
        };
        let coordinate = match Coordinate::new(lat, lon) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!("skipping blood bank {}: {}", row.id, e);
                return None;
            }
        };

        let mut stock = BTreeMap::new();
        for (group, count) in row.blood_stock {
            match count.trim().parse::<u32>() {
                Ok(units) => {
                    stock.insert(group, units);
                }
                Err(_) => {
                    tracing::debug!(
                        "blood bank {}: dropping group {:?} with unparseable count {:?}",
                        row.id,
                        group,
                        count
                    );
                }
            }
        }

        let name = match row.name.as_deref().map(str::trim) {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => UNNAMED_FACILITY.to_string(),
        };

        Some(BloodBankRecord {
            id: row.id,
            name,
            address: row.address.unwrap_or_default(),
            city: row.city.unwrap_or_default(),
            state: row.state.unwrap_or_default(),
            pincode: row.pincode.unwrap_or_default(),
            phone: row.phone,
            mobile: row.mobile,
            email: row.email,
            category: row.category,
            stock,
            coordinate,
            service_time: row.service_time.unwrap_or_default(),
        })
    }

    /// Normalize a whole registry fetch, skipping rejected rows.
    pub fn normalize_blood_banks(&self, rows: Vec<RawBloodBankRow>) -> Vec<BloodBankRecord> {
        rows.into_iter()
            .filter_map(|r| self.normalize_blood_bank(r))
            .collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
