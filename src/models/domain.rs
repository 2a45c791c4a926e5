use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// A geographic point in floating-point degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting non-finite or out-of-range components.
    ///
    /// Latitude must be within [-90, 90] and longitude within [-180, 180].
    /// Out-of-range values are rejected, never clamped.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoreError> {
        if !latitude.is_finite()
            || !longitude.is_finite()
            || !(-90.0..=90.0).contains(&latitude)
            || !(-180.0..=180.0).contains(&longitude)
        {
            return Err(CoreError::InvalidCoordinate {
                lat: latitude,
                lon: longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// Open/closed state of a facility.
///
/// `Unknown` means the upstream feed carried no open flag; the open-only
/// filter treats it as closed rather than assuming open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacilityStatus {
    Open,
    Closed,
    Unknown,
}

impl FacilityStatus {
    pub fn is_open(&self) -> bool {
        matches!(self, FacilityStatus::Open)
    }
}

/// A normalized hospital or similar geotagged healthcare location.
///
/// Created once per upstream fetch by the normalizer and immutable after.
/// Distance from the user is a per-query derived value carried on
/// [`RankedResult`], never written back here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(rename = "phoneNumber", default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub coordinate: Option<Coordinate>,
    pub status: FacilityStatus,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}

/// Sort order for ranked results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Distance,
    Rating,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Distance => "distance",
            SortKey::Rating => "rating",
        }
    }
}

/// Caller-supplied filter and sort parameters for a ranking query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct FilterCriteria {
    /// Free-text term matched case-insensitively against name and address.
    #[serde(default)]
    pub search: String,
    /// Facility must offer at least one of these when non-empty.
    #[serde(rename = "requiredServices", default)]
    pub required_services: Vec<String>,
    #[serde(rename = "openOnly", default)]
    pub open_only: bool,
    #[serde(rename = "sortBy", default)]
    pub sort_by: SortKey,
    /// Maximum distance in kilometers; absent means unbounded.
    #[validate(range(exclusive_min = 0.0))]
    #[serde(rename = "radiusCapKm", default)]
    pub radius_cap_km: Option<f64>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            required_services: Vec::new(),
            open_only: false,
            sort_by: SortKey::Distance,
            radius_cap_km: None,
        }
    }
}

/// Stock level for a single blood group, derived from the unit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BloodAvailability {
    High,
    Medium,
    Low,
}

impl BloodAvailability {
    /// High above 10 units, medium for 6-10, low at 5 or fewer.
    pub fn from_units(units: u32) -> Self {
        if units > 10 {
            BloodAvailability::High
        } else if units > 5 {
            BloodAvailability::Medium
        } else {
            BloodAvailability::Low
        }
    }
}

/// A normalized row from the government blood-bank registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloodBankRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub pincode: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Blood-group label to unit count.
    #[serde(default)]
    pub stock: BTreeMap<String, u32>,
    pub coordinate: Coordinate,
    #[serde(rename = "serviceTime", default)]
    pub service_time: String,
}

impl BloodBankRecord {
    /// Derived availability for a blood group, `None` when the group is not
    /// stocked at all.
    pub fn availability(&self, group: &str) -> Option<BloodAvailability> {
        self.stock
            .get(group)
            .map(|&units| BloodAvailability::from_units(units))
    }
}

/// A facility paired with its per-query derived distance and sort position.
///
/// Produced fresh by the ranker for every query; the caller owns the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub facility: Facility,
    /// Kilometers from the user, `None` when either side lacks a coordinate.
    #[serde(rename = "distanceKm")]
    pub distance_km: Option<f64>,
    /// 1-based position in the sorted output.
    pub position: usize,
}
