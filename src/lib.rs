//! medmatch - Proximity matching engine for the MedHub hospital & blood bank directory
//!
//! This library implements the facility matching pipeline behind the MedHub
//! front-end: raw upstream records are normalized into uniform facility
//! records, filtered and ranked by great-circle distance from the user, and
//! paginated for display. A separate selector reduces the blood-bank registry
//! to the single nearest bank. Rankings for identical queries are served from
//! an in-process, TTL-bounded result cache.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::config::Settings;
pub use crate::core::{distance_km, nearest, page, Normalizer, Paginator, Ranker};
pub use error::CoreError;
pub use models::{
    BloodAvailability, BloodBankRecord, Coordinate, Facility, FacilityStatus, FilterCriteria,
    RankedResult, RawBloodBankRow, RawFacilityRecord, SortKey,
};
pub use services::{CacheKey, ResultCache};
