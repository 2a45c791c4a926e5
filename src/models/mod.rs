// Model exports
pub mod domain;
pub mod raw;

pub use domain::{
    BloodAvailability, BloodBankRecord, Coordinate, Facility, FacilityStatus, FilterCriteria,
    RankedResult, SortKey,
};
pub use raw::{RawBloodBankRow, RawFacilityRecord};
