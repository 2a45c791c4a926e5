use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A loosely-typed record from the points-of-interest feed.
///
/// Everything except the id is optional; the normalizer decides what is
/// usable. Field names follow the upstream JSON payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawFacilityRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(rename = "phoneNumber", default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(rename = "isOpen", default)]
    pub is_open: Option<bool>,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}

/// A raw row from the blood-bank registry feed.
///
/// The registry delivers coordinates and unit counts as strings; parsing and
/// per-row rejection happen in the normalizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawBloodBankRow {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub pincode: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub latitude: String,
    #[serde(default)]
    pub longitude: String,
    /// Blood-group label to unit count, both as delivered (strings).
    #[serde(rename = "bloodStock", default)]
    pub blood_stock: BTreeMap<String, String>,
    #[serde(rename = "serviceTime", default)]
    pub service_time: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_facility_tolerates_sparse_json() {
        let record: RawFacilityRecord =
            serde_json::from_str(r#"{"id": "42"}"#).expect("minimal record should parse");

        assert_eq!(record.id, "42");
        assert!(record.name.is_none());
        assert!(record.latitude.is_none());
        assert!(record.services.is_empty());
    }

    #[test]
    fn test_raw_blood_bank_row_keeps_string_coordinates() {
        let row: RawBloodBankRow = serde_json::from_str(
            r#"{
                "id": "bb-1",
                "name": "Central Blood Bank",
                "latitude": "28.6139",
                "longitude": "77.2090",
                "bloodStock": {"A+": "120", "O-": "4"}
            }"#,
        )
        .expect("row should parse");

        assert_eq!(row.latitude, "28.6139");
        assert_eq!(row.blood_stock.get("O-").map(String::as_str), Some("4"));
    }
}
