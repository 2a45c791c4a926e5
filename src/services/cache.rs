use crate::models::{Coordinate, FilterCriteria, RankedResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Decimal places the user location is rounded to when building cache
/// signatures (~11 m). GPS jitter below that must not defeat the cache.
const SIGNATURE_COORD_PRECISION: i32 = 4;

/// One cached ranking, always replaced wholesale.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub results: Vec<RankedResult>,
    /// Facility-set version the results were computed from.
    pub version: u64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Process-local store for ranked query results.
///
/// Entries expire lazily after the configured TTL (no background sweep) and
/// are addressed by a signature that embeds the facility-set version, so a
/// refreshed upstream fetch makes all prior entries unreachable without any
/// eviction bookkeeping. Insertion is an atomic whole-entry replacement;
/// concurrent writers for the same signature resolve last-write-wins.
///
/// Constructed explicitly and handed to the ranker, never a module-level
/// singleton, so tests can run isolated instances.
pub struct ResultCache {
    entries: moka::sync::Cache<String, Arc<CacheEntry>>,
}

impl ResultCache {
    pub fn new(max_entries: u64, ttl_secs: u64) -> Self {
        let entries = moka::sync::CacheBuilder::new(max_entries)
            .time_to_live(Duration::from_secs(ttl_secs.max(1)))
            .build();
        Self { entries }
    }

    /// Look up a ranking by signature; expired entries read as misses.
    pub fn get(&self, signature: &str) -> Option<Arc<CacheEntry>> {
        let entry = self.entries.get(signature);
        if entry.is_some() {
            tracing::trace!("cache hit: {}", signature);
        } else {
            tracing::trace!("cache miss: {}", signature);
        }
        entry
    }

    /// Store a ranking under its signature.
    pub fn put(&self, signature: &str, results: Vec<RankedResult>, version: u64) {
        let entry = Arc::new(CacheEntry {
            results,
            version,
            created_at: chrono::Utc::now(),
        });
        self.entries.insert(signature.to_string(), entry);
        tracing::trace!("cache set: {}", signature);
    }

    pub fn invalidate_all(&self) {
        self.entries.invalidate_all();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entry_count: self.entries.entry_count(),
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub entry_count: u64,
}

/// Cache signature builder
pub struct CacheKey;

impl CacheKey {
    /// Deterministic signature over criteria, rounded user location, and
    /// facility-set version.
    ///
    /// Components are JSON-encoded so free-text terms and service tags can
    /// never splice into each other; two signatures are equal only when the
    /// query parameters are.
    pub fn results(
        criteria: &FilterCriteria,
        user_location: Option<&Coordinate>,
        version: u64,
    ) -> String {
        let scale = 10f64.powi(SIGNATURE_COORD_PRECISION);
        let location = user_location.map(|c| {
            vec![
                (c.latitude * scale).round() / scale,
                (c.longitude * scale).round() / scale,
            ]
        });

        // Required services are order-insensitive for matching, so the
        // signature sorts them.
        let mut services = criteria.required_services.clone();
        services.sort();

        // serde_json keeps object keys sorted, so the rendering is canonical.
        let payload = serde_json::json!({
            "loc": location,
            "open": criteria.open_only,
            "q": criteria.search.trim().to_lowercase(),
            "radius": criteria.radius_cap_km,
            "sort": criteria.sort_by.as_str(),
            "svc": services,
            "v": version,
        });

        format!("results:{}", payload)
    }
}
