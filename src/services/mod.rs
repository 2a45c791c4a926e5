// Service exports
pub mod cache;

pub use cache::{CacheEntry, CacheKey, CacheStats, ResultCache};
