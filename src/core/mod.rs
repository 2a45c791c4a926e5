// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod nearest;
pub mod normalizer;
pub mod pagination;
pub mod ranker;

pub use distance::distance_km;
pub use filters::{matches_required_services, matches_search_term, passes_open_filter, within_radius};
pub use nearest::nearest;
pub use normalizer::{NamePredicate, Normalizer, DEFAULT_NAME_PATTERN, UNNAMED_FACILITY};
pub use pagination::{page, Paginator};
pub use ranker::Ranker;
