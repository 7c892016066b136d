// Cache module.
// Persists raw API pages as JSON files named after their endpoint path.

pub mod paths;
pub mod store;
