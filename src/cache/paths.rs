// Cache path utilities.
// Maps endpoint paths to files in the cache directory.

use std::path::PathBuf;

use directories::ProjectDirs;

/// Get the base cache directory (~/.cache/wkstats on macOS/Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "wkstats").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the cache file for an endpoint, `<cache_dir>/<endpoint>.json`.
pub fn endpoint_path(endpoint: &str) -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(format!("{}.json", sanitize_name(endpoint))))
}

/// Sanitize a name for use in filesystem paths.
/// Replaces problematic characters with underscores.
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect()
}
