// Cache store for reading and writing fetched pages.
// The on-disk format is a plain JSON array of raw API page objects, so a cache
// file is exactly what the API returned, page by page, in fetch order.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{Result, WkError};
use crate::wanikani::Collection;

/// Write fetched pages to a cache file, overwriting any existing file.
pub fn write_pages(path: &Path, pages: &[Collection]) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(pages)?;

    // Write atomically via temp file
    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(json.as_bytes())?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Read previously cached pages for an endpoint.
///
/// A missing file means the endpoint was never fetched; unparseable contents
/// mean the file was truncated or edited. Both carry enough context to point
/// the user at the file.
pub fn read_pages(path: &Path, endpoint: &str) -> Result<Vec<Collection>> {
    if !path.exists() {
        return Err(WkError::CacheMiss {
            endpoint: endpoint.to_string(),
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|source| WkError::CacheCorrupt {
        path: path.to_path_buf(),
        source,
    })
}

/// Check if a cache file exists.
pub fn exists(path: &Path) -> bool {
    path.exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wanikani::{Pages, Resource};
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn page(index: usize, next_url: Option<&str>) -> Collection {
        Collection {
            object: "collection".to_string(),
            url: format!(
                "https://api.wanikani.com/v2/level_progressions?page_after_id={}",
                index * 500
            ),
            pages: Pages {
                per_page: 500,
                next_url: next_url.map(str::to_string),
                previous_url: None,
            },
            total_count: 1,
            data_updated_at: Some(Utc.with_ymd_and_hms(2021, 2, 1, 9, 0, 0).unwrap()),
            data: vec![Resource {
                id: index as u64,
                object: "level_progression".to_string(),
                url: format!("https://api.wanikani.com/v2/level_progressions/{}", index),
                data_updated_at: Utc.with_ymd_and_hms(2021, 1, 10, 12, 0, 0).unwrap(),
                data: crate::wanikani::LevelProgression {
                    level: index as u32 + 1,
                    created_at: Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap(),
                    unlocked_at: None,
                    started_at: Some(Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap()),
                    passed_at: None,
                    completed_at: None,
                    abandoned_at: None,
                },
            }],
        }
    }

    #[test]
    fn test_write_then_read_is_deep_equal() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("level_progressions.json");

        let pages = vec![
            page(0, Some("https://api.wanikani.com/v2/level_progressions?page_after_id=500")),
            page(1, None),
        ];

        write_pages(&path, &pages).unwrap();
        let read = read_pages(&path, "level_progressions").unwrap();

        assert_eq!(read, pages);
    }

    #[test]
    fn test_cache_preserves_page_count_and_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("level_progressions.json");

        let pages: Vec<Collection> = (0..5)
            .map(|i| page(i, if i < 4 { Some("next") } else { None }))
            .collect();

        write_pages(&path, &pages).unwrap();
        let read = read_pages(&path, "level_progressions").unwrap();

        assert_eq!(read.len(), 5);
        for (i, p) in read.iter().enumerate() {
            assert_eq!(p.data[0].id, i as u64);
        }
    }

    #[test]
    fn test_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("level_progressions.json");

        write_pages(&path, &[page(0, None), page(1, None)]).unwrap();
        write_pages(&path, &[page(2, None)]).unwrap();

        let read = read_pages(&path, "level_progressions").unwrap();
        assert_eq!(read.len(), 1);
        assert_eq!(read[0].data[0].id, 2);
    }

    #[test]
    fn test_missing_file_is_cache_miss() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("level_progressions.json");

        let err = read_pages(&path, "level_progressions").unwrap_err();
        assert!(matches!(
            err,
            WkError::CacheMiss { ref endpoint, .. } if endpoint == "level_progressions"
        ));
    }

    #[test]
    fn test_invalid_json_is_cache_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("level_progressions.json");
        fs::write(&path, "[{ truncated").unwrap();

        let err = read_pages(&path, "level_progressions").unwrap_err();
        assert!(matches!(err, WkError::CacheCorrupt { .. }));
    }
}
