// WaniKani API endpoint functions.
// Implements paginated collection fetching over the HTTP client.

use std::future::Future;

use serde_json::Value;

use crate::error::{Result, WkError};

use super::client::WaniKaniClient;
use super::types::Collection;

/// Upper bound on pages followed in one fetch. The API serves 500 records per
/// page, so a well-behaved collection never comes close; this guards against a
/// broken or looping `next_url` chain.
pub const MAX_PAGES: usize = 1000;

impl WaniKaniClient {
    /// Fetch every page of a paginated collection endpoint.
    ///
    /// Follows `pages.next_url` verbatim until it is null, returning the pages
    /// in fetch order. The result always contains at least one page.
    pub async fn fetch_collection(&self, endpoint: &str) -> Result<Vec<Collection>> {
        let first: Value = self.get(endpoint).await?.json().await?;
        follow_pages(endpoint, first, |url: String| async move {
            let body: Value = self.get_url(&url).await?.json().await?;
            Ok(body)
        })
        .await
    }
}

/// Follow a chain of pages starting from an already-fetched first body,
/// calling `fetch_next` for each non-null `next_url`.
///
/// Separate from the client so the loop's termination, ordering, and page cap
/// are testable without a network.
async fn follow_pages<F, Fut>(endpoint: &str, first: Value, mut fetch_next: F) -> Result<Vec<Collection>>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<Value>>,
{
    let mut pages = Vec::new();
    let mut page = parse_page(endpoint, first)?;

    loop {
        let next_url = page.pages.next_url.clone();
        pages.push(page);

        let Some(url) = next_url else { break };

        if pages.len() >= MAX_PAGES {
            return Err(WkError::PageLimitExceeded {
                endpoint: endpoint.to_string(),
                max: MAX_PAGES,
            });
        }

        page = parse_page(endpoint, fetch_next(url).await?)?;
    }

    Ok(pages)
}

/// Parse one response body into a collection page.
///
/// A body without a `pages` key gets a distinct error from a body that is
/// otherwise malformed, since the former usually means the endpoint is not a
/// collection at all.
fn parse_page(endpoint: &str, body: Value) -> Result<Collection> {
    if body.get("pages").is_none() {
        return Err(WkError::MalformedResponse {
            endpoint: endpoint.to_string(),
        });
    }
    serde_json::from_value(body).map_err(WkError::Json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;

    fn page_body(index: u64, next_url: Option<&str>) -> Value {
        json!({
            "object": "collection",
            "url": "https://api.wanikani.com/v2/level_progressions",
            "pages": {
                "per_page": 500,
                "next_url": next_url,
                "previous_url": null
            },
            "total_count": index,
            "data_updated_at": null,
            "data": []
        })
    }

    #[test]
    fn test_parse_page_reads_next_url() {
        let page = parse_page(
            "level_progressions",
            page_body(0, Some("https://api.wanikani.com/v2/level_progressions?page_after_id=49392")),
        )
        .unwrap();
        assert!(page.pages.next_url.is_some());

        let page = parse_page("level_progressions", page_body(0, None)).unwrap();
        assert!(page.pages.next_url.is_none());
    }

    #[test]
    fn test_parse_page_missing_pages_key() {
        let body = json!({ "object": "report", "data": {} });
        let err = parse_page("level_progressions", body).unwrap_err();
        assert!(matches!(
            err,
            WkError::MalformedResponse { ref endpoint } if endpoint == "level_progressions"
        ));
    }

    #[test]
    fn test_parse_page_invalid_shape_is_json_error() {
        // Has a `pages` key but the wrong shape elsewhere.
        let body = json!({
            "pages": { "per_page": 500, "next_url": null, "previous_url": null },
            "data": "not an array"
        });
        let err = parse_page("level_progressions", body).unwrap_err();
        assert!(matches!(err, WkError::Json(_)));
    }

    #[tokio::test]
    async fn test_follow_pages_single_page() {
        let calls = RefCell::new(0usize);

        let pages = follow_pages("level_progressions", page_body(0, None), |_url| {
            *calls.borrow_mut() += 1;
            async { Ok(page_body(99, None)) }
        })
        .await
        .unwrap();

        assert_eq!(pages.len(), 1);
        assert_eq!(*calls.borrow(), 0);
    }

    #[tokio::test]
    async fn test_follow_pages_chain_in_fetch_order() {
        let fetched = RefCell::new(Vec::new());

        let pages = follow_pages(
            "level_progressions",
            page_body(0, Some("page1")),
            |url| {
                fetched.borrow_mut().push(url.clone());
                let body = match url.as_str() {
                    "page1" => page_body(1, Some("page2")),
                    "page2" => page_body(2, None),
                    other => panic!("unexpected url {}", other),
                };
                async move { Ok(body) }
            },
        )
        .await
        .unwrap();

        assert_eq!(pages.len(), 3);
        let order: Vec<u64> = pages.iter().map(|p| p.total_count).collect();
        assert_eq!(order, vec![0, 1, 2]);
        assert_eq!(*fetched.borrow(), vec!["page1", "page2"]);
    }

    #[tokio::test]
    async fn test_follow_pages_never_null_hits_page_limit() {
        let calls = RefCell::new(0usize);

        let err = follow_pages("level_progressions", page_body(0, Some("next")), |_url| {
            *calls.borrow_mut() += 1;
            async { Ok(page_body(0, Some("next"))) }
        })
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            WkError::PageLimitExceeded { max: MAX_PAGES, .. }
        ));
        // The cap fires before the fetch that would exceed it.
        assert_eq!(*calls.borrow(), MAX_PAGES - 1);
    }
}
