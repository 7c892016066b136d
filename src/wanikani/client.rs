// WaniKani API HTTP client.
// Handles authentication and request/response processing.

use std::time::Duration;

use reqwest::{
    Client, Response, StatusCode,
    header::{AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{Result, WkError};

const WANIKANI_API_BASE: &str = "https://api.wanikani.com/v2";
const WANIKANI_API_REVISION: &str = "20170710";

/// Request timeout. The API normally answers well within this; without it a
/// stalled connection would hang the program indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// WaniKani API client with bearer-token authentication.
pub struct WaniKaniClient {
    client: Client,
}

impl WaniKaniClient {
    /// Create a new WaniKani client with the given token.
    pub fn new(token: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| WkError::Other(e.to_string()))?,
        );
        headers.insert(
            "Wanikani-Revision",
            HeaderValue::from_static(WANIKANI_API_REVISION),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("wkstats"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(WkError::Api)?;

        Ok(Self { client })
    }

    /// Create a client from the WANIKANI_TOKEN environment variable.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("WANIKANI_TOKEN").map_err(|_| WkError::MissingToken)?;
        Self::new(&token)
    }

    /// Make a GET request to an API endpoint path.
    pub async fn get(&self, endpoint: &str) -> Result<Response> {
        let url = format!("{}/{}", WANIKANI_API_BASE, endpoint);
        self.get_url(&url).await
    }

    /// Make a GET request to an absolute URL, e.g. a `next_url` returned by
    /// the API.
    pub async fn get_url(&self, url: &str) -> Result<Response> {
        let response = self.client.get(url).send().await.map_err(WkError::Api)?;
        self.check_response(response).await
    }

    /// Check response status and convert errors.
    async fn check_response(&self, response: Response) -> Result<Response> {
        match response.status() {
            StatusCode::OK => Ok(response),
            StatusCode::UNAUTHORIZED => Err(WkError::Unauthorized),
            StatusCode::NOT_FOUND => {
                let url = response.url().to_string();
                Err(WkError::NotFound(url))
            }
            status => Err(WkError::Http {
                endpoint: response.url().to_string(),
                status: status.as_u16(),
            }),
        }
    }
}
