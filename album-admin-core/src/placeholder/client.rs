use crate::error::AdminError;
use lazy_static::lazy_static;
use log::debug;
use std::sync::{Arc, Mutex};
use time::OffsetDateTime;
use tokio::time::{Duration, Instant};

const USER_AGENT: &str = "album-admin-core/0.1";
const ACCEPT: &str = "application/json";
pub const PLACEHOLDER_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

// The demo API is a shared public service; keep a small gap between calls.
const PLACEHOLDER_COOLDOWN: Duration = Duration::from_millis(100);
const MAX_API_HISTORY: usize = 100;

#[derive(Debug, Clone)]
pub struct ApiCall {
    pub url: String,
    pub timestamp: OffsetDateTime,
    pub status_code: u16,
    pub success: bool,
}

// Use a blocking mutex since we only hold the lock to find out when we can call
lazy_static! {
    static ref LAST_PLACEHOLDER_CALL: std::sync::Mutex<Instant> =
        std::sync::Mutex::new(Instant::now() - PLACEHOLDER_COOLDOWN);
    static ref API_CALL_HISTORY: Arc<Mutex<Vec<ApiCall>>> = Arc::new(Mutex::new(Vec::new()));
}

fn record_api_call(call: ApiCall) {
    if let Ok(mut history) = API_CALL_HISTORY.lock() {
        history.push(call);
        // Keep only the last MAX_API_HISTORY calls to prevent memory issues
        if history.len() > MAX_API_HISTORY {
            let excess = history.len() - MAX_API_HISTORY;
            history.drain(0..excess);
        }
    }
}

#[derive(Debug)]
pub struct PlaceholderClient {
    client: reqwest::Client,
    base_url: String,
}

impl PlaceholderClient {
    pub fn new() -> Result<Self, AdminError> {
        Self::with_base_url(PLACEHOLDER_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self, AdminError> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static(USER_AGENT),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static(ACCEPT),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(PlaceholderClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET an absolute URL, rate-limited and recorded in the call history.
    /// Non-2xx statuses become [`AdminError::Api`].
    pub async fn call(&self, uri: &str) -> Result<reqwest::Response, AdminError> {
        let next_call = {
            let mut last = LAST_PLACEHOLDER_CALL.lock().unwrap();
            let scheduled = (*last + PLACEHOLDER_COOLDOWN).max(Instant::now());
            *last = scheduled;
            scheduled
        };
        tokio::time::sleep_until(next_call).await;
        debug!("calling placeholder API: {}", uri);

        let timestamp = OffsetDateTime::now_utc();
        match self.client.get(uri).send().await {
            Ok(response) => {
                let status = response.status();
                record_api_call(ApiCall {
                    url: uri.to_string(),
                    timestamp,
                    status_code: status.as_u16(),
                    success: status.is_success(),
                });

                if !status.is_success() {
                    return Err(AdminError::Api(format!(
                        "{} returned status {}",
                        uri, status
                    )));
                }
                Ok(response)
            }
            Err(e) => {
                record_api_call(ApiCall {
                    url: uri.to_string(),
                    timestamp,
                    status_code: 0, // Unknown status for network errors
                    success: false,
                });
                Err(AdminError::Network(e))
            }
        }
    }

    /// GET a path relative to the API base, e.g. `/albums/1/photos`.
    pub async fn call_path(&self, path: &str) -> Result<reqwest::Response, AdminError> {
        let uri = format!("{}{}", self.base_url, path);
        self.call(&uri).await
    }

    /// Fetch raw image bytes (photo thumbnails and full-size photos).
    pub async fn get_image_bytes(&self, url: &str) -> Result<Vec<u8>, AdminError> {
        let response = self.call(url).await?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }

    /// Get the API call history for debugging purposes
    pub fn get_api_call_history() -> Vec<ApiCall> {
        API_CALL_HISTORY
            .lock()
            .map(|history| history.clone())
            .unwrap_or_default()
    }

    /// Clear the API call history
    pub fn clear_api_call_history() {
        if let Ok(mut history) = API_CALL_HISTORY.lock() {
            history.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let client = PlaceholderClient::with_base_url("http://localhost:3000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_call_history_is_bounded() {
        PlaceholderClient::clear_api_call_history();
        for i in 0..(MAX_API_HISTORY + 25) {
            record_api_call(ApiCall {
                url: format!("http://example.com/{}", i),
                timestamp: OffsetDateTime::now_utc(),
                status_code: 200,
                success: true,
            });
        }
        let history = PlaceholderClient::get_api_call_history();
        assert_eq!(history.len(), MAX_API_HISTORY);
        // oldest entries were drained first
        assert!(history[0].url.ends_with("/25"));
        PlaceholderClient::clear_api_call_history();
    }
}
