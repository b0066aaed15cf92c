//! The HTTP collaborator serving causes and accepting donation logs.

use impact_types::{Cause, DonationLog};

use crate::Result;

/// Backend operations the dashboard depends on.
#[allow(async_fn_in_trait)]
pub trait CauseBackend {
    /// `GET /causes`
    async fn fetch_causes(&self) -> Result<Vec<Cause>>;

    /// `POST /api/log-donation`; the response body is ignored.
    async fn log_donation(&self, log: &DonationLog) -> Result<()>;
}

#[cfg(feature = "http")]
pub use http::{HttpBackend, HttpBackendConfig};

#[cfg(feature = "http")]
mod http {
    use impact_types::{ApiError, CAUSES_PATH, Cause, DonationLog, LOG_DONATION_PATH};

    use super::CauseBackend;
    use crate::{DashboardError, Result};

    /// Configuration for [`HttpBackend`].
    #[derive(Debug, Clone)]
    pub struct HttpBackendConfig {
        /// Base URL (default: http://localhost:8000)
        pub base_url: String,
    }

    impl Default for HttpBackendConfig {
        fn default() -> Self {
            Self {
                base_url: "http://localhost:8000".to_string(),
            }
        }
    }

    /// Backend client over reqwest.
    pub struct HttpBackend {
        config: HttpBackendConfig,
        client: reqwest::Client,
    }

    impl HttpBackend {
        pub fn new(config: HttpBackendConfig) -> Self {
            Self {
                config,
                client: reqwest::Client::new(),
            }
        }

        fn url(&self, path: &str) -> String {
            format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
        }

        /// Turn a non-2xx response into a status error, keeping the
        /// backend's `{"error": ...}` message when there is one.
        async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
            let status = response.status();
            if status.is_success() {
                return Ok(response);
            }
            let body = response.text().await.unwrap_or_default();
            Err(DashboardError::Status {
                status: status.as_u16(),
                message: ApiError::message_from_body(&body),
            })
        }
    }

    impl CauseBackend for HttpBackend {
        async fn fetch_causes(&self) -> Result<Vec<Cause>> {
            let response = self.client.get(self.url(CAUSES_PATH)).send().await?;
            let body = Self::check(response).await?.text().await?;
            serde_json::from_str(&body).map_err(|e| DashboardError::Decode(e.to_string()))
        }

        async fn log_donation(&self, log: &DonationLog) -> Result<()> {
            let response = self
                .client
                .post(self.url(LOG_DONATION_PATH))
                .json(log)
                .send()
                .await?;
            Self::check(response).await?;
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_http_backend_config_default() {
            let config = HttpBackendConfig::default();
            assert_eq!(config.base_url, "http://localhost:8000");
        }

        #[test]
        fn test_url_joins_without_double_slash() {
            let backend = HttpBackend::new(HttpBackendConfig {
                base_url: "http://donate.local:8000/".to_string(),
            });
            assert_eq!(backend.url(CAUSES_PATH), "http://donate.local:8000/causes");
            assert_eq!(
                backend.url(LOG_DONATION_PATH),
                "http://donate.local:8000/api/log-donation"
            );
        }

        // Requires a backend on localhost:8000
        #[tokio::test]
        #[ignore]
        async fn test_fetch_causes_integration() {
            let backend = HttpBackend::new(HttpBackendConfig::default());
            let causes = backend.fetch_causes().await.unwrap();
            println!("Fetched {} causes", causes.len());
        }
    }
}
