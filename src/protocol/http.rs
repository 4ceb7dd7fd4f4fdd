// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for ESP32 LED strip controllers.

use std::time::Duration;

use reqwest::Client;

use crate::error::{Error, ParseError, TransportError};
use crate::protocol::Gateway;
use crate::response::StatusResponse;
use crate::types::{Brightness, RgbColor};

// ============================================================================
// HttpConfig - Connection parameters
// ============================================================================

/// Configuration for reaching a strip controller over HTTP.
///
/// The device speaks plain HTTP on its local address; each command is an
/// independent request with no persistent connection.
///
/// # Examples
///
/// ```
/// use ledsync_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// // Simple configuration
/// let config = HttpConfig::new("192.168.1.42");
///
/// // With all options
/// let config = HttpConfig::new("192.168.1.42")
///     .with_port(8080)
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    timeout: Duration,
}

impl HttpConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a new configuration for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the device
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        if self.port == Self::DEFAULT_PORT {
            format!("http://{}", self.host)
        } else {
            format!("http://{}:{}", self.host, self.port)
        }
    }

    /// Creates an [`HttpClient`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn into_client(self) -> Result<HttpClient, TransportError> {
        let base_url = self.base_url();

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(TransportError::Http)?;

        Ok(HttpClient { base_url, client })
    }
}

// ============================================================================
// HttpClient - Gateway implementation
// ============================================================================

/// HTTP client for a single strip controller.
///
/// All endpoints are GET requests with query-string parameters. Write
/// endpoints answer with a text acknowledgement whose body is discarded.
///
/// # Examples
///
/// ```no_run
/// use ledsync_lib::protocol::{Gateway, HttpClient};
///
/// # async fn example() -> ledsync_lib::Result<()> {
/// let client = HttpClient::new("192.168.1.42")?;
/// let status = client.get_status().await?;
/// println!("powered on: {}", status.is_powered_on);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the device
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(host: impl Into<String>) -> Result<Self, TransportError> {
        let host = host.into();
        let base_url = if host.starts_with("http://") {
            host
        } else {
            format!("http://{host}")
        };

        let client = Client::builder()
            .timeout(HttpConfig::DEFAULT_TIMEOUT)
            .build()
            .map_err(TransportError::Http)?;

        Ok(Self { base_url, client })
    }

    /// Returns the base URL of the device.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the URL for an endpoint with its query string.
    fn build_url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }

    /// Issues a GET request and returns the response body on success.
    async fn send(&self, endpoint: &str) -> Result<String, TransportError> {
        let url = self.build_url(endpoint);

        tracing::debug!(url = %url, "Sending request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(TransportError::Http)?;

        if !response.status().is_success() {
            return Err(TransportError::ConnectionFailed(format!(
                "HTTP {} - {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response.text().await.map_err(TransportError::Http)?;

        tracing::debug!(body = %body, "Received response");

        Ok(body)
    }

    /// Issues a GET request and discards the acknowledgement body.
    async fn send_ack(&self, endpoint: &str) -> Result<(), Error> {
        self.send(endpoint).await?;
        Ok(())
    }
}

impl Gateway for HttpClient {
    async fn get_status(&self) -> Result<StatusResponse, Error> {
        let body = self.send("/status").await?;
        let status = serde_json::from_str(&body).map_err(ParseError::Json)?;
        Ok(status)
    }

    async fn set_brightness(&self, level: Brightness) -> Result<(), Error> {
        self.send_ack(&format!("/brightness?level={}", level.value()))
            .await
    }

    async fn set_mode(&self, mode: u8) -> Result<(), Error> {
        self.send_ack(&format!("/mode?mode={mode}")).await
    }

    async fn set_color(&self, color: RgbColor, white: Option<u8>) -> Result<(), Error> {
        let endpoint = match white {
            Some(w) => format!(
                "/color?r={}&g={}&b={}&w={w}",
                color.red(),
                color.green(),
                color.blue()
            ),
            None => format!(
                "/color?r={}&g={}&b={}",
                color.red(),
                color.green(),
                color.blue()
            ),
        };
        self.send_ack(&endpoint).await
    }

    async fn toggle_power(&self) -> Result<(), Error> {
        self.send_ack("/toggle").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_prefixes_scheme() {
        let client = HttpClient::new("192.168.1.42").unwrap();
        assert_eq!(client.base_url(), "http://192.168.1.42");
    }

    #[test]
    fn client_keeps_explicit_scheme() {
        let client = HttpClient::new("http://192.168.1.42:8080").unwrap();
        assert_eq!(client.base_url(), "http://192.168.1.42:8080");
    }

    #[test]
    fn build_url_appends_endpoint() {
        let client = HttpClient::new("192.168.1.42").unwrap();
        assert_eq!(
            client.build_url("/brightness?level=7"),
            "http://192.168.1.42/brightness?level=7"
        );
    }

    // =========================================================================
    // HttpConfig tests
    // =========================================================================

    #[test]
    fn http_config_default_values() {
        let config = HttpConfig::new("192.168.1.42");
        assert_eq!(config.host(), "192.168.1.42");
        assert_eq!(config.port(), 80);
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn http_config_base_url_default_port() {
        let config = HttpConfig::new("192.168.1.42");
        assert_eq!(config.base_url(), "http://192.168.1.42");
    }

    #[test]
    fn http_config_base_url_custom_port() {
        let config = HttpConfig::new("192.168.1.42").with_port(8080);
        assert_eq!(config.base_url(), "http://192.168.1.42:8080");
    }

    #[test]
    fn http_config_into_client() {
        let config = HttpConfig::new("192.168.1.42")
            .with_port(8080)
            .with_timeout(Duration::from_secs(5));
        let client = config.into_client().unwrap();
        assert_eq!(client.base_url(), "http://192.168.1.42:8080");
    }
}
