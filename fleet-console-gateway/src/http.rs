//! Generic HTTP client tools
//!
//! Provide reusable HTTP request processing logic shared by the REST
//! gateways: sending requests, logging, and reading responses. Mapping of
//! HTTP status codes to domain errors stays with each gateway, which knows
//! which resource and identifier the request was about.
//!
//! There is deliberately no retry layer here: every failure must surface to
//! the workflow so the user decides whether to re-issue the action.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::GatewayError;

/// HTTP tool function set
pub(crate) struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns response text
    ///
    /// Unified processing: sending requests, logging, transport error handling
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (including URL, headers, body, etc.)
    /// * `resource` - resource name (for logging and error context)
    /// * `method_name` - request method name (such as "GET", "POST", used for logs)
    /// * `url` - request URL (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - returns status code and response text
    /// * `Err(GatewayError::NetworkError | GatewayError::Timeout)` - transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        resource: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), GatewayError> {
        log::debug!("[{resource}] {method_name} {url}");

        // Send request
        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout {
                    resource: resource.to_string(),
                    detail: e.to_string(),
                }
            } else {
                GatewayError::NetworkError {
                    resource: resource.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{resource}] Response Status: {status_code}");

        // Read response body
        let response_text = response
            .text()
            .await
            .map_err(|e| GatewayError::NetworkError {
                resource: resource.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("[{resource}] Response Body: {response_text}");

        Ok((status_code, response_text))
    }

    /// Parse JSON response
    ///
    /// # Arguments
    /// * `response_text` - JSON text
    /// * `resource` - resource name (used for error messages)
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(GatewayError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, resource: &str) -> Result<T, GatewayError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{resource}] JSON parse failed: {e}");
            log::error!("[{resource}] Raw response: {response_text}");
            GatewayError::ParseError {
                resource: resource.to_string(),
                detail: e.to_string(),
            }
        })
    }
}
