//! API response envelope types
//!
//! Every endpoint answers with the same flat envelope: a `success` flag,
//! the endpoint-specific fields flattened alongside it on success, and an
//! `error` string on failure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Standard API response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,

    /// Endpoint-specific fields, flattened to the top level
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Error message (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    /// Check if the response is successful
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Extract the data, consuming the response
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// Empty success payload for endpoints with no extra fields
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Empty {}

impl ApiResponse<Empty> {
    /// A bare `{"success": true}` response
    pub fn ok() -> Self {
        Self::success(Empty {})
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: HealthStatus,

    /// Individual service health checks
    pub services: HashMap<String, HealthStatus>,

    /// Server timestamp
    pub timestamp: DateTime<Utc>,

    /// Server version
    pub version: String,
}

/// Health status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize)]
    struct Message {
        message: String,
    }

    #[test]
    fn success_fields_are_flattened() {
        let response = ApiResponse::success(Message {
            message: "code sent".to_string(),
        });
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({"success": true, "message": "code sent"}));
    }

    #[test]
    fn error_carries_message_only() {
        let response: ApiResponse<Message> = ApiResponse::error("invalid email");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({"success": false, "error": "invalid email"}));
    }

    #[test]
    fn bare_ok_has_no_extra_fields() {
        let value = serde_json::to_value(ApiResponse::ok()).unwrap();
        assert_eq!(value, json!({"success": true}));
    }
}
