//! Wire types specific to the REST API.

use serde::{Deserialize, Serialize};

/// Error body returned by the goal API on failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorResponse {
    pub code: u16,
    /// Name of the core error variant, e.g. `NotFound` or `InvalidAmount`
    #[serde(default)]
    pub kind: Option<String>,
    pub message: String,
}
