//! Token pair value object.

use serde::{Deserialize, Serialize};

/// A freshly issued access and refresh token pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived access token
    pub access_token: String,

    /// Longer-lived refresh token
    pub refresh_token: String,

    /// Token scheme, always "bearer"
    pub token_type: String,
}

impl TokenPair {
    /// Creates a new bearer token pair
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "bearer".to_string(),
        }
    }
}
