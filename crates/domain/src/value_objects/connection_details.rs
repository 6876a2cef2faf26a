//! Connection details advertised for a room.

use serde::{Deserialize, Serialize};

/// How a client reaches a room: connection type, target endpoint, an opaque
/// token and whether the endpoint is shared between rooms.
///
/// Empty strings and `shared == false` are left out of the JSON form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionDetails {
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub connection_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub target: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub token: String,
    #[serde(skip_serializing_if = "is_false")]
    pub shared: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl ConnectionDetails {
    pub fn new(connection_type: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            connection_type: connection_type.into(),
            target: target.into(),
            ..Self::default()
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub fn as_shared(mut self) -> Self {
        self.shared = true;
        self
    }
}
