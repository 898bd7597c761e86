use serde::{Deserialize, Serialize};

/// The message carried by every greeting served from `/hello`.
pub const HELLO_WORLD: &str = "hello world";

/// Response body of the greeting endpoint.
///
/// Serializes to a single-field JSON object, e.g. `{"message":"hello world"}`.
/// Fields are private so a greeting cannot be altered once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    message: String,
}

impl Greeting {
    /// Creates the canonical `hello world` greeting.
    pub fn hello_world() -> Self {
        Self {
            message: HELLO_WORLD.to_string(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for Greeting {
    fn default() -> Self {
        Self::hello_world()
    }
}

impl std::fmt::Display for Greeting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
