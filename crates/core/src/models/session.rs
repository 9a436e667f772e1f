use serde::{Deserialize, Serialize};

/// Marker for a logged-in user. Its presence in storage means "authenticated".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub name: String,
}

impl Session {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
