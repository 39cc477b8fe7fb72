use serde::{Deserialize, Serialize};

/// One generated occurrence: a day offset and its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedEvent {
    pub offset_day: u32,
    pub name: String,
}

impl GeneratedEvent {
    #[must_use]
    pub fn new(offset_day: u32, name: impl Into<String>) -> Self {
        Self {
            offset_day,
            name: name.into(),
        }
    }
}
