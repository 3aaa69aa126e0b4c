//! Consultation type value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Hard cap on participants in one group-consultation slot.
pub const GROUP_CAPACITY: u32 = 5;

/// Kind of consultation an appointment books.
///
/// An individual consultation fully consumes its slot. A group
/// consultation increments a participant counter; the slot remains
/// bookable while the counter is below [`GROUP_CAPACITY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsultationType {
    Individual,
    Group,
}

impl ConsultationType {
    /// Returns the lowercase storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsultationType::Individual => "individual",
            ConsultationType::Group => "group",
        }
    }
}

impl fmt::Display for ConsultationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ConsultationType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "individual" | "individual consultation" => Ok(ConsultationType::Individual),
            "group" | "group consultation" => Ok(ConsultationType::Group),
            other => Err(ValidationError::invalid_format(
                "consultation_type",
                format!("unknown consultation type '{}'", other),
            )),
        }
    }
}
