use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::NtfyError;

/// Message priority levels understood by ntfy
///
/// See <https://docs.ntfy.sh/publish/#message-priority>.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Max,
    High,
    #[default]
    Default,
    Low,
    Min,
}

impl Priority {
    /// The name sent in the `Priority` header
    pub fn name(&self) -> &'static str {
        match self {
            Priority::Max => "MAX",
            Priority::High => "HIGH",
            Priority::Default => "DEFAULT",
            Priority::Low => "LOW",
            Priority::Min => "MIN",
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Priority::Default
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the level names in any case, plus ntfy's numeric scale (1 = min, 5 = max)
impl FromStr for Priority {
    type Err = NtfyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "max" | "5" => Ok(Priority::Max),
            "high" | "4" => Ok(Priority::High),
            "default" | "3" => Ok(Priority::Default),
            "low" | "2" => Ok(Priority::Low),
            "min" | "1" => Ok(Priority::Min),
            _ => Err(NtfyError::invalid_argument(
                "priority",
                format!("unknown priority '{s}'"),
            )),
        }
    }
}
