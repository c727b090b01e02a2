use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Where invocation answers come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvocationMode {
    /// Answer from the template's worked examples; no network access.
    #[default]
    Offline,
    /// Call the configured chat-completions endpoint.
    Live,
}

impl InvocationMode {
    pub fn label(self) -> &'static str {
        match self {
            InvocationMode::Offline => "offline",
            InvocationMode::Live => "live",
        }
    }
}

impl FromStr for InvocationMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "offline" => Ok(InvocationMode::Offline),
            "live" => Ok(InvocationMode::Live),
            _ => Err(AppError::InvalidConfig(format!(
                "Invalid invocation mode '{}'. Expected 'offline' or 'live'.",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels() {
        for mode in [InvocationMode::Offline, InvocationMode::Live] {
            assert_eq!(mode.label().parse::<InvocationMode>().unwrap(), mode);
        }
        assert!("auto".parse::<InvocationMode>().is_err());
    }
}
