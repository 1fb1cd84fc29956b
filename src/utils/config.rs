/*---------- Imports ----------*/
use crate::errors::RelayError;
use std::{env, time::Duration};

pub const DEFAULT_CADENCE_IMPORTS_URL: &str = "https://api.salesloft.com/v2/cadence_imports.json";

pub const CADENCE_IMPORTS_URL_VAR: &str = "SALESLOFT_CADENCE_IMPORTS_URL";
pub const TIMEOUT_SECS_VAR: &str = "SALESLOFT_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub cadence_imports_url: String,

    /// `None` leaves the HTTP client's default in place.
    pub timeout: Option<Duration>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            cadence_imports_url: DEFAULT_CADENCE_IMPORTS_URL.to_owned(),
            timeout: None,
        }
    }
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, RelayError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RelayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let cadence_imports_url =
            read(CADENCE_IMPORTS_URL_VAR).unwrap_or_else(|| DEFAULT_CADENCE_IMPORTS_URL.to_owned());

        let timeout = match read(TIMEOUT_SECS_VAR) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    return Err(RelayError::Config(format!(
                        "{} must be a positive number of seconds, got {:?}",
                        TIMEOUT_SECS_VAR, raw
                    )))
                }
            },
            None => None,
        };

        Ok(Self {
            cadence_imports_url,
            timeout,
        })
    }
}
