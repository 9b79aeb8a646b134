//! Dispatch configuration.

use serde::Deserialize;

use taxi_core::{DomainError, DomainResult};

/// Environment variable holding the first order id handed out.
pub const FIRST_ORDER_ID_ENV: &str = "TAXI_FIRST_ORDER_ID";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Id given to the first order created by a fresh service.
    pub first_order_id: u64,
}

impl DispatchConfig {
    /// Read configuration from the process environment, falling back to defaults.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(FIRST_ORDER_ID_ENV) {
            config.first_order_id = raw.trim().parse().map_err(|e| {
                DomainError::validation(format!("{FIRST_ORDER_ID_ENV}={raw:?}: {e}"))
            })?;
        }

        Ok(config)
    }
}
