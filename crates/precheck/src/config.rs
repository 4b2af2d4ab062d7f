//! Configuration for the configurable checks
//!
//! The only setting is whether [`configurable`](crate::configurable) checks
//! run. It is read from the environment when the global switch is first used,
//! or handed to [`GlobalSwitch::init`](crate::mode::GlobalSwitch::init) from
//! a host configuration file.
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `PRECHECK_CONFIGURABLE_CHECKS` | `0`, `false`, `off`, `no` or empty disable; anything else enables |

use serde::{Deserialize, Serialize};

/// Environment variable read by [`CheckConfig::from_env`].
pub const CONFIGURABLE_CHECKS_ENV: &str = "PRECHECK_CONFIGURABLE_CHECKS";

/// Settings for the check surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Whether the configurable checks run. Off unless configured.
    pub configurable_checks: bool,
}

impl CheckConfig {
    /// Reads the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its
    /// value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(value) = lookup(CONFIGURABLE_CHECKS_ENV) {
            config.configurable_checks = parse_flag(&value);
        }
        config
    }

    /// Sets whether the configurable checks run.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_configurable_checks(mut self, enabled: bool) -> Self {
        self.configurable_checks = enabled;
        self
    }
}

fn parse_flag(value: &str) -> bool {
    let value = value.trim();
    !(value.is_empty()
        || value == "0"
        || ["false", "off", "no"]
            .iter()
            .any(|off| value.eq_ignore_ascii_case(off)))
}
