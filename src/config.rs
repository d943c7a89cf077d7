//! Simulation settings.

use std::{env, num::NonZeroU64};

use crate::error::{Result, SimError};

/// Environment variable overriding the round-robin quantum.
pub const ENV_RR_QUANTUM: &str = "SCHEDSIM_RR_QUANTUM";
/// Environment variable toggling the per-tick invariant observer.
pub const ENV_CHECK_INVARIANTS: &str = "SCHEDSIM_CHECK_INVARIANTS";

/// Knobs shared by all policy engines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Consecutive ticks a round-robin job runs before rotation.
    pub rr_quantum: NonZeroU64,
    /// Run the observer after every tick.
    pub check_invariants: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rr_quantum: NonZeroU64::MIN,
            check_invariants: cfg!(debug_assertions),
        }
    }
}

impl SimConfig {
    pub fn with_rr_quantum(mut self, quantum: NonZeroU64) -> Self {
        self.rr_quantum = quantum;
        self
    }

    pub fn with_check_invariants(mut self, enabled: bool) -> Self {
        self.check_invariants = enabled;
        self
    }

    /// Defaults, overridden by any `SCHEDSIM_*` variables that are set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_RR_QUANTUM) {
            let quantum = raw
                .trim()
                .parse::<NonZeroU64>()
                .map_err(|e| SimError::Config(format!("{ENV_RR_QUANTUM}=`{raw}`: {e}")))?;
            config.rr_quantum = quantum;
        }

        if let Some(raw) = lookup(ENV_CHECK_INVARIANTS) {
            config.check_invariants = match raw.trim() {
                "1" | "true" | "on" => true,
                "0" | "false" | "off" => false,
                other => {
                    return Err(SimError::Config(format!(
                        "{ENV_CHECK_INVARIANTS}=`{other}`: expected true or false"
                    )));
                }
            };
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults_to_unit_quantum() {
        let config = SimConfig::from_lookup(lookup(&[])).expect("no overrides");
        assert_eq!(config.rr_quantum.get(), 1);
    }

    #[test]
    fn reads_overrides() {
        let config = SimConfig::from_lookup(lookup(&[
            (ENV_RR_QUANTUM, "3"),
            (ENV_CHECK_INVARIANTS, "off"),
        ]))
        .expect("valid overrides");
        assert_eq!(config.rr_quantum.get(), 3);
        assert!(!config.check_invariants);
    }

    #[test]
    fn rejects_zero_quantum() {
        let err = SimConfig::from_lookup(lookup(&[(ENV_RR_QUANTUM, "0")])).unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn rejects_unknown_toggle() {
        assert!(SimConfig::from_lookup(lookup(&[(ENV_CHECK_INVARIANTS, "maybe")])).is_err());
    }
}
