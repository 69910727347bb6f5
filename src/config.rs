//! Tunables of the road graph.
//!
//! Values are resolved from the environment (and a `.env` file, if present)
//! by [`GraphConfig::from_env`], falling back to [`GraphConfig::default`].

use crate::error::ConfigError;

use log::debug;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use turnroute_geo::{DEFAULT_EPSILON, Metric};

/// The fastest speed assumed for any road when the provider does not know better.
pub const DEFAULT_MAX_SPEED_KMPH: f64 = 200.0;

pub const ENV_CROSS_TOLERANCE: &str = "TURNROUTE_CROSS_TOLERANCE";
pub const ENV_METRIC: &str = "TURNROUTE_METRIC";
pub const ENV_MAX_SPEED_KMPH: &str = "TURNROUTE_MAX_SPEED_KMPH";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Per-axis distance, in coordinate units, within which two points
    /// are treated as the same junction.
    pub cross_tolerance: f64,

    /// Metric used for segment lengths and the search heuristic.
    pub metric: Metric,

    /// Upper bound on road speeds, used by the search heuristic.
    pub max_speed_kmph: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            cross_tolerance: DEFAULT_EPSILON,
            metric: Metric::default(),
            max_speed_kmph: DEFAULT_MAX_SPEED_KMPH,
        }
    }
}

impl GraphConfig {
    /// Resolves the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(err) = dotenv::dotenv() {
            debug!("No .env file loaded: {err}");
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the configuration from an arbitrary key-value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = GraphConfig::default();

        if let Some(value) = lookup(ENV_CROSS_TOLERANCE) {
            config.cross_tolerance = parse(ENV_CROSS_TOLERANCE, value)?;
        }

        if let Some(value) = lookup(ENV_METRIC) {
            config.metric = parse(ENV_METRIC, value)?;
        }

        if let Some(value) = lookup(ENV_MAX_SPEED_KMPH) {
            config.max_speed_kmph = parse(ENV_MAX_SPEED_KMPH, value)?;
        }

        config.validate()?;
        debug!("Resolved graph configuration: {config:?}");

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.cross_tolerance.is_finite() || self.cross_tolerance < 0.0 {
            return Err(ConfigError::InvalidValue {
                key: ENV_CROSS_TOLERANCE,
                value: self.cross_tolerance.to_string(),
            });
        }

        if !self.max_speed_kmph.is_finite() || self.max_speed_kmph <= 0.0 {
            return Err(ConfigError::InvalidValue {
                key: ENV_MAX_SPEED_KMPH,
                value: self.max_speed_kmph.to_string(),
            });
        }

        Ok(())
    }
}

fn parse<T: FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();

        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_values() {
        let config = GraphConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, GraphConfig::default());
        assert_eq!(config.metric, Metric::Euclidean);
    }

    #[test]
    fn reads_every_key() {
        let config = GraphConfig::from_lookup(lookup(&[
            (ENV_CROSS_TOLERANCE, "0.5"),
            (ENV_METRIC, "haversine"),
            (ENV_MAX_SPEED_KMPH, " 130 "),
        ]))
        .unwrap();

        assert_eq!(config.cross_tolerance, 0.5);
        assert_eq!(config.metric, Metric::Haversine);
        assert_eq!(config.max_speed_kmph, 130.0);
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            GraphConfig::from_lookup(lookup(&[(ENV_METRIC, "manhattan")])),
            Err(ConfigError::InvalidValue {
                key: ENV_METRIC,
                value: "manhattan".to_string()
            })
        );

        assert!(GraphConfig::from_lookup(lookup(&[(ENV_MAX_SPEED_KMPH, "0")])).is_err());
        assert!(GraphConfig::from_lookup(lookup(&[(ENV_CROSS_TOLERANCE, "-1")])).is_err());
    }
}
