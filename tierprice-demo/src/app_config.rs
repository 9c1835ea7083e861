use chrono::NaiveDate;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub demo: DemoConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DemoConfig {
    /// Item looked up for every customer
    pub item_id: String,
    /// Lookup date (ISO 8601, e.g. 2023-01-01)
    pub as_of: NaiveDate,
    pub output: OutputFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            item_id: "item1".to_string(),
            as_of: default_as_of(),
            output: OutputFormat::Text,
        }
    }
}

fn default_as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default()
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LogConfig {
    /// Fallback filter when RUST_LOG is unset
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "tierprice_demo=info,tierprice_catalog=info".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config", Self::environment())
    }

    /// Environment overrides, e.g. `TIERPRICE__DEMO__ITEM_ID=item9`
    pub fn environment() -> config::Environment {
        config::Environment::with_prefix("TIERPRICE").separator("__")
    }

    /// Layered load: `{dir}/default`, `{dir}/{RUN_MODE}`, `{dir}/local`, then `environment`.
    /// Every file is optional; missing keys fall back to the built-in defaults.
    pub fn load_from(dir: &str, environment: config::Environment) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name(&format!("{}/default", dir)).required(false))
            .add_source(config::File::with_name(&format!("{}/{}", dir, run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name(&format!("{}/local", dir)).required(false))
            .add_source(environment)
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_from(pairs: &[(&str, &str)]) -> config::Environment {
        let mut map = config::Map::new();
        for (k, v) in pairs {
            map.insert(k.to_string(), v.to_string());
        }
        Config::environment().source(Some(map))
    }

    #[test]
    fn test_defaults_without_sources() {
        let config = Config::load_from("does-not-exist", env_from(&[])).unwrap();

        assert_eq!(config.demo.item_id, "item1");
        assert_eq!(config.demo.as_of, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(config.demo.output, OutputFormat::Text);
        assert!(config.log.filter.contains("tierprice_demo"));
    }

    #[test]
    fn test_environment_overrides() {
        let config = Config::load_from(
            "does-not-exist",
            env_from(&[
                ("TIERPRICE__DEMO__ITEM_ID", "item9"),
                ("TIERPRICE__DEMO__AS_OF", "2024-02-29"),
                ("TIERPRICE__DEMO__OUTPUT", "json"),
            ]),
        )
        .unwrap();

        assert_eq!(config.demo.item_id, "item9");
        assert_eq!(config.demo.as_of, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(config.demo.output, OutputFormat::Json);
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let result = Config::load_from("does-not-exist", env_from(&[("TIERPRICE__DEMO__AS_OF", "not-a-date")]));
        assert!(result.is_err());
    }
}
