use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::Deserialize;

/// CLI configuration, merged from `cadence.toml` and `CADENCE_*` environment
/// variables.
#[derive(Deserialize, Debug)]
pub struct Config {
    /// Pattern applied by `new` when no --pattern flag is given
    #[serde(default)]
    pub default_pattern: Option<String>,
    /// strftime-style format for dates in table output
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_pattern: None,
            date_format: default_date_format(),
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Toml::file("cadence.toml"))
            .merge(Env::prefixed("CADENCE_"))
            .extract()
    }
}
