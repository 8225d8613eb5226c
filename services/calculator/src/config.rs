use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SessionConfig {
    pub prompt: String,
    pub banner: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            prompt: ">> ".to_string(),
            banner: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub session: SessionConfig,
}

pub fn figment() -> Figment {
    Figment::new()
        .merge(Toml::file("Calculator.toml"))
        .merge(Env::prefixed("CALCULATOR_").map(|s| s.as_str().replacen('_', ".", 1).into()))
}
