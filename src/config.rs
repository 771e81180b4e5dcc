use anyhow::{bail, Context};
use std::env;

use crate::models::catalog::DEFAULT_FACILITY;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub default_facility: String,
    pub seed_sample_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(),
            default_facility: DEFAULT_FACILITY.to_string(),
            seed_sample_data: true,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();
        if let Ok(bind_addr) = env::var("BIND_ADDR") {
            config.bind_addr = bind_addr;
        }
        if let Ok(facility) = env::var("DEFAULT_FACILITY") {
            if !facility.trim().is_empty() {
                config.default_facility = facility.trim().to_string();
            }
        }
        if let Ok(seed) = env::var("SEED_SAMPLE_DATA") {
            config.seed_sample_data = parse_flag(&seed).context("SEED_SAMPLE_DATA")?;
        }
        Ok(config)
    }
}

fn parse_flag(s: &str) -> anyhow::Result<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean, got {:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags() {
        assert!(parse_flag("TRUE").unwrap());
        assert!(!parse_flag(" off ").unwrap());
        assert!(parse_flag("maybe").is_err());
    }
}
