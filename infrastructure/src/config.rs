use anyhow::{anyhow, Context};
use domain::RosterConfig;
use dotenvy::dotenv;
use shared::types::Result;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_PATH_VAR: &str = "ROSTER_CONFIG";
pub const CAPACITY_VAR: &str = "ROSTER_CAPACITY";
pub const LOG_VAR: &str = "ROSTER_LOG";

/// Values taken from the command line. They win over the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config_path: Option<PathBuf>,
    pub capacity: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub roster: RosterConfig,
    pub log_filter: Option<String>,
}

impl Config {
    /// Reads `.env`, then the JSON roster file (if any), then capacity
    /// overrides. The result is validated before it is returned.
    pub fn load(overrides: &Overrides) -> Result<Self> {
        dotenv().ok();
        let log_filter = env::var(LOG_VAR).ok();

        let path = overrides
            .config_path
            .clone()
            .or_else(|| env::var_os(CONFIG_PATH_VAR).map(PathBuf::from));
        let mut roster = match path {
            Some(path) => load_roster_file(&path)?,
            None => RosterConfig::default(),
        };

        let env_capacity = env::var(CAPACITY_VAR)
            .ok()
            .map(|raw| parse_capacity(&raw))
            .transpose()?;
        if let Some(capacity) = overrides.capacity.or(env_capacity) {
            roster.capacity = capacity;
        }

        roster.validate().context("invalid roster configuration")?;
        debug!(
            slots = roster.slots.len(),
            capacity = roster.capacity,
            "configuration loaded"
        );
        Ok(Self { roster, log_filter })
    }
}

pub fn load_roster_file(path: &Path) -> Result<RosterConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster config at {:?}", path))?;
    parse_roster_json(&data).with_context(|| format!("Failed to parse roster config at {:?}", path))
}

pub fn parse_roster_json(data: &str) -> Result<RosterConfig> {
    Ok(serde_json::from_str(data)?)
}

fn parse_capacity(raw: &str) -> Result<usize> {
    raw.trim()
        .parse::<usize>()
        .map_err(|e| anyhow!("{} must be a whole number, got {:?}: {}", CAPACITY_VAR, raw, e))
}
