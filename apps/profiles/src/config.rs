use std::{collections::HashMap, fs, path::Path};

use anyhow::{bail, Context};
use client_core::PEOPLE_URL;
use tracing::debug;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub people_url: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            people_url: PEOPLE_URL.into(),
            log_filter: "info".into(),
        }
    }
}

/// Defaults, then the settings file, then the process environment.
pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    load_settings_from(path, |key| std::env::var(key).ok())
}

fn load_settings_from(
    path: &Path,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if path.exists() {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
        apply_file(&mut settings, &raw)
            .with_context(|| format!("invalid settings file '{}'", path.display()))?;
    } else {
        debug!(path = %path.display(), "settings file not found; using defaults");
    }

    apply_env(&mut settings, lookup);
    Ok(settings)
}

fn apply_file(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg = toml::from_str::<HashMap<String, String>>(raw)?;
    if let Some(v) = file_cfg.get("people_url") {
        settings.people_url = v.clone();
    }
    if let Some(v) = file_cfg.get("log_filter") {
        settings.log_filter = v.clone();
    }
    Ok(())
}

fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("PEOPLE_URL") {
        settings.people_url = v;
    }
    if let Some(v) = lookup("APP__PEOPLE_URL") {
        settings.people_url = v;
    }

    if let Some(v) = lookup("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
}

/// Checks that the endpoint is an absolute http(s) URL and returns it trimmed.
pub fn validate_people_url(raw: &str) -> anyhow::Result<String> {
    let raw = raw.trim();
    let url = Url::parse(raw).with_context(|| format!("invalid people url '{raw}'"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("people url '{raw}' must use http or https");
    }
    Ok(raw.to_string())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
