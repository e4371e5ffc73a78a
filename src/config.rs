use std::path::PathBuf;

use chrono::Locale;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants::DEFAULT_BASE_URL;
use crate::error::{DirectoryError, Result};

const API_URL_ENV: &str = "USERDIR_API_URL";
const LOCALE_ENV: &str = "USERDIR_LOCALE";
const DEFAULT_LOCALE: &str = "en_US";

#[derive(Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default)]
    pub utc: bool,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| DirectoryError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        Self::parse(&contents).map_err(|e| DirectoryError::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "userdir")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(DirectoryError::NoConfigDir)
    }

    /// API base URL with env var taking precedence over config file
    pub fn base_url(&self) -> Result<Url> {
        let raw = std::env::var(API_URL_ENV)
            .ok()
            .or_else(|| self.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        parse_base_url(&raw)
    }

    /// Locale used for the registration date column
    pub fn locale(&self) -> Result<Locale> {
        let raw = std::env::var(LOCALE_ENV)
            .ok()
            .or_else(|| self.locale.clone())
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string());

        parse_locale(&raw)
    }
}

/// Parse a base URL, making sure relative joins land under its path.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim()).map_err(|_| DirectoryError::InvalidUrl(raw.to_string()))?;

    if url.cannot_be_a_base() {
        return Err(DirectoryError::InvalidUrl(raw.to_string()));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

/// Accepts both `ko_KR` and `ko-KR` spellings.
pub fn parse_locale(raw: &str) -> Result<Locale> {
    let normalized = raw.trim().replace('-', "_");
    Locale::try_from(normalized.as_str()).map_err(|_| DirectoryError::UnknownLocale(raw.to_string()))
}
