//! User preferences stored as JSON in the application data directory.

use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{currency::LocaleConfig, domain::Category, errors::TrackerError};

const DEFAULT_DIR_NAME: &str = ".expense_tracker";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";
const HOME_ENV: &str = "EXPENSE_TRACKER_HOME";

const MIN_CHART_WIDTH: usize = 10;
const MAX_CHART_WIDTH: usize = 120;

/// Keys accepted by [`Config::set`], in display order.
pub const CONFIG_KEYS: &[&str] = &[
    "default_category",
    "chart_width",
    "decimal_separator",
    "grouping_separator",
    "plain_mode",
    "screen_reader_mode",
    "high_contrast_mode",
    "quiet_mode",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub locale: LocaleConfig,
    pub default_category: Category,
    pub chart_width: usize,
    pub plain_mode: bool,
    pub screen_reader_mode: bool,
    pub high_contrast_mode: bool,
    pub quiet_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: LocaleConfig::default(),
            default_category: Category::Food,
            chart_width: 40,
            plain_mode: false,
            screen_reader_mode: false,
            high_contrast_mode: false,
            quiet_mode: false,
        }
    }
}

impl Config {
    /// Updates a single setting from its textual form.
    ///
    /// On error the configuration is left unchanged.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), TrackerError> {
        let mut updated = self.clone();
        updated.apply(key, value)?;
        *self = updated;
        Ok(())
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<(), TrackerError> {
        match key {
            "default_category" => self.default_category = value.parse()?,
            "chart_width" => {
                let width: usize = value.trim().parse().map_err(|_| {
                    TrackerError::Config(format!("chart_width must be a number, got `{value}`"))
                })?;
                if !(MIN_CHART_WIDTH..=MAX_CHART_WIDTH).contains(&width) {
                    return Err(TrackerError::Config(format!(
                        "chart_width must be between {MIN_CHART_WIDTH} and {MAX_CHART_WIDTH}"
                    )));
                }
                self.chart_width = width;
            }
            "decimal_separator" => self.locale.decimal_separator = parse_separator(key, value)?,
            "grouping_separator" => self.locale.grouping_separator = parse_separator(key, value)?,
            "plain_mode" => self.plain_mode = parse_flag(key, value)?,
            "screen_reader_mode" => self.screen_reader_mode = parse_flag(key, value)?,
            "high_contrast_mode" => self.high_contrast_mode = parse_flag(key, value)?,
            "quiet_mode" => self.quiet_mode = parse_flag(key, value)?,
            other => {
                return Err(TrackerError::Config(format!(
                    "unknown setting `{other}` (expected one of: {})",
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        if self.locale.decimal_separator == self.locale.grouping_separator {
            return Err(TrackerError::Config(
                "decimal and grouping separators must differ".into(),
            ));
        }
        Ok(())
    }

    /// Settings as `(key, value)` pairs in [`CONFIG_KEYS`] order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("default_category", self.default_category.to_string()),
            ("chart_width", self.chart_width.to_string()),
            (
                "decimal_separator",
                self.locale.decimal_separator.to_string(),
            ),
            (
                "grouping_separator",
                self.locale.grouping_separator.to_string(),
            ),
            ("plain_mode", self.plain_mode.to_string()),
            ("screen_reader_mode", self.screen_reader_mode.to_string()),
            ("high_contrast_mode", self.high_contrast_mode.to_string()),
            ("quiet_mode", self.quiet_mode.to_string()),
        ]
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, TrackerError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(TrackerError::Config(format!(
            "{key} expects on/off, got `{value}`"
        ))),
    }
}

fn parse_separator(key: &str, value: &str) -> Result<char, TrackerError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if !ch.is_ascii_digit() => Ok(ch),
        _ => Err(TrackerError::Config(format!(
            "{key} must be a single non-digit character"
        ))),
    }
}

/// Returns the application data directory, defaulting to `~/.expense_tracker`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: impl Into<PathBuf>) -> Self {
        Self {
            path: base.into().join(CONFIG_FILE),
        }
    }

    /// Reads the stored configuration, falling back to defaults when no file exists.
    pub fn load(&self) -> Result<Config, TrackerError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Writes the configuration by staging a temporary file and renaming it into place.
    pub fn save(&self, config: &Config) -> Result<(), TrackerError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::info!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), TrackerError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_updates_known_keys() {
        let mut config = Config::default();
        config.set("default_category", "transport").unwrap();
        config.set("chart_width", "24").unwrap();
        config.set("quiet_mode", "on").unwrap();
        assert_eq!(config.default_category, Category::Transportation);
        assert_eq!(config.chart_width, 24);
        assert!(config.quiet_mode);
    }

    #[test]
    fn set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("chart_width", "5").is_err());
        assert!(config.set("chart_width", "wide").is_err());
        assert!(config.set("plain_mode", "maybe").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert!(config.set("decimal_separator", ",").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn entries_follow_key_order() {
        let keys: Vec<_> = Config::default().entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, CONFIG_KEYS.to_vec());
    }

    #[test]
    fn tmp_path_appends_suffix() {
        assert_eq!(
            tmp_path(Path::new("/x/config.json")),
            PathBuf::from("/x/config.json.tmp")
        );
    }
}
