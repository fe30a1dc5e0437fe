use anyhow::{
  Context,
  anyhow
};
use serde::Deserialize;
use tracing::{
  Level,
  error,
  info
};

use crate::persist::DEFAULT_STORAGE_KEY;
use crate::query::TaskFilter;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
  pub storage: StorageConfig,
  pub view:    ViewConfig,
  pub logging: LoggingConfig
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
  pub key: String
}

impl Default for StorageConfig {
  fn default() -> Self {
    Self {
      key: DEFAULT_STORAGE_KEY
        .to_string()
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
  pub default_filter: TaskFilter
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
  pub level: String
}

impl Default for LoggingConfig {
  fn default() -> Self {
    Self {
      level: "info".to_string()
    }
  }
}

impl LoggingConfig {
  /// Unknown level names fall back to
  /// `INFO`.
  pub fn max_level(&self) -> Level {
    self
      .level
      .trim()
      .parse::<Level>()
      .unwrap_or(Level::INFO)
  }
}

impl AppConfig {
  pub fn parse(
    raw: &str
  ) -> anyhow::Result<Self> {
    let cfg =
      toml::from_str::<AppConfig>(raw)
        .context(
          "failed to parse taskpad \
           config"
        )?;
    if cfg.storage.key.trim().is_empty()
    {
      return Err(anyhow!(
        "storage.key cannot be empty"
      ));
    }
    Ok(cfg)
  }

  /// Like [`AppConfig::parse`] but
  /// never fails: problems are logged
  /// and the defaults used instead.
  pub fn parse_or_default(
    raw: &str
  ) -> Self {
    match Self::parse(raw) {
      | Ok(cfg) => {
        info!(
          key = %cfg.storage.key,
          filter = %cfg.view.default_filter,
          level = %cfg.logging.level,
          "loaded taskpad config"
        );
        cfg
      }
      | Err(err) => {
        error!(error = %format!("{err:#}"), "invalid taskpad config; using defaults");
        Self::default()
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use tracing::Level;

  use super::AppConfig;
  use crate::query::TaskFilter;

  #[test]
  fn empty_document_uses_defaults() {
    let cfg = AppConfig::parse("").unwrap();
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.storage.key, "tasks.v1");
    assert_eq!(
      cfg.view.default_filter,
      TaskFilter::All
    );
    assert_eq!(
      cfg.logging.max_level(),
      Level::INFO
    );
  }

  #[test]
  fn reads_every_section() {
    let cfg = AppConfig::parse(
      r#"
[storage]
key = "tasks.v2"

[view]
default_filter = "active"

[logging]
level = "debug"
"#
    )
    .unwrap();

    assert_eq!(cfg.storage.key, "tasks.v2");
    assert_eq!(
      cfg.view.default_filter,
      TaskFilter::Active
    );
    assert_eq!(
      cfg.logging.max_level(),
      Level::DEBUG
    );
  }

  #[test]
  fn bad_values_fall_back() {
    assert!(
      AppConfig::parse(
        "[storage]\nkey = \"  \""
      )
      .is_err()
    );
    assert!(
      AppConfig::parse(
        "[view]\ndefault_filter = \
         \"someday\""
      )
      .is_err()
    );
    assert_eq!(
      AppConfig::parse_or_default(
        "not = [valid"
      ),
      AppConfig::default()
    );

    let cfg = AppConfig::parse(
      "[logging]\nlevel = \"chatty\""
    )
    .unwrap();
    assert_eq!(
      cfg.logging.max_level(),
      Level::INFO
    );
  }
}
