use serde::Deserialize;
use thiserror::Error;

use crate::render::DEFAULT_CATEGORY;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("invalid client config: {0}")]
  Parse(#[from] toml::de::Error)
}

#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Deserialize,
)]
#[serde(default)]
pub struct ApiConfig {
  /// Prefix for every endpoint; empty
  /// means same origin.
  pub base_url: String
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct ToastConfig {
  pub delay_ms:   u32,
  pub dismiss_ms: u32
}

impl Default for ToastConfig {
  fn default() -> Self {
    Self {
      delay_ms:   2_000,
      dismiss_ms: 300
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct AnimationConfig {
  pub enter_ms: u32,
  pub exit_ms:  u32
}

impl Default for AnimationConfig {
  fn default() -> Self {
    Self {
      enter_ms: 400,
      exit_ms:  250
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct ThemeConfig {
  pub storage_key: String
}

impl Default for ThemeConfig {
  fn default() -> Self {
    Self {
      storage_key: "theme".to_string()
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct ClientConfig {
  pub api:        ApiConfig,
  pub toast:      ToastConfig,
  pub animation:  AnimationConfig,
  pub theme:      ThemeConfig,
  pub categories: Vec<String>
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      api:        ApiConfig::default(),
      toast:      ToastConfig::default(),
      animation:  AnimationConfig::default(),
      theme:      ThemeConfig::default(),
      categories: default_categories()
    }
  }
}

fn default_categories() -> Vec<String> {
  [DEFAULT_CATEGORY, "Work", "Shopping", "Health", "Other"]
    .into_iter()
    .map(ToString::to_string)
    .collect()
}

impl ClientConfig {
  pub fn from_toml(
    raw: &str
  ) -> Result<Self, ConfigError> {
    let mut config: Self =
      toml::from_str(raw)?;
    config.sanitize();
    Ok(config)
  }

  /// Never fails: a broken config is
  /// logged and replaced by defaults.
  pub fn from_toml_or_default(
    raw: &str
  ) -> Self {
    match Self::from_toml(raw) {
      | Ok(config) => {
        tracing::info!(
          base_url = %config.api.base_url,
          categories = config.categories.len(),
          "loaded client config"
        );
        config
      }
      | Err(error) => {
        tracing::error!(%error, "failed to parse client config; using defaults");
        Self::default()
      }
    }
  }

  pub fn endpoint(
    &self,
    path: &str
  ) -> String {
    format!(
      "{}{path}",
      self.api.base_url
    )
  }

  fn sanitize(&mut self) {
    self.api.base_url = self
      .api
      .base_url
      .trim()
      .trim_end_matches('/')
      .to_string();

    self.categories = self
      .categories
      .iter()
      .map(|value| value.trim().to_string())
      .filter(|value| !value.is_empty())
      .collect();
    if self.categories.is_empty() {
      tracing::warn!(
        "client config listed no \
         categories; using defaults"
      );
      self.categories =
        default_categories();
    }

    if self.theme.storage_key.trim().is_empty() {
      self.theme = ThemeConfig::default();
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_full_config() {
    let config = ClientConfig::from_toml(
      r#"
        categories = ["Personal", "Work"]

        [api]
        base_url = "https://tasks.example.com/"

        [toast]
        delay_ms = 1500

        [animation]
        exit_ms = 100
      "#
    )
    .expect("parse config");

    assert_eq!(
      config.endpoint("/api/stats"),
      "https://tasks.example.com/api/stats"
    );
    assert_eq!(config.toast.delay_ms, 1500);
    assert_eq!(config.toast.dismiss_ms, 300);
    assert_eq!(config.animation.exit_ms, 100);
    assert_eq!(
      config.categories,
      vec!["Personal", "Work"]
    );
    assert_eq!(
      config.theme.storage_key,
      "theme"
    );
  }

  #[test]
  fn empty_config_uses_defaults() {
    let config = ClientConfig::from_toml("")
      .expect("parse config");
    assert_eq!(config, ClientConfig::default());
    assert_eq!(
      config.endpoint("/api/tasks"),
      "/api/tasks"
    );
  }

  #[test]
  fn broken_config_falls_back() {
    let config =
      ClientConfig::from_toml_or_default(
        "categories = 3"
      );
    assert_eq!(config, ClientConfig::default());
  }

  #[test]
  fn blank_categories_are_replaced() {
    let config = ClientConfig::from_toml(
      r#"categories = ["  ", ""]"#
    )
    .expect("parse config");
    assert_eq!(
      config.categories.first().map(String::as_str),
      Some("Personal")
    );
  }
}
