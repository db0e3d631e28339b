/* src/server/core/rust/src/locale.rs */

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::FolioError;

/// Text direction written into `<html dir="...">`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
  #[default]
  Ltr,
  Rtl,
}

impl Direction {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Ltr => "ltr",
      Self::Rtl => "rtl",
    }
  }
}

impl fmt::Display for Direction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Supported locales plus the fallback used when a request names none.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
  pub locales: Vec<String>,
  pub fallback: String,
  pub dirs: HashMap<String, Direction>,
}

impl LocaleConfig {
  /// Build and validate. Locales without an explicit direction are left-to-right.
  pub fn new(
    locales: Vec<String>,
    fallback: impl Into<String>,
    dirs: HashMap<String, Direction>,
  ) -> Result<Self, FolioError> {
    let config = Self { locales, fallback: fallback.into(), dirs };
    config.validate()?;
    Ok(config)
  }

  pub fn validate(&self) -> Result<(), FolioError> {
    if self.locales.is_empty() {
      return Err(FolioError::validation("locales must not be empty"));
    }
    if let Some(bad) = self.locales.iter().find(|l| l.is_empty() || l.contains('/')) {
      return Err(FolioError::validation(format!(
        "locale \"{bad}\" must be a single non-empty path segment"
      )));
    }
    if !self.is_supported(&self.fallback) {
      return Err(FolioError::validation(format!(
        "fallback \"{}\" is not in locales {:?}",
        self.fallback, self.locales
      )));
    }
    Ok(())
  }

  pub fn is_supported(&self, code: &str) -> bool {
    self.locales.iter().any(|l| l == code)
  }

  /// Direction for `lng`; absent means the fallback, unknown means ltr.
  pub fn dir(&self, lng: Option<&str>) -> Direction {
    let resolved = lng.unwrap_or(&self.fallback);
    self.dirs.get(resolved).copied().unwrap_or_default()
  }
}

impl Default for LocaleConfig {
  fn default() -> Self {
    let dirs =
      HashMap::from([("es".to_string(), Direction::Ltr), ("en".to_string(), Direction::Ltr)]);
    Self { locales: vec!["es".into(), "en".into()], fallback: "es".into(), dirs }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_config_is_valid() {
    let config = LocaleConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.fallback, "es");
    assert!(config.is_supported("en"));
    assert!(!config.is_supported("fr"));
  }

  #[test]
  fn rejects_fallback_outside_locales() {
    let err = LocaleConfig::new(vec!["en".into()], "es", HashMap::new()).unwrap_err();
    assert_eq!(err.code(), "VALIDATION_ERROR");
  }

  #[test]
  fn rejects_empty_locales() {
    assert!(LocaleConfig::new(vec![], "es", HashMap::new()).is_err());
  }

  #[test]
  fn rejects_multi_segment_locale() {
    assert!(LocaleConfig::new(vec!["es/mx".into()], "es/mx", HashMap::new()).is_err());
  }

  #[test]
  fn dir_uses_fallback_when_absent() {
    let dirs = HashMap::from([("ar".to_string(), Direction::Rtl)]);
    let config = LocaleConfig::new(vec!["ar".into(), "en".into()], "ar", dirs).unwrap();
    assert_eq!(config.dir(None), Direction::Rtl);
    assert_eq!(config.dir(Some("en")), Direction::Ltr);
    assert_eq!(config.dir(Some("zz")), Direction::Ltr);
  }

  #[test]
  fn direction_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Direction::Rtl).unwrap(), "\"rtl\"");
    assert_eq!(Direction::Ltr.to_string(), "ltr");
  }
}
