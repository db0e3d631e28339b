/* src/cli/core/src/config/tests/parsing.rs */

use std::time::Duration;

use super::*;

#[test]
fn parse_empty_config() {
  let config: FolioConfig = toml::from_str("").unwrap();
  assert_eq!(config.site.name, "folio");
  assert_eq!(config.server.port, 3000);
  assert_eq!(config.server.addr(), "127.0.0.1:3000");
  assert_eq!(config.server.passthrough, ["/api", "/_folio/static", "/favicon.ico"]);
  assert_eq!(config.i18n.locales, ["es", "en"]);
  assert_eq!(config.i18n.fallback, "es");
  assert_eq!(config.i18n.locales_dir, "site/locales");
  assert_eq!(config.content.dir, "site");
  assert_eq!(config.logging.level, "info");
  assert!(config.validate().is_ok());
}

#[test]
fn parse_full_config() {
  let toml_str = r#"
[site]
name = "Ana Dev"

[server]
host = "0.0.0.0"
port = 8080
static_dir = "public"
passthrough = ["/api", "/healthz"]

[i18n]
locales = ["en", "ar"]
fallback = "en"
locales_dir = "translations"
rtl = ["ar"]

[content]
dir = "data"

[contact]
failure_rate = 0.25
delay_ms = 10
revert_after_ms = 20

[logging]
level = "folio=debug,tower_http=info"
"#;
  let config: FolioConfig = toml::from_str(toml_str).unwrap();
  assert_eq!(config.site.name, "Ana Dev");
  assert_eq!(config.server.addr(), "0.0.0.0:8080");
  assert_eq!(config.server.static_dir.as_deref(), Some("public"));
  assert_eq!(config.server.passthrough, ["/api", "/healthz"]);
  assert_eq!(config.content.dir, "data");
  assert_eq!(config.logging.level, "folio=debug,tower_http=info");

  let settings = config.contact.settings();
  assert!((settings.failure_rate - 0.25).abs() < f64::EPSILON);
  assert_eq!(settings.delay, Duration::from_millis(10));
  assert_eq!(settings.revert_after, Duration::from_millis(20));

  let locales = config.i18n.locale_config().unwrap();
  assert_eq!(locales.dir(Some("ar")), folio_server::Direction::Rtl);
  assert_eq!(locales.dir(Some("en")), folio_server::Direction::Ltr);
}

#[test]
fn contact_defaults() {
  let settings = FolioConfig::default().contact.settings();
  assert!((settings.failure_rate - 0.1).abs() < f64::EPSILON);
  assert_eq!(settings.delay, Duration::from_millis(1500));
  assert_eq!(settings.revert_after, Duration::from_millis(5000));
}

#[test]
fn site_paths_resolve_against_base() {
  let config: FolioConfig = toml::from_str("[server]\nstatic_dir = \"public\"").unwrap();
  let paths = SitePaths::new(&config, std::path::Path::new("/srv/folio"));
  assert_eq!(paths.locales_dir, std::path::Path::new("/srv/folio/site/locales"));
  assert_eq!(paths.content_dir, std::path::Path::new("/srv/folio/site"));
  assert_eq!(paths.static_dir.as_deref(), Some(std::path::Path::new("/srv/folio/public")));
}
