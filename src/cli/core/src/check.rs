/* src/cli/core/src/check.rs */

// Content lint: every locale has its translation namespaces and a readable
// search document, navigable search urls stay inside their locale, and
// projects parse with unique ids.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Result, bail};
use folio_server::i18n::NAMESPACES;
use folio_server::projects::PROJECTS_FILE;
use folio_server::search::{SEARCH_DATA_FILE, parse_items};
use folio_server::{LocaleConfig, ProjectCatalog, path_locale};

use crate::config::{FolioConfig, SitePaths};
use crate::ui;

#[derive(Debug, Default)]
pub struct Report {
  pub problems: Vec<String>,
  pub warnings: Vec<String>,
}

fn check_translations(locales_dir: &Path, locales: &LocaleConfig, report: &mut Report) {
  for locale in &locales.locales {
    for ns in NAMESPACES {
      let path = locales_dir.join(locale).join(format!("{ns}.json"));
      match std::fs::read_to_string(&path) {
        Ok(content) => {
          if let Err(e) = serde_json::from_str::<serde_json::Value>(&content) {
            report.problems.push(format!("{}: {e}", path.display()));
          }
        }
        Err(_) => report.warnings.push(format!("{} missing", path.display())),
      }
    }
  }
}

fn check_search_data(locales_dir: &Path, locales: &LocaleConfig, report: &mut Report) -> usize {
  let mut total = 0;
  for locale in &locales.locales {
    let path = locales_dir.join(locale).join(SEARCH_DATA_FILE);
    let items = match std::fs::read_to_string(&path).map(|c| parse_items(&c)) {
      Ok(Ok(items)) => items,
      Ok(Err(e)) => {
        report.problems.push(format!("{}: {e}", path.display()));
        continue;
      }
      Err(_) => {
        report.warnings.push(format!("{} missing, search will be empty", path.display()));
        continue;
      }
    };

    let mut ids = HashSet::new();
    for item in &items {
      if !ids.insert(item.id.as_str()) {
        report.problems.push(format!("{}: duplicate id \"{}\"", path.display(), item.id));
      }
      let link = item.url.as_deref().filter(|u| item.is_navigable() && u.starts_with('/'));
      if let Some(url) = link {
        if path_locale(url, &locales.locales) != Some(locale.as_str()) {
          report.warnings.push(format!(
            "{}: \"{}\" links to {url} outside /{locale}",
            path.display(),
            item.id
          ));
        }
      }
    }
    total += items.len();
  }
  total
}

fn check_projects(content_dir: &Path, report: &mut Report) -> usize {
  let path = content_dir.join(PROJECTS_FILE);
  let Ok(content) = std::fs::read_to_string(&path) else {
    report.warnings.push(format!("{} missing", path.display()));
    return 0;
  };
  match ProjectCatalog::parse(&content) {
    Ok(catalog) => {
      let mut ids = HashSet::new();
      for project in catalog.all() {
        if !ids.insert(project.id.as_str()) {
          report
            .problems
            .push(format!("{}: duplicate project id \"{}\"", path.display(), project.id));
        }
      }
      catalog.all().len()
    }
    Err(e) => {
      report.problems.push(format!("{}: {e}", path.display()));
      0
    }
  }
}

pub fn check_site(config: &FolioConfig, base_dir: &Path) -> Result<Report> {
  let paths = SitePaths::new(config, base_dir);
  let locales = config.i18n.locale_config()?;
  let mut report = Report::default();

  check_translations(&paths.locales_dir, &locales, &mut report);
  let items = check_search_data(&paths.locales_dir, &locales, &mut report);
  let projects = check_projects(&paths.content_dir, &mut report);
  tracing::debug!(items, projects, "content checked");

  Ok(report)
}

pub fn run_check(config: &FolioConfig, base_dir: &Path) -> Result<()> {
  ui::banner("check");
  let report = check_site(config, base_dir)?;
  for warning in &report.warnings {
    ui::warn(warning);
  }
  for problem in &report.problems {
    ui::fail(problem);
  }
  if !report.problems.is_empty() {
    bail!("{} problem(s) found", report.problems.len());
  }
  ui::ok(&format!("content ok ({} warning(s))", report.warnings.len()));
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn site() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for locale in ["es", "en"] {
      let base = dir.path().join("site/locales").join(locale);
      std::fs::create_dir_all(&base).unwrap();
      for ns in NAMESPACES {
        std::fs::write(base.join(format!("{ns}.json")), "{}").unwrap();
      }
      std::fs::write(
        base.join(SEARCH_DATA_FILE),
        format!(
          r#"[{{"id":"about","title":"About","description":"d",
            "url":"/{locale}/about","type":"page"}}]"#
        ),
      )
      .unwrap();
    }
    std::fs::write(
      dir.path().join("site/projects.json"),
      r#"[{"id":"shop","type":"professional","title":"Shop"}]"#,
    )
    .unwrap();
    dir
  }

  #[test]
  fn clean_site_passes() {
    let dir = site();
    let report = check_site(&FolioConfig::default(), dir.path()).unwrap();
    assert!(report.problems.is_empty(), "{:?}", report.problems);
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);
  }

  #[test]
  fn cross_locale_link_warns() {
    let dir = site();
    std::fs::write(
      dir.path().join("site/locales/en").join(SEARCH_DATA_FILE),
      r#"[{"id":"about","title":"About","description":"d","url":"/es/about","type":"page"}]"#,
    )
    .unwrap();
    let report = check_site(&FolioConfig::default(), dir.path()).unwrap();
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("outside /en"));
  }

  #[test]
  fn duplicate_and_broken_files_are_problems() {
    let dir = site();
    std::fs::write(
      dir.path().join("site/projects.json"),
      r#"[{"id":"a","type":"p","title":"A"},{"id":"a","type":"p","title":"B"}]"#,
    )
    .unwrap();
    std::fs::write(dir.path().join("site/locales/es/common.json"), "{").unwrap();
    let report = check_site(&FolioConfig::default(), dir.path()).unwrap();
    assert_eq!(report.problems.len(), 2);
  }

  #[test]
  fn missing_files_only_warn() {
    let dir = tempfile::tempdir().unwrap();
    let report = check_site(&FolioConfig::default(), dir.path()).unwrap();
    assert!(report.problems.is_empty());
    // every namespace and search document per locale, plus projects.json
    assert_eq!(report.warnings.len(), 2 * (NAMESPACES.len() + 1) + 1);
  }
}
