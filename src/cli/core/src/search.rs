/* src/cli/core/src/search.rs */

use std::path::PathBuf;

use anyhow::Result;
use folio_server::search::{SEARCH_DATA_FILE, parse_items};
use folio_server::{FolioError, SearchItem, SearchOutcome, SearchSession};

use crate::ui;

/// Where the search document comes from.
pub enum Source {
  /// A running server; fetches `<url>/<locale>/search-data.json`.
  Remote(String),
  /// `<locales_dir>/<locale>/search-data.json` on disk.
  Local(PathBuf),
}

async fn fetch_remote(base_url: &str, locale: &str) -> Result<Vec<SearchItem>, FolioError> {
  let url = format!("{}/{locale}/{SEARCH_DATA_FILE}", base_url.trim_end_matches('/'));
  tracing::debug!(%url, "fetching search data");
  let resp = reqwest::get(&url).await.map_err(|e| FolioError::internal(e.to_string()))?;
  let status = resp.status();
  if !status.is_success() {
    return Err(FolioError::internal(format!("{url} returned HTTP {status}")));
  }
  resp.json().await.map_err(|e| FolioError::validation(e.to_string()))
}

fn read_local(locales_dir: &std::path::Path, locale: &str) -> Result<Vec<SearchItem>, FolioError> {
  let path = locales_dir.join(locale).join(SEARCH_DATA_FILE);
  let content = std::fs::read_to_string(&path)
    .map_err(|e| FolioError::not_found(format!("{}: {e}", path.display())))?;
  parse_items(&content)
}

async fn load(source: &Source, locale: &str) -> Result<Vec<SearchItem>, FolioError> {
  match source {
    Source::Remote(url) => fetch_remote(url, locale).await,
    Source::Local(dir) => read_local(dir, locale),
  }
}

/// Run one query through a search session. Load failures degrade to an
/// empty data set, same as the browser widget.
pub async fn search_once(source: &Source, locale: &str, query: &str) -> SearchOutcome {
  let mut session = SearchSession::new(locale);
  if let Some(ticket) = session.open() {
    let result = load(source, ticket.locale()).await;
    if let Err(ref e) = result {
      ui::warn(&format!("search data unavailable: {e}"));
    }
    session.complete_load(&ticket, result);
  }
  session.input(query).clone()
}

pub async fn run_search(source: &Source, locale: &str, query: &str, json: bool) -> Result<()> {
  let outcome = search_once(source, locale, query).await;

  if json {
    let out = serde_json::to_string_pretty(&outcome)?;
    println!("{out}");
    return Ok(());
  }

  match &outcome {
    SearchOutcome::TypeToSearch => ui::dim("type at least 2 characters to search"),
    SearchOutcome::NoResults { query } => ui::fail(&format!("no results for \"{query}\"")),
    SearchOutcome::Results { results, .. } => {
      for hit in results {
        let link = hit.navigable.then_some(hit.item.url.as_deref()).flatten();
        ui::hit(&hit.item.title, hit.item.kind.as_str(), link);
        ui::detail(&hit.item.description);
      }
      ui::blank();
      ui::ok(&format!("{} result(s) in {locale}", results.len()));
    }
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn write_data(dir: &std::path::Path, locale: &str, body: &str) {
    std::fs::create_dir_all(dir.join(locale)).unwrap();
    std::fs::write(dir.join(locale).join(SEARCH_DATA_FILE), body).unwrap();
  }

  #[tokio::test]
  async fn local_search_finds_items() {
    let dir = tempfile::tempdir().unwrap();
    write_data(
      dir.path(),
      "en",
      r#"[{"id":"rust","title":"Rust","description":"Systems language","type":"technology"}]"#,
    );
    let source = Source::Local(dir.path().to_path_buf());
    let outcome = search_once(&source, "en", "syst").await;
    assert_eq!(outcome.state(), "results");
    assert!(!outcome.hits()[0].navigable);
  }

  #[tokio::test]
  async fn missing_data_is_no_results() {
    let dir = tempfile::tempdir().unwrap();
    let source = Source::Local(dir.path().to_path_buf());
    let outcome = search_once(&source, "es", "rust").await;
    assert_eq!(outcome, SearchOutcome::NoResults { query: "rust".into() });
  }

  #[tokio::test]
  async fn short_query_prompts() {
    let dir = tempfile::tempdir().unwrap();
    write_data(dir.path(), "es", "[]");
    let source = Source::Local(dir.path().to_path_buf());
    assert_eq!(search_once(&source, "es", "r").await, SearchOutcome::TypeToSearch);
  }
}
