/* src/server/core/rust/src/search/mod.rs */

// Case-insensitive substring search over the per-locale search document.
// No ranking: hits keep the document order.

mod catalog;
mod session;


use serde::{Deserialize, Serialize};

pub use catalog::{SEARCH_DATA_FILE, SearchCatalog, load_items, parse_items};
pub use session::{LoadTicket, SearchSession};

/// Queries shorter than this (in characters) do not search.
pub const MIN_QUERY_CHARS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
  Page,
  Technology,
  Alternative,
}

impl ItemKind {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Page => "page",
      Self::Technology => "technology",
      Self::Alternative => "alternative",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
  pub id: String,
  pub title: String,
  pub description: String,
  #[serde(default)]
  pub url: Option<String>,
  #[serde(default)]
  pub keywords: Vec<String>,
  #[serde(rename = "type")]
  pub kind: ItemKind,
}

impl SearchItem {
  /// Items without a url are informational only.
  pub fn is_navigable(&self) -> bool {
    self.url.as_deref().is_some_and(|u| !u.is_empty())
  }

  fn matches(&self, needle: &str) -> bool {
    self.title.to_lowercase().contains(needle)
      || self.description.to_lowercase().contains(needle)
      || self.keywords.iter().any(|k| k.to_lowercase().contains(needle))
  }
}

/// A matching item plus whether a consumer should render it as a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
  #[serde(flatten)]
  pub item: SearchItem,
  pub navigable: bool,
}

impl From<&SearchItem> for SearchHit {
  fn from(item: &SearchItem) -> Self {
    Self { navigable: item.is_navigable(), item: item.clone() }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SearchOutcome {
  /// Query too short; prompt the user to keep typing.
  #[default]
  TypeToSearch,
  NoResults { query: String },
  Results { query: String, results: Vec<SearchHit> },
}

impl SearchOutcome {
  pub fn hits(&self) -> &[SearchHit] {
    match self {
      Self::Results { results, .. } => results,
      Self::TypeToSearch | Self::NoResults { .. } => &[],
    }
  }

  pub fn state(&self) -> &'static str {
    match self {
      Self::TypeToSearch => "type_to_search",
      Self::NoResults { .. } => "no_results",
      Self::Results { .. } => "results",
    }
  }
}

/// Filter `items` by `query`, preserving input order.
pub fn filter(query: &str, items: &[SearchItem]) -> SearchOutcome {
  if query.chars().count() < MIN_QUERY_CHARS {
    return SearchOutcome::TypeToSearch;
  }
  let needle = query.to_lowercase();
  let results: Vec<SearchHit> =
    items.iter().filter(|item| item.matches(&needle)).map(SearchHit::from).collect();
  if results.is_empty() {
    SearchOutcome::NoResults { query: query.to_string() }
  } else {
    SearchOutcome::Results { query: query.to_string(), results }
  }
}
