/* src/server/core/rust/src/search/session.rs */

use super::{SearchItem, SearchOutcome, filter};
use crate::errors::FolioError;

/// Handle for one search-data load. Only the most recent ticket is honored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
  generation: u64,
  locale: String,
}

impl LoadTicket {
  pub fn locale(&self) -> &str {
    &self.locale
  }
}

/// State of one search dialog: visibility, the typed query, the loaded
/// data and the current outcome.
///
/// While a load is pending the data set is empty, so typing yields
/// `NoResults` instead of waiting. Closing clears the query and outcome and
/// orphans any pending load.
#[derive(Debug)]
pub struct SearchSession {
  locale: String,
  visible: bool,
  query: String,
  outcome: SearchOutcome,
  data: Vec<SearchItem>,
  loaded: bool,
  pending: bool,
  generation: u64,
}

impl SearchSession {
  pub fn new(locale: impl Into<String>) -> Self {
    Self {
      locale: locale.into(),
      visible: false,
      query: String::new(),
      outcome: SearchOutcome::TypeToSearch,
      data: Vec::new(),
      loaded: false,
      pending: false,
      generation: 0,
    }
  }

  /// Show the dialog. Returns a ticket when the caller must fetch data.
  pub fn open(&mut self) -> Option<LoadTicket> {
    self.visible = true;
    if self.loaded || self.pending {
      return None;
    }
    self.pending = true;
    Some(LoadTicket { generation: self.generation, locale: self.locale.clone() })
  }

  pub fn close(&mut self) {
    self.visible = false;
    self.query.clear();
    self.outcome = SearchOutcome::TypeToSearch;
    if self.pending {
      self.pending = false;
      self.generation += 1;
    }
  }

  /// Switch language; data for the previous locale is dropped and any
  /// pending load is orphaned. When the dialog is open the new locale's data
  /// is requested right away, otherwise on the next `open`.
  pub fn set_locale(&mut self, locale: impl Into<String>) -> Option<LoadTicket> {
    let locale = locale.into();
    if locale == self.locale {
      return None;
    }
    self.locale = locale;
    self.data.clear();
    self.loaded = false;
    self.pending = false;
    self.generation += 1;
    self.outcome = filter(&self.query, &self.data);
    if !self.visible {
      return None;
    }
    self.pending = true;
    Some(LoadTicket { generation: self.generation, locale: self.locale.clone() })
  }

  pub fn input(&mut self, query: &str) -> &SearchOutcome {
    query.clone_into(&mut self.query);
    self.outcome = filter(&self.query, &self.data);
    &self.outcome
  }

  /// Apply a finished load. Returns false when the ticket is stale.
  /// A failed load leaves the session with an empty data set.
  pub fn complete_load(
    &mut self,
    ticket: &LoadTicket,
    result: Result<Vec<SearchItem>, FolioError>,
  ) -> bool {
    if ticket.generation != self.generation || !self.pending {
      tracing::debug!(locale = %ticket.locale, "discarding stale search data");
      return false;
    }
    self.data = match result {
      Ok(items) => items,
      Err(e) => {
        tracing::warn!(locale = %ticket.locale, error = %e, "error loading search data");
        Vec::new()
      }
    };
    self.pending = false;
    self.loaded = true;
    self.outcome = filter(&self.query, &self.data);
    true
  }

  pub fn is_open(&self) -> bool {
    self.visible
  }

  pub fn is_loading(&self) -> bool {
    self.pending
  }

  pub fn locale(&self) -> &str {
    &self.locale
  }

  pub fn query(&self) -> &str {
    &self.query
  }

  pub fn outcome(&self) -> &SearchOutcome {
    &self.outcome
  }
}
