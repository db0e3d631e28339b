/* src/server/core/rust/src/lib.rs */

pub mod contact;
pub mod errors;
pub mod i18n;
pub mod locale;
pub mod prefs;
pub mod projects;
pub mod render;
pub mod resolve;
pub mod routing;
pub mod search;
pub mod server;

// Re-exports for ergonomic use
pub use contact::{
  ContactForm, ContactSettings, ContactSimulator, FailureSource, FixedFailure, FormStatus,
  StatusTracker,
};
pub use errors::FolioError;
pub use i18n::Translator;
pub use locale::{Direction, LocaleConfig};
pub use prefs::{CookieStore, MemoryStore, PreferenceStore, Theme};
pub use projects::{Project, ProjectCatalog};
pub use resolve::{
  LANGUAGE_COOKIE, ResolveData, ResolveStrategy, default_strategies, from_accept_language,
  from_cookie, from_url_prefix, resolve_chain,
};
pub use routing::{Routing, path_locale, route_path, switch_locale_path};
pub use search::{
  ItemKind, LoadTicket, SearchCatalog, SearchHit, SearchItem, SearchOutcome, SearchSession,
  filter,
};
pub use server::{FolioParts, FolioServer};
