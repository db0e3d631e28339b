/* src/cli/core/src/serve.rs */

use std::path::Path;

use anyhow::{Context, Result};
use folio_server::i18n::{self, NAMESPACES, Translator};
use folio_server::{ContactSimulator, FolioServer, ProjectCatalog, SearchCatalog};
use folio_server_axum::IntoAxumRouter;

use crate::config::{FolioConfig, SitePaths};
use crate::ui;

/// Assemble the server from config and on-disk content.
pub fn build_server(config: &FolioConfig, base_dir: &Path) -> Result<FolioServer> {
  let paths = SitePaths::new(config, base_dir);
  let locales = config.i18n.locale_config()?;

  let translator = Translator::load(&paths.locales_dir, &locales, NAMESPACES);
  let translator = i18n::init(translator).context("failed to install translator")?;
  let search = SearchCatalog::load(&paths.locales_dir, &locales.locales);
  let projects = ProjectCatalog::load(&paths.content_dir);

  ui::ok(&format!("{} locales, fallback {}", locales.locales.len(), locales.fallback));
  ui::ok(&format!("{} projects", projects.all().len()));

  let mut server = FolioServer::new(locales, translator)
    .site_name(config.site.name.clone())
    .passthrough(config.server.passthrough.clone())
    .search_catalog(search)
    .projects(projects)
    .contact(ContactSimulator::new(config.contact.settings()));
  if let Some(dir) = paths.static_dir {
    ui::ok(&format!("static files from {}", dir.display()));
    server = server.static_dir(dir);
  }
  Ok(server)
}

pub async fn run_serve(config: &FolioConfig, base_dir: &Path) -> Result<()> {
  ui::banner("serve");
  let server = build_server(config, base_dir)?;
  let addr = config.server.addr();
  ui::arrow(&format!("http://{addr}"));
  ui::blank();
  server.serve(&addr).await.map_err(|e| anyhow::anyhow!("server on {addr} failed: {e}"))
}
