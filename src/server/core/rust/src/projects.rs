/* src/server/core/rust/src/projects.rs */

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::FolioError;

pub const PROJECTS_FILE: &str = "projects.json";

/// Piece of a long description: plain text, emphasis, or a technology name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionSegment {
  #[serde(rename = "type")]
  pub kind: String,
  pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
  pub id: String,
  #[serde(rename = "type")]
  pub kind: String,
  pub title: String,
  #[serde(default)]
  pub technologies: Vec<String>,
  #[serde(default)]
  pub images: Vec<String>,
  #[serde(default)]
  pub project_link: String,
  #[serde(default)]
  pub detail_images: Vec<String>,
  #[serde(default)]
  pub long_description: Vec<DescriptionSegment>,
}

impl Project {
  /// Detail gallery, or the card images when no dedicated set exists.
  pub fn gallery(&self) -> &[String] {
    if self.detail_images.is_empty() { &self.images } else { &self.detail_images }
  }
}

#[derive(Debug, Clone, Default)]
pub struct ProjectCatalog {
  projects: Vec<Project>,
}

impl ProjectCatalog {
  pub fn new(projects: Vec<Project>) -> Self {
    Self { projects }
  }

  pub fn parse(content: &str) -> Result<Self, FolioError> {
    let projects: Vec<Project> =
      serde_json::from_str(content).map_err(|e| FolioError::validation(e.to_string()))?;
    Ok(Self { projects })
  }

  /// Missing or malformed file loads as an empty catalog.
  pub fn load(content_dir: &Path) -> Self {
    let path = content_dir.join(PROJECTS_FILE);
    let parsed = std::fs::read_to_string(&path)
      .map_err(|e| FolioError::not_found(e.to_string()))
      .and_then(|c| Self::parse(&c));
    match parsed {
      Ok(catalog) => catalog,
      Err(e) => {
        tracing::warn!(path = %path.display(), error = %e, "projects unavailable");
        Self::default()
      }
    }
  }

  pub fn all(&self) -> &[Project] {
    &self.projects
  }

  pub fn find(&self, id: &str) -> Option<&Project> {
    self.projects.iter().find(|p| p.id == id)
  }
}
