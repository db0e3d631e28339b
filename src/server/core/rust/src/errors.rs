/* src/server/core/rust/src/errors.rs */

use std::fmt;

#[derive(Debug, Clone)]
pub struct FolioError {
  code: String,
  message: String,
  status: u16,
  transient: bool,
}

fn default_status(code: &str) -> u16 {
  match code {
    "VALIDATION_ERROR" => 400,
    "NOT_FOUND" => 404,
    "ALREADY_INITIALIZED" => 500,
    "INTERNAL_ERROR" => 500,
    "SEND_FAILED" => 503,
    _ => 500,
  }
}

impl FolioError {
  pub fn new(code: impl Into<String>, message: impl Into<String>, status: u16) -> Self {
    Self { code: code.into(), message: message.into(), status, transient: false }
  }

  pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
    let code = code.into();
    let status = default_status(&code);
    Self { code, message: message.into(), status, transient: false }
  }

  pub fn validation(msg: impl Into<String>) -> Self {
    Self::with_code("VALIDATION_ERROR", msg)
  }

  pub fn not_found(msg: impl Into<String>) -> Self {
    Self::with_code("NOT_FOUND", msg)
  }

  pub fn internal(msg: impl Into<String>) -> Self {
    Self::with_code("INTERNAL_ERROR", msg)
  }

  /// Simulated delivery failure; the caller may try again later.
  pub fn send_failed(msg: impl Into<String>) -> Self {
    Self { transient: true, ..Self::with_code("SEND_FAILED", msg) }
  }

  pub fn already_initialized(what: &str) -> Self {
    Self::with_code("ALREADY_INITIALIZED", format!("{what} is already initialized"))
  }

  pub fn code(&self) -> &str {
    &self.code
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn status(&self) -> u16 {
    self.status
  }

  pub fn is_transient(&self) -> bool {
    self.transient
  }
}

impl fmt::Display for FolioError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.code, self.message)
  }
}

impl std::error::Error for FolioError {}
