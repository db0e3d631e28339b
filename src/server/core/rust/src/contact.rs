/* src/server/core/rust/src/contact.rs */

// Simulated contact-form delivery. Nothing is sent anywhere: after a fixed
// delay the submission succeeds or fails with a fixed probability so the
// page can demonstrate every form state.

use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::FolioError;

fn email_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email pattern"))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactForm {
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub email: String,
  #[serde(default)]
  pub message: String,
}

/// Translation keys for each invalid field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<&'static str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email: Option<&'static str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message: Option<&'static str>,
}

impl FieldErrors {
  pub fn is_empty(&self) -> bool {
    self.name.is_none() && self.email.is_none() && self.message.is_none()
  }
}

impl ContactForm {
  pub fn validate(&self) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    if self.name.trim().is_empty() {
      errors.name = Some("contact.validation.name_required");
    }
    if self.email.trim().is_empty() {
      errors.email = Some("contact.validation.email_required");
    } else if !email_re().is_match(&self.email) {
      errors.email = Some("contact.validation.email_invalid");
    }
    if self.message.trim().is_empty() {
      errors.message = Some("contact.validation.message_required");
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
  Idle,
  Loading,
  Success,
  Error,
}

impl FormStatus {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Idle => "idle",
      Self::Loading => "loading",
      Self::Success => "success",
      Self::Error => "error",
    }
  }
}

/// Decides whether a simulated delivery fails.
pub trait FailureSource: Send + Sync {
  fn should_fail(&self, rate: f64) -> bool;
}

pub struct RandomFailure;

impl FailureSource for RandomFailure {
  fn should_fail(&self, rate: f64) -> bool {
    if rate.is_nan() {
      return false;
    }
    rand::thread_rng().gen_bool(rate.clamp(0.0, 1.0))
  }
}

/// Always the same answer; for tests and demos.
pub struct FixedFailure(pub bool);

impl FailureSource for FixedFailure {
  fn should_fail(&self, _rate: f64) -> bool {
    self.0
  }
}

#[derive(Debug, Clone, Copy)]
pub struct ContactSettings {
  pub failure_rate: f64,
  pub delay: Duration,
  pub revert_after: Duration,
}

impl Default for ContactSettings {
  fn default() -> Self {
    Self {
      failure_rate: 0.1,
      delay: Duration::from_millis(1500),
      revert_after: Duration::from_millis(5000),
    }
  }
}

#[derive(Clone)]
pub struct ContactSimulator {
  settings: ContactSettings,
  source: Arc<dyn FailureSource>,
}

impl ContactSimulator {
  pub fn new(settings: ContactSettings) -> Self {
    Self { settings, source: Arc::new(RandomFailure) }
  }

  pub fn with_source(settings: ContactSettings, source: Arc<dyn FailureSource>) -> Self {
    Self { settings, source }
  }

  pub fn settings(&self) -> &ContactSettings {
    &self.settings
  }

  pub async fn send(&self, form: &ContactForm) -> Result<(), FolioError> {
    form.validate().map_err(|errors| {
      let fields: Vec<&str> = [
        errors.name.map(|_| "name"),
        errors.email.map(|_| "email"),
        errors.message.map(|_| "message"),
      ]
      .into_iter()
      .flatten()
      .collect();
      FolioError::validation(format!("invalid fields: {}", fields.join(", ")))
    })?;

    tracing::debug!(email = %form.email, "simulating contact delivery");
    tokio::time::sleep(self.settings.delay).await;

    if self.source.should_fail(self.settings.failure_rate) {
      tracing::warn!(email = %form.email, "simulated contact delivery failed");
      return Err(FolioError::send_failed("Failed to send email. Please try again later."));
    }
    tracing::info!(email = %form.email, "simulated contact delivery succeeded");
    Ok(())
  }
}

/// Form status with automatic return to `Idle` once a result has been
/// shown for `revert_after`.
#[derive(Debug, Clone)]
pub struct StatusTracker {
  status: FormStatus,
  settled_at: Option<Instant>,
  revert_after: Duration,
}

impl StatusTracker {
  pub fn new(revert_after: Duration) -> Self {
    Self { status: FormStatus::Idle, settled_at: None, revert_after }
  }

  pub fn begin(&mut self) {
    self.status = FormStatus::Loading;
    self.settled_at = None;
  }

  pub fn settle(&mut self, result: &Result<(), FolioError>, now: Instant) {
    self.status = if result.is_ok() { FormStatus::Success } else { FormStatus::Error };
    self.settled_at = Some(now);
  }

  pub fn status_at(&self, now: Instant) -> FormStatus {
    match self.settled_at {
      Some(at) if now.saturating_duration_since(at) >= self.revert_after => FormStatus::Idle,
      _ => self.status,
    }
  }
}
