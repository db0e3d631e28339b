/* src/server/adapter/axum/src/handler/view.rs */

// HTML fragments slotted into the page layout. Every piece of translated or
// user-supplied text goes through `escape_html` before it lands here.

use std::fmt::Write;

use folio_server::contact::{FieldErrors, FormStatus};
use folio_server::i18n::Fixed;
use folio_server::render::escape_html;
use folio_server::{ContactForm, Project, SearchHit, SearchOutcome, switch_locale_path};
use serde_json::Value;

const NAV: &[(&str, &str)] = &[
  ("", "header.home"),
  ("/about", "header.about"),
  ("/professional", "header.professional"),
  ("/contact", "header.contact"),
];

pub(super) fn nav(t: &Fixed<'_>, locale: &str, current: &str) -> String {
  let mut out = String::new();
  for (suffix, key) in NAV {
    let href = format!("/{locale}{suffix}");
    let current_attr = if href == current { r#" aria-current="page""# } else { "" };
    let _ = write!(out, r#"<a href="{href}"{current_attr}>{}</a>"#, escape_html(&t.t(key)));
  }
  out
}

pub(super) fn footer_nav(t: &Fixed<'_>, locale: &str) -> String {
  format!(
    r#"<a href="/{locale}/about">{}</a><a href="/{locale}/contact">{}</a>"#,
    escape_html(&t.t("footer.about_link")),
    escape_html(&t.t("footer.contact_link")),
  )
}

/// One entry per locale, each pointing at the current page in that locale.
pub(super) fn language_switcher(locales: &[String], path: &str, current: &str) -> String {
  let mut out = String::new();
  for locale in locales {
    let href = escape_html(&switch_locale_path(path, locales, locale));
    let active = if locale == current { r#" class="active""# } else { "" };
    let _ = write!(
      out,
      r#"<li><a href="{href}" hreflang="{locale}" lang="{locale}"{active}>{}</a></li>"#,
      locale.to_uppercase()
    );
  }
  out
}

pub(super) fn home(t: &Fixed<'_>, locale: &str) -> String {
  let highlights: String = [
    "home.professional_projects",
    "home.open_source_contributions",
    "home.emerging_tech_experiments",
    "home.scalable_architectures",
  ]
  .iter()
  .map(|key| format!("<li>{}</li>", escape_html(&t.t(key))))
  .collect();

  format!(
    r#"<section class="hero">
<p class="eyebrow">{welcome}</p>
<h1>{name}</h1>
<p class="role">{engineer} &middot; {fullstack}</p>
</section>
<section class="intro">
<h2>{experience}</h2>
<p>{intro}</p>
<ul>{highlights}</ul>
<a class="button" href="/{locale}/professional">{cta}</a>
</section>"#,
    welcome = escape_html(&t.t("home.welcome_title")),
    name = escape_html(&t.t("home.my_name")),
    engineer = escape_html(&t.t("home.software_engineer")),
    fullstack = escape_html(&t.t("home.full_stack_dev")),
    experience = escape_html(&t.t("home.projects_experience_title")),
    intro = escape_html(&t.t("home.projects_intro")),
    cta = escape_html(&t.t("home.view_projects_button")),
  )
}

fn string_list(value: Option<&Value>) -> String {
  let Some(Value::Array(items)) = value else {
    return String::new();
  };
  items
    .iter()
    .filter_map(Value::as_str)
    .map(|s| format!("<li>{}</li>", escape_html(s)))
    .collect()
}

fn field<'a>(entry: &'a Value, key: &str) -> &'a str {
  entry.get(key).and_then(Value::as_str).unwrap_or_default()
}

pub(super) fn about(t: &Fixed<'_>) -> String {
  let mut experience = String::new();
  if let Some(Value::Array(jobs)) = t.value("aboutMe.experience") {
    for job in jobs {
      let _ = write!(
        experience,
        r#"<article><h4>{} <small>({})</small></h4><p class="role">{}</p><ul>{}</ul></article>"#,
        escape_html(field(job, "company")),
        escape_html(field(job, "dates")),
        escape_html(field(job, "role")),
        string_list(job.get("duties")),
      );
    }
  }

  let email = escape_html(&t.t("aboutMe.emailAddress"));
  format!(
    r#"<h1>{title}</h1>
<section><h2>{summary_heading}</h2><p>{summary}</p></section>
<section><h3>{tech_heading}</h3><ul class="chips">{skills}</ul></section>
<section><h3>{soft_heading}</h3><ul class="chips">{soft}</ul></section>
<section><h3>{contact_heading}</h3>
<p><strong>{phone}:</strong> {phone_number}</p>
<p><strong>{email_label}:</strong> <a href="mailto:{email}">{email}</a></p>
<p><strong>{location}:</strong> {location_value}</p>
<p><a href="{github}" rel="noopener">{github_user}</a></p>
</section>
<section><h2>{experience_heading}</h2>{experience}</section>
<section><h2>{education_heading}</h2><p>{degree} <small>({degree_dates})</small></p>
<h3>{courses_heading}</h3><ul>{courses}</ul></section>"#,
    title = escape_html(&t.t("aboutMe.title")),
    summary_heading = escape_html(&t.t("aboutMe.summaryHeading")),
    summary = escape_html(&t.t("aboutMe.summary")),
    tech_heading = escape_html(&t.t("aboutMe.techSkillsHeading")),
    skills = string_list(t.value("aboutMe.skills")),
    soft_heading = escape_html(&t.t("aboutMe.softSkillsHeading")),
    soft = string_list(t.value("aboutMe.softSkills")),
    contact_heading = escape_html(&t.t("aboutMe.contactHeading")),
    phone = escape_html(&t.t("aboutMe.phone")),
    phone_number = escape_html(&t.t("aboutMe.phoneNumber")),
    email_label = escape_html(&t.t("aboutMe.email")),
    location = escape_html(&t.t("aboutMe.location")),
    location_value = escape_html(&t.t("aboutMe.locationValue")),
    github = escape_html(&t.t("aboutMe.githubLink")),
    github_user = escape_html(&t.t("aboutMe.githubUser")),
    experience_heading = escape_html(&t.t("aboutMe.experienceHeading")),
    education_heading = escape_html(&t.t("aboutMe.educationHeading")),
    degree = escape_html(&t.t("aboutMe.universityDegree")),
    degree_dates = escape_html(&t.t("aboutMe.universityDates")),
    courses_heading = escape_html(&t.t("aboutMe.coursesHeading")),
    courses = string_list(t.value("aboutMe.courses")),
  )
}

/// Contact page state for one render.
pub(super) struct ContactView<'a> {
  pub form: &'a ContactForm,
  pub errors: &'a FieldErrors,
  pub status: FormStatus,
  pub revert_after_ms: u64,
}

fn contact_field(
  t: &Fixed<'_>,
  name: &str,
  value: &str,
  error: Option<&str>,
  textarea: bool,
) -> String {
  let label = escape_html(&t.t(&format!("contact.form.{name}_label")));
  let placeholder = escape_html(&t.t(&format!("contact.form.{name}_placeholder")));
  let value = escape_html(value);
  let input = if textarea {
    format!(concat!(
      r#"<textarea id="{name}" name="{name}" rows="5" placeholder="{placeholder}">"#,
      r#"{value}</textarea>"#,
    ), name = name, placeholder = placeholder, value = value)
  } else {
    let kind = if name == "email" { "email" } else { "text" };
    format!(concat!(
      r#"<input id="{name}" type="{kind}" name="{name}" value="{value}" "#,
      r#"placeholder="{placeholder}" />"#,
    ), name = name, kind = kind, value = value, placeholder = placeholder)
  };
  let error = error
    .map(|key| format!(r#"<p class="field-error">{}</p>"#, escape_html(&t.t(key))))
    .unwrap_or_default();
  format!(r#"<div class="field"><label for="{name}">{label}</label>{input}{error}</div>"#)
}

pub(super) fn contact(t: &Fixed<'_>, locale: &str, view: &ContactView<'_>) -> String {
  let banner = match view.status {
    FormStatus::Idle => String::new(),
    FormStatus::Loading => {
      format!(r#"<p class="status loading">{}</p>"#, escape_html(&t.t("contact.form.sending")))
    }
    FormStatus::Success => format!(
      r#"<p class="status success" role="status" data-revert-after-ms="{}">{}</p>"#,
      view.revert_after_ms,
      escape_html(&t.t("contact.form.success_message"))
    ),
    FormStatus::Error => format!(
      r#"<p class="status error" role="alert" data-revert-after-ms="{}">{}</p>"#,
      view.revert_after_ms,
      escape_html(&t.t("contact.form.error_message"))
    ),
  };

  format!(
    r#"<h1>{title}</h1>
<p>{description}</p>
{banner}
<form method="post" action="/{locale}/contact" data-status="{status}" novalidate>
{name}{email}{message}
<button type="submit">{submit}</button>
</form>"#,
    title = escape_html(&t.t("contact.title")),
    description = escape_html(&t.t("contact.description")),
    status = view.status.as_str(),
    name = contact_field(t, "name", &view.form.name, view.errors.name, false),
    email = contact_field(t, "email", &view.form.email, view.errors.email, false),
    message = contact_field(t, "message", &view.form.message, view.errors.message, true),
    submit = escape_html(&t.t("contact.form.submit_button")),
  )
}

fn tech_list(technologies: &[String]) -> String {
  technologies.iter().map(|tech| format!("<li>{}</li>", escape_html(tech))).collect()
}

pub(super) fn projects(t: &Fixed<'_>, locale: &str, projects: &[Project]) -> String {
  let mut cards = String::new();
  for project in projects {
    let image = project
      .images
      .first()
      .map(|src| {
        format!(
          r#"<img src="{}" alt="{}" loading="lazy" />"#,
          escape_html(src),
          escape_html(&project.title)
        )
      })
      .unwrap_or_default();
    let live = if project.project_link.is_empty() {
      String::new()
    } else {
      format!(
        r#"<a href="{}" target="_blank" rel="noopener">{}</a>"#,
        escape_html(&project.project_link),
        escape_html(&t.t("projects.view_live_button"))
      )
    };
    let _ = write!(
      cards,
      concat!(
        r#"<article class="project-card" id="{id}">{image}<h2>{title}</h2>"#,
        r#"<ul class="chips">{tech}</ul>"#,
        r#"<a href="/{locale}/professional/{id}">{details}</a>{live}</article>"#,
      ),
      id = escape_html(&project.id),
      title = escape_html(&project.title),
      tech = tech_list(&project.technologies),
      details = escape_html(&t.t("projects.view_details_button")),
      image = image,
      locale = locale,
      live = live,
    );
  }
  format!(
    r#"<h1>{}</h1><div class="project-grid">{cards}</div>"#,
    escape_html(&t.t("projects.professional_projects_title"))
  )
}

pub(super) fn project_detail(t: &Fixed<'_>, locale: &str, project: &Project) -> String {
  let description = if project.long_description.is_empty() {
    escape_html(&t.t("project_detail.no_description_available"))
  } else {
    project
      .long_description
      .iter()
      .map(|segment| {
        let text = escape_html(&segment.value);
        match segment.kind.as_str() {
          "bold" | "strong" => format!("<strong>{text}</strong>"),
          "tech" => format!(r#"<span class="tech">{text}</span>"#),
          _ => text,
        }
      })
      .collect()
  };

  let gallery = project.gallery();
  let gallery = if gallery.is_empty() {
    format!("<p>{}</p>", escape_html(&t.t("project_detail.no_image_available")))
  } else {
    gallery
      .iter()
      .map(|src| {
        format!(r#"<img src="{}" alt="{}" />"#, escape_html(src), escape_html(&project.title))
      })
      .collect()
  };

  let live = if project.project_link.is_empty() {
    String::new()
  } else {
    format!(
      r#"<a class="button" href="{}" target="_blank" rel="noopener">{}</a>"#,
      escape_html(&project.project_link),
      escape_html(&t.t("project_detail.view_live_project"))
    )
  };

  format!(
    r#"<a href="/{locale}/professional">{back}</a>
<h1>{title}</h1>
<div class="gallery">{gallery}</div>
<section><h2>{description_title}</h2><p>{description}</p></section>
<section><h2>{tech_title}</h2><ul class="chips">{tech}</ul></section>
{live}"#,
    back = escape_html(&t.t("project_detail.back_to_projects")),
    title = escape_html(&project.title),
    description_title = escape_html(&t.t("project_detail.description_title")),
    tech_title = escape_html(&t.t("project_detail.technologies_title")),
    tech = tech_list(&project.technologies),
  )
}

fn search_hit(hit: &SearchHit) -> String {
  let title = escape_html(&hit.item.title);
  let kind = hit.item.kind.as_str();
  let heading = match (&hit.item.url, hit.navigable) {
    (Some(url), true) => format!(r#"<a href="{}">{title}</a>"#, escape_html(url)),
    _ => format!("<span>{title}</span>"),
  };
  format!(
    r#"<li class="search-hit {kind}">{heading}<p>{}</p></li>"#,
    escape_html(&hit.item.description)
  )
}

pub(super) fn search(outcome: &SearchOutcome, message: Option<&str>) -> String {
  let prompt = message
    .map(|m| format!(r#"<p class="search-message">{}</p>"#, escape_html(m)))
    .unwrap_or_default();
  let hits: String = outcome.hits().iter().map(search_hit).collect();
  format!(
    r#"<section class="search-results" data-state="{}">{prompt}<ul>{hits}</ul></section>"#,
    outcome.state()
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use folio_server::{ItemKind, SearchItem, Translator};

  fn item(id: &str, url: Option<&str>) -> SearchItem {
    SearchItem {
      id: id.into(),
      title: format!("<{id}>"),
      description: "desc".into(),
      url: url.map(Into::into),
      keywords: vec![],
      kind: ItemKind::Technology,
    }
  }

  #[test]
  fn switcher_links_same_page() {
    let locales = vec!["es".to_string(), "en".to_string()];
    let html = language_switcher(&locales, "/es/about", "es");
    assert!(html.contains(r#"href="/en/about""#));
    assert!(html.contains(r#"href="/es/about" hreflang="es" lang="es" class="active""#));
  }

  #[test]
  fn non_navigable_hit_is_plain_text() {
    let html = search_hit(&SearchHit::from(&item("rust", None)));
    assert!(html.contains("<span>&lt;rust&gt;</span>"));
    assert!(!html.contains("<a "));
  }

  #[test]
  fn navigable_hit_links() {
    let html = search_hit(&SearchHit::from(&item("about", Some("/es/about"))));
    assert!(html.contains(r#"<a href="/es/about">"#));
  }

  #[test]
  fn nav_marks_current_page() {
    let translator = Translator::new("es");
    let t = translator.fixed("es", "common");
    let html = nav(&t, "es", "/es/about");
    assert!(html.contains(r#"<a href="/es/about" aria-current="page">header.about</a>"#));
    assert!(html.contains(r#"<a href="/es">header.home</a>"#));
  }
}
