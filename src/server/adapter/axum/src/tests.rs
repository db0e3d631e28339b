/* src/server/adapter/axum/src/tests.rs */

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::header::{ACCEPT_LANGUAGE, CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use folio_server::{
  ContactSettings, ContactSimulator, FixedFailure, FolioServer, ItemKind, LocaleConfig,
  ProjectCatalog, SearchCatalog, SearchItem, Translator,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::IntoAxumRouter;

fn translator() -> &'static Translator {
  let mut t = Translator::new("es");
  t.insert(
    "es",
    "common",
    json!({
      "header": { "home": "Inicio", "about": "Sobre mí" },
      "search": {
        "type_to_search": "Escribe para buscar",
        "no_results": "No hay resultados para \"{{query}}\""
      }
    }),
  );
  t.insert(
    "en",
    "common",
    json!({
      "header": { "home": "Home", "about": "About" },
      "search": {
        "type_to_search": "Type to search",
        "no_results": "No results for \"{{query}}\""
      }
    }),
  );
  t.insert("en", "aboutMe", json!({ "aboutMe": { "title": "About me" } }));
  Box::leak(Box::new(t))
}

fn item(id: &str, title: &str, url: Option<&str>, kind: ItemKind) -> SearchItem {
  SearchItem {
    id: id.into(),
    title: title.into(),
    description: format!("{title} description"),
    url: url.map(Into::into),
    keywords: vec![],
    kind,
  }
}

const PROJECTS: &str = r#"[
  { "id": "shop", "type": "professional", "title": "Online shop", "technologies": ["Laravel"] }
]"#;

fn app(fail: bool) -> Router {
  let mut search = SearchCatalog::default();
  search.insert(
    "es",
    vec![
      item("about", "Sobre mí", Some("/es/about"), ItemKind::Page),
      item("rust", "Rust", None, ItemKind::Technology),
    ],
  );
  search.insert("en", vec![item("about", "About me", Some("/en/about"), ItemKind::Page)]);

  let settings = ContactSettings { delay: Duration::ZERO, ..ContactSettings::default() };
  FolioServer::new(LocaleConfig::default(), translator())
    .site_name("Folio")
    .search_catalog(search)
    .projects(ProjectCatalog::parse(PROJECTS).unwrap())
    .contact(ContactSimulator::with_source(settings, Arc::new(FixedFailure(fail))))
    .into_axum_router()
}

async fn get(uri: &str) -> Response {
  app(false).oneshot(Request::get(uri).body(Body::empty()).unwrap()).await.unwrap()
}

async fn body_text(resp: Response) -> String {
  let bytes = resp.into_body().collect().await.unwrap().to_bytes();
  String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(resp: Response) -> Value {
  serde_json::from_str(&body_text(resp).await).unwrap()
}

fn location(resp: &Response) -> &str {
  resp.headers().get(LOCATION).unwrap().to_str().unwrap()
}

fn set_cookies(resp: &Response) -> Vec<String> {
  resp
    .headers()
    .get_all(SET_COOKIE)
    .iter()
    .map(|v| v.to_str().unwrap().to_string())
    .collect()
}

// -- locale redirects --

#[tokio::test]
async fn root_redirects_to_fallback() {
  let resp = get("/").await;
  assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
  assert_eq!(location(&resp), "/es");
}

#[tokio::test]
async fn unlocalized_path_gains_prefix_and_keeps_query() {
  let resp = get("/estimate?ref=mail").await;
  assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
  assert_eq!(location(&resp), "/es/estimate?ref=mail");

  let resp = get("/a/b/c").await;
  assert_eq!(location(&resp), "/es/a/b/c");
}

#[tokio::test]
async fn trailing_slash_redirects_to_canonical_page() {
  let resp = get("/es/").await;
  assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
  assert_eq!(location(&resp), "/es");

  let resp = get("/en/about/").await;
  assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
  assert_eq!(location(&resp), "/en/about");

  let resp = get("/es").await;
  assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn passthrough_is_not_redirected() {
  let resp = get("/api/search?lang=es&q=ru").await;
  assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn localized_unknown_page_is_404() {
  let resp = get("/es/nowhere").await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// -- pages --

#[tokio::test]
async fn page_sets_lang_and_dir() {
  let resp = get("/en/about").await;
  assert_eq!(resp.status(), StatusCode::OK);
  let html = body_text(resp).await;
  assert!(html.contains(r#"<html lang="en" dir="ltr" class="light">"#));
  assert!(html.contains("<h1>About me</h1>"));
  assert!(html.contains(r#"href="/es/about""#));
}

#[tokio::test]
async fn language_cookie_written_when_different() {
  let req = Request::get("/en").header(COOKIE, "i18next=es").body(Body::empty()).unwrap();
  let resp = app(false).oneshot(req).await.unwrap();
  let cookies = set_cookies(&resp);
  assert_eq!(cookies.len(), 1);
  assert!(cookies[0].starts_with("i18next=en; Path=/"));
}

#[tokio::test]
async fn language_cookie_untouched_when_matching() {
  let req = Request::get("/en").header(COOKIE, "i18next=en").body(Body::empty()).unwrap();
  let resp = app(false).oneshot(req).await.unwrap();
  assert!(set_cookies(&resp).is_empty());
}

#[tokio::test]
async fn theme_cookie_selects_class() {
  let req =
    Request::get("/es").header(COOKIE, "theme=dark; i18next=es").body(Body::empty()).unwrap();
  let html = body_text(app(false).oneshot(req).await.unwrap()).await;
  assert!(html.contains(r#"class="dark""#));
}

#[tokio::test]
async fn unknown_project_redirects_to_listing() {
  let resp = get("/en/professional/missing").await;
  assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
  assert_eq!(location(&resp), "/en/professional");
}

#[tokio::test]
async fn known_project_renders() {
  let resp = get("/es/professional/shop").await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert!(body_text(resp).await.contains("<h1>Online shop</h1>"));
}

#[tokio::test]
async fn search_page_renders_hits() {
  let html = body_text(get("/es/search?q=rust").await).await;
  assert!(html.contains(r#"data-state="results""#));
  assert!(html.contains("<span>Rust</span>"));
  assert!(html.contains(r#"value="rust""#));
}

// -- search --

#[tokio::test]
async fn search_data_served_per_locale() {
  let resp = get("/es/search-data.json").await;
  assert_eq!(resp.status(), StatusCode::OK);
  let items = body_json(resp).await;
  assert_eq!(items.as_array().map(Vec::len), Some(2));
  assert_eq!(items[1]["type"], "technology");
}

#[tokio::test]
async fn api_search_states() {
  let short = body_json(get("/api/search?lang=en&q=a").await).await;
  assert_eq!(short["state"], "type_to_search");
  assert_eq!(short["message"], "Type to search");

  let none = body_json(get("/api/search?lang=en&q=zz").await).await;
  assert_eq!(none["state"], "no_results");
  assert_eq!(none["message"], "No results for \"zz\"");

  let hits = body_json(get("/api/search?lang=es&q=SOBRE").await).await;
  assert_eq!(hits["state"], "results");
  assert_eq!(hits["results"][0]["id"], "about");
  assert_eq!(hits["results"][0]["navigable"], true);
}

#[tokio::test]
async fn api_search_resolves_locale_from_headers() {
  let req = Request::get("/api/search?q=about")
    .header(ACCEPT_LANGUAGE, "en-US,en;q=0.9")
    .body(Body::empty())
    .unwrap();
  let body = body_json(app(false).oneshot(req).await.unwrap()).await;
  assert_eq!(body["locale"], "en");
  assert_eq!(body["results"][0]["url"], "/en/about");
}

#[tokio::test]
async fn api_search_rejects_unknown_lang() {
  let resp = get("/api/search?lang=fr&q=about").await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// -- contact --

fn contact_request(body: &str) -> Request<Body> {
  Request::post("/api/contact")
    .header(CONTENT_TYPE, "application/json")
    .body(Body::from(body.to_string()))
    .unwrap()
}

const VALID: &str = r#"{"name":"Ana","email":"ana@example.com","message":"Hola"}"#;

#[tokio::test]
async fn contact_success() {
  let resp = app(false).oneshot(contact_request(VALID)).await.unwrap();
  assert_eq!(resp.status(), StatusCode::OK);
  let body = body_json(resp).await;
  assert_eq!(body["status"], "success");
  assert_eq!(body["revert_after_ms"], 5000);
}

#[tokio::test]
async fn contact_simulated_failure_is_transient() {
  let resp = app(true).oneshot(contact_request(VALID)).await.unwrap();
  assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
  let body = body_json(resp).await;
  assert_eq!(body["error"]["code"], "SEND_FAILED");
  assert_eq!(body["error"]["transient"], true);
}

#[tokio::test]
async fn contact_validation_error() {
  let resp = app(false)
    .oneshot(contact_request(r#"{"name":"Ana","email":"nope","message":"Hola"}"#))
    .await
    .unwrap();
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert_eq!(body_json(resp).await["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn contact_form_post_shows_field_errors() {
  let req = Request::post("/es/contact")
    .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
    .body(Body::from("name=&email=ana%40example.com&message=Hola"))
    .unwrap();
  let resp = app(false).oneshot(req).await.unwrap();
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let html = body_text(resp).await;
  assert!(html.contains("contact.validation.name_required"));
  assert!(html.contains(r#"value="ana@example.com""#));
}

#[tokio::test]
async fn contact_form_post_reports_failure() {
  let req = Request::post("/es/contact")
    .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
    .body(Body::from("name=Ana&email=ana%40example.com&message=Hola"))
    .unwrap();
  let html = body_text(app(true).oneshot(req).await.unwrap()).await;
  assert!(html.contains(r#"class="status error""#));
  assert!(html.contains(r#"data-revert-after-ms="5000""#));
}

// -- preferences --

#[tokio::test]
async fn theme_toggle_flips_cookie() {
  let req = Request::post("/api/theme").header(COOKIE, "theme=dark").body(Body::empty()).unwrap();
  let resp = app(false).oneshot(req).await.unwrap();
  let cookies = set_cookies(&resp);
  assert!(cookies[0].starts_with("theme=light;"));
  assert_eq!(body_json(resp).await["theme"], "light");
}
