/* src/server/core/rust/src/render.rs */

// Slot injection for the HTML page templates.
//   <!--folio:path.to.value-->        escaped text
//   <!--folio:path.to.value:html-->   trusted markup, inserted as-is
// Unresolvable slots render as nothing.

use serde_json::Value;

const SLOT_OPEN: &str = "<!--folio:";
const SLOT_CLOSE: &str = "-->";

pub(crate) fn resolve<'a>(path: &str, data: &'a Value) -> Option<&'a Value> {
  let mut current = data;
  for key in path.split('.') {
    current = current.get(key)?;
  }
  Some(current)
}

pub(crate) fn stringify(value: &Value) -> String {
  match value {
    Value::Null => String::new(),
    Value::Bool(b) => b.to_string(),
    Value::Number(n) => n.to_string(),
    Value::String(s) => s.clone(),
    other => other.to_string(),
  }
}

pub fn escape_html(input: &str) -> String {
  let mut out = String::with_capacity(input.len());
  for ch in input.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      c => out.push(c),
    }
  }
  out
}

pub fn inject(template: &str, data: &Value) -> String {
  let mut out = String::with_capacity(template.len());
  let mut rest = template;

  while let Some(start) = rest.find(SLOT_OPEN) {
    out.push_str(&rest[..start]);
    let after = &rest[start + SLOT_OPEN.len()..];
    let Some(end) = after.find(SLOT_CLOSE) else {
      out.push_str(&rest[start..]);
      return out;
    };
    let slot = &after[..end];
    let (path, raw) = match slot.strip_suffix(":html") {
      Some(p) => (p, true),
      None => (slot, false),
    };
    if let Some(value) = resolve(path, data) {
      let text = stringify(value);
      if raw {
        out.push_str(&text);
      } else {
        out.push_str(&escape_html(&text));
      }
    }
    rest = &after[end + SLOT_CLOSE.len()..];
  }

  out.push_str(rest);
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn escapes_text_slots() {
    let html = inject("<p><!--folio:msg--></p>", &json!({ "msg": "<b>\"hi\" & 'bye'</b>" }));
    assert_eq!(html, "<p>&lt;b&gt;&quot;hi&quot; &amp; &#39;bye&#39;&lt;/b&gt;</p>");
  }

  #[test]
  fn raw_slots_are_verbatim() {
    let html = inject("<ul><!--folio:items:html--></ul>", &json!({ "items": "<li>a</li>" }));
    assert_eq!(html, "<ul><li>a</li></ul>");
  }

  #[test]
  fn nested_paths_and_numbers() {
    let data = json!({ "page": { "title": "Sobre mí", "count": 3 } });
    assert_eq!(inject("<!--folio:page.title--> (<!--folio:page.count-->)", &data), "Sobre mí (3)");
  }

  #[test]
  fn missing_slot_renders_empty() {
    assert_eq!(inject("a<!--folio:nope-->b", &json!({})), "ab");
  }

  #[test]
  fn plain_comments_untouched() {
    let tpl = "<!-- note --><!--folio:x";
    assert_eq!(inject(tpl, &json!({ "x": 1 })), tpl);
  }
}
