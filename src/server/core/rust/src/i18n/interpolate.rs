/* src/server/core/rust/src/i18n/interpolate.rs */

/// Replace `{{name}}` placeholders. Whitespace inside the braces is ignored;
/// placeholders without a matching argument are left as written.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
  let mut out = String::with_capacity(template.len());
  let mut rest = template;

  while let Some(start) = rest.find("{{") {
    out.push_str(&rest[..start]);
    let after = &rest[start + 2..];
    let Some(end) = after.find("}}") else {
      out.push_str(&rest[start..]);
      return out;
    };
    let name = after[..end].trim();
    match args.iter().find(|(k, _)| *k == name) {
      Some((_, v)) => out.push_str(v),
      None => out.push_str(&rest[start..start + 2 + end + 2]),
    }
    rest = &after[end + 2..];
  }

  out.push_str(rest);
  out
}
