/* src/cli/core/src/ui.rs */

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn ok(msg: &str) {
  println!("  {GREEN}\u{2713}{RESET} {msg}");
}

pub fn fail(msg: &str) {
  println!("  {RED}\u{2717}{RESET} {msg}");
}

pub fn warn(msg: &str) {
  println!("  {YELLOW}!{RESET} {msg}");
}

pub fn arrow(msg: &str) {
  println!("  {GREEN}\u{2192}{RESET} {msg}");
}

pub fn detail(msg: &str) {
  println!("        {msg}");
}

pub fn dim(msg: &str) {
  println!("  {DIM}{msg}{RESET}");
}

/// Search hit line; `link` is shown only for navigable items.
pub fn hit(title: &str, kind: &str, link: Option<&str>) {
  match link {
    Some(url) => println!("  {BOLD}{title}{RESET} {DIM}[{kind}]{RESET} {CYAN}{url}{RESET}"),
    None => println!("  {BOLD}{title}{RESET} {DIM}[{kind}]{RESET}"),
  }
}

pub fn banner(cmd: &str) {
  println!();
  println!("  {BOLD}folio{RESET} {cmd} {DIM}v{VERSION}{RESET}");
  println!();
}

pub fn blank() {
  println!();
}
