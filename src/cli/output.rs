//! Shared CLI output helpers.
//!
//! Rendered artifacts own stdout, so every status line goes to stderr.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: paths, names, hints
//! - Dimmed: secondary info

use console::Style;
use std::fmt::Display;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

fn paint(style: Style, text: impl Display) -> String {
    if colors_enabled() {
        style.force_styling(true).apply_to(text).to_string()
    } else {
        text.to_string()
    }
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ wrote .netrc`
pub fn success(msg: &str) {
    eprintln!("{} {}", paint(Style::new().green(), "✓"), msg);
}

/// Print an error message (red).
///
/// Example: `✗ malformed entry #2 at line 4: expected 'login'`
pub fn error(msg: &str) {
    eprintln!("{} {}", paint(Style::new().red(), "✗"), msg);
}

/// Print a warning message (yellow).
///
/// Example: `⚠ .netrc is readable by other users (mode 644)`
pub fn warn(msg: &str) {
    eprintln!("{} {}", paint(Style::new().yellow(), "⚠"), msg);
}

/// Print a hint message (cyan).
///
/// Example: `→ run: chmod 600 .netrc`
pub fn hint(msg: &str) {
    let style = Style::new().cyan();
    eprintln!("{} {}", paint(style.clone(), "→"), paint(style, msg));
}

/// Print a key-value pair (label dimmed, value bold).
pub fn kv(label: &str, value: impl Display) {
    eprintln!(
        "  {}  {}",
        paint(Style::new().dim(), label),
        paint(Style::new().bold(), value)
    );
}

/// Print a dimmed/secondary message.
pub fn dimmed(msg: &str) {
    eprintln!("{}", paint(Style::new().dim(), msg));
}

/// Format a path in cyan for inline use.
pub fn path(p: impl AsRef<std::path::Path>) -> String {
    paint(Style::new().cyan(), p.as_ref().display())
}

/// Format a secret name in cyan for inline use.
pub fn name(n: &str) -> String {
    paint(Style::new().cyan(), n)
}
