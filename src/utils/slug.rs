//! Slug derivation for reference entities.

use regex::Regex;
use std::sync::LazyLock;

/// Matches any run of whitespace.
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Derives a slug from a display name.
///
/// The name is lowercased and every run of whitespace becomes a single `-`.
/// Other characters are kept as-is, so `"Rust & Go"` becomes `"rust-&-go"`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(slugify("Guides"), "guides");
/// assert_eq!(slugify("Machine  Learning"), "machine-learning");
/// ```
pub fn slugify(name: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&name.to_lowercase(), "-")
        .into_owned()
}
