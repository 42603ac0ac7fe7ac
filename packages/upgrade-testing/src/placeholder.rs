//! Placeholder translation from the production dialect to SQLite.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Matches an escaped percent or a `%s` placeholder. Scanning `%%` as a unit
/// keeps the `s` of `%%s` from being read as part of a placeholder.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%%|%s").expect("valid placeholder pattern"));

/// Rewrites every `%s` placeholder as SQLite's positional `?`.
///
/// Escaped percents (`%%`) are copied unchanged, so `'100%%s'` stays as is.
/// A placeholder right after an escape is still translated: `%%%s` becomes
/// `%%?`, the way the production driver reads it.
/// Returns the input borrowed when it holds no placeholder.
pub fn translate_placeholders(query: &str) -> Cow<'_, str> {
    PLACEHOLDER.replace_all(query, |caps: &Captures<'_>| {
        if &caps[0] == "%%" {
            "%%"
        } else {
            "?"
        }
    })
}
