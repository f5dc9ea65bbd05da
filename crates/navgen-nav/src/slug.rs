//! Anchor slug generation for sub-section links.

use std::sync::LazyLock;

use regex::Regex;

/// Characters dropped from slugs wherever they appear.
static REMOVED_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[/():]").unwrap());

/// Build an anchor slug from heading title words.
///
/// Words are joined with hyphens and lowercased, leading and trailing colons
/// are trimmed, then every `/`, `(`, `)` and `:` is removed. Other punctuation
/// is kept as is.
///
/// # Examples
///
/// ```
/// use navgen_nav::slugify;
///
/// assert_eq!(slugify(&["Foo", "Bar:"]), "foo-bar");
/// assert_eq!(slugify(&["A(B)/C:"]), "abc");
/// ```
pub fn slugify(words: &[&str]) -> String {
    let joined = words.join("-").to_lowercase();
    REMOVED_CHARS_RE
        .replace_all(joined.trim_matches(':'), "")
        .into_owned()
}
