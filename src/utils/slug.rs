//! Slug generation for article titles.
//!
//! ```text
//! "Hello, World!"          → "hello-world"
//! "Café au lait"           → "cafe-au-lait"
//! "  --Rust  2024--  "     → "rust-2024"
//! ```

use deunicode::deunicode;

/// Separator between words.
const SEPARATOR: char = '-';

/// Turn a title into a URL-safe slug.
///
/// Unicode is transliterated to ASCII, letters are lowercased, and every run
/// of other characters collapses into one `-`. Never starts or ends with `-`.
pub fn slugify(title: &str) -> String {
    let ascii = deunicode(title);
    let mut slug = String::with_capacity(ascii.len());
    // suppress a leading separator
    let mut pending_sep = false;

    for ch in ascii.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push(SEPARATOR);
            }
            pending_sep = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }
    slug
}

/// Whether `text` is already a slug (`slugify(text) == text`).
pub fn is_slug(text: &str) -> bool {
    !text.is_empty() && slugify(text) == text
}
