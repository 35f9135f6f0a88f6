//! String transformations applied while building a page.
//!
//! - [`display_name`]: `bbduk` -> `BBDuk`, `call_variants` -> `Call Variants`
//! - [`title_case`]: uppercase the first letter of every word, lowercase the rest
//! - [`truncate_chars`]: character-safe prefix used for the meta description
//! - [`escape_html`]: entity-escape text for the optional escaping mode

/// Human-readable title for a tool identifier.
///
/// The identifier is uppercased and underscores become spaces. A leading `BB`
/// is kept as-is and the remainder is title-cased; any other name is
/// title-cased as a whole.
///
/// # Examples
///
/// ```rust
/// use bbdocgen::templating::filters::display_name;
///
/// assert_eq!(display_name("bbduk"), "BBDuk");
/// assert_eq!(display_name("reformat"), "Reformat");
/// assert_eq!(display_name("call_variants"), "Call Variants");
/// ```
#[must_use]
pub fn display_name(tool_name: &str) -> String {
    let upper = tool_name.to_uppercase().replace('_', " ");

    match upper.strip_prefix("BB") {
        Some(rest) => format!("BB{}", title_case(rest)),
        None => title_case(&upper),
    }
}

/// Title-case a string.
///
/// A letter is uppercased when it starts the string or follows a non-letter,
/// and lowercased otherwise, so digits and punctuation start new words
/// (`k2x` -> `K2X`, `k-mer` -> `K-Mer`).
#[must_use]
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut previous_is_letter = false;

    for c in value.chars() {
        if previous_is_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        previous_is_letter = c.is_alphabetic();
    }

    out
}

/// First `limit` characters of `value` (not bytes).
#[must_use]
pub fn truncate_chars(value: &str, limit: usize) -> &str {
    match value.char_indices().nth(limit) {
        Some((byte_index, _)) => &value[..byte_index],
        None => value,
    }
}

/// Escape the five HTML-significant characters.
#[must_use]
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
