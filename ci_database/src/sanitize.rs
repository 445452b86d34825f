//! HTML disinfection for user-supplied strings.
//!
//! Text that contains no markup passes through untouched, so ampersands and
//! quotes in commit messages survive. Text with markup is reduced to its
//! content by a policy that allows no elements and no attributes.

use std::collections::HashSet;

/// Strip HTML from `value` if, and only if, it contains any.
///
/// The cleaner re-serializes text with entities (`&amp;`, `&nbsp;`, ...), so
/// its output is decoded before comparing with the input.
pub fn sanitize(value: &str) -> String {
    let stripped = strict(value);

    if html_escape::decode_html_entities(&stripped) == value {
        value.to_string()
    } else {
        tracing::debug!("markup stripped from record field");
        stripped
    }
}

/// Sanitize an optional column in place.
pub(crate) fn sanitize_field(field: &mut Option<String>) {
    if let Some(value) = field.as_mut() {
        *value = sanitize(value);
    }
}

fn strict(value: &str) -> String {
    let mut policy = ammonia::Builder::empty();
    policy.clean_content_tags(HashSet::from(["script", "style"]));
    policy.clean(value).to_string()
}
