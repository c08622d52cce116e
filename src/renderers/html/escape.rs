//! HTML text escaping

use crate::models::EscapePolicy;
use std::borrow::Cow;

/// Escape special HTML characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Apply an escape policy to a piece of text
pub fn apply_policy(s: &str, policy: EscapePolicy) -> Cow<'_, str> {
    match policy {
        EscapePolicy::Html if s.contains(['&', '<', '>', '"', '\'']) => Cow::Owned(html_escape(s)),
        _ => Cow::Borrowed(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"Song & Dance <Test> "q" 'a'"#),
            "Song &amp; Dance &lt;Test&gt; &quot;q&quot; &#39;a&#39;"
        );
    }

    #[test]
    fn test_raw_policy_is_verbatim() {
        assert_eq!(apply_policy("<b>x</b>", EscapePolicy::Raw), "<b>x</b>");
    }

    #[test]
    fn test_plain_text_is_borrowed() {
        assert!(matches!(apply_policy("plain", EscapePolicy::Html), Cow::Borrowed(_)));
    }
}
