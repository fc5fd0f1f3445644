//! Escaping boundary for untrusted summary text
//!
//! # Threat Model
//!
//! Summary documents are produced by a language model from meeting notes that
//! anyone on a call could have influenced. The rendered fragment is injected
//! directly into a page container, so the raw text may carry:
//! - Literal tags (`<script>`, `<img onerror=...>`, `<iframe>`)
//! - Entity tricks meant to survive a naive escape (`&lt;script&gt;`)
//!
//! # Defense
//!
//! Every `&`, `<` and `>` in the input is escaped once, before any block or
//! inline rule runs. All markup in the output is emitted by the renderer from
//! fixed tag literals; no rule copies unescaped input into a tag position.
//! Quotes are left alone because the renderer never writes attributes.

/// Characters rewritten by [`escape_html`], paired with their entities.
///
/// `&` must come first so entities produced by later rows are not re-escaped.
const ESCAPES: &[(char, &str)] = &[('&', "&amp;"), ('<', "&lt;"), ('>', "&gt;")];

/// Escape the structural HTML characters of `text`
///
/// # Examples
///
/// ```
/// use weekly_summary_renderer::security::escape_html;
///
/// assert_eq!(escape_html("<b>&</b>"), "&lt;b&gt;&amp;&lt;/b&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
    let extra = text
        .chars()
        .filter_map(|ch| ESCAPES.iter().find(|(c, _)| *c == ch))
        .map(|(_, entity)| entity.len() - 1)
        .sum::<usize>();

    let mut escaped = String::with_capacity(text.len() + extra);
    for ch in text.chars() {
        match ESCAPES.iter().find(|(c, _)| *c == ch) {
            Some((_, entity)) => escaped.push_str(entity),
            None => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape_html("Weekly notes"), "Weekly notes");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_escape_tags() {
        assert_eq!(
            escape_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert('x')&lt;/script&gt;"
        );
    }

    #[test]
    fn test_escape_existing_entities_are_escaped_again() {
        // Input entities are text, not markup
        assert_eq!(escape_html("&lt;b&gt;"), "&amp;lt;b&amp;gt;");
    }

    #[test]
    fn test_escape_quote_marker() {
        assert_eq!(escape_html("> quoted"), "&gt; quoted");
    }

    #[test]
    fn test_escape_unicode_preserved() {
        assert_eq!(escape_html("café <中> 🎉"), "café &lt;中&gt; 🎉");
    }

    proptest! {
        #[test]
        fn prop_escaped_output_has_no_angle_brackets(text in ".{0,200}") {
            let escaped = escape_html(&text);
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('>'));
        }

        #[test]
        fn prop_every_ampersand_starts_an_entity(text in "[a-z&<> ]{0,100}") {
            let escaped = escape_html(&text);
            for (idx, _) in escaped.match_indices('&') {
                let rest = &escaped[idx..];
                prop_assert!(
                    rest.starts_with("&amp;") || rest.starts_with("&lt;") || rest.starts_with("&gt;"),
                    "dangling ampersand in {:?}", escaped
                );
            }
        }
    }
}
