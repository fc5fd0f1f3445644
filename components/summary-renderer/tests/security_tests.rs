//! Security validation tests
//!
//! This test suite validates that rendered summaries never carry live markup
//! from the summary text, whatever the model managed to emit.

use proptest::prelude::*;
use weekly_summary_renderer::render;

/// Tags the renderer is allowed to emit
const RENDERER_TAGS: &[&str] = &[
    "<h1>", "</h1>", "<h2>", "</h2>", "<h3>", "</h3>", "<hr>", "<br>", "<blockquote>",
    "</blockquote>", "<ul>", "</ul>", "<ol>", "</ol>", "<li>", "</li>", "<p>", "</p>",
    "<strong>", "</strong>", "<em>", "</em>", "<code>", "</code>",
];

fn strip_renderer_tags(html: &str) -> String {
    let mut stripped = html.to_string();
    for tag in RENDERER_TAGS {
        stripped = stripped.replace(tag, "");
    }
    stripped
}

/// Test that script tags are rendered as inert text
#[test]
fn test_xss_script_tag_escaped() {
    let html = render("Before\n\n<script>alert('xss')</script>\n\nAfter");

    assert!(!html.contains("<script"));
    assert!(!html.contains("</script"));
    assert!(html.contains("&lt;script&gt;alert('xss')&lt;/script&gt;"));
    assert!(html.contains("<p>Before</p>"));
    assert!(html.contains("<p>After</p>"));
}

/// Test that event handler payloads stay text
#[test]
fn test_xss_event_handler_escaped() {
    let html = render("<img src=x onerror=alert(1)>");

    assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
    assert!(!html.contains("<img"));
}

/// Test that markup inside every block kind is escaped
#[test]
fn test_xss_in_every_block_kind() {
    let payload = "<iframe src=//evil>";
    let escaped = "&lt;iframe src=//evil&gt;";
    let documents = [
        format!("# {payload}"),
        format!("> {payload}"),
        format!("- {payload}"),
        format!("1. {payload}"),
        format!("**{payload}**"),
        format!("`{payload}`"),
        payload.to_string(),
    ];

    for document in &documents {
        let html = render(document);
        assert!(html.contains(escaped), "{document:?} rendered {html:?}");
        assert!(!html.contains("<iframe"), "{document:?} rendered {html:?}");
    }
}

/// Test that pre-escaped entities in the input are not decoded into markup
#[test]
fn test_entities_are_escaped_again() {
    let html = render("&lt;script&gt;");
    assert_eq!(html, "<p>&amp;lt;script&amp;gt;</p>");
}

/// Test that a raw `>` only becomes a quote through the escaped marker
#[test]
fn test_quote_marker_does_not_leak_raw_bracket() {
    let html = render("> quoted\n>not quoted");
    assert_eq!(html, "<blockquote>quoted</blockquote>\n<p>&gt;not quoted</p>");
}

/// Test that closing-tag injection cannot break out of a block
#[test]
fn test_closing_tag_injection() {
    let html = render("- item</li></ul><script>x()</script>");
    assert_eq!(
        html,
        "<ul><li>item&lt;/li&gt;&lt;/ul&gt;&lt;script&gt;x()&lt;/script&gt;</li></ul>"
    );
}

proptest! {
    #[test]
    fn prop_no_live_markup_from_input(input in "[a-z <>/=\"'&*`#>\n-]{0,200}") {
        let html = render(&input);
        let stripped = strip_renderer_tags(&html);
        prop_assert!(!stripped.contains('<'), "raw '<' in {:?}", html);
        prop_assert!(!stripped.contains('>'), "raw '>' in {:?}", html);
    }

    #[test]
    fn prop_tag_names_in_input_never_become_tags(tag in "(script|iframe|img|svg|object|style)") {
        let html = render(&format!("<{tag}>payload</{tag}>"));
        let open_tag = format!("<{}", tag);
        prop_assert!(!html.contains(&open_tag));
    }
}
