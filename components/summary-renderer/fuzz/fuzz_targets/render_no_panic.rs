#![no_main]

use libfuzzer_sys::fuzz_target;
use weekly_summary_renderer::render;

const RENDERER_TAGS: &[&str] = &[
    "<h1>", "</h1>", "<h2>", "</h2>", "<h3>", "</h3>", "<hr>", "<br>", "<blockquote>",
    "</blockquote>", "<ul>", "</ul>", "<ol>", "</ol>", "<li>", "</li>", "<p>", "</p>",
    "<strong>", "</strong>", "<em>", "</em>", "<code>", "</code>",
];

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let mut stripped = render(text);
    for tag in RENDERER_TAGS {
        stripped = stripped.replace(tag, "");
    }
    assert!(!stripped.contains('<'), "raw '<' reached the output");
});
