//! Basic rendering example demonstrating the summary renderer

use weekly_summary_renderer::render;

fn main() {
    println!("=== Weekly Summary Renderer - Basic Examples ===\n");

    // Example 1: Heading and paragraph
    show(
        "Example 1: Heading and paragraph",
        "# Weekly Integrator Summary\n\nA quiet week with two calls.",
    );

    // Example 2: Lists with inline formatting
    show(
        "Example 2: Lists with inline formatting",
        "## Main Themes\n- **Fees**: raised by *three* teams\n- SDK `v2` upgrade\n\n1. Blog post\n2. Video",
    );

    // Example 3: Quotes and rules
    show(
        "Example 3: Quotes and rules",
        "> \"Docs never mention retries\"\n> - partner engineer\n\n---\n\nEnd of notes.",
    );

    // Example 4: Escaping (security)
    show("Example 4: Escaping (security)", "<script>alert('xss')</script>");

    // Example 5: Unsupported syntax stays literal
    show(
        "Example 5: Unsupported syntax stays literal",
        "#### Deep heading\n| a | b |\n[link](https://example.com)",
    );
}

fn show(title: &str, markdown: &str) {
    println!("{title}");
    println!("Input Markdown:");
    println!("{markdown}\n");

    println!("Output HTML:");
    println!("{}", render(markdown));
    println!("---\n");
}
