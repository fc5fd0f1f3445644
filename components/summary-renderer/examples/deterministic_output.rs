/// Example demonstrating deterministic HTML output
///
/// This example shows how the renderer produces identical output for identical
/// summary text, and how a second render of the output diverges.
///
/// Run with: cargo run --example deterministic_output
use weekly_summary_renderer::Renderer;

fn main() {
    println!("=== Deterministic HTML Output Example ===\n");

    let markdown = r#"# Weekly Integrator Summary

## 1. Executive Summary
Integrators focused on **fee estimation** and *finality*.

## 2. Main Themes
- Bridge fees
- SDK `v2` migration

> "We need better docs"

1. Write a FAQ
2. Record a walkthrough
"#;

    let renderer = Renderer::new();

    println!("Rendering 5 times...\n");
    let results: Vec<String> = (1..=5)
        .map(|i| {
            let html = renderer.render(markdown);
            println!("Render {}: {} bytes", i, html.len());
            html
        })
        .collect();

    println!("\nVerifying deterministic output...");
    let first = &results[0];
    if results.iter().all(|r| r == first) {
        println!("✓ SUCCESS: All 5 renders produced identical output!");
        println!("\nHTML output:\n{}", "=".repeat(80));
        println!("{}", first);
        println!("{}", "=".repeat(80));
    } else {
        println!("✗ FAILURE: Renders differ!");
        std::process::exit(1);
    }

    println!("\nRendering the output a second time...");
    let twice = renderer.render(first);
    if &twice != first {
        println!("✓ As documented, a double render escapes the first render's tags:");
        println!("{}", twice.lines().next().unwrap_or_default());
    }
}
