// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with some content.\n\n- Bullet point\n  - Nested item\n- Another item\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_admonition_document(sections: usize) -> String {
    const TYPES: &[&str] = &["NOTE", "TIP", "WARNING", "DANGER", "QUESTION", "BUG"];

    let mut content = String::new();
    for section in 0..sections {
        let kind = TYPES[section % TYPES.len()];
        content.push_str(&format!("## Section {section}\n\n"));
        content.push_str("Some paragraph content with multiple sentences. This helps create realistic document structure for benchmarking.\n\n");
        content.push_str(&format!("> [!{kind}] Callout {section}\n>\n"));
        content.push_str("> Body with **bold**, *italic* and `code`.\n> Second line of the same paragraph.\n>\n");
        content.push_str("> - item one\n> - item two\n\n");
    }
    content
}
