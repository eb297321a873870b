// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_note_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **some** `content` and a [link](https://example.com).\n\n- Bullet point\n- Another item\n\n| Name | Score |\n|------|------:|\n| a | 1 |\n| b | 2 |\n\n> Quoted <verdict>\n\n---\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_unmatched_fences(count: usize) -> String {
    "```\n".repeat(count)
}
