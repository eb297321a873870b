//! Whole-document tests for the render pipeline.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::render::{MarkdownTranscoder, RenderError, RenderLimits, parse_blocks, render};

#[test]
fn end_to_end_paragraph_then_list() {
    let html = render("**Hi** `code`\n\n- a\n- b\n");
    assert_eq!(
        html,
        "<p><strong>Hi</strong> <code>code</code></p>\n<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n"
    );
}

#[test]
fn level_three_heading() {
    assert_eq!(render("### Title"), "<h3>Title</h3>\n");
}

#[test]
fn table_separator_elision() {
    let html = render("|A|B|\n|---|---|\n|1|2|\n");
    assert_eq!(
        html,
        "<table>\n<thead>\n<tr><th>A</th><th>B</th></tr>\n</thead>\n\
         <tbody>\n<tr><td>1</td><td>2</td></tr>\n</tbody>\n</table>\n"
    );
    assert!(!html.contains("---"));
}

#[test]
fn unterminated_fence_keeps_its_lines() {
    assert_eq!(
        render("```\nfoo\nbar\n"),
        "<pre><code>foo\nbar</code></pre>\n"
    );
}

#[test]
fn list_collapsing() {
    let html = render("- a\n- b\n");
    assert_eq!(html.matches("<ul>").count(), 1);
    assert_eq!(html, "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n");
}

#[test]
fn inline_formatting_in_table_cells() {
    let html = render("|**x**|`y`|\n|---|---|\n");
    assert_eq!(
        html,
        "<table>\n<thead>\n<tr><th><strong>x</strong></th><th><code>y</code></th></tr>\n</thead>\n</table>\n"
    );
}

#[test]
fn code_block_is_not_inline_formatted() {
    let html = render("```md\n**bold** [a](b)\n```\n");
    assert_eq!(
        html,
        "<pre><code class=\"language-md\">**bold** [a](b)</code></pre>\n"
    );
}

#[test]
fn crlf_input_matches_lf_input() {
    assert_eq!(render("# T\r\n\r\n- a\r\n"), render("# T\n\n- a\n"));
}

#[test]
fn determinism() {
    let doc = "# Report\n\nSome **text**.\n\n|a|b|\n|-|-|\n|1|2|\n\n```\nx\n```\n";
    assert_eq!(render(doc), render(doc));
}

#[rstest]
#[case("<script>alert(1)</script>")]
#[case("# <script>alert(1)</script>")]
#[case("- <script>alert(1)</script>")]
#[case("> <script>alert(1)</script>")]
#[case("|<script>alert(1)</script>|")]
#[case("```\n<script>alert(1)</script>\n```")]
#[case("```<script>\nx\n```")]
#[case("**<script>**alert(1)</script>")]
#[case("[<script>](x)")]
fn script_tags_never_survive(#[case] doc: &str) {
    let html = render(doc);
    assert!(!html.contains("<script"), "unescaped script in {html:?}");
    assert!(html.contains("&lt;script"));
}

#[rstest]
#[case("say \"hi\" & leave")]
#[case("- say \"hi\" & leave")]
#[case("|say \"hi\" & leave|")]
#[case("```\nsay \"hi\" & leave\n```")]
fn quotes_and_ampersands_are_escaped(#[case] doc: &str) {
    let html = render(doc);
    assert!(html.contains("&quot;hi&quot; &amp; leave"), "{html:?}");
    assert!(!html.contains("\"hi\""));
}

#[test]
fn mixed_document_snapshot() {
    let doc = "\
# Weekly report

Status is **green**; see [board](https://example.com/board).
Second line of the paragraph.

## Tasks
- ship `v1`
- review
|Task|Owner|
|:---|---:|
|Deploy|ops|
> Keep it simple
---
```sh
echo \"<done>\"
```
";
    insta::assert_snapshot!(render(doc), @r#"
    <h1>Weekly report</h1>
    <p>Status is <strong>green</strong>; see <a href="https://example.com/board">board</a>. Second line of the paragraph.</p>
    <h2>Tasks</h2>
    <ul>
    <li>ship <code>v1</code></li>
    <li>review</li>
    </ul>
    <table>
    <thead>
    <tr><th>Task</th><th>Owner</th></tr>
    </thead>
    <tbody>
    <tr><td>Deploy</td><td>ops</td></tr>
    </tbody>
    </table>
    <blockquote>Keep it simple</blockquote>
    <hr />
    <pre><code class="language-sh">echo &quot;&lt;done&gt;&quot;</code></pre>
    "#);
}

#[test]
fn parse_blocks_keeps_text_raw() {
    let blocks = parse_blocks("<b>raw</b>");
    assert_eq!(
        blocks,
        vec![crate::render::Block::Paragraph {
            lines: vec!["<b>raw</b>".to_string()]
        }]
    );
}

#[test]
fn transcoder_renders_within_limits() {
    let transcoder = MarkdownTranscoder::default();
    assert_eq!(transcoder.render("- a"), Ok("<ul>\n<li>a</li>\n</ul>\n".to_string()));
}

#[test]
fn transcoder_rejects_oversized_input() {
    let transcoder = MarkdownTranscoder::new(RenderLimits {
        max_bytes: 4,
        max_lines: 100,
    });
    assert_eq!(
        transcoder.render("hello"),
        Err(RenderError::InputTooLarge { bytes: 5, limit: 4 })
    );
}

#[test]
fn transcoder_rejects_too_many_lines() {
    let transcoder = MarkdownTranscoder::new(RenderLimits {
        max_bytes: usize::MAX,
        max_lines: 2,
    });
    assert!(transcoder.render("a\nb").is_ok());
    assert_eq!(
        transcoder.render("```\n```\n```\n"),
        Err(RenderError::TooManyLines { limit: 2 })
    );
}

#[test]
fn unbounded_limits_accept_anything() {
    let doc = "```\n".repeat(5_000);
    assert!(RenderLimits::unbounded().check(&doc).is_ok());
}

#[test]
fn concurrent_renders_are_independent() {
    let docs = ["# A\n- x", "```\nopen fence", "|h|\n|-|\n|b|", "plain"];
    let expected: Vec<String> = docs.iter().map(|d| render(d)).collect();

    let handles: Vec<_> = docs
        .iter()
        .map(|d| {
            let d = d.to_string();
            std::thread::spawn(move || render(&d))
        })
        .collect();

    for (handle, want) in handles.into_iter().zip(expected) {
        assert_eq!(handle.join().unwrap(), want);
    }
}
