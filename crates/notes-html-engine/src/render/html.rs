use std::borrow::Cow;

use super::{blocks::Block, inline::render_inline};

/// Neutralizes `&`, `<`, `>`, `"` and `'`.
///
/// Safe for both text content and quoted attribute values.
pub fn escape(s: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(s)
}

pub fn render_blocks(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        write_block(&mut out, block);
    }
    out
}

/// Appends one block's markup, terminated by a newline.
///
/// Every text fragment is escaped exactly once here. Code block lines are
/// escaped and never inline-formatted; everything else is escaped and then
/// inline-formatted.
pub fn write_block(out: &mut String, block: &Block) {
    match block {
        Block::Heading { level, text } => {
            let level = (*level).clamp(1, 3);
            out.push_str(&format!("<h{level}>"));
            out.push_str(&render_inline(text));
            out.push_str(&format!("</h{level}>\n"));
        }
        Block::Paragraph { lines } => {
            out.push_str("<p>");
            out.push_str(&render_inline(&lines.join(" ")));
            out.push_str("</p>\n");
        }
        Block::List { items } => {
            out.push_str("<ul>\n");
            for item in items {
                out.push_str("<li>");
                out.push_str(&render_inline(item));
                out.push_str("</li>\n");
            }
            out.push_str("</ul>\n");
        }
        Block::Table { header, rows } => {
            out.push_str("<table>\n<thead>\n");
            write_row(out, "th", header);
            out.push_str("</thead>\n");
            if !rows.is_empty() {
                out.push_str("<tbody>\n");
                for row in rows {
                    write_row(out, "td", row);
                }
                out.push_str("</tbody>\n");
            }
            out.push_str("</table>\n");
        }
        Block::CodeBlock { lang, lines } => {
            match lang {
                // The token is attacker-controlled text inside an attribute
                Some(lang) => {
                    out.push_str(r#"<pre><code class="language-"#);
                    out.push_str(&escape(lang));
                    out.push_str(r#"">"#);
                }
                None => out.push_str("<pre><code>"),
            }
            out.push_str(&escape(&lines.join("\n")));
            out.push_str("</code></pre>\n");
        }
        Block::Blockquote { text } => {
            out.push_str("<blockquote>");
            out.push_str(&render_inline(text));
            out.push_str("</blockquote>\n");
        }
        Block::HorizontalRule => out.push_str("<hr />\n"),
    }
}

fn write_row(out: &mut String, cell_tag: &str, cells: &[String]) {
    out.push_str("<tr>");
    for cell in cells {
        out.push_str(&format!("<{cell_tag}>"));
        out.push_str(&render_inline(cell));
        out.push_str(&format!("</{cell_tag}>"));
    }
    out.push_str("</tr>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn escape_neutralizes_markup_and_quotes() {
        assert_eq!(
            escape(r#"<a href="x">&</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;"
        );
        assert!(!escape("it's").contains('\''));
    }

    #[test]
    fn escape_borrows_clean_text() {
        assert!(matches!(escape("clean"), Cow::Borrowed("clean")));
    }

    #[test]
    fn heading_is_escaped_and_formatted() {
        let html = render_blocks(&[Block::Heading {
            level: 3,
            text: "**Title** <x>".to_string(),
        }]);
        assert_eq!(html, "<h3><strong>Title</strong> &lt;x&gt;</h3>\n");
    }

    #[test]
    fn paragraph_lines_join_with_space() {
        let html = render_blocks(&[Block::Paragraph {
            lines: strings(&["one", "two"]),
        }]);
        assert_eq!(html, "<p>one two</p>\n");
    }

    #[test]
    fn table_without_body_rows_has_no_tbody() {
        let html = render_blocks(&[Block::Table {
            header: strings(&["A"]),
            rows: vec![],
        }]);
        assert_eq!(html, "<table>\n<thead>\n<tr><th>A</th></tr>\n</thead>\n</table>\n");
    }

    #[test]
    fn code_block_is_escaped_but_not_formatted() {
        let html = render_blocks(&[Block::CodeBlock {
            lang: None,
            lines: strings(&["**not bold** <b>", "  `x` & y"]),
        }]);
        assert_eq!(
            html,
            "<pre><code>**not bold** &lt;b&gt;\n  `x` &amp; y</code></pre>\n"
        );
    }

    #[test]
    fn code_lang_cannot_inject_attributes() {
        let html = render_blocks(&[Block::CodeBlock {
            lang: Some(r#"x" onmouseover="alert(1)"#.to_string()),
            lines: vec![],
        }]);
        assert_eq!(
            html,
            "<pre><code class=\"language-x&quot; onmouseover=&quot;alert(1)\"></code></pre>\n"
        );
    }

    #[test]
    fn blockquote_and_rule() {
        let html = render_blocks(&[
            Block::Blockquote {
                text: "`q`".to_string(),
            },
            Block::HorizontalRule,
        ]);
        assert_eq!(html, "<blockquote><code>q</code></blockquote>\n<hr />\n");
    }
}
