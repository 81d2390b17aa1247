//! Rendering of Sanity Portable Text bodies into HTML.
//!
//! Only what post bodies use is supported: text blocks with `h1`-`h3`,
//! `normal` and `blockquote` styles, bullet and number lists, and the
//! `strong`, `em`, `code` and link marks. Other block types are skipped.

use handlebars::html_escape;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    #[serde(rename = "_type", default)]
    pub kind: String,
    pub style: Option<String>,
    pub list_item: Option<String>,
    #[serde(default)]
    pub children: Vec<Span>,
    #[serde(default)]
    pub mark_defs: Vec<MarkDef>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Span {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub marks: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkDef {
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(rename = "_type", default)]
    pub kind: String,
    pub href: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Bullet,
    Number,
}

impl ListKind {
    fn from_block(block: &Block) -> Option<Self> {
        match block.list_item.as_deref() {
            Some("bullet") => Some(Self::Bullet),
            Some("number") => Some(Self::Number),
            _ => None,
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Self::Bullet => "ul",
            Self::Number => "ol",
        }
    }
}

pub fn to_html(blocks: &[Block]) -> String {
    let mut html = String::new();
    let mut open_list: Option<ListKind> = None;

    for block in blocks.iter().filter(|b| b.kind == "block") {
        let list = ListKind::from_block(block);

        if open_list != list {
            if let Some(kind) = open_list.take() {
                html.push_str(&format!("</{}>", kind.tag()));
            }
            if let Some(kind) = list {
                html.push_str(&format!("<{}>", kind.tag()));
                open_list = Some(kind);
            }
        }

        let inner = render_spans(block);
        if list.is_some() {
            html.push_str(&format!("<li>{inner}</li>"));
            continue;
        }

        let tag = match block.style.as_deref() {
            Some("h1") => "h1",
            Some("h2") => "h2",
            Some("h3") => "h3",
            Some("blockquote") => "blockquote",
            _ => "p",
        };
        html.push_str(&format!("<{tag}>{inner}</{tag}>"));
    }

    if let Some(kind) = open_list {
        html.push_str(&format!("</{}>", kind.tag()));
    }

    html
}

fn render_spans(block: &Block) -> String {
    let mut out = String::new();
    for span in &block.children {
        let mut closers = Vec::new();
        for mark in &span.marks {
            match mark.as_str() {
                "strong" => {
                    out.push_str("<strong>");
                    closers.push("</strong>");
                }
                "em" => {
                    out.push_str("<em>");
                    closers.push("</em>");
                }
                "code" => {
                    out.push_str("<code>");
                    closers.push("</code>");
                }
                key => {
                    let href = block
                        .mark_defs
                        .iter()
                        .find(|d| d.key == key && d.kind == "link")
                        .and_then(|d| d.href.as_deref())
                        .filter(|href| is_safe_href(href));
                    if let Some(href) = href {
                        out.push_str(&format!(
                            r#"<a href="{}" target="_blank" rel="noopener noreferrer">"#,
                            html_escape(href)
                        ));
                        closers.push("</a>");
                    }
                }
            }
        }
        out.push_str(&html_escape(&span.text));
        for closer in closers.into_iter().rev() {
            out.push_str(closer);
        }
    }
    out
}

fn is_safe_href(href: &str) -> bool {
    let href = href.trim();
    ["https://", "http://", "mailto:", "tel:", "/", "#"]
        .iter()
        .any(|prefix| href.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_block(style: &str, text: &str) -> Block {
        Block {
            kind: "block".into(),
            style: Some(style.into()),
            children: vec![Span {
                text: text.into(),
                marks: vec![],
            }],
            ..Default::default()
        }
    }

    fn list_block(kind: &str, text: &str) -> Block {
        Block {
            list_item: Some(kind.into()),
            ..text_block("normal", text)
        }
    }

    #[test]
    fn renders_styles() {
        let html = to_html(&[
            text_block("h2", "Title"),
            text_block("normal", "Body"),
            text_block("blockquote", "Quote"),
        ]);
        assert_eq!(
            html,
            "<h2>Title</h2><p>Body</p><blockquote>Quote</blockquote>"
        );
    }

    #[test]
    fn groups_consecutive_list_items() {
        let html = to_html(&[
            list_block("bullet", "a"),
            list_block("bullet", "b"),
            list_block("number", "c"),
            text_block("normal", "after"),
        ]);
        assert_eq!(
            html,
            "<ul><li>a</li><li>b</li></ul><ol><li>c</li></ol><p>after</p>"
        );
    }

    #[test]
    fn closes_trailing_list() {
        assert_eq!(to_html(&[list_block("bullet", "x")]), "<ul><li>x</li></ul>");
    }

    #[test]
    fn applies_marks_and_links() {
        let block: Block = serde_json::from_str(
            r#"{
                "_type": "block",
                "style": "normal",
                "markDefs": [{"_key": "k1", "_type": "link", "href": "https://lonan.sa"}],
                "children": [
                    {"_type": "span", "text": "bold", "marks": ["strong"]},
                    {"_type": "span", "text": " & ", "marks": []},
                    {"_type": "span", "text": "site", "marks": ["em", "k1"]}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(
            to_html(&[block]),
            concat!(
                "<p><strong>bold</strong> &amp; <em>",
                r#"<a href="https://lonan.sa" target="_blank" rel="noopener noreferrer">site</a>"#,
                "</em></p>"
            )
        );
    }

    #[test]
    fn escapes_text_and_drops_unsafe_links() {
        let mut block = text_block("normal", "<script>");
        block.children[0].marks = vec!["k".into()];
        block.mark_defs = vec![MarkDef {
            key: "k".into(),
            kind: "link".into(),
            href: Some("javascript:alert(1)".into()),
        }];
        assert_eq!(to_html(&[block]), "<p>&lt;script&gt;</p>");
    }

    #[test]
    fn skips_non_text_blocks() {
        let image = Block {
            kind: "image".into(),
            ..Default::default()
        };
        assert_eq!(to_html(&[image, text_block("normal", "x")]), "<p>x</p>");
    }
}
