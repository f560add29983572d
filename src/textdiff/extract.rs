use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html};

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

const SKIPPED_TAGS: &[&str] = &["script", "style", "noscript", "template", "head"];

const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "fieldset",
    "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main",
    "nav", "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

/// Extracts normalized visible text from markup.
///
/// Script/style/comment content is dropped, whitespace inside a block-level
/// group collapses to single spaces and groups are separated by a blank
/// line. Plain (non-markup) text passes through the same path unchanged
/// apart from normalization. Malformed markup is parsed best-effort;
/// irrecoverable input yields an empty string. Never fails.
pub fn extract_visible_text(markup: &str) -> String {
    if markup.trim().is_empty() {
        return String::new();
    }
    let document = Html::parse_document(markup);
    let mut blocks = Vec::new();
    let mut current = String::new();
    collect_text(document.root_element(), &mut blocks, &mut current);
    flush_block(&mut blocks, &mut current);
    blocks.join("\n\n")
}

fn collect_text(element: ElementRef<'_>, blocks: &mut Vec<String>, current: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            current.push_str(text);
            current.push(' ');
        } else if let Some(child_el) = ElementRef::wrap(child) {
            let name = child_el.value().name();
            if SKIPPED_TAGS.contains(&name) {
                continue;
            }
            let is_block = BLOCK_TAGS.contains(&name);
            if is_block {
                flush_block(blocks, current);
            }
            collect_text(child_el, blocks, current);
            if is_block {
                flush_block(blocks, current);
            }
        }
    }
}

fn flush_block(blocks: &mut Vec<String>, current: &mut String) {
    let normalized = WHITESPACE.replace_all(current.trim(), " ").into_owned();
    current.clear();
    if !normalized.is_empty() {
        blocks.push(normalized);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_paragraph_text() {
        let html = "<html><body><p>Hello</p><p>World</p></body></html>";
        assert_eq!(extract_visible_text(html), "Hello\n\nWorld");
    }

    #[test]
    fn drops_script_style_and_comments() {
        let html = r#"
        <html><body>
            <p>Visible content</p>
            <script>alert('nope');</script>
            <style>.x { display: none; }</style>
            <!-- a comment -->
            <noscript>fallback</noscript>
        </body></html>"#;
        assert_eq!(extract_visible_text(html), "Visible content");
    }

    #[test]
    fn collapses_whitespace_within_blocks() {
        let html = "<div>  Trial\n\t  3   status </div>";
        assert_eq!(extract_visible_text(html), "Trial 3 status");
    }

    #[test]
    fn inline_markup_stays_in_one_block() {
        let html = "<p>Status: <b>Pending</b> approval</p>";
        assert_eq!(extract_visible_text(html), "Status: Pending approval");
    }

    #[test]
    fn tolerates_malformed_markup() {
        let text = extract_visible_text("<div><p>Un closed <b>tags");
        assert!(text.contains("Un closed"));
        assert!(text.contains("tags"));
    }

    #[test]
    fn empty_and_blank_input_yield_empty_string() {
        assert_eq!(extract_visible_text(""), "");
        assert_eq!(extract_visible_text("   \n\t "), "");
    }

    #[test]
    fn accepts_pre_extracted_plain_text() {
        assert_eq!(extract_visible_text("already extracted text"), "already extracted text");
    }
}
