//! Markdown rendering for post bodies.

use comrak::markdown_to_html;
use comrak::options::Options;

/// Render post markdown to HTML. Raw HTML in the source is not passed through.
pub fn render_markdown(source: &str) -> String {
    markdown_to_html(source, &options())
}

fn options() -> Options<'static> {
    let mut options = Options::default();
    let ext = &mut options.extension;
    ext.strikethrough = true;
    ext.table = true;
    ext.autolink = true;
    ext.tasklist = true;
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_headings_and_emphasis() {
        let html = render_markdown("# Hello\n\nSome *text*.");
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("<em>text</em>"));
    }

    #[test]
    fn test_raw_html_is_not_emitted() {
        let html = render_markdown("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
    }
}
