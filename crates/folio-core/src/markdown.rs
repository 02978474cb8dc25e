use pulldown_cmark::{html, Event, Options, Parser};

/// Render a blog body to HTML.
///
/// Raw HTML blocks in the source are escaped rather than passed through.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_and_code() {
        let out = render_markdown("## Title\n\n```php\necho 1;\n```\n");
        assert!(out.contains("<h2>Title</h2>"));
        assert!(out.contains("<code class=\"language-php\">"));
    }

    #[test]
    fn test_tables_enabled() {
        let out = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(out.contains("<table>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let out = render_markdown("<script>alert(1)</script>\n");
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
    }
}
