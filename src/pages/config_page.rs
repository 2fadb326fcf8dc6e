const TEMPLATE: &str = include_str!("config_page.html");

/// Renders the admin/help page for `domain`, showing the shared token.
///
/// Values are substituted into HTML text and attributes only; the page
/// scripts read them back from `data-*` attributes on `<body>`.
pub fn render_config_page(domain: &str, token: &str) -> String {
    TEMPLATE
        .replace("{{domain}}", &escape_html(domain))
        .replace("{{token}}", &escape_html(token))
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
