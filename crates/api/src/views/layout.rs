use super::html::escape;

pub const SITE_TITLE: &str = "Disney Fan Site";
pub const SITE_DESCRIPTION: &str = "Search for Disney Characters and view details";

/// Full HTML document: header, page content, footer.
///
/// Fragments are inserted as-is; they are expected to be escaped already.
pub fn layout(header: &str, content: &str, footer: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>",
            r#"<html lang="en">"#,
            "<head>",
            r#"<meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            "<title>{title}</title>",
            r#"<meta name="description" content="{description}">"#,
            "</head>",
            "<body>",
            "{header}",
            "<main>{content}</main>",
            "{footer}",
            "</body>",
            "</html>",
        ),
        title = escape(SITE_TITLE),
        description = escape(SITE_DESCRIPTION),
        header = header,
        content = content,
        footer = footer,
    )
}
