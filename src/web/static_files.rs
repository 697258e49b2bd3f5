//! Embedded page templates and file responses.
//!
//! Pages are compiled into the binary from the `templates/` directory.
//! Placeholders are written `{{name}}` and every substituted value is
//! HTML-escaped.

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use rust_embed::Embed;

use crate::export::interactive::escape_html;

/// Page templates embedded at compile time.
#[derive(Embed)]
#[folder = "templates"]
#[include = "*.html"]
pub struct Templates;

/// Fills a template's `{{placeholders}}` with escaped values.
///
/// Returns `None` when the template does not exist.
#[must_use]
pub fn render_template(name: &str, vars: &[(&str, String)]) -> Option<String> {
    let file = Templates::get(name)?;
    let mut page = String::from_utf8_lossy(file.data.as_ref()).into_owned();

    for (key, value) in vars {
        page = page.replace(&format!("{{{{{key}}}}}"), &escape_html(value));
    }

    Some(page)
}

/// Renders a template into an HTML response, or a 500 if it is missing.
pub fn page_response(name: &str, vars: &[(&str, String)]) -> Response {
    match render_template(name, vars) {
        Some(page) => (
            [(header::CACHE_CONTROL, "no-cache, must-revalidate")],
            Html(page),
        )
            .into_response(),
        None => (StatusCode::INTERNAL_SERVER_ERROR, "Template not found").into_response(),
    }
}

/// Creates a response for a generated file with a content type guessed from
/// its name. With `attachment` set, browsers download instead of display.
pub fn file_response(filename: &str, content: Vec<u8>, attachment: bool) -> Response {
    let mime = mime_guess::from_path(filename).first_or_octet_stream();

    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime.as_ref());

    if attachment {
        builder = builder.header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        );
    }

    builder.body(Body::from(content)).unwrap_or_else(|_| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to create response",
        )
            .into_response()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_pages_are_embedded() {
        for name in ["index.html", "result.html", "about.html"] {
            assert!(Templates::get(name).is_some(), "{name} missing");
        }
    }

    #[test]
    fn test_placeholders_are_escaped() {
        let page = render_template(
            "index.html",
            &[
                ("flash", "<script>alert(1)</script>".to_string()),
                ("flash_level", "error".to_string()),
                ("flash_hidden", String::new()),
            ],
        )
        .unwrap();
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!page.contains("{{flash}}"));
    }

    #[test]
    fn test_missing_template() {
        assert!(render_template("nope.html", &[]).is_none());
    }

    #[test]
    fn test_file_response_headers() {
        let response = file_response("layers.png", vec![1, 2, 3], true);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"layers.png\""
        );

        let inline = file_response("view.html", Vec::new(), false);
        assert_eq!(inline.headers()[header::CONTENT_TYPE], "text/html");
        assert!(inline.headers().get(header::CONTENT_DISPOSITION).is_none());
    }
}
