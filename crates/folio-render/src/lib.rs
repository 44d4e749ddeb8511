//! Content rendering for Folio.
//!
//! Dispatches on [`DocumentKind`], which was derived from the document's
//! extension when the name was parsed. The match is exhaustive: there is no
//! fallthrough path for an unrecognized extension because no such kind can
//! exist.

use folio_types::DocumentKind;
use pulldown_cmark::{html, Parser};

/// A document's content prepared for the response body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderedDocument {
    /// Markdown converted to an HTML fragment. Embedded raw HTML passes
    /// through untouched; the renderer is deliberately permissive.
    Html(String),
    /// Plain text, byte-for-byte the stored content. The caller must serve
    /// it with the `text/plain` content type.
    PlainText(String),
}

impl RenderedDocument {
    /// The content type the caller should set on the response.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Html(_) => "text/html; charset=utf-8",
            Self::PlainText(_) => "text/plain",
        }
    }

    /// The response body.
    pub fn body(&self) -> &str {
        match self {
            Self::Html(body) | Self::PlainText(body) => body,
        }
    }
}

/// Render stored content according to its kind.
pub fn render(kind: DocumentKind, content: &str) -> RenderedDocument {
    match kind {
        DocumentKind::Markdown => RenderedDocument::Html(markdown_to_html(content)),
        DocumentKind::PlainText => RenderedDocument::PlainText(content.to_string()),
    }
}

fn markdown_to_html(content: &str) -> String {
    let parser = Parser::new(content);
    let mut out = String::with_capacity(content.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
