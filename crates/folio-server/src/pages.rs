//! HTML page rendering.
//!
//! Pages are assembled with plain string formatting around a shared layout.
//! Everything user-controlled (names, document content, form prefills) goes
//! through [`escape_html`] before it reaches a page; markdown output is the
//! one deliberate exception since the renderer is permissive by design.

use folio_types::{DocumentName, ImageName};

/// Escape text for interpolation into HTML.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// The shared page shell: title, session header, pending flash, body.
pub fn layout(title: &str, username: Option<&str>, flash: Option<&str>, body: &str) -> String {
    let flash_html = match flash {
        Some(message) => format!("<p class=\"flash\">{}</p>\n", escape_html(message)),
        None => String::new(),
    };
    let session_html = match username {
        Some(user) => format!(
            "<p>Signed in as {}.</p>\n\
             <form method=\"post\" action=\"/users/signout\"><button type=\"submit\">Sign Out</button></form>",
            escape_html(user)
        ),
        None => "<p><a href=\"/users/signin\">Sign In</a></p>".to_string(),
    };
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n\
         <body>\n<header>\n{}{}</header>\n<main>\n{}\n</main>\n</body>\n</html>\n",
        escape_html(title),
        flash_html,
        session_html,
        body
    )
}

/// The listing page: documents with their actions, images, and the upload
/// form.
pub fn index(
    username: Option<&str>,
    flash: Option<&str>,
    documents: &[DocumentName],
    images: &[ImageName],
) -> String {
    let mut body = String::from("<h1>Documents</h1>\n<ul class=\"documents\">\n");
    for name in documents {
        let escaped = escape_html(name.as_str());
        body.push_str(&format!(
            "<li><a href=\"/{escaped}\">{escaped}</a>\n\
             <a href=\"/{escaped}/edit\">edit</a>\n\
             <form method=\"post\" action=\"/{escaped}/delete\"><button type=\"submit\">delete</button></form>\n\
             <form method=\"post\" action=\"/{escaped}/duplicate\"><button type=\"submit\">duplicate</button></form></li>\n"
        ));
    }
    body.push_str("</ul>\n<p><a href=\"/new\">New Document</a></p>\n");

    body.push_str("<h1>Images</h1>\n<ul class=\"images\">\n");
    for name in images {
        let escaped = escape_html(name.as_str());
        body.push_str(&format!(
            "<li><a href=\"/image/{escaped}\">{escaped}</a></li>\n"
        ));
    }
    body.push_str(
        "</ul>\n<form method=\"post\" action=\"/image/upload\" enctype=\"multipart/form-data\">\n\
         <input type=\"file\" name=\"image\"/>\n<input type=\"submit\" value=\"Upload\"/>\n</form>\n",
    );

    layout("Folio", username, flash, &body)
}

/// The sign-in form, optionally pre-filled with the rejected username.
pub fn signin(flash: Option<&str>, username_prefill: &str) -> String {
    let body = format!(
        "<h1>Sign In</h1>\n<form method=\"post\" action=\"/users/signin\">\n\
         <label>Username: <input type=\"text\" name=\"username\" value=\"{}\"/></label>\n\
         <label>Password: <input type=\"password\" name=\"password\"/></label>\n\
         <input type=\"submit\" value=\"Sign In\"/>\n</form>\n",
        escape_html(username_prefill)
    );
    layout("Sign In", None, flash, &body)
}

/// The new-document form, optionally pre-filled with the rejected name.
pub fn new_document(username: Option<&str>, flash: Option<&str>, prefill: &str) -> String {
    let body = format!(
        "<h1>Add a new document</h1>\n<form method=\"post\" action=\"/create\">\n\
         <input type=\"text\" name=\"new_file\" value=\"{}\"/>\n\
         <input type=\"submit\" value=\"Create\"/>\n</form>\n",
        escape_html(prefill)
    );
    layout("New Document", username, flash, &body)
}

/// The edit form with the document's raw content.
pub fn edit(username: Option<&str>, flash: Option<&str>, name: &DocumentName, content: &str) -> String {
    let escaped_name = escape_html(name.as_str());
    let body = format!(
        "<h1>Edit content of {escaped_name}</h1>\n\
         <form method=\"post\" action=\"/{escaped_name}\">\n\
         <textarea name=\"new_text\" rows=\"20\" cols=\"80\">{}</textarea>\n\
         <input type=\"submit\" value=\"Save Changes\"/>\n</form>\n",
        escape_html(content)
    );
    layout("Edit", username, flash, &body)
}

/// A rendered markdown document inside the layout.
pub fn document(username: Option<&str>, flash: Option<&str>, html_fragment: &str) -> String {
    layout("Folio", username, flash, html_fragment)
}

/// The image page embedding the image itself.
pub fn image(username: Option<&str>, flash: Option<&str>, name: &ImageName) -> String {
    let escaped = escape_html(name.as_str());
    let body = format!("<h1>{escaped}</h1>\n<img src=\"/image/raw/{escaped}\" alt=\"{escaped}\"/>\n");
    layout("Image", username, flash, &body)
}
