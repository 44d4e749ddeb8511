//! Route handlers.
//!
//! Every handler follows the same shape: resolve the caller's session, run
//! the gate for protected routes, call into the stores, and commit the
//! session back while building the response. Expected failures (missing
//! documents, invalid names, rejected credentials) become redirects with a
//! flash or 422 re-rendered forms; only infrastructure failures propagate
//! as `ServerError` and surface as 500.

use axum::extract::{Multipart, Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Json, Response};
use axum::Form;
use serde::Deserialize;
use serde_json::json;

use folio_auth::AuthError;
use folio_render::{render, RenderedDocument};
use folio_types::{DocumentName, ImageName};

use crate::error::{ServerError, ServerResult};
use crate::pages;
use crate::sessions::RequestSession;
use crate::state::AppState;

/// Flash shown when a named image cannot be served.
pub const FLASH_IMAGE_MISSING: &str = "Image does not exist. Please select image from list.";
/// Flash shown after a successful image upload.
pub const FLASH_IMAGE_UPLOADED: &str = "Image uploaded successfully.";

fn redirect(to: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, to.to_string())]).into_response()
}

/// Run the gate; on rejection the response is the sign-in redirect and the
/// guarded operation below never executes.
fn gate(state: &AppState, rs: &mut RequestSession) -> Result<(), Response> {
    match state.gate.require_signed_in(&mut rs.session) {
        Ok(()) => Ok(()),
        Err(_) => Err(redirect("/users/signin")),
    }
}

// ---------------------------------------------------------------------------
// Listing and health
// ---------------------------------------------------------------------------

pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> ServerResult<Response> {
    let mut rs = RequestSession::load(&state.sessions, &headers);
    let documents = state.documents.list()?;
    let images = state.images.list()?;
    let flash = rs.session.take_flash();
    let page = pages::index(rs.session.username(), flash.as_deref(), &documents, &images);
    Ok(rs.commit(&state.sessions, Html(page).into_response()))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// ---------------------------------------------------------------------------
// Sign in / sign out
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct SignInForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

pub async fn signin_form(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ServerResult<Response> {
    let mut rs = RequestSession::load(&state.sessions, &headers);
    let flash = rs.session.take_flash();
    let page = pages::signin(flash.as_deref(), "");
    Ok(rs.commit(&state.sessions, Html(page).into_response()))
}

pub async fn signin_submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<SignInForm>,
) -> ServerResult<Response> {
    let mut rs = RequestSession::load(&state.sessions, &headers);
    match state
        .gate
        .sign_in(&mut rs.session, &form.username, &form.password)
    {
        Ok(()) => Ok(rs.commit(&state.sessions, redirect("/"))),
        Err(AuthError::InvalidCredentials) => {
            // Re-render the form with the rejected username preserved.
            let flash = rs.session.take_flash();
            let page = pages::signin(flash.as_deref(), &form.username);
            let response = (StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response();
            Ok(rs.commit(&state.sessions, response))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn signout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ServerResult<Response> {
    let mut rs = RequestSession::load(&state.sessions, &headers);
    state.gate.sign_out(&mut rs.session);
    Ok(rs.commit(&state.sessions, redirect("/")))
}

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct CreateForm {
    #[serde(default)]
    pub new_file: String,
}

#[derive(Deserialize)]
pub struct UpdateForm {
    #[serde(default)]
    pub new_text: String,
}

pub async fn new_form(State(state): State<AppState>, headers: HeaderMap) -> ServerResult<Response> {
    let mut rs = RequestSession::load(&state.sessions, &headers);
    if let Err(response) = gate(&state, &mut rs) {
        return Ok(rs.commit(&state.sessions, response));
    }
    let flash = rs.session.take_flash();
    let page = pages::new_document(rs.session.username(), flash.as_deref(), "");
    Ok(rs.commit(&state.sessions, Html(page).into_response()))
}

pub async fn create_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<CreateForm>,
) -> ServerResult<Response> {
    let mut rs = RequestSession::load(&state.sessions, &headers);
    if let Err(response) = gate(&state, &mut rs) {
        return Ok(rs.commit(&state.sessions, response));
    }
    match DocumentName::parse(&form.new_file) {
        Ok(name) => {
            state.documents.create(&name)?;
            rs.session.set_flash(format!("{name} has been created."));
            Ok(rs.commit(&state.sessions, redirect("/")))
        }
        Err(e) => {
            let page =
                pages::new_document(rs.session.username(), Some(&e.to_string()), &form.new_file);
            let response = (StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response();
            Ok(rs.commit(&state.sessions, response))
        }
    }
}

pub async fn view_document(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    headers: HeaderMap,
) -> ServerResult<Response> {
    let mut rs = RequestSession::load(&state.sessions, &headers);
    if let Err(response) = gate(&state, &mut rs) {
        return Ok(rs.commit(&state.sessions, response));
    }
    let Ok(name) = DocumentName::parse(&raw) else {
        rs.session.set_flash(format!("{raw} does not exist."));
        return Ok(rs.commit(&state.sessions, redirect("/")));
    };
    match state.documents.read(&name) {
        Ok(content) => match render(name.kind(), &content) {
            RenderedDocument::Html(fragment) => {
                let flash = rs.session.take_flash();
                let page = pages::document(rs.session.username(), flash.as_deref(), &fragment);
                Ok(rs.commit(&state.sessions, Html(page).into_response()))
            }
            rendered @ RenderedDocument::PlainText(_) => {
                // Plain text bypasses the layout, so a pending flash stays
                // queued for the next HTML render.
                let response = (
                    [(header::CONTENT_TYPE, rendered.content_type())],
                    rendered.body().to_string(),
                )
                    .into_response();
                Ok(rs.commit(&state.sessions, response))
            }
        },
        Err(e) if e.is_not_found() => {
            rs.session.set_flash(format!("{name} does not exist."));
            Ok(rs.commit(&state.sessions, redirect("/")))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn edit_form(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    headers: HeaderMap,
) -> ServerResult<Response> {
    let mut rs = RequestSession::load(&state.sessions, &headers);
    if let Err(response) = gate(&state, &mut rs) {
        return Ok(rs.commit(&state.sessions, response));
    }
    let Ok(name) = DocumentName::parse(&raw) else {
        rs.session.set_flash(format!("{raw} does not exist."));
        return Ok(rs.commit(&state.sessions, redirect("/")));
    };
    match state.documents.read(&name) {
        Ok(content) => {
            let flash = rs.session.take_flash();
            let page = pages::edit(rs.session.username(), flash.as_deref(), &name, &content);
            Ok(rs.commit(&state.sessions, Html(page).into_response()))
        }
        Err(e) if e.is_not_found() => {
            rs.session.set_flash(format!("{name} does not exist."));
            Ok(rs.commit(&state.sessions, redirect("/")))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn update_document(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    headers: HeaderMap,
    Form(form): Form<UpdateForm>,
) -> ServerResult<Response> {
    let mut rs = RequestSession::load(&state.sessions, &headers);
    if let Err(response) = gate(&state, &mut rs) {
        return Ok(rs.commit(&state.sessions, response));
    }
    match DocumentName::parse(&raw) {
        Ok(name) => {
            // Blind write: the store creates the file if it is absent.
            state.documents.update(&name, &form.new_text)?;
            rs.session.set_flash(format!("{name} has been updated."));
            Ok(rs.commit(&state.sessions, redirect("/")))
        }
        Err(e) => {
            rs.session.set_flash(e.to_string());
            Ok(rs.commit(&state.sessions, redirect("/")))
        }
    }
}

pub async fn delete_document(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    headers: HeaderMap,
) -> ServerResult<Response> {
    let mut rs = RequestSession::load(&state.sessions, &headers);
    if let Err(response) = gate(&state, &mut rs) {
        return Ok(rs.commit(&state.sessions, response));
    }
    let Ok(name) = DocumentName::parse(&raw) else {
        rs.session.set_flash(format!("{raw} does not exist."));
        return Ok(rs.commit(&state.sessions, redirect("/")));
    };
    match state.documents.delete(&name) {
        Ok(()) => {
            rs.session.set_flash(format!("{name} has been deleted."));
            Ok(rs.commit(&state.sessions, redirect("/")))
        }
        Err(e) if e.is_not_found() => {
            rs.session.set_flash(format!("{name} does not exist."));
            Ok(rs.commit(&state.sessions, redirect("/")))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn duplicate_document(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    headers: HeaderMap,
) -> ServerResult<Response> {
    let mut rs = RequestSession::load(&state.sessions, &headers);
    if let Err(response) = gate(&state, &mut rs) {
        return Ok(rs.commit(&state.sessions, response));
    }
    let Ok(name) = DocumentName::parse(&raw) else {
        rs.session.set_flash(format!("{raw} does not exist."));
        return Ok(rs.commit(&state.sessions, redirect("/")));
    };
    match state.documents.duplicate(&name) {
        Ok(_copy) => {
            rs.session.set_flash(format!("Created copy of {name}"));
            Ok(rs.commit(&state.sessions, redirect("/")))
        }
        Err(e) if e.is_not_found() => {
            rs.session.set_flash(format!("{name} does not exist."));
            Ok(rs.commit(&state.sessions, redirect("/")))
        }
        Err(e) => Err(e.into()),
    }
}

// ---------------------------------------------------------------------------
// Images
// ---------------------------------------------------------------------------

pub async fn image_page(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    headers: HeaderMap,
) -> ServerResult<Response> {
    let mut rs = RequestSession::load(&state.sessions, &headers);
    if let Err(response) = gate(&state, &mut rs) {
        return Ok(rs.commit(&state.sessions, response));
    }
    let Ok(name) = ImageName::parse(&raw) else {
        rs.session.set_flash(FLASH_IMAGE_MISSING);
        return Ok(rs.commit(&state.sessions, redirect("/")));
    };
    if state.images.exists(&name)? {
        let flash = rs.session.take_flash();
        let page = pages::image(rs.session.username(), flash.as_deref(), &name);
        Ok(rs.commit(&state.sessions, Html(page).into_response()))
    } else {
        rs.session.set_flash(FLASH_IMAGE_MISSING);
        Ok(rs.commit(&state.sessions, redirect("/")))
    }
}

pub async fn raw_image(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    headers: HeaderMap,
) -> ServerResult<Response> {
    let mut rs = RequestSession::load(&state.sessions, &headers);
    if let Err(response) = gate(&state, &mut rs) {
        return Ok(rs.commit(&state.sessions, response));
    }
    let Ok(name) = ImageName::parse(&raw) else {
        return Ok(rs.commit(&state.sessions, StatusCode::NOT_FOUND.into_response()));
    };
    match state.images.read(&name) {
        Ok(bytes) => {
            let response =
                ([(header::CONTENT_TYPE, name.content_type())], bytes).into_response();
            Ok(rs.commit(&state.sessions, response))
        }
        Err(e) if e.is_not_found() => {
            Ok(rs.commit(&state.sessions, StatusCode::NOT_FOUND.into_response()))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn upload_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> ServerResult<Response> {
    let mut rs = RequestSession::load(&state.sessions, &headers);
    if let Err(response) = gate(&state, &mut rs) {
        return Ok(rs.commit(&state.sessions, response));
    }

    let mut submitted: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServerError::Internal(e.to_string()))?
    {
        if field.name() == Some("image") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ServerError::Internal(e.to_string()))?;
            submitted = Some((filename, bytes.to_vec()));
        }
    }
    let (filename, bytes) = submitted.unwrap_or_default();

    match ImageName::parse(&filename) {
        Ok(name) => {
            state.images.upload(&name, &bytes)?;
            rs.session.set_flash(FLASH_IMAGE_UPLOADED);
            Ok(rs.commit(&state.sessions, redirect("/")))
        }
        Err(e) => {
            rs.session.set_flash(e.to_string());
            Ok(rs.commit(&state.sessions, redirect("/")))
        }
    }
}
