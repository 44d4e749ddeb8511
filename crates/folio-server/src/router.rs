use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// Build the axum router over the full HTTP surface.
///
/// Static segments (`/new`, `/create`, `/users/...`, `/image/...`) take
/// precedence over the `/:name` capture, so the document routes only see
/// actual document names.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handler::index))
        .route("/health", get(handler::health))
        .route(
            "/users/signin",
            get(handler::signin_form).post(handler::signin_submit),
        )
        .route("/users/signout", post(handler::signout))
        .route("/new", get(handler::new_form))
        .route("/create", post(handler::create_document))
        .route("/image/upload", post(handler::upload_image))
        .route("/image/raw/:name", get(handler::raw_image))
        .route("/image/:name", get(handler::image_page))
        .route(
            "/:name",
            get(handler::view_document).post(handler::update_document),
        )
        .route("/:name/edit", get(handler::edit_form))
        .route("/:name/delete", post(handler::delete_document))
        .route("/:name/duplicate", post(handler::duplicate_document))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
