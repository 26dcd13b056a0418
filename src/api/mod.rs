pub mod handlers;
pub mod types;

use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

pub use handlers::AppState;

/// Create the celestial object router.
/// A single-segment GET doubles as lookup-by-id (integer) and
/// lookup-by-name (anything else); the handler dispatches on parse.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::get_all).post(handlers::create))
        .route(
            "/:id",
            get(handlers::get_object)
                .put(handlers::update)
                .delete(handlers::delete_object),
        )
        .route("/:id/:name", patch(handlers::rename_object))
}
