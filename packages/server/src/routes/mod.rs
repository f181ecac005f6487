use axum::{Router, routing::get};

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(default_routes())
        .nest("/demos", demo_routes())
}

fn default_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::status::status))
        .route("/status", get(handlers::status::status))
}

fn demo_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::demo::list_demos).post(handlers::demo::create_demo),
        )
        .route(
            "/{id}",
            get(handlers::demo::get_demo)
                .put(handlers::demo::update_demo)
                .delete(handlers::demo::delete_demo),
        )
}
