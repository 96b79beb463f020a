use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    http::handlers::{
        create_feedback_handler, delete_feedback_handler, get_owner_feedback_handler,
        update_feedback_handler,
    },
    state::AppState,
};

// `/feedback/{id}` carries an owner id on GET and a record id on PUT/DELETE.
pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/feedback", post(create_feedback_handler))
        .route(
            "/feedback/{id}",
            get(get_owner_feedback_handler)
                .put(update_feedback_handler)
                .delete(delete_feedback_handler),
        )
        .with_state(state)
}
