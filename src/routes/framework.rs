//! Framework routes. Paths put the verb before the id (`/frameworks/delete/:id`).

use crate::handlers::framework::{create, delete as delete_handler, list, search, set_version, update, versions};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub fn framework_routes(state: AppState) -> Router {
    Router::new()
        .route("/frameworks", get(list))
        .route("/frameworks/search/:name", get(search))
        .route("/frameworks/add", post(create))
        .route("/frameworks/update/:id", put(update))
        .route("/frameworks/delete/:id", delete(delete_handler))
        .route("/frameworks/setversion/:id", put(set_version))
        .route("/frameworks/versions/:id", get(versions))
        .with_state(state)
}
