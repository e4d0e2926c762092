//! Route definitions for the `/trees` resource.
//!
//! Also nests the member collection and the graph under
//! `/trees/{id}/...`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{graph, member, tree};
use crate::state::AppState;

/// Routes mounted at `/trees`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create
/// GET    /{id}                      -> get_by_id
/// PATCH  /{id}                      -> update
/// DELETE /{id}                      -> delete
///
/// GET    /{id}/members              -> list_by_tree
/// POST   /{id}/members              -> create
///
/// GET    /{id}/graph                -> get_graph
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tree::list).post(tree::create))
        .route(
            "/{id}",
            get(tree::get_by_id)
                .patch(tree::update)
                .delete(tree::delete),
        )
        .route(
            "/{id}/members",
            get(member::list_by_tree).post(member::create),
        )
        .route("/{id}/graph", get(graph::get_graph))
}
