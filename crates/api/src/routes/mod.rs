pub mod auth;
pub mod health;
pub mod member;
pub mod tree;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                          register (public)
/// /auth/login                           login (public)
/// /auth/me                              get, update own profile (auth required)
///
/// /trees                                list own, create (auth required)
/// /trees/{id}                           get (public trees: no auth), update, delete
/// /trees/{id}/members                   list (public trees: no auth), create
/// /trees/{id}/graph                     positioned relationship graph
///
/// /members/{id}                         get (public trees: no auth), update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/trees", tree::router())
        .nest("/members", member::router())
}
