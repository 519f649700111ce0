//! # Casting Agency Routes Module
//!
//! Actors and movies. Every route is gated by a permission carried in the
//! caller's access token.
//!
//! ## Structure
//! - `get.rs` - paginated actor and movie listings
//! - `post.rs` - actor and movie creation
//! - `patch.rs` - partial updates
//! - `delete.rs` - removal

use crate::auth::{PermissionGuard, require_permission};
use crate::state::AppState;
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{MethodRouter, delete, get, patch, post},
};
use delete::{delete_actor, delete_movie};
use get::{list_actors, list_movies};
use patch::{update_actor, update_movie};
use post::{create_actor, create_movie};

pub mod delete;
pub mod get;
pub mod patch;
pub mod post;

/// Rows per page on the actor and movie listings.
pub const RESULTS_PER_PAGE: u64 = util::pagination::PAGE_SIZE;

fn gated(
    app_state: &AppState,
    permission: &'static str,
    route: MethodRouter<AppState>,
) -> MethodRouter<AppState> {
    route.route_layer(from_fn_with_state(
        PermissionGuard::new(app_state, permission),
        require_permission,
    ))
}

/// Builds the casting agency route group.
///
/// - `GET /actors` → `list_actors` (`get:actors`)
/// - `POST /actors` → `create_actor` (`create:actors`)
/// - `PATCH /actors/{id}` → `update_actor` (`patch:actors`)
/// - `DELETE /actors/{id}` → `delete_actor` (`delete:actors`)
/// - `GET /movies` → `list_movies` (`get:movies`)
/// - `POST /movies` → `create_movie` (`create:movies`)
/// - `PATCH /movies/{id}` → `update_movie` (`patch:movies`)
/// - `DELETE /movies/{id}` → `delete_movie` (`delete:movies`)
pub fn casting_routes(app_state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/actors", gated(app_state, "get:actors", get(list_actors)))
        .route("/actors", gated(app_state, "create:actors", post(create_actor)))
        .route(
            "/actors/{id}",
            gated(app_state, "patch:actors", patch(update_actor)),
        )
        .route(
            "/actors/{id}",
            gated(app_state, "delete:actors", delete(delete_actor)),
        )
        .route("/movies", gated(app_state, "get:movies", get(list_movies)))
        .route("/movies", gated(app_state, "create:movies", post(create_movie)))
        .route(
            "/movies/{id}",
            gated(app_state, "patch:movies", patch(update_movie)),
        )
        .route(
            "/movies/{id}",
            gated(app_state, "delete:movies", delete(delete_movie)),
        )
}
