//! # Coffee Shop Routes Module
//!
//! The drink menu. Listing the short menu is public; the detailed recipes and
//! every write require a permission granted by the identity provider.
//!
//! ## Structure
//! - `get.rs` - short and long drink listings
//! - `post.rs` - drink creation
//! - `patch.rs` - partial drink updates
//! - `delete.rs` - drink removal

use crate::auth::{PermissionGuard, require_permission};
use crate::state::AppState;
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, patch, post},
};
use delete::delete_drink;
use get::{drink_details, list_drinks};
use patch::update_drink;
use post::create_drink;

pub mod delete;
pub mod get;
pub mod patch;
pub mod post;

/// Builds the coffee shop route group.
///
/// - `GET /drinks` → `list_drinks` (public)
/// - `GET /drinks-detail` → `drink_details` (`get:drinks-detail`)
/// - `POST /drinks` → `create_drink` (`post:drinks`)
/// - `PATCH /drinks/{id}` → `update_drink` (`patch:drinks`)
/// - `DELETE /drinks/{id}` → `delete_drink` (`delete:drinks`)
pub fn coffee_routes(app_state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/drinks", get(list_drinks))
        .route(
            "/drinks",
            post(create_drink).route_layer(from_fn_with_state(
                PermissionGuard::new(app_state, "post:drinks"),
                require_permission,
            )),
        )
        .route(
            "/drinks-detail",
            get(drink_details).route_layer(from_fn_with_state(
                PermissionGuard::new(app_state, "get:drinks-detail"),
                require_permission,
            )),
        )
        .route(
            "/drinks/{id}",
            patch(update_drink).route_layer(from_fn_with_state(
                PermissionGuard::new(app_state, "patch:drinks"),
                require_permission,
            )),
        )
        .route(
            "/drinks/{id}",
            delete(delete_drink).route_layer(from_fn_with_state(
                PermissionGuard::new(app_state, "delete:drinks"),
                require_permission,
            )),
        )
}
