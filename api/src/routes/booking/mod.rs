//! # Booking Routes Module
//!
//! Public venue, artist and show endpoints. Each renders as JSON what the
//! booking site shows on its pages.
//!
//! ## Structure
//! - `venues.rs` - venue listing grouped by area, search, detail and CRUD
//! - `artists.rs` - artist listing, search, detail and CRUD
//! - `shows.rs` - show listing and creation

use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use db::models::show::ShowListing;
use serde::Serialize;

pub mod artists;
pub mod shows;
pub mod venues;

/// A venue or artist as it appears in search results and area listings.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: u64,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub count: usize,
    pub data: Vec<Summary>,
}

#[derive(Debug, Serialize)]
pub struct Deleted {
    pub deleted: i64,
}

/// Splits listings into `(past, upcoming)`, keeping start-time order in both.
pub(crate) fn split_by_time(
    listings: Vec<ShowListing>,
    now: DateTime<Utc>,
) -> (Vec<ShowListing>, Vec<ShowListing>) {
    let (upcoming, past): (Vec<_>, Vec<_>) = listings
        .into_iter()
        .partition(|listing| listing.is_upcoming(now));
    (past, upcoming)
}

/// Builds the booking route group.
///
/// - `GET|POST /venues`, `POST /venues/search`, `GET|PATCH|DELETE /venues/{id}`
/// - `GET|POST /artists`, `POST /artists/search`, `GET|PATCH|DELETE /artists/{id}`
/// - `GET|POST /shows`
pub fn booking_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/venues",
            get(venues::list_venues).post(venues::create_venue),
        )
        .route("/venues/search", post(venues::search_venues))
        .route(
            "/venues/{id}",
            get(venues::show_venue)
                .patch(venues::update_venue)
                .delete(venues::delete_venue),
        )
        .route(
            "/artists",
            get(artists::list_artists).post(artists::create_artist),
        )
        .route("/artists/search", post(artists::search_artists))
        .route(
            "/artists/{id}",
            get(artists::show_artist)
                .patch(artists::update_artist)
                .delete(artists::delete_artist),
        )
        .route("/shows", get(shows::list_shows).post(shows::create_show))
}
