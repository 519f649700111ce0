use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::extract::State;
use chrono::{DateTime, Utc};
use db::models::show::{self, NewShow, ShowListing};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ShowEntry {
    pub id: i64,
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

impl From<ShowListing> for ShowEntry {
    fn from(listing: ShowListing) -> Self {
        Self {
            id: listing.id,
            venue_id: listing.venue_id,
            venue_name: listing.venue_name,
            artist_id: listing.artist_id,
            artist_name: listing.artist_name,
            artist_image_link: listing.artist_image_link,
            start_time: listing.start_time,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ShowsResponse {
    pub shows: Vec<ShowEntry>,
}

#[derive(Debug, Serialize)]
pub struct ShowCreated {
    pub created: i64,
}

/// GET /shows
///
/// Every show, earliest first.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "shows": [
///     {
///       "id": 1,
///       "venue_id": 1,
///       "venue_name": "The Musical Hop",
///       "artist_id": 4,
///       "artist_name": "Guns N Petals",
///       "artist_image_link": null,
///       "start_time": "2019-05-21T21:30:00Z"
///     }
///   ]
/// }
/// ```
pub async fn list_shows(
    State(app_state): State<AppState>,
) -> Result<ApiResponse<ShowsResponse>, ApiError> {
    let shows = show::Model::listings(app_state.db())
        .await
        .map_err(ApiError::read_failed)?
        .into_iter()
        .map(ShowEntry::from)
        .collect();

    Ok(ApiResponse::success(ShowsResponse { shows }))
}

/// POST /shows
///
/// ### Request Body
/// ```json
/// { "venue_id": 1, "artist_id": 4, "start_time": "2035-04-01T20:00:00Z" }
/// ```
///
/// ### Responses
///
/// - `200 OK` `{ "success": true, "created": 6 }`
/// - `400 Bad Request` (missing field or `start_time` not RFC 3339)
/// - `422 Unprocessable Entity` (unknown venue or artist)
pub async fn create_show(
    State(app_state): State<AppState>,
    body: JsonBody,
) -> Result<ApiResponse<ShowCreated>, ApiError> {
    let new_show: NewShow = body
        .require(&["venue_id", "artist_id", "start_time"])?
        .parse()?;

    let created = show::Model::create(app_state.db(), new_show)
        .await
        .map_err(ApiError::write_failed)?;

    tracing::info!(
        id = created.id,
        venue = created.venue_id,
        artist = created.artist_id,
        "Show scheduled"
    );

    Ok(ApiResponse::success(ShowCreated {
        created: created.id,
    }))
}
