use super::{Deleted, SearchResponse, Summary, split_by_time};
use crate::error::ApiError;
use crate::extract::{JsonBody, PathId};
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::extract::State;
use chrono::{DateTime, Utc};
use db::models::{
    artist::{self, ArtistChanges, NewArtist},
    show,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ArtistName {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct ArtistsResponse {
    pub artists: Vec<ArtistName>,
}

/// A show as listed on an artist's page.
#[derive(Debug, Serialize)]
pub struct ArtistShow {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

impl From<show::ShowListing> for ArtistShow {
    fn from(listing: show::ShowListing) -> Self {
        Self {
            venue_id: listing.venue_id,
            venue_name: listing.venue_name,
            venue_image_link: listing.venue_image_link,
            start_time: listing.start_time,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: artist::Model,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

#[derive(Debug, Serialize)]
pub struct ArtistCreated {
    pub created: i64,
    pub artist: artist::Model,
}

#[derive(Debug, Serialize)]
pub struct ArtistResponse {
    pub artist: artist::Model,
}

#[derive(Debug, Deserialize)]
struct SearchRequest {
    search_term: String,
}

/// GET /artists
///
/// Every artist by name.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// { "success": true, "artists": [ { "id": 4, "name": "Guns N Petals" } ] }
/// ```
pub async fn list_artists(
    State(app_state): State<AppState>,
) -> Result<ApiResponse<ArtistsResponse>, ApiError> {
    let artists = artist::Model::all_by_name(app_state.db())
        .await
        .map_err(ApiError::read_failed)?
        .into_iter()
        .map(|a| ArtistName {
            id: a.id,
            name: a.name,
        })
        .collect();

    Ok(ApiResponse::success(ArtistsResponse { artists }))
}

/// POST /artists/search
///
/// Case-insensitive substring match on the artist name.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// { "success": true, "count": 1, "data": [ { "id": 4, "name": "Guns N Petals", "num_upcoming_shows": 1 } ] }
/// ```
///
/// - `400 Bad Request` (missing `search_term`)
pub async fn search_artists(
    State(app_state): State<AppState>,
    body: JsonBody,
) -> Result<ApiResponse<SearchResponse>, ApiError> {
    let SearchRequest { search_term } = body.require(&["search_term"])?.parse()?;
    let db = app_state.db();
    let now = Utc::now();

    let artists = artist::Model::search(db, &search_term)
        .await
        .map_err(ApiError::read_failed)?;

    let mut data = Vec::with_capacity(artists.len());
    for artist in artists {
        let num_upcoming_shows = artist
            .num_upcoming_shows(db, now)
            .await
            .map_err(ApiError::read_failed)?;
        data.push(Summary {
            id: artist.id,
            name: artist.name,
            num_upcoming_shows,
        });
    }

    Ok(ApiResponse::success(SearchResponse {
        count: data.len(),
        data,
    }))
}

/// GET /artists/{id}
///
/// The artist with the venues they played and will play.
///
/// ### Responses
///
/// - `200 OK` artist fields plus `past_shows`, `upcoming_shows` and both counts
/// - `404 Not Found`
pub async fn show_artist(
    State(app_state): State<AppState>,
    PathId(id): PathId,
) -> Result<ApiResponse<ArtistDetail>, ApiError> {
    let db = app_state.db();
    let artist = artist::Model::find_by_id(db, id)
        .await
        .map_err(ApiError::read_failed)?
        .ok_or(ApiError::NotFound)?;

    let listings = show::Model::listings_for_artist(db, id)
        .await
        .map_err(ApiError::read_failed)?;
    let (past, upcoming) = split_by_time(listings, Utc::now());

    Ok(ApiResponse::success(ArtistDetail {
        artist,
        past_shows_count: past.len(),
        upcoming_shows_count: upcoming.len(),
        past_shows: past.into_iter().map(ArtistShow::from).collect(),
        upcoming_shows: upcoming.into_iter().map(ArtistShow::from).collect(),
    }))
}

/// POST /artists
///
/// `name`, `city` and `state` are required.
///
/// ### Responses
///
/// - `200 OK` `{ "success": true, "created": 4, "artist": { ... } }`
/// - `400 Bad Request`
/// - `422 Unprocessable Entity`
pub async fn create_artist(
    State(app_state): State<AppState>,
    body: JsonBody,
) -> Result<ApiResponse<ArtistCreated>, ApiError> {
    let new_artist: NewArtist = body.require(&["name", "city", "state"])?.parse()?;

    let artist = artist::Model::create(app_state.db(), new_artist)
        .await
        .map_err(ApiError::write_failed)?;

    tracing::info!(id = artist.id, name = %artist.name, "Artist listed");

    Ok(ApiResponse::success(ArtistCreated {
        created: artist.id,
        artist,
    }))
}

/// PATCH /artists/{id}
///
/// Same partial-update rules as `PATCH /venues/{id}`.
pub async fn update_artist(
    State(app_state): State<AppState>,
    PathId(id): PathId,
    body: JsonBody,
) -> Result<ApiResponse<ArtistResponse>, ApiError> {
    let changes: ArtistChanges = body.parse()?;

    let artist = artist::Model::update(app_state.db(), id, changes)
        .await
        .map_err(ApiError::write_failed)?
        .ok_or(ApiError::NotFound)?;

    Ok(ApiResponse::success(ArtistResponse { artist }))
}

/// DELETE /artists/{id}
///
/// Fails with 422 while the artist still has shows.
pub async fn delete_artist(
    State(app_state): State<AppState>,
    PathId(id): PathId,
) -> Result<ApiResponse<Deleted>, ApiError> {
    let removed = artist::Model::delete(app_state.db(), id)
        .await
        .map_err(ApiError::write_failed)?;

    if !removed {
        return Err(ApiError::NotFound);
    }

    tracing::info!(id, "Artist deleted");
    Ok(ApiResponse::success(Deleted { deleted: id }))
}
