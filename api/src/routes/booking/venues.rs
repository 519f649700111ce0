use super::{Deleted, SearchResponse, Summary, split_by_time};
use crate::error::ApiError;
use crate::extract::{JsonBody, PathId};
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::extract::State;
use chrono::{DateTime, Utc};
use db::models::{
    show,
    venue::{self, NewVenue, VenueChanges},
};
use sea_orm::DbConn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct Area {
    pub city: Option<String>,
    pub state: Option<String>,
    pub venues: Vec<Summary>,
}

#[derive(Debug, Serialize)]
pub struct AreasResponse {
    pub areas: Vec<Area>,
}

/// A show as listed on a venue's page.
#[derive(Debug, Serialize)]
pub struct VenueShow {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

impl From<show::ShowListing> for VenueShow {
    fn from(listing: show::ShowListing) -> Self {
        Self {
            artist_id: listing.artist_id,
            artist_name: listing.artist_name,
            artist_image_link: listing.artist_image_link,
            start_time: listing.start_time,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: venue::Model,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

#[derive(Debug, Serialize)]
pub struct VenueCreated {
    pub created: i64,
    pub venue: venue::Model,
}

#[derive(Debug, Serialize)]
pub struct VenueResponse {
    pub venue: venue::Model,
}

#[derive(Debug, Deserialize)]
struct SearchRequest {
    search_term: String,
}

async fn summarize(
    db: &DbConn,
    venues: Vec<venue::Model>,
    now: DateTime<Utc>,
) -> Result<Vec<Summary>, ApiError> {
    let mut summaries = Vec::with_capacity(venues.len());
    for venue in venues {
        let num_upcoming_shows = venue
            .num_upcoming_shows(db, now)
            .await
            .map_err(ApiError::read_failed)?;
        summaries.push(Summary {
            id: venue.id,
            name: venue.name,
            num_upcoming_shows,
        });
    }
    Ok(summaries)
}

/// GET /venues
///
/// Every venue grouped by `(city, state)`.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "areas": [
///     { "city": "San Francisco", "state": "CA", "venues": [ { "id": 1, "name": "The Musical Hop", "num_upcoming_shows": 0 } ] }
///   ]
/// }
/// ```
pub async fn list_venues(
    State(app_state): State<AppState>,
) -> Result<ApiResponse<AreasResponse>, ApiError> {
    let db = app_state.db();
    let now = Utc::now();
    let venues = venue::Model::all_by_area(db)
        .await
        .map_err(ApiError::read_failed)?;

    let mut areas: Vec<Area> = Vec::new();
    for venue in venues {
        let num_upcoming_shows = venue
            .num_upcoming_shows(db, now)
            .await
            .map_err(ApiError::read_failed)?;
        let summary = Summary {
            id: venue.id,
            name: venue.name,
            num_upcoming_shows,
        };

        // Venues arrive ordered by area, so a new area starts whenever the pair changes.
        match areas.last_mut() {
            Some(area) if area.city == venue.city && area.state == venue.state => {
                area.venues.push(summary)
            }
            _ => areas.push(Area {
                city: venue.city,
                state: venue.state,
                venues: vec![summary],
            }),
        }
    }

    Ok(ApiResponse::success(AreasResponse { areas }))
}

/// POST /venues/search
///
/// Case-insensitive substring match on the venue name.
///
/// ### Request Body
/// ```json
/// { "search_term": "hop" }
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// { "success": true, "count": 1, "data": [ { "id": 1, "name": "The Musical Hop", "num_upcoming_shows": 0 } ] }
/// ```
///
/// - `400 Bad Request` (missing `search_term`)
pub async fn search_venues(
    State(app_state): State<AppState>,
    body: JsonBody,
) -> Result<ApiResponse<SearchResponse>, ApiError> {
    let SearchRequest { search_term } = body.require(&["search_term"])?.parse()?;
    let db = app_state.db();

    let venues = venue::Model::search(db, &search_term)
        .await
        .map_err(ApiError::read_failed)?;
    let data = summarize(db, venues, Utc::now()).await?;

    Ok(ApiResponse::success(SearchResponse {
        count: data.len(),
        data,
    }))
}

/// GET /venues/{id}
///
/// The venue with its past and upcoming shows.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "id": 1,
///   "name": "The Musical Hop",
///   "genres": ["Jazz", "Reggae"],
///   "past_shows": [ { "artist_id": 4, "artist_name": "Guns N Petals", "artist_image_link": null, "start_time": "2019-05-21T21:30:00Z" } ],
///   "upcoming_shows": [],
///   "past_shows_count": 1,
///   "upcoming_shows_count": 0
/// }
/// ```
///
/// - `404 Not Found`
pub async fn show_venue(
    State(app_state): State<AppState>,
    PathId(id): PathId,
) -> Result<ApiResponse<VenueDetail>, ApiError> {
    let db = app_state.db();
    let venue = venue::Model::find_by_id(db, id)
        .await
        .map_err(ApiError::read_failed)?
        .ok_or(ApiError::NotFound)?;

    let listings = show::Model::listings_for_venue(db, id)
        .await
        .map_err(ApiError::read_failed)?;
    let (past, upcoming) = split_by_time(listings, Utc::now());

    Ok(ApiResponse::success(VenueDetail {
        venue,
        past_shows_count: past.len(),
        upcoming_shows_count: upcoming.len(),
        past_shows: past.into_iter().map(VenueShow::from).collect(),
        upcoming_shows: upcoming.into_iter().map(VenueShow::from).collect(),
    }))
}

/// POST /venues
///
/// ### Request Body
/// `name`, `city`, `state` and `address` are required.
/// ```json
/// {
///   "name": "The Dueling Pianos Bar",
///   "city": "New York",
///   "state": "NY",
///   "address": "335 Delancey Street",
///   "genres": ["Classical", "R&B"]
/// }
/// ```
///
/// ### Responses
///
/// - `200 OK` `{ "success": true, "created": 4, "venue": { ... } }`
/// - `400 Bad Request`
/// - `422 Unprocessable Entity`
pub async fn create_venue(
    State(app_state): State<AppState>,
    body: JsonBody,
) -> Result<ApiResponse<VenueCreated>, ApiError> {
    let new_venue: NewVenue = body
        .require(&["name", "city", "state", "address"])?
        .parse()?;

    let venue = venue::Model::create(app_state.db(), new_venue)
        .await
        .map_err(ApiError::write_failed)?;

    tracing::info!(id = venue.id, name = %venue.name, "Venue listed");

    Ok(ApiResponse::success(VenueCreated {
        created: venue.id,
        venue,
    }))
}

/// PATCH /venues/{id}
///
/// Absent fields are left alone; `null` clears `phone`, `image_link`,
/// `facebook_link`, `website` or `seeking_description`.
///
/// ### Responses
///
/// - `200 OK` `{ "success": true, "venue": { ... } }`
/// - `400 Bad Request` (mistyped field)
/// - `404 Not Found`
/// - `422 Unprocessable Entity`
pub async fn update_venue(
    State(app_state): State<AppState>,
    PathId(id): PathId,
    body: JsonBody,
) -> Result<ApiResponse<VenueResponse>, ApiError> {
    let changes: VenueChanges = body.parse()?;

    let venue = venue::Model::update(app_state.db(), id, changes)
        .await
        .map_err(ApiError::write_failed)?
        .ok_or(ApiError::NotFound)?;

    Ok(ApiResponse::success(VenueResponse { venue }))
}

/// DELETE /venues/{id}
///
/// ### Responses
///
/// - `200 OK` `{ "success": true, "deleted": 1 }`
/// - `404 Not Found`
/// - `422 Unprocessable Entity` (the venue still has shows)
pub async fn delete_venue(
    State(app_state): State<AppState>,
    PathId(id): PathId,
) -> Result<ApiResponse<Deleted>, ApiError> {
    let removed = venue::Model::delete(app_state.db(), id)
        .await
        .map_err(ApiError::write_failed)?;

    if !removed {
        return Err(ApiError::NotFound);
    }

    tracing::info!(id, "Venue deleted");
    Ok(ApiResponse::success(Deleted { deleted: id }))
}
