use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use sea_orm::QueryOrder;
use serde::{Deserialize, Serialize};

use super::{artist, venue};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "shows")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub venue_id: i64,
    pub artist_id: i64,
    pub start_time: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::venue::Entity",
        from = "Column::VenueId",
        to = "super::venue::Column::Id"
    )]
    Venue,

    #[sea_orm(
        belongs_to = "super::artist::Entity",
        from = "Column::ArtistId",
        to = "super::artist::Column::Id"
    )]
    Artist,
}

impl Related<super::venue::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Venue.def()
    }
}

impl Related<super::artist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Artist.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Deserialize)]
pub struct NewShow {
    pub venue_id: i64,
    pub artist_id: i64,
    pub start_time: DateTime<Utc>,
}

/// A show joined with the names and artwork of both sides.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowListing {
    pub id: i64,
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

impl ShowListing {
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.start_time > now
    }
}

impl Model {
    /// Inserts a show. Unknown venue or artist ids fail at the foreign key.
    pub async fn create(db: &DbConn, show: NewShow) -> Result<Model, DbErr> {
        ActiveModel {
            venue_id: Set(show.venue_id),
            artist_id: Set(show.artist_id),
            start_time: Set(show.start_time),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Every show ordered by start time.
    pub async fn listings(db: &DbConn) -> Result<Vec<ShowListing>, DbErr> {
        Self::listings_where(db, None, None).await
    }

    pub async fn listings_for_venue(db: &DbConn, venue_id: i64) -> Result<Vec<ShowListing>, DbErr> {
        Self::listings_where(db, Some(venue_id), None).await
    }

    pub async fn listings_for_artist(
        db: &DbConn,
        artist_id: i64,
    ) -> Result<Vec<ShowListing>, DbErr> {
        Self::listings_where(db, None, Some(artist_id)).await
    }

    async fn listings_where(
        db: &DbConn,
        venue_id: Option<i64>,
        artist_id: Option<i64>,
    ) -> Result<Vec<ShowListing>, DbErr> {
        let mut query = Entity::find();
        if let Some(venue_id) = venue_id {
            query = query.filter(Column::VenueId.eq(venue_id));
        }
        if let Some(artist_id) = artist_id {
            query = query.filter(Column::ArtistId.eq(artist_id));
        }

        let rows = query
            .order_by_asc(Column::StartTime)
            .order_by_asc(Column::Id)
            .find_also_related(artist::Entity)
            .all(db)
            .await?;

        let venue_ids: Vec<i64> = rows.iter().map(|(show, _)| show.venue_id).collect();
        let venues: HashMap<i64, venue::Model> = venue::Entity::find()
            .filter(venue::Column::Id.is_in(venue_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|v| (v.id, v))
            .collect();

        Ok(rows
            .into_iter()
            .map(|(show, artist)| {
                let venue = venues.get(&show.venue_id);
                ShowListing {
                    id: show.id,
                    venue_id: show.venue_id,
                    venue_name: venue.map(|v| v.name.clone()).unwrap_or_default(),
                    venue_image_link: venue.and_then(|v| v.image_link.clone()),
                    artist_id: show.artist_id,
                    artist_name: artist.as_ref().map(|a| a.name.clone()).unwrap_or_default(),
                    artist_image_link: artist.and_then(|a| a.image_link),
                    start_time: show.start_time,
                }
            })
            .collect())
    }
}
