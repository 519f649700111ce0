use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{PaginatorTrait, QueryOrder};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "venues")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,

    pub seeking_talent: bool,
    pub seeking_description: Option<String>,

    /// JSON array of genre names.
    pub genres: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::show::Entity")]
    Shows,
}

impl Related<super::show::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shows.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewVenue {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub image_link: Option<String>,
    #[serde(default)]
    pub facebook_link: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub seeking_talent: bool,
    #[serde(default)]
    pub seeking_description: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
}

/// Partial update; an absent field leaves the column untouched. Nullable
/// columns are cleared by an explicit `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VenueChanges {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub image_link: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub facebook_link: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub website: Option<Option<String>>,
    pub seeking_talent: Option<bool>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub seeking_description: Option<Option<String>>,
    pub genres: Option<Vec<String>>,
}

impl VenueChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.address.is_none()
            && self.phone.is_none()
            && self.image_link.is_none()
            && self.facebook_link.is_none()
            && self.website.is_none()
            && self.seeking_talent.is_none()
            && self.seeking_description.is_none()
            && self.genres.is_none()
    }

    pub fn merge(self, venue: Model) -> ActiveModel {
        let mut active: ActiveModel = venue.into();
        if let Some(name) = self.name {
            active.name = Set(name);
        }
        if let Some(city) = self.city {
            active.city = Set(Some(city));
        }
        if let Some(state) = self.state {
            active.state = Set(Some(state));
        }
        if let Some(address) = self.address {
            active.address = Set(Some(address));
        }
        if let Some(phone) = self.phone {
            active.phone = Set(phone);
        }
        if let Some(image_link) = self.image_link {
            active.image_link = Set(image_link);
        }
        if let Some(facebook_link) = self.facebook_link {
            active.facebook_link = Set(facebook_link);
        }
        if let Some(website) = self.website {
            active.website = Set(website);
        }
        if let Some(seeking_talent) = self.seeking_talent {
            active.seeking_talent = Set(seeking_talent);
        }
        if let Some(seeking_description) = self.seeking_description {
            active.seeking_description = Set(seeking_description);
        }
        if let Some(genres) = self.genres {
            active.genres = Set(Json::from(genres));
        }
        active
    }
}

impl Model {
    pub async fn create(db: &DbConn, venue: NewVenue) -> Result<Model, DbErr> {
        ActiveModel {
            name: Set(venue.name),
            city: Set(Some(venue.city)),
            state: Set(Some(venue.state)),
            address: Set(Some(venue.address)),
            phone: Set(venue.phone),
            image_link: Set(venue.image_link),
            facebook_link: Set(venue.facebook_link),
            website: Set(venue.website),
            seeking_talent: Set(venue.seeking_talent),
            seeking_description: Set(venue.seeking_description),
            genres: Set(Json::from(venue.genres)),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn find_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Every venue ordered by `(state, city, name)` so callers can group by area.
    pub async fn all_by_area(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .order_by_asc(Column::State)
            .order_by_asc(Column::City)
            .order_by_asc(Column::Name)
            .all(db)
            .await
    }

    pub async fn search(db: &DbConn, term: &str) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(super::contains_ignore_case(Column::Name, term))
            .order_by_asc(Column::Name)
            .all(db)
            .await
    }

    /// Applies `changes` to venue `id`. `Ok(None)` when no such venue exists.
    pub async fn update(
        db: &DbConn,
        id: i64,
        changes: VenueChanges,
    ) -> Result<Option<Model>, DbErr> {
        let Some(venue) = Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };
        if changes.is_empty() {
            return Ok(Some(venue));
        }
        changes.merge(venue).update(db).await.map(Some)
    }

    /// Removes venue `id`; returns `false` when it did not exist.
    pub async fn delete(db: &DbConn, id: i64) -> Result<bool, DbErr> {
        let result = Entity::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn num_upcoming_shows(&self, db: &DbConn, now: DateTime<Utc>) -> Result<u64, DbErr> {
        super::show::Entity::find()
            .filter(super::show::Column::VenueId.eq(self.id))
            .filter(super::show::Column::StartTime.gt(now))
            .count(db)
            .await
    }

    pub fn genre_list(&self) -> Vec<String> {
        serde_json::from_value(self.genres.clone()).unwrap_or_default()
    }
}
