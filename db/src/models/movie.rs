use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{PaginatorTrait, QueryOrder};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "movies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub title: String,
    pub release_date: NaiveDate,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub release_date: NaiveDate,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieChanges {
    pub title: Option<String>,
    pub release_date: Option<NaiveDate>,
}

impl MovieChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.release_date.is_none()
    }

    pub fn merge(self, movie: Model) -> ActiveModel {
        let mut active: ActiveModel = movie.into();
        if let Some(title) = self.title {
            active.title = Set(title);
        }
        if let Some(release_date) = self.release_date {
            active.release_date = Set(release_date);
        }
        active
    }
}

impl Model {
    pub async fn create(db: &DbConn, movie: NewMovie) -> Result<Model, DbErr> {
        ActiveModel {
            title: Set(movie.title),
            release_date: Set(movie.release_date),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn all_ordered(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find().order_by_asc(Column::Id).all(db).await
    }

    pub async fn count(db: &DbConn) -> Result<u64, DbErr> {
        Entity::find().count(db).await
    }

    pub async fn update(
        db: &DbConn,
        id: i64,
        changes: MovieChanges,
    ) -> Result<Option<Model>, DbErr> {
        let Some(movie) = Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };
        if changes.is_empty() {
            return Ok(Some(movie));
        }
        changes.merge(movie).update(db).await.map(Some)
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<bool, DbErr> {
        let result = Entity::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected > 0)
    }
}
