use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{PaginatorTrait, QueryOrder};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "actors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub name: String,
    pub age: i32,
    pub gender: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Deserialize)]
pub struct NewActor {
    pub name: String,
    pub age: i32,
    pub gender: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActorChanges {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
}

impl ActorChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.gender.is_none()
    }

    pub fn merge(self, actor: Model) -> ActiveModel {
        let mut active: ActiveModel = actor.into();
        if let Some(name) = self.name {
            active.name = Set(name);
        }
        if let Some(age) = self.age {
            active.age = Set(age);
        }
        if let Some(gender) = self.gender {
            active.gender = Set(gender);
        }
        active
    }
}

impl Model {
    pub async fn create(db: &DbConn, actor: NewActor) -> Result<Model, DbErr> {
        ActiveModel {
            name: Set(actor.name),
            age: Set(actor.age),
            gender: Set(actor.gender),
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
        changes: ActorChanges,
    ) -> Result<Option<Model>, DbErr> {
        let Some(actor) = Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };
        if changes.is_empty() {
            return Ok(Some(actor));
        }
        changes.merge(actor).update(db).await.map(Some)
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<bool, DbErr> {
        let result = Entity::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected > 0)
    }
}
