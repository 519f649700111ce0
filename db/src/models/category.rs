use std::collections::BTreeMap;

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use sea_orm::QueryOrder;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::question::Entity")]
    Questions,
}

impl Related<super::question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Questions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(db: &DbConn, kind: &str) -> Result<Model, DbErr> {
        ActiveModel {
            kind: Set(kind.to_owned()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// `{id: type}` for every category; ids serialize as JSON object keys.
    pub async fn id_to_type(db: &DbConn) -> Result<BTreeMap<i64, String>, DbErr> {
        Ok(Entity::find()
            .order_by_asc(Column::Id)
            .all(db)
            .await?
            .into_iter()
            .map(|c| (c.id, c.kind))
            .collect())
    }
}
