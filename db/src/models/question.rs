use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{PaginatorTrait, QueryOrder};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::Category",
        to = "super::category::Column::Id"
    )]
    Category,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

impl Model {
    /// Inserts a question. An unknown category fails at the foreign key.
    pub async fn create(db: &DbConn, question: NewQuestion) -> Result<Model, DbErr> {
        ActiveModel {
            question: Set(question.question),
            answer: Set(question.answer),
            category: Set(question.category),
            difficulty: Set(question.difficulty),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn find_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn all_ordered(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find().order_by_asc(Column::Id).all(db).await
    }

    pub async fn in_category(db: &DbConn, category_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::Category.eq(category_id))
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    /// Case-insensitive substring match on the question text.
    pub async fn search(db: &DbConn, term: &str) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(super::contains_ignore_case(Column::Question, term))
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub async fn count(db: &DbConn) -> Result<u64, DbErr> {
        Entity::find().count(db).await
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<bool, DbErr> {
        let result = Entity::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected > 0)
    }
}
