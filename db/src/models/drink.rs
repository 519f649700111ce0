use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use sea_orm::QueryOrder;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "drinks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(unique)]
    pub title: String,

    /// JSON-encoded `Vec<Ingredient>`.
    pub recipe: String,

    pub image: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Ingredient {
    #[serde(default)]
    pub name: String,
    pub color: String,
    pub parts: u32,
}

/// Ingredient as shown on the public menu, without its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortIngredient {
    pub color: String,
    pub parts: u32,
}

/// A recipe as accepted from clients: one ingredient or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Recipe {
    Many(Vec<Ingredient>),
    One(Ingredient),
}

impl Recipe {
    pub fn into_ingredients(self) -> Vec<Ingredient> {
        match self {
            Recipe::Many(ingredients) => ingredients,
            Recipe::One(ingredient) => vec![ingredient],
        }
    }

    fn encode(self) -> Result<String, DbErr> {
        serde_json::to_string(&self.into_ingredients())
            .map_err(|e| DbErr::Custom(format!("recipe encoding failed: {e}")))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DrinkView<I> {
    pub id: i64,
    pub title: String,
    pub recipe: Vec<I>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewDrink {
    pub title: String,
    pub recipe: Recipe,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DrinkChanges {
    pub title: Option<String>,
    pub recipe: Option<Recipe>,
    pub image: Option<String>,
}

impl DrinkChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.recipe.is_none() && self.image.is_none()
    }

    pub fn merge(self, drink: Model) -> Result<ActiveModel, DbErr> {
        let mut active: ActiveModel = drink.into();
        if let Some(title) = self.title {
            active.title = Set(title);
        }
        if let Some(recipe) = self.recipe {
            active.recipe = Set(recipe.encode()?);
        }
        if let Some(image) = self.image {
            active.image = Set(Some(image));
        }
        Ok(active)
    }
}

impl Model {
    /// Inserts a drink. A duplicate title fails at the unique index.
    pub async fn create(db: &DbConn, drink: NewDrink) -> Result<Model, DbErr> {
        ActiveModel {
            title: Set(drink.title),
            recipe: Set(drink.recipe.encode()?),
            image: Set(drink.image),
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

    pub async fn update(
        db: &DbConn,
        id: i64,
        changes: DrinkChanges,
    ) -> Result<Option<Model>, DbErr> {
        let Some(drink) = Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };
        if changes.is_empty() {
            return Ok(Some(drink));
        }
        changes.merge(drink)?.update(db).await.map(Some)
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<bool, DbErr> {
        let result = Entity::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected > 0)
    }

    pub fn ingredients(&self) -> Result<Vec<Ingredient>, serde_json::Error> {
        serde_json::from_str(&self.recipe)
    }

    pub fn short(&self) -> Result<DrinkView<ShortIngredient>, serde_json::Error> {
        let recipe = self
            .ingredients()?
            .into_iter()
            .map(|i| ShortIngredient {
                color: i.color,
                parts: i.parts,
            })
            .collect();
        Ok(DrinkView {
            id: self.id,
            title: self.title.clone(),
            recipe,
            image: self.image.clone(),
        })
    }

    pub fn long(&self) -> Result<DrinkView<Ingredient>, serde_json::Error> {
        Ok(DrinkView {
            id: self.id,
            title: self.title.clone(),
            recipe: self.ingredients()?,
            image: self.image.clone(),
        })
    }
}
