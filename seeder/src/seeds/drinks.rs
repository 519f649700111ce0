use crate::seed::Seeder;
use db::models::drink::{self, NewDrink};
use sea_orm::{DatabaseConnection, DbErr};
use serde_json::json;
use std::pin::Pin;

pub struct DrinkSeeder;

impl Seeder for DrinkSeeder {
    fn seed<'a>(
        &'a self,
        db: &'a DatabaseConnection,
    ) -> Pin<Box<dyn Future<Output = Result<(), DbErr>> + Send + 'a>> {
        Box::pin(async move {
            let menu = json!([
                {
                    "title": "Water",
                    "recipe": [{"name": "water", "color": "blue", "parts": 1}]
                },
                {
                    "title": "Flat White",
                    "recipe": [
                        {"name": "espresso", "color": "brown", "parts": 1},
                        {"name": "milk", "color": "grey", "parts": 2}
                    ]
                },
                {
                    "title": "Matcha Shake",
                    "recipe": [
                        {"name": "milk", "color": "grey", "parts": 1},
                        {"name": "matcha", "color": "green", "parts": 3}
                    ]
                },
                {
                    "title": "Cappuccino",
                    "recipe": [
                        {"name": "espresso", "color": "brown", "parts": 1},
                        {"name": "milk", "color": "grey", "parts": 1},
                        {"name": "foam", "color": "white", "parts": 1}
                    ]
                }
            ]);

            let drinks: Vec<NewDrink> = serde_json::from_value(menu)
                .map_err(|e| DbErr::Custom(format!("invalid drink fixture: {e}")))?;
            for new_drink in drinks {
                drink::Model::create(db, new_drink).await?;
            }
            Ok(())
        })
    }
}
