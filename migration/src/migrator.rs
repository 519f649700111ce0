use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202610180001_create_venues::Migration),
            Box::new(migrations::m202610180002_create_artists::Migration),
            Box::new(migrations::m202610180003_create_shows::Migration),
            Box::new(migrations::m202610180004_create_categories::Migration),
            Box::new(migrations::m202610180005_create_questions::Migration),
            Box::new(migrations::m202610180006_create_drinks::Migration),
            Box::new(migrations::m202610180007_create_actors::Migration),
            Box::new(migrations::m202610180008_create_movies::Migration),
        ]
    }
}
