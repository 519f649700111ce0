pub mod m202610180001_create_venues;
pub mod m202610180002_create_artists;
pub mod m202610180003_create_shows;
pub mod m202610180004_create_categories;
pub mod m202610180005_create_questions;
pub mod m202610180006_create_drinks;
pub mod m202610180007_create_actors;
pub mod m202610180008_create_movies;
