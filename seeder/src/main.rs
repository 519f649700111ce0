use crate::seed::{Seeder, run_seeder};
use crate::seeds::{
    booking::BookingSeeder, casting::CastingSeeder, drinks::DrinkSeeder, trivia::TriviaSeeder,
};
use colored::*;
use util::config;

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let db = match db::connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!(
                "{} {}: {}",
                "Could not open".red(),
                config::database_path(),
                e
            );
            std::process::exit(1);
        }
    };

    for (seeder, name) in [
        (Box::new(TriviaSeeder) as Box<dyn Seeder + Send + Sync>, "Trivia"),
        (Box::new(BookingSeeder), "Booking"),
        (Box::new(DrinkSeeder), "Drinks"),
        (Box::new(CastingSeeder), "Casting"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }
}
