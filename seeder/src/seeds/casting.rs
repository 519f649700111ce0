use crate::seed::Seeder;
use chrono::NaiveDate;
use db::models::actor::{self, NewActor};
use db::models::movie::{self, NewMovie};
use fake::{Fake, faker::name::en::Name};
use sea_orm::{DatabaseConnection, DbErr};
use std::pin::Pin;

pub struct CastingSeeder;

const MOVIES: [(&str, i32, u32, u32); 5] = [
    ("The Long Audition", 2019, 5, 17),
    ("Second Take", 2021, 11, 2),
    ("Cold Read", 2022, 2, 14),
    ("Callback", 2024, 8, 30),
    ("Stand-In", 2026, 12, 4),
];

impl Seeder for CastingSeeder {
    fn seed<'a>(
        &'a self,
        db: &'a DatabaseConnection,
    ) -> Pin<Box<dyn Future<Output = Result<(), DbErr>> + Send + 'a>> {
        Box::pin(async move {
            for _ in 0..12 {
                let name: String = Name().fake();
                let gender = if fastrand::bool() { "female" } else { "male" };
                actor::Model::create(
                    db,
                    NewActor {
                        name,
                        age: fastrand::i32(18..75),
                        gender: gender.to_owned(),
                    },
                )
                .await?;
            }

            for (title, year, month, day) in MOVIES {
                let release_date = NaiveDate::from_ymd_opt(year, month, day)
                    .ok_or_else(|| DbErr::Custom(format!("invalid release date for {title}")))?;
                movie::Model::create(
                    db,
                    NewMovie {
                        title: title.to_owned(),
                        release_date,
                    },
                )
                .await?;
            }
            Ok(())
        })
    }
}
