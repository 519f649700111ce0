use crate::seed::Seeder;
use db::models::category;
use db::models::question::{self, NewQuestion};
use sea_orm::{DatabaseConnection, DbErr};
use std::pin::Pin;

pub struct TriviaSeeder;

const CATEGORIES: [(&str, &[(&str, &str, i32)]); 6] = [
    (
        "Science",
        &[
            ("What is the heaviest organ in the human body?", "The Liver", 4),
            ("Who discovered penicillin?", "Alexander Fleming", 3),
            ("Hematology is a branch of medicine involving the study of what?", "Blood", 4),
        ],
    ),
    (
        "Art",
        &[
            ("Which Dutch graphic artist was a master of optical illusions?", "Escher", 1),
            ("La Giaconda is better known as what?", "Mona Lisa", 3),
            ("How many paintings did Van Gogh sell in his lifetime?", "One", 4),
        ],
    ),
    (
        "Geography",
        &[
            ("What is the largest lake in Africa?", "Lake Victoria", 2),
            ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3),
            ("The Taj Mahal is located in which Indian city?", "Agra", 2),
        ],
    ),
    (
        "History",
        &[
            ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 2),
            ("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4),
            ("Who invented Peanut Butter?", "George Washington Carver", 2),
        ],
    ),
    (
        "Entertainment",
        &[
            ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 4),
            ("What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 4),
            ("What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 3),
        ],
    ),
    (
        "Sports",
        &[
            ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 3),
            ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 4),
        ],
    ),
];

impl Seeder for TriviaSeeder {
    fn seed<'a>(
        &'a self,
        db: &'a DatabaseConnection,
    ) -> Pin<Box<dyn Future<Output = Result<(), DbErr>> + Send + 'a>> {
        Box::pin(async move {
            for (kind, questions) in CATEGORIES {
                let category = category::Model::create(db, kind).await?;
                for (text, answer, difficulty) in questions {
                    question::Model::create(
                        db,
                        NewQuestion {
                            question: (*text).to_owned(),
                            answer: (*answer).to_owned(),
                            category: category.id,
                            difficulty: *difficulty,
                        },
                    )
                    .await?;
                }
            }
            Ok(())
        })
    }
}
