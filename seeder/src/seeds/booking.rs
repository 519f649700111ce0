use crate::seed::Seeder;
use chrono::{Duration, Utc};
use db::models::artist::{self, NewArtist};
use db::models::show::{self, NewShow};
use db::models::venue::{self, NewVenue};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng, seq::SliceRandom};
use sea_orm::{DatabaseConnection, DbErr};
use std::pin::Pin;

pub struct BookingSeeder;

const GENRES: [&str; 8] = [
    "Jazz",
    "Reggae",
    "Swing",
    "Classical",
    "Folk",
    "Rock n Roll",
    "Hip-Hop",
    "R&B",
];

fn genres(rng: &mut StdRng) -> Vec<String> {
    let count = rng.gen_range(1..=3);
    GENRES
        .choose_multiple(rng, count)
        .map(|g| g.to_string())
        .collect()
}

impl Seeder for BookingSeeder {
    fn seed<'a>(
        &'a self,
        db: &'a DatabaseConnection,
    ) -> Pin<Box<dyn Future<Output = Result<(), DbErr>> + Send + 'a>> {
        Box::pin(async move {
            let mut rng = StdRng::from_entropy();

            let venue_rows = [
                ("The Musical Hop", "San Francisco", "CA", "1015 Folsom Street", true),
                ("The Dueling Pianos Bar", "New York", "NY", "335 Delancey Street", false),
                ("Park Square Live Music & Coffee", "San Francisco", "CA", "34 Whiskey Moore Ave", false),
            ];
            let mut venues = Vec::with_capacity(venue_rows.len());
            for (name, city, state, address, seeking_talent) in venue_rows {
                let venue = venue::Model::create(
                    db,
                    NewVenue {
                        name: name.to_owned(),
                        city: city.to_owned(),
                        state: state.to_owned(),
                        address: address.to_owned(),
                        phone: Some(format!("{}-555-{:04}", rng.gen_range(200..999), rng.gen_range(0..10_000))),
                        seeking_talent,
                        seeking_description: seeking_talent
                            .then(|| "We are on the lookout for a local artist to play every two weeks.".to_owned()),
                        genres: genres(&mut rng),
                        ..Default::default()
                    },
                )
                .await?;
                venues.push(venue);
            }

            let artist_rows = [
                ("Guns N Petals", "San Francisco", "CA", true),
                ("Matt Quevedo", "New York", "NY", false),
                ("The Wild Sax Band", "San Francisco", "CA", false),
            ];
            let mut artists = Vec::with_capacity(artist_rows.len());
            for (name, city, state, seeking_venue) in artist_rows {
                let artist = artist::Model::create(
                    db,
                    NewArtist {
                        name: name.to_owned(),
                        city: city.to_owned(),
                        state: state.to_owned(),
                        seeking_venue,
                        genres: genres(&mut rng),
                        ..Default::default()
                    },
                )
                .await?;
                artists.push(artist);
            }

            let now = Utc::now();
            for offset_days in [-60, -14, 7, 21, 45] {
                let (Some(venue), Some(artist)) = (venues.choose(&mut rng), artists.choose(&mut rng))
                else {
                    break;
                };
                show::Model::create(
                    db,
                    NewShow {
                        venue_id: venue.id,
                        artist_id: artist.id,
                        start_time: now + Duration::days(offset_days) + Duration::hours(rng.gen_range(18..23)),
                    },
                )
                .await?;
            }

            Ok(())
        })
    }
}
