//! Random question selection for the trivia quiz.
//!
//! A category id of `0` means "all categories". Questions whose ids appear in
//! the seen list are never returned, and every remaining question is equally
//! likely to be picked.

use rand::Rng;
use rand::seq::SliceRandom;
use sea_orm::{ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::collections::HashSet;

use crate::models::question::{Column, Entity, Model};

/// Category id that selects questions from every category.
pub const ALL_CATEGORIES: i64 = 0;

/// Questions in `category_id` (or any, for [`ALL_CATEGORIES`]) not in `seen`.
pub fn eligible(questions: &[Model], category_id: i64, seen: &[i64]) -> Vec<Model> {
    let seen: HashSet<i64> = seen.iter().copied().collect();
    questions
        .iter()
        .filter(|q| category_id == ALL_CATEGORIES || q.category == category_id)
        .filter(|q| !seen.contains(&q.id))
        .cloned()
        .collect()
}

pub fn pick<R: Rng + ?Sized>(eligible: &[Model], rng: &mut R) -> Option<Model> {
    eligible.choose(rng).cloned()
}

/// Loads the category in SQL, drops seen ids in memory, then picks one.
///
/// The seen list is unbounded and is never bound as query parameters.
pub async fn pick_unseen(
    db: &DbConn,
    category_id: i64,
    seen: &[i64],
) -> Result<Option<Model>, DbErr> {
    let mut query = Entity::find();
    if category_id != ALL_CATEGORIES {
        query = query.filter(Column::Category.eq(category_id));
    }
    let in_category = query.order_by_asc(Column::Id).all(db).await?;
    let candidates = eligible(&in_category, category_id, seen);

    tracing::debug!(
        category_id,
        seen = seen.len(),
        candidates = candidates.len(),
        "Picking quiz question"
    );

    Ok(pick(&candidates, &mut rand::thread_rng()))
}
