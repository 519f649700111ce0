pub mod actor;
pub mod artist;
pub mod category;
pub mod drink;
pub mod movie;
pub mod question;
pub mod show;
pub mod venue;

pub use actor::Entity as Actor;
pub use artist::Entity as Artist;
pub use category::Entity as Category;
pub use drink::Entity as Drink;
pub use movie::Entity as Movie;
pub use question::Entity as Question;
pub use show::Entity as Show;
pub use venue::Entity as Venue;

use sea_orm::sea_query::{Expr, Func, LikeExpr, SimpleExpr};
use sea_orm::ColumnTrait;
use serde::{Deserialize, Deserializer};

/// Distinguishes an explicit `null` (`Some(None)`) from an absent field,
/// which `#[serde(default)]` leaves as `None`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// `LOWER(column) LIKE '%term%'`, independent of the backend's LIKE collation.
///
/// SQLite's `LOWER` folds ASCII only, so the term is folded the same way and
/// case-insensitivity covers ASCII letters.
pub(crate) fn contains_ignore_case<C: ColumnTrait>(column: C, term: &str) -> SimpleExpr {
    let escaped = term
        .to_ascii_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    Expr::expr(Func::lower(Expr::col(column)))
        .like(LikeExpr::new(format!("%{escaped}%")).escape('\\'))
}
