use sqlx::FromRow;

/// A user's current position in one symbol. Always fetched scoped to the
/// session user; a row exists only while the quantity is positive.
#[derive(Debug, FromRow)]
pub struct Holding {
    pub symbol: String,
    pub stocks: i64,
}
