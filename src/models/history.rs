use rust_decimal::Decimal;
use sqlx::FromRow;

/// One immutable trade record. `stocks` is signed (positive for a buy,
/// negative for a sell) and `price` holds the total transaction amount.
#[derive(Debug, FromRow)]
pub struct HistoryEntry {
    pub id: i64,
    pub symbol: String,
    pub stocks: i64,
    pub price: Decimal,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
