use serde::{Serialize, Deserialize};

/// A single contest entrant from the competitors table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Competitor {
    pub id: i64,
    pub name: String,
    pub location: String,
}
