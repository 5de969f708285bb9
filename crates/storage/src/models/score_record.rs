use chrono::NaiveDateTime;
use uuid::Uuid;

/// Points awarded to one processed receipt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRecord {
    pub id: Uuid,
    pub points: u64,
    pub processed_at: NaiveDateTime,
}

impl ScoreRecord {
    pub fn new(points: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            points,
            processed_at: chrono::Utc::now().naive_utc(),
        }
    }
}
