use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scheduled group round ("join") at a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outing {
    pub id: Uuid,
    pub date: NaiveDate,
    pub course_id: String,
    pub course_name: String,
}

impl Outing {
    /// Short month/day label used in member notifications, e.g. `10/7`
    pub fn short_date(&self) -> String {
        self.date.format("%-m/%-d").to_string()
    }
}
