use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::Gender;

/// Score assumed for a member who never reported an average
pub const DEFAULT_AVERAGE_SCORE: u32 = 90;

/// Nickname shown for a member without one on their profile
pub const UNKNOWN_NICKNAME: &str = "Unknown";

/// A confirmed member of an outing's roster
///
/// `average_score` is strokes per round, so lower is better. It is kept as
/// stored; only [`Participant::effective_score`] applies the fallback.
/// `registration_order` reflects when the member applied and breaks
/// ties between equal scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub user_id: Uuid,
    pub nickname: String,
    pub gender: Gender,
    pub average_score: Option<Decimal>,
    pub registration_order: u32,
}

impl Participant {
    /// Builds a participant from a roster entry
    ///
    /// A missing or blank nickname becomes [`UNKNOWN_NICKNAME`].
    ///
    /// # Example
    /// ```
    /// use golfjoin_api::domain::participant::{Gender, Participant};
    /// use rust_decimal::Decimal;
    /// use uuid::Uuid;
    ///
    /// let participant = Participant::new(Uuid::new_v4(), None, Gender::Male, None, 1);
    /// assert_eq!(participant.nickname, "Unknown");
    /// assert_eq!(participant.effective_score(), Decimal::from(90));
    /// ```
    pub fn new(
        user_id: Uuid,
        nickname: Option<String>,
        gender: Gender,
        average_score: Option<Decimal>,
        registration_order: u32,
    ) -> Self {
        let nickname = nickname
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| UNKNOWN_NICKNAME.to_string());

        Self {
            user_id,
            nickname,
            gender,
            average_score,
            registration_order,
        }
    }

    /// Score used for balancing, falling back to [`DEFAULT_AVERAGE_SCORE`]
    ///
    /// A zero or negative average is an unset profile field, not a real
    /// score, and falls back too.
    pub fn effective_score(&self) -> Decimal {
        self.average_score
            .filter(|score| score.is_sign_positive() && !score.is_zero())
            .unwrap_or_else(|| Decimal::from(DEFAULT_AVERAGE_SCORE))
    }
}
