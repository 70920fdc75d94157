use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::domain::participant::Participant;

/// A group of members who play together, usually a foursome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// 1-based position in the assignment
    pub team_number: u32,
    pub members: Vec<Participant>,
    /// Mean of the members' effective scores, rounded to a whole stroke
    pub average_score: i64,
}

impl Team {
    /// Creates a team and computes its average score
    pub fn new(team_number: u32, members: Vec<Participant>) -> Self {
        let average_score = rounded_mean(&members);
        Self {
            team_number,
            members,
            average_score,
        }
    }

    /// Member nicknames joined for display, e.g. `"Kim, Lee, Park"`
    pub fn roster_line(&self) -> String {
        self.members
            .iter()
            .map(|m| m.nickname.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

fn rounded_mean(members: &[Participant]) -> i64 {
    if members.is_empty() {
        return 0;
    }

    let total: Decimal = members.iter().map(Participant::effective_score).sum();
    let mean = total / Decimal::from(members.len());

    mean.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or_default()
}
