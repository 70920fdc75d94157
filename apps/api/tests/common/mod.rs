//! Common test utilities
//!
//! In-memory adapters for the repository ports and roster fixtures shared
//! by the service and API test suites.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use golfjoin_api::domain::errors::{DomainError, DomainResult};
use golfjoin_api::domain::outing::Outing;
use golfjoin_api::domain::participant::{Gender, Participant};
use golfjoin_api::domain::repositories::{
    NotificationSender, RosterRepository, TeamAssignmentRepository,
};
use golfjoin_api::domain::team::TeamAssignment;
use golfjoin_api::state::AppState;
use rust_decimal::Decimal;
use uuid::Uuid;

/// Outings and rosters held in memory
#[derive(Default)]
pub struct InMemoryRosters {
    outings: Mutex<HashMap<Uuid, (Outing, Vec<Participant>)>>,
}

impl InMemoryRosters {
    pub fn with_outing(self, outing: Outing, roster: Vec<Participant>) -> Self {
        self.outings.lock().unwrap().insert(outing.id, (outing, roster));
        self
    }
}

#[async_trait]
impl RosterRepository for InMemoryRosters {
    async fn find_outing(&self, outing_id: Uuid) -> DomainResult<Option<Outing>> {
        Ok(self
            .outings
            .lock()
            .unwrap()
            .get(&outing_id)
            .map(|(outing, _)| outing.clone()))
    }

    async fn find_roster(&self, outing_id: Uuid) -> DomainResult<Vec<Participant>> {
        Ok(self
            .outings
            .lock()
            .unwrap()
            .get(&outing_id)
            .map(|(_, roster)| roster.clone())
            .unwrap_or_default())
    }
}

/// Rosters that hand control back to the runtime before every lookup
///
/// Lets concurrent confirmations interleave between their steps.
pub struct YieldingRosters(pub InMemoryRosters);

#[async_trait]
impl RosterRepository for YieldingRosters {
    async fn find_outing(&self, outing_id: Uuid) -> DomainResult<Option<Outing>> {
        tokio::task::yield_now().await;
        self.0.find_outing(outing_id).await
    }

    async fn find_roster(&self, outing_id: Uuid) -> DomainResult<Vec<Participant>> {
        tokio::task::yield_now().await;
        self.0.find_roster(outing_id).await
    }
}

/// Team assignments held in memory, in insertion order
///
/// Like the Postgres schema, an outing holds at most one confirmed
/// assignment.
#[derive(Default)]
pub struct InMemoryAssignments {
    stored: Mutex<Vec<TeamAssignment>>,
}

impl InMemoryAssignments {
    pub fn all(&self) -> Vec<TeamAssignment> {
        self.stored.lock().unwrap().clone()
    }
}

#[async_trait]
impl TeamAssignmentRepository for InMemoryAssignments {
    async fn save(&self, assignment: &TeamAssignment) -> DomainResult<()> {
        let mut stored = self.stored.lock().unwrap();
        let settled = stored.iter().any(|a| {
            a.id() != assignment.id()
                && a.outing_id() == assignment.outing_id()
                && a.status().is_confirmed()
        });
        if settled && assignment.status().is_confirmed() {
            return Err(DomainError::AlreadyAssigned(assignment.outing_id()));
        }
        stored.retain(|a| a.id() != assignment.id());
        stored.push(assignment.clone());
        Ok(())
    }

    async fn find_by_outing(&self, outing_id: Uuid) -> DomainResult<Option<TeamAssignment>> {
        Ok(self
            .stored
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|a| a.outing_id() == outing_id)
            .cloned())
    }

    async fn find_by_date(&self, date: NaiveDate) -> DomainResult<Vec<TeamAssignment>> {
        Ok(self
            .stored
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.date() == date)
            .cloned()
            .collect())
    }

    async fn update_status(&self, assignment: &TeamAssignment) -> DomainResult<()> {
        let mut stored = self.stored.lock().unwrap();
        let existing = stored
            .iter_mut()
            .find(|a| a.id() == assignment.id())
            .ok_or(DomainError::AssignmentNotFound(assignment.id()))?;
        *existing = assignment.clone();
        Ok(())
    }
}

/// Records every notice and fails for selected members
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(Uuid, String)>>,
    unreachable: HashSet<Uuid>,
}

impl RecordingNotifier {
    pub fn failing_for(users: impl IntoIterator<Item = Uuid>) -> Self {
        Self {
            sent: Mutex::default(),
            unreachable: users.into_iter().collect(),
        }
    }

    pub fn sent(&self) -> Vec<(Uuid, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSender for RecordingNotifier {
    async fn send(&self, user_id: Uuid, message: &str, _outing_id: Uuid) -> DomainResult<()> {
        if self.unreachable.contains(&user_id) {
            return Err(DomainError::NotificationFailed(format!(
                "user {} unreachable",
                user_id
            )));
        }
        self.sent.lock().unwrap().push((user_id, message.to_string()));
        Ok(())
    }
}

/// Adapters wired together for one test
pub struct TestContext {
    pub rosters: Arc<InMemoryRosters>,
    pub assignments: Arc<InMemoryAssignments>,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestContext {
    pub fn new(rosters: InMemoryRosters, notifier: RecordingNotifier) -> Self {
        Self {
            rosters: Arc::new(rosters),
            assignments: Arc::new(InMemoryAssignments::default()),
            notifier: Arc::new(notifier),
        }
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            rosters: self.rosters.clone(),
            assignments: self.assignments.clone(),
            notifier: self.notifier.clone(),
            default_team_size: 4,
        }
    }
}

// ===== Fixtures =====

pub fn outing_on(date: NaiveDate) -> Outing {
    Outing {
        id: Uuid::new_v4(),
        date,
        course_id: "sky-valley".to_string(),
        course_name: "Sky Valley CC".to_string(),
    }
}

pub fn outing() -> Outing {
    outing_on(NaiveDate::from_ymd_opt(2026, 10, 24).unwrap())
}

pub fn participant(nickname: &str, gender: Gender, score: Option<i64>, order: u32) -> Participant {
    Participant::new(
        Uuid::new_v4(),
        Some(nickname.to_string()),
        gender,
        score.map(Decimal::from),
        order,
    )
}

/// Four men and four women of mixed ability
pub fn mixed_roster() -> Vec<Participant> {
    vec![
        participant("Kim", Gender::Male, Some(80), 1),
        participant("Lee", Gender::Male, Some(85), 2),
        participant("Park", Gender::Male, Some(90), 3),
        participant("Choi", Gender::Male, Some(95), 4),
        participant("Jung", Gender::Female, Some(82), 5),
        participant("Kang", Gender::Female, Some(88), 6),
        participant("Yoon", Gender::Female, Some(92), 7),
        participant("Han", Gender::Female, Some(98), 8),
    ]
}
