use uuid::Uuid;

/// Domain events raised by the TeamAssignment aggregate
///
/// # Example
/// ```
/// use golfjoin_api::domain::team::events::AssignmentEvent;
/// use uuid::Uuid;
///
/// let event = AssignmentEvent::Notified {
///     assignment_id: Uuid::new_v4(),
///     recipients: 8,
/// };
/// assert_eq!(event.name(), "notified");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentEvent {
    /// Fired when teams for an outing are confirmed
    Created {
        assignment_id: Uuid,
        outing_id: Uuid,
        team_count: usize,
        member_count: usize,
    },
    /// Fired once every member has been told their team
    Notified {
        assignment_id: Uuid,
        recipients: usize,
    },
}

impl AssignmentEvent {
    /// Returns the assignment_id for this event
    pub fn assignment_id(&self) -> Uuid {
        match self {
            AssignmentEvent::Created { assignment_id, .. } => *assignment_id,
            AssignmentEvent::Notified { assignment_id, .. } => *assignment_id,
        }
    }

    /// Short event name for logs
    pub fn name(&self) -> &'static str {
        match self {
            AssignmentEvent::Created { .. } => "created",
            AssignmentEvent::Notified { .. } => "notified",
        }
    }
}
