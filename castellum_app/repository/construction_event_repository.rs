use chrono::{DateTime, Utc};
use uuid::Uuid;

use castellum_game::models::construction::{ConstructionEvent, ConstructionStatus};
use castellum_types::errors::ApplicationError;

/// An event taken out of the store, with the terminal status it left with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructionRecord {
    pub event: ConstructionEvent,
    pub status: ConstructionStatus,
}

/// Event store for construction upgrades. It only holds queued events:
/// resolving or cancelling one removes it. Events are kept exactly as
/// scheduled, `resolves_at` is never rewritten.
#[async_trait::async_trait]
pub trait ConstructionEventRepository: Send + Sync {
    /// Appends a new queued event.
    async fn enqueue(&self, event: &ConstructionEvent) -> Result<(), ApplicationError>;

    /// A queued event. `EventNotFound` once it was resolved or cancelled.
    async fn get_by_id(&self, event_id: Uuid) -> Result<ConstructionEvent, ApplicationError>;

    /// Queued events of a village, in insertion order.
    async fn pending_events(
        &self,
        village_id: u32,
    ) -> Result<Vec<ConstructionEvent>, ApplicationError>;

    /// Queued events with `resolves_at <= now`, earliest first.
    async fn due_events(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<ConstructionEvent>, ApplicationError>;

    /// Removes a queued event as `Resolved`.
    async fn resolve(&self, event_id: Uuid) -> Result<ConstructionRecord, ApplicationError>;

    /// Removes a queued event as `Cancelled`.
    async fn cancel(&self, event_id: Uuid) -> Result<ConstructionRecord, ApplicationError>;
}
