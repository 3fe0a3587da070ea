use chrono::{DateTime, Utc};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};
use tokio::sync::OwnedMutexGuard;
use uuid::Uuid;

use castellum_game::models::{
    construction::{ConstructionEvent, ConstructionStatus},
    village::Village,
};
use castellum_types::errors::{AppError, ApplicationError};

use crate::{
    repository::{ConstructionEventRepository, ConstructionRecord, VillageRepository},
    uow::{UnitOfWork, UnitOfWorkProvider},
};

#[derive(Debug, Clone, Default)]
struct MemoryState {
    villages: HashMap<u32, Village>,
    events: Vec<ConstructionEvent>,
}

type SharedState = Arc<Mutex<MemoryState>>;

fn lock(state: &SharedState) -> Result<MutexGuard<'_, MemoryState>, ApplicationError> {
    state
        .lock()
        .map_err(|e| ApplicationError::Infrastructure(e.to_string()))
}

pub struct InMemoryVillageRepository {
    state: SharedState,
}

#[async_trait::async_trait]
impl VillageRepository for InMemoryVillageRepository {
    async fn get_by_id(&self, village_id: u32) -> Result<Village, ApplicationError> {
        lock(&self.state)?
            .villages
            .get(&village_id)
            .cloned()
            .ok_or_else(|| AppError::VillageNotFound(village_id).into())
    }

    async fn list(&self) -> Result<Vec<Village>, ApplicationError> {
        let mut villages: Vec<Village> = lock(&self.state)?.villages.values().cloned().collect();
        villages.sort_by_key(|v| v.id);
        Ok(villages)
    }

    async fn list_by_player_id(&self, player_id: Uuid) -> Result<Vec<Village>, ApplicationError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|v| v.player_id == player_id)
            .collect())
    }

    async fn save(&self, village: &Village) -> Result<(), ApplicationError> {
        lock(&self.state)?
            .villages
            .insert(village.id, village.clone());
        Ok(())
    }
}

pub struct InMemoryConstructionEventRepository {
    state: SharedState,
}

impl InMemoryConstructionEventRepository {
    fn take(
        &self,
        event_id: Uuid,
        status: ConstructionStatus,
    ) -> Result<ConstructionRecord, ApplicationError> {
        let mut state = lock(&self.state)?;
        let idx = state
            .events
            .iter()
            .position(|e| e.id == event_id)
            .ok_or(AppError::EventNotFound(event_id))?;

        // keeps insertion order of the rest
        let event = state.events.remove(idx);
        Ok(ConstructionRecord { event, status })
    }
}

#[async_trait::async_trait]
impl ConstructionEventRepository for InMemoryConstructionEventRepository {
    async fn enqueue(&self, event: &ConstructionEvent) -> Result<(), ApplicationError> {
        lock(&self.state)?.events.push(event.clone());
        Ok(())
    }

    async fn get_by_id(&self, event_id: Uuid) -> Result<ConstructionEvent, ApplicationError> {
        lock(&self.state)?
            .events
            .iter()
            .find(|e| e.id == event_id)
            .cloned()
            .ok_or_else(|| AppError::EventNotFound(event_id).into())
    }

    async fn pending_events(
        &self,
        village_id: u32,
    ) -> Result<Vec<ConstructionEvent>, ApplicationError> {
        Ok(lock(&self.state)?
            .events
            .iter()
            .filter(|e| e.village_id == village_id)
            .cloned()
            .collect())
    }

    async fn due_events(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<ConstructionEvent>, ApplicationError> {
        let mut due: Vec<ConstructionEvent> = lock(&self.state)?
            .events
            .iter()
            .filter(|e| e.resolves_at <= now)
            .cloned()
            .collect();

        // stable: ties keep insertion order
        due.sort_by_key(|e| e.resolves_at);
        Ok(due)
    }

    async fn resolve(&self, event_id: Uuid) -> Result<ConstructionRecord, ApplicationError> {
        self.take(event_id, ConstructionStatus::Resolved)
    }

    async fn cancel(&self, event_id: Uuid) -> Result<ConstructionRecord, ApplicationError> {
        self.take(event_id, ConstructionStatus::Cancelled)
    }
}

/// Works on a private copy of the store, written back on commit. The
/// provider lets a single Unit of Work run at a time.
pub struct InMemoryUnitOfWork {
    committed: SharedState,
    staged: SharedState,
    _guard: OwnedMutexGuard<()>,
}

#[async_trait::async_trait]
impl<'a> UnitOfWork<'a> for InMemoryUnitOfWork {
    fn villages(&self) -> Arc<dyn VillageRepository + 'a> {
        Arc::new(InMemoryVillageRepository {
            state: self.staged.clone(),
        })
    }

    fn construction_events(&self) -> Arc<dyn ConstructionEventRepository + 'a> {
        Arc::new(InMemoryConstructionEventRepository {
            state: self.staged.clone(),
        })
    }

    async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
        let staged = lock(&self.staged)?.clone();
        *lock(&self.committed)? = staged;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryUnitOfWorkProvider {
    state: SharedState,
    tx_lock: Arc<tokio::sync::Mutex<()>>,
}

impl InMemoryUnitOfWorkProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UnitOfWorkProvider for InMemoryUnitOfWorkProvider {
    async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError> {
        let guard = self.tx_lock.clone().lock_owned().await;
        let snapshot = lock(&self.state)?.clone();

        Ok(Box::new(InMemoryUnitOfWork {
            committed: self.state.clone(),
            staged: Arc::new(Mutex::new(snapshot)),
            _guard: guard,
        }))
    }
}
