use std::sync::Arc;
use tracing::{info, instrument};

use castellum_types::errors::{AppError, ApplicationError};

use crate::{
    command_handlers::ensure_owner,
    config::Config,
    cqrs::{CommandHandler, commands::CancelConstruction},
    uow::UnitOfWork,
};

pub struct CancelConstructionCommandHandler {}

impl CancelConstructionCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<CancelConstruction> for CancelConstructionCommandHandler {
    #[instrument(skip_all, fields(
        village_id = command.village_id,
        event_id = %command.event_id,
    ))]
    async fn handle(
        &self,
        command: CancelConstruction,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        let village = uow.villages().get_by_id(command.village_id).await?;
        ensure_owner(&village, command.player_id)?;

        let event_repo = uow.construction_events();
        // Resolved and cancelled events are gone from the store.
        let target = event_repo.get_by_id(command.event_id).await?;
        if target.village_id != village.id {
            return Err(AppError::EventNotFound(command.event_id).into());
        }

        // Later upgrades of the same slot build on top of this one.
        let pending = event_repo.pending_events(village.id).await?;
        let to_cancel: Vec<_> = pending
            .iter()
            .skip_while(|e| e.id != command.event_id)
            .filter(|e| e.slot_id == target.slot_id && e.building == target.building)
            .map(|e| e.id)
            .collect();

        for event_id in &to_cancel {
            event_repo.cancel(*event_id).await?;
        }

        info!(cancelled = to_cancel.len(), "Construction cancelled");
        Ok(())
    }
}
