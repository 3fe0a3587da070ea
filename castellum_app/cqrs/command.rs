use async_trait::async_trait;
use castellum_types::errors::ApplicationError;
use std::sync::Arc;

use crate::{config::Config, uow::UnitOfWork};

/// A trait for Command structs.
/// Commands are operations that change the state of the system.
pub trait Command: Send + Sync {
    /// Village whose stored state the command changes, if any.
    fn village_id(&self) -> Option<u32> {
        None
    }
}

/// A trait for handlers that execute Commands.
/// It must not commit or roll back the Unit of Work, the [`crate::app::AppBus`] does.
#[async_trait]
pub trait CommandHandler<C: Command> {
    async fn handle(
        &self,
        cmd: C,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        config: &Arc<Config>,
    ) -> Result<(), ApplicationError>;
}
