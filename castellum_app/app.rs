use std::sync::Arc;
use tracing::error;

use castellum_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Command, CommandHandler, Query, QueryHandler},
    jobs::ticker::AccrualTicker,
    uow::UnitOfWorkProvider,
};

/// AppBus (Mediator)
/// This struct is the central entry point for all application logic.
/// It does not contain any business logic itself.
/// Its primary roles are:
/// 1. Managing Unit of Work (transaction) lifecycles.
/// 2. Dispatching Commands and Queries to their respective handlers.
pub struct AppBus {
    config: Arc<Config>,
    uow_provider: Arc<dyn UnitOfWorkProvider>,
    ticker: Option<Arc<AccrualTicker>>,
}

impl AppBus {
    pub fn new(config: Arc<Config>, uow_provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self {
            config,
            uow_provider,
            ticker: None,
        }
    }

    /// Re-anchors the live counters of the village a command changed, once
    /// the command is committed.
    pub fn with_ticker(mut self, ticker: Arc<AccrualTicker>) -> Self {
        self.ticker = Some(ticker);
        self
    }

    /// Executes a command inside a Unit of Work: commits on success,
    /// rolls back on failure.
    pub async fn execute<C, H>(&self, cmd: C, handler: H) -> Result<(), ApplicationError>
    where
        C: Command,
        H: CommandHandler<C>,
    {
        let village_id = cmd.village_id();
        let uow = self.uow_provider.begin().await?;

        match handler.handle(cmd, &uow, &self.config).await {
            Ok(_) => uow.commit().await?,
            Err(e) => {
                uow.rollback().await?;
                return Err(e);
            }
        }

        if let (Some(ticker), Some(village_id)) = (&self.ticker, village_id) {
            // The command is committed already, a stale counter is only logged.
            if let Err(e) = self.rewatch(ticker, village_id).await {
                error!(village_id, error = %e, "Unable to re-watch village");
            }
        }
        Ok(())
    }

    async fn rewatch(
        &self,
        ticker: &AccrualTicker,
        village_id: u32,
    ) -> Result<(), ApplicationError> {
        let uow = self.uow_provider.begin().await?;
        let village = uow.villages().get_by_id(village_id).await;
        uow.rollback().await?;

        ticker.watch(&village?).await
    }

    /// Executes a query. The Unit of Work is always rolled back.
    pub async fn query<Q, H>(&self, query: Q, handler: H) -> Result<Q::Output, ApplicationError>
    where
        Q: Query,
        H: QueryHandler<Q>,
    {
        let uow = self.uow_provider.begin().await?;
        let result = handler.handle(query, &uow, &self.config).await;
        uow.rollback().await?;

        result
    }
}
