use std::sync::Arc;

use castellum_app::{
    bootstrap::bootstrap_world_map,
    config::Config,
    jobs::{
        ticker::{AccrualTicker, TimeBase},
        worker::ConstructionWorker,
    },
    repository::memory::InMemoryUnitOfWorkProvider,
    uow::UnitOfWorkProvider,
};
use castellum_game::models::buildings::BuildingCatalog;
use castellum_types::{Result, errors::ApplicationError};

mod logs;
use logs::setup_logging;

struct Castellum {
    worker: Arc<ConstructionWorker>,
    ticker: Arc<AccrualTicker>,
    uow_provider: Arc<dyn UnitOfWorkProvider>,
}

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> Result<(), ApplicationError> {
    let _log_guard = setup_logging();
    let castellum = setup_app().await?;

    let worker = castellum.worker.clone().run();
    watch_villages(&castellum).await?;

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| ApplicationError::Infrastructure(e.to_string()))?;

    tracing::info!("Shutting down.");
    worker.abort();
    Ok(())
}

async fn setup_app() -> Result<Castellum, ApplicationError> {
    let config = Arc::new(Config::from_env());
    let catalog = Arc::new(BuildingCatalog::standard());
    let uow_provider: Arc<dyn UnitOfWorkProvider> = Arc::new(InMemoryUnitOfWorkProvider::new());

    match bootstrap_world_map(&uow_provider, &catalog, &config).await {
        Ok(true) => tracing::info!("World Map successfully bootstrapped."),
        Ok(false) => tracing::info!("World Map already set. Skipping bootstrap."),
        Err(e) => {
            tracing::error!("Error during World Map initialization: {e}");
            return Err(e);
        }
    }

    let ticker = Arc::new(AccrualTicker::new(catalog.clone(), TimeBase::now()));
    let worker = Arc::new(
        ConstructionWorker::new(uow_provider.clone(), catalog, config.clone())
            .with_ticker(ticker.clone()),
    );

    Ok(Castellum {
        worker,
        ticker,
        uow_provider,
    })
}

async fn watch_villages(castellum: &Castellum) -> Result<(), ApplicationError> {
    let uow = castellum.uow_provider.begin().await?;
    let villages = uow.villages().list().await;
    uow.rollback().await?;

    for village in villages? {
        castellum.ticker.watch(&village).await?;
    }
    Ok(())
}
