#[cfg(any(test, feature = "test-utils"))]
#[cfg(not(tarpaulin_include))]
pub mod tests {
    use std::sync::Arc;

    use castellum_game::models::{buildings::BuildingCatalog, village::Village};

    use crate::{
        app::AppBus,
        config::Config,
        jobs::{
            ticker::{AccrualTicker, TimeBase},
            worker::ConstructionWorker,
        },
        repository::memory::InMemoryUnitOfWorkProvider,
        uow::UnitOfWorkProvider,
    };

    /// Stores a village in its own committed Unit of Work.
    pub async fn seed_village(provider: &InMemoryUnitOfWorkProvider, village: &Village) {
        let uow = provider.begin().await.unwrap();
        uow.villages().save(village).await.unwrap();
        uow.commit().await.unwrap();
    }

    pub struct TestApp {
        pub app_bus: AppBus,
        pub worker: Arc<ConstructionWorker>,
        pub ticker: Arc<AccrualTicker>,
        pub uow_provider: Arc<InMemoryUnitOfWorkProvider>,
        pub catalog: Arc<BuildingCatalog>,
        pub config: Arc<Config>,
    }

    /// Wires an in-memory app with the standard catalog.
    pub fn setup_app(config: Config) -> TestApp {
        let config = Arc::new(config);
        let catalog = Arc::new(BuildingCatalog::standard());
        let uow_provider = Arc::new(InMemoryUnitOfWorkProvider::new());

        let ticker = Arc::new(AccrualTicker::new(catalog.clone(), TimeBase::now()));

        let app_bus =
            AppBus::new(config.clone(), uow_provider.clone()).with_ticker(ticker.clone());
        let worker = Arc::new(
            ConstructionWorker::new(uow_provider.clone(), catalog.clone(), config.clone())
                .with_ticker(ticker.clone()),
        );

        TestApp {
            app_bus,
            worker,
            ticker,
            uow_provider,
            catalog,
            config,
        }
    }
}
