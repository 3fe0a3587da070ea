use castellum_app::{
    command_handlers::{
        CancelConstructionCommandHandler, FoundVillageCommandHandler,
        UpgradeBuildingCommandHandler,
    },
    cqrs::{
        commands::{CancelConstruction, FoundVillage, UpgradeBuilding},
        queries::{GetVillageEconomy, VillageEconomy},
    },
    queries_handlers::GetVillageEconomyHandler,
    test_utils::tests::{TestApp, setup_app},
};
use castellum_game::{
    models::{map::Valley, player::Player},
    test_utils::{
        PlayerFactoryOptions, ValleyFactoryOptions, player_factory, valley_factory,
    },
};
use castellum_types::{
    Result,
    buildings::BuildingName,
    common::ResourceSet,
    errors::{ApplicationError, GameError},
    map::Position,
    tribe::Tribe,
};

async fn found_village(app: &TestApp, tribe: Tribe) -> Result<(Player, Valley)> {
    let player = player_factory(PlayerFactoryOptions {
        tribe: Some(tribe),
        ..Default::default()
    });
    let valley = valley_factory(ValleyFactoryOptions {
        position: Some(Position { x: 1, y: 1 }),
        ..Default::default()
    });

    app.app_bus
        .execute(
            FoundVillage {
                player: player.clone(),
                valley: valley.clone(),
            },
            FoundVillageCommandHandler::new(app.catalog.clone()),
        )
        .await?;

    Ok((player, valley))
}

async fn economy(app: &TestApp, village_id: u32) -> Result<VillageEconomy> {
    app.app_bus
        .query(
            GetVillageEconomy { village_id },
            GetVillageEconomyHandler::new(app.catalog.clone()),
        )
        .await
}

#[tokio::test]
async fn test_full_build_flow() -> Result<()> {
    let app = setup_app(Default::default());
    let (player, valley) = found_village(&app, Tribe::Roman).await?;

    let initial = economy(&app, valley.id).await?;
    assert_eq!(initial.wheat_upkeep, 3);
    assert_eq!(initial.stats.population, 3);
    assert_eq!(initial.stats.culture_points, 3);
    assert_eq!(initial.hourly_production, ResourceSet::new(12, 12, 12, 18));

    app.app_bus
        .execute(
            UpgradeBuilding {
                player_id: player.id,
                village_id: valley.id,
                slot_id: 1,
            },
            UpgradeBuildingCommandHandler::new(app.catalog.clone()),
        )
        .await?;

    let queued = economy(&app, valley.id).await?;
    assert_eq!(queued.queue.len(), 1, "There should be exactly 1 queued upgrade");
    assert_eq!(queued.resources.wood(), 750 - 40, "Resources should be deducted");
    let woodcutter = queued.fields.iter().find(|f| f.slot_id == 1).unwrap();
    assert_eq!(woodcutter.building, BuildingName::Woodcutter);
    assert_eq!((woodcutter.level, woodcutter.effective_level), (0, 1));

    let resolves_at = queued.queue[0].resolves_at;
    assert_eq!(app.worker.process_due_events(resolves_at).await?, 1);

    let built = economy(&app, valley.id).await?;
    assert!(built.queue.is_empty());
    let woodcutter = built.fields.iter().find(|f| f.slot_id == 1).unwrap();
    assert_eq!(woodcutter.level, 1, "Woodcutter should be level 1");
    assert_eq!(built.wheat_upkeep, 5);
    assert_eq!(built.stats.population, 5);
    assert_eq!(built.hourly_production.wood(), 16);
    assert_eq!(built.net_production.wheat(), 18 - 5);

    Ok(())
}

#[tokio::test]
async fn test_live_counters_follow_committed_changes() -> Result<()> {
    let app = setup_app(Default::default());
    let (player, valley) = found_village(&app, Tribe::Gaul).await?;

    let founded = economy(&app, valley.id).await?;
    assert_eq!(app.ticker.resources(valley.id).await, Some(founded.resources));

    app.app_bus
        .execute(
            UpgradeBuilding {
                player_id: player.id,
                village_id: valley.id,
                slot_id: 1,
            },
            UpgradeBuildingCommandHandler::new(app.catalog.clone()),
        )
        .await?;

    let queued = economy(&app, valley.id).await?;
    assert_eq!(queued.resources.wood(), 750 - 40);
    assert_eq!(app.ticker.resources(valley.id).await, Some(queued.resources));

    let resolves_at = queued.queue[0].resolves_at;
    assert_eq!(app.worker.process_due_events(resolves_at).await?, 1);

    let built = economy(&app, valley.id).await?;
    assert_eq!(app.ticker.resources(valley.id).await, Some(built.resources));

    Ok(())
}

#[tokio::test]
async fn test_cancel_flow_keeps_spent_resources() -> Result<()> {
    let app = setup_app(Default::default());
    let (player, valley) = found_village(&app, Tribe::Teuton).await?;

    for _ in 0..2 {
        app.app_bus
            .execute(
                UpgradeBuilding {
                    player_id: player.id,
                    village_id: valley.id,
                    slot_id: 1,
                },
                UpgradeBuildingCommandHandler::new(app.catalog.clone()),
            )
            .await?;
    }

    let queued = economy(&app, valley.id).await?;
    assert_eq!(queued.queue.len(), 2);
    assert_eq!(queued.queue[1].level, 2);
    let spent_wood = 750 - queued.resources.wood();

    app.app_bus
        .execute(
            CancelConstruction {
                player_id: player.id,
                village_id: valley.id,
                event_id: queued.queue[0].event_id,
            },
            CancelConstructionCommandHandler::new(),
        )
        .await?;

    let cancelled = economy(&app, valley.id).await?;
    assert!(cancelled.queue.is_empty());
    assert_eq!(750 - cancelled.resources.wood(), spent_wood);

    let last = queued.queue[1].resolves_at;
    assert_eq!(app.worker.process_due_events(last).await?, 0);
    let woodcutter = economy(&app, valley.id)
        .await?
        .fields
        .into_iter()
        .find(|f| f.slot_id == 1)
        .unwrap();
    assert_eq!(woodcutter.level, 0);

    Ok(())
}

#[tokio::test]
async fn test_failed_command_is_rolled_back() -> Result<()> {
    let app = setup_app(castellum_app::config::Config {
        player_starting_resources: 30,
        ..Default::default()
    });
    let (player, valley) = found_village(&app, Tribe::Gaul).await?;

    let result = app
        .app_bus
        .execute(
            UpgradeBuilding {
                player_id: player.id,
                village_id: valley.id,
                slot_id: 1,
            },
            UpgradeBuildingCommandHandler::new(app.catalog.clone()),
        )
        .await;
    assert!(matches!(
        result,
        Err(ApplicationError::Game(GameError::NotEnoughResources))
    ));

    let after = economy(&app, valley.id).await?;
    assert!(after.queue.is_empty());
    assert_eq!(after.resources, ResourceSet::splat(30));

    Ok(())
}
