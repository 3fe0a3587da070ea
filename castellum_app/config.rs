use dotenvy::dotenv;
use std::env;

use castellum_game::models::factory::{FactorySettings, NpcUpkeepPolicy};

#[derive(Debug, Clone)]
pub struct Config {
    pub world_size: i32,
    pub player_starting_resources: u32,
    pub npc_wheat_upkeep: NpcUpkeepPolicy,
    pub worker_interval_ms: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let world_size = match env::var("CASTELLUM_WORLD_SIZE") {
            Ok(val) => val.parse::<i32>().unwrap_or(100).max(1),
            Err(_) => 100,
        };

        let player_starting_resources = match env::var("CASTELLUM_PLAYER_STARTING_RESOURCES") {
            Ok(val) => val.parse::<u32>().unwrap_or(750),
            Err(_) => 750,
        };

        let npc_wheat_upkeep = match env::var("CASTELLUM_NPC_WHEAT_UPKEEP") {
            Ok(val) => parse_npc_upkeep(&val).unwrap_or(NpcUpkeepPolicy::FromPopulation),
            Err(_) => NpcUpkeepPolicy::FromPopulation,
        };

        let worker_interval_ms = match env::var("CASTELLUM_WORKER_INTERVAL_MS") {
            Ok(val) => val.parse::<u64>().unwrap_or(1000).max(1),
            Err(_) => 1000,
        };

        Self {
            world_size,
            player_starting_resources,
            npc_wheat_upkeep,
            worker_interval_ms,
        }
    }

    pub fn factory_settings(&self) -> FactorySettings {
        FactorySettings {
            world_size: self.world_size,
            player_starting_resources: self.player_starting_resources,
            npc_upkeep: self.npc_wheat_upkeep,
            ..Default::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            world_size: 100,
            player_starting_resources: 750,
            npc_wheat_upkeep: NpcUpkeepPolicy::FromPopulation,
            worker_interval_ms: 1000,
        }
    }
}

/// `population` or a fixed amount of wheat per hour.
fn parse_npc_upkeep(value: &str) -> Option<NpcUpkeepPolicy> {
    match value.trim() {
        "population" => Some(NpcUpkeepPolicy::FromPopulation),
        other => other.parse::<u32>().ok().map(NpcUpkeepPolicy::Fixed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_npc_upkeep() {
        assert_eq!(
            parse_npc_upkeep("population"),
            Some(NpcUpkeepPolicy::FromPopulation)
        );
        assert_eq!(parse_npc_upkeep(" 0 "), Some(NpcUpkeepPolicy::Fixed(0)));
        assert_eq!(parse_npc_upkeep("lots"), None);
    }

    #[test]
    fn test_factory_settings_from_config() {
        let config = Config {
            world_size: 50,
            player_starting_resources: 900,
            npc_wheat_upkeep: NpcUpkeepPolicy::Fixed(7),
            worker_interval_ms: 10,
        };
        let settings = config.factory_settings();

        assert_eq!(settings.world_size, 50);
        assert_eq!(settings.player_starting_resources, 900);
        assert_eq!(settings.npc_upkeep, NpcUpkeepPolicy::Fixed(7));
        assert!(!settings.is_capital);
    }
}
