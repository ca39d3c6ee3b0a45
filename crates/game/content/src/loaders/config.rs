//! Game configuration loader.

use std::path::Path;

use rogue_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
///
/// Every table and field is optional; anything left out keeps its default.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing GameConfig
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| e.context(format!("in {}", path.display())))
    }

    /// Parse config from TOML text.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        validate(&config)?;
        Ok(config)
    }
}

/// Rejects configurations the generator cannot work with.
fn validate(config: &GameConfig) -> LoadResult<()> {
    let map = &config.map;
    if map.room_min_size < 3 || map.room_min_size > map.room_max_size {
        anyhow::bail!(
            "room sizes must satisfy 3 <= min <= max (got {}..{})",
            map.room_min_size,
            map.room_max_size
        );
    }
    if map.width <= map.room_max_size + 1 || map.height <= map.room_max_size + 1 {
        anyhow::bail!(
            "map {}x{} is too small for rooms of size {}",
            map.width,
            map.height,
            map.room_max_size
        );
    }
    if config.alert.min_turns > config.alert.max_turns {
        anyhow::bail!("alert.min_turns exceeds alert.max_turns");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse(
            r#"
            torch_radius = 6

            [combat]
            crit_chance = 0.2
            "#,
        )
        .unwrap();
        assert_eq!(config.torch_radius, 6);
        assert_eq!(config.combat.crit_chance, 0.2);
        assert_eq!(config.combat.sound_chance, 30);
        assert_eq!(config.map, GameConfig::default().map);
    }

    #[test]
    fn empty_file_is_the_default_config() {
        assert_eq!(ConfigLoader::parse("").unwrap(), GameConfig::default());
    }

    #[test]
    fn map_smaller_than_a_room_is_rejected() {
        let err = ConfigLoader::parse("[map]\nwidth = 8\nheight = 8\n").unwrap_err();
        assert!(err.to_string().contains("too small"));
    }
}
