//! Enemy configuration and zombie definitions loaded from RON files.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::error::{ConfigError, DataLoadError};

/// Directory scanned for `*.ron` zombie definitions at startup.
pub const DEFINITIONS_DIR: &str = "assets/data/enemies";

/// Tuning for one enemy controller. Immutable once the controller exists.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct EnemyConfig {
    pub detection_range: f32,
    pub attack_range: f32,
    pub max_health: f32,
    /// Seconds between attacks.
    pub attack_cooldown: f32,
    /// Seconds spent stunned after a non-lethal hit.
    pub stun_duration: f32,
}

impl EnemyConfig {
    /// Reject configurations the state machine can't honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("detection_range", self.detection_range),
            ("attack_range", self.attack_range),
            ("max_health", self.max_health),
            ("attack_cooldown", self.attack_cooldown),
            ("stun_duration", self.stun_duration),
        ];

        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field });
            }
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.max_health <= 0.0 {
            return Err(ConfigError::NonPositiveHealth(self.max_health));
        }

        if self.attack_range > self.detection_range {
            return Err(ConfigError::AttackRangeExceedsDetection {
                attack_range: self.attack_range,
                detection_range: self.detection_range,
            });
        }

        Ok(())
    }
}

/// Zombie definition loaded from RON file.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ZombieDefinition {
    pub name: String,
    pub config: EnemyConfig,
    /// Units per second while walking.
    pub move_speed: f32,
    /// Seconds the corpse stays around before the death is resolved.
    pub despawn_delay: f32,
}

impl Default for ZombieDefinition {
    fn default() -> Self {
        Self {
            name: "Zombie".to_string(),
            config: EnemyConfig {
                detection_range: 10.0,
                attack_range: 2.0,
                max_health: 100.0,
                attack_cooldown: 2.0,
                stun_duration: 0.5,
            },
            move_speed: 3.5,
            despawn_delay: 2.0,
        }
    }
}

impl ZombieDefinition {
    /// Check the controller config plus the host-side tuning.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.config.validate()?;

        for (field, value) in [("move_speed", self.move_speed), ("despawn_delay", self.despawn_delay)] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field });
            }
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        Ok(())
    }

    /// Parse and validate a definition. `origin` only labels errors.
    pub fn from_ron_str(origin: &str, contents: &str) -> Result<Self, DataLoadError> {
        let definition: Self = ron::from_str(contents).map_err(|e| DataLoadError::ParseError {
            path: origin.to_string(),
            details: e.to_string(),
        })?;

        definition
            .validate()
            .map_err(|source| DataLoadError::InvalidDefinition {
                path: origin.to_string(),
                source,
            })?;

        Ok(definition)
    }

    /// Read, parse and validate a definition file.
    pub fn load(path: &Path) -> Result<Self, DataLoadError> {
        let origin = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
            path: origin.clone(),
            details: e.to_string(),
        })?;
        Self::from_ron_str(&origin, &contents)
    }
}

/// Resource holding all loaded zombie definitions.
#[derive(Resource, Default)]
pub struct ZombieRegistry {
    pub definitions: HashMap<String, ZombieDefinition>,
}

impl ZombieRegistry {
    /// Get a zombie definition by type name.
    pub fn get(&self, zombie_type: &str) -> Option<&ZombieDefinition> {
        self.definitions.get(zombie_type)
    }

    /// Load every `*.ron` file in `dir`, keyed by file stem. Bad files are
    /// logged and skipped.
    pub fn load_dir(&mut self, dir: &Path) -> usize {
        if !dir.exists() {
            warn!("Zombie definitions directory not found: {:?}", dir);
            return 0;
        }

        let Ok(entries) = fs::read_dir(dir) else {
            warn!("Failed to read zombie definitions directory");
            return 0;
        };

        let mut loaded = 0;
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.extension().is_some_and(|ext| ext == "ron") {
                continue;
            }

            let zombie_type = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("unknown")
                .to_string();

            match ZombieDefinition::load(&path) {
                Ok(definition) => {
                    info!("Loaded zombie definition: {} ({})", definition.name, zombie_type);
                    self.definitions.insert(zombie_type, definition);
                    loaded += 1;
                }
                Err(e) => error!("{}", e),
            }
        }
        loaded
    }
}

/// Load all zombie definitions from the assets/data/enemies/ directory.
pub fn load_zombie_definitions(mut registry: ResMut<ZombieRegistry>) {
    registry.load_dir(Path::new(DEFINITIONS_DIR));
    info!("Loaded {} zombie definitions", registry.definitions.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EnemyConfig {
        ZombieDefinition::default().config
    }

    #[test]
    fn default_definition_is_valid() {
        assert_eq!(config().validate(), Ok(()));
    }

    #[test]
    fn rejects_negative_cooldown() {
        let config = EnemyConfig {
            attack_cooldown: -1.0,
            ..config()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Negative {
                field: "attack_cooldown",
                value: -1.0
            })
        );
    }

    #[test]
    fn rejects_nan_range() {
        let config = EnemyConfig {
            detection_range: f32::NAN,
            ..config()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotFinite {
                field: "detection_range"
            })
        );
    }

    #[test]
    fn rejects_zero_health() {
        let config = EnemyConfig {
            max_health: 0.0,
            ..config()
        };
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveHealth(0.0)));
    }

    #[test]
    fn rejects_attack_range_past_detection() {
        let config = EnemyConfig {
            detection_range: 3.0,
            attack_range: 4.0,
            ..config()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::AttackRangeExceedsDetection { .. })
        ));
    }

    #[test]
    fn equal_ranges_are_allowed() {
        let config = EnemyConfig {
            detection_range: 2.0,
            attack_range: 2.0,
            ..config()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parses_definition_from_ron() {
        let source = r#"(
            name: "Runner",
            config: (
                detection_range: 15.0,
                attack_range: 1.5,
                max_health: 60.0,
                attack_cooldown: 1.0,
                stun_duration: 0.25,
            ),
            move_speed: 6.0,
            despawn_delay: 1.0,
        )"#;

        let definition = ZombieDefinition::from_ron_str("runner.ron", source).unwrap();
        assert_eq!(definition.name, "Runner");
        assert_eq!(definition.config.detection_range, 15.0);
        assert_eq!(definition.config.stun_duration, 0.25);
        assert_eq!(definition.move_speed, 6.0);
    }

    #[test]
    fn missing_config_field_is_a_parse_error() {
        let source = r#"(
            name: "Broken",
            config: (
                detection_range: 15.0,
                attack_range: 1.5,
                max_health: 60.0,
                attack_cooldown: 1.0,
            ),
            move_speed: 6.0,
            despawn_delay: 1.0,
        )"#;

        let err = ZombieDefinition::from_ron_str("broken.ron", source).unwrap_err();
        assert!(matches!(err, DataLoadError::ParseError { ref path, .. } if path == "broken.ron"));
    }

    #[test]
    fn invalid_config_is_reported_with_its_path() {
        let source = r#"(
            name: "Giant",
            config: (
                detection_range: 1.0,
                attack_range: 5.0,
                max_health: 500.0,
                attack_cooldown: 3.0,
                stun_duration: 0.1,
            ),
            move_speed: 1.0,
            despawn_delay: 4.0,
        )"#;

        let err = ZombieDefinition::from_ron_str("giant.ron", source).unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::InvalidDefinition {
                source: ConfigError::AttackRangeExceedsDetection { .. },
                ..
            }
        ));
    }

    #[test]
    fn rejects_negative_despawn_delay() {
        let definition = ZombieDefinition {
            despawn_delay: -1.0,
            ..ZombieDefinition::default()
        };
        assert_eq!(
            definition.validate(),
            Err(ConfigError::Negative {
                field: "despawn_delay",
                value: -1.0
            })
        );
    }

    #[test]
    fn rejects_nan_move_speed() {
        let definition = ZombieDefinition {
            move_speed: f32::NAN,
            ..ZombieDefinition::default()
        };
        assert_eq!(
            definition.validate(),
            Err(ConfigError::NotFinite { field: "move_speed" })
        );
    }

    #[test]
    fn negative_despawn_delay_in_ron_is_rejected() {
        let source = r#"(
            name: "Lingerer",
            config: (
                detection_range: 10.0,
                attack_range: 2.0,
                max_health: 100.0,
                attack_cooldown: 2.0,
                stun_duration: 0.5,
            ),
            move_speed: 3.5,
            despawn_delay: -1.0,
        )"#;

        let err = ZombieDefinition::from_ron_str("lingerer.ron", source).unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::InvalidDefinition {
                source: ConfigError::Negative { field: "despawn_delay", .. },
                ..
            }
        ));
    }

    #[test]
    fn shipped_definitions_load() {
        let mut registry = ZombieRegistry::default();
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFINITIONS_DIR);
        assert!(registry.load_dir(&dir) >= 1);
        assert_eq!(registry.get("zombie"), Some(&ZombieDefinition::default()));
    }

    #[test]
    fn missing_directory_loads_nothing() {
        let mut registry = ZombieRegistry::default();
        assert_eq!(registry.load_dir(Path::new("does/not/exist")), 0);
        assert!(registry.definitions.is_empty());
    }
}
