//! Class definition loading

use super::ConfigError;
use crate::class::{ClassHandle, ClassId, ClassRegistry, UnitClass};
use crate::stats::CoreStatSpread;
use crate::types::{MovementType, UnitAttribute, WeaponType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Container for class configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassesConfig {
    #[serde(rename = "classes")]
    pub classes: Vec<ClassConfig>,
}

/// A single class archetype as written in data files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassConfig {
    pub id: String,
    #[serde(default)]
    pub stat_bonuses: CoreStatSpread,
    pub movement_type: MovementType,
    #[serde(default)]
    pub attributes: Vec<AttributeName>,
    #[serde(default)]
    pub weapon_types: Vec<WeaponTypeName>,
}

/// Attribute flag names accepted in data files
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeName {
    Winged,
    Armored,
    Draconic,
    Beastial,
}

impl From<AttributeName> for UnitAttribute {
    fn from(name: AttributeName) -> Self {
        match name {
            AttributeName::Winged => UnitAttribute::WINGED,
            AttributeName::Armored => UnitAttribute::ARMORED,
            AttributeName::Draconic => UnitAttribute::DRACONIC,
            AttributeName::Beastial => UnitAttribute::BEASTIAL,
        }
    }
}

/// Weapon category names accepted in data files
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponTypeName {
    Sword,
    Lance,
    Axe,
    Bow,
    Tome,
    Staff,
}

impl From<WeaponTypeName> for WeaponType {
    fn from(name: WeaponTypeName) -> Self {
        match name {
            WeaponTypeName::Sword => WeaponType::SWORD,
            WeaponTypeName::Lance => WeaponType::LANCE,
            WeaponTypeName::Axe => WeaponType::AXE,
            WeaponTypeName::Bow => WeaponType::BOW,
            WeaponTypeName::Tome => WeaponType::TOME,
            WeaponTypeName::Staff => WeaponType::STAFF,
        }
    }
}

impl ClassConfig {
    fn build(&self) -> UnitClass {
        let attributes = self
            .attributes
            .iter()
            .fold(UnitAttribute::empty(), |acc, name| acc | (*name).into());
        let weapon_types = self
            .weapon_types
            .iter()
            .fold(WeaponType::empty(), |acc, name| acc | (*name).into());
        UnitClass::new(self.stat_bonuses, self.movement_type, attributes, weapon_types)
    }
}

/// Load class configurations from a TOML file into a registry
pub fn load_class_configs(
    path: &Path,
    registry: &mut ClassRegistry,
) -> Result<HashMap<ClassId, ClassHandle>, ConfigError> {
    let config: ClassesConfig = super::load_toml(path)?;
    register_all(config, registry)
}

/// Load class configurations from a TOML string into a registry
pub fn parse_class_configs(
    content: &str,
    registry: &mut ClassRegistry,
) -> Result<HashMap<ClassId, ClassHandle>, ConfigError> {
    let config: ClassesConfig = super::parse_toml(content)?;
    register_all(config, registry)
}

fn register_all(
    config: ClassesConfig,
    registry: &mut ClassRegistry,
) -> Result<HashMap<ClassId, ClassHandle>, ConfigError> {
    let mut map = HashMap::new();
    for class in config.classes {
        let id = ClassId::from(class.id.clone());
        let handle = registry.register(id.clone(), class.build())?;
        map.insert(id, handle);
    }
    Ok(map)
}

/// Register the default class archetypes
pub fn default_classes(
    registry: &mut ClassRegistry,
) -> Result<HashMap<ClassId, ClassHandle>, ConfigError> {
    let toml = include_str!("../../config/classes.toml");
    parse_class_configs(toml, registry)
}
