//! unit_core - Unit progression and combat statistics for turn-based SRPGs
//!
//! This library provides:
//! - CoreStatSpread: the additive seven-stat bundle shared by bases, growths,
//!   buffs and bonuses
//! - UnitAttribute / MovementType / WeaponType: trait flags and per-class
//!   classifications
//! - UnitClass + ClassRegistry: shared, immutable class archetypes
//! - Unit: the stateful entity composing all of the above into effective
//!   stats, with leveling and a single-item equipment slot

pub mod class;
pub mod config;
pub mod item;
pub mod prelude;
pub mod stats;
pub mod types;
pub mod unit;

// Re-export core types for convenience
pub use class::{ClassHandle, ClassId, ClassRegistry, RegistryError, UnitClass};
pub use config::{default_classes, ConfigError, EXP_PER_LEVEL, MAX_INVENTORY_SIZE, MAX_LEVEL};
pub use item::{Equipable, Weapon};
pub use stats::CoreStatSpread;
pub use types::{MovementType, UnitAttribute, WeaponType};
pub use unit::{ExpError, Unit};
