//! Prelude module for convenient imports
//!
//! ```rust
//! use unit_core::prelude::*;
//! ```

// Core types
pub use crate::stats::CoreStatSpread;
pub use crate::types::{MovementType, UnitAttribute, WeaponType};

// Classes
pub use crate::class::{ClassHandle, ClassId, ClassRegistry, UnitClass};

// Units and items
pub use crate::item::{Equipable, Weapon};
pub use crate::unit::{ExpError, Unit};

// Config
pub use crate::config::{default_classes, EXP_PER_LEVEL, MAX_INVENTORY_SIZE, MAX_LEVEL};
