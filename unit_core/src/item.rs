//! Equipable - The held-item capability consumed by units

use crate::stats::CoreStatSpread;
use crate::types::WeaponType;
use serde::{Deserialize, Serialize};

/// Trait for anything a unit can hold in its item slot.
///
/// Item generation, durability and trade value live outside this crate; a
/// unit only cares about the additive stat contribution while the item is
/// equipped and the weapon category for eligibility checks.
pub trait Equipable: Send + Sync {
    /// Additive stat contribution while the item is equipped.
    fn stat_bonus(&self) -> CoreStatSpread;

    /// The weapon category, compared against a class's usable set.
    fn weapon_type(&self) -> WeaponType;
}

/// A basic named weapon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub weapon_type: WeaponType,
    #[serde(default)]
    pub stat_bonus: CoreStatSpread,
}

impl Weapon {
    pub fn new(name: impl Into<String>, weapon_type: WeaponType, stat_bonus: CoreStatSpread) -> Self {
        Weapon {
            name: name.into(),
            weapon_type,
            stat_bonus,
        }
    }
}

impl Equipable for Weapon {
    fn stat_bonus(&self) -> CoreStatSpread {
        self.stat_bonus
    }

    fn weapon_type(&self) -> WeaponType {
        self.weapon_type
    }
}
