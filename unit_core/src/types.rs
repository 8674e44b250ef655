//! Core types shared across the unit model

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Movement category assigned per class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementType {
    Flying,
    Cavalry,
    Infantry,
}

bitflags! {
    /// Character traits, partially granted by the unit's class.
    ///
    /// Flags combine bitwise, so a single unit can carry several at once:
    /// a dragon rider on a pegasus is both `WINGED` and `DRACONIC`.
    /// `UnitAttribute::empty()` is the trait-less unit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct UnitAttribute: u8 {
        const WINGED   = 0x01;
        const ARMORED  = 0x02;
        const DRACONIC = 0x04;
        const BEASTIAL = 0x08;
    }
}

bitflags! {
    /// Weapon categories.
    ///
    /// A class declares the set of categories it can wield as a mask; an
    /// equipable item reports the single category it belongs to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct WeaponType: u8 {
        const SWORD = 0x01;
        const LANCE = 0x02;
        const AXE   = 0x04;
        const BOW   = 0x08;
        const TOME  = 0x10;
        const STAFF = 0x20;
    }
}
