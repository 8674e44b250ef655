//! Unit - The stateful playable entity
//!
//! A unit composes its own accumulated stats, persistent buffs, class
//! bonuses and (while equipped) item bonuses into an effective stat view on
//! every read. Nothing derived is cached.

use crate::class::{ClassHandle, UnitClass};
use crate::config::{EXP_PER_LEVEL, MAX_LEVEL};
use crate::item::Equipable;
use crate::stats::CoreStatSpread;
use crate::types::UnitAttribute;
use thiserror::Error;

/// Experience could not be applied.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpError {
    #[error("unit is already at the level cap")]
    AtLevelCap,
}

/// A playable unit.
///
/// Construction fixes the growths, base attributes and class for the unit's
/// lifetime; everything else mutates through the leveling, buffing, damage
/// and equipment operations below.
pub struct Unit {
    /// Accumulated stats: base stats plus every level-up gain, and the
    /// current-hp bookkeeping moved by [`Unit::offset_hp`].
    stats: CoreStatSpread,
    /// Persistent (de)buffs, distinct from class and item bonuses.
    buffs: CoreStatSpread,
    /// Per-level stat gains applied on each level-up.
    growths: CoreStatSpread,
    rank: i32,
    level: i32,
    exp: i32,
    base_attributes: UnitAttribute,
    class: ClassHandle,
    held_item: Option<Box<dyn Equipable>>,
    equipped: bool,
}

impl Unit {
    /// Create a level 1 unit with no experience, no buffs and an empty item
    /// slot.
    pub fn new(
        base_stats: CoreStatSpread,
        growths: CoreStatSpread,
        attributes: UnitAttribute,
        class: ClassHandle,
        base_weapon_rank: i32,
    ) -> Self {
        Unit {
            stats: base_stats,
            buffs: CoreStatSpread::ZERO,
            growths,
            rank: base_weapon_rank,
            level: 1,
            exp: 0,
            base_attributes: attributes,
            class,
            held_item: None,
            equipped: false,
        }
    }

    pub fn rank(&self) -> i32 {
        self.rank
    }

    pub fn exp(&self) -> i32 {
        self.exp
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    /// The class this unit belongs to.
    pub fn class(&self) -> &UnitClass {
        &self.class
    }

    /// A shared handle to the class, for roster bookkeeping.
    pub fn class_handle(&self) -> ClassHandle {
        ClassHandle::clone(&self.class)
    }

    /// Whether the held item is currently active.
    pub fn is_equipped(&self) -> bool {
        self.equipped
    }

    /// Activate the held item. Does nothing if the slot is empty or the item
    /// is already active.
    ///
    /// Returns whether the unit is equipped after the operation.
    pub fn equip(&mut self) -> bool {
        if self.held_item.is_some() {
            self.equipped = true;
        }
        self.equipped
    }

    /// Deactivate the held item. Does nothing if nothing is held or active.
    pub fn unequip(&mut self) {
        self.equipped = false;
    }

    /// Whether the given attributes form a subset of this unit's effective
    /// attributes.
    pub fn has_attributes(&self, attributes: UnitAttribute) -> bool {
        self.attributes().contains(attributes)
    }

    pub fn held_item(&self) -> Option<&dyn Equipable> {
        self.held_item.as_deref()
    }

    pub fn held_item_mut(&mut self) -> Option<&mut (dyn Equipable + 'static)> {
        self.held_item.as_deref_mut()
    }

    /// Take the held item out of the slot. The unit is left unequipped.
    pub fn drop_item(&mut self) -> Option<Box<dyn Equipable>> {
        self.equipped = false;
        self.held_item.take()
    }

    /// Put an item into the slot, returning the previously held item if the
    /// slot was occupied. The incoming item starts inactive; a swapped-out
    /// item is no longer equipped.
    pub fn give_item(&mut self, item: Box<dyn Equipable>) -> Option<Box<dyn Equipable>> {
        self.equipped = false;
        self.held_item.replace(item)
    }

    /// Like [`Unit::try_give_exp`], but collapses the level-cap failure into
    /// `false`.
    pub fn give_exp(&mut self, exp: i32) -> bool {
        self.try_give_exp(exp).unwrap_or(false)
    }

    /// Grant experience, leveling up at most once per call.
    ///
    /// The incoming amount is clamped to `0..=EXP_PER_LEVEL`. At the level
    /// cap nothing is applied and `Err(ExpError::AtLevelCap)` is returned.
    /// On a level-up the growths are added to the unit's stats and leftover
    /// experience beyond the threshold carries into the new level.
    ///
    /// Returns `Ok(true)` iff a level-up occurred.
    pub fn try_give_exp(&mut self, exp: i32) -> Result<bool, ExpError> {
        if self.level == MAX_LEVEL {
            return Err(ExpError::AtLevelCap);
        }

        self.exp += exp.clamp(0, EXP_PER_LEVEL);
        if self.exp < EXP_PER_LEVEL {
            return Ok(false);
        }

        self.exp -= EXP_PER_LEVEL;
        self.level += 1;
        self.stats += self.growths;
        Ok(true)
    }

    /// Effective stats: accumulated stats plus buffs, class bonuses and the
    /// held item's bonus while equipped. Recomputed on every call.
    pub fn stats(&self) -> CoreStatSpread {
        let item_bonus = match (&self.held_item, self.equipped) {
            (Some(item), true) => item.stat_bonus(),
            _ => CoreStatSpread::ZERO,
        };
        self.stats + self.buffs + self.class.stat_bonuses + item_bonus
    }

    /// Effective attributes: the unit's own plus its class's.
    pub fn attributes(&self) -> UnitAttribute {
        self.base_attributes | self.class.class_attributes
    }

    /// Whether this unit is out of combat. Happens when effective hp reaches
    /// zero.
    pub fn dead(&self) -> bool {
        self.stats().hp <= 0
    }

    /// Restore health or inflict damage, depending on the sign of `amount`.
    /// Effective hp cannot drop below zero.
    pub fn offset_hp(&mut self, amount: i32) {
        self.stats.hp += amount;
        let hp = self.stats().hp;
        if hp < 0 {
            self.stats.hp -= hp;
        }
    }

    /// Apply persistent (de)buffs.
    ///
    /// After application every non-hp effective stat is floored at 0 and
    /// effective hp at 1, so a max-hp debuff can never erase a unit
    /// outright. Damage through [`Unit::offset_hp`] can still reach exactly
    /// zero.
    ///
    /// The floor is evaluated against the stat composition at the moment of
    /// application. A bonus that later leaves (unequipping or dropping the
    /// held item) can take an effective stat back below the floor.
    pub fn buff(&mut self, modifier: CoreStatSpread) {
        self.buffs += modifier;

        let total = self.stats();
        self.buffs.hp += (1 - total.hp).max(0);
        self.buffs.atk += (-total.atk).max(0);
        self.buffs.def += (-total.def).max(0);
        self.buffs.res += (-total.res).max(0);
        self.buffs.luk += (-total.luk).max(0);
        self.buffs.skl += (-total.skl).max(0);
        self.buffs.spd += (-total.spd).max(0);
    }
}
