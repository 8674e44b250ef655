//! CoreStatSpread - The additive seven-stat bundle
//!
//! A single spread type covers base stats, growths, buffs, class bonuses and
//! item bonuses: everything that contributes to a unit's effective stats is
//! one of these, and composition is plain componentwise addition.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// Centralized definition of core stats.
///
/// Addition is componentwise and commutative, with [`CoreStatSpread::ZERO`]
/// as the identity. No clamping or validation happens here; bounds are
/// enforced by [`Unit`](crate::unit::Unit) where they have meaning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreStatSpread {
    pub hp: i32,
    pub atk: i32,
    pub def: i32,
    pub res: i32,
    pub luk: i32,
    pub skl: i32,
    pub spd: i32,
}

impl CoreStatSpread {
    /// The all-zero spread, identity for addition.
    pub const ZERO: CoreStatSpread = CoreStatSpread {
        hp: 0,
        atk: 0,
        def: 0,
        res: 0,
        luk: 0,
        skl: 0,
        spd: 0,
    };

    /// Create a spread from explicit values.
    pub const fn new(hp: i32, atk: i32, def: i32, res: i32, luk: i32, skl: i32, spd: i32) -> Self {
        CoreStatSpread {
            hp,
            atk,
            def,
            res,
            luk,
            skl,
            spd,
        }
    }
}

impl Add for CoreStatSpread {
    type Output = CoreStatSpread;

    fn add(self, rhs: CoreStatSpread) -> CoreStatSpread {
        CoreStatSpread {
            hp: self.hp + rhs.hp,
            atk: self.atk + rhs.atk,
            def: self.def + rhs.def,
            res: self.res + rhs.res,
            luk: self.luk + rhs.luk,
            skl: self.skl + rhs.skl,
            spd: self.spd + rhs.spd,
        }
    }
}

impl AddAssign for CoreStatSpread {
    fn add_assign(&mut self, rhs: CoreStatSpread) {
        *self = *self + rhs;
    }
}
