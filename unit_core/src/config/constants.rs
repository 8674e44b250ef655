//! Engine-level progression constants

/// Experience required to advance one level.
pub const EXP_PER_LEVEL: i32 = 100;

/// Hard level cap; experience gained at this level is rejected.
pub const MAX_LEVEL: i32 = 20;

/// Planned inventory capacity. The current unit model manages a single held
/// item; this sizes the full inventory once multi-slot management lands.
pub const MAX_INVENTORY_SIZE: usize = 5;
