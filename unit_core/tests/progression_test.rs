//! Integration test: Load classes -> Build units -> Level, equip and fight
//!
//! This test validates the full flow from class-data loading through a
//! unit's progression and equipment lifecycle.

use unit_core::prelude::*;

/// Build a roster registry from the shipped class data.
fn registry_with_defaults() -> ClassRegistry {
    let mut registry = ClassRegistry::new();
    default_classes(&mut registry).expect("default class data should parse");
    registry
}

fn recruit(registry: &ClassRegistry, class_id: &str) -> Unit {
    Unit::new(
        CoreStatSpread::new(17, 5, 4, 3, 6, 7, 8),
        CoreStatSpread::new(2, 1, 1, 0, 1, 1, 1),
        UnitAttribute::empty(),
        registry.get(&class_id.into()).unwrap(),
        1,
    )
}

#[test]
fn campaign_progression_flow() {
    let registry = registry_with_defaults();
    let mut unit = recruit(&registry, "pegasus_knight");

    assert_eq!(unit.level(), 1);
    assert!(unit.has_attributes(UnitAttribute::WINGED));
    assert_eq!(unit.class().movement_type, MovementType::Flying);

    // A few maps worth of experience.
    assert!(!unit.give_exp(60));
    assert!(unit.give_exp(60));
    assert_eq!(unit.level(), 2);
    assert_eq!(unit.exp(), 20);

    // One level of growths landed in the effective stats.
    let expected = CoreStatSpread::new(17, 5, 4, 3, 6, 7, 8)
        + CoreStatSpread::new(2, 1, 1, 0, 1, 1, 1)
        + unit.class().stat_bonuses;
    assert_eq!(unit.stats(), expected);
}

#[test]
fn equipment_lifecycle_against_class_eligibility() {
    let registry = registry_with_defaults();
    let mut unit = recruit(&registry, "pegasus_knight");

    let lance = Weapon::new(
        "Iron Lance",
        WeaponType::LANCE,
        CoreStatSpread::new(0, 4, 0, 0, 0, 0, -1),
    );
    assert!(unit.class().can_wield(lance.weapon_type));

    let axe = Weapon::new("Iron Axe", WeaponType::AXE, CoreStatSpread::new(0, 6, 0, 0, 0, -1, -2));
    assert!(!unit.class().can_wield(axe.weapon_type));

    let bare = unit.stats();
    assert!(unit.give_item(Box::new(lance)).is_none());
    assert!(unit.equip());
    assert_eq!(unit.stats().atk, bare.atk + 4);
    assert_eq!(unit.stats().spd, bare.spd - 1);

    // Trading for the axe hands the lance back and leaves the axe inactive.
    let traded = unit.give_item(Box::new(axe)).unwrap();
    assert_eq!(traded.weapon_type(), WeaponType::LANCE);
    assert!(!unit.is_equipped());
    assert_eq!(unit.stats(), bare);

    let dropped = unit.drop_item().unwrap();
    assert_eq!(dropped.weapon_type(), WeaponType::AXE);
    assert!(unit.held_item().is_none());
    assert!(!unit.is_equipped());
}

#[test]
fn grinding_to_the_cap_then_falling_in_battle() {
    let registry = registry_with_defaults();
    let mut unit = recruit(&registry, "knight");

    for expected_level in 2..=MAX_LEVEL {
        assert!(unit.give_exp(EXP_PER_LEVEL));
        assert_eq!(unit.level(), expected_level);
    }
    assert_eq!(unit.try_give_exp(50), Err(ExpError::AtLevelCap));
    assert_eq!(unit.level(), MAX_LEVEL);

    // 19 level-ups of +2 hp on a 17 hp base, plus the knight's +4.
    assert_eq!(unit.stats().hp, 17 + 19 * 2 + 4);

    unit.offset_hp(-(17 + 19 * 2 + 4));
    assert_eq!(unit.stats().hp, 0);
    assert!(unit.dead());

    // A healer brings the knight back into the fight.
    unit.offset_hp(10);
    assert!(!unit.dead());
}

#[test]
fn debuffs_cannot_erase_a_unit() {
    let registry = registry_with_defaults();
    let mut unit = recruit(&registry, "manakete");

    unit.buff(CoreStatSpread::new(-999, 0, 0, 0, 0, 0, 0));
    assert_eq!(unit.stats().hp, 1);
    assert!(!unit.dead());

    unit.buff(CoreStatSpread::new(0, -999, -999, -999, -999, -999, -999));
    let total = unit.stats();
    assert_eq!(
        (total.atk, total.def, total.res, total.luk, total.skl, total.spd),
        (0, 0, 0, 0, 0, 0)
    );
}

#[test]
fn mixed_attribute_units() {
    let registry = registry_with_defaults();

    // A dragon child in a flying class carries both sets of traits.
    let tiki = Unit::new(
        CoreStatSpread::new(18, 7, 6, 8, 9, 5, 6),
        CoreStatSpread::new(2, 1, 1, 1, 1, 1, 1),
        UnitAttribute::DRACONIC,
        registry.get(&"pegasus_knight".into()).unwrap(),
        1,
    );

    assert!(tiki.has_attributes(UnitAttribute::WINGED | UnitAttribute::DRACONIC));
    assert!(!tiki.has_attributes(UnitAttribute::BEASTIAL));
    assert_eq!(
        tiki.attributes(),
        UnitAttribute::WINGED | UnitAttribute::DRACONIC
    );
}
