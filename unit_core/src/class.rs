//! UnitClass - Shared, immutable class archetypes and their registry

use crate::stats::CoreStatSpread;
use crate::types::{MovementType, UnitAttribute, WeaponType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Identifier for a registered class
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassId(pub String);

impl From<&str> for ClassId {
    fn from(s: &str) -> Self {
        ClassId(s.to_string())
    }
}

impl From<String> for ClassId {
    fn from(s: String) -> Self {
        ClassId(s)
    }
}

/// Shared handle to a registered class.
///
/// Units hold one of these for their whole lifetime, which keeps the class
/// alive for at least as long as any unit referencing it.
pub type ClassHandle = Arc<UnitClass>;

/// A class archetype: stat bonuses, movement category, innate attributes and
/// the weapon categories its members can wield.
///
/// Classes are built once when a campaign's data loads and never mutated
/// afterwards; every unit of the class reads the same instance through a
/// [`ClassHandle`].
#[derive(Debug)]
pub struct UnitClass {
    pub stat_bonuses: CoreStatSpread,
    pub movement_type: MovementType,
    pub class_attributes: UnitAttribute,
    pub usable_weapon_types: WeaponType,
}

impl UnitClass {
    pub fn new(
        stat_bonuses: CoreStatSpread,
        movement_type: MovementType,
        class_attributes: UnitAttribute,
        usable_weapon_types: WeaponType,
    ) -> Self {
        UnitClass {
            stat_bonuses,
            movement_type,
            class_attributes,
            usable_weapon_types,
        }
    }

    /// Whether members of this class can wield the given weapon category.
    pub fn can_wield(&self, weapon_type: WeaponType) -> bool {
        self.usable_weapon_types.contains(weapon_type)
    }
}

/// Class registry error
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("class '{0}' is already registered")]
    DuplicateClass(String),
    #[error("unknown class '{0}'")]
    UnknownClass(String),
}

/// Owns every class definition for the lifetime of a campaign.
///
/// There is deliberately no removal API: once registered, a class stays for
/// the registry's lifetime, and handles keep it alive even past that.
#[derive(Debug, Default)]
pub struct ClassRegistry {
    classes: HashMap<ClassId, ClassHandle>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        ClassRegistry::default()
    }

    /// Register a class under an id, returning a handle to it.
    pub fn register(
        &mut self,
        id: impl Into<ClassId>,
        class: UnitClass,
    ) -> Result<ClassHandle, RegistryError> {
        let id = id.into();
        if self.classes.contains_key(&id) {
            return Err(RegistryError::DuplicateClass(id.0));
        }
        let handle = Arc::new(class);
        self.classes.insert(id, Arc::clone(&handle));
        Ok(handle)
    }

    /// Look up a registered class.
    pub fn get(&self, id: &ClassId) -> Result<ClassHandle, RegistryError> {
        self.classes
            .get(id)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownClass(id.0.clone()))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
