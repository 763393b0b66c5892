//! Equipment components
//!
//! # Архитектура
//!
//! **EquippedWeapon** — оружие в руках:
//! - Один слот (`Option<WeaponRef>`), None = безоружен
//! - Engagement очищает слот при выходе из боя
//!
//! **Arsenal** — всё оружие, которым владеет актор:
//! - Каждое оружие имеет `power` rating
//! - `Arsenal::strongest()` — ranking для "equip strongest weapon"
//! - Ranking живёт здесь, engagement controller про него не знает

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// WeaponRef
// ============================================================================

/// Opaque reference на оружие, которым владеет актор
///
/// # Examples
/// - "sword_iron"
/// - "bow_hunting"
/// - "dagger_rusty"
#[derive(Clone, Debug, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub struct WeaponRef(pub String);

impl From<&str> for WeaponRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// ============================================================================
// EquippedWeapon
// ============================================================================

/// Equipped weapon slot (максимум одно оружие)
#[derive(Component, Debug, Clone, Default, PartialEq, Eq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct EquippedWeapon(pub Option<WeaponRef>);

impl EquippedWeapon {
    pub fn empty() -> Self {
        Self(None)
    }

    pub fn holding(weapon: impl Into<WeaponRef>) -> Self {
        Self(Some(weapon.into()))
    }

    pub fn weapon(&self) -> Option<&WeaponRef> {
        self.0.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }
}

// ============================================================================
// Arsenal
// ============================================================================

/// Оружие во владении актора + его rating
#[derive(Clone, Debug, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub struct OwnedWeapon {
    pub weapon: WeaponRef,
    /// Чем больше, тем сильнее (damage-ish rating)
    pub power: u32,
}

/// Arsenal component (всё owned оружие)
#[derive(Component, Debug, Clone, Default, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct Arsenal {
    pub weapons: Vec<OwnedWeapon>,
}

impl Arsenal {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builder: добавить оружие
    pub fn with(mut self, weapon: impl Into<WeaponRef>, power: u32) -> Self {
        self.add(weapon, power);
        self
    }

    pub fn add(&mut self, weapon: impl Into<WeaponRef>, power: u32) {
        self.weapons.push(OwnedWeapon {
            weapon: weapon.into(),
            power,
        });
    }

    /// Самое сильное оружие (max power, при равенстве — первое в списке)
    pub fn strongest(&self) -> Option<&WeaponRef> {
        let mut best: Option<&OwnedWeapon> = None;
        for owned in &self.weapons {
            match best {
                Some(current) if current.power >= owned.power => {}
                _ => best = Some(owned),
            }
        }
        best.map(|owned| &owned.weapon)
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }
}

/// Equip strongest weapon из arsenal в slot
///
/// Пустой arsenal → слот остаётся пустым (актор дерётся кулаками).
pub fn equip_strongest(arsenal: &Arsenal, slot: &mut EquippedWeapon) {
    slot.0 = arsenal.strongest().cloned();
}

// ============================================================================
// Tests
// ============================================================================
