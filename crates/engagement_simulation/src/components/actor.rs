//! Базовые компоненты акторов: Actor, Health

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::{Arsenal, CombatMode, EquippedWeapon};

/// Актор (NPC или игрок) — всё, что участвует в engagement
///
/// Через Required Components автоматически получает Health, CombatMode,
/// EquippedWeapon и Arsenal. Если хост их потом удалит, engagement применяет defaults.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
#[require(Health, CombatMode, EquippedWeapon, Arsenal)]
pub struct Actor {
    /// Display name (в логах engagement рядом с Entity)
    pub name: String,
}

impl Actor {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Здоровье по умолчанию, если у актора нет Health (treat as alive)
pub const DEFAULT_HEALTH: u32 = 100;

/// Здоровье актора
///
/// Инвариант: 0 ≤ current ≤ max
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(DEFAULT_HEALTH)
    }
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Health с текущим значением ниже max (раненый актор)
    pub fn with_current(current: u32, max: u32) -> Self {
        Self {
            current: current.min(max),
            max,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }
}
