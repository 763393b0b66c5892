//! Engagement events
//!
//! # Architecture
//!
//! **Input (scripted entry points):**
//! - `EnterCombatRequest` → `EngagementController::enter_combat`
//! - `ExitCombatRequest` → `EngagementController::exit_combat`
//!
//! **Output:**
//! - `EngagementChanged` — каждый реальный переход combat mode
//!   (per-tick sweep или scripted request)

use bevy::prelude::*;

/// Явный вход в бой (scripted event, cutscene, trap)
///
/// `reason` только для диагностики, на поведение не влияет.
#[derive(Event, Clone, Debug)]
pub struct EnterCombatRequest {
    pub entity: Entity,
    pub reason: String,
}

impl EnterCombatRequest {
    pub fn new(entity: Entity, reason: impl Into<String>) -> Self {
        Self {
            entity,
            reason: reason.into(),
        }
    }
}

/// Явный выход из боя (оружие остаётся в руках)
#[derive(Event, Clone, Debug)]
pub struct ExitCombatRequest {
    pub entity: Entity,
}

/// Combat mode актора изменился
#[derive(Event, Clone, Debug, PartialEq)]
pub struct EngagementChanged {
    pub entity: Entity,
    /// Новое значение combat mode
    pub engaged: bool,
    /// Intent label ("attack", "flee", ...) или reason scripted request'а
    pub reason: String,
}
