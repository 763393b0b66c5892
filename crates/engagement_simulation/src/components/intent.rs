//! Intent — что decision logic актора выбрала на этот тик
//!
//! Intent производит внешний AI (jobs, reactions), мы его только читаем.
//! Для engagement значимы только `attack` и `flee`, всё остальное = non-combat.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Действие intent'а (open-ended label set)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum IntentAction {
    Attack,
    /// Flee — тоже combat (defensive stance)
    Flee,
    Follow,
    Goto,
    StayNear,
    /// Любой label, неизвестный этому crate
    Other(String),
}

impl IntentAction {
    /// Parse label → action (unknown labels сохраняются как `Other`)
    pub fn from_label(label: &str) -> Self {
        match label {
            "attack" => IntentAction::Attack,
            "flee" => IntentAction::Flee,
            "follow" => IntentAction::Follow,
            "goto" => IntentAction::Goto,
            "stay_near" => IntentAction::StayNear,
            other => IntentAction::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            IntentAction::Attack => "attack",
            IntentAction::Flee => "flee",
            IntentAction::Follow => "follow",
            IntentAction::Goto => "goto",
            IntentAction::StayNear => "stay_near",
            IntentAction::Other(label) => label,
        }
    }

    /// Требует ли действие combat mode
    pub fn is_combat(&self) -> bool {
        matches!(self, IntentAction::Attack | IntentAction::Flee)
    }
}

/// Текущий intent актора
///
/// Отсутствие компонента = нет intent'а (non-combat).
#[derive(Component, Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct Intent {
    pub action: IntentAction,
    /// Цель (Entity не переживает save/load, поэтому не сериализуется)
    #[serde(skip)]
    pub target: Option<Entity>,
    /// Почему выбран intent (memory, строка)
    pub reason: Option<String>,
    /// Тик начала (для timeout'ов в decision logic)
    pub started_tick: Option<u64>,
}

impl Intent {
    pub fn new(action: IntentAction) -> Self {
        Self {
            action,
            target: None,
            reason: None,
            started_tick: None,
        }
    }

    pub fn attack(target: Entity) -> Self {
        Self::new(IntentAction::Attack).with_target(target)
    }

    pub fn flee(from: Entity) -> Self {
        Self::new(IntentAction::Flee).with_target(from)
    }

    pub fn with_target(mut self, target: Entity) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn started_at(mut self, tick: u64) -> Self {
        self.started_tick = Some(tick);
        self
    }

    pub fn is_combat(&self) -> bool {
        self.action.is_combat()
    }
}
