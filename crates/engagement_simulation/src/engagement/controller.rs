//! Engagement rules (pure logic, без ECS)
//!
//! Controller не хранит состояния: каждый вызов — функция от
//! (actor flags, intent). Хост передаёт акторов явно через `EngagementActor`.

use crate::components::{IntentAction, DEFAULT_HEALTH};

/// Capability interface, который хост реализует для своего типа актора
///
/// Defaults (health = 100, combat mode = false) применяет controller,
/// поэтому хост возвращает `None` для отсутствующих полей.
pub trait EngagementActor {
    /// Неизменяемая классификация: игрок или NPC
    fn is_player_controlled(&self) -> bool;

    /// Текущее здоровье (`None` → `DEFAULT_HEALTH`)
    fn health(&self) -> Option<u32>;

    /// Combat mode flag (`None` → false)
    fn combat_mode(&self) -> Option<bool>;

    fn set_combat_mode(&mut self, engaged: bool);

    /// Action текущего intent'а (`None` = нет intent'а)
    fn intent_action(&self) -> Option<&IntentAction>;

    /// Equip самое сильное owned оружие (ranking — забота актора)
    fn equip_strongest_weapon(&mut self);

    fn clear_equipped_weapon(&mut self);
}

/// Почему актор пропущен per-tick sweep'ом
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    PlayerControlled,
    Dead,
}

/// Результат обработки одного актора
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngagementTransition {
    Skipped(SkipReason),
    Unchanged,
    /// false → true (для NPC вызван equip)
    Entered,
    /// true → false
    Exited,
}

impl EngagementTransition {
    pub fn is_change(&self) -> bool {
        matches!(self, EngagementTransition::Entered | EngagementTransition::Exited)
    }
}

/// Engagement controller
///
/// Переводит intent в combat mode и держит оружие в соответствии с флагом.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngagementController;

impl EngagementController {
    pub fn new() -> Self {
        Self
    }

    /// Per-tick sweep по всем акторам
    ///
    /// Акторы независимы: порядок обработки не влияет на результат.
    pub fn update_engagement<'a, A, I>(&self, actors: I)
    where
        A: EngagementActor + 'a,
        I: IntoIterator<Item = &'a mut A>,
    {
        for actor in actors {
            self.update_actor(actor);
        }
    }

    /// Один шаг sweep'а для одного актора
    pub fn update_actor<A: EngagementActor + ?Sized>(&self, actor: &mut A) -> EngagementTransition {
        // Игрок управляет combat mode сам (input handling хоста)
        if actor.is_player_controlled() {
            return EngagementTransition::Skipped(SkipReason::PlayerControlled);
        }

        if actor.health().unwrap_or(DEFAULT_HEALTH) == 0 {
            return EngagementTransition::Skipped(SkipReason::Dead);
        }

        let wants_combat = actor
            .intent_action()
            .is_some_and(IntentAction::is_combat);

        match (wants_combat, self.is_in_combat(&*actor)) {
            (true, false) => {
                actor.set_combat_mode(true);
                actor.equip_strongest_weapon();
                EngagementTransition::Entered
            }
            (false, true) => {
                actor.set_combat_mode(false);
                actor.clear_equipped_weapon();
                EngagementTransition::Exited
            }
            // Уже в нужном состоянии — повторный equip не нужен
            _ => EngagementTransition::Unchanged,
        }
    }

    /// Явный вход в бой (scripted events и т.п.)
    ///
    /// `_reason` сейчас не влияет на поведение; хост логирует его сам.
    /// Игрок флаг получает, но оружие не трогаем (equipment у него ручной).
    pub fn enter_combat<A: EngagementActor + ?Sized>(
        &self,
        actor: &mut A,
        _reason: &str,
    ) -> EngagementTransition {
        if self.is_in_combat(&*actor) {
            return EngagementTransition::Unchanged;
        }

        actor.set_combat_mode(true);

        if !actor.is_player_controlled() {
            actor.equip_strongest_weapon();
        }

        EngagementTransition::Entered
    }

    /// Явный выход из боя
    ///
    /// NOTE: в отличие от `update_actor`, оружие НЕ снимается.
    /// Асимметрия унаследована, не унифицировать без решения product owner'а.
    pub fn exit_combat<A: EngagementActor + ?Sized>(&self, actor: &mut A) -> EngagementTransition {
        if !self.is_in_combat(&*actor) {
            return EngagementTransition::Unchanged;
        }

        actor.set_combat_mode(false);
        EngagementTransition::Exited
    }

    pub fn is_in_combat<A: EngagementActor + ?Sized>(&self, actor: &A) -> bool {
        actor.combat_mode().unwrap_or(false)
    }
}
